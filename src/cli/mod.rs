//! CLI command handlers
//!
//! Bridges the clap argument parsing with the storage and service layers.

pub mod budget;
pub mod category;
pub mod export;
pub mod source;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use source::{handle_source_command, SourceCommands};
pub use transaction::{
    handle_expense_command, handle_income_command, ExpenseCommands, IncomeCommands,
};

use chrono::NaiveDate;

use crate::error::{CrystalError, CrystalResult};
use crate::models::Money;

/// Parse a user-entered amount ("12.50", "$1,200")
pub(crate) fn parse_amount(input: &str, what: &str) -> CrystalResult<Money> {
    Money::parse(input).map_err(|e| CrystalError::Validation(format!("Invalid {}: {}", what, e)))
}

/// Parse an optional `YYYY-MM-DD` date, defaulting to `today`
pub(crate) fn parse_date(input: Option<&str>, today: NaiveDate) -> CrystalResult<NaiveDate> {
    match input {
        Some(date_str) => NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
            CrystalError::Validation(format!(
                "Invalid date format: {}. Use YYYY-MM-DD",
                date_str
            ))
        }),
        None => Ok(today),
    }
}
