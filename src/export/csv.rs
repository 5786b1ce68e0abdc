//! CSV export of a budget overview
//!
//! Amounts are written as plain decimals ("1234.50") so spreadsheets can
//! sum them.

use std::io::Write;

use crate::error::{CrystalError, CrystalResult};
use crate::services::BudgetOverview;

fn export_error(e: csv::Error) -> CrystalError {
    CrystalError::Export(e.to_string())
}

/// Write one row per category
pub fn export_categories_csv<W: Write>(overview: &BudgetOverview, writer: W) -> CrystalResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Period",
            "Category",
            "Icon",
            "Allocated",
            "Spent",
            "Remaining",
            "Used %",
            "Status",
        ])
        .map_err(export_error)?;

    let period = overview.period.to_string();
    for row in &overview.categories {
        csv_writer
            .write_record([
                period.clone(),
                row.name.clone(),
                row.icon.clone(),
                row.budget.allocated.to_string(),
                row.budget.spent.to_string(),
                row.budget.remaining.to_string(),
                format!("{:.1}", row.usage_percent),
                row.status.label().to_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| CrystalError::Export(e.to_string()))?;
    Ok(())
}

/// Write one row per income source
pub fn export_sources_csv<W: Write>(overview: &BudgetOverview, writer: W) -> CrystalResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record([
            "Period",
            "Source",
            "Actual Income",
            "Income",
            "Allocated",
            "Spent",
            "Remaining",
            "Debt",
        ])
        .map_err(export_error)?;

    let period = overview.period.to_string();
    for row in &overview.sources {
        let summary = &row.summary;
        csv_writer
            .write_record([
                period.clone(),
                row.name.clone(),
                summary.actual_income.to_string(),
                summary.total_income.to_string(),
                summary.total_allocated.to_string(),
                summary.total_spent.to_string(),
                summary.remaining.to_string(),
                summary.debt.to_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| CrystalError::Export(e.to_string()))?;
    Ok(())
}
