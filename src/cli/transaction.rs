//! Income and expense CLI commands

use clap::Subcommand;

use super::{parse_amount, parse_date};
use crate::config::Settings;
use crate::error::{CrystalError, CrystalResult};
use crate::models::{Expense, Income};
use crate::services::PeriodService;
use crate::storage::Storage;

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income from a source
    Add {
        /// Income source name or ID
        source: String,
        /// Amount received (e.g. "2500" or "2500.00")
        amount: String,
        /// Date received (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List income recorded in a period
    List {
        /// Period (e.g. "2025-01", "last", "March")
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense against a category
    Add {
        /// Category name or ID
        category: String,
        /// Amount spent
        amount: String,
        /// Date spent (YYYY-MM-DD, default today)
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },

    /// List expenses recorded in a period
    List {
        #[arg(short, long)]
        period: Option<String>,
    },
}

pub fn handle_income_command(
    storage: &mut Storage,
    settings: &Settings,
    periods: &PeriodService,
    cmd: IncomeCommands,
) -> CrystalResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            date,
            description,
        } => {
            let source = storage
                .snapshot()
                .find_source(&source)
                .ok_or_else(|| CrystalError::source_not_found(&source))?;
            let source_name = source.name.clone();

            let mut income = Income::new(
                source.id,
                parse_amount(&amount, "amount")?,
                parse_date(date.as_deref(), periods.today())?,
            );
            if let Some(description) = description {
                income = income.with_description(description);
            }

            let income = storage.add_income(income)?;
            storage.save()?;

            println!(
                "Recorded income: {} from {} on {}",
                income.amount.format_with_symbol(symbol),
                source_name,
                income.date.format(&settings.date_format)
            );
        }

        IncomeCommands::List { period } => {
            let period = periods.parse_or_current(period.as_deref())?;
            let snapshot = storage.snapshot();
            let incomes = snapshot.incomes_in(&period);

            if incomes.is_empty() {
                println!("No income recorded for {}.", period.label());
                return Ok(());
            }

            println!("Income for {}:", period.label());
            for income in &incomes {
                let source = snapshot
                    .source(income.source_id)
                    .map(|s| s.name.as_str())
                    .unwrap_or("Unknown");
                println!(
                    "  {}  {:<20} {:>14}  {}",
                    income.date.format(&settings.date_format),
                    source,
                    income.amount.format_with_symbol(symbol),
                    income.description.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}

pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    periods: &PeriodService,
    cmd: ExpenseCommands,
) -> CrystalResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            category,
            amount,
            date,
            description,
        } => {
            let category = storage
                .snapshot()
                .find_category(&category)
                .ok_or_else(|| CrystalError::category_not_found(&category))?;
            let category_name = category.name.clone();

            let mut expense = Expense::new(
                category.id,
                parse_amount(&amount, "amount")?,
                parse_date(date.as_deref(), periods.today())?,
            );
            if let Some(description) = description {
                expense = expense.with_description(description);
            }

            let expense = storage.add_expense(expense)?;
            storage.save()?;

            println!(
                "Recorded expense: {} in {} on {}",
                expense.amount.format_with_symbol(symbol),
                category_name,
                expense.date.format(&settings.date_format)
            );
        }

        ExpenseCommands::List { period } => {
            let period = periods.parse_or_current(period.as_deref())?;
            let snapshot = storage.snapshot();
            let expenses = snapshot.expenses_in(&period);

            if expenses.is_empty() {
                println!("No expenses recorded for {}.", period.label());
                return Ok(());
            }

            println!("Expenses for {}:", period.label());
            for expense in &expenses {
                let category = snapshot
                    .category(expense.category_id)
                    .map(|c| c.name.as_str())
                    .unwrap_or("Unknown");
                println!(
                    "  {}  {:<20} {:>14}  {}",
                    expense.date.format(&settings.date_format),
                    category,
                    expense.amount.format_with_symbol(symbol),
                    expense.description.as_deref().unwrap_or("")
                );
            }
        }
    }

    Ok(())
}
