//! Budget CLI commands
//!
//! Read-only views over the computed budget for a period.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_overview, format_source_summaries};
use crate::error::CrystalResult;
use crate::services::{BudgetService, PeriodService};
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show balances and per-category budgets for a period
    Overview {
        /// Period (e.g. "2025-01", "last", "March")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show per-source income, allocation and debt
    Sources {
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show the balance carried into a period
    Carryover {
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &Storage,
    settings: &Settings,
    periods: &PeriodService,
    cmd: BudgetCommands,
) -> CrystalResult<()> {
    let service = BudgetService::new(storage.snapshot());
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        BudgetCommands::Overview { period } => {
            let period = periods.parse_or_current(period.as_deref())?;
            let overview = service.overview(&period);
            print!("{}", format_overview(&overview, settings));
        }

        BudgetCommands::Sources { period } => {
            let period = periods.parse_or_current(period.as_deref())?;
            let overview = service.overview(&period);

            println!("Income sources for {}", period.label());
            println!("{}", format_source_summaries(&overview, settings));

            let in_debt: Vec<&str> = overview
                .sources
                .iter()
                .filter(|row| row.summary.is_in_debt())
                .map(|row| row.name.as_str())
                .collect();
            if !in_debt.is_empty() {
                println!();
                println!("Over-allocated: {}", in_debt.join(", "));
            }
        }

        BudgetCommands::Carryover { period } => {
            let period = periods.parse_or_current(period.as_deref())?;
            let carry_over = service.carry_over(&period);
            println!(
                "Carry-over into {}: {}",
                period.label(),
                carry_over.format_with_symbol(symbol)
            );
        }
    }

    Ok(())
}
