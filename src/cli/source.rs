//! Income source CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::format_source_list;
use crate::error::{CrystalError, CrystalResult};
use crate::models::{IncomeFrequency, IncomeSource};
use crate::storage::Storage;

/// Income source subcommands
#[derive(Subcommand)]
pub enum SourceCommands {
    /// Add an income source
    Add {
        /// Source name
        name: String,
        /// Expected amount per period, used until income is recorded
        #[arg(short, long)]
        expected: Option<String>,
        /// Payment frequency (weekly, biweekly, monthly, quarterly, yearly, once)
        #[arg(short, long)]
        frequency: Option<String>,
        /// Display color (e.g. "#10b981")
        #[arg(long)]
        color: Option<String>,
    },

    /// List income sources
    List,
}

/// Handle an income source command
pub fn handle_source_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: SourceCommands,
) -> CrystalResult<()> {
    match cmd {
        SourceCommands::Add {
            name,
            expected,
            frequency,
            color,
        } => {
            let mut source = IncomeSource::new(name);

            if let Some(expected) = expected {
                source = source.with_expected(parse_amount(&expected, "expected amount")?);
            }
            if let Some(frequency) = frequency {
                let parsed = IncomeFrequency::parse(&frequency).ok_or_else(|| {
                    CrystalError::Validation(format!("Unknown frequency: {}", frequency))
                })?;
                source = source.with_frequency(parsed);
            }
            if let Some(color) = color {
                source = source.with_color(color);
            }

            let source = storage.add_income_source(source)?;
            storage.save()?;

            println!("Created income source: {}", source.name);
            if let Some(expected) = source.expected_amount {
                println!(
                    "  Expected: {}",
                    expected.format_with_symbol(&settings.currency_symbol)
                );
            }
            println!("  ID: {}", source.id);
        }

        SourceCommands::List => {
            println!(
                "{}",
                format_source_list(
                    &storage.snapshot().income_sources,
                    &settings.currency_symbol
                )
            );
        }
    }

    Ok(())
}
