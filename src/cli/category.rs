//! Category CLI commands

use clap::Subcommand;

use super::parse_amount;
use crate::config::Settings;
use crate::display::{describe_allocations, format_category_list};
use crate::error::{CrystalError, CrystalResult};
use crate::models::{Allocation, Category};
use crate::storage::{Snapshot, Storage};

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: String,
        /// Icon shown next to the name
        #[arg(short, long)]
        icon: Option<String>,
        /// Allocation rule as <source>:<amount> or <source>:<N>%; repeatable
        #[arg(short, long = "alloc", value_name = "SOURCE:AMOUNT")]
        allocations: Vec<String>,
    },

    /// List categories with their allocation rules
    List,
}

/// Parse `<source>:<amount>` or `<source>:<N>%` against known sources
///
/// The split is on the last `:` so source names may contain colons.
pub fn parse_allocation(spec: &str, snapshot: &Snapshot) -> CrystalResult<Allocation> {
    let (source_ref, value) = spec.rsplit_once(':').ok_or_else(|| {
        CrystalError::Validation(format!(
            "Invalid allocation '{}'. Use <source>:<amount> or <source>:<N>%",
            spec
        ))
    })?;

    let source = snapshot
        .find_source(source_ref)
        .ok_or_else(|| CrystalError::source_not_found(source_ref.trim()))?;

    let value = value.trim();
    match value.strip_suffix('%') {
        Some(percent) => {
            let percent: f64 = percent.trim().parse().map_err(|_| {
                CrystalError::Validation(format!("Invalid percentage: {}", value))
            })?;
            Ok(Allocation::percent(source.id, percent))
        }
        None => Ok(Allocation::amount(
            source.id,
            parse_amount(value, "allocation amount")?,
        )),
    }
}

/// Handle a category command
pub fn handle_category_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> CrystalResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        CategoryCommands::Add {
            name,
            icon,
            allocations,
        } => {
            let mut category = Category::new(name);
            if let Some(icon) = icon {
                category = category.with_icon(icon);
            }
            for spec in &allocations {
                category = category.with_allocation(parse_allocation(spec, storage.snapshot())?);
            }

            let category = storage.add_category(category)?;
            storage.save()?;

            println!("Created category: {} {}", category.icon, category.name);
            println!(
                "  Allocations: {}",
                describe_allocations(&category, storage.snapshot(), symbol)
            );
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List => {
            println!("{}", format_category_list(storage.snapshot(), symbol));
        }
    }

    Ok(())
}
