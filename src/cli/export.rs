//! CLI command for exporting a budget overview

use chrono::Utc;
use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{CrystalError, CrystalResult};
use crate::export::{
    export_categories_csv, export_overview_json, export_overview_yaml, export_sources_csv,
    OverviewExport,
};
use crate::services::{BudgetService, PeriodService};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per category (or per source with --sources)
    Csv,
    /// JSON, the full overview
    Json,
    /// YAML, the full overview, human-readable
    Yaml,
}

/// Arguments for `crystal export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[arg(value_enum)]
    pub format: ExportFormat,

    /// Period (e.g. "2025-01", "last", "March")
    #[arg(short, long)]
    pub period: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// For CSV: export per-source rows instead of categories
    #[arg(long)]
    pub sources: bool,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    periods: &PeriodService,
    args: ExportArgs,
) -> CrystalResult<()> {
    let period = periods.parse_or_current(args.period.as_deref())?;
    let overview = BudgetService::new(storage.snapshot()).overview(&period);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                CrystalError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        ExportFormat::Csv if args.sources => export_sources_csv(&overview, &mut writer)?,
        ExportFormat::Csv => export_categories_csv(&overview, &mut writer)?,
        ExportFormat::Json => {
            export_overview_json(&OverviewExport::new(overview, Utc::now()), &mut writer)?
        }
        ExportFormat::Yaml => {
            export_overview_yaml(&OverviewExport::new(overview, Utc::now()), &mut writer)?
        }
    }

    writer
        .flush()
        .map_err(|e| CrystalError::Export(e.to_string()))?;

    if let Some(path) = &args.output {
        eprintln!("Budget for {} exported to: {}", period, path.display());
    }

    Ok(())
}
