//! YAML export of a budget overview

use std::io::Write;

use super::json::OverviewExport;
use crate::error::{CrystalError, CrystalResult};

/// Write the export as YAML with a short header comment
pub fn export_overview_yaml<W: Write>(export: &OverviewExport, writer: &mut W) -> CrystalResult<()> {
    writeln!(writer, "# CrystalBudget overview for {}", export.overview.period)
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer))
        .map_err(|e| CrystalError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, export).map_err(|e| CrystalError::Export(e.to_string()))?;

    Ok(())
}
