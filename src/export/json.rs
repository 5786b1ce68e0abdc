//! JSON export of a budget overview

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{CrystalError, CrystalResult};
use crate::services::BudgetOverview;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A budget overview wrapped with export metadata
#[derive(Debug, Clone, Serialize)]
pub struct OverviewExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub overview: BudgetOverview,
}

impl OverviewExport {
    pub fn new(overview: BudgetOverview, exported_at: DateTime<Utc>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at,
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            overview,
        }
    }
}

/// Write the export as pretty-printed JSON
pub fn export_overview_json<W: Write>(export: &OverviewExport, writer: &mut W) -> CrystalResult<()> {
    serde_json::to_writer_pretty(&mut *writer, export)
        .map_err(|e| CrystalError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| CrystalError::Export(e.to_string()))?;
    Ok(())
}
