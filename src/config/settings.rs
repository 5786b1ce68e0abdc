//! User settings for CrystalBudget
//!
//! Presentation preferences only. The budget figures are computed in one
//! canonical currency; the symbol here is applied when they are displayed.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::CrystalPaths;
use crate::error::CrystalError;

/// User settings for CrystalBudget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Hide categories with nothing allocated and nothing spent in overviews
    #[serde(default)]
    pub hide_empty_categories: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            hide_empty_categories: false,
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if no settings file exists
    ///
    /// Defaults are not written back; the caller decides when to persist.
    pub fn load_or_create(paths: &CrystalPaths) -> Result<Self, CrystalError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| CrystalError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| CrystalError::Config(format!("Failed to parse settings file: {}", e)))?;
        settings.validate()?;

        Ok(settings)
    }

    /// Check that every setting can be applied
    ///
    /// `date_format` must render a plain calendar date; time or zone
    /// specifiers and unknown `%` sequences are rejected.
    pub fn validate(&self) -> Result<(), CrystalError> {
        let mut rendered = String::new();
        let sample = NaiveDate::default();

        write!(rendered, "{}", sample.format(&self.date_format)).map_err(|_| {
            CrystalError::Config(format!("Invalid date format '{}'", self.date_format))
        })
    }

    pub fn save(&self, paths: &CrystalPaths) -> Result<(), CrystalError> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| CrystalError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CrystalError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
