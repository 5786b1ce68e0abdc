//! Path management for CrystalBudget
//!
//! ## Path Resolution Order
//!
//! 1. `CRYSTAL_BUDGET_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`$XDG_CONFIG_HOME` or `~/.config` on
//!    Linux, `~/Library/Application Support` on macOS, `%APPDATA%` on
//!    Windows) joined with `crystal-budget`

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::CrystalError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "CRYSTAL_BUDGET_DATA_DIR";

const APP_DIR_NAME: &str = "crystal-budget";

/// Manages all paths used by CrystalBudget
#[derive(Debug, Clone)]
pub struct CrystalPaths {
    base_dir: PathBuf,
}

impl CrystalPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no override is set and the platform config
    /// directory cannot be determined.
    pub fn new() -> Result<Self, CrystalError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => BaseDirs::new()
                .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
                .ok_or_else(|| {
                    CrystalError::Config("Could not determine the config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use an explicit base directory (tests, `--data-dir`)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// `<base>/data/`
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// `<base>/config.json`
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// `<base>/data/snapshot.json`
    pub fn snapshot_file(&self) -> PathBuf {
        self.data_dir().join("snapshot.json")
    }

    /// Create the base and data directories
    pub fn ensure_directories(&self) -> Result<(), CrystalError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| CrystalError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| CrystalError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}
