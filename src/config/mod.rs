//! Configuration for CrystalBudget
//!
//! - data directory resolution
//! - user settings persistence

pub mod paths;
pub mod settings;

pub use paths::CrystalPaths;
pub use settings::Settings;
