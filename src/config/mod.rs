//! Configuration module for taxbook
//!
//! - Path resolution for the settings file
//! - User settings persistence (currency symbol, depreciation defaults)

pub mod paths;
pub mod settings;

pub use paths::TaxbookPaths;
pub use settings::Settings;
