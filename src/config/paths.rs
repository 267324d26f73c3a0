//! Path management for taxbook
//!
//! ## Path Resolution Order
//!
//! 1. `TAXBOOK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/taxbook` or `~/.config/taxbook`
//! 3. Windows: `%APPDATA%\taxbook`

use std::path::PathBuf;

use crate::error::TaxbookError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "TAXBOOK_DATA_DIR";

#[derive(Debug, Clone)]
pub struct TaxbookPaths {
    base_dir: PathBuf,
}

impl TaxbookPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, TaxbookError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) => PathBuf::from(custom),
            Err(_) => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Use a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn ensure_directories(&self) -> Result<(), TaxbookError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TaxbookError::Io(format!("Failed to create base directory: {}", e)))
    }

    /// Check whether settings have been saved before
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TaxbookError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                TaxbookError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("taxbook"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TaxbookError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TaxbookError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("taxbook"))
}
