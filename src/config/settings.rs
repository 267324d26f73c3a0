//! User settings for taxbook
//!
//! Holds display preferences and the defaults used when a caller does not
//! pick a depreciation method explicitly.

use serde::{Deserialize, Serialize};

use super::paths::TaxbookPaths;
use crate::error::{TaxbookError, TaxbookResult};
use crate::models::{DepreciationMethod, MethodKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when rendering amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Acceleration factor for the declining balance method (2.0 = 200%)
    #[serde(default = "default_declining_balance_factor")]
    pub declining_balance_factor: f64,

    /// Method used by [`Settings::default_method`]
    #[serde(default)]
    pub depreciation_method: MethodKind,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_declining_balance_factor() -> f64 {
    2.0
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            declining_balance_factor: default_declining_balance_factor(),
            depreciation_method: MethodKind::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &TaxbookPaths) -> TaxbookResult<Self> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| TaxbookError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents)
            .map_err(|e| TaxbookError::Config(format!("Failed to parse settings file: {}", e)))?;

        settings.validate()?;
        tracing::debug!(path = %settings_path.display(), "loaded settings");
        Ok(settings)
    }

    pub fn save(&self, paths: &TaxbookPaths) -> TaxbookResult<()> {
        self.validate()?;
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TaxbookError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TaxbookError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    pub fn validate(&self) -> TaxbookResult<()> {
        let factor = self.declining_balance_factor;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(TaxbookError::Config(format!(
                "declining_balance_factor must be positive (got {})",
                factor
            )));
        }
        Ok(())
    }

    /// Build the configured depreciation method
    ///
    /// `units` is only used by units of production.
    pub fn default_method(&self, units: u64) -> DepreciationMethod {
        match self.depreciation_method {
            MethodKind::StraightLine => DepreciationMethod::StraightLine,
            MethodKind::DecliningBalance => {
                DepreciationMethod::declining_balance(self.declining_balance_factor)
            }
            MethodKind::SumOfYearsDigits => DepreciationMethod::SumOfYearsDigits,
            MethodKind::UnitsOfProduction => DepreciationMethod::units_of_production(units),
        }
    }
}
