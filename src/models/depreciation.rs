//! Depreciation methods, status and schedule entries
//!
//! Each [`DepreciationMethod`] variant carries its own parameters and computes
//! its per-call amount as a pure function of a [`DepreciationBasis`] snapshot.
//! Applying the amount to an asset is the job of
//! [`TangibleAsset`](super::tangible::TangibleAsset).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{TaxbookError, TaxbookResult};

/// Supported depreciation methods
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum DepreciationMethod {
    /// Equal share of (original value - salvage) per period
    StraightLine,
    /// Share of the remaining original basis, accelerated by `decline`
    /// (2.0 = double-declining). Salvage value is not part of the formula.
    DecliningBalance { decline: f64 },
    /// Original value times remaining life over the sum of the years' digits
    SumOfYearsDigits,
    /// Depreciable value per unit of capacity, times units produced
    UnitsOfProduction { units: u64 },
}

impl DepreciationMethod {
    pub fn declining_balance(decline: f64) -> Self {
        Self::DecliningBalance { decline }
    }

    pub fn double_declining() -> Self {
        Self::DecliningBalance { decline: 2.0 }
    }

    pub fn units_of_production(units: u64) -> Self {
        Self::UnitsOfProduction { units }
    }

    /// Build a method from its numeric code
    ///
    /// 0: straight line, 1: declining balance, 2: sum of the years' digits,
    /// 3: units of production. `decline` and `units` are only read by the
    /// methods that use them.
    pub fn from_code(code: u8, decline: f64, units: u64) -> TaxbookResult<Self> {
        match code {
            0 => Ok(Self::StraightLine),
            1 => Ok(Self::DecliningBalance { decline }),
            2 => Ok(Self::SumOfYearsDigits),
            3 => Ok(Self::UnitsOfProduction { units }),
            other => Err(TaxbookError::invalid_argument(format!(
                "unknown depreciation method code {} (expected 0-3)",
                other
            ))),
        }
    }

    pub fn kind(&self) -> MethodKind {
        match self {
            Self::StraightLine => MethodKind::StraightLine,
            Self::DecliningBalance { .. } => MethodKind::DecliningBalance,
            Self::SumOfYearsDigits => MethodKind::SumOfYearsDigits,
            Self::UnitsOfProduction { .. } => MethodKind::UnitsOfProduction,
        }
    }

    /// Whether the method spreads depreciation over elapsed periods
    pub fn is_time_based(&self) -> bool {
        !matches!(self, Self::UnitsOfProduction { .. })
    }

    /// Check the method's preconditions against the asset state
    pub fn validate(&self, basis: &DepreciationBasis, periods: u32) -> TaxbookResult<()> {
        if self.is_time_based() {
            if periods == 0 {
                return Err(TaxbookError::invalid_argument(
                    "periods must be at least 1 for time-based depreciation",
                ));
            }
            if basis.life == 0 {
                return Err(TaxbookError::invalid_argument(
                    "asset life must be at least 1 period for time-based depreciation",
                ));
            }
        }

        match self {
            Self::DecliningBalance { decline } if !decline.is_finite() || *decline <= 0.0 => {
                Err(TaxbookError::invalid_argument(format!(
                    "declining balance factor must be positive (got {})",
                    decline
                )))
            }
            Self::UnitsOfProduction { .. } if basis.prod_cap == 0 => {
                Err(TaxbookError::invalid_argument(
                    "units of production requires a production capacity above zero",
                ))
            }
            _ => Ok(()),
        }
    }

    /// Amount depreciated by one call covering `periods` periods
    ///
    /// Callers must run [`validate`](Self::validate) first; this function
    /// assumes a non-zero life and production capacity where they are used.
    ///
    /// Straight line and sum of the years' digits never take more than the
    /// depreciable value, and the call that uses up the remaining life takes
    /// exactly what is left so per-call cent rounding leaves no residual.
    pub fn amount(&self, basis: &DepreciationBasis, periods: u32) -> Money {
        let remaining = basis.depreciable_value.max(Money::zero());
        if self.settles_on_final_period() && periods >= basis.remaining_life {
            return remaining;
        }

        let periods = f64::from(periods);
        let life = f64::from(basis.life);

        let cents = match *self {
            Self::StraightLine => {
                let base = (basis.original_value - basis.salvage_value).cents() as f64;
                (base / life) * periods
            }
            Self::DecliningBalance { decline } => {
                let undepreciated = (basis.original_value - basis.total_depreciation).cents() as f64;
                (undepreciated / life) * decline * periods
            }
            Self::SumOfYearsDigits => {
                let fraction = f64::from(basis.remaining_life) / basis.sum_of_years_digits as f64;
                basis.original_value.cents() as f64 * fraction
            }
            Self::UnitsOfProduction { units } => {
                let per_unit = basis.depreciable_value.cents() as f64 / basis.prod_cap as f64;
                per_unit * units as f64
            }
        };

        let amount = Money::from_fractional_cents(cents);
        if self.settles_on_final_period() {
            amount.min(remaining)
        } else {
            amount
        }
    }

    /// Whether the method is bounded by salvage value and closes out the
    /// remaining depreciable value on the last period of life
    pub fn settles_on_final_period(&self) -> bool {
        matches!(self, Self::StraightLine | Self::SumOfYearsDigits)
    }
}

/// Method tag without parameters, used in schedules and settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MethodKind {
    #[default]
    StraightLine,
    DecliningBalance,
    SumOfYearsDigits,
    UnitsOfProduction,
}

impl MethodKind {
    pub fn code(&self) -> u8 {
        match self {
            Self::StraightLine => 0,
            Self::DecliningBalance => 1,
            Self::SumOfYearsDigits => 2,
            Self::UnitsOfProduction => 3,
        }
    }
}

impl fmt::Display for MethodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StraightLine => write!(f, "Straight Line"),
            Self::DecliningBalance => write!(f, "Declining Balance"),
            Self::SumOfYearsDigits => write!(f, "Sum of the Years' Digits"),
            Self::UnitsOfProduction => write!(f, "Units of Production"),
        }
    }
}

/// Snapshot of the asset state the formulas read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepreciationBasis {
    pub original_value: Money,
    pub salvage_value: Money,
    pub depreciable_value: Money,
    pub total_depreciation: Money,
    pub life: u32,
    pub remaining_life: u32,
    pub sum_of_years_digits: u64,
    pub prod_cap: u64,
}

/// Whether an asset still has value left to depreciate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DepreciationStatus {
    Active,
    FullyDepreciated,
}

impl fmt::Display for DepreciationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "Active"),
            Self::FullyDepreciated => write!(f, "Fully depreciated"),
        }
    }
}

/// One row of an asset's depreciation schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationEntry {
    /// When the depreciation was recorded (UTC)
    pub recorded_at: DateTime<Utc>,

    pub method: MethodKind,

    pub periods: u32,

    /// Amount depreciated by this call
    pub amount: Money,

    /// Book value after the call
    pub value_after: Money,

    pub status_after: DepreciationStatus,
}

impl DepreciationEntry {
    pub fn new(
        method: MethodKind,
        periods: u32,
        amount: Money,
        value_after: Money,
        status_after: DepreciationStatus,
    ) -> Self {
        Self {
            recorded_at: Utc::now(),
            method,
            periods,
            amount,
            value_after,
            status_after,
        }
    }
}

/// Sum of the integers 1..=life
pub fn sum_of_years_digits(life: u32) -> u64 {
    let life = u64::from(life);
    life * (life + 1) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basis() -> DepreciationBasis {
        DepreciationBasis {
            original_value: Money::from(1000_i64),
            salvage_value: Money::from(100_i64),
            depreciable_value: Money::from(900_i64),
            total_depreciation: Money::zero(),
            life: 4,
            remaining_life: 4,
            sum_of_years_digits: sum_of_years_digits(4),
            prod_cap: 450,
        }
    }

    #[test]
    fn test_sum_of_years_digits() {
        assert_eq!(sum_of_years_digits(0), 0);
        assert_eq!(sum_of_years_digits(1), 1);
        assert_eq!(sum_of_years_digits(4), 10);
        assert_eq!(sum_of_years_digits(12), 78);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            DepreciationMethod::from_code(0, 1.0, 0).unwrap(),
            DepreciationMethod::StraightLine
        );
        assert_eq!(
            DepreciationMethod::from_code(1, 2.0, 0).unwrap(),
            DepreciationMethod::double_declining()
        );
        assert_eq!(
            DepreciationMethod::from_code(3, 1.0, 7).unwrap(),
            DepreciationMethod::units_of_production(7)
        );
        let err = DepreciationMethod::from_code(4, 1.0, 0).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_kind_round_trips_code() {
        for code in 0..=3u8 {
            let method = DepreciationMethod::from_code(code, 1.0, 0).unwrap();
            assert_eq!(method.kind().code(), code);
        }
    }

    #[test]
    fn test_straight_line_amount() {
        let method = DepreciationMethod::StraightLine;
        assert_eq!(method.amount(&basis(), 1), Money::from(225_i64));
        assert_eq!(method.amount(&basis(), 2), Money::from(450_i64));
    }

    #[test]
    fn test_final_period_takes_remaining_value() {
        let mut last = basis();
        last.remaining_life = 1;
        last.depreciable_value = Money::from_cents(22_501);
        assert_eq!(
            DepreciationMethod::StraightLine.amount(&last, 1),
            Money::from_cents(22_501)
        );
        assert_eq!(
            DepreciationMethod::SumOfYearsDigits.amount(&last, 3),
            Money::from_cents(22_501)
        );

        // Declining balance keeps its own formula
        assert_eq!(
            DepreciationMethod::double_declining().amount(&last, 1),
            Money::from(500_i64)
        );
    }

    #[test]
    fn test_amount_capped_at_depreciable_value() {
        let mut nearly_done = basis();
        nearly_done.depreciable_value = Money::from(50_i64);
        assert_eq!(
            DepreciationMethod::StraightLine.amount(&nearly_done, 1),
            Money::from(50_i64)
        );
        assert_eq!(
            DepreciationMethod::SumOfYearsDigits.amount(&nearly_done, 1),
            Money::from(50_i64)
        );
    }

    #[test]
    fn test_declining_balance_ignores_salvage() {
        let method = DepreciationMethod::double_declining();
        // (1000 - 0) / 4 * 2.0
        assert_eq!(method.amount(&basis(), 1), Money::from(500_i64));

        let mut later = basis();
        later.total_depreciation = Money::from(500_i64);
        assert_eq!(method.amount(&later, 1), Money::from(250_i64));
    }

    #[test]
    fn test_sum_of_years_digits_amount() {
        let method = DepreciationMethod::SumOfYearsDigits;
        // 1000 * 4/10
        assert_eq!(method.amount(&basis(), 1), Money::from(400_i64));

        let mut later = basis();
        later.remaining_life = 3;
        assert_eq!(method.amount(&later, 1), Money::from(300_i64));
    }

    #[test]
    fn test_units_of_production_amount() {
        let method = DepreciationMethod::units_of_production(45);
        // 900 / 450 per unit * 45 units
        assert_eq!(method.amount(&basis(), 1), Money::from(90_i64));
        assert_eq!(
            DepreciationMethod::units_of_production(0).amount(&basis(), 1),
            Money::zero()
        );
    }

    #[test]
    fn test_validate_preconditions() {
        let b = basis();
        assert!(DepreciationMethod::StraightLine.validate(&b, 0).is_err());
        assert!(DepreciationMethod::StraightLine.validate(&b, 1).is_ok());
        assert!(DepreciationMethod::declining_balance(0.0).validate(&b, 1).is_err());
        assert!(DepreciationMethod::declining_balance(f64::NAN).validate(&b, 1).is_err());

        // Units of production does not consume periods
        assert!(DepreciationMethod::units_of_production(1).validate(&b, 0).is_ok());

        let mut no_capacity = b;
        no_capacity.prod_cap = 0;
        assert!(DepreciationMethod::units_of_production(1)
            .validate(&no_capacity, 1)
            .is_err());

        let mut no_life = b;
        no_life.life = 0;
        assert!(DepreciationMethod::SumOfYearsDigits.validate(&no_life, 1).is_err());
    }

    #[test]
    fn test_method_serialization() {
        let json = serde_json::to_string(&DepreciationMethod::declining_balance(1.5)).unwrap();
        assert_eq!(json, r#"{"method":"declining_balance","decline":1.5}"#);

        let parsed: DepreciationMethod =
            serde_json::from_str(r#"{"method":"straight_line"}"#).unwrap();
        assert_eq!(parsed, DepreciationMethod::StraightLine);
    }
}
