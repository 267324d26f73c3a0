//! Base asset record
//!
//! Every asset carries a name, a useful life in periods (months) and a book
//! value. The value at construction is kept as the original basis so that
//! formulas depending on it do not drift as the book value changes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AssetId;
use super::money::Money;
use crate::error::{TaxbookError, TaxbookResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,

    pub name: String,

    /// Useful life in periods (months)
    life: u32,

    /// Book value at construction
    original_value: Money,

    /// Current book value
    value: Money,
}

impl Asset {
    /// Create a new asset
    ///
    /// Fails with `InvalidArgument` if `value` is negative.
    pub fn new(name: impl Into<String>, life: u32, value: Money) -> TaxbookResult<Self> {
        ensure_non_negative("asset value", value)?;
        Ok(Self {
            id: AssetId::new(),
            name: name.into(),
            life,
            original_value: value,
            value,
        })
    }

    pub fn life(&self) -> u32 {
        self.life
    }

    pub fn original_value(&self) -> Money {
        self.original_value
    }

    pub fn value(&self) -> Money {
        self.value
    }

    /// Revalue the asset. The original basis is not affected.
    pub fn change_value(&mut self, new_value: Money) -> TaxbookResult<()> {
        ensure_non_negative("new value", new_value)?;
        self.value = new_value;
        Ok(())
    }

    /// Restore the book value to the original basis
    pub fn reset(&mut self) {
        self.value = self.original_value;
    }

    /// Reduce the book value by a depreciated amount
    pub(crate) fn write_down(&mut self, amount: Money) {
        self.value -= amount;
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} periods, {})", self.name, self.life, self.value)
    }
}

pub(crate) fn ensure_non_negative(what: &str, amount: Money) -> TaxbookResult<()> {
    if amount.is_negative() {
        return Err(TaxbookError::invalid_argument(format!(
            "{} cannot be negative (got {})",
            what, amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_asset() {
        let asset = Asset::new("Truck", 60, Money::from(30_000_i64)).unwrap();
        assert_eq!(asset.name, "Truck");
        assert_eq!(asset.life(), 60);
        assert_eq!(asset.value(), Money::from(30_000_i64));
        assert_eq!(asset.original_value(), asset.value());
    }

    #[test]
    fn test_negative_value_rejected() {
        let err = Asset::new("Debt", 12, Money::from_cents(-1)).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_change_value_keeps_original_basis() {
        let mut asset = Asset::new("Desk", 12, Money::from(500_i64)).unwrap();
        asset.change_value(Money::from(450_i64)).unwrap();
        assert_eq!(asset.value(), Money::from(450_i64));
        assert_eq!(asset.original_value(), Money::from(500_i64));

        asset.reset();
        assert_eq!(asset.value(), Money::from(500_i64));
    }

    #[test]
    fn test_change_value_rejects_negative() {
        let mut asset = Asset::new("Desk", 12, Money::from(500_i64)).unwrap();
        assert!(asset.change_value(Money::from(-1_i64)).is_err());
        assert_eq!(asset.value(), Money::from(500_i64));
    }

    #[test]
    fn test_display() {
        let asset = Asset::new("Desk", 12, Money::from_cents(50_050)).unwrap();
        assert_eq!(asset.to_string(), "Desk (12 periods, $500.50)");
    }
}
