//! Tangible assets and the depreciation engine
//!
//! A [`TangibleAsset`] wraps the base [`Asset`] record with salvage value,
//! production capacity and depreciation bookkeeping. The asset is either
//! active (depreciable value above zero) or fully depreciated; the latter is
//! sticky until [`TangibleAsset::reset`] or a revaluation above salvage.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::asset::{ensure_non_negative, Asset};
use super::depreciation::{
    sum_of_years_digits, DepreciationBasis, DepreciationEntry, DepreciationMethod,
    DepreciationStatus,
};
use super::ids::AssetId;
use super::money::Money;
use crate::error::TaxbookResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TangibleAsset {
    asset: Asset,

    /// Fixed at construction
    salvage_value: Money,

    /// Total units the asset can produce over its life
    prod_cap: u64,

    /// Current value minus salvage value
    depreciable_value: Money,

    /// Amount depreciated by the most recent call
    last_depr: Money,

    /// Depreciation accumulated since construction or the last reset
    total_depr: Money,

    rem_life: u32,

    syd: u64,

    #[serde(default)]
    history: Vec<DepreciationEntry>,
}

impl TangibleAsset {
    /// Create a new tangible asset
    ///
    /// `life` is in periods (months). `prod_cap` is only read by the units of
    /// production method and may be zero otherwise.
    pub fn new(
        name: impl Into<String>,
        life: u32,
        value: Money,
        salvage_value: Money,
        prod_cap: u64,
    ) -> TaxbookResult<Self> {
        ensure_non_negative("salvage value", salvage_value)?;
        let asset = Asset::new(name, life, value)?;

        Ok(Self {
            depreciable_value: asset.value() - salvage_value,
            salvage_value,
            prod_cap,
            last_depr: Money::zero(),
            total_depr: Money::zero(),
            rem_life: life,
            syd: sum_of_years_digits(life),
            history: Vec::new(),
            asset,
        })
    }

    pub fn asset(&self) -> &Asset {
        &self.asset
    }

    pub fn id(&self) -> AssetId {
        self.asset.id
    }

    pub fn name(&self) -> &str {
        &self.asset.name
    }

    pub fn life(&self) -> u32 {
        self.asset.life()
    }

    pub fn value(&self) -> Money {
        self.asset.value()
    }

    pub fn original_value(&self) -> Money {
        self.asset.original_value()
    }

    pub fn salvage_value(&self) -> Money {
        self.salvage_value
    }

    pub fn production_capacity(&self) -> u64 {
        self.prod_cap
    }

    pub fn depreciable_value(&self) -> Money {
        self.depreciable_value
    }

    pub fn last_depreciation(&self) -> Money {
        self.last_depr
    }

    pub fn total_depreciation(&self) -> Money {
        self.total_depr
    }

    pub fn remaining_life(&self) -> u32 {
        self.rem_life
    }

    /// Depreciation schedule since construction or the last reset
    pub fn history(&self) -> &[DepreciationEntry] {
        &self.history
    }

    pub fn status(&self) -> DepreciationStatus {
        if self.depreciable_value.is_positive() {
            DepreciationStatus::Active
        } else {
            DepreciationStatus::FullyDepreciated
        }
    }

    pub fn is_fully_depreciated(&self) -> bool {
        self.status() == DepreciationStatus::FullyDepreciated
    }

    /// Return the asset to its un-depreciated state with its full useful life
    pub fn reset(&mut self) {
        self.asset.reset();
        self.depreciable_value = self.asset.value() - self.salvage_value;
        self.last_depr = Money::zero();
        self.total_depr = Money::zero();
        self.rem_life = self.asset.life();
        self.history.clear();
    }

    /// Revalue the asset and recompute its depreciable value
    pub fn change_value(&mut self, new_value: Money) -> TaxbookResult<()> {
        self.asset.change_value(new_value)?;
        self.depreciable_value = self.asset.value() - self.salvage_value;
        Ok(())
    }

    /// Depreciate the asset over `periods` periods and return the amount
    ///
    /// A fully depreciated asset is left untouched (apart from clamping a
    /// negative depreciable value to zero) and the call returns zero.
    pub fn depreciate(&mut self, method: DepreciationMethod, periods: u32) -> TaxbookResult<Money> {
        if !self.depreciable_value.is_positive() {
            if self.depreciable_value.is_negative() {
                self.depreciable_value = Money::zero();
            }
            tracing::info!(
                asset = %self.asset.name,
                value = %self.asset.value(),
                "asset is fully depreciated"
            );
            self.last_depr = Money::zero();
            return Ok(self.last_depr);
        }

        let basis = self.basis();
        method.validate(&basis, periods)?;

        if let DepreciationMethod::UnitsOfProduction { units: 0 } = method {
            return Ok(Money::zero());
        }

        let amount = method.amount(&basis, periods);
        if amount.is_zero() && self.rem_life == 0 {
            self.last_depr = amount;
            return Ok(amount);
        }

        self.last_depr = amount;
        self.apply(periods);

        tracing::debug!(
            asset = %self.asset.name,
            method = %method.kind(),
            periods,
            amount = %self.last_depr,
            value = %self.asset.value(),
            "depreciated asset"
        );

        self.history.push(DepreciationEntry::new(
            method.kind(),
            periods,
            self.last_depr,
            self.asset.value(),
            self.status(),
        ));

        Ok(self.last_depr)
    }

    fn basis(&self) -> DepreciationBasis {
        DepreciationBasis {
            original_value: self.asset.original_value(),
            salvage_value: self.salvage_value,
            depreciable_value: self.depreciable_value,
            total_depreciation: self.total_depr,
            life: self.asset.life(),
            remaining_life: self.rem_life,
            sum_of_years_digits: self.syd,
            prod_cap: self.prod_cap,
        }
    }

    fn apply(&mut self, periods: u32) {
        self.asset.write_down(self.last_depr);
        self.depreciable_value = self.asset.value() - self.salvage_value;
        self.rem_life = self.rem_life.saturating_sub(periods);
        self.total_depr += self.last_depr;
    }
}

impl fmt::Display for TangibleAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.asset.name)?;
        writeln!(f, "    Value: {}", self.asset.value())?;
        writeln!(f, "    Salvage value: {}", self.salvage_value)?;
        writeln!(f, "    Total depreciation: {}", self.total_depr)?;
        write!(
            f,
            "    Remaining life: {} of {} periods ({})",
            self.rem_life,
            self.asset.life(),
            self.status()
        )
    }
}
