//! Core data models for taxbook
//!
//! Assets and their depreciation state, ledger accounts, and the money and
//! identifier types they are built from.

pub mod account;
pub mod asset;
pub mod depreciation;
pub mod ids;
pub mod money;
pub mod tangible;

pub use account::{Account, NormalBalance};
pub use asset::Asset;
pub use depreciation::{
    DepreciationBasis, DepreciationEntry, DepreciationMethod, DepreciationStatus, MethodKind,
};
pub use ids::{AccountId, AssetId};
pub use money::Money;
pub use tangible::TangibleAsset;
