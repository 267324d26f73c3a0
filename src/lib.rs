//! taxbook - financial accounting primitives
//!
//! This library models depreciable assets and ledger accounts:
//!
//! - `models`: money, assets, the depreciation engine and accounts
//! - `config`: settings and path management
//! - `error`: custom error types
//!
//! Domain code emits `tracing` events (for example when an asset is fully
//! depreciated); installing a subscriber is left to the host application.
//!
//! # Example
//!
//! ```
//! use taxbook::models::{DepreciationMethod, Money, TangibleAsset};
//!
//! let mut press = TangibleAsset::new(
//!     "Press",
//!     9,
//!     Money::from(1000_i64),
//!     Money::from(100_i64),
//!     0,
//! )?;
//! let amount = press.depreciate(DepreciationMethod::StraightLine, 1)?;
//! assert_eq!(amount, Money::from(100_i64));
//! # Ok::<(), taxbook::TaxbookError>(())
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use error::{TaxbookError, TaxbookResult};
