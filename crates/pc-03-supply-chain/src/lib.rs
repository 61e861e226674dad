//! # PC-03 SupplyChain
//!
//! Contract `supplychain`. Tracks physical assets from purchase through each
//! custody hand-over to arrival.
//!
//! ## Functions
//!
//! | Wire name | Arity | Effect |
//! |-----------|-------|--------|
//! | `buyAsset` | 10 | create or replace, one initial transit |
//! | `generateTransit` | 5 | append transit, move agent |
//! | `arrival` | 3 | append arrival |
//! | `queryByAsset` | 1 | point lookup |
//! | `queryAllAssets` | any | `[{"Key","Record"}]` over the asset range |
//! | `queryAssets` | any | `[{"Key"}]` over the asset range |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::SupplyChainConfig;
    pub use crate::domain::entities::{Arrival, Asset, Transit};
    pub use crate::ports::inbound::SupplyChainFunction;
    pub use crate::service::{SupplyChainContract, SUPPLY_CHAIN_CONTRACT_ID};
}
