//! # PC-01 Authority Registry
//!
//! Contract `arm`. Keeps regulatory authorities, the laboratories each one
//! lists and the marketing authorizations granted to those laboratories.
//!
//! ## Functions
//!
//! | Wire name | Alias | Arity |
//! |-----------|-------|-------|
//! | `addARM` | `registerAuthority` | 2 |
//! | `addLaboratory` | `registerLaboratoryUnderAuthority` | 2 |
//! | `addMarketingAuthorization` | `createMarketingAuthorization` | 4 |
//! | `queryByMarketingAuthorization` | | 1 |
//!
//! `addMarketingAuthorization` is also the target the Laboratory contract
//! delegates to; it returns the updated authority record.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod domain;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::domain::entities::{Authority, LaboratoryListing, MarketingAuthorization};
    pub use crate::ports::inbound::AuthorityFunction;
    pub use crate::service::{AuthorityRegistryContract, AUTHORITY_CONTRACT_ID};
}
