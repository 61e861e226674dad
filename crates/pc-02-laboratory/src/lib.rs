//! # PC-02 Laboratory
//!
//! Contract `lab`. Keeps laboratories, the pharmacies that order from them
//! and the create → send order protocol. Marketing authorizations are
//! granted by the Authority Registry; this contract only forwards the
//! request.
//!
//! ## Functions
//!
//! | Wire name | Alias | Arity |
//! |-----------|-------|-------|
//! | `addLaboratory` | | 4 |
//! | `addMedicineOrder` | | 5 |
//! | `SendOrder` | `sendOrder` | 6 |
//! | `createMarketingAuthorization` | | 4 |
//! | `queryByLab` | | 1 |
//! | `queryLabsJSON` | | 1 |
//! | `queryLabByARM` | `queryLabByAuthority` | 1+ |
//!
//! ## Order States
//!
//! ```text
//! Pending ──SendOrder──→ Sent
//!    │
//!    └── (datecancelled set) → Cancelled, never matched again
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::config::LaboratoryConfig;
    pub use crate::domain::entities::{
        Laboratory, LaboratorySummary, MarketingAuthorization, Order, OrderStatus, Pharmacy,
        LAB_DOC_TYPE, SENT_FLAG,
    };
    pub use crate::domain::orders::{parse_quantity, place_order, send_order, OrderMatch};
    pub use crate::ports::inbound::LaboratoryFunction;
    pub use crate::service::{LaboratoryContract, LABORATORY_CONTRACT_ID};
}
