//! # Shared Types Crate
//!
//! Boundary types shared by the Authority Registry, Laboratory and
//! SupplyChain contracts, and by the host that executes them.
//!
//! ## Design Principles
//!
//! - **Closed dispatch**: each contract maps function names onto an enum
//!   implementing [`ContractFunction`]; arity is checked once at dispatch.
//! - **Errors as responses**: handlers return `Result<Vec<u8>, ContractError>`
//!   and dispatch converts it into a [`Response`].
//! - **Host-owned state**: contracts only see the [`RecordStore`] and
//!   [`InvocationTransport`] ports handed to them in a [`TxContext`].

pub mod context;
pub mod contract;
pub mod errors;
pub mod ports;
pub mod query;
pub mod records;
pub mod response;

pub use context::{format_ledger_date, TxContext, LEDGER_DATE_FORMAT};
pub use contract::{into_response, Arity, Contract, ContractFunction};
pub use errors::*;
pub use ports::*;
pub use query::{point_lookup, range_listing, selector_listing, Projection, Selector};
pub use records::{null_as_default, read_or_default, read_record, write_record};
pub use response::{Response, Status};
