//! # Adapters Layer (Outer Hexagon)
//!
//! Implementations of the contract ports backed by the in-process world
//! state:
//! - `TxStore` implements `RecordStore` over one namespace plus the
//!   transaction's write sandbox
//! - `InvocationRouter` implements `InvocationTransport` by dispatching to a
//!   deployed contract inside the same sandbox

pub mod cursor;
pub mod router;
pub mod tx_store;

pub use cursor::*;
pub use router::*;
pub use tx_store::*;
