//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `AuthorityFunction`, the operations callers
//!   may invoke
//! - **Driven Ports (Outbound)**: `RecordStore` from `shared-types`

pub mod inbound;

pub use inbound::*;
