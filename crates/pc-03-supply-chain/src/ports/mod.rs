//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `SupplyChainFunction`
//! - **Driven Ports (Outbound)**: `RecordStore` from `shared-types`

pub mod inbound;

pub use inbound::*;
