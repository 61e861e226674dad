//! # Ports Layer (Middle Hexagon)
//!
//! - **Driving Port (Inbound)**: `LaboratoryFunction`
//! - **Driven Ports (Outbound)**: `RecordStore` and `InvocationTransport`
//!   from `shared-types`; the transport reaches the Authority Registry

pub mod inbound;

pub use inbound::*;
