//! # Domain Layer (Inner Hexagon)
//!
//! Laboratory records and the order protocol applied to them.
//! No I/O and no async.

pub mod entities;
pub mod orders;

pub use entities::*;
pub use orders::*;
