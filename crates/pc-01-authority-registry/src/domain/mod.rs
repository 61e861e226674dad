//! # Domain Layer (Inner Hexagon)
//!
//! Authority records and the in-memory mutations applied to them.
//! No I/O and no async.

pub mod entities;

pub use entities::*;
