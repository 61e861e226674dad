//! # Domain Layer (Inner Hexagon)
//!
//! Asset records and their custody history. No I/O and no async.

pub mod entities;

pub use entities::*;
