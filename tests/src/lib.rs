//! # Pharma-Chain Test Suite
//!
//! Unified test crate for scenarios spanning more than one contract.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # Ledger with every contract deployed
//! └── integration/      # Cross-contract flows
//!     ├── flows.rs      # Authority → laboratory → orders
//!     └── custody.rs    # SupplyChain custody and listings
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p pc-tests
//! cargo test -p pc-tests integration::flows::
//! ```

pub mod harness;
pub mod integration;
