//! # Integration Flows
//!
//! Scenarios exercising several contracts through one ledger.

pub mod custody;
pub mod flows;
