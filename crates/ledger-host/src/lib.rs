//! # Ledger Host
//!
//! In-process execution host for the Pharma-Chain contracts.
//!
//! ## Responsibilities
//!
//! - Namespaced world state, one namespace per deployed contract
//! - One write sandbox per transaction, committed only on an OK response
//! - Nested invocation into other deployed contracts, sharing the sandbox
//! - Cursor accounting and fault injection for tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! let ledger = MockLedger::new(LedgerConfig::default());
//! ledger.deploy(Arc::new(AuthorityRegistryContract::new()))?;
//! let res = ledger.invoke("arm", "addARM", &["ARM1", "My ARM"]).await;
//! assert!(res.is_ok());
//! ```

pub mod adapters;
pub mod config;
pub mod errors;
pub mod faults;
pub mod ledger;
pub mod state;

pub use adapters::{Cursor, InvocationRouter, TxStore};
pub use config::LedgerConfig;
pub use errors::HostError;
pub use faults::FaultPlan;
pub use ledger::{MockLedger, TxFrame};
pub use state::{Namespace, WorldState, WriteSet};
