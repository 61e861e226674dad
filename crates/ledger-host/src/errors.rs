//! # Host Errors

use thiserror::Error;

/// Errors raised while wiring contracts into the host.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HostError {
    /// A contract with this id is already deployed.
    #[error("contract already deployed: {0}")]
    DuplicateContract(String),

    /// No contract with this id is deployed.
    #[error("unknown contract: {0}")]
    UnknownContract(String),
}
