//! # Error Types
//!
//! Errors shared by every contract and by the record store ports.
//!
//! Contracts never let an error cross the contract boundary as a panic:
//! dispatch turns every `ContractError` into an error [`Response`](crate::Response)
//! whose message is the error's `Display` text.

use thiserror::Error;

// =============================================================================
// STORE ERRORS
// =============================================================================

/// Failures surfaced by the record store adapter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A point read failed.
    #[error("read failed for key {key}: {reason}")]
    Read { key: String, reason: String },

    /// A write failed.
    #[error("write failed for key {key}: {reason}")]
    Write { key: String, reason: String },

    /// A range scan failed, either when opening or mid-iteration.
    #[error("range scan [{start}, {end}) failed: {reason}")]
    Scan {
        start: String,
        end: String,
        reason: String,
    },

    /// A selector query was rejected or failed mid-iteration.
    #[error("selector query failed: {0}")]
    Query(String),

    /// A stored value could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

// =============================================================================
// CONTRACT ERRORS
// =============================================================================

/// Error kinds reported by contract handlers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContractError {
    /// Wrong arity, or an empty required argument.
    #[error("{0}")]
    Argument(String),

    /// A record or nested entry is absent.
    #[error("{0}")]
    NotFound(String),

    /// The record store failed a read, scan or write.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// A predicate query could not be built or executed.
    #[error("query error: {0}")]
    Query(String),

    /// A cross-contract call returned a non-success response.
    #[error("{0}")]
    Delegation(String),

    /// The function name is not part of the contract.
    #[error("Invalid Smart Contract function name: {0}")]
    UnknownFunction(String),
}

impl ContractError {
    /// Short kind label used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Argument(_) => "ArgumentError",
            Self::NotFound(_) => "NotFoundError",
            Self::Store(_) => "StoreError",
            Self::Query(_) => "QueryError",
            Self::Delegation(_) => "DelegationError",
            Self::UnknownFunction(_) => "ArgumentError",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
