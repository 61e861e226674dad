//! # Driven Ports (SPI - Outbound)
//!
//! Interfaces the contracts depend on. The execution host implements them:
//! - Record store: transactional key-value state with range scan and
//!   selector query
//! - Invocation transport: synchronous call into another contract within the
//!   same transaction
//!
//! Contracts never assume a lock primitive is available behind these traits.
//! Conflict detection and commit ordering belong to the host.

use crate::query::Selector;
use crate::response::Response;
use crate::errors::StoreError;
use async_trait::async_trait;
use std::fmt;

// =============================================================================
// RECORD STORE
// =============================================================================

/// A key paired with its raw stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Ledger key.
    pub key: String,
    /// Raw record blob.
    pub value: Vec<u8>,
}

/// Cursor over range or selector results.
///
/// Yields results in store-defined order. The cursor is released when the
/// value is dropped, which covers early returns through `?` as well.
pub trait StateIterator: Iterator<Item = Result<KeyValue, StoreError>> + Send {}

impl<T> StateIterator for T where T: Iterator<Item = Result<KeyValue, StoreError>> + Send {}

/// Boxed cursor returned by the store.
pub type BoxedStateIterator = Box<dyn StateIterator>;

/// Transactional key-value state scoped to one contract namespace.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Exact read.
    ///
    /// # Returns
    ///
    /// * `Some(bytes)` - If the key exists
    /// * `None` - If the key was never written
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Whole-record write.
    async fn put_state(&self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Ascending scan over `[start, end)`.
    async fn get_state_by_range(
        &self,
        start: &str,
        end: &str,
    ) -> Result<BoxedStateIterator, StoreError>;

    /// Selector ("rich") query over the declared fields of stored records.
    async fn get_query_result(&self, selector: &Selector)
        -> Result<BoxedStateIterator, StoreError>;
}

// =============================================================================
// INVOCATION TRANSPORT
// =============================================================================

/// Address of a contract reachable through the invocation transport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContractTarget {
    /// Deployed contract id (e.g. `arm`).
    pub contract_id: String,
    /// Channel / namespace the contract lives in.
    pub namespace_id: String,
}

impl ContractTarget {
    /// Create a new target.
    pub fn new(contract_id: impl Into<String>, namespace_id: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
            namespace_id: namespace_id.into(),
        }
    }
}

impl fmt::Display for ContractTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.contract_id, self.namespace_id)
    }
}

/// Synchronous call into another contract inside the caller's transaction.
///
/// A non-OK response means the callee failed; the caller must surface the
/// failure so the host discards the whole transaction.
#[async_trait]
pub trait InvocationTransport: Send + Sync {
    /// Invoke `function` on `target` with byte-encoded arguments.
    async fn invoke(&self, target: &ContractTarget, function: &str, args: Vec<Vec<u8>>)
        -> Response;
}

/// Encode string arguments for the transport.
#[must_use]
pub fn to_invocation_args<S: AsRef<str>>(args: &[S]) -> Vec<Vec<u8>> {
    args.iter().map(|a| a.as_ref().as_bytes().to_vec()).collect()
}

// =============================================================================
// TESTS
// =============================================================================
