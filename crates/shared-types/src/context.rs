//! # Transaction Context
//!
//! Everything a contract handler may touch during one invocation, supplied by
//! the execution host. Handlers hold no state between invocations.

use crate::ports::{InvocationTransport, RecordStore};
use chrono::{DateTime, Utc};

/// Date format used for every date a contract generates (`dd/mm/yyyy`).
pub const LEDGER_DATE_FORMAT: &str = "%d/%m/%Y";

/// Per-invocation view of the ledger.
pub struct TxContext<'a> {
    /// Host-assigned transaction id.
    pub tx_id: String,
    /// Transaction timestamp. Contracts use it instead of the wall clock so
    /// every endorser computes the same dates.
    pub timestamp: DateTime<Utc>,
    /// State of the invoked contract's namespace.
    pub store: &'a dyn RecordStore,
    /// Calls into other contracts within this transaction.
    pub transport: &'a dyn InvocationTransport,
}

impl<'a> TxContext<'a> {
    /// Create a context.
    pub fn new(
        tx_id: impl Into<String>,
        timestamp: DateTime<Utc>,
        store: &'a dyn RecordStore,
        transport: &'a dyn InvocationTransport,
    ) -> Self {
        Self {
            tx_id: tx_id.into(),
            timestamp,
            store,
            transport,
        }
    }

    /// Transaction date formatted for storage.
    #[must_use]
    pub fn ledger_date(&self) -> String {
        format_ledger_date(&self.timestamp)
    }
}

/// Format a timestamp as a ledger date.
#[must_use]
pub fn format_ledger_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(LEDGER_DATE_FORMAT).to_string()
}
