//! # Host Configuration

use chrono::{DateTime, Utc};

/// Configuration of the in-process ledger host.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Channel every deployed contract belongs to. Invocations addressed to
    /// another channel are rejected.
    pub channel_id: String,
    /// Fixed transaction timestamp. `None` uses the wall clock at submission.
    pub fixed_timestamp: Option<DateTime<Utc>>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            channel_id: "mychannel".to_string(),
            fixed_timestamp: None,
        }
    }
}

impl LedgerConfig {
    /// Configuration with every transaction stamped at `timestamp`.
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.fixed_timestamp = Some(timestamp);
        self
    }
}
