//! # Contract Response
//!
//! Status-tagged result returned by every contract invocation and by the
//! invocation transport.

use crate::errors::ContractError;
use serde::{Deserialize, Serialize};

/// Outcome of an invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The invocation succeeded; the host may commit its writes.
    Ok,
    /// The invocation failed; the host must discard its writes.
    Error,
}

/// Response of a contract invocation.
///
/// `payload` carries query results only on success; `message` carries a short
/// diagnostic on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Success or failure.
    pub status: Status,
    /// Result bytes (empty for mutations and failures).
    pub payload: Vec<u8>,
    /// Human-readable diagnostic.
    pub message: String,
}

impl Response {
    /// Successful response carrying `payload`.
    #[must_use]
    pub fn success(payload: Vec<u8>) -> Self {
        Self {
            status: Status::Ok,
            payload,
            message: String::new(),
        }
    }

    /// Failed response with a diagnostic message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            payload: Vec::new(),
            message: message.into(),
        }
    }

    /// Returns true if the status is [`Status::Ok`].
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }

    /// Payload as UTF-8 text (lossy).
    #[must_use]
    pub fn payload_str(&self) -> String {
        String::from_utf8_lossy(&self.payload).into_owned()
    }
}

impl From<Result<Vec<u8>, ContractError>> for Response {
    fn from(result: Result<Vec<u8>, ContractError>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(err) => Response::error(err.to_string()),
        }
    }
}
