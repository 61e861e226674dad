//! # Pharma Telemetry
//!
//! Structured logging for the Pharma-Chain contracts and the hosts that run
//! them.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pharma_telemetry::{init_logging, TelemetryConfig};
//!
//! let _handle = init_logging(&TelemetryConfig::from_env())?;
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `PC_LOG_LEVEL` | `RUST_LOG`, then `info` | Filter directive |
//! | `PC_JSON_LOGS` | `false` | JSON line output |
//! | `PC_SERVICE_NAME` | `pharma-chain` | Service name |

#![warn(missing_docs)]

mod config;
mod logging;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use logging::{init_logging, LoggingHandle};

use thiserror::Error;

/// Telemetry initialization errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// A subscriber was already installed by someone else.
    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),

    /// The configuration cannot be applied.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
