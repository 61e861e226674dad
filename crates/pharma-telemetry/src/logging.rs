//! Process-wide subscriber installation.
//!
//! The subscriber is installed at most once. Later calls still validate
//! their filter directive, then return the handle of the first installation.

use crate::{TelemetryConfig, TelemetryError};
use parking_lot::{const_mutex, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INSTALLED: Mutex<Option<LoggingHandle>> = const_mutex(None);

/// Describes the installed subscriber.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingHandle {
    /// Service name logged at installation.
    pub service_name: String,
    /// Filter directive in effect.
    pub log_level: String,
    /// Whether output is JSON.
    pub json_logs: bool,
}

/// Parse a filter directive.
pub(crate) fn build_filter(directive: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directive).map_err(|e| TelemetryError::Config(format!("{directive}: {e}")))
}

/// Install the global `tracing` subscriber.
///
/// Fails if the filter directive is invalid or if a subscriber not installed
/// through this function is already set.
pub fn init_logging(config: &TelemetryConfig) -> Result<LoggingHandle, TelemetryError> {
    let filter = build_filter(&config.log_level)?;

    let mut installed = INSTALLED.lock();
    if let Some(handle) = installed.as_ref() {
        return Ok(handle.clone());
    }

    let result = if config.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false),
            )
            .try_init()
    };
    result.map_err(|e| TelemetryError::SubscriberInit(e.to_string()))?;

    let handle = LoggingHandle {
        service_name: config.service_name.clone(),
        log_level: config.log_level.clone(),
        json_logs: config.json_logs,
    };
    *installed = Some(handle.clone());

    tracing::info!(
        service = %handle.service_name,
        level = %handle.log_level,
        json = handle.json_logs,
        "Logging initialized"
    );
    Ok(handle)
}
