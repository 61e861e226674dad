//! # Test Harness
//!
//! A `MockLedger` with the three contracts deployed on one channel, plus
//! helpers that turn error responses into `anyhow` errors.

use anyhow::{ensure, Context, Result};
use chrono::{DateTime, TimeZone, Utc};
use ledger_host::{LedgerConfig, MockLedger};
use pc_01_authority_registry::prelude::AuthorityRegistryContract;
use pc_02_laboratory::prelude::LaboratoryContract;
use pc_03_supply_chain::prelude::SupplyChainContract;
use pharma_telemetry::{init_logging, TelemetryConfig, TelemetryError};
use serde_json::Value;
use shared_types::Response;
use std::sync::Arc;

/// Timestamp every harness transaction is stamped with (01/07/2018).
#[must_use]
pub fn ledger_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2018, 7, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Install the log subscriber for a test run.
///
/// A subscriber set up outside `pharma-telemetry` is left in place; a bad
/// configuration is an error.
pub fn install_logging(config: &TelemetryConfig) -> Result<()> {
    match init_logging(config) {
        Ok(_) | Err(TelemetryError::SubscriberInit(_)) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Ledger with the Authority Registry, Laboratory and SupplyChain deployed.
pub fn network() -> Result<Arc<MockLedger>> {
    install_logging(&TelemetryConfig::from_env())?;

    let ledger = MockLedger::new(LedgerConfig::default().with_timestamp(ledger_time()));
    ledger.deploy(Arc::new(AuthorityRegistryContract::new()))?;
    ledger.deploy(Arc::new(LaboratoryContract::new()))?;
    ledger.deploy(Arc::new(SupplyChainContract::new()))?;
    Ok(Arc::new(ledger))
}

/// Invoke and require an OK response.
pub async fn submit(
    ledger: &MockLedger,
    contract: &str,
    function: &str,
    args: &[&str],
) -> Result<Response> {
    let response = ledger.invoke(contract, function, args).await;
    ensure!(
        response.is_ok(),
        "{contract}.{function} failed: {}",
        response.message
    );
    Ok(response)
}

/// Invoke and require an error response, returning its message.
pub async fn reject(
    ledger: &MockLedger,
    contract: &str,
    function: &str,
    args: &[&str],
) -> Result<String> {
    let response = ledger.invoke(contract, function, args).await;
    ensure!(
        !response.is_ok(),
        "{contract}.{function} unexpectedly succeeded"
    );
    Ok(response.message)
}

/// Committed record decoded as JSON.
pub fn record(ledger: &MockLedger, contract: &str, key: &str) -> Result<Value> {
    let bytes = ledger
        .state(contract, key)
        .with_context(|| format!("{contract} has no record {key}"))?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Response payload decoded as JSON.
pub fn payload(response: &Response) -> Result<Value> {
    serde_json::from_slice(&response.payload).context("payload is not JSON")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_log_level_fails_installation() {
        let config = TelemetryConfig::from_lookup(|name| {
            (name == "PC_LOG_LEVEL").then(|| "lab=notalevel".to_string())
        });
        assert!(install_logging(&config).is_err());
        assert!(install_logging(&TelemetryConfig::default()).is_ok());
    }
}
