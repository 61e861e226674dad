//! # Mock Ledger
//!
//! In-process execution host. Each submission runs as one transaction:
//!
//! 1. Open a write sandbox (`TxFrame`)
//! 2. Hand the contract a `TxStore` for its namespace and an
//!    `InvocationRouter` bound to the same sandbox
//! 3. Commit the sandbox if the response is OK, discard it otherwise
//!
//! Top-level transactions run one at a time, so every transaction reads the
//! state left by the one committed before it. Nested invocations share the
//! caller's slot. Replication and endorsement are not modelled.

use crate::adapters::{InvocationRouter, TxStore};
use crate::config::LedgerConfig;
use crate::errors::HostError;
use crate::faults::FaultPlan;
use crate::state::{WorldState, WriteSet};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use shared_types::{Contract, Response, TxContext};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex as AsyncMutex;
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// One in-flight transaction: id, timestamp and write sandbox.
pub struct TxFrame {
    pub(crate) tx_id: String,
    pub(crate) timestamp: DateTime<Utc>,
    pub(crate) writes: Mutex<WriteSet>,
}

impl TxFrame {
    fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            tx_id: Uuid::new_v4().to_string(),
            timestamp,
            writes: Mutex::new(WriteSet::new()),
        }
    }

    fn into_writes(self) -> WriteSet {
        self.writes.into_inner()
    }
}

/// In-process ledger hosting any number of contracts on one channel.
pub struct MockLedger {
    config: LedgerConfig,
    state: WorldState,
    contracts: RwLock<HashMap<String, Arc<dyn Contract>>>,
    /// Held from sandbox creation until commit or discard.
    sequencer: AsyncMutex<()>,
}

impl MockLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            state: WorldState::new(),
            contracts: RwLock::new(HashMap::new()),
            sequencer: AsyncMutex::new(()),
        }
    }

    /// Host configuration.
    #[must_use]
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Deploy a contract under its own id.
    pub fn deploy(&self, contract: Arc<dyn Contract>) -> Result<(), HostError> {
        let id = contract.contract_id().to_string();
        let mut contracts = self.contracts.write();
        if contracts.contains_key(&id) {
            return Err(HostError::DuplicateContract(id));
        }
        info!(contract = %id, channel = %self.config.channel_id, "Contract deployed");
        contracts.insert(id, contract);
        Ok(())
    }

    pub(crate) fn contract(&self, contract_id: &str) -> Option<Arc<dyn Contract>> {
        self.contracts.read().get(contract_id).cloned()
    }

    fn next_timestamp(&self) -> DateTime<Utc> {
        self.config.fixed_timestamp.unwrap_or_else(Utc::now)
    }

    /// Run the contract's `init` as its own transaction.
    pub async fn instantiate(&self, contract_id: &str) -> Response {
        let Some(contract) = self.contract(contract_id) else {
            return Response::error(HostError::UnknownContract(contract_id.to_string()).to_string());
        };
        let _slot = self.sequencer.lock().await;
        let frame = TxFrame::new(self.next_timestamp());
        let response = {
            let store = TxStore::new(contract.contract_id(), &self.state, &frame.writes);
            let router = InvocationRouter::new(self, &frame);
            let ctx = TxContext::new(frame.tx_id.clone(), frame.timestamp, &store, &router);
            contract.init(&ctx).await
        };
        self.finish(frame, &response);
        response
    }

    /// Submit one invocation as a transaction.
    pub async fn invoke(&self, contract_id: &str, function: &str, args: &[&str]) -> Response {
        let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
        self.submit(contract_id, function, args).await
    }

    /// Submit one invocation with owned arguments.
    #[instrument(skip(self, args), fields(arg_count = args.len()))]
    pub async fn submit(&self, contract_id: &str, function: &str, args: Vec<String>) -> Response {
        let Some(contract) = self.contract(contract_id) else {
            return Response::error(HostError::UnknownContract(contract_id.to_string()).to_string());
        };

        let _slot = self.sequencer.lock().await;
        let frame = TxFrame::new(self.next_timestamp());
        let response = self
            .execute_in(contract.as_ref(), function, &args, &frame)
            .await;
        self.finish(frame, &response);
        response
    }

    /// Execute `function` on `contract` inside `frame`.
    pub(crate) async fn execute_in(
        &self,
        contract: &dyn Contract,
        function: &str,
        args: &[String],
        frame: &TxFrame,
    ) -> Response {
        let store = TxStore::new(contract.contract_id(), &self.state, &frame.writes);
        let router = InvocationRouter::new(self, frame);
        let ctx = TxContext::new(frame.tx_id.clone(), frame.timestamp, &store, &router);
        contract.invoke(&ctx, function, args).await
    }

    fn finish(&self, frame: TxFrame, response: &Response) {
        let tx_id = frame.tx_id.clone();
        let writes = frame.into_writes();
        if response.is_ok() {
            debug!(%tx_id, writes = writes.len(), "Committing transaction");
            self.state.apply(writes);
        } else {
            debug!(%tx_id, discarded = writes.len(), message = %response.message, "Discarding transaction");
        }
    }

    // =========================================================================
    // INSPECTION (tests and tooling)
    // =========================================================================

    /// Committed value under `key` in a contract's namespace.
    #[must_use]
    pub fn state(&self, contract_id: &str, key: &str) -> Option<Vec<u8>> {
        self.state.get(contract_id, key)
    }

    /// Committed value under `key` as text.
    #[must_use]
    pub fn state_string(&self, contract_id: &str, key: &str) -> Option<String> {
        self.state(contract_id, key)
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write committed state directly, outside any transaction.
    pub fn seed_state(&self, contract_id: &str, key: &str, value: impl Into<Vec<u8>>) {
        self.state.put(contract_id, key, value.into());
    }

    /// Number of committed keys in a contract's namespace.
    #[must_use]
    pub fn key_count(&self, contract_id: &str) -> usize {
        self.state.key_count(contract_id)
    }

    /// Cursors handed to contracts and not yet released.
    #[must_use]
    pub fn open_cursors(&self) -> usize {
        self.state.open_cursors()
    }

    /// Change the injected faults.
    pub fn inject_faults(&self, update: impl FnOnce(&mut FaultPlan)) {
        self.state.update_faults(update);
        debug!(clear = self.state.faults().is_clear(), "Fault plan updated");
    }

    /// Remove every injected fault.
    pub fn clear_faults(&self) {
        self.state.update_faults(|f| *f = FaultPlan::default());
    }
}

impl Default for MockLedger {
    fn default() -> Self {
        Self::new(LedgerConfig::default())
    }
}

// =============================================================================
// TESTS
// =============================================================================
