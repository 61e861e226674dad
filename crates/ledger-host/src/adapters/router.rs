//! # Invocation Router
//!
//! `InvocationTransport` that calls another deployed contract synchronously,
//! inside the caller's transaction. The callee gets its own namespace but
//! writes into the caller's sandbox; if the callee fails, its writes are
//! rolled back before the response is returned.

use crate::ledger::{MockLedger, TxFrame};
use async_trait::async_trait;
use shared_types::{ContractTarget, InvocationTransport, Response};
use tracing::{debug, warn};

/// Transport bound to one in-flight transaction.
pub struct InvocationRouter<'a> {
    ledger: &'a MockLedger,
    frame: &'a TxFrame,
}

impl<'a> InvocationRouter<'a> {
    /// Create a router for `frame`.
    pub(crate) fn new(ledger: &'a MockLedger, frame: &'a TxFrame) -> Self {
        Self { ledger, frame }
    }
}

#[async_trait]
impl InvocationTransport for InvocationRouter<'_> {
    async fn invoke(
        &self,
        target: &ContractTarget,
        function: &str,
        args: Vec<Vec<u8>>,
    ) -> Response {
        if target.namespace_id != self.ledger.config().channel_id {
            warn!(%target, "Invocation addressed to a channel this host does not serve");
            return Response::error(format!("Unknown channel: {}", target.namespace_id));
        }

        let Some(contract) = self.ledger.contract(&target.contract_id) else {
            warn!(%target, "Invocation addressed to an unknown contract");
            return Response::error(format!("Unknown contract: {}", target.contract_id));
        };

        let args = match args
            .into_iter()
            .map(String::from_utf8)
            .collect::<Result<Vec<_>, _>>()
        {
            Ok(args) => args,
            Err(e) => return Response::error(format!("Invalid argument encoding: {e}")),
        };

        debug!(
            tx_id = %self.frame.tx_id,
            %target,
            function,
            "Nested invocation"
        );

        let checkpoint = self.frame.writes.lock().clone();
        let response = self
            .ledger
            .execute_in(contract.as_ref(), function, &args, self.frame)
            .await;
        if !response.is_ok() {
            *self.frame.writes.lock() = checkpoint;
        }
        response
    }
}
