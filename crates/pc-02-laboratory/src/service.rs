//! # Laboratory Service
//!
//! Contract implementation. Mutations read the whole `Laboratory`, apply a
//! domain operation and write it back. `createMarketingAuthorization` makes
//! no local write; it forwards to the Authority Registry inside the same
//! transaction.

use crate::config::LaboratoryConfig;
use crate::domain::entities::{Laboratory, Order, LAB_DOC_TYPE};
use crate::domain::orders::{parse_quantity, place_order, send_order, OrderMatch};
use crate::ports::inbound::LaboratoryFunction;
use async_trait::async_trait;
use shared_types::{
    into_response, point_lookup, read_or_default, read_record, selector_listing,
    to_invocation_args, write_record, Contract, ContractError, ContractFunction, ContractTarget,
    Response, Selector, StoreError, TxContext,
};
use tracing::{debug, info, instrument, warn};

/// Deployed id of the Laboratory contract.
pub const LABORATORY_CONTRACT_ID: &str = "lab";

/// Field holding a laboratory's owning authority.
const OWNER_FIELD: &str = "armOwner";

fn require_lab_key(key: &str) -> Result<(), ContractError> {
    if key.is_empty() {
        return Err(ContractError::Argument(
            "Empty key. Expecting a LAB".to_string(),
        ));
    }
    Ok(())
}

/// The Laboratory contract.
#[derive(Debug, Clone, Default)]
pub struct LaboratoryContract {
    config: LaboratoryConfig,
}

impl LaboratoryContract {
    /// Contract delegating to the default Authority Registry target.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LaboratoryConfig::default())
    }

    /// Contract with an explicit delegation target.
    #[must_use]
    pub fn with_config(config: LaboratoryConfig) -> Self {
        Self { config }
    }

    async fn execute(
        &self,
        ctx: &TxContext<'_>,
        function: LaboratoryFunction,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        match function {
            LaboratoryFunction::AddLaboratory => self.add_laboratory(ctx, args).await,
            LaboratoryFunction::AddMedicineOrder => self.add_medicine_order(ctx, args).await,
            LaboratoryFunction::SendOrder => self.dispatch_order(ctx, args).await,
            LaboratoryFunction::CreateMarketingAuthorization => {
                self.delegate_authorization(ctx, args).await
            }
            LaboratoryFunction::QueryByLab => {
                require_lab_key(&args[0])?;
                point_lookup(ctx.store, &args[0], "a LAB").await
            }
            LaboratoryFunction::QueryLabSummary => self.query_summary(ctx, &args[0]).await,
            LaboratoryFunction::QueryLabByAuthority => self.query_by_authority(ctx, &args[0]).await,
        }
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    async fn add_laboratory(
        &self,
        ctx: &TxContext<'_>,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let lab = Laboratory::new(&args[0], &args[1], &args[2], &args[3]);
        write_record(ctx.store, &args[0], &lab).await?;
        info!(laboratory = %args[0], owner = %args[3], "Laboratory registered");
        Ok(Vec::new())
    }

    async fn add_medicine_order(
        &self,
        ctx: &TxContext<'_>,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let key = &args[0];
        require_lab_key(key)?;

        let (quantity, parsed) = parse_quantity(&args[4]);
        if !parsed {
            warn!(laboratory = %key, raw = %args[4], "Unparsable order quantity, using 0");
        }
        let order = Order::new(&args[2], &args[3], quantity, ctx.ledger_date());

        let mut lab: Laboratory = read_or_default(ctx.store, key).await?;
        let orders = place_order(&mut lab, &args[1], order);
        write_record(ctx.store, key, &lab).await?;

        info!(
            laboratory = %key,
            pharmacy = %args[1],
            medicine = %args[2],
            quantity,
            orders,
            "Medicine order placed"
        );
        Ok(Vec::new())
    }

    async fn dispatch_order(
        &self,
        ctx: &TxContext<'_>,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let key = &args[0];
        let (quantity, _) = parse_quantity(&args[4]);
        let target = OrderMatch {
            name: &args[2],
            desc: &args[3],
            quantity,
        };

        let mut lab: Laboratory = read_or_default(ctx.store, key).await?;
        send_order(&mut lab, &args[1], &target, &ctx.ledger_date())?;
        write_record(ctx.store, key, &lab).await?;

        info!(
            laboratory = %key,
            pharmacy = %args[1],
            medicine = %args[2],
            quantity,
            "Order sent"
        );
        Ok(Vec::new())
    }

    async fn delegate_authorization(
        &self,
        ctx: &TxContext<'_>,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let target = ContractTarget::new(&self.config.authority_contract, &self.config.channel);
        let response = ctx
            .transport
            .invoke(
                &target,
                &self.config.authorization_function,
                to_invocation_args(args),
            )
            .await;

        if !response.is_ok() {
            let detail = if response.payload.is_empty() {
                response.message
            } else {
                response.payload_str()
            };
            return Err(ContractError::Delegation(format!(
                "Failed to invoke {}. Got error: {detail}",
                target.contract_id
            )));
        }

        info!(
            %target,
            owner = %args[0],
            laboratory = %args[1],
            medicine = %args[2],
            "Marketing authorization delegated"
        );
        Ok(response.payload)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    async fn query_summary(&self, ctx: &TxContext<'_>, key: &str) -> Result<Vec<u8>, ContractError> {
        require_lab_key(key)?;
        let lab: Laboratory = read_record(ctx.store, key)
            .await?
            .ok_or_else(|| ContractError::NotFound("Invalid key. Expecting a LAB".to_string()))?;
        let bytes = serde_json::to_vec(&lab.summary()).map_err(StoreError::from)?;
        Ok(bytes)
    }

    async fn query_by_authority(
        &self,
        ctx: &TxContext<'_>,
        owner: &str,
    ) -> Result<Vec<u8>, ContractError> {
        if owner.is_empty() {
            return Err(ContractError::Argument(
                "Empty key. Expecting an ARM owner".to_string(),
            ));
        }
        let owner = owner.to_lowercase();
        debug!(owner = %owner, "Querying laboratories by authority");

        let selector = Selector::of_type(LAB_DOC_TYPE).field_eq(OWNER_FIELD, owner);
        selector_listing(ctx.store, &selector).await
    }
}

#[async_trait]
impl Contract for LaboratoryContract {
    fn contract_id(&self) -> &'static str {
        LABORATORY_CONTRACT_ID
    }

    #[instrument(name = "lab_invoke", skip(self, ctx, args), fields(tx_id = %ctx.tx_id))]
    async fn invoke(&self, ctx: &TxContext<'_>, function: &str, args: &[String]) -> Response {
        let result = match LaboratoryFunction::resolve(function, args) {
            Ok(f) => self.execute(ctx, f, args).await,
            Err(e) => Err(e),
        };
        into_response(LABORATORY_CONTRACT_ID, function, result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
