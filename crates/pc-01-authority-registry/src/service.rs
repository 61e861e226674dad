//! # Authority Registry Service
//!
//! Contract implementation. Every mutation is a whole-record
//! read-modify-write of one `Authority` keyed by its id.

use crate::domain::entities::Authority;
use crate::ports::inbound::AuthorityFunction;
use async_trait::async_trait;
use shared_types::{
    into_response, point_lookup, read_record, write_record, Contract, ContractError,
    ContractFunction, Response, TxContext,
};
use tracing::{info, instrument};

/// Deployed id of the Authority Registry.
pub const AUTHORITY_CONTRACT_ID: &str = "arm";

/// The Authority Registry contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthorityRegistryContract;

impl AuthorityRegistryContract {
    /// Create the contract.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    async fn execute(
        &self,
        ctx: &TxContext<'_>,
        function: AuthorityFunction,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        match function {
            AuthorityFunction::RegisterAuthority => {
                self.register_authority(ctx, &args[0], &args[1]).await
            }
            AuthorityFunction::RegisterLaboratory => {
                self.register_laboratory(ctx, &args[0], &args[1]).await
            }
            AuthorityFunction::CreateMarketingAuthorization => {
                self.create_authorization(ctx, &args[0], &args[1], &args[2], &args[3])
                    .await
            }
            AuthorityFunction::QueryAuthority => {
                point_lookup(ctx.store, &args[0], "an ARM").await
            }
        }
    }

    async fn register_authority(
        &self,
        ctx: &TxContext<'_>,
        id: &str,
        description: &str,
    ) -> Result<Vec<u8>, ContractError> {
        if id.is_empty() {
            return Err(ContractError::Argument(
                "1st argument must be a non-empty string".to_string(),
            ));
        }
        if description.is_empty() {
            return Err(ContractError::Argument(
                "2nd argument must be a non-empty string".to_string(),
            ));
        }

        write_record(ctx.store, id, &Authority::new(id, description)).await?;
        info!(authority = id, "Authority registered");
        Ok(Vec::new())
    }

    async fn register_laboratory(
        &self,
        ctx: &TxContext<'_>,
        authority_id: &str,
        laboratory: &str,
    ) -> Result<Vec<u8>, ContractError> {
        let mut authority = load_authority(ctx, authority_id).await?;
        authority.list_laboratory(laboratory);
        write_record(ctx.store, authority_id, &authority).await?;

        info!(
            authority = authority_id,
            laboratory,
            listed = authority.laboratories.len(),
            "Laboratory listed under authority"
        );
        Ok(Vec::new())
    }

    async fn create_authorization(
        &self,
        ctx: &TxContext<'_>,
        authority_id: &str,
        laboratory: &str,
        medicine: &str,
        date: &str,
    ) -> Result<Vec<u8>, ContractError> {
        let mut authority = load_authority(ctx, authority_id).await?;
        authority.grant(laboratory, medicine, date)?;

        let bytes = write_record(ctx.store, authority_id, &authority).await?;

        info!(
            authority = authority_id,
            laboratory, medicine, "Marketing authorization granted"
        );
        Ok(bytes)
    }
}

async fn load_authority(ctx: &TxContext<'_>, id: &str) -> Result<Authority, ContractError> {
    read_record(ctx.store, id)
        .await?
        .ok_or_else(|| ContractError::NotFound("Failed to get specified ARM".to_string()))
}

#[async_trait]
impl Contract for AuthorityRegistryContract {
    fn contract_id(&self) -> &'static str {
        AUTHORITY_CONTRACT_ID
    }

    #[instrument(name = "arm_invoke", skip(self, ctx, args), fields(tx_id = %ctx.tx_id))]
    async fn invoke(&self, ctx: &TxContext<'_>, function: &str, args: &[String]) -> Response {
        let result = match AuthorityFunction::resolve(function, args) {
            Ok(f) => self.execute(ctx, f, args).await,
            Err(e) => Err(e),
        };
        into_response(AUTHORITY_CONTRACT_ID, function, result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
