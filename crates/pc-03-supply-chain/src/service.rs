//! # SupplyChain Service
//!
//! Contract implementation. Custody updates read the whole `Asset`, append to
//! one of its lists and write it back; a missing asset starts from the empty
//! record.

use crate::config::SupplyChainConfig;
use crate::domain::entities::{Arrival, Asset, Transit};
use crate::ports::inbound::SupplyChainFunction;
use async_trait::async_trait;
use shared_types::{
    into_response, point_lookup, range_listing, read_or_default, write_record, Contract,
    ContractError, ContractFunction, Projection, Response, TxContext,
};
use tracing::{info, instrument};

/// Deployed id of the SupplyChain contract.
pub const SUPPLY_CHAIN_CONTRACT_ID: &str = "supplychain";

/// The SupplyChain contract.
#[derive(Debug, Clone, Default)]
pub struct SupplyChainContract {
    config: SupplyChainConfig,
}

impl SupplyChainContract {
    /// Contract listing the default asset key range.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SupplyChainConfig::default())
    }

    /// Contract with an explicit asset key range.
    #[must_use]
    pub fn with_config(config: SupplyChainConfig) -> Self {
        Self { config }
    }

    async fn execute(
        &self,
        ctx: &TxContext<'_>,
        function: SupplyChainFunction,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        match function {
            SupplyChainFunction::BuyAsset => self.buy_asset(ctx, args).await,
            SupplyChainFunction::GenerateTransit => self.generate_transit(ctx, args).await,
            SupplyChainFunction::Arrival => self.arrival(ctx, args).await,
            SupplyChainFunction::QueryByAsset => {
                if args[0].is_empty() {
                    return Err(ContractError::Argument(
                        "Empty key. Expecting an Asset".to_string(),
                    ));
                }
                point_lookup(ctx.store, &args[0], "an Asset").await
            }
            SupplyChainFunction::QueryAllAssets => self.list(ctx, Projection::KeysAndRecords).await,
            SupplyChainFunction::QueryAssetKeys => self.list(ctx, Projection::KeysOnly).await,
        }
    }

    async fn buy_asset(&self, ctx: &TxContext<'_>, args: &[String]) -> Result<Vec<u8>, ContractError> {
        let transit = Transit {
            lat: args[6].clone(),
            lon: args[7].clone(),
            time: args[8].clone(),
            haulier_receptor: args[5].clone(),
        };
        let asset = Asset {
            asset_type: args[1].clone(),
            qty: args[2].clone(),
            price: args[3].clone(),
            listing_date: args[4].clone(),
            agent: args[5].clone(),
            transits: vec![transit],
            arrivals: Vec::new(),
        };

        write_record(ctx.store, &args[0], &asset).await?;
        info!(asset = %args[0], agent = %args[5], "Asset bought");
        Ok(Vec::new())
    }

    async fn generate_transit(
        &self,
        ctx: &TxContext<'_>,
        args: &[String],
    ) -> Result<Vec<u8>, ContractError> {
        let mut asset: Asset = read_or_default(ctx.store, &args[0]).await?;
        asset.hand_over(Transit {
            lat: args[1].clone(),
            lon: args[2].clone(),
            time: args[3].clone(),
            haulier_receptor: args[4].clone(),
        });
        write_record(ctx.store, &args[0], &asset).await?;

        info!(
            asset = %args[0],
            receptor = %args[4],
            transits = asset.transits.len(),
            "Transit recorded"
        );
        Ok(Vec::new())
    }

    async fn arrival(&self, ctx: &TxContext<'_>, args: &[String]) -> Result<Vec<u8>, ContractError> {
        let mut asset: Asset = read_or_default(ctx.store, &args[0]).await?;
        asset.record_arrival(Arrival {
            date: args[1].clone(),
            status: args[2].clone(),
        });
        write_record(ctx.store, &args[0], &asset).await?;

        info!(asset = %args[0], status = %args[2], "Arrival recorded");
        Ok(Vec::new())
    }

    async fn list(
        &self,
        ctx: &TxContext<'_>,
        projection: Projection,
    ) -> Result<Vec<u8>, ContractError> {
        range_listing(
            ctx.store,
            &self.config.asset_range_start,
            &self.config.asset_range_end,
            projection,
        )
        .await
    }
}

#[async_trait]
impl Contract for SupplyChainContract {
    fn contract_id(&self) -> &'static str {
        SUPPLY_CHAIN_CONTRACT_ID
    }

    #[instrument(name = "supplychain_invoke", skip(self, ctx, args), fields(tx_id = %ctx.tx_id))]
    async fn invoke(&self, ctx: &TxContext<'_>, function: &str, args: &[String]) -> Response {
        let result = match SupplyChainFunction::resolve(function, args) {
            Ok(f) => self.execute(ctx, f, args).await,
            Err(e) => Err(e),
        };
        into_response(SUPPLY_CHAIN_CONTRACT_ID, function, result)
    }
}

// =============================================================================
// TESTS
// =============================================================================
