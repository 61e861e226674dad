//! # Driving Port (API - Inbound)
//!
//! Function table of the SupplyChain contract.

use shared_types::{Arity, ContractFunction};

/// Operations exposed by the SupplyChain contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupplyChainFunction {
    /// `buyAsset(id, type, qty, price, datel, agent, lat, lon, time, _)`
    BuyAsset,
    /// `generateTransit(id, lat, lon, time, receptor)`
    GenerateTransit,
    /// `arrival(id, date, status)`
    Arrival,
    /// `queryByAsset(id)`
    QueryByAsset,
    /// `queryAllAssets()`
    QueryAllAssets,
    /// `queryAssets()`
    QueryAssetKeys,
}

impl ContractFunction for SupplyChainFunction {
    const ALL: &'static [Self] = &[
        Self::BuyAsset,
        Self::GenerateTransit,
        Self::Arrival,
        Self::QueryByAsset,
        Self::QueryAllAssets,
        Self::QueryAssetKeys,
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "buyAsset" => Some(Self::BuyAsset),
            "generateTransit" => Some(Self::GenerateTransit),
            "arrival" => Some(Self::Arrival),
            "queryByAsset" => Some(Self::QueryByAsset),
            "queryAllAssets" => Some(Self::QueryAllAssets),
            "queryAssets" => Some(Self::QueryAssetKeys),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::BuyAsset => "buyAsset",
            Self::GenerateTransit => "generateTransit",
            Self::Arrival => "arrival",
            Self::QueryByAsset => "queryByAsset",
            Self::QueryAllAssets => "queryAllAssets",
            Self::QueryAssetKeys => "queryAssets",
        }
    }

    fn arity(self) -> Arity {
        match self {
            Self::BuyAsset => Arity::Exact(10),
            Self::GenerateTransit => Arity::Exact(5),
            Self::Arrival => Arity::Exact(3),
            Self::QueryByAsset => Arity::Exact(1),
            Self::QueryAllAssets | Self::QueryAssetKeys => Arity::Any,
        }
    }
}
