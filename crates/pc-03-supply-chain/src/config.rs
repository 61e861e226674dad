//! # SupplyChain Configuration

/// Key range scanned by the asset listings, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplyChainConfig {
    /// Inclusive lower bound.
    pub asset_range_start: String,
    /// Exclusive upper bound.
    pub asset_range_end: String,
}

impl Default for SupplyChainConfig {
    fn default() -> Self {
        Self {
            asset_range_start: "ASSET0".to_string(),
            asset_range_end: "ASSET999".to_string(),
        }
    }
}
