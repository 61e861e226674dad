//! # Laboratory Configuration

/// Where authorization requests are delegated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaboratoryConfig {
    /// Deployed id of the Authority Registry.
    pub authority_contract: String,
    /// Channel the Authority Registry is deployed on.
    pub channel: String,
    /// Function invoked on the Authority Registry.
    pub authorization_function: String,
}

impl Default for LaboratoryConfig {
    fn default() -> Self {
        Self {
            authority_contract: "arm".to_string(),
            channel: "mychannel".to_string(),
            authorization_function: "addMarketingAuthorization".to_string(),
        }
    }
}
