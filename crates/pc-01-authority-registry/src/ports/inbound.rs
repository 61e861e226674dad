//! # Driving Port (API - Inbound)
//!
//! Function table of the Authority Registry contract.

use shared_types::{Arity, ContractFunction};

/// Operations exposed by the Authority Registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorityFunction {
    /// `addARM(id, description)`
    RegisterAuthority,
    /// `addLaboratory(authorityId, laboratoryName)`
    RegisterLaboratory,
    /// `addMarketingAuthorization(authorityId, laboratoryName, medicine, date)`
    CreateMarketingAuthorization,
    /// `queryByMarketingAuthorization(authorityId)`
    QueryAuthority,
}

impl ContractFunction for AuthorityFunction {
    const ALL: &'static [Self] = &[
        Self::RegisterAuthority,
        Self::RegisterLaboratory,
        Self::CreateMarketingAuthorization,
        Self::QueryAuthority,
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "addARM" | "registerAuthority" => Some(Self::RegisterAuthority),
            "addLaboratory" | "registerLaboratoryUnderAuthority" => Some(Self::RegisterLaboratory),
            "addMarketingAuthorization" | "createMarketingAuthorization" => {
                Some(Self::CreateMarketingAuthorization)
            }
            "queryByMarketingAuthorization" => Some(Self::QueryAuthority),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::RegisterAuthority => "addARM",
            Self::RegisterLaboratory => "addLaboratory",
            Self::CreateMarketingAuthorization => "addMarketingAuthorization",
            Self::QueryAuthority => "queryByMarketingAuthorization",
        }
    }

    fn arity(self) -> Arity {
        match self {
            Self::RegisterAuthority | Self::RegisterLaboratory => Arity::Exact(2),
            Self::CreateMarketingAuthorization => Arity::Exact(4),
            Self::QueryAuthority => Arity::Exact(1),
        }
    }
}
