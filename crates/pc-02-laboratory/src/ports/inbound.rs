//! # Driving Port (API - Inbound)
//!
//! Function table of the Laboratory contract.

use shared_types::{Arity, ContractFunction};

/// Operations exposed by the Laboratory contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaboratoryFunction {
    /// `addLaboratory(name, createdDate, address, armOwner)`
    AddLaboratory,
    /// `addMedicineOrder(lab, pharmacy, medicine, desc, quantity)`
    AddMedicineOrder,
    /// `SendOrder(lab, pharmacy, medicine, desc, quantity, date)`
    SendOrder,
    /// `createMarketingAuthorization(owner, lab, medicine, date)`
    CreateMarketingAuthorization,
    /// `queryByLab(lab)`
    QueryByLab,
    /// `queryLabsJSON(lab)`
    QueryLabSummary,
    /// `queryLabByARM(owner, ...)`
    QueryLabByAuthority,
}

impl ContractFunction for LaboratoryFunction {
    const ALL: &'static [Self] = &[
        Self::AddLaboratory,
        Self::AddMedicineOrder,
        Self::SendOrder,
        Self::CreateMarketingAuthorization,
        Self::QueryByLab,
        Self::QueryLabSummary,
        Self::QueryLabByAuthority,
    ];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "addLaboratory" => Some(Self::AddLaboratory),
            "addMedicineOrder" => Some(Self::AddMedicineOrder),
            "SendOrder" | "sendOrder" => Some(Self::SendOrder),
            "createMarketingAuthorization" => Some(Self::CreateMarketingAuthorization),
            "queryByLab" => Some(Self::QueryByLab),
            "queryLabsJSON" => Some(Self::QueryLabSummary),
            "queryLabByARM" | "queryLabByAuthority" => Some(Self::QueryLabByAuthority),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::AddLaboratory => "addLaboratory",
            Self::AddMedicineOrder => "addMedicineOrder",
            Self::SendOrder => "SendOrder",
            Self::CreateMarketingAuthorization => "createMarketingAuthorization",
            Self::QueryByLab => "queryByLab",
            Self::QueryLabSummary => "queryLabsJSON",
            Self::QueryLabByAuthority => "queryLabByARM",
        }
    }

    fn arity(self) -> Arity {
        match self {
            Self::AddLaboratory | Self::CreateMarketingAuthorization => Arity::Exact(4),
            Self::AddMedicineOrder => Arity::Exact(5),
            Self::SendOrder => Arity::Exact(6),
            Self::QueryByLab | Self::QueryLabSummary => Arity::Exact(1),
            Self::QueryLabByAuthority => Arity::AtLeast(1),
        }
    }
}
