//! # Authority Entities
//!
//! An authority owns an ordered listing of laboratories; each listing owns an
//! ordered list of marketing authorizations. All lists are append-only.

use serde::{Deserialize, Serialize};
use shared_types::{null_as_default, ContractError};

// =============================================================================
// MARKETING AUTHORIZATION
// =============================================================================

/// Permission for a laboratory to market one medicine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingAuthorization {
    /// Medicine name.
    pub medicine: String,
    /// Date the authorization was granted (`dd/mm/yyyy`).
    #[serde(rename = "createdDate")]
    pub created_date: String,
}

// =============================================================================
// LABORATORY LISTING
// =============================================================================

/// A laboratory as seen by the authority that lists it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaboratoryListing {
    /// Laboratory name.
    pub name: String,
    /// Authorizations granted to this laboratory, oldest first.
    #[serde(deserialize_with = "null_as_default")]
    pub authorizations: Vec<MarketingAuthorization>,
}

impl LaboratoryListing {
    /// Listing with no authorizations.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            authorizations: Vec::new(),
        }
    }
}

// =============================================================================
// AUTHORITY
// =============================================================================

/// A regulatory authority ("ARM").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Authority {
    /// Authority id, also the ledger key.
    pub id: String,
    /// Free-text description.
    pub description: String,
    /// Listed laboratories in registration order.
    #[serde(deserialize_with = "null_as_default")]
    pub laboratories: Vec<LaboratoryListing>,
}

impl Authority {
    /// New authority with an empty listing.
    pub fn new(id: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            laboratories: Vec::new(),
        }
    }

    /// Append a laboratory to the listing.
    ///
    /// Names are not deduplicated; later lookups resolve to the first entry.
    pub fn list_laboratory(&mut self, name: impl Into<String>) {
        self.laboratories.push(LaboratoryListing::new(name));
    }

    /// First listing whose name equals `name`.
    pub fn laboratory_mut(&mut self, name: &str) -> Option<&mut LaboratoryListing> {
        self.laboratories.iter_mut().find(|lab| lab.name == name)
    }

    /// Grant `medicine` to the first listed laboratory named `laboratory`.
    pub fn grant(
        &mut self,
        laboratory: &str,
        medicine: impl Into<String>,
        created_date: impl Into<String>,
    ) -> Result<(), ContractError> {
        let listing = self.laboratory_mut(laboratory).ok_or_else(|| {
            ContractError::NotFound("Failed to get specified Laboratory".to_string())
        })?;
        listing.authorizations.push(MarketingAuthorization {
            medicine: medicine.into(),
            created_date: created_date.into(),
        });
        Ok(())
    }
}
