//! # Laboratory Entities
//!
//! A laboratory owns an ordered list of pharmacies, each of which owns an
//! ordered list of orders. Lists are append-only; order state is derived from
//! the order's flag and date fields.

use serde::{Deserialize, Serialize};
use shared_types::null_as_default;

/// Declared type of laboratory records, used by selector queries.
pub const LAB_DOC_TYPE: &str = "lab";

/// Value of `sentflag` once an order was sent.
pub const SENT_FLAG: &str = "true";

// =============================================================================
// ORDER
// =============================================================================

/// Lifecycle state of an order, derived from its fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// Created, not sent, not cancelled.
    Pending,
    /// Sent flag set.
    Sent,
    /// Cancellation date set.
    Cancelled,
}

/// A medicine order placed by a pharmacy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Medicine name.
    pub name: String,
    /// Medicine description.
    pub desc: String,
    /// Units ordered.
    pub quantity: i64,
    /// Creation date (`dd/mm/yyyy`).
    #[serde(rename = "datecreated")]
    pub date_created: String,
    /// Dispatch date, empty until sent.
    #[serde(rename = "datesent")]
    pub date_sent: String,
    /// Arrival date. Stored for compatibility; no operation sets it.
    #[serde(rename = "datearrival")]
    pub date_arrival: String,
    /// Cancellation date. Stored for compatibility; no operation sets it.
    #[serde(rename = "datecancelled")]
    pub date_cancelled: String,
    /// `"true"` once sent, empty otherwise.
    #[serde(rename = "sentflag")]
    pub sent_flag: String,
}

impl Order {
    /// New pending order created on `date_created`.
    pub fn new(
        name: impl Into<String>,
        desc: impl Into<String>,
        quantity: i64,
        date_created: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            desc: desc.into(),
            quantity,
            date_created: date_created.into(),
            ..Self::default()
        }
    }

    /// Derived lifecycle state. Cancellation takes precedence.
    #[must_use]
    pub fn status(&self) -> OrderStatus {
        if !self.date_cancelled.is_empty() {
            OrderStatus::Cancelled
        } else if self.sent_flag == SENT_FLAG {
            OrderStatus::Sent
        } else {
            OrderStatus::Pending
        }
    }
}

// =============================================================================
// PHARMACY
// =============================================================================

/// A pharmacy with the orders it placed at one laboratory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pharmacy {
    /// Pharmacy name.
    pub pharmacy: String,
    /// Orders in placement order.
    #[serde(deserialize_with = "null_as_default")]
    pub order: Vec<Order>,
}

// =============================================================================
// LABORATORY
// =============================================================================

/// Marketing authorization as recorded on the laboratory side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketingAuthorization {
    /// Medicine name.
    pub medicine: String,
    /// Grant date.
    #[serde(rename = "createdDate")]
    pub created_date: String,
}

/// A laboratory producing medicines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Laboratory {
    /// Always [`LAB_DOC_TYPE`].
    #[serde(rename = "docType")]
    pub doc_type: String,
    /// Laboratory name.
    #[serde(rename = "laboratoryName")]
    pub laboratory_name: String,
    /// Registration date as supplied by the caller.
    #[serde(rename = "createdDate")]
    pub created_date: String,
    /// Postal address.
    pub address: String,
    /// Owning authority.
    #[serde(rename = "armOwner")]
    pub arm_owner: String,
    /// Authorizations held.
    #[serde(deserialize_with = "null_as_default")]
    pub authorizations: Vec<MarketingAuthorization>,
    /// Pharmacies with orders, in first-order order.
    #[serde(deserialize_with = "null_as_default")]
    pub pharmacy: Vec<Pharmacy>,
}

impl Default for Laboratory {
    fn default() -> Self {
        Self {
            doc_type: LAB_DOC_TYPE.to_string(),
            laboratory_name: String::new(),
            created_date: String::new(),
            address: String::new(),
            arm_owner: String::new(),
            authorizations: Vec::new(),
            pharmacy: Vec::new(),
        }
    }
}

impl Laboratory {
    /// New laboratory with no authorizations and no pharmacies.
    pub fn new(
        laboratory_name: impl Into<String>,
        created_date: impl Into<String>,
        address: impl Into<String>,
        arm_owner: impl Into<String>,
    ) -> Self {
        Self {
            laboratory_name: laboratory_name.into(),
            created_date: created_date.into(),
            address: address.into(),
            arm_owner: arm_owner.into(),
            ..Self::default()
        }
    }

    /// Flat view without nested lists.
    #[must_use]
    pub fn summary(&self) -> LaboratorySummary<'_> {
        LaboratorySummary {
            laboratory_name: &self.laboratory_name,
            created_date: &self.created_date,
            address: &self.address,
            arm_owner: &self.arm_owner,
        }
    }
}

/// Summary projection returned by `queryLabsJSON`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaboratorySummary<'a> {
    /// Laboratory name.
    #[serde(rename = "laboratoryName")]
    pub laboratory_name: &'a str,
    /// Registration date.
    #[serde(rename = "createdDate")]
    pub created_date: &'a str,
    /// Postal address.
    pub address: &'a str,
    /// Owning authority.
    #[serde(rename = "armOwner")]
    pub arm_owner: &'a str,
}
