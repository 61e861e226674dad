//! # Asset Entities
//!
//! An asset carries its custody history as two append-only lists: transits
//! (each a hand-over to a haulier at a location and time) and arrivals.
//! Values are kept as the strings the caller supplied.

use serde::{Deserialize, Serialize};
use shared_types::null_as_default;

/// One custody hand-over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transit {
    /// Latitude.
    pub lat: String,
    /// Longitude.
    pub lon: String,
    /// Time of the hand-over.
    pub time: String,
    /// Haulier receiving the asset.
    #[serde(rename = "haulierreceptor")]
    pub haulier_receptor: String,
}

/// An arrival event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Arrival {
    /// Arrival date.
    pub date: String,
    /// Condition on arrival.
    pub status: String,
}

/// A tracked physical asset. The asset id is the ledger key, not a field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    /// Asset type.
    #[serde(rename = "type")]
    pub asset_type: String,
    /// Quantity.
    pub qty: String,
    /// Price.
    pub price: String,
    /// Listing date.
    #[serde(rename = "datel")]
    pub listing_date: String,
    /// Current custodian.
    pub agent: String,
    /// Custody hand-overs, oldest first.
    #[serde(deserialize_with = "null_as_default")]
    pub transits: Vec<Transit>,
    /// Arrival events, oldest first.
    #[serde(rename = "arrival", deserialize_with = "null_as_default")]
    pub arrivals: Vec<Arrival>,
}

impl Asset {
    /// Record a hand-over to `transit.haulier_receptor`, who becomes the agent.
    pub fn hand_over(&mut self, transit: Transit) {
        self.agent.clone_from(&transit.haulier_receptor);
        self.transits.push(transit);
    }

    /// Record an arrival.
    pub fn record_arrival(&mut self, arrival: Arrival) {
        self.arrivals.push(arrival);
    }
}
