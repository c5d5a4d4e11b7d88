//! Flat sailing records for presentation.
//!
//! Search results leave the planner as [`SailingRecord`]s. The field names
//! are the externally visible keys of the JSON output.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::Sailing;

/// A sailing as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SailingRecord {
    /// Origin port code
    pub origin_port: String,

    /// Destination port code
    pub destination_port: String,

    /// Departure date, `YYYY-MM-DD`
    pub departure_date: String,

    /// Arrival date, `YYYY-MM-DD`
    pub arrival_date: String,

    /// Code of the rate the sailing is priced at
    pub sailing_code: String,

    /// Rate in its original currency, as decimal text
    pub rate: String,

    /// Currency of `rate`
    pub rate_currency: String,
}

impl SailingRecord {
    /// Project a sailing with its rate.
    pub fn from_sailing(sailing: &Sailing) -> Self {
        Self {
            origin_port: sailing.origin.to_string(),
            destination_port: sailing.destination.to_string(),
            departure_date: sailing.departure.format("%Y-%m-%d").to_string(),
            arrival_date: sailing.arrival.format("%Y-%m-%d").to_string(),
            sailing_code: sailing.rate.code.clone(),
            rate: sailing.rate.rate.to_string(),
            rate_currency: sailing.rate.currency.to_string(),
        }
    }
}

/// Project sailings in the order given.
pub fn format_sailings(sailings: &[Arc<Sailing>]) -> Vec<SailingRecord> {
    sailings
        .iter()
        .map(|sailing| SailingRecord::from_sailing(sailing))
        .collect()
}
