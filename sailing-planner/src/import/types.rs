//! Schedule document wire types.
//!
//! These mirror the JSON import format exactly. Values stay as text here and
//! are validated when the document is converted into a repository.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// A complete schedule document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    /// Currency rates per date: `"2025-01-01" -> { "usd": 1.1 }`
    #[serde(default)]
    pub exchange_rates: BTreeMap<String, HashMap<String, f64>>,

    /// Published rates by sailing code
    #[serde(default)]
    pub rates: Vec<RateEntry>,

    /// Scheduled sailings
    #[serde(default)]
    pub sailings: Vec<SailingEntry>,
}

/// A published rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub sailing_code: String,

    /// Decimal text, e.g. `"100.00"`
    pub rate: String,

    pub rate_currency: String,
}

/// A scheduled sailing referencing a rate by code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SailingEntry {
    pub origin_port: String,
    pub destination_port: String,

    /// `YYYY-MM-DD`
    pub departure_date: String,

    /// `YYYY-MM-DD`
    pub arrival_date: String,

    pub sailing_code: String,
}
