//! Sailings and their rates.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use super::{Amount, Currency, DomainError, PortCode};

/// Repository-assigned identifier of a sailing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SailingId(pub u64);

impl fmt::Debug for SailingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SailingId({})", self.0)
    }
}

impl fmt::Display for SailingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The published rate for a sailing code, in its original currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SailingRate {
    /// Sailing code shared by every sailing priced at this rate (e.g. "ETRG")
    pub code: String,
    /// Rate in `currency`
    pub rate: Amount,
    /// Currency the rate is quoted in
    pub currency: Currency,
}

impl SailingRate {
    /// Creates a new rate. The code must be non-empty.
    pub fn new(
        code: impl Into<String>,
        rate: Amount,
        currency: Currency,
    ) -> Result<Self, DomainError> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(DomainError::EmptySailingCode);
        }
        Ok(Self {
            code,
            rate,
            currency,
        })
    }
}

/// A scheduled sailing between two ports.
///
/// Sailings are immutable once built. Construction guarantees the arrival
/// date is strictly after the departure date and derives `days` from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sailing {
    /// Identifier, unique within a repository
    pub id: SailingId,
    /// Port of departure
    pub origin: PortCode,
    /// Port of arrival
    pub destination: PortCode,
    /// Departure date
    pub departure: NaiveDate,
    /// Arrival date
    pub arrival: NaiveDate,
    /// Whole days between departure and arrival
    pub days: i64,
    /// Price converted to EUR on the departure date
    pub cost_in_eur: Amount,
    /// Published rate the price was derived from
    pub rate: Arc<SailingRate>,
}

impl Sailing {
    /// Creates a sailing, validating its schedule.
    pub fn new(
        id: SailingId,
        origin: PortCode,
        destination: PortCode,
        departure: NaiveDate,
        arrival: NaiveDate,
        cost_in_eur: Amount,
        rate: Arc<SailingRate>,
    ) -> Result<Self, DomainError> {
        if arrival <= departure {
            return Err(DomainError::InvalidSchedule { departure, arrival });
        }

        Ok(Self {
            id,
            origin,
            destination,
            departure,
            arrival,
            days: (arrival - departure).num_days(),
            cost_in_eur,
            rate,
        })
    }

    /// Returns true if this sailing goes directly from `origin` to `destination`.
    pub fn connects(&self, origin: &PortCode, destination: &PortCode) -> bool {
        &self.origin == origin && &self.destination == destination
    }
}
