//! Import error types.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::domain::{
    ConversionError, Currency, DomainError, InvalidAmount, InvalidCurrency, InvalidPortCode,
};

/// Errors that can occur while importing a schedule document.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The document could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON for the schedule format
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A date is not `YYYY-MM-DD`
    #[error("invalid date {value:?}: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A port code is malformed
    #[error("invalid port {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: InvalidPortCode,
    },

    /// A rate is not a decimal amount
    #[error("invalid rate {value:?}: {source}")]
    InvalidAmount {
        value: String,
        #[source]
        source: InvalidAmount,
    },

    /// A rate currency is malformed
    #[error("invalid currency {value:?}: {source}")]
    InvalidCurrency {
        value: String,
        #[source]
        source: InvalidCurrency,
    },

    /// A rate was published without a sailing code
    #[error("rate has an empty sailing code")]
    EmptySailingCode,

    /// A sailing references a rate code that was never published
    #[error("sailing references unknown rate {code}")]
    UnknownRate { code: String },

    /// No exchange rates exist for a sailing's departure date
    #[error("no exchange rates for {date}")]
    MissingExchangeRate { date: NaiveDate },

    /// Exchange rates exist for the date but not for the currency
    #[error("no {currency} exchange rate for {date}")]
    MissingCurrency { date: NaiveDate, currency: Currency },

    /// An exchange rate that cannot be divided by
    #[error("unusable {currency} exchange rate {rate} for {date}")]
    InvalidExchangeRate {
        date: NaiveDate,
        currency: Currency,
        rate: f64,
    },

    /// The same rate code was published twice with different values
    #[error("rate {code} is published more than once with different values")]
    ConflictingRate { code: String },

    /// The same date appears twice with different exchange rates
    #[error("exchange rates for {date} are given more than once with different values")]
    ConflictingExchangeRate { date: NaiveDate },

    /// A sailing does not arrive after it departs
    #[error("arrival {arrival} must be after departure {departure}")]
    InvalidSchedule {
        departure: NaiveDate,
        arrival: NaiveDate,
    },
}

impl From<DomainError> for ImportError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::InvalidSchedule { departure, arrival } => {
                ImportError::InvalidSchedule { departure, arrival }
            }
            DomainError::EmptySailingCode => ImportError::EmptySailingCode,
        }
    }
}

impl From<ConversionError> for ImportError {
    fn from(e: ConversionError) -> Self {
        match e {
            ConversionError::MissingDate(date) => ImportError::MissingExchangeRate { date },
            ConversionError::MissingCurrency { date, currency } => {
                ImportError::MissingCurrency { date, currency }
            }
            ConversionError::InvalidRate {
                date,
                currency,
                rate,
            } => ImportError::InvalidExchangeRate {
                date,
                currency,
                rate,
            },
        }
    }
}
