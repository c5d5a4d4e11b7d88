//! Daily EUR exchange rates.

use std::collections::HashMap;

use chrono::NaiveDate;

use super::{Amount, Currency};

/// Error converting an amount to EUR.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// No exchange rates are recorded for the date
    #[error("no exchange rates for {0}")]
    MissingDate(NaiveDate),

    /// Rates exist for the date but not for the currency
    #[error("no {currency} exchange rate for {date}")]
    MissingCurrency { date: NaiveDate, currency: Currency },

    /// The recorded rate cannot be divided by
    #[error("unusable {currency} exchange rate {rate} for {date}")]
    InvalidRate {
        date: NaiveDate,
        currency: Currency,
        rate: f64,
    },
}

/// Exchange rates per date, expressed as units of currency per 1 EUR.
///
/// Currency keys are the lowercase ISO code (`"usd"`, `"jpy"`), matching the
/// import format.
#[derive(Debug, Clone, Default)]
pub struct ExchangeRates {
    by_date: HashMap<NaiveDate, HashMap<String, f64>>,
}

impl ExchangeRates {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rates recorded for a date.
    pub fn rates_on(&self, date: NaiveDate) -> Option<&HashMap<String, f64>> {
        self.by_date.get(&date)
    }

    /// Record the rates for a date.
    ///
    /// Keys are lowercased. Returns the previously recorded rates if the date
    /// was already present.
    pub fn insert(
        &mut self,
        date: NaiveDate,
        rates: HashMap<String, f64>,
    ) -> Option<HashMap<String, f64>> {
        let rates = rates
            .into_iter()
            .map(|(currency, rate)| (currency.to_ascii_lowercase(), rate))
            .collect();
        self.by_date.insert(date, rates)
    }

    /// Returns the number of dates with recorded rates.
    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    /// Returns true if no rates are recorded.
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    /// Convert an amount to EUR using the rate on `date`.
    ///
    /// EUR amounts are returned unchanged without consulting the table.
    pub fn to_eur(
        &self,
        amount: Amount,
        currency: Currency,
        date: NaiveDate,
    ) -> Result<Amount, ConversionError> {
        if currency.is_eur() {
            return Ok(amount);
        }

        let rates = self
            .by_date
            .get(&date)
            .ok_or(ConversionError::MissingDate(date))?;

        let key = currency.as_str().to_ascii_lowercase();
        let rate = *rates
            .get(&key)
            .ok_or(ConversionError::MissingCurrency { date, currency })?;

        amount.divide_by(rate).ok_or(ConversionError::InvalidRate {
            date,
            currency,
            rate,
        })
    }
}
