//! Schedule import.
//!
//! Converts a JSON schedule document (exchange rates, published rates and
//! sailings) into an [`InMemoryRepository`]. Import is all-or-nothing: the
//! first invalid entry aborts it and no repository is produced.
//!
//! Identical duplicate entries are collapsed. Entries that reuse a rate code
//! or an exchange-rate date with different values are errors.

mod error;
mod types;

pub use error::ImportError;
pub use types::{RateEntry, SailingEntry, ScheduleDocument};

use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::domain::{Amount, Currency, ExchangeRates, PortCode, Sailing, SailingId, SailingRate};
use crate::repository::InMemoryRepository;

/// Import a schedule document from a file.
pub fn import_file(path: &Path) -> Result<InMemoryRepository, ImportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ImportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read schedule document");
    import_str(&contents)
}

/// Import a schedule document from JSON text.
pub fn import_str(json: &str) -> Result<InMemoryRepository, ImportError> {
    let document: ScheduleDocument = serde_json::from_str(json)?;
    import_document(&document)
}

/// Import an already-parsed schedule document.
pub fn import_document(document: &ScheduleDocument) -> Result<InMemoryRepository, ImportError> {
    let exchange = import_exchange_rates(&document.exchange_rates)?;
    let rates = import_rates(&document.rates)?;
    let sailings = import_sailings(&document.sailings, &rates, &exchange)?;

    let repo = InMemoryRepository::new(sailings);
    info!(
        exchange_dates = exchange.len(),
        rates = rates.len(),
        sailings = repo.len(),
        "imported schedule"
    );
    Ok(repo)
}

fn import_exchange_rates(
    entries: &BTreeMap<String, HashMap<String, f64>>,
) -> Result<ExchangeRates, ImportError> {
    let mut exchange = ExchangeRates::new();

    for (date, rates) in entries {
        let date = parse_date(date)?;
        let rates: HashMap<String, f64> = rates
            .iter()
            .map(|(currency, rate)| (currency.to_ascii_lowercase(), *rate))
            .collect();

        match exchange.rates_on(date) {
            Some(existing) if *existing == rates => {
                debug!(%date, "skipping duplicate exchange rates");
            }
            Some(_) => return Err(ImportError::ConflictingExchangeRate { date }),
            None => {
                exchange.insert(date, rates);
            }
        }
    }

    Ok(exchange)
}

fn import_rates(entries: &[RateEntry]) -> Result<HashMap<String, Arc<SailingRate>>, ImportError> {
    let mut rates: HashMap<String, Arc<SailingRate>> = HashMap::new();

    for entry in entries {
        let amount = Amount::parse(&entry.rate).map_err(|source| ImportError::InvalidAmount {
            value: entry.rate.clone(),
            source,
        })?;
        let currency =
            Currency::parse(&entry.rate_currency).map_err(|source| ImportError::InvalidCurrency {
                value: entry.rate_currency.clone(),
                source,
            })?;
        let rate = SailingRate::new(entry.sailing_code.as_str(), amount, currency)?;

        match rates.get(&rate.code) {
            Some(existing) if **existing == rate => {
                debug!(code = %rate.code, "skipping duplicate rate");
            }
            Some(_) => {
                return Err(ImportError::ConflictingRate {
                    code: rate.code.clone(),
                });
            }
            None => {
                rates.insert(rate.code.clone(), Arc::new(rate));
            }
        }
    }

    Ok(rates)
}

fn import_sailings(
    entries: &[SailingEntry],
    rates: &HashMap<String, Arc<SailingRate>>,
    exchange: &ExchangeRates,
) -> Result<Vec<Sailing>, ImportError> {
    let mut seen: HashSet<(PortCode, PortCode, NaiveDate, NaiveDate, String)> = HashSet::new();
    let mut sailings = Vec::with_capacity(entries.len());

    for entry in entries {
        let origin = parse_port(&entry.origin_port)?;
        let destination = parse_port(&entry.destination_port)?;
        let departure = parse_date(&entry.departure_date)?;
        let arrival = parse_date(&entry.arrival_date)?;

        let rate = rates
            .get(&entry.sailing_code)
            .ok_or_else(|| ImportError::UnknownRate {
                code: entry.sailing_code.clone(),
            })?;

        let key = (
            origin.clone(),
            destination.clone(),
            departure,
            arrival,
            entry.sailing_code.clone(),
        );
        if !seen.insert(key) {
            debug!(
                origin = %origin,
                destination = %destination,
                %departure,
                code = %entry.sailing_code,
                "skipping duplicate sailing"
            );
            continue;
        }

        let cost_in_eur = exchange.to_eur(rate.rate, rate.currency, departure)?;
        let id = SailingId(sailings.len() as u64 + 1);

        sailings.push(Sailing::new(
            id,
            origin,
            destination,
            departure,
            arrival,
            cost_in_eur,
            rate.clone(),
        )?);
    }

    Ok(sailings)
}

fn parse_date(value: &str) -> Result<NaiveDate, ImportError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|source| ImportError::InvalidDate {
        value: value.to_string(),
        source,
    })
}

fn parse_port(value: &str) -> Result<PortCode, ImportError> {
    PortCode::parse(value).map_err(|source| ImportError::InvalidPort {
        value: value.to_string(),
        source,
    })
}
