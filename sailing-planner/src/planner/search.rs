//! Search strategies over a sailing repository.
//!
//! Cheapest-direct is a filter over the schedule. Cheapest and fastest hand
//! the whole schedule to the route finder with a price or duration cost and
//! resolve the returned ids back to sailings.

use std::ops::Add;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::debug;

use super::route::{RouteError, RouteQuery};
use crate::domain::{PortCode, Sailing, SailingId};
use crate::format::{SailingRecord, format_sailings};
use crate::repository::SailingRepository;

/// Error from a search strategy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The route finder rejected its input
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The route finder returned an id the repository does not know
    #[error("sailing {0} not found in repository")]
    UnknownSailing(SailingId),

    /// No strategy is registered under the name
    #[error("unknown search criteria: {0}")]
    UnknownCriteria(String),
}

/// A way of choosing sailings between two ports.
pub trait SearchStrategy: Send + Sync {
    /// Name users select the strategy by.
    fn name(&self) -> &'static str;

    /// Find the chosen sailings, in departure order.
    fn search(
        &self,
        repo: &dyn SailingRepository,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<Arc<Sailing>>, SearchError>;
}

/// The single cheapest direct sailing, earliest departure first on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheapestDirect;

impl SearchStrategy for CheapestDirect {
    fn name(&self) -> &'static str {
        "cheapest-direct"
    }

    fn search(
        &self,
        repo: &dyn SailingRepository,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<Arc<Sailing>>, SearchError> {
        let cheapest = repo
            .all()
            .into_iter()
            .filter(|s| s.connects(origin, destination))
            .min_by_key(|s| (s.cost_in_eur, s.departure));

        Ok(cheapest.into_iter().collect())
    }
}

/// Which sailing attribute a multi-hop search minimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostMetric {
    /// Sum of EUR prices
    Price,
    /// Sum of days at sea
    Duration,
}

/// Least-cost route through the full schedule under one metric.
#[derive(Debug, Clone, Copy)]
pub struct MultiHop {
    name: &'static str,
    metric: CostMetric,
}

impl MultiHop {
    /// Cheapest overall, connections allowed.
    pub fn cheapest() -> Self {
        Self {
            name: "cheapest",
            metric: CostMetric::Price,
        }
    }

    /// Fastest overall, connections allowed.
    pub fn fastest() -> Self {
        Self {
            name: "fastest",
            metric: CostMetric::Duration,
        }
    }
}

impl SearchStrategy for MultiHop {
    fn name(&self) -> &'static str {
        self.name
    }

    fn search(
        &self,
        repo: &dyn SailingRepository,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<Arc<Sailing>>, SearchError> {
        let sailings = repo.all();

        // No explicit start time: the earliest departure anywhere is the floor.
        let Some(min_start) = sailings.iter().map(|s| s.departure).min() else {
            return Ok(Vec::new());
        };

        let price = |s: &Arc<Sailing>| s.cost_in_eur;
        let duration = |s: &Arc<Sailing>| s.days;
        let ids = match self.metric {
            CostMetric::Price => route(&sailings, origin, destination, min_start, &price)?,
            CostMetric::Duration => route(&sailings, origin, destination, min_start, &duration)?,
        };

        debug!(
            strategy = self.name,
            origin = %origin,
            destination = %destination,
            legs = ids.len(),
            "multi-hop search complete"
        );

        let mut resolved = ids
            .into_iter()
            .map(|id| repo.get(id).ok_or(SearchError::UnknownSailing(id)))
            .collect::<Result<Vec<_>, _>>()?;
        resolved.sort_by_key(|s| s.departure);

        Ok(resolved)
    }
}

fn route<C>(
    sailings: &[Arc<Sailing>],
    origin: &PortCode,
    destination: &PortCode,
    min_start: NaiveDate,
    cost_of: &dyn Fn(&Arc<Sailing>) -> C,
) -> Result<Vec<SailingId>, RouteError>
where
    C: Copy + PartialOrd + Add<Output = C>,
{
    RouteQuery::new()
        .segments(sailings)
        .origin(origin)
        .destination(destination)
        .min_start(min_start)
        .cost_of(cost_of)
        .find()
}

/// Registry of search strategies by name.
///
/// Built once at startup and shared; it is never modified afterwards.
pub struct StrategyRegistry {
    strategies: Vec<Box<dyn SearchStrategy>>,
}

impl StrategyRegistry {
    /// Create a registry from strategies, in listing order.
    pub fn new(strategies: Vec<Box<dyn SearchStrategy>>) -> Self {
        Self { strategies }
    }

    /// The three standard strategies: `cheapest-direct`, `cheapest`, `fastest`.
    pub fn standard() -> Self {
        Self::new(vec![
            Box::new(CheapestDirect),
            Box::new(MultiHop::cheapest()),
            Box::new(MultiHop::fastest()),
        ])
    }

    /// Look up a strategy by name.
    pub fn get(&self, name: &str) -> Option<&dyn SearchStrategy> {
        self.strategies
            .iter()
            .find(|s| s.name() == name)
            .map(|s| s.as_ref())
    }

    /// Returns the registered names in listing order.
    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// Run the named strategy and project its result.
    pub fn search(
        &self,
        name: &str,
        repo: &dyn SailingRepository,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<SailingRecord>, SearchError> {
        let strategy = self
            .get(name)
            .ok_or_else(|| SearchError::UnknownCriteria(name.to_string()))?;
        let sailings = strategy.search(repo, origin, destination)?;
        Ok(format_sailings(&sailings))
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Search entry points over one repository.
pub struct SailingSearch<'a> {
    repo: &'a dyn SailingRepository,
}

impl<'a> SailingSearch<'a> {
    /// Create a searcher over a repository.
    pub fn new(repo: &'a dyn SailingRepository) -> Self {
        Self { repo }
    }

    /// Cheapest direct sailing.
    pub fn search_direct(
        &self,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<SailingRecord>, SearchError> {
        self.run(&CheapestDirect, origin, destination)
    }

    /// Cheapest route, connections allowed.
    pub fn search_cheapest(
        &self,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<SailingRecord>, SearchError> {
        self.run(&MultiHop::cheapest(), origin, destination)
    }

    /// Fastest route, connections allowed.
    pub fn search_fastest(
        &self,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<SailingRecord>, SearchError> {
        self.run(&MultiHop::fastest(), origin, destination)
    }

    fn run(
        &self,
        strategy: &dyn SearchStrategy,
        origin: &PortCode,
        destination: &PortCode,
    ) -> Result<Vec<SailingRecord>, SearchError> {
        let sailings = strategy.search(self.repo, origin, destination)?;
        Ok(format_sailings(&sailings))
    }
}
