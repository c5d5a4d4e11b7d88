//! Sailing storage consumed by the search strategies.
//!
//! The planner only ever reads a snapshot: strategies call
//! [`SailingRepository::all`] once per search and resolve result ids
//! against the same repository.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use crate::domain::{PortCode, Sailing, SailingId};

/// Read-only access to the sailing schedule.
///
/// This abstraction allows the strategies to be tested with hand-built
/// schedules.
pub trait SailingRepository: Send + Sync {
    /// Every sailing, ordered by departure date and then id.
    fn all(&self) -> Vec<Arc<Sailing>>;

    /// Look up a sailing by id.
    fn get(&self, id: SailingId) -> Option<Arc<Sailing>>;

    /// Every port that appears as an origin or destination, sorted by code.
    fn ports(&self) -> Vec<PortCode>;

    /// Returns true if the port appears in the schedule.
    fn has_port(&self, port: &PortCode) -> bool;
}

/// An immutable in-memory schedule.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    /// Sailings in departure order.
    sailings: Vec<Arc<Sailing>>,
    by_id: HashMap<SailingId, Arc<Sailing>>,
    ports: BTreeSet<PortCode>,
}

impl InMemoryRepository {
    /// Build a repository from a set of sailings.
    ///
    /// Sailing ids are expected to be unique; a later sailing with a
    /// duplicate id replaces the earlier one in id lookups.
    pub fn new(sailings: impl IntoIterator<Item = Sailing>) -> Self {
        let mut sailings: Vec<Arc<Sailing>> = sailings.into_iter().map(Arc::new).collect();
        sailings.sort_by_key(|s| (s.departure, s.id));

        let by_id = sailings.iter().map(|s| (s.id, s.clone())).collect();
        let ports = sailings
            .iter()
            .flat_map(|s| [s.origin.clone(), s.destination.clone()])
            .collect();

        Self {
            sailings,
            by_id,
            ports,
        }
    }

    /// Returns the number of sailings.
    pub fn len(&self) -> usize {
        self.sailings.len()
    }

    /// Returns true if there are no sailings.
    pub fn is_empty(&self) -> bool {
        self.sailings.is_empty()
    }
}

impl SailingRepository for InMemoryRepository {
    fn all(&self) -> Vec<Arc<Sailing>> {
        self.sailings.clone()
    }

    fn get(&self, id: SailingId) -> Option<Arc<Sailing>> {
        self.by_id.get(&id).cloned()
    }

    fn ports(&self) -> Vec<PortCode> {
        self.ports.iter().cloned().collect()
    }

    fn has_port(&self, port: &PortCode) -> bool {
        self.ports.contains(port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Currency, SailingRate};
    use chrono::NaiveDate;

    fn sailing(id: u64, from: &str, to: &str, depart: u32, arrive: u32) -> Sailing {
        let rate = Arc::new(SailingRate::new("TEST", Amount::ZERO, Currency::EUR).unwrap());
        Sailing::new(
            SailingId(id),
            PortCode::parse(from).unwrap(),
            PortCode::parse(to).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, depart).unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, arrive).unwrap(),
            Amount::ZERO,
            rate,
        )
        .unwrap()
    }

    #[test]
    fn all_is_in_departure_then_id_order() {
        let repo = InMemoryRepository::new(vec![
            sailing(3, "NLRTM", "ESBCN", 5, 9),
            sailing(1, "NLRTM", "ESBCN", 5, 8),
            sailing(2, "CNSHA", "NLRTM", 1, 20),
        ]);

        let ids: Vec<u64> = repo.all().iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(repo.len(), 3);
    }

    #[test]
    fn get_resolves_ids() {
        let repo = InMemoryRepository::new(vec![sailing(7, "NLRTM", "ESBCN", 1, 2)]);
        assert_eq!(repo.get(SailingId(7)).unwrap().days, 1);
        assert!(repo.get(SailingId(8)).is_none());
    }

    #[test]
    fn ports_are_collected_from_both_ends() {
        let repo = InMemoryRepository::new(vec![
            sailing(1, "NLRTM", "ESBCN", 1, 2),
            sailing(2, "CNSHA", "NLRTM", 1, 2),
        ]);

        let codes: Vec<String> = repo.ports().iter().map(|p| p.to_string()).collect();
        assert_eq!(codes, vec!["CNSHA", "ESBCN", "NLRTM"]);
        assert!(repo.has_port(&PortCode::parse("ESBCN").unwrap()));
        assert!(!repo.has_port(&PortCode::parse("BRSSZ").unwrap()));
    }

    #[test]
    fn empty_repository() {
        let repo = InMemoryRepository::default();
        assert!(repo.is_empty());
        assert!(repo.all().is_empty());
        assert!(repo.ports().is_empty());
    }
}
