//! Time-constrained least-cost route finding.
//!
//! The finder works over any schedule entry implementing [`Segment`], with
//! the cost supplied as a typed accessor. It is a best-first expansion seeded
//! with every eligible departure from the origin:
//!
//! - The seed queue is sorted once by first-leg cost. Later candidates are
//!   appended to the tail and the queue is never re-sorted, so this is not a
//!   priority queue. Exploration order, and therefore tie-breaking between
//!   equal-cost routes, depends on it.
//! - A candidate is skipped when a previously popped candidate's last
//!   segment had the same `(departure, arrival)` pair, whatever its
//!   endpoints or accumulated cost.
//! - A candidate reaching the destination more cheaply than the best so far
//!   becomes the best and is not expanded. Any other candidate is expanded,
//!   including one at the destination that did not improve on the best.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::ops::Add;
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::domain::{PortCode, Sailing, SailingId};

/// A scheduled, time-bound hop between two locations.
pub trait Segment {
    /// Identifier returned in search results.
    type Id: Clone;
    /// Endpoint type.
    type Location: Eq + Hash;
    /// Timestamp type for departures and arrivals.
    type Time: Copy + Ord + Hash;

    fn id(&self) -> Self::Id;
    fn origin(&self) -> &Self::Location;
    fn destination(&self) -> &Self::Location;
    fn departure(&self) -> Self::Time;
    fn arrival(&self) -> Self::Time;
}

impl Segment for Sailing {
    type Id = SailingId;
    type Location = PortCode;
    type Time = NaiveDate;

    fn id(&self) -> SailingId {
        self.id
    }

    fn origin(&self) -> &PortCode {
        &self.origin
    }

    fn destination(&self) -> &PortCode {
        &self.destination
    }

    fn departure(&self) -> NaiveDate {
        self.departure
    }

    fn arrival(&self) -> NaiveDate {
        self.arrival
    }
}

impl<T: Segment + ?Sized> Segment for Arc<T> {
    type Id = T::Id;
    type Location = T::Location;
    type Time = T::Time;

    fn id(&self) -> Self::Id {
        (**self).id()
    }

    fn origin(&self) -> &Self::Location {
        (**self).origin()
    }

    fn destination(&self) -> &Self::Location {
        (**self).destination()
    }

    fn departure(&self) -> Self::Time {
        (**self).departure()
    }

    fn arrival(&self) -> Self::Time {
        (**self).arrival()
    }
}

/// Error from the route finder.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// A required query field was never set
    #[error("invalid input: {field} is required")]
    InvalidInput { field: &'static str },
}

/// A single route-finding request.
///
/// Every field is required; [`find`](RouteQuery::find) fails with
/// [`RouteError::InvalidInput`] naming the first one left unset. An empty
/// segment slice counts as unset.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use chrono::NaiveDate;
/// use sailing_planner::domain::{Amount, Currency, PortCode, Sailing, SailingId, SailingRate};
/// use sailing_planner::planner::RouteQuery;
///
/// let day = |d| NaiveDate::from_ymd_opt(2025, 1, d).unwrap();
/// let port = |s| PortCode::parse(s).unwrap();
/// let rate = Arc::new(SailingRate::new("ETRG", Amount::from_cents(100), Currency::EUR).unwrap());
///
/// let sailings = vec![
///     Sailing::new(SailingId(1), port("NLRTM"), port("ESBCN"), day(1), day(9), Amount::from_cents(100), rate).unwrap(),
/// ];
///
/// let ids = RouteQuery::new()
///     .segments(&sailings)
///     .origin(&port("NLRTM"))
///     .destination(&port("ESBCN"))
///     .min_start(day(1))
///     .cost_of(&|s: &Sailing| s.days)
///     .find()
///     .unwrap();
///
/// assert_eq!(ids, vec![SailingId(1)]);
/// ```
pub struct RouteQuery<'a, S: Segment, C> {
    segments: Option<&'a [S]>,
    origin: Option<&'a S::Location>,
    destination: Option<&'a S::Location>,
    min_start: Option<S::Time>,
    cost_of: Option<&'a dyn Fn(&S) -> C>,
}

impl<S: Segment, C> Default for RouteQuery<'_, S, C> {
    fn default() -> Self {
        Self {
            segments: None,
            origin: None,
            destination: None,
            min_start: None,
            cost_of: None,
        }
    }
}

impl<'a, S: Segment, C> RouteQuery<'a, S, C> {
    /// Create an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the segments to search through.
    pub fn segments(mut self, segments: &'a [S]) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Set the start location.
    pub fn origin(mut self, origin: &'a S::Location) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the end location.
    pub fn destination(mut self, destination: &'a S::Location) -> Self {
        self.destination = Some(destination);
        self
    }

    /// Set the earliest allowed departure of the first segment.
    pub fn min_start(mut self, min_start: S::Time) -> Self {
        self.min_start = Some(min_start);
        self
    }

    /// Set the cost accessor.
    pub fn cost_of(mut self, cost_of: &'a dyn Fn(&S) -> C) -> Self {
        self.cost_of = Some(cost_of);
        self
    }

    /// Run the search.
    ///
    /// Returns the identifiers of the cheapest path in traversal order, or an
    /// empty vector if no path reaches the destination.
    pub fn find(self) -> Result<Vec<S::Id>, RouteError>
    where
        C: Copy + PartialOrd + Add<Output = C>,
    {
        let segments = self
            .segments
            .filter(|s| !s.is_empty())
            .ok_or(RouteError::InvalidInput { field: "segments" })?;
        let origin = self
            .origin
            .ok_or(RouteError::InvalidInput { field: "origin" })?;
        let destination = self
            .destination
            .ok_or(RouteError::InvalidInput {
                field: "destination",
            })?;
        let min_start = self
            .min_start
            .ok_or(RouteError::InvalidInput { field: "min_start" })?;
        let cost_of = self
            .cost_of
            .ok_or(RouteError::InvalidInput { field: "cost_of" })?;

        Ok(find_cheapest_path(
            segments,
            origin,
            destination,
            min_start,
            cost_of,
        ))
    }
}

/// Partial path waiting in the queue.
struct Candidate<'s, S, C> {
    cost: C,
    last: &'s S,
    path: Vec<&'s S>,
}

fn find_cheapest_path<'s, S, C>(
    segments: &'s [S],
    origin: &S::Location,
    destination: &S::Location,
    min_start: S::Time,
    cost_of: &dyn Fn(&S) -> C,
) -> Vec<S::Id>
where
    S: Segment,
    C: Copy + PartialOrd + Add<Output = C>,
{
    let mut by_origin: HashMap<&'s S::Location, Vec<&'s S>> = HashMap::new();
    for segment in segments {
        by_origin.entry(segment.origin()).or_default().push(segment);
    }

    let mut seeds: Vec<Candidate<'s, S, C>> = by_origin
        .get(origin)
        .map(|departing| {
            departing
                .iter()
                .filter(|segment| segment.departure() >= min_start)
                .map(|&segment| Candidate {
                    cost: cost_of(segment),
                    last: segment,
                    path: vec![segment],
                })
                .collect()
        })
        .unwrap_or_default();

    // Stable, so equal-cost seeds keep collection order.
    seeds.sort_by(|a, b| a.cost.partial_cmp(&b.cost).unwrap_or(Ordering::Equal));

    let seeded = seeds.len();
    let mut queue: VecDeque<Candidate<'s, S, C>> = seeds.into();
    let mut visited: HashSet<(S::Time, S::Time)> = HashSet::new();
    let mut best: Option<Candidate<'s, S, C>> = None;
    let mut popped = 0usize;

    while let Some(candidate) = queue.pop_front() {
        popped += 1;

        let state_key = (candidate.last.departure(), candidate.last.arrival());
        if !visited.insert(state_key) {
            trace!(
                path_len = candidate.path.len(),
                "skipping candidate with visited departure/arrival pair"
            );
            continue;
        }

        let improves = best
            .as_ref()
            .is_none_or(|best| candidate.cost < best.cost);
        if candidate.last.destination() == destination && improves {
            trace!(path_len = candidate.path.len(), "new best path");
            best = Some(candidate);
            continue;
        }

        let Some(next) = by_origin.get(candidate.last.destination()) else {
            continue;
        };

        for &segment in next {
            if segment.departure() < candidate.last.arrival() {
                continue;
            }
            let mut path = candidate.path.clone();
            path.push(segment);
            queue.push_back(Candidate {
                cost: candidate.cost + cost_of(segment),
                last: segment,
                path,
            });
        }
    }

    debug!(
        seeded,
        popped,
        found = best.is_some(),
        "route search complete"
    );

    best.map(|best| best.path.iter().map(|segment| segment.id()).collect())
        .unwrap_or_default()
}
