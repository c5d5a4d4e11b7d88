//! Route planning over the sailing schedule.
//!
//! [`RouteQuery`] is the generic time-constrained least-cost finder. The
//! search strategies wrap it (or a plain filter) behind [`SearchStrategy`],
//! and [`StrategyRegistry`] maps user-facing criteria names onto them.

mod route;
mod search;

#[cfg(test)]
mod route_tests;

pub use route::{RouteError, RouteQuery, Segment};
pub use search::{
    CheapestDirect, CostMetric, MultiHop, SailingSearch, SearchError, SearchStrategy,
    StrategyRegistry,
};
