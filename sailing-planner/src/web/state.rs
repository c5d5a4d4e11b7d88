//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::StrategyRegistry;
use crate::repository::SailingRepository;

/// Shared application state.
///
/// Both fields are immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Imported sailing schedule
    pub repo: Arc<dyn SailingRepository>,

    /// Search strategies by criteria name
    pub registry: Arc<StrategyRegistry>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(repo: impl SailingRepository + 'static, registry: StrategyRegistry) -> Self {
        Self {
            repo: Arc::new(repo),
            registry: Arc::new(registry),
        }
    }
}
