//! HTTP API over the imported schedule.
//!
//! Provides read-only endpoints for listing ports and criteria and for
//! running searches.

mod dto;
mod routes;
mod state;

pub use dto::{ErrorResponse, SearchParams};
pub use routes::{AppError, create_router};
pub use state::AppState;
