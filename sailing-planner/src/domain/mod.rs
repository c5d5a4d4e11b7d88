//! Domain types for the sailing planner.
//!
//! This module contains the core domain model types that represent
//! validated schedule data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod exchange;
mod money;
mod port;
mod sailing;

pub use error::DomainError;
pub use exchange::{ConversionError, ExchangeRates};
pub use money::{Amount, Currency, InvalidAmount, InvalidCurrency};
pub use port::{InvalidPortCode, PortCode};
pub use sailing::{Sailing, SailingId, SailingRate};
