//! Sailing route planner.
//!
//! Imports a schedule of sailings with their published rates and answers:
//! "what is the cheapest (or fastest) way to ship from port A to port B?"

pub mod config;
pub mod domain;
pub mod format;
pub mod import;
pub mod input;
pub mod planner;
pub mod repository;
pub mod web;
