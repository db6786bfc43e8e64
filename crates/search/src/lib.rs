//! Search crate for the campus restaurant finder.
//!
//! This crate contains the orchestrator that coordinates the query builder,
//! the recommendation client and the result refiner, plus the settings and
//! lifecycle state a front end needs around it.

pub mod config;
pub mod orchestrator;
pub mod state;

pub use config::{ConfigError, SearchConfig, DEFAULT_MAX_DISTANCE_MILES, DEFAULT_TOP_K};
pub use orchestrator::{SearchInput, SearchOrchestrator};
pub use state::SearchState;
