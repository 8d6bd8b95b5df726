//! Retrieval pipeline: signal collection, client-side fusion, comparison
//! balancing.
//!
//! [`RetrievalEngine::retrieve`] is the single entry point. It enhances the
//! query, collects the signals the request's strategy asks for, fuses them
//! additively by stable key, balances across entities for comparison
//! queries, and applies the relevance floor. Individual signal failures
//! degrade to empty signals; only an invalid request fails the call.

mod balance;
mod config;
mod engine;
mod error;
mod fusion;
mod signals;


pub use balance::balance_comparison;
pub use config::SearchTuning;
pub use engine::RetrievalEngine;
pub use error::{RetrievalError, RetrievalResult};
pub use fusion::FusionAccumulator;
pub use signals::distance_to_relevance;
