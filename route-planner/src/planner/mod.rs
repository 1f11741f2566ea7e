//! Route search engine.
//!
//! This module implements the core route-finding algorithm: a best-first
//! search over the transport graph that enumerates complete itineraries
//! under real-world connection constraints, plus the ranking pipeline
//! applied to its results.

mod config;
mod rank;
mod search;

pub use config::SearchConfig;
pub use rank::{deduplicate, rank_itineraries, remove_dominated};
pub use search::{PathSearchEngine, SearchResult};
