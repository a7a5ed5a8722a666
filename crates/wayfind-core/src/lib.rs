//! Wayfind Core Library
//!
//! Search engines over graphs whose topology is supplied by the caller as a
//! neighbor or edge function rather than stored in a container.

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use config::SearchOptions;
pub use error::{Result, SearchError};
pub use graph::{DirectedEdge, Distance, EdgeProvider, NeighborProvider, Path, ShortestPath};
