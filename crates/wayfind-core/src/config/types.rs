//! Configuration type definitions

use crate::graph::Distance;
use serde::{Deserialize, Serialize};

/// Name of the optional table that wraps the options in a larger file
pub const SEARCH_TABLE: &str = "search";

/// Budgets applied to a single search invocation.
///
/// Both limits default to unbounded. A search that hits a limit reports what
/// it found before the cut; anything beyond it is treated as unreachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchOptions {
    /// Maximum number of nodes whose neighbors are requested from the
    /// provider (for depth-first search: path extensions)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,

    /// Nodes farther than this from the source are never visited.
    /// Depth-first search counts edges on the current path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_distance: Option<Distance>,
}

impl SearchOptions {
    /// Options with no budget at all
    pub const UNBOUNDED: SearchOptions = SearchOptions {
        max_expansions: None,
        max_distance: None,
    };

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Cap the distance of reachable nodes, inclusive.
    ///
    /// A negative cap is accepted here but rejected by
    /// [`validate`](Self::validate); searches run with one still report the
    /// source at distance 0 and nothing else.
    pub fn with_max_distance(mut self, max: Distance) -> Self {
        self.max_distance = Some(max);
        self
    }

    /// True when neither budget is set
    pub fn is_unbounded(&self) -> bool {
        self.max_expansions.is_none() && self.max_distance.is_none()
    }
}
