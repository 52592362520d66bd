/// Tunables for a [`RelationGraph`](super::RelationGraph).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// How many `lessThan` hops the transitive search may take from the
    /// first id before giving up.
    pub max_search_depth: usize,
}

impl GraphConfig {
    pub const DEFAULT_MAX_SEARCH_DEPTH: usize = 64;

    pub fn with_max_search_depth(mut self, depth: usize) -> Self {
        self.max_search_depth = depth;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            max_search_depth: Self::DEFAULT_MAX_SEARCH_DEPTH,
        }
    }
}
