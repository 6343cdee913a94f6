use crate::constants::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadOptions {
    /// Deepest chain of nested maps the dispatch engine will walk into.
    pub max_depth: usize,
}

impl ReadOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
