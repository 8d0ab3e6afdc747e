//! Statistics collection for minimax searches

use std::time::Duration;

/// Statistics collected during a single search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Number of states evaluated, terminal leaves included
    pub nodes_visited: usize,

    /// Number of terminal states reached
    pub terminal_leaves: usize,

    /// Number of times a bound cut a node's remaining moves short
    pub cutoffs: usize,

    /// Deepest ply reached below the root
    pub max_depth: usize,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_visited: 0,
            terminal_leaves: 0,
            cutoffs: 0,
            max_depth: 0,
            total_time: Duration::from_secs(0),
        }
    }

    /// Returns the number of nodes evaluated per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Nodes visited: {}\n\
             - Terminal leaves: {}\n\
             - Cutoffs: {}\n\
             - Max depth: {}\n\
             - Total time: {:.3} ms\n\
             - Nodes per second: {:.1}",
            self.nodes_visited,
            self.terminal_leaves,
            self.cutoffs,
            self.max_depth,
            self.total_time.as_secs_f64() * 1000.0,
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
