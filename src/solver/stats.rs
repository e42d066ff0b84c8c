//! Counters collected while walking the search tree

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Statistics about one search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Completed placements found
    pub solutions: u64,
    /// Calls of the counting step, root included
    pub nodes: u64,
    /// Calls that found every column of their row excluded
    pub dead_ends: u64,
    /// Deepest level reached
    pub max_depth: u32,
    #[serde(skip)]
    pub elapsed: Duration,
}

impl SearchStats {
    /// Nodes that neither failed nor completed a placement
    pub fn branch_nodes(&self) -> u64 {
        self.nodes.saturating_sub(self.dead_ends + self.solutions)
    }

    /// Search throughput in nodes per second
    pub fn nodes_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.nodes as f64 / secs
        } else {
            0.0
        }
    }
}

impl std::fmt::Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Search Statistics:")?;
        writeln!(f, "  Solutions: {}", self.solutions)?;
        writeln!(f, "  Nodes visited: {}", self.nodes)?;
        writeln!(f, "  Dead ends: {}", self.dead_ends)?;
        writeln!(f, "  Branch nodes: {}", self.branch_nodes())?;
        writeln!(f, "  Max depth: {}", self.max_depth)?;
        writeln!(f, "  Search time: {:.3}s", self.elapsed.as_secs_f64())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_nodes() {
        let stats = SearchStats {
            solutions: 2,
            nodes: 17,
            dead_ends: 6,
            max_depth: 3,
            elapsed: Duration::from_millis(1),
        };
        assert_eq!(stats.branch_nodes(), 9);
        assert!(stats.nodes_per_second() > 0.0);
    }

    #[test]
    fn test_zero_elapsed_throughput() {
        let stats = SearchStats::default();
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_display() {
        let stats = SearchStats {
            solutions: 92,
            ..Default::default()
        };
        let text = stats.to_string();
        assert!(text.contains("Solutions: 92"));
        assert!(text.contains("Dead ends: 0"));
    }

    #[test]
    fn test_display_inconsistent_counters() {
        let stats = SearchStats {
            solutions: 5,
            dead_ends: 3,
            nodes: 1,
            ..Default::default()
        };
        assert_eq!(stats.branch_nodes(), 0);
        assert!(stats.to_string().contains("Branch nodes: 0"));
    }
}
