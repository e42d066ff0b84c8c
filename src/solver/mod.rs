//! Backtracking search that counts N-queens solutions

pub mod search;
pub mod stats;

pub use search::{count_solutions, Solver};
pub use stats::SearchStats;
