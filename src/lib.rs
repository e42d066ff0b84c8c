//! N-Queens Solution Counter
//!
//! Counts the placements of N non-attacking queens on an N×N board with a
//! backtracking search over bitmask-encoded partial board states.

pub mod benchmark;
pub mod board;
pub mod config;
pub mod error;
pub mod reference;
pub mod report;
pub mod solver;
pub mod utils;

pub use board::{BoardSize, BoardState};
pub use config::Settings;
pub use error::QueensError;
pub use report::CountReport;
pub use solver::{SearchStats, Solver};

use error::QueensResult;

/// Count the solutions for an `n`×`n` board with the default recursive search
pub fn count_queens(n: u32) -> QueensResult<u64> {
    Ok(Solver::new(BoardSize::new(n)?).count())
}

/// Count with the search configured by `settings`
pub fn count_with_settings(settings: &Settings) -> QueensResult<CountReport> {
    let solver = Solver::new(settings.board_size()?)
        .with_strategy(settings.solver.strategy)
        .with_parallel(settings.solver.parallel);
    Ok(CountReport::run(&solver))
}
