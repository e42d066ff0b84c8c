//! Recursive and explicit-stack solution counting

use super::SearchStats;
use crate::board::state::Candidates;
use crate::board::{BoardSize, BoardState};
use crate::config::Strategy;
use rayon::prelude::*;
use std::time::Instant;

/// Counts N-queens solutions for one board size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solver {
    size: BoardSize,
    strategy: Strategy,
    parallel: bool,
}

/// Outcome of inspecting a state before descending into it
enum Node {
    /// Every column of the current row is excluded
    DeadEnd,
    /// Last row with a free column
    Solution,
    Branch(Candidates),
}

impl Node {
    #[inline]
    fn classify(size: BoardSize, state: &BoardState) -> Self {
        if state.excluded(size) == size.full_mask() {
            Node::DeadEnd
        } else if state.level == size.last_level() {
            Node::Solution
        } else {
            Node::Branch(state.candidates(size))
        }
    }
}

/// Pending work in the iterative search
struct Frame {
    state: BoardState,
    pending: Candidates,
}

impl Solver {
    /// Create a sequential recursive solver
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            strategy: Strategy::Recursive,
            parallel: false,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Search the first-row branches on the rayon pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Count every solution on the empty board
    pub fn count(&self) -> u64 {
        self.count_from(BoardState::EMPTY)
    }

    /// Count the completions of a partial board state
    pub fn count_from(&self, state: BoardState) -> u64 {
        if self.parallel {
            self.count_parallel(state)
        } else {
            self.count_sequential(state)
        }
    }

    fn count_sequential(&self, state: BoardState) -> u64 {
        match self.strategy {
            Strategy::Recursive => count_recursive(self.size, state),
            Strategy::Iterative => count_iterative(self.size, state),
        }
    }

    fn count_parallel(&self, state: BoardState) -> u64 {
        match Node::classify(self.size, &state) {
            Node::DeadEnd => 0,
            Node::Solution => 1,
            Node::Branch(candidates) => {
                let branches: Vec<BoardState> = candidates.map(|newq| state.place(newq)).collect();
                branches
                    .into_par_iter()
                    .map(|child| self.count_sequential(child))
                    .sum()
            }
        }
    }

    /// Count on the empty board while collecting [`SearchStats`].
    ///
    /// Always walks the tree sequentially so the node counters are exact.
    pub fn count_with_stats(&self) -> SearchStats {
        let start = Instant::now();
        let mut stats = SearchStats::default();
        let solutions = count_with_stats(self.size, BoardState::EMPTY, &mut stats);
        stats.solutions = solutions;
        stats.elapsed = start.elapsed();
        stats
    }

    /// Count on the empty board, handing every visited state to `visit`
    /// in search order.
    pub fn trace<F>(&self, mut visit: F) -> u64
    where
        F: FnMut(&BoardState),
    {
        count_traced(self.size, BoardState::EMPTY, &mut visit)
    }
}

/// Count completions of the state `(level, columns, left_threat, right_threat)`
/// on a board of the given size.
///
/// `level` is the number of rows already holding a queen and cannot exceed
/// the board size: a board takes at most one queen per row.
pub fn count_solutions(
    size: BoardSize,
    level: u32,
    columns: u32,
    left_threat: u32,
    right_threat: u32,
) -> u64 {
    debug_assert!(level <= size.get(), "level {} out of range for board {}", level, size);
    count_recursive(size, BoardState::new(level, columns, left_threat, right_threat))
}

fn count_recursive(size: BoardSize, state: BoardState) -> u64 {
    match Node::classify(size, &state) {
        Node::DeadEnd => 0,
        Node::Solution => 1,
        Node::Branch(candidates) => candidates
            .map(|newq| count_recursive(size, state.place(newq)))
            .sum(),
    }
}

fn count_iterative(size: BoardSize, root: BoardState) -> u64 {
    let mut stack = Vec::with_capacity(size.get() as usize);
    match Node::classify(size, &root) {
        Node::DeadEnd => return 0,
        Node::Solution => return 1,
        Node::Branch(pending) => stack.push(Frame { state: root, pending }),
    }

    let mut solutions = 0;
    while let Some(frame) = stack.last_mut() {
        let Some(newq) = frame.pending.next() else {
            stack.pop();
            continue;
        };

        let child = frame.state.place(newq);
        match Node::classify(size, &child) {
            Node::DeadEnd => {}
            Node::Solution => solutions += 1,
            Node::Branch(pending) => stack.push(Frame { state: child, pending }),
        }
    }

    solutions
}

fn count_with_stats(size: BoardSize, state: BoardState, stats: &mut SearchStats) -> u64 {
    stats.nodes += 1;
    stats.max_depth = stats.max_depth.max(state.level);

    match Node::classify(size, &state) {
        Node::DeadEnd => {
            stats.dead_ends += 1;
            0
        }
        Node::Solution => 1,
        Node::Branch(candidates) => {
            let mut solutions = 0;
            for newq in candidates {
                solutions += count_with_stats(size, state.place(newq), stats);
            }
            solutions
        }
    }
}

fn count_traced<F>(size: BoardSize, state: BoardState, visit: &mut F) -> u64
where
    F: FnMut(&BoardState),
{
    visit(&state);

    match Node::classify(size, &state) {
        Node::DeadEnd => 0,
        Node::Solution => 1,
        Node::Branch(candidates) => {
            let mut solutions = 0;
            for newq in candidates {
                solutions += count_traced(size, state.place(newq), visit);
            }
            solutions
        }
    }
}
