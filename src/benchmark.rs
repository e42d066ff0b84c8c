//! Timing runs of every search configuration on one board

use crate::board::BoardSize;
use crate::config::Strategy;
use crate::solver::Solver;
use std::time::{Duration, Instant};

/// Timings of one strategy/parallel combination
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub strategy: Strategy,
    pub parallel: bool,
    pub run_times: Vec<Duration>,
    pub average_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub solutions: u64,
}

impl BenchmarkResult {
    fn new(strategy: Strategy, parallel: bool) -> Self {
        Self {
            strategy,
            parallel,
            run_times: Vec::new(),
            average_time: Duration::ZERO,
            min_time: Duration::MAX,
            max_time: Duration::ZERO,
            solutions: 0,
        }
    }

    fn add_run(&mut self, duration: Duration, solutions: u64) {
        self.run_times.push(duration);
        self.solutions = solutions;

        self.min_time = self.min_time.min(duration);
        self.max_time = self.max_time.max(duration);

        let total: Duration = self.run_times.iter().sum();
        self.average_time = total / self.run_times.len() as u32;
    }

    pub fn format_time(duration: Duration) -> String {
        format!("{:.3}s", duration.as_secs_f64())
    }

    /// Human readable name of the configuration
    pub fn label(&self) -> String {
        format!(
            "{:?}{}",
            self.strategy,
            if self.parallel { " (parallel)" } else { " (sequential)" }
        )
    }

    pub fn display(&self) -> String {
        format!(
            "  {}:\n    Runs: [{}]\n    Avg: {} | Min: {} | Max: {} | Solutions: {}",
            self.label(),
            self.run_times
                .iter()
                .map(|d| Self::format_time(*d))
                .collect::<Vec<_>>()
                .join(", "),
            Self::format_time(self.average_time),
            Self::format_time(self.min_time),
            Self::format_time(self.max_time),
            self.solutions
        )
    }
}

/// Runs every configuration `runs_per_config` times
pub struct BenchmarkSuite {
    size: BoardSize,
    runs_per_config: usize,
    results: Vec<BenchmarkResult>,
}

impl BenchmarkSuite {
    pub fn new(size: BoardSize, runs_per_config: usize) -> Self {
        Self {
            size,
            runs_per_config: runs_per_config.max(1),
            results: Vec::new(),
        }
    }

    /// All strategy/parallel combinations
    pub fn configurations() -> Vec<(Strategy, bool)> {
        vec![
            (Strategy::Recursive, false),
            (Strategy::Iterative, false),
            (Strategy::Recursive, true),
            (Strategy::Iterative, true),
        ]
    }

    pub fn run(&mut self) -> &[BenchmarkResult] {
        self.results.clear();

        for (strategy, parallel) in Self::configurations() {
            let solver = Solver::new(self.size)
                .with_strategy(strategy)
                .with_parallel(parallel);
            let mut result = BenchmarkResult::new(strategy, parallel);

            for _ in 0..self.runs_per_config {
                let start = Instant::now();
                let solutions = solver.count();
                result.add_run(start.elapsed(), solutions);
            }

            self.results.push(result);
        }

        &self.results
    }

    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn fastest(&self) -> Option<&BenchmarkResult> {
        self.results.iter().min_by_key(|r| r.average_time)
    }

    /// True when every configuration produced the same count
    pub fn counts_agree(&self) -> bool {
        self.results
            .windows(2)
            .all(|pair| pair[0].solutions == pair[1].solutions)
    }

    /// Summary block printed after the individual results
    pub fn summary(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Board: {} ({} runs per config)\n", self.size, self.runs_per_config));

        for result in &self.results {
            output.push_str(&result.display());
            output.push('\n');
        }

        if let Some(fastest) = self.fastest() {
            output.push_str(&format!(
                "Fastest: {} - {}\n",
                fastest.label(),
                BenchmarkResult::format_time(fastest.average_time)
            ));

            let sequential = self
                .results
                .iter()
                .find(|r| r.strategy == fastest.strategy && !r.parallel);
            if let Some(sequential) = sequential {
                if fastest.parallel && fastest.average_time > Duration::ZERO {
                    let speedup = sequential.average_time.as_secs_f64() / fastest.average_time.as_secs_f64();
                    output.push_str(&format!("Parallel speedup: {:.2}x\n", speedup));
                }
            }
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_run_tracks_extremes() {
        let mut result = BenchmarkResult::new(Strategy::Recursive, false);
        result.add_run(Duration::from_millis(30), 92);
        result.add_run(Duration::from_millis(10), 92);
        result.add_run(Duration::from_millis(20), 92);

        assert_eq!(result.min_time, Duration::from_millis(10));
        assert_eq!(result.max_time, Duration::from_millis(30));
        assert_eq!(result.average_time, Duration::from_millis(20));
        assert_eq!(result.run_times.len(), 3);
    }

    #[test]
    fn test_suite_runs_every_configuration() {
        let mut suite = BenchmarkSuite::new(BoardSize::new(8).unwrap(), 2);
        let results = suite.run();

        assert_eq!(results.len(), 4);
        for result in results {
            assert_eq!(result.solutions, 92);
            assert_eq!(result.run_times.len(), 2);
        }
        assert!(suite.counts_agree());
        assert!(suite.fastest().is_some());
        assert!(suite.summary().contains("Fastest:"));
    }

    #[test]
    fn test_zero_runs_still_runs_once() {
        let mut suite = BenchmarkSuite::new(BoardSize::new(4).unwrap(), 0);
        suite.run();
        assert!(suite.results().iter().all(|r| r.run_times.len() == 1));
    }
}
