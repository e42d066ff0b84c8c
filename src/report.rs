//! Result record for a counting run and its on-disk form

use crate::board::BoardSize;
use crate::config::{OutputFormat, Strategy};
use crate::solver::{SearchStats, Solver};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// Outcome of counting one board size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountReport {
    pub size: BoardSize,
    pub solutions: u64,
    pub strategy: Strategy,
    pub parallel: bool,
    pub elapsed_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

impl CountReport {
    /// Run `solver` and record the count and timing
    pub fn run(solver: &Solver) -> Self {
        let start = Instant::now();
        let solutions = solver.count();
        Self::new(solver, solutions, start.elapsed())
    }

    /// Run `solver` with node statistics attached.
    ///
    /// Statistics are always gathered sequentially.
    pub fn run_with_stats(solver: &Solver) -> Self {
        let stats = solver.count_with_stats();
        let mut report = Self::new(solver, stats.solutions, stats.elapsed);
        report.stats = Some(stats);
        report
    }

    fn new(solver: &Solver, solutions: u64, elapsed: Duration) -> Self {
        Self {
            size: solver.size(),
            solutions,
            strategy: solver.strategy(),
            parallel: solver.is_parallel(),
            elapsed_ms: elapsed.as_millis() as u64,
            stats: None,
        }
    }

    /// Plain text rendering
    pub fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("Board: {}\n", self.size));
        output.push_str(&format!("Solutions: {}\n", self.solutions));
        output.push_str(&format!(
            "Strategy: {:?}{}\n",
            self.strategy,
            if self.parallel { " (parallel)" } else { "" }
        ));
        output.push_str(&format!("Time: {}ms\n", self.elapsed_ms));
        if let Some(stats) = &self.stats {
            output.push_str(&stats.to_string());
        }
        output
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// File name used when saving in `format`
    pub fn file_name(&self, format: OutputFormat) -> String {
        let extension = match format {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        };
        format!("queens_{}.{}", self.size.get(), extension)
    }

    /// Save into `output_dir`, returning the written path
    pub fn save<P: AsRef<Path>>(&self, output_dir: P, format: OutputFormat) -> Result<PathBuf> {
        let output_dir = output_dir.as_ref();
        std::fs::create_dir_all(output_dir)
            .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;

        let content = match format {
            OutputFormat::Text => self.to_text(),
            OutputFormat::Json => self.to_json().context("Failed to serialize report")?,
        };

        let path = output_dir.join(self.file_name(format));
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        Ok(path)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read report: {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Failed to parse report: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn solver(n: u32) -> Solver {
        Solver::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_run_records_solver_settings() {
        let report = CountReport::run(&solver(6).with_strategy(Strategy::Iterative).with_parallel(true));
        assert_eq!(report.size.get(), 6);
        assert_eq!(report.solutions, 4);
        assert_eq!(report.strategy, Strategy::Iterative);
        assert!(report.parallel);
        assert!(report.stats.is_none());
    }

    #[test]
    fn test_run_with_stats() {
        let report = CountReport::run_with_stats(&solver(5));
        assert_eq!(report.solutions, 10);
        let stats = report.stats.as_ref().unwrap();
        assert_eq!(stats.solutions, 10);
        assert!(report.to_text().contains("Nodes visited"));
    }

    #[test]
    fn test_json_shape() {
        let report = CountReport::run(&solver(4));
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["size"], 4);
        assert_eq!(value["solutions"], 2);
        assert_eq!(value["strategy"], "recursive");
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn test_save_json_and_load() {
        let dir = tempdir().unwrap();
        let report = CountReport::run_with_stats(&solver(7));

        let path = report.save(dir.path(), OutputFormat::Json).unwrap();
        assert_eq!(path.file_name().unwrap(), "queens_7.json");

        let loaded = CountReport::load_from_file(&path).unwrap();
        assert_eq!(loaded.solutions, 40);
        assert_eq!(loaded.size, report.size);
        // elapsed time is not persisted
        assert_eq!(loaded.stats.unwrap().nodes, report.stats.unwrap().nodes);
    }

    #[test]
    fn test_save_text() {
        let dir = tempdir().unwrap();
        let report = CountReport::run(&solver(8));
        let path = report.save(dir.path().join("nested"), OutputFormat::Text).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("Board: 8x8"));
        assert!(content.contains("Solutions: 92"));
    }
}
