//! Configuration settings for the N-queens counter

use crate::board::BoardSize;
use crate::error::QueensError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board: BoardConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub size: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub parallel: bool,
}

/// How the search tree is walked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Plain recursion with per-call state values
    #[default]
    Recursive,
    /// Explicit stack of pending frames
    Iterative,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_report: bool,
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { size: 8 }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            save_report: false,
            output_directory: PathBuf::from("output/reports"),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let settings = Self::parse_file(path)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read and parse a YAML file without validating it
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse settings from `path`, or fall back to defaults when it does not exist.
    ///
    /// Nothing is validated, so CLI overrides can still replace bad values.
    /// The flag tells the caller whether the defaults were used.
    pub fn load_unvalidated_or_default<P: AsRef<Path>>(path: P) -> Result<(Self, bool)> {
        let path = path.as_ref();
        if path.exists() {
            Ok((Self::parse_file(path)?, false))
        } else {
            Ok((Self::default(), true))
        }
    }

    /// Save settings to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> std::result::Result<(), QueensError> {
        self.board_size()?;

        if self.output.save_report && self.output.output_directory.as_os_str().is_empty() {
            return Err(QueensError::Config(
                "output directory must be set when saving reports".to_string(),
            ));
        }

        Ok(())
    }

    /// The configured board size, checked against the mask width
    pub fn board_size(&self) -> std::result::Result<BoardSize, QueensError> {
        BoardSize::new(self.board.size)
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(size) = cli_overrides.size {
            self.board.size = size;
        }
        if let Some(strategy) = cli_overrides.strategy {
            self.solver.strategy = strategy;
        }
        if cli_overrides.parallel {
            self.solver.parallel = true;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
            self.output.save_report = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub size: Option<u32>,
    pub strategy: Option<Strategy>,
    pub parallel: bool,
    pub format: Option<OutputFormat>,
    pub output_dir: Option<PathBuf>,
}
