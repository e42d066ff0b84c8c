//! Configuration management for the N-queens counter

pub mod settings;

pub use settings::{
    BoardConfig, CliOverrides, OutputConfig, OutputFormat, Settings, SolverConfig, Strategy,
};
