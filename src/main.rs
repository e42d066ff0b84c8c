//! Command line front end for the N-queens counter

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nqueens_counter::{
    benchmark::BenchmarkSuite,
    config::{CliOverrides, OutputFormat, Settings, Strategy},
    reference::{count_by_permutation, MAX_REFERENCE_SIZE},
    utils::{ColorOutput, ReportFormatter},
    BoardSize, CountReport, Solver,
};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nqueens")]
#[command(about = "Count solutions to the N-queens problem")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count the solutions for one board size
    Count {
        /// Board size (overrides config)
        #[arg(short = 'n', long)]
        size: Option<u32>,

        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Search strategy (overrides config)
        #[arg(long, value_enum)]
        strategy: Option<Strategy>,

        /// Search the first-row branches in parallel
        #[arg(long)]
        parallel: bool,

        /// Report format (overrides config)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Save the report into this directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Collect node statistics
        #[arg(long)]
        stats: bool,

        /// Print every visited board state
        #[arg(long)]
        trace: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Cross-check the solver against brute-force enumeration
    Verify {
        /// Largest board to check
        #[arg(short, long, default_value_t = 8)]
        max_size: u32,
    },

    /// Print the solution count for every board size up to a limit
    Table {
        /// Largest board to count
        #[arg(short, long, default_value_t = 12)]
        max_size: u32,

        /// Search the first-row branches in parallel
        #[arg(long)]
        parallel: bool,
    },

    /// Time every search configuration on one board
    Benchmark {
        /// Board size
        #[arg(short = 'n', long, default_value_t = 12)]
        size: u32,

        /// Runs per configuration
        #[arg(short, long, default_value_t = 3)]
        runs: usize,
    },

    /// Create a default configuration file
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Count {
            size, config, strategy, parallel, format,
            output, stats, trace, verbose
        } => {
            let overrides = CliOverrides {
                size,
                strategy,
                parallel,
                format,
                output_dir: output,
            };
            count_command(config, overrides, stats, trace, verbose, &mut std::io::stdout().lock())
        }
        Commands::Verify { max_size } => verify_command(max_size),
        Commands::Table { max_size, parallel } => table_command(max_size, parallel),
        Commands::Benchmark { size, runs } => benchmark_command(size, runs),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Write `line` to `out` in text mode, to stderr otherwise
fn emit<W: Write>(out: &mut W, to_out: bool, line: &str) -> std::io::Result<()> {
    if to_out {
        writeln!(out, "{}", line)
    } else {
        writeln!(std::io::stderr(), "{}", line)
    }
}

fn count_command<W: Write>(
    config_path: PathBuf,
    overrides: CliOverrides,
    stats: bool,
    trace: bool,
    verbose: bool,
    out: &mut W,
) -> Result<()> {
    // validation waits until the CLI overrides are merged
    let (mut settings, defaulted) = Settings::load_unvalidated_or_default(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;
    if defaulted && verbose {
        eprintln!("{}", ColorOutput::warning(&format!(
            "Config file {} not found, using defaults", config_path.display()
        )));
    }

    settings.merge_with_cli(&overrides);
    settings.validate()
        .context("Configuration validation failed")?;
    let size = settings.board_size()?;

    // JSON output keeps stdout a single document
    let text = settings.output.format == OutputFormat::Text;

    if verbose {
        emit(out, text, "Configuration:")?;
        emit(out, text, &format!("  Board size: {}", size))?;
        emit(out, text, &format!("  Strategy: {:?}", settings.solver.strategy))?;
        emit(out, text, &format!("  Parallel: {}", settings.solver.parallel))?;
        emit(out, text, &format!("  Format: {:?}", settings.output.format))?;
        emit(out, text, "")?;
    }

    emit(out, text, &ColorOutput::info(&format!(
        "Count solutions to the {}-queens problem", size.get()
    )))?;

    let solver = Solver::new(size)
        .with_strategy(settings.solver.strategy)
        .with_parallel(settings.solver.parallel);

    if trace {
        let mut write_error = None;
        let count = solver.trace(|state| {
            if write_error.is_none() {
                let line = ColorOutput::trace(&ReportFormatter::format_trace_line(state, size));
                if let Err(e) = emit(out, text, &line) {
                    write_error = Some(e);
                }
            }
        });
        if let Some(e) = write_error {
            return Err(e).context("Failed to write trace");
        }
        emit(out, text, &format!("Traced {} solutions", count))?;
    }

    let report = if stats {
        CountReport::run_with_stats(&solver)
    } else {
        CountReport::run(&solver)
    };

    match settings.output.format {
        OutputFormat::Text => {
            writeln!(out, "{}", ColorOutput::success(&ReportFormatter::format_found(&report)))?;
            if verbose {
                writeln!(out, "{}", ReportFormatter::format_elapsed(&report))?;
            }
            if let Some(stats) = &report.stats {
                writeln!(out, "\n{}", stats)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", report.to_json().context("Failed to serialize report")?)?;
        }
    }

    if settings.output.save_report {
        let path = report.save(&settings.output.output_directory, settings.output.format)
            .context("Failed to save report")?;
        emit(out, text, &ColorOutput::success(&format!("Report saved to {}", path.display())))?;
    }

    Ok(())
}

fn verify_command(max_size: u32) -> Result<()> {
    BoardSize::new(max_size)?;
    if max_size > MAX_REFERENCE_SIZE {
        anyhow::bail!(
            "Brute-force reference supports boards up to {}, got {}",
            MAX_REFERENCE_SIZE, max_size
        );
    }

    println!("{}", ColorOutput::info(&format!(
        "Verifying solver against brute force for N = 1..={}", max_size
    )));

    let mut mismatches = 0;
    for n in 1..=max_size {
        let size = BoardSize::new(n)?;
        let reference = count_by_permutation(size)?;

        for (strategy, parallel) in BenchmarkSuite::configurations() {
            let count = Solver::new(size)
                .with_strategy(strategy)
                .with_parallel(parallel)
                .count();
            if count != reference {
                mismatches += 1;
                eprintln!("{}", ColorOutput::error(&format!(
                    "{:?} (parallel: {}) disagrees on N = {}", strategy, parallel, n
                )));
            }
        }

        let count = Solver::new(size).count();
        println!("{}", ReportFormatter::format_verification_row(n, count, reference));
    }

    if mismatches > 0 {
        anyhow::bail!("{} configuration(s) disagreed with the reference", mismatches);
    }

    println!("{}", ColorOutput::success("All strategies agree with the reference"));
    Ok(())
}

fn table_command(max_size: u32, parallel: bool) -> Result<()> {
    // validates the upper bound before any work
    BoardSize::new(max_size)?;

    let mut reports = Vec::with_capacity(max_size as usize);
    for n in 1..=max_size {
        let solver = Solver::new(BoardSize::new(n)?).with_parallel(parallel);
        reports.push(CountReport::run(&solver));
    }

    println!("{}", ReportFormatter::format_table(&reports));
    Ok(())
}

fn benchmark_command(size: u32, runs: usize) -> Result<()> {
    let size = BoardSize::new(size)?;

    println!("{}", ColorOutput::info(&format!(
        "Benchmarking search configurations on a {} board", size
    )));

    let mut suite = BenchmarkSuite::new(size, runs);
    suite.run();
    println!("{}", suite.summary());

    if !suite.counts_agree() {
        anyhow::bail!("Search configurations returned different counts");
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up configuration..."));

    let config_path = directory.join("config/default.yaml");
    if !config_path.exists() || force {
        Settings::default().to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    println!("{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit {}", config_path.display());
    println!("2. Run: nqueens count --config {}", config_path.display());

    Ok(())
}
