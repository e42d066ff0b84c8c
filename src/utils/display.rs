//! Display and output formatting utilities

use crate::board::{BoardSize, BoardState};
use crate::report::CountReport;

/// Format counting results for the console
pub struct ReportFormatter;

impl ReportFormatter {
    /// Headline for a single count
    pub fn format_found(report: &CountReport) -> String {
        format!("Found {} solutions", report.solutions)
    }

    /// Wall-clock time of a count, printed separately from the headline
    pub fn format_elapsed(report: &CountReport) -> String {
        format!("Search time: {:.3}s", report.elapsed_ms as f64 / 1000.0)
    }

    /// One traced state, indented by its level
    pub fn format_trace_line(state: &BoardState, size: BoardSize) -> String {
        format!(
            "{}{:2} {}",
            "  ".repeat(state.level as usize),
            state.level,
            state.display(size)
        )
    }

    /// Counts for a range of sizes as a table
    pub fn format_table(reports: &[CountReport]) -> String {
        let mut output = String::new();

        output.push_str("  N | Solutions      | Time(ms)\n");
        output.push_str("----|----------------|---------\n");

        for report in reports {
            output.push_str(&format!(
                "{:3} | {:14} | {:8}\n",
                report.size.get(),
                report.solutions,
                report.elapsed_ms
            ));
        }

        output
    }

    /// One row of the solver-versus-reference comparison
    pub fn format_verification_row(n: u32, solver: u64, reference: u64) -> String {
        let status = if solver == reference {
            ColorOutput::success("ok")
        } else {
            ColorOutput::error("MISMATCH")
        };
        format!("{:3} | solver {:6} | reference {:6} | {}", n, solver, reference, status)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }

    /// Format a search trace line
    pub fn trace(text: &str) -> String {
        Self::colored(text, Color::Cyan)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}
