//! CLI output formatting.
//!
//! This module contains all output formatting functions for the CLI.
//! Extracted to enable testing of output generation.

use crate::algo::SearchOutcome;
use crate::bars::{BarChart, BarState};

/// Print version information.
pub fn print_version() {
    println!("buscar {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"buscar - Search Algorithm Visualization Engine

USAGE:
    buscar <COMMAND> [OPTIONS]

COMMANDS:
    run <scenario.yaml>         Run a scenario and print each step
        --pacing <ms>           Override the scenario's pacing
        -q, --quiet             Suppress per-step output

    search <linear|binary> <target>
                                Run an ad-hoc search
        --array <csv>           Comma-separated values, e.g. 5,3,8,1
        --pacing <ms>           Pacing between steps (default: 0)

    check <scenario.yaml>       Validate a scenario file without running it

    trace <scenario.yaml>       Run silently and export the trace
        --out <file.jsonl>      Write JSON Lines here instead of stdout

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    buscar run demos/classroom_binary.yaml
    buscar search linear 8 --array 5,3,8,1
    buscar search binary 5 --array 1,3,5,8,9 --pacing 500
    buscar trace demos/classroom_binary.yaml --out trace.jsonl
"
    );
}

/// Render one bar as a text row: index, value, proportional bar, glyph.
#[must_use]
pub fn format_bar_row(index: usize, value: f64, height: u32, state: &BarState) -> String {
    let bar: String = "█".repeat(height as usize);
    format!("  [{index:>3}] {value:>8}  {bar} {}", state.glyph())
}

/// Print the array as a horizontal bar chart with state glyphs.
///
/// Bars are scaled so the largest value spans `width` columns.
pub fn print_bars(values: &[f64], bars: &[BarState], width: u32) {
    let chart = BarChart::new(width);
    let heights = chart.heights(values);
    for (index, (&value, state)) in values.iter().zip(bars).enumerate() {
        println!(
            "{}",
            format_bar_row(index, value, heights.get(index).copied().unwrap_or(0), state)
        );
    }
}

/// Print the outcome summary of a completed run.
pub fn print_outcome(outcome: &SearchOutcome) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let symbol = if outcome.found() { "✓" } else { "✗" };
    println!(
        "{symbol} {} search: element {} {}",
        outcome.kind, outcome.target, outcome.status
    );
    println!("  Iterations logged: {}", outcome.trace.len());
    println!("  Comparisons:       {}", outcome.comparisons);
    println!("  {}", outcome.complexity);
}
