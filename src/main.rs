//! buscar CLI - Search Algorithm Visualization Engine
//!
//! Command-line interface for running search scenarios.

use std::process::ExitCode;

use buscar::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
