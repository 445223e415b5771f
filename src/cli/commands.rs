//! CLI command handlers.
//!
//! This module contains the execution logic for each CLI command.
//! Extracted to enable comprehensive testing of command behavior.

use std::path::Path;
use std::process::ExitCode;

use crate::algo::{FnObserver, NullObserver, Pacing, SearchKind, SearchOutcome, StepEvent};
use crate::scenario::ScenarioYaml;
use crate::session::{parse_array, SearchSession};

use super::output::{print_bars, print_help, print_outcome, print_version};
use super::{Args, Command};

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed
/// arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Run {
            scenario_path,
            pacing_override,
            quiet,
        } => run_scenario(&scenario_path, pacing_override, quiet),
        Command::Search {
            kind,
            target,
            array,
            pacing_override,
        } => run_adhoc(kind, target, &array, pacing_override),
        Command::Check { scenario_path } => check_scenario(&scenario_path),
        Command::Trace { scenario_path, out } => trace_scenario(&scenario_path, out.as_deref()),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

fn load_scenario(path: &Path) -> Result<ScenarioYaml, ExitCode> {
    match ScenarioYaml::from_yaml_file(path) {
        Ok(scenario) => match scenario.validate() {
            Ok(()) => Ok(scenario),
            Err(e) => {
                eprintln!("Invalid scenario '{}': {e}", path.display());
                Err(ExitCode::from(2))
            }
        },
        Err(e) => {
            eprintln!("Error loading '{}': {e}", path.display());
            Err(ExitCode::from(2))
        }
    }
}

fn drive(
    session: &mut SearchSession,
    kind: SearchKind,
    target: f64,
    pacing: Pacing,
    quiet: bool,
) -> Option<SearchOutcome> {
    let result = if quiet {
        session.search(kind, target, pacing, &mut NullObserver)
    } else {
        let mut observer = FnObserver(|event: &StepEvent, _bars: &[crate::bars::BarState]| {
            if let StepEvent::Visit {
                iteration,
                index,
                value,
            } = event
            {
                println!("Iteration {iteration}: checking index {index}, value {value}");
            }
        });
        session.search(kind, target, pacing, &mut observer)
    };

    match result {
        Ok(outcome) => Some(outcome),
        Err(e) => {
            eprintln!("Search failed: {e}");
            None
        }
    }
}

/// Run a scenario file end to end.
#[must_use]
pub fn run_scenario(path: &Path, pacing_override: Option<u64>, quiet: bool) -> ExitCode {
    let scenario = match load_scenario(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    println!("Scenario: {} ({})", scenario.meta.id, scenario.meta.description);
    println!(
        "Running {} search for {} over {} elements\n",
        scenario.algorithm.kind,
        scenario.algorithm.target,
        scenario.len()
    );

    let mut session = SearchSession::new();
    if let Err(e) = session.set_array(scenario.array.clone()) {
        eprintln!("Invalid array: {e}");
        return ExitCode::from(2);
    }

    let pacing = pacing_override.map_or_else(|| scenario.pacing(), Pacing::from_millis);
    let Some(outcome) = drive(
        &mut session,
        scenario.algorithm.kind,
        scenario.algorithm.target,
        pacing,
        quiet,
    ) else {
        return ExitCode::from(2);
    };

    println!();
    print_bars(session.values(), session.bars(), 40);
    print_outcome(&outcome);

    match scenario.check_expectations(&outcome) {
        Some(mismatches) if !mismatches.is_empty() => {
            println!("\nExpectations NOT met:");
            for m in &mismatches {
                println!("  ✗ {m}");
            }
            ExitCode::from(1)
        }
        Some(_) => {
            println!("\n✓ All expectations met");
            ExitCode::SUCCESS
        }
        None => {
            if outcome.found() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            }
        }
    }
}

/// Run an ad-hoc search over an inline array.
#[must_use]
pub fn run_adhoc(
    kind: SearchKind,
    target: f64,
    array_csv: &str,
    pacing_override: Option<u64>,
) -> ExitCode {
    let values = match parse_array(array_csv) {
        Ok(values) => values,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };

    let mut session = SearchSession::new();
    if let Err(e) = session.set_array(values) {
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    let pacing = Pacing::from_millis(pacing_override.unwrap_or(0));
    let Some(outcome) = drive(&mut session, kind, target, pacing, false) else {
        return ExitCode::from(2);
    };

    println!();
    print_bars(session.values(), session.bars(), 40);
    print_outcome(&outcome);

    if outcome.found() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    }
}

/// Validate a scenario file without running it.
#[must_use]
pub fn check_scenario(path: &Path) -> ExitCode {
    match load_scenario(path) {
        Ok(scenario) => {
            println!(
                "✓ {} is valid ({} elements, {} search for {})",
                path.display(),
                scenario.len(),
                scenario.algorithm.kind,
                scenario.algorithm.target
            );
            ExitCode::SUCCESS
        }
        Err(code) => code,
    }
}

/// Run silently and export the trace as JSON Lines.
#[must_use]
pub fn trace_scenario(path: &Path, out: Option<&Path>) -> ExitCode {
    let scenario = match load_scenario(path) {
        Ok(s) => s,
        Err(code) => return code,
    };

    let mut session = SearchSession::new();
    if let Err(e) = session.set_array(scenario.array.clone()) {
        eprintln!("Invalid array: {e}");
        return ExitCode::from(2);
    }

    let Some(outcome) = drive(
        &mut session,
        scenario.algorithm.kind,
        scenario.algorithm.target,
        Pacing::None,
        true,
    ) else {
        return ExitCode::from(2);
    };

    if let Some(out_path) = out {
        if let Err(e) = outcome.trace.export_jsonl(out_path) {
            eprintln!("Failed to export trace: {e}");
            return ExitCode::from(2);
        }
        println!(
            "Exported {} trace records to {}",
            outcome.trace.len(),
            out_path.display()
        );
    } else {
        let mut stdout = std::io::stdout();
        if let Err(e) = outcome.trace.write_jsonl(&mut stdout) {
            eprintln!("Failed to write trace: {e}");
            return ExitCode::from(2);
        }
    }

    ExitCode::SUCCESS
}
