//! CLI argument parsing.
//!
//! This module provides the argument parser for the buscar CLI.
//! Extracted to enable comprehensive testing of argument parsing logic.

use std::path::PathBuf;

use crate::algo::SearchKind;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a scenario file
    Run {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Optional pacing override in milliseconds.
        pacing_override: Option<u64>,
        /// Suppress per-step output.
        quiet: bool,
    },
    /// Run an ad-hoc search over an inline array
    Search {
        /// Which algorithm to run.
        kind: SearchKind,
        /// Target value.
        target: f64,
        /// Comma-separated array values.
        array: String,
        /// Optional pacing override in milliseconds.
        pacing_override: Option<u64>,
    },
    /// Validate a scenario file without running it
    Check {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
    },
    /// Run silently and export the trace as JSON Lines
    Trace {
        /// Path to the scenario YAML file.
        scenario_path: PathBuf,
        /// Output file; stdout when absent.
        out: Option<PathBuf>,
    },
    /// Show help
    Help,
    /// Show version
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    ///
    /// This method is testable as it accepts any iterator of strings,
    /// not just `std::env::args()`.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    /// Internal parsing from a vector of strings.
    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "run" => Self::parse_run_command(args),
            "search" => Self::parse_search_command(args),
            "check" => Self::parse_check_command(args),
            "trace" => Self::parse_trace_command(args),
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'run' command arguments.
    fn parse_run_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'run' command requires a scenario path");
            return Command::Help;
        }

        let mut pacing_override = None;
        let mut quiet = false;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--pacing" => {
                    if i + 1 < args.len() {
                        if let Ok(ms) = args[i + 1].parse() {
                            pacing_override = Some(ms);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "-q" | "--quiet" => {
                    quiet = true;
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Run {
            scenario_path: PathBuf::from(&args[2]),
            pacing_override,
            quiet,
        }
    }

    /// Parse the 'search' command arguments.
    fn parse_search_command(args: &[String]) -> Command {
        if args.len() < 4 {
            eprintln!("Error: 'search' command requires a kind and a target");
            return Command::Help;
        }

        let Some(kind) = SearchKind::parse(args[2].as_str()) else {
            eprintln!("Error: unknown search kind '{}'", args[2]);
            return Command::Help;
        };
        let Ok(target) = args[3].parse::<f64>() else {
            eprintln!("Error: '{}' is not a valid target", args[3]);
            return Command::Help;
        };

        let mut array = String::new();
        let mut pacing_override = None;

        let mut i = 4;
        while i < args.len() {
            match args[i].as_str() {
                "--array" => {
                    if i + 1 < args.len() {
                        array = args[i + 1].clone();
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--pacing" => {
                    if i + 1 < args.len() {
                        if let Ok(ms) = args[i + 1].parse() {
                            pacing_override = Some(ms);
                        }
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        if array.is_empty() {
            eprintln!("Error: 'search' command requires --array <csv>");
            return Command::Help;
        }

        Command::Search {
            kind,
            target,
            array,
            pacing_override,
        }
    }

    /// Parse the 'check' command arguments.
    fn parse_check_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'check' command requires a scenario path");
            return Command::Help;
        }
        Command::Check {
            scenario_path: PathBuf::from(&args[2]),
        }
    }

    /// Parse the 'trace' command arguments.
    fn parse_trace_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'trace' command requires a scenario path");
            return Command::Help;
        }

        let mut out = None;
        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--out" => {
                    if i + 1 < args.len() {
                        out = Some(PathBuf::from(&args[i + 1]));
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                _ => i += 1,
            }
        }

        Command::Trace {
            scenario_path: PathBuf::from(&args[2]),
            out,
        }
    }
}
