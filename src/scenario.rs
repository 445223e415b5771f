//! Scenario YAML files.
//!
//! YAML-first architecture for search scenarios: a classroom can download,
//! edit, and re-run an instance without touching code. A scenario bundles
//! the array, the algorithm and target, optional pacing, and an optional
//! expectation block that the CLI checks after the run.
//!
//! # Example YAML
//!
//! ```yaml
//! meta:
//!   id: "SEARCH-ASC-005"
//!   version: "1.0.0"
//!   description: "Ascending five-element binary search"
//!
//! array: [1, 3, 5, 8, 9]
//!
//! algorithm:
//!   kind: binary
//!   target: 5
//!   pacing_ms: 0
//!
//! expect:
//!   found: true
//!   index: 2
//!   iterations: 1
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::algo::{Pacing, SearchKind, SearchOutcome};
use crate::session::validate_values;

/// Errors that can occur loading or validating a scenario.
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// YAML parsing failed.
    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// File could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Semantic validation failed.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Metadata about the scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioMeta {
    /// Unique instance identifier.
    pub id: String,
    /// Version string (semver).
    #[serde(default = "default_version")]
    pub version: String,
    /// Human-readable description.
    #[serde(default)]
    pub description: String,
    /// Where the instance came from.
    #[serde(default)]
    pub source: String,
}

fn default_version() -> String {
    "1.0.0".to_string()
}

impl Default for ScenarioMeta {
    fn default() -> Self {
        Self {
            id: "SEARCH-UNNAMED".to_string(),
            version: default_version(),
            description: "Unnamed search scenario".to_string(),
            source: String::new(),
        }
    }
}

/// Algorithm block: what to run and how fast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioAlgorithm {
    /// Which search to run.
    pub kind: SearchKind,
    /// Target value.
    pub target: f64,
    /// Pacing between steps in milliseconds; 0 disables pacing.
    #[serde(default)]
    pub pacing_ms: u64,
}

/// Expected outcome, checked by the CLI after the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioExpect {
    /// Whether the target should be found.
    pub found: bool,
    /// Expected match index, if found.
    #[serde(default)]
    pub index: Option<usize>,
    /// Expected number of trace records.
    #[serde(default)]
    pub iterations: Option<usize>,
}

/// A complete scenario instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioYaml {
    /// Instance metadata.
    #[serde(default)]
    pub meta: ScenarioMeta,
    /// The array to search.
    pub array: Vec<f64>,
    /// Algorithm block.
    pub algorithm: ScenarioAlgorithm,
    /// Optional expectation block.
    #[serde(default)]
    pub expect: Option<ScenarioExpect>,
}

impl ScenarioYaml {
    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if YAML parsing fails.
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or parsed.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ScenarioError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Validate the instance beyond schema shape.
    ///
    /// # Errors
    ///
    /// Returns error if the array is empty, contains non-finite values,
    /// or the target is non-finite.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        validate_values(&self.array).map_err(|e| ScenarioError::Validation(e.to_string()))?;
        if !self.algorithm.target.is_finite() {
            return Err(ScenarioError::Validation(
                "target must be a finite number".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of array elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// True if the array is empty (an invalid instance).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Pacing policy configured by this scenario.
    #[must_use]
    pub const fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.algorithm.pacing_ms)
    }

    /// Check a completed run against the expectation block.
    ///
    /// Returns `None` if the scenario carries no expectations, otherwise
    /// a list of mismatch descriptions (empty = all expectations met).
    #[must_use]
    pub fn check_expectations(&self, outcome: &SearchOutcome) -> Option<Vec<String>> {
        let expect = self.expect?;
        let mut mismatches = Vec::new();

        if outcome.found() != expect.found {
            mismatches.push(format!(
                "expected found={}, got {}",
                expect.found, outcome.status
            ));
        }
        if let Some(index) = expect.index {
            if outcome.status != (crate::algo::SearchStatus::Found { index }) {
                mismatches.push(format!("expected match at index {index}, got {}", outcome.status));
            }
        }
        if let Some(iterations) = expect.iterations {
            if outcome.trace.len() != iterations {
                mismatches.push(format!(
                    "expected {iterations} trace records, got {}",
                    outcome.trace.len()
                ));
            }
        }
        Some(mismatches)
    }
}
