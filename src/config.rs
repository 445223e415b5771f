//! Configuration with YAML schema and validation.
//!
//! Mistake-proofed through type-safe structs, compile-time shape checks
//! via serde, and runtime semantic validation.

use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

use crate::algo::Pacing;
use crate::error::{VizError, VizResult};

/// Top-level visualization configuration.
///
/// Loaded from YAML files with full schema validation, or assembled with
/// `VizConfig::builder()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct VizConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Pacing between steps in milliseconds; 0 disables pacing.
    #[validate(range(max = 10_000))]
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,

    /// Seed for demo array generation.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Number of bars in a generated demo array.
    #[validate(range(min = 1, max = 256))]
    #[serde(default = "default_demo_len")]
    pub demo_len: usize,

    /// Largest value in a generated demo array.
    #[validate(range(min = 1))]
    #[serde(default = "default_demo_max_value")]
    pub demo_max_value: u32,

    /// Display height of the tallest bar.
    #[validate(range(min = 1, max = 1_000))]
    #[serde(default = "default_max_bar_height")]
    pub max_bar_height: u32,
}

fn default_schema_version() -> String {
    "1.0".to_string()
}

const fn default_pacing_ms() -> u64 {
    500
}

const fn default_seed() -> u64 {
    42
}

const fn default_demo_len() -> usize {
    12
}

const fn default_demo_max_value() -> u32 {
    30
}

const fn default_max_bar_height() -> u32 {
    300
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            pacing_ms: default_pacing_ms(),
            seed: default_seed(),
            demo_len: default_demo_len(),
            demo_max_value: default_demo_max_value(),
            max_bar_height: default_max_bar_height(),
        }
    }
}

impl VizConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> VizResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> VizResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        config.validate_semantic()?;
        Ok(config)
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VizConfigBuilder {
        VizConfigBuilder::default()
    }

    /// Pacing policy configured here.
    #[must_use]
    pub const fn pacing(&self) -> Pacing {
        Pacing::from_millis(self.pacing_ms)
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> VizResult<()> {
        if !self.schema_version.starts_with("1.") {
            return Err(VizError::config(format!(
                "unsupported schema version '{}'",
                self.schema_version
            )));
        }
        Ok(())
    }
}

/// Builder for `VizConfig`.
#[derive(Debug, Clone, Default)]
pub struct VizConfigBuilder {
    config: Option<VizConfig>,
}

impl VizConfigBuilder {
    fn config_mut(&mut self) -> &mut VizConfig {
        self.config.get_or_insert_with(VizConfig::default)
    }

    /// Set the pacing interval in milliseconds.
    #[must_use]
    pub fn pacing_ms(mut self, ms: u64) -> Self {
        self.config_mut().pacing_ms = ms;
        self
    }

    /// Set the demo generation seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config_mut().seed = seed;
        self
    }

    /// Set the generated demo array length.
    #[must_use]
    pub fn demo_len(mut self, len: usize) -> Self {
        self.config_mut().demo_len = len;
        self
    }

    /// Set the largest generated demo value.
    #[must_use]
    pub fn demo_max_value(mut self, max: u32) -> Self {
        self.config_mut().demo_max_value = max;
        self
    }

    /// Set the display height of the tallest bar.
    #[must_use]
    pub fn max_bar_height(mut self, height: u32) -> Self {
        self.config_mut().max_bar_height = height;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> VizConfig {
        self.config.unwrap_or_default()
    }
}
