use crate::ui::types::config::{ConfigError, OutputFormat};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_START: u64 = 10;
const DEFAULT_STOP: u64 = 10_000;
const DEFAULT_STEP: u64 = 10;

fn default_start() -> u64 {
    DEFAULT_START
}
fn default_stop() -> u64 {
    DEFAULT_STOP
}
fn default_step() -> u64 {
    DEFAULT_STEP
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SweepParams {
    #[serde(default = "default_start")]
    #[schemars(
        title = "Start",
        description = "First sample count of the sweep",
        range(min = 1)
    )]
    pub start: u64,

    #[serde(default = "default_stop")]
    #[schemars(
        title = "Stop",
        description = "Last sample count of the sweep (inclusive)",
        range(min = 1)
    )]
    pub stop: u64,

    #[serde(default = "default_step")]
    #[schemars(
        title = "Step",
        description = "Increment between consecutive sample counts",
        range(min = 1)
    )]
    pub step: u64,

    #[serde(default)]
    #[schemars(
        title = "Seed",
        description = "PRNG seed (None = seed from OS entropy)"
    )]
    pub seed: Option<u64>,

    #[serde(default)]
    #[schemars(skip)]
    pub output: OutputFormat,
}

impl Default for SweepParams {
    fn default() -> Self {
        Self {
            start: DEFAULT_START,
            stop: DEFAULT_STOP,
            step: DEFAULT_STEP,
            seed: None,
            output: OutputFormat::default(),
        }
    }
}

impl SweepParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [("start", self.start), ("stop", self.stop), ("step", self.step)] {
            if v == 0 {
                return Err(ConfigError::InvalidParameter(format!("{name} must be >= 1")));
            }
        }
        if self.start > self.stop {
            return Err(ConfigError::InvalidParameter(format!(
                "start ({}) must not exceed stop ({})",
                self.start, self.stop
            )));
        }
        Ok(())
    }

    /// Number of sample counts the sweep will visit.
    pub fn visit_count(&self) -> u64 {
        if self.step == 0 || self.start > self.stop {
            0
        } else {
            (self.stop - self.start) / self.step + 1
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_str(s)?;
        params.validate()?;
        Ok(params)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}
