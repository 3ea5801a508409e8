use crate::scenario::Scenario;
use muse_core::ModelParameters;
use muse_solver::SolverSettings;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "outputs/tables";

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

/// Root configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Baseline model parameters every scenario starts from
    #[serde(default)]
    pub parameters: ModelParameters,
    #[serde(default)]
    pub solver: SolverSettings,
    /// Policy scenarios, run in order
    #[serde(default)]
    pub scenarios: Vec<Scenario>,
    /// Directory the summary table is written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            parameters: ModelParameters::default(),
            solver: SolverSettings::default(),
            scenarios: Vec::new(),
            output_dir: default_output_dir(),
        }
    }
}
