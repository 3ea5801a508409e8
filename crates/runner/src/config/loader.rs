use std::path::Path;
use thiserror::Error;

use super::types::RunnerConfig;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Scenario '{scenario}' builds on unknown scenario '{base}'")]
    UnknownBaseScenario { scenario: String, base: String },
    #[error("Duplicate scenario name: {0}")]
    DuplicateScenario(String),
    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),
    #[error("Invalid parameters for scenario '{scenario}': {source}")]
    InvalidParameters {
        scenario: String,
        #[source]
        source: muse_core::Error,
    },
    #[error(transparent)]
    InvalidSolverSettings(muse_core::Error),
}

/// Load runner configuration from a JSON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<RunnerConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Load configuration from a JSON string
pub fn load_config_from_str(json: &str) -> Result<RunnerConfig, ConfigError> {
    let config: RunnerConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

/// Load the default embedded configuration
pub fn load_default_config() -> Result<RunnerConfig, ConfigError> {
    let default_config = include_str!("baseline.json");
    load_config_from_str(default_config)
}

impl RunnerConfig {
    /// Get a scenario definition by name
    pub fn get_scenario(&self, name: &str) -> Option<&crate::scenario::Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    /// Validate the configuration
    ///
    /// Resolves the whole scenario chain so a bad base or adjustment is
    /// reported before any equilibrium is solved.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.solver
            .validate()
            .map_err(ConfigError::InvalidSolverSettings)?;
        crate::scenario::resolve_scenarios(&self.parameters, &self.scenarios)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = load_default_config().unwrap();
        assert_eq!(config.scenarios.len(), 4);
        assert_eq!(config.parameters, muse_core::ModelParameters::default());
        assert_eq!(config.solver, muse_solver::SolverSettings::default());
    }

    #[test]
    fn test_get_scenario() {
        let config = load_default_config().unwrap();
        let scenario = config.get_scenario("+ AI Act").unwrap();
        assert_eq!(scenario.base.as_deref(), Some("Price Cut"));
        assert!(config.get_scenario("Carbon Tax").is_none());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = load_config_from_str("{}").unwrap();
        assert!(config.scenarios.is_empty());
        assert_eq!(config.output_dir, Path::new(super::super::DEFAULT_OUTPUT_DIR));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_config_from_str("{ not json"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_invalid_solver_settings_rejected() {
        let json = r#"{ "solver": { "damping": 1.5 } }"#;
        assert!(matches!(
            load_config_from_str(json),
            Err(ConfigError::InvalidSolverSettings(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/muse.json"),
            Err(ConfigError::IoError(_))
        ));
    }
}
