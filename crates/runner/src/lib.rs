//! Muse Scenario Runner
//!
//! Solves the equilibrium for each configured policy scenario, analyses its
//! welfare, and reports the results.
//!
//! ## Usage
//!
//! ```ignore
//! let config = load_default_config()?;
//! let outcomes = run_scenarios(&config, &[])?;
//! save_summary(&outcomes, &config.output_dir, SUMMARY_FILE)?;
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod scenario;

pub use config::{ConfigError, RunnerConfig, load_config, load_config_from_str, load_default_config};
pub use error::{Result, RunnerError};
pub use report::{SUMMARY_FILE, ScenarioOutcome, SummaryDocument, log_summary, save_summary};
pub use scenario::{Adjustment, ParameterName, ResolvedScenario, Scenario, resolve_scenarios};

use muse_solver::find_equilibrium;
use muse_welfare::analyze;

/// Solve and analyse every scenario, or only those named in `only`
///
/// A scenario that does not converge is still reported, flagged.
pub fn run_scenarios(config: &RunnerConfig, only: &[String]) -> Result<Vec<ScenarioOutcome>> {
    let resolved = resolve_scenarios(&config.parameters, &config.scenarios)?;

    if let Some(missing) = only
        .iter()
        .find(|name| !resolved.iter().any(|s| &s.name == *name))
    {
        return Err(ConfigError::ScenarioNotFound(missing.clone()).into());
    }

    let mut outcomes = Vec::new();
    for scenario in resolved
        .iter()
        .filter(|s| only.is_empty() || only.contains(&s.name))
    {
        outcomes.push(run_scenario(scenario, config)?);
    }
    Ok(outcomes)
}

fn run_scenario(scenario: &ResolvedScenario, config: &RunnerConfig) -> Result<ScenarioOutcome> {
    log::info!("{0} RUNNING SCENARIO: {1} {0}", "=".repeat(20), scenario.name);

    let result = find_equilibrium(&scenario.parameters, &config.solver)?;
    if !result.converged {
        log::warn!(
            "Scenario '{}' did not converge in {} iterations; reporting last estimate",
            scenario.name,
            result.iterations
        );
    }

    let welfare = analyze(&result, &scenario.parameters);
    log_summary(&welfare, &scenario.name);

    Ok(ScenarioOutcome {
        scenario: scenario.name.clone(),
        converged: result.converged,
        iterations: result.iterations,
        aggregate_effort: result.aggregate_effort(),
        mean_differentiation: result.mean_differentiation(),
        capped_agents: result.capped_agents(),
        welfare,
    })
}
