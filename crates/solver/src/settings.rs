//! Solver Settings
//!
//! Tunables of the fixed-point iteration. Damping is exposed rather than
//! fixed: parameter regimes with strong feedback need heavier damping.

use muse_core::{AggregateState, Error, Result};
use muse_numerics::TalentModel;
use serde::{Deserialize, Serialize};

/// Configuration for [`find_equilibrium`](crate::find_equilibrium)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverSettings {
    /// Number of talent quantiles sampled
    pub population_sample_size: usize,
    /// Distribution the talent quantiles are drawn from
    pub talent_distribution: TalentModel,
    /// Convergence threshold on both |ΔW| and |Δδ̄|
    pub tolerance: f64,
    /// Hard iteration cap
    pub max_iterations: usize,
    /// Weight on the previous guess in the relaxed update, in (0, 1)
    pub damping: f64,
    /// Quantile grid spans `[margin, 1 − margin]`
    pub quantile_margin: f64,
    /// Starting guess for W
    pub initial_aggregate_effort: f64,
    /// Starting guess for δ̄
    pub initial_mean_differentiation: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            population_sample_size: 1000,
            talent_distribution: TalentModel::default(),
            tolerance: 1e-6,
            max_iterations: 100,
            damping: 0.6,
            quantile_margin: 0.001,
            initial_aggregate_effort: 1.0,
            initial_mean_differentiation: 0.5,
        }
    }
}

impl SolverSettings {
    /// Set population sample size (builder pattern)
    pub fn with_population_sample_size(mut self, size: usize) -> Self {
        self.population_sample_size = size;
        self
    }

    /// Set talent distribution (builder pattern)
    pub fn with_talent_distribution(mut self, distribution: TalentModel) -> Self {
        self.talent_distribution = distribution;
        self
    }

    /// Set tolerance (builder pattern)
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set iteration cap (builder pattern)
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set damping (builder pattern)
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Start from a given aggregate state (builder pattern)
    pub fn with_initial_state(mut self, state: AggregateState) -> Self {
        self.initial_aggregate_effort = state.aggregate_effort;
        self.initial_mean_differentiation = state.mean_differentiation;
        self
    }

    pub fn initial_state(&self) -> AggregateState {
        AggregateState::new(
            self.initial_aggregate_effort,
            self.initial_mean_differentiation,
        )
    }

    /// Reject degenerate settings before any creator is evaluated
    pub fn validate(&self) -> Result<()> {
        if self.population_sample_size == 0 {
            return Err(Error::InvalidConfiguration(
                "population_sample_size must be positive".to_string(),
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(Error::InvalidConfiguration(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidConfiguration(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(Error::InvalidConfiguration(format!(
                "damping must lie in (0, 1), got {}",
                self.damping
            )));
        }
        if !(self.quantile_margin > 0.0 && self.quantile_margin < 0.5) {
            return Err(Error::InvalidConfiguration(format!(
                "quantile_margin must lie in (0, 0.5), got {}",
                self.quantile_margin
            )));
        }
        if !self.initial_aggregate_effort.is_finite() {
            return Err(Error::InvalidConfiguration(format!(
                "initial_aggregate_effort must be finite, got {}",
                self.initial_aggregate_effort
            )));
        }
        // δ̄ ≥ 0 keeps the novelty denominator positive
        if !(self.initial_mean_differentiation.is_finite()
            && self.initial_mean_differentiation >= 0.0)
        {
            return Err(Error::InvalidConfiguration(format!(
                "initial_mean_differentiation must be finite and non-negative, got {}",
                self.initial_mean_differentiation
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_invalid_config(settings: SolverSettings) -> bool {
        matches!(settings.validate(), Err(Error::InvalidConfiguration(_)))
    }

    #[test]
    fn test_defaults_are_valid() {
        let settings = SolverSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.initial_state(), AggregateState::new(1.0, 0.5));
    }

    #[test]
    fn test_rejects_empty_population() {
        assert!(is_invalid_config(
            SolverSettings::default().with_population_sample_size(0)
        ));
    }

    #[test]
    fn test_rejects_non_positive_tolerance() {
        assert!(is_invalid_config(SolverSettings::default().with_tolerance(0.0)));
        assert!(is_invalid_config(SolverSettings::default().with_tolerance(-1e-6)));
        assert!(is_invalid_config(
            SolverSettings::default().with_tolerance(f64::NAN)
        ));
    }

    #[test]
    fn test_rejects_zero_iteration_budget() {
        assert!(is_invalid_config(
            SolverSettings::default().with_max_iterations(0)
        ));
    }

    #[test]
    fn test_damping_must_be_open_interval() {
        for damping in [0.0, 1.0, -0.2, 1.5] {
            assert!(is_invalid_config(
                SolverSettings::default().with_damping(damping)
            ));
        }
        assert!(SolverSettings::default().with_damping(0.95).validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_initial_mean_differentiation() {
        let settings = SolverSettings::default().with_initial_state(AggregateState::new(1.0, -0.1));
        assert!(is_invalid_config(settings));
    }

    #[test]
    fn test_negative_initial_aggregate_is_allowed() {
        let settings = SolverSettings::default().with_initial_state(AggregateState::new(-1.0, 0.0));
        assert!(settings.validate().is_ok());
    }
}
