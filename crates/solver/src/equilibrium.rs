//! Damped Fixed-Point Iteration
//!
//! Each pass freezes the current guess, solves every creator against it, and
//! compares the population's implied aggregate with the guess. The next
//! guess is a relaxed blend of the two.

use crate::population::solve_population;
use crate::settings::SolverSettings;
use muse_core::{AggregateState, ModelParameters, PopulationTable, Result, Talent};
use muse_numerics::{TalentDistribution, quantile_grid};
use serde::{Deserialize, Serialize};

/// Diagnostics for one pass of the iteration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// 1-based pass number
    pub iteration: usize,
    /// Aggregate state the creators responded to
    pub guess: AggregateState,
    /// Aggregate state implied by their responses
    pub computed: AggregateState,
    pub effort_gap: f64,
    pub differentiation_gap: f64,
    pub adoption_rate: f64,
}

/// Outcome of an equilibrium search
///
/// `converged = false` still carries the last pass; callers must check the
/// flag before treating `aggregate` as a fixed point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumResult {
    pub population: PopulationTable,
    /// Aggregate computed from `population` on the final pass
    pub aggregate: AggregateState,
    pub converged: bool,
    /// Number of passes performed
    pub iterations: usize,
    pub history: Vec<IterationRecord>,
}

impl EquilibriumResult {
    /// W at termination
    pub fn aggregate_effort(&self) -> f64 {
        self.aggregate.aggregate_effort
    }

    /// δ̄ at termination
    pub fn mean_differentiation(&self) -> f64 {
        self.aggregate.mean_differentiation
    }

    /// Creators whose differentiation search ended on the cap
    pub fn capped_agents(&self) -> usize {
        self.population.capped_count()
    }
}

/// Solve using the talent distribution named in `settings`
pub fn find_equilibrium(
    params: &ModelParameters,
    settings: &SolverSettings,
) -> Result<EquilibriumResult> {
    settings.validate()?;
    let distribution = settings.talent_distribution.build()?;
    find_equilibrium_with(params, settings, distribution.as_ref())
}

/// Solve with an explicit talent distribution
///
/// `settings.talent_distribution` is ignored in favour of `distribution`.
/// Settings are validated before the distribution is queried.
pub fn find_equilibrium_with(
    params: &ModelParameters,
    settings: &SolverSettings,
    distribution: &dyn TalentDistribution,
) -> Result<EquilibriumResult> {
    settings.validate()?;
    params.validate()?;

    let talents = quantile_grid(
        distribution,
        settings.population_sample_size,
        settings.quantile_margin,
    )
    .into_iter()
    .map(Talent::new)
    .collect::<Result<Vec<_>>>()?;

    log::info!(
        "Solving equilibrium: {} creators, talent ~ {}, damping={}, tol={:e}",
        talents.len(),
        distribution.name(),
        settings.damping,
        settings.tolerance
    );

    let mut guess = settings.initial_state();
    let mut history = Vec::with_capacity(settings.max_iterations);
    let mut last: Option<(PopulationTable, AggregateState)> = None;

    for iteration in 1..=settings.max_iterations {
        let table = solve_population(&talents, params, &guess);
        let computed = table.aggregate();
        let (effort_gap, differentiation_gap) = computed.gaps(&guess);
        let adoption_rate = table.adoption_rate();

        log::debug!(
            "iter {iteration}: W={:.8} δ̄={:.8} |ΔW|={effort_gap:.3e} |Δδ̄|={differentiation_gap:.3e} adoption={adoption_rate:.4}",
            computed.aggregate_effort,
            computed.mean_differentiation,
        );

        history.push(IterationRecord {
            iteration,
            guess,
            computed,
            effort_gap,
            differentiation_gap,
            adoption_rate,
        });

        if effort_gap < settings.tolerance && differentiation_gap < settings.tolerance {
            log::info!(
                "Converged after {iteration} iterations: W={:.6}, δ̄={:.6}, adoption={:.2}%",
                computed.aggregate_effort,
                computed.mean_differentiation,
                adoption_rate * 100.0
            );
            warn_if_capped(&table);
            return Ok(EquilibriumResult {
                population: table,
                aggregate: computed,
                converged: true,
                iterations: iteration,
                history,
            });
        }

        guess = guess.blend(&computed, settings.damping);
        last = Some((table, computed));
    }

    // max_iterations > 0 after validation, so at least one pass ran
    let Some((population, aggregate)) = last else {
        return Err(muse_core::Error::InvalidConfiguration(
            "max_iterations must be positive".to_string(),
        ));
    };

    let (effort_gap, differentiation_gap) = history
        .last()
        .map(|r| (r.effort_gap, r.differentiation_gap))
        .unwrap_or((f64::NAN, f64::NAN));
    log::warn!(
        "No convergence after {} iterations: |ΔW|={effort_gap:.3e}, |Δδ̄|={differentiation_gap:.3e}; returning last estimate",
        settings.max_iterations
    );
    warn_if_capped(&population);

    Ok(EquilibriumResult {
        population,
        aggregate,
        converged: false,
        iterations: settings.max_iterations,
        history,
    })
}

fn warn_if_capped(table: &PopulationTable) {
    let capped = table.capped_count();
    if capped > 0 {
        log::warn!(
            "{capped} creators hit the differentiation cap; optimum may lie beyond it"
        );
    }
}
