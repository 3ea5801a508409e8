//! Population Pass
//!
//! Evaluates every creator against one frozen aggregate guess. Each creator
//! depends only on its own talent and the guess, so the pass fans out across
//! threads; collecting into the table is the barrier before aggregation.

use muse_core::{AggregateState, ModelParameters, PopulationEntry, PopulationTable, Talent};
use muse_strategy::Creator;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best response of a single creator, with its weighted effort contribution
fn evaluate(talent: Talent, params: &ModelParameters, state: &AggregateState) -> PopulationEntry {
    let creator = Creator::from_talent(talent, params);
    let strategy = creator.solve_optimal_strategy(state);

    // Normalized against the guess, not the δ̄ this pass produces
    let novelty_multiplier =
        creator.novelty_multiplier(strategy.differentiation, state.mean_differentiation);

    PopulationEntry {
        talent,
        strategy,
        novelty_multiplier,
        weighted_effort: strategy.effort * novelty_multiplier,
    }
}

/// Solve every creator at `state` (parallel version).
#[cfg(feature = "parallel")]
pub(crate) fn solve_population(
    talents: &[Talent],
    params: &ModelParameters,
    state: &AggregateState,
) -> PopulationTable {
    let entries: Vec<PopulationEntry> = talents
        .par_iter()
        .map(|&talent| evaluate(talent, params, state))
        .collect();
    PopulationTable::new(entries)
}

/// Solve every creator at `state` (serial version when parallel feature is disabled).
#[cfg(not(feature = "parallel"))]
pub(crate) fn solve_population(
    talents: &[Talent],
    params: &ModelParameters,
    state: &AggregateState,
) -> PopulationTable {
    let entries: Vec<PopulationEntry> = talents
        .iter()
        .map(|&talent| evaluate(talent, params, state))
        .collect();
    PopulationTable::new(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_table_preserves_talent_order() {
        let params = ModelParameters::default();
        let talents: Vec<Talent> = [0.1, 0.5, 0.9]
            .into_iter()
            .map(|t| Talent::new(t).unwrap())
            .collect();

        let table = solve_population(&talents, &params, &AggregateState::new(1.0, 0.5));

        assert_eq!(table.len(), 3);
        for (entry, talent) in table.iter().zip(&talents) {
            assert_eq!(entry.talent, *talent);
        }
    }

    #[test]
    fn test_weighted_effort_uses_guess_mean() {
        let params = ModelParameters::default();
        let talents = vec![Talent::new(0.5).unwrap()];
        let state = AggregateState::new(1.0, 2.0);

        let table = solve_population(&talents, &params, &state);
        let entry = table.entries()[0];

        let lambda = params.novelty_decay;
        let expected_g = (1.0 + lambda * entry.strategy.differentiation) / (1.0 + lambda * 2.0);
        assert_relative_eq!(entry.novelty_multiplier, expected_g);
        assert_relative_eq!(entry.weighted_effort, entry.strategy.effort * expected_g);
    }
}
