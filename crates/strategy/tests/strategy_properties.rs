//! Property tests for the creator best responses
//!
//! Checks the ordering guarantees of the strategy model over random talents,
//! choices and aggregate states.

use muse_core::{AggregateState, Error, ModelParameters, Regime};
use muse_strategy::Creator;
use proptest::prelude::*;

fn params() -> ModelParameters {
    ModelParameters::default()
}

proptest! {
    #[test]
    fn effort_is_non_negative_and_increasing_in_value(
        low in 0.0f64..=1.0,
        high in 0.0f64..=1.0,
        delta in 0.0f64..10.0,
        w in 0.01f64..100.0,
        mean_delta in 0.0f64..10.0,
        adopt in any::<bool>(),
    ) {
        prop_assume!(high - low > 1e-9);
        let p = params();
        let regime = if adopt { Regime::Ai } else { Regime::Human };
        let state = AggregateState::new(w, mean_delta);

        let weak = Creator::new(low, &p).unwrap();
        let strong = Creator::new(high, &p).unwrap();
        prop_assert!(weak.value(delta) < strong.value(delta));

        let e_weak = weak.best_response_effort(delta, regime, &state);
        let e_strong = strong.best_response_effort(delta, regime, &state);
        prop_assert!(e_weak >= 0.0);
        prop_assert!(e_weak < e_strong);
    }

    #[test]
    fn novelty_multiplier_orders_around_mean(
        delta in 0.0f64..50.0,
        mean_delta in 0.0f64..50.0,
    ) {
        prop_assume!(delta == mean_delta || (delta - mean_delta).abs() > 1e-9);
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        let g = creator.novelty_multiplier(delta, mean_delta);

        if delta > mean_delta {
            prop_assert!(g > 1.0);
        } else if delta < mean_delta {
            prop_assert!(g < 1.0);
        } else {
            prop_assert_eq!(g, 1.0);
        }
    }

    #[test]
    fn chosen_regime_weakly_dominates(
        talent in 0.0f64..=1.0,
        w in 0.05f64..60.0,
        mean_delta in 0.0f64..5.0,
        fixed_cost in 0.0f64..6.0,
    ) {
        let p = params().with_adoption_fixed_cost(fixed_cost);
        let creator = Creator::new(talent, &p).unwrap();
        let state = AggregateState::new(w, mean_delta);

        let chosen = creator.solve_optimal_strategy(&state);
        for regime in Regime::ALL {
            let alternative = creator.solve_regime(regime, &state);
            prop_assert!(chosen.payoff >= alternative.payoff);
        }
        prop_assert!(chosen.effort >= 0.0);
        prop_assert!(chosen.differentiation >= 0.0);
        prop_assert!(chosen.differentiation <= p.differentiation_cap);
    }

    #[test]
    fn non_positive_aggregate_means_zero_effort(
        talent in 0.0f64..=1.0,
        w in -10.0f64..=0.0,
        delta in 0.0f64..10.0,
    ) {
        let p = params();
        let creator = Creator::new(talent, &p).unwrap();
        let state = AggregateState::new(w, 0.5);

        for regime in Regime::ALL {
            prop_assert_eq!(creator.best_response_effort(delta, regime, &state), 0.0);
        }
    }

    #[test]
    fn talent_outside_unit_interval_is_rejected(talent in 1.0001f64..100.0) {
        let p = params();
        prop_assert!(matches!(Creator::new(talent, &p), Err(Error::InvalidInput(_))));
        prop_assert!(matches!(Creator::new(-talent, &p), Err(Error::InvalidInput(_))));
    }
}

#[test]
fn test_adoption_cheaper_with_lower_fixed_cost() {
    let state = AggregateState::new(1.0, 0.5);
    let expensive = params().with_adoption_fixed_cost(5.0);
    let cheap = params().with_adoption_fixed_cost(0.0);

    let adopters = |p: &ModelParameters| {
        (0..=20)
            .map(|i| i as f64 / 20.0)
            .filter(|&t| Creator::new(t, p).unwrap().solve_optimal_strategy(&state).adopted())
            .count()
    };

    assert!(adopters(&cheap) >= adopters(&expensive));
    assert_eq!(adopters(&cheap), 21);
}
