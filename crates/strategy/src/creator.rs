//! Creator Best Responses
//!
//! Payoff for a creator with talent θ at aggregate state (W, δ̄):
//!
//! ```text
//! π = s·v − ½·c_A·e² − ½·c_δ·δ² − f·A
//!
//! v = β0 + β1·θ + β2·δ
//! g = (1 + λ·δ) / (1 + λ·δ̄)
//! s = e·g / W            (0 when W ≤ 0)
//! ```
//!
//! First-order conditions:
//!
//! ```text
//! ∂π/∂e = 0  ⇒  e* = v·g / (c_A·W)
//! ∂π/∂δ = 0  ⇒  δ  = Ψ(δ) = (β2 + λ·v / (1 + λ·δ̄))·g·e*(δ) / (c_δ·W)
//! ```
//!
//! Both cost terms are strictly convex, so the stationary point is a maximum.

use muse_core::{AggregateState, ModelParameters, Regime, Result, Strategy, Talent};
use muse_numerics::{BrentConfig, RootError, brent};

/// Relative distance from the search cap under which a root counts as pinned
const CAP_PIN_TOLERANCE: f64 = 1e-6;

/// Outcome of the differentiation root search
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DifferentiationRoot {
    /// Root strictly inside the search interval
    Interior(f64),
    /// Root on the search cap; the true optimum may lie beyond it
    AtCap(f64),
    /// No sign change on `[0, cap]` (or W ≤ 0); differentiation falls back to 0
    NoRoot,
}

impl DifferentiationRoot {
    /// Differentiation level to play
    pub fn value(&self) -> f64 {
        match *self {
            DifferentiationRoot::Interior(d) | DifferentiationRoot::AtCap(d) => d.max(0.0),
            DifferentiationRoot::NoRoot => 0.0,
        }
    }

    pub fn is_capped(&self) -> bool {
        matches!(self, DifferentiationRoot::AtCap(_))
    }
}

/// A single creator: immutable talent plus a view of the shared parameters
#[derive(Debug, Clone)]
pub struct Creator<'a> {
    talent: Talent,
    params: &'a ModelParameters,
    root_config: BrentConfig,
}

impl<'a> Creator<'a> {
    /// Create a creator, failing with `InvalidInput` if talent is outside `[0, 1]`
    pub fn new(talent: f64, params: &'a ModelParameters) -> Result<Self> {
        Ok(Self {
            talent: Talent::new(talent)?,
            params,
            root_config: BrentConfig::default(),
        })
    }

    /// Create a creator from an already validated talent
    pub fn from_talent(talent: Talent, params: &'a ModelParameters) -> Self {
        Self {
            talent,
            params,
            root_config: BrentConfig::default(),
        }
    }

    pub fn talent(&self) -> Talent {
        self.talent
    }

    pub fn params(&self) -> &ModelParameters {
        self.params
    }

    /// Content value: `β0 + β1·θ + β2·δ`
    pub fn value(&self, differentiation: f64) -> f64 {
        let p = self.params;
        p.beta_0 + p.beta_1 * self.talent.value() + p.beta_2 * differentiation
    }

    /// Relative salience: `(1 + λ·δ) / (1 + λ·δ̄)`
    pub fn novelty_multiplier(&self, differentiation: f64, mean_differentiation: f64) -> f64 {
        novelty_multiplier(self.params.novelty_decay, differentiation, mean_differentiation)
    }

    /// Closed-form optimal effort; exactly 0 when W ≤ 0
    pub fn best_response_effort(
        &self,
        differentiation: f64,
        regime: Regime,
        state: &AggregateState,
    ) -> f64 {
        let w = state.aggregate_effort;
        if w <= 0.0 {
            return 0.0;
        }
        let v = self.value(differentiation);
        let g = self.novelty_multiplier(differentiation, state.mean_differentiation);
        (v * g) / (regime.unit_effort_cost(self.params) * w)
    }

    /// Root of `δ − Ψ(δ)` on `[0, differentiation_cap]`
    pub fn best_response_differentiation(
        &self,
        regime: Regime,
        state: &AggregateState,
    ) -> DifferentiationRoot {
        let w = state.aggregate_effort;
        if w <= 0.0 {
            return DifferentiationRoot::NoRoot;
        }

        let p = self.params;
        let lambda = p.novelty_decay;
        let mean_scale = 1.0 + lambda * state.mean_differentiation;

        let foc_gap = |delta: f64| {
            let v = self.value(delta);
            let g = self.novelty_multiplier(delta, state.mean_differentiation);
            let effort = self.best_response_effort(delta, regime, state);
            let psi =
                (p.beta_2 + lambda * v / mean_scale) * g * effort / (p.differentiation_cost * w);
            delta - psi
        };

        let cap = p.differentiation_cap;
        match brent(foc_gap, 0.0, cap, &self.root_config) {
            Ok(root) => classify_root(root, cap),
            Err(RootError::MaxIterations { best, .. }) => {
                log::trace!("differentiation root search exhausted at δ={best:.6}");
                classify_root(best, cap)
            }
            Err(RootError::NoSignChange { .. }) | Err(RootError::NonFinite { .. }) => {
                DifferentiationRoot::NoRoot
            }
        }
    }

    /// Payoff `s·v − cost` for given choices
    pub fn payoff(
        &self,
        effort: f64,
        differentiation: f64,
        regime: Regime,
        state: &AggregateState,
    ) -> f64 {
        let w = state.aggregate_effort;
        let v = self.value(differentiation);
        let g = self.novelty_multiplier(differentiation, state.mean_differentiation);
        let share = if w > 0.0 { effort * g / w } else { 0.0 };

        let cost = 0.5 * regime.unit_effort_cost(self.params) * effort * effort
            + 0.5 * self.params.differentiation_cost * differentiation * differentiation
            + regime.fixed_cost(self.params);

        share * v - cost
    }

    /// Optimal continuous choices within a single regime
    pub fn solve_regime(&self, regime: Regime, state: &AggregateState) -> Strategy {
        let root = self.best_response_differentiation(regime, state);
        let differentiation = root.value();
        let effort = self.best_response_effort(differentiation, regime, state);
        let payoff = self.payoff(effort, differentiation, regime, state);

        Strategy {
            regime,
            effort,
            differentiation,
            payoff,
            differentiation_capped: root.is_capped(),
        }
    }

    /// Best strategy across both regimes; ties go to adoption
    pub fn solve_optimal_strategy(&self, state: &AggregateState) -> Strategy {
        let human = self.solve_regime(Regime::Human, state);
        let ai = self.solve_regime(Regime::Ai, state);

        if ai.payoff >= human.payoff { ai } else { human }
    }
}

/// `(1 + λ·δ) / (1 + λ·δ̄)`
pub fn novelty_multiplier(lambda: f64, differentiation: f64, mean_differentiation: f64) -> f64 {
    (1.0 + lambda * differentiation) / (1.0 + lambda * mean_differentiation)
}

fn classify_root(root: f64, cap: f64) -> DifferentiationRoot {
    if cap - root <= cap * CAP_PIN_TOLERANCE {
        DifferentiationRoot::AtCap(root)
    } else {
        DifferentiationRoot::Interior(root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use muse_core::Error;

    fn params() -> ModelParameters {
        ModelParameters::default()
    }

    #[test]
    fn test_talent_out_of_range_is_invalid_input() {
        let p = params();
        assert!(matches!(Creator::new(1.5, &p), Err(Error::InvalidInput(_))));
        assert!(matches!(Creator::new(-0.5, &p), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_value_is_linear() {
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        // 0.1 + 1.0·0.5 + 1.5·2.0
        assert_relative_eq!(creator.value(2.0), 3.6);
    }

    #[test]
    fn test_novelty_multiplier_is_one_at_mean() {
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        assert_eq!(creator.novelty_multiplier(0.7, 0.7), 1.0);
        assert!(creator.novelty_multiplier(1.0, 0.5) > 1.0);
        assert!(creator.novelty_multiplier(0.0, 0.5) < 1.0);
    }

    #[test]
    fn test_effort_closed_form() {
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        let state = AggregateState::new(2.0, 0.0);

        // v = 0.6, g = 1, c = 1, W = 2
        assert_relative_eq!(
            creator.best_response_effort(0.0, Regime::Human, &state),
            0.3
        );
        assert_relative_eq!(
            creator.best_response_effort(0.0, Regime::Ai, &state),
            0.6 / (0.38 * 2.0)
        );
    }

    #[test]
    fn test_effort_zero_when_aggregate_non_positive() {
        let p = params();
        let creator = Creator::new(0.9, &p).unwrap();

        for w in [0.0, -1.0] {
            let state = AggregateState::new(w, 0.5);
            assert_eq!(creator.best_response_effort(1.0, Regime::Ai, &state), 0.0);
            assert_eq!(
                creator.best_response_differentiation(Regime::Ai, &state),
                DifferentiationRoot::NoRoot
            );
        }
    }

    #[test]
    fn test_payoff_without_market_is_negative_cost() {
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        let state = AggregateState::new(0.0, 0.0);

        let payoff = creator.payoff(1.0, 1.0, Regime::Ai, &state);
        assert_relative_eq!(payoff, -(0.5 * 0.38 + 0.5 + 5.0));
    }

    #[test]
    fn test_no_bracket_falls_back_to_zero() {
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        // small W: Ψ(cap) far exceeds cap, no sign change
        let state = AggregateState::new(1.0, 0.5);

        let root = creator.best_response_differentiation(Regime::Human, &state);
        assert_eq!(root, DifferentiationRoot::NoRoot);
        assert_eq!(root.value(), 0.0);
    }

    #[test]
    fn test_interior_root_satisfies_first_order_condition() {
        let p = params();
        let creator = Creator::new(0.5, &p).unwrap();
        let state = AggregateState::new(50.0, 0.5);

        let root = creator.best_response_differentiation(Regime::Human, &state);
        let delta = match root {
            DifferentiationRoot::Interior(d) => d,
            other => panic!("expected interior root, got {other:?}"),
        };
        assert!(delta > 0.0);

        let lambda = p.novelty_decay;
        let v = creator.value(delta);
        let g = creator.novelty_multiplier(delta, 0.5);
        let e = creator.best_response_effort(delta, Regime::Human, &state);
        let psi = (p.beta_2 + lambda * v / (1.0 + lambda * 0.5)) * g * e
            / (p.differentiation_cost * 50.0);
        assert_abs_diff_eq!(delta, psi, epsilon = 1e-10);
    }

    #[test]
    fn test_root_pinned_at_cap_is_flagged() {
        let p = params();
        let state = AggregateState::new(50.0, 0.5);
        let uncapped = Creator::new(0.5, &p)
            .unwrap()
            .best_response_differentiation(Regime::Human, &state)
            .value();

        // Cap just above the root: the search still brackets it, right at the boundary
        let tight = p.with_differentiation_cap(uncapped * (1.0 + 1e-8));
        let creator = Creator::new(0.5, &tight).unwrap();
        let strategy = creator.solve_regime(Regime::Human, &state);

        assert!(strategy.differentiation_capped);
        assert_relative_eq!(strategy.differentiation, uncapped, max_relative = 1e-6);
    }

    #[test]
    fn test_prohibitive_fixed_cost_keeps_human() {
        let p = params().with_adoption_fixed_cost(1_000.0);
        let creator = Creator::new(1.0, &p).unwrap();

        let strategy = creator.solve_optimal_strategy(&AggregateState::new(1.0, 0.5));
        assert_eq!(strategy.regime, Regime::Human);
    }

    #[test]
    fn test_tie_goes_to_adoption() {
        let p = ModelParameters {
            cost_ai: 1.0,
            adoption_fixed_cost: 0.0,
            ..params()
        };
        let creator = Creator::new(0.3, &p).unwrap();

        let strategy = creator.solve_optimal_strategy(&AggregateState::new(1.0, 0.5));
        assert_eq!(strategy.regime, Regime::Ai);
    }

    #[test]
    fn test_free_adoption_is_chosen() {
        let p = params().with_adoption_fixed_cost(0.0);
        let creator = Creator::new(0.5, &p).unwrap();

        let strategy = creator.solve_optimal_strategy(&AggregateState::new(1.0, 0.5));
        assert!(strategy.adopted());
        assert!(strategy.payoff > 0.0);
    }
}
