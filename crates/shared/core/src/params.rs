//! Model Parameters
//!
//! Scalar coefficients shared read-only by every creator within one scenario.
//!
//! ```text
//! value(θ, δ)   = β0 + β1·θ + β2·δ
//! novelty(δ, δ̄) = (1 + λ·δ) / (1 + λ·δ̄)
//! cost(e, δ, A) = ½·c_A·e² + ½·c_δ·δ² + f·A
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound of the differentiation root search
pub const DEFAULT_DIFFERENTIATION_CAP: f64 = 100.0;

fn default_differentiation_cap() -> f64 {
    DEFAULT_DIFFERENTIATION_CAP
}

/// Coefficients of the creator payoff model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelParameters {
    /// Intercept of the value function (β0)
    pub beta_0: f64,
    /// Talent weight of the value function (β1)
    pub beta_1: f64,
    /// Differentiation weight of the value function (β2)
    pub beta_2: f64,
    /// Unit effort cost without AI adoption
    pub cost_human: f64,
    /// Unit effort cost with AI adoption
    pub cost_ai: f64,
    /// Quadratic differentiation cost coefficient (c_δ)
    pub differentiation_cost: f64,
    /// Fixed cost paid by adopters (f)
    pub adoption_fixed_cost: f64,
    /// Novelty decay coefficient (λ)
    pub novelty_decay: f64,
    /// Platform margin on aggregate effective effort (η)
    pub platform_margin: f64,
    /// Consumer surplus weight (κ)
    pub consumer_surplus_weight: f64,
    /// Upper bound of the differentiation root search
    #[serde(default = "default_differentiation_cap")]
    pub differentiation_cap: f64,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            beta_0: 0.1,
            beta_1: 1.0,
            beta_2: 1.5,
            cost_human: 1.0,
            cost_ai: 0.38,
            differentiation_cost: 1.0,
            adoption_fixed_cost: 5.0,
            novelty_decay: 0.05,
            platform_margin: 0.15,
            consumer_surplus_weight: 0.35,
            differentiation_cap: DEFAULT_DIFFERENTIATION_CAP,
        }
    }
}

impl ModelParameters {
    /// Set the adoption fixed cost (builder pattern)
    pub fn with_adoption_fixed_cost(mut self, cost: f64) -> Self {
        self.adoption_fixed_cost = cost;
        self
    }

    /// Set the novelty decay λ (builder pattern)
    pub fn with_novelty_decay(mut self, lambda: f64) -> Self {
        self.novelty_decay = lambda;
        self
    }

    /// Set the differentiation cost c_δ (builder pattern)
    pub fn with_differentiation_cost(mut self, cost: f64) -> Self {
        self.differentiation_cost = cost;
        self
    }

    /// Set the differentiation search cap (builder pattern)
    pub fn with_differentiation_cap(mut self, cap: f64) -> Self {
        self.differentiation_cap = cap;
        self
    }

    /// Validate the parameter set
    ///
    /// Every coefficient must be finite. Cost coefficients and the search cap
    /// must be strictly positive; λ and the fixed cost must be non-negative.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("beta_0", self.beta_0),
            ("beta_1", self.beta_1),
            ("beta_2", self.beta_2),
            ("cost_human", self.cost_human),
            ("cost_ai", self.cost_ai),
            ("differentiation_cost", self.differentiation_cost),
            ("adoption_fixed_cost", self.adoption_fixed_cost),
            ("novelty_decay", self.novelty_decay),
            ("platform_margin", self.platform_margin),
            ("consumer_surplus_weight", self.consumer_surplus_weight),
            ("differentiation_cap", self.differentiation_cap),
        ];
        if let Some((name, value)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(Error::InvalidConfiguration(format!(
                "{name} must be finite, got {value}"
            )));
        }

        for (name, value) in [
            ("cost_human", self.cost_human),
            ("cost_ai", self.cost_ai),
            ("differentiation_cost", self.differentiation_cost),
            ("differentiation_cap", self.differentiation_cap),
        ] {
            if value <= 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        for (name, value) in [
            ("novelty_decay", self.novelty_decay),
            ("adoption_fixed_cost", self.adoption_fixed_cost),
        ] {
            if value < 0.0 {
                return Err(Error::InvalidConfiguration(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }
}
