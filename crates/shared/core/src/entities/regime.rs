use crate::ModelParameters;
use serde::{Deserialize, Serialize};

/// Production technology regime (the binary adoption choice)
///
/// Both regimes share the same control flow; they differ only in the unit
/// effort cost and whether the adoption fixed cost is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Produce without AI
    Human,
    /// Adopt AI tooling
    Ai,
}

impl Regime {
    /// Regimes in evaluation order; later entries win payoff ties
    pub const ALL: [Regime; 2] = [Regime::Human, Regime::Ai];

    /// Whether this regime is the adoption choice
    pub fn is_adopter(&self) -> bool {
        matches!(self, Regime::Ai)
    }

    /// Adoption indicator A ∈ {0, 1}
    pub fn indicator(&self) -> f64 {
        if self.is_adopter() { 1.0 } else { 0.0 }
    }

    /// Per-unit effort cost under this regime
    pub fn unit_effort_cost(&self, params: &ModelParameters) -> f64 {
        match self {
            Regime::Human => params.cost_human,
            Regime::Ai => params.cost_ai,
        }
    }

    /// Fixed cost paid under this regime
    pub fn fixed_cost(&self, params: &ModelParameters) -> f64 {
        params.adoption_fixed_cost * self.indicator()
    }
}

impl std::fmt::Display for Regime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Regime::Human => write!(f, "human"),
            Regime::Ai => write!(f, "ai"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_costs_follow_regime() {
        let params = ModelParameters::default();

        assert_eq!(Regime::Human.unit_effort_cost(&params), params.cost_human);
        assert_eq!(Regime::Ai.unit_effort_cost(&params), params.cost_ai);
        assert_eq!(Regime::Human.fixed_cost(&params), 0.0);
        assert_eq!(Regime::Ai.fixed_cost(&params), params.adoption_fixed_cost);
    }

    #[test]
    fn test_adoption_is_last_in_order() {
        assert_eq!(Regime::ALL.last(), Some(&Regime::Ai));
        assert!(!Regime::Human.is_adopter());
    }
}
