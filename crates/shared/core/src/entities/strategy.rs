use super::Regime;
use serde::{Deserialize, Serialize};

/// A creator's optimal choices for a given aggregate state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Strategy {
    /// Chosen technology regime
    pub regime: Regime,
    /// Content-production effort (e ≥ 0)
    pub effort: f64,
    /// Content differentiation (δ ≥ 0)
    pub differentiation: f64,
    /// Resulting payoff
    pub payoff: f64,
    /// Differentiation root landed on the search cap; the true optimum may lie beyond it
    pub differentiation_capped: bool,
}

impl Strategy {
    pub fn adopted(&self) -> bool {
        self.regime.is_adopter()
    }
}
