use serde::{Deserialize, Serialize};

/// Market-wide state every creator takes as given
///
/// - `aggregate_effort` (W): total weighted effort supply, the share denominator
/// - `mean_differentiation` (δ̄): population-average differentiation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregateState {
    pub aggregate_effort: f64,
    pub mean_differentiation: f64,
}

impl AggregateState {
    pub fn new(aggregate_effort: f64, mean_differentiation: f64) -> Self {
        Self {
            aggregate_effort,
            mean_differentiation,
        }
    }

    /// Componentwise absolute gaps `(|ΔW|, |Δδ̄|)` to another state
    pub fn gaps(&self, other: &AggregateState) -> (f64, f64) {
        (
            (self.aggregate_effort - other.aggregate_effort).abs(),
            (self.mean_differentiation - other.mean_differentiation).abs(),
        )
    }

    /// Relaxed update: `damping·self + (1 − damping)·target`
    pub fn blend(&self, target: &AggregateState, damping: f64) -> AggregateState {
        AggregateState {
            aggregate_effort: damping * self.aggregate_effort
                + (1.0 - damping) * target.aggregate_effort,
            mean_differentiation: damping * self.mean_differentiation
                + (1.0 - damping) * target.mean_differentiation,
        }
    }
}

impl Default for AggregateState {
    fn default() -> Self {
        Self::new(1.0, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_blend_weights_previous_guess() {
        let guess = AggregateState::new(1.0, 0.5);
        let computed = AggregateState::new(2.0, 0.0);

        let next = guess.blend(&computed, 0.6);

        assert_relative_eq!(next.aggregate_effort, 1.4);
        assert_relative_eq!(next.mean_differentiation, 0.3);
    }

    #[test]
    fn test_gaps_are_absolute() {
        let a = AggregateState::new(1.0, 0.5);
        let b = AggregateState::new(1.25, 0.25);

        assert_eq!(a.gaps(&b), (0.25, 0.25));
        assert_eq!(b.gaps(&a), (0.25, 0.25));
    }
}
