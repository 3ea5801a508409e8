use super::{Regime, Strategy};
use crate::{AggregateState, Talent};
use serde::{Deserialize, Serialize};

/// One sampled creator's strategy within a solver pass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationEntry {
    pub talent: Talent,
    pub strategy: Strategy,
    /// Novelty multiplier evaluated against the pass's δ̄ guess
    pub novelty_multiplier: f64,
    /// Individual weighted effort contribution w = e · novelty
    pub weighted_effort: f64,
}

impl PopulationEntry {
    pub fn regime(&self) -> Regime {
        self.strategy.regime
    }
}

/// Ordered strategy records, one per sampled talent
///
/// Rebuilt from scratch on every solver pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopulationTable {
    entries: Vec<PopulationEntry>,
}

impl PopulationTable {
    pub fn new(entries: Vec<PopulationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PopulationEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &PopulationEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Aggregate state implied by this table: `(mean(w_i), mean(δ_i))`
    pub fn aggregate(&self) -> AggregateState {
        AggregateState::new(
            self.mean_of(|e| e.weighted_effort),
            self.mean_of(|e| e.strategy.differentiation),
        )
    }

    /// Fraction of creators that adopted AI
    pub fn adoption_rate(&self) -> f64 {
        self.mean_of(|e| e.regime().indicator())
    }

    pub fn mean_effort(&self) -> f64 {
        self.mean_of(|e| e.strategy.effort)
    }

    pub fn mean_differentiation(&self) -> f64 {
        self.mean_of(|e| e.strategy.differentiation)
    }

    pub fn mean_payoff(&self) -> f64 {
        self.mean_of(|e| e.strategy.payoff)
    }

    /// Number of creators whose differentiation root was pinned at the cap
    pub fn capped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.strategy.differentiation_capped)
            .count()
    }

    /// Mean of a per-entry quantity; 0 for an empty table
    pub fn mean_of<F>(&self, f: F) -> f64
    where
        F: Fn(&PopulationEntry) -> f64,
    {
        if self.entries.is_empty() {
            return 0.0;
        }
        self.entries.iter().map(f).sum::<f64>() / self.entries.len() as f64
    }
}

impl<'a> IntoIterator for &'a PopulationTable {
    type Item = &'a PopulationEntry;
    type IntoIter = std::slice::Iter<'a, PopulationEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
