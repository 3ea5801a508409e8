//! Welfare Analysis

use crate::inequality::gini;
use muse_core::ModelParameters;
use muse_solver::EquilibriumResult;
use muse_strategy::Creator;
use serde::{Deserialize, Serialize};

/// Welfare components and market characteristics of one equilibrium
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WelfareReport {
    pub creator_rent: f64,
    pub platform_profit: f64,
    pub consumer_surplus: f64,
    pub total_welfare: f64,
    /// Gini coefficient of creator payoffs
    pub gini_coefficient: f64,
    pub adoption_rate: f64,
    pub average_effort: f64,
    pub average_differentiation: f64,
}

/// Compute welfare statistics for a solved (or last-estimate) equilibrium
pub fn analyze(result: &EquilibriumResult, params: &ModelParameters) -> WelfareReport {
    let table = &result.population;
    let w = result.aggregate_effort();

    let creator_rent = table.mean_payoff();
    let platform_profit = params.platform_margin * w;

    let consumer_surplus = params.consumer_surplus_weight
        * table.mean_of(|entry| {
            let share = if w > 0.0 { entry.weighted_effort / w } else { 0.0 };
            let value = Creator::from_talent(entry.talent, params)
                .value(entry.strategy.differentiation);
            share * value
        });

    let payoffs: Vec<f64> = table.iter().map(|e| e.strategy.payoff).collect();

    let report = WelfareReport {
        creator_rent,
        platform_profit,
        consumer_surplus,
        total_welfare: creator_rent + platform_profit + consumer_surplus,
        gini_coefficient: gini(&payoffs),
        adoption_rate: table.adoption_rate(),
        average_effort: table.mean_effort(),
        average_differentiation: table.mean_differentiation(),
    };

    log::debug!("Welfare: {report:?}");
    report
}
