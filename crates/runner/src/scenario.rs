//! Policy Scenarios
//!
//! A scenario scales selected parameters of either the baseline or an
//! earlier scenario, so policies stack:
//!
//! ```text
//! Baseline ─► Price Cut (f × 0.20) ─► + AI Act (λ × 1.05) ─► + Originality Subsidy (c_δ × 0.90)
//! ```

use crate::config::ConfigError;
use muse_core::ModelParameters;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Scalable model coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterName {
    #[serde(rename = "beta_0")]
    Beta0,
    #[serde(rename = "beta_1")]
    Beta1,
    #[serde(rename = "beta_2")]
    Beta2,
    CostHuman,
    CostAi,
    DifferentiationCost,
    AdoptionFixedCost,
    NoveltyDecay,
    PlatformMargin,
    ConsumerSurplusWeight,
    DifferentiationCap,
}

impl ParameterName {
    fn field_mut(self, params: &mut ModelParameters) -> &mut f64 {
        match self {
            ParameterName::Beta0 => &mut params.beta_0,
            ParameterName::Beta1 => &mut params.beta_1,
            ParameterName::Beta2 => &mut params.beta_2,
            ParameterName::CostHuman => &mut params.cost_human,
            ParameterName::CostAi => &mut params.cost_ai,
            ParameterName::DifferentiationCost => &mut params.differentiation_cost,
            ParameterName::AdoptionFixedCost => &mut params.adoption_fixed_cost,
            ParameterName::NoveltyDecay => &mut params.novelty_decay,
            ParameterName::PlatformMargin => &mut params.platform_margin,
            ParameterName::ConsumerSurplusWeight => &mut params.consumer_surplus_weight,
            ParameterName::DifferentiationCap => &mut params.differentiation_cap,
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParameterName::Beta0 => "beta_0",
            ParameterName::Beta1 => "beta_1",
            ParameterName::Beta2 => "beta_2",
            ParameterName::CostHuman => "cost_human",
            ParameterName::CostAi => "cost_ai",
            ParameterName::DifferentiationCost => "differentiation_cost",
            ParameterName::AdoptionFixedCost => "adoption_fixed_cost",
            ParameterName::NoveltyDecay => "novelty_decay",
            ParameterName::PlatformMargin => "platform_margin",
            ParameterName::ConsumerSurplusWeight => "consumer_surplus_weight",
            ParameterName::DifferentiationCap => "differentiation_cap",
        };
        write!(f, "{name}")
    }
}

/// Multiply one parameter by `factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    pub parameter: ParameterName,
    pub factor: f64,
}

impl Adjustment {
    pub fn new(parameter: ParameterName, factor: f64) -> Self {
        Self { parameter, factor }
    }

    pub fn apply(&self, params: &mut ModelParameters) {
        *self.parameter.field_mut(params) *= self.factor;
    }
}

/// Scenario definition as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Earlier scenario to build on; the baseline parameters when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base: Option<String>,
    #[serde(default)]
    pub adjustments: Vec<Adjustment>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base: None,
            adjustments: Vec::new(),
        }
    }

    /// Set base scenario (builder pattern)
    pub fn on_top_of(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Add an adjustment (builder pattern)
    pub fn scale(mut self, parameter: ParameterName, factor: f64) -> Self {
        self.adjustments.push(Adjustment::new(parameter, factor));
        self
    }
}

/// Scenario with its parameters fully resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub name: String,
    pub parameters: ModelParameters,
}

/// Resolve every scenario's parameters in order
///
/// A base must name a scenario defined earlier in the list. An empty list
/// resolves to the baseline alone.
pub fn resolve_scenarios(
    baseline: &ModelParameters,
    scenarios: &[Scenario],
) -> Result<Vec<ResolvedScenario>, ConfigError> {
    if scenarios.is_empty() {
        return Ok(vec![ResolvedScenario {
            name: "Baseline".to_string(),
            parameters: *baseline,
        }]);
    }

    let mut resolved: Vec<ResolvedScenario> = Vec::with_capacity(scenarios.len());
    let mut index: HashMap<&str, usize> = HashMap::new();

    for scenario in scenarios {
        if index.contains_key(scenario.name.as_str()) {
            return Err(ConfigError::DuplicateScenario(scenario.name.clone()));
        }

        let mut parameters = match &scenario.base {
            None => *baseline,
            Some(base) => {
                let i = index.get(base.as_str()).ok_or_else(|| {
                    ConfigError::UnknownBaseScenario {
                        scenario: scenario.name.clone(),
                        base: base.clone(),
                    }
                })?;
                resolved[*i].parameters
            }
        };

        for adjustment in &scenario.adjustments {
            adjustment.apply(&mut parameters);
        }
        parameters
            .validate()
            .map_err(|source| ConfigError::InvalidParameters {
                scenario: scenario.name.clone(),
                source,
            })?;

        index.insert(&scenario.name, resolved.len());
        resolved.push(ResolvedScenario {
            name: scenario.name.clone(),
            parameters,
        });
    }

    Ok(resolved)
}
