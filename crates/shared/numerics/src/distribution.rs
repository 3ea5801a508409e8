//! Talent Distributions
//!
//! The creator population is discretized by evaluating a distribution's
//! quantile function on an evenly spaced grid that stays clear of the 0 and
//! 1 quantiles:
//!
//! ```text
//! p_i = margin + i · (1 − 2·margin) / (n − 1),   i = 0..n
//! θ_i = F⁻¹(p_i)
//! ```

use crate::root::{BrentConfig, brent};
use muse_core::{Error, Result};
use serde::{Deserialize, Serialize};
use statrs::distribution::{Beta, ContinuousCDF, Uniform};

/// Anything exposing an inverse CDF over talent values
pub trait TalentDistribution: Send + Sync {
    /// Inverse CDF evaluated at probability `p ∈ (0, 1)`
    fn quantile(&self, p: f64) -> f64;

    /// Human-readable name (for logging)
    fn name(&self) -> String;
}

/// Invert a CDF supported on `[0, 1]` with Brent's method
///
/// Returns NaN when `p` lies outside `[0, 1]`.
fn invert_unit_cdf<F>(cdf: F, p: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    let config = BrentConfig {
        xtol: 1e-14,
        ..Default::default()
    };
    match brent(|x| cdf(x) - p, 0.0, 1.0, &config) {
        Ok(x) => x,
        Err(crate::RootError::MaxIterations { best, .. }) => best,
        Err(_) => f64::NAN,
    }
}

impl TalentDistribution for Beta {
    fn quantile(&self, p: f64) -> f64 {
        invert_unit_cdf(|x| self.cdf(x), p)
    }

    fn name(&self) -> String {
        format!("Beta({}, {})", self.shape_a(), self.shape_b())
    }
}

impl TalentDistribution for Uniform {
    fn quantile(&self, p: f64) -> f64 {
        invert_unit_cdf(|x| self.cdf(x), p)
    }

    fn name(&self) -> String {
        "Uniform(0, 1)".to_string()
    }
}

/// Serializable talent distribution choice
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TalentModel {
    /// Beta(α, β) on `[0, 1]`
    Beta { alpha: f64, beta: f64 },
    /// Uniform on `[0, 1]`
    Uniform,
}

impl Default for TalentModel {
    fn default() -> Self {
        Self::Beta {
            alpha: 2.0,
            beta: 2.0,
        }
    }
}

impl TalentModel {
    /// Instantiate the distribution
    pub fn build(&self) -> Result<Box<dyn TalentDistribution>> {
        match *self {
            TalentModel::Beta { alpha, beta } => {
                let dist = Beta::new(alpha, beta).map_err(|e| {
                    Error::InvalidConfiguration(format!(
                        "invalid Beta({alpha}, {beta}) talent distribution: {e}"
                    ))
                })?;
                Ok(Box::new(dist))
            }
            TalentModel::Uniform => {
                let dist = Uniform::new(0.0, 1.0).map_err(|e| {
                    Error::InvalidConfiguration(format!("invalid uniform distribution: {e}"))
                })?;
                Ok(Box::new(dist))
            }
        }
    }
}

/// Talent values at `n` evenly spaced quantiles in `[margin, 1 − margin]`
pub fn quantile_grid(dist: &dyn TalentDistribution, n: usize, margin: f64) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![dist.quantile(margin)],
        _ => {
            let step = (1.0 - 2.0 * margin) / (n - 1) as f64;
            (0..n)
                .map(|i| dist.quantile(margin + step * i as f64))
                .collect()
        }
    }
}
