//! Brent's Method
//!
//! Bracketing root finder combining bisection, secant and inverse quadratic
//! interpolation (Brent 1973). Requires `f(lower)` and `f(upper)` to have
//! opposite signs; never leaves the bracket.
//!
//! Convergence test on the half-width of the bracket:
//!
//! ```text
//! |x_blk − x_cur| / 2 < (xtol + rtol·|x_cur|) / 2
//! ```

use thiserror::Error;

/// Root finding failures
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RootError {
    #[error("f(a) and f(b) must have different signs: f({lower})={f_lower}, f({upper})={f_upper}")]
    NoSignChange {
        lower: f64,
        upper: f64,
        f_lower: f64,
        f_upper: f64,
    },

    #[error("Function is not finite at {x}")]
    NonFinite { x: f64 },

    #[error("No convergence after {iterations} iterations (best estimate {best})")]
    MaxIterations { iterations: usize, best: f64 },
}

/// Tolerances for [`brent`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrentConfig {
    /// Absolute tolerance on the root
    pub xtol: f64,
    /// Relative tolerance on the root
    pub rtol: f64,
    /// Maximum number of function evaluations after the endpoints
    pub max_iterations: usize,
}

impl Default for BrentConfig {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

/// Find a root of `f` within `[lower, upper]`
pub fn brent<F>(f: F, lower: f64, upper: f64, config: &BrentConfig) -> Result<f64, RootError>
where
    F: Fn(f64) -> f64,
{
    let mut x_pre = lower;
    let mut x_cur = upper;
    let mut f_pre = f(x_pre);
    let mut f_cur = f(x_cur);

    if !f_pre.is_finite() {
        return Err(RootError::NonFinite { x: x_pre });
    }
    if !f_cur.is_finite() {
        return Err(RootError::NonFinite { x: x_cur });
    }
    if f_pre * f_cur > 0.0 {
        return Err(RootError::NoSignChange {
            lower,
            upper,
            f_lower: f_pre,
            f_upper: f_cur,
        });
    }
    if f_pre == 0.0 {
        return Ok(x_pre);
    }
    if f_cur == 0.0 {
        return Ok(x_cur);
    }

    // Contrapoint: f(x_blk) always has the opposite sign of f(x_cur)
    let mut x_blk = 0.0;
    let mut f_blk = 0.0;
    let mut s_pre = 0.0;
    let mut s_cur = 0.0;

    for _ in 0..config.max_iterations {
        if f_pre != 0.0 && f_cur != 0.0 && f_pre.signum() != f_cur.signum() {
            x_blk = x_pre;
            f_blk = f_pre;
            s_pre = x_cur - x_pre;
            s_cur = s_pre;
        }

        // Keep the better estimate in x_cur
        if f_blk.abs() < f_cur.abs() {
            x_pre = x_cur;
            x_cur = x_blk;
            x_blk = x_pre;

            f_pre = f_cur;
            f_cur = f_blk;
            f_blk = f_pre;
        }

        let delta = (config.xtol + config.rtol * x_cur.abs()) / 2.0;
        let s_bis = (x_blk - x_cur) / 2.0;
        if f_cur == 0.0 || s_bis.abs() < delta {
            return Ok(x_cur);
        }

        if s_pre.abs() > delta && f_cur.abs() < f_pre.abs() {
            let s_try = if x_pre == x_blk {
                // Secant
                -f_cur * (x_cur - x_pre) / (f_cur - f_pre)
            } else {
                // Inverse quadratic interpolation
                let d_pre = (f_pre - f_cur) / (x_pre - x_cur);
                let d_blk = (f_blk - f_cur) / (x_blk - x_cur);
                -f_cur * (f_blk * d_blk - f_pre * d_pre) / (d_blk * d_pre * (f_blk - f_pre))
            };

            if 2.0 * s_try.abs() < s_pre.abs().min(3.0 * s_bis.abs() - delta) {
                s_pre = s_cur;
                s_cur = s_try;
            } else {
                s_pre = s_bis;
                s_cur = s_bis;
            }
        } else {
            s_pre = s_bis;
            s_cur = s_bis;
        }

        x_pre = x_cur;
        f_pre = f_cur;
        if s_cur.abs() > delta {
            x_cur += s_cur;
        } else {
            x_cur += if s_bis > 0.0 { delta } else { -delta };
        }

        f_cur = f(x_cur);
        if !f_cur.is_finite() {
            return Err(RootError::NonFinite { x: x_cur });
        }
    }

    Err(RootError::MaxIterations {
        iterations: config.max_iterations,
        best: x_cur,
    })
}
