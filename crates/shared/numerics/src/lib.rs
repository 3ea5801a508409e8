//! Numerical building blocks
//!
//! - [`brent`]: bracketing root finder used by the differentiation best response
//! - [`TalentDistribution`]: anything exposing a quantile function, used to
//!   discretize the creator population

pub mod distribution;
pub mod root;

pub use distribution::{TalentDistribution, TalentModel, quantile_grid};
pub use root::{BrentConfig, RootError, brent};
