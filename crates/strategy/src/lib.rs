//! Muse Creator Strategy Model
//!
//! Given a creator's talent and the aggregate market state, derives the
//! payoff-maximizing effort, differentiation and technology regime.
//!
//! ## Nested optimization
//!
//! ```text
//!   for each regime A ∈ {Human, Ai}:
//!       δ*(A) = root of δ − Ψ(δ)          (Brent on [0, cap], 0 if no bracket)
//!       e*(A) = v(δ*)·g(δ*, δ̄) / (c_A·W)  (closed form)
//!       π*(A) = payoff(e*, δ*, A)
//!   choose A with the higher π*, ties go to Ai
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use muse_core::{AggregateState, ModelParameters};
//! use muse_strategy::Creator;
//!
//! let params = ModelParameters::default();
//! let creator = Creator::new(0.7, &params)?;
//! let strategy = creator.solve_optimal_strategy(&AggregateState::new(1.0, 0.5));
//! ```

pub mod creator;

// Re-export main types
pub use creator::{Creator, DifferentiationRoot};
