//! Muse Equilibrium Solver
//!
//! Finds the aggregate state (W, δ̄) that reproduces itself when every
//! creator best-responds to it.
//!
//! ## Iteration
//!
//! ```text
//!          ┌──────────────────────────────────────────────┐
//!          │                                              │
//!          ▼                                              │
//!   guess (W, δ̄) ──► every creator best-responds ──► table │
//!                        (parallel, frozen guess)         │
//!                                                 │       │
//!                          mean(w_i), mean(δ_i) ◄─┘       │
//!                                  │                      │
//!                gaps < tol ? ─yes─► converged            │
//!                     │ no                                │
//!                     └─► guess ← d·guess + (1−d)·new ────┘
//! ```
//!
//! Exhausting the iteration budget is not an error: the last table is
//! returned with `converged = false`.

pub mod equilibrium;
mod population;
pub mod settings;

// Re-export main types
pub use equilibrium::{EquilibriumResult, IterationRecord, find_equilibrium, find_equilibrium_with};
pub use settings::SolverSettings;
