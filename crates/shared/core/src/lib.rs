//! Muse Core Domain
//!
//! Pure domain types for the creator-economy equilibrium model.
//! This crate contains no I/O and is 100% unit testable.

pub mod entities;
pub mod error;
pub mod params;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{PopulationEntry, PopulationTable, Regime, Strategy};
pub use error::{Error, Result};
pub use params::ModelParameters;
pub use values::{AggregateState, Talent};
