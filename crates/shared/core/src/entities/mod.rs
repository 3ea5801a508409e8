mod population;
mod regime;
mod strategy;

pub use population::{PopulationEntry, PopulationTable};
pub use regime::Regime;
pub use strategy::Strategy;
