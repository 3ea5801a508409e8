mod aggregate;
mod talent;

pub use aggregate::AggregateState;
pub use talent::Talent;
