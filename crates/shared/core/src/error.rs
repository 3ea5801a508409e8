use thiserror::Error;

/// Errors raised by the equilibrium model.
///
/// Non-convergence is not an error: the solver reports it through its result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed per-agent input, e.g. a talent outside `[0, 1]`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Degenerate model parameters or solver settings, detected before iterating
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, Error>;
