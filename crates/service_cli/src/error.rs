//! CLI error handling.

use thiserror::Error;

/// Crate-local result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the operator.
#[derive(Debug, Error)]
pub enum CliError {
    /// File could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Portfolio or matrix file did not parse.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The engine rejected the inputs.
    #[error(transparent)]
    Engine(#[from] risk_mc::EngineError),

    /// An argument was out of range or unrecognised.
    #[error("Invalid argument: {0}")]
    BadArgument(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_argument_display() {
        let err = CliError::BadArgument("unknown format 'yaml'".to_string());
        assert!(err.to_string().contains("yaml"));
    }

    #[test]
    fn test_engine_error_passthrough() {
        let err: CliError = risk_mc::EngineError::InvalidSimulationCount(0).into();
        assert!(err.to_string().contains("must be positive"));
    }
}
