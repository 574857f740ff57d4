use thiserror::Error;

use super::config::ConfigError;

#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("Degenerate input: at least 3 points are required, got {count}")]
    DegenerateInput { count: usize },

    #[error(
        "No endpoint found among {remaining} remaining points; the input is not a simple chain (cyclic or branched)"
    )]
    NoEndpoint { remaining: usize },

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Internal logic error: {0}")]
    Internal(String),
}
