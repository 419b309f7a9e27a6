use thiserror::Error;

#[derive(Error, Debug)]
pub enum DraftError {
    #[error("insufficient candidates to complete the scheme")]
    Infeasible,

    #[error("Invalid scheme: {0}")]
    InvalidScheme(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Unknown algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DraftError>;
