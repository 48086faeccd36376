use thiserror::Error;

/// Failures outside the screens themselves: reading configuration and
/// setting up logging.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),
    #[error("Logging setup failed: {0}")]
    LogInit(String),
}

pub type Result<T> = std::result::Result<T, FinanceError>;
