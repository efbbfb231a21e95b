use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Engine(#[from] count_words_engine::error::EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

impl AppError {
    /// Usage-level problems exit with 2, like clap's own errors.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Engine(count_words_engine::error::EngineError::Config(_)) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
