use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("Worker thread panicked: {0}")]
    WorkerPanicked(String),

    #[error("Work queue is already shut down")]
    QueueClosed,
}

impl EngineError {
    /// Errors that only affect a single input; the run carries on without it.
    #[must_use]
    pub const fn is_per_file(&self) -> bool {
        matches!(self, Self::Open { .. } | Self::Read { .. })
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
