use crate::error::{EngineError, Result};
use count_words_shared_kernel::{Metrics, OutputMode};
use derive_builder::Builder;

/// Characters per chunk when nothing else is requested.
///
/// Large enough to amortise the hand-off to a worker, small enough that a
/// single file still spreads over every worker.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Run configuration. Immutable once workers have been spawned.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub metrics: Metrics,
    #[builder(default)]
    pub output_mode: OutputMode,
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    #[builder(default = "DEFAULT_CHUNK_SIZE")]
    pub chunk_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            metrics: Metrics::ALL,
            output_mode: OutputMode::Human,
            threads: num_cpus::get(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl Config {
    /// Reject settings the pipeline cannot run with.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Config` for a zero thread count or chunk size.
    pub fn validate(&self) -> Result<()> {
        check(self.threads, self.chunk_size).map_err(EngineError::Config)
    }
}

impl ConfigBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        check(
            self.threads.unwrap_or(1),
            self.chunk_size.unwrap_or(DEFAULT_CHUNK_SIZE),
        )
    }
}

fn check(threads: usize, chunk_size: usize) -> std::result::Result<(), String> {
    if threads == 0 {
        return Err("thread count must be greater than zero".to_string());
    }
    if chunk_size == 0 {
        return Err("chunk size must be greater than zero".to_string());
    }
    Ok(())
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::Config(err.to_string())
    }
}
