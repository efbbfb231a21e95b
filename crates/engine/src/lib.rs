// crates/engine/src/lib.rs
//! Chunked, multi-threaded line/word/character counting.
//!
//! The coordinating thread reads each input in order, cuts it into chunks
//! and pushes them onto a [`queue::WorkQueue`]. A fixed [`pool::WorkerPool`]
//! pops chunks, counts them with [`counter::count_chunk`] and merges the
//! results into an [`aggregator::Aggregator`]. Once every input is loaded the
//! queue is shut down, the workers drain it and exit, and the totals are
//! returned as a [`RunReport`].

pub mod aggregator;
pub mod chunk;
pub mod config;
pub mod counter;
pub mod error;
pub mod input;
pub mod loader;
pub mod pool;
pub mod queue;
pub mod report;
pub mod source;

use std::thread;

use crate::aggregator::Aggregator;
use crate::config::Config;
use crate::error::Result;
use crate::input::Input;
use crate::loader::ChunkLoader;
use crate::pool::WorkerPool;
use crate::queue::WorkQueue;

pub use crate::report::{FileReport, RunReport};

/// Count every input and return per-file and global totals.
///
/// Per-file failures (open or read) are logged and collected in
/// `RunReport::errors`; they never abort the run.
///
/// # Errors
///
/// Returns an error only for failures that affect the whole run: an invalid
/// configuration (checked before any thread starts), a worker that could not
/// be spawned, or a worker that panicked.
pub fn run(config: &Config, inputs: &[Input]) -> Result<RunReport> {
    config.validate()?;

    let queue = WorkQueue::new();
    let aggregator = Aggregator::new();

    let errors = thread::scope(|scope| -> Result<_> {
        let pool = WorkerPool::spawn(scope, config.threads, &queue, &aggregator, config.metrics)?;

        let loader = ChunkLoader::new(&queue, &aggregator, config.chunk_size);
        let errors = loader.load_inputs(inputs);

        log::debug!("all inputs loaded; shutting down work queue");
        queue.signal_shutdown();
        let chunks = pool.join()?;
        log::debug!("counted {chunks} chunk(s) from {} input(s)", inputs.len());
        Ok(errors)
    })?;

    let (files, global) = aggregator.into_report();
    Ok(RunReport {
        files,
        global,
        errors,
    })
}
