//! Fixed set of worker threads draining the work queue.

use crate::aggregator::Aggregator;
use crate::chunk::Chunk;
use crate::counter::count_chunk;
use crate::error::{EngineError, Result};
use crate::queue::{Pop, WorkQueue};
use count_words_shared_kernel::Metrics;
use std::any::Any;
use std::thread::{self, Scope, ScopedJoinHandle};

pub struct WorkerPool<'scope> {
    handles: Vec<ScopedJoinHandle<'scope, usize>>,
}

impl<'scope> WorkerPool<'scope> {
    /// Start `threads` workers inside `scope`.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Spawn` if a thread cannot be started. The queue
    /// is shut down first so workers that did start can exit and the scope
    /// can end.
    pub fn spawn<'env>(
        scope: &'scope Scope<'scope, 'env>,
        threads: usize,
        queue: &'scope WorkQueue<Chunk>,
        aggregator: &'scope Aggregator,
        metrics: Metrics,
    ) -> Result<Self> {
        let mut handles = Vec::with_capacity(threads);
        for id in 0..threads {
            let spawned = thread::Builder::new()
                .name(format!("count-worker-{id}"))
                .spawn_scoped(scope, move || worker_loop(queue, aggregator, metrics));
            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    queue.signal_shutdown();
                    return Err(EngineError::Spawn(e));
                }
            }
        }
        log::debug!("spawned {threads} worker(s)");
        Ok(Self { handles })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Wait for every worker. Only returns once the queue has been shut down
    /// and drained. Returns the number of chunks counted.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::WorkerPanicked` if any worker panicked; the
    /// remaining workers are still joined.
    pub fn join(self) -> Result<usize> {
        let mut counted = 0;
        let mut panicked = None;
        for handle in self.handles {
            match handle.join() {
                Ok(n) => counted += n,
                Err(payload) => panicked = Some(panic_message(payload.as_ref())),
            }
        }
        match panicked {
            Some(msg) => Err(EngineError::WorkerPanicked(msg)),
            None => Ok(counted),
        }
    }
}

fn worker_loop(queue: &WorkQueue<Chunk>, aggregator: &Aggregator, metrics: Metrics) -> usize {
    let mut counted = 0;
    while let Pop::Item(chunk) = queue.pop() {
        aggregator.merge(count_chunk(&chunk, metrics));
        counted += 1;
    }
    counted
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_string())
}
