//! Splits each input into chunks and feeds them to the work queue.
//!
//! Runs on the coordinating thread, one file at a time. The carry character
//! is fixed here, where the file is read in order, so workers can consume a
//! file's chunks in any order.

use crate::aggregator::Aggregator;
use crate::chunk::{Chunk, START_OF_FILE};
use crate::error::{EngineError, Result};
use crate::input::Input;
use crate::queue::WorkQueue;
use crate::source::{CharSource, Utf8Source};
use count_words_shared_kernel::FileId;

pub struct ChunkLoader<'a> {
    queue: &'a WorkQueue<Chunk>,
    aggregator: &'a Aggregator,
    chunk_size: usize,
}

impl<'a> ChunkLoader<'a> {
    #[must_use]
    pub fn new(queue: &'a WorkQueue<Chunk>, aggregator: &'a Aggregator, chunk_size: usize) -> Self {
        Self {
            queue,
            aggregator,
            chunk_size,
        }
    }

    /// Open and load every input in order.
    ///
    /// Failures are logged and returned; they never stop the remaining
    /// inputs from being loaded.
    pub fn load_inputs(&self, inputs: &[Input]) -> Vec<(String, EngineError)> {
        let mut errors = Vec::new();
        for (index, input) in inputs.iter().enumerate() {
            let name = input.name();
            let reader = match input.open() {
                Ok(reader) => reader,
                Err(e) => {
                    log::warn!("{e}; skipping");
                    errors.push((name, e));
                    continue;
                }
            };
            let mut source = Utf8Source::new(reader);
            match self.load(FileId::new(index), &name, &mut source) {
                Ok(chunks) => log::debug!("loaded {name} as {chunks} chunk(s)"),
                Err(e) => {
                    log::warn!("{e}; counts for {name} will be incomplete");
                    errors.push((name, e));
                }
            }
        }
        errors
    }

    /// Read `source` to the end, pushing one chunk per read. Returns the
    /// number of chunks pushed.
    ///
    /// An empty stream still produces a single empty chunk.
    ///
    /// # Errors
    ///
    /// On a read failure the file is marked incomplete, the chunk being read
    /// is dropped and `EngineError::Read` is returned. Chunks already pushed
    /// stay queued and are counted.
    pub fn load<S: CharSource>(&self, file: FileId, name: &str, source: &mut S) -> Result<usize> {
        self.aggregator.register(file, name);

        let mut carry = START_OF_FILE;
        let mut pushed = 0;
        loop {
            let mut data = Vec::with_capacity(self.chunk_size);
            let status = match source.read_chunk(&mut data, self.chunk_size) {
                Ok(status) => status,
                Err(err) => {
                    self.aggregator.mark_incomplete(file);
                    return Err(EngineError::Read {
                        path: name.to_string(),
                        source: err,
                    });
                }
            };

            let chunk = Chunk::new(file, data, carry, status.eof);
            carry = chunk.next_carry();
            self.queue.push(chunk)?;
            pushed += 1;

            if status.eof {
                return Ok(pushed);
            }
        }
    }
}
