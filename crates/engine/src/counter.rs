//! Per-chunk counting. Pure: no shared state, no I/O.

use crate::chunk::Chunk;
use count_words_shared_kernel::{Counts, FileId, Metrics};

/// Counts for a single chunk, tagged with the file they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialResult {
    pub file: FileId,
    pub counts: Counts,
}

/// Count lines, words and characters in one pass over `chunk`.
///
/// A word is credited when a whitespace character follows a non-whitespace
/// one, starting from `chunk.carry`. A word cut by a chunk boundary is
/// therefore counted once, in the chunk holding its terminating whitespace.
/// The last chunk of a file also credits a trailing word that runs into the
/// end of the stream.
///
/// `chars` is always the chunk length; a disabled line or word metric is
/// reported as zero.
#[must_use]
pub fn count_chunk(chunk: &Chunk, metrics: Metrics) -> PartialResult {
    let mut lines = 0usize;
    let mut words = 0usize;
    let mut prev_is_space = chunk.carry.is_whitespace();

    for &ch in &chunk.data {
        if metrics.lines && ch == '\n' {
            lines += 1;
        }
        if metrics.words {
            let is_space = ch.is_whitespace();
            if is_space && !prev_is_space {
                words += 1;
            }
            prev_is_space = is_space;
        }
    }

    if metrics.words && chunk.is_last && !prev_is_space {
        words += 1;
    }

    PartialResult {
        file: chunk.file,
        counts: Counts::new(lines, words, chunk.len()),
    }
}
