//! Thread-safe accumulation of chunk results into per-file and global totals.

use crate::counter::PartialResult;
use crate::report::FileReport;
use count_words_shared_kernel::{Counts, FileId};
use hashbrown::HashMap;
use std::sync::{Mutex, PoisonError};

#[derive(Debug)]
struct FileTotals {
    name: String,
    counts: Counts,
    complete: bool,
}

#[derive(Debug, Default)]
struct Totals {
    files: HashMap<FileId, FileTotals>,
    global: Counts,
}

/// One lock covers both the per-file map and the global total, so the global
/// total always equals the sum of the file totals.
#[derive(Debug, Default)]
pub struct Aggregator {
    inner: Mutex<Totals>,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with_totals<T>(&self, f: impl FnOnce(&mut Totals) -> T) -> T {
        // Updates are plain additions that cannot panic half way, so the data
        // behind a poisoned lock is still consistent.
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Give `file` an entry before any of its chunks are counted, so empty
    /// and failed inputs still appear in the report.
    pub fn register(&self, file: FileId, name: impl Into<String>) {
        let name = name.into();
        self.with_totals(|totals| {
            totals.files.entry(file).or_insert_with(|| FileTotals {
                name,
                counts: Counts::ZERO,
                complete: true,
            });
        });
    }

    /// Add one chunk's counts to its file and to the global total.
    pub fn merge(&self, partial: PartialResult) {
        self.with_totals(|totals| {
            let entry = totals
                .files
                .entry(partial.file)
                .or_insert_with(|| FileTotals {
                    name: partial.file.to_string(),
                    counts: Counts::ZERO,
                    complete: true,
                });
            entry.counts += partial.counts;
            totals.global += partial.counts;
        });
    }

    pub fn mark_incomplete(&self, file: FileId) {
        self.with_totals(|totals| {
            if let Some(entry) = totals.files.get_mut(&file) {
                entry.complete = false;
            }
        });
    }

    /// Final totals, files in input order.
    ///
    /// Takes `self` so it can only be called once every worker holding a
    /// reference has gone away.
    #[must_use]
    pub fn into_report(self) -> (Vec<FileReport>, Counts) {
        let totals = self
            .inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        let mut files: Vec<_> = totals
            .files
            .into_iter()
            .map(|(id, entry)| FileReport {
                id,
                name: entry.name,
                counts: entry.counts,
                complete: entry.complete,
            })
            .collect();
        files.sort_by_key(|f| f.id);
        (files, totals.global)
    }
}
