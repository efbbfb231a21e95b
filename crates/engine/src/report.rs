use crate::error::EngineError;
use count_words_shared_kernel::{Counts, FileId};
use serde::Serialize;

/// Name used for the grand total row.
pub const GLOBAL_NAME: &str = "global";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    #[serde(skip)]
    pub id: FileId,
    #[serde(rename = "file")]
    pub name: String,
    #[serde(flatten)]
    pub counts: Counts,
    /// False when a read failed part way; counts cover what was read.
    pub complete: bool,
}

/// Everything a finished run produced.
#[derive(Debug, Default)]
pub struct RunReport {
    /// Inputs that were opened, in input order.
    pub files: Vec<FileReport>,
    pub global: Counts,
    /// Per-file failures, keyed by input name.
    pub errors: Vec<(String, EngineError)>,
}

impl RunReport {
    /// Every input was opened and read to the end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty() && self.files.iter().all(|f| f.complete)
    }

    /// The global row is only worth showing for more than one file.
    #[must_use]
    pub fn shows_global(&self) -> bool {
        self.files.len() > 1
    }
}
