// crates/shared-kernel/src/value_objects/file_id.rs
use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of an input in the list the run was started with.
///
/// Results are keyed by this rather than by name so that the same path given
/// twice is counted as two separate inputs and reports keep input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(usize);

impl FileId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for FileId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
