// crates/shared-kernel/src/metrics.rs
use serde::{Deserialize, Serialize};

/// Which counts are computed and displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Metrics {
    pub lines: bool,
    pub words: bool,
    pub chars: bool,
}

impl Metrics {
    pub const ALL: Self = Self {
        lines: true,
        words: true,
        chars: true,
    };

    pub const NONE: Self = Self {
        lines: false,
        words: false,
        chars: false,
    };

    #[inline]
    pub const fn is_empty(self) -> bool {
        !self.lines && !self.words && !self.chars
    }

    /// An empty selection means "everything".
    #[must_use]
    pub const fn or_all(self) -> Self {
        if self.is_empty() { Self::ALL } else { self }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::ALL
    }
}

/// How results are rendered once counting is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputMode {
    /// Fixed-width, right-aligned columns for each enabled metric.
    #[default]
    Human,
    /// `file;lines;words;chars`, always all three columns.
    Parseable,
    /// A single JSON document.
    Json,
}
