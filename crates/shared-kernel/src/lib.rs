// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod metrics;
pub mod value_objects;

pub use metrics::{Metrics, OutputMode};
pub use value_objects::{CharCount, Counts, FileId, LineCount, WordCount};
