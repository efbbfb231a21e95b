// crates/shared-kernel/src/value_objects/mod.rs
pub mod counts;
pub mod file_id;

pub use counts::{CharCount, Counts, LineCount, WordCount};
pub use file_id::FileId;
