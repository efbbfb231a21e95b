use count_words_shared_kernel::FileId;

/// Carry value for the first chunk of a file. Must not be whitespace, so
/// the file's first character never looks like it follows a word.
pub const START_OF_FILE: char = 'a';

/// A slice of one file's decoded characters, owned by whoever holds it.
///
/// Produced by the loader, moved through the queue, consumed by exactly one
/// worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub file: FileId,
    pub data: Vec<char>,
    /// Last character of the previous chunk of the same file.
    pub carry: char,
    /// No more chunks follow for this file.
    pub is_last: bool,
}

impl Chunk {
    #[must_use]
    pub fn new(file: FileId, data: Vec<char>, carry: char, is_last: bool) -> Self {
        Self {
            file,
            data,
            carry,
            is_last,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Carry value for the chunk that follows this one.
    #[must_use]
    pub fn next_carry(&self) -> char {
        self.data.last().copied().unwrap_or(self.carry)
    }
}
