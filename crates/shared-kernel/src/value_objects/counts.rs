// crates/shared-kernel/src/value_objects/counts.rs
use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

macro_rules! count_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(usize);

        impl $name {
            pub const ZERO: Self = Self(0);

            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }

            #[inline]
            pub const fn is_zero(self) -> bool {
                self.0 == 0
            }
        }

        impl Add for $name {
            type Output = Self;

            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl PartialEq<usize> for $name {
            fn eq(&self, other: &usize) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for usize {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self::new(value)
            }
        }

        impl From<$name> for usize {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                // Delegate so width/alignment flags apply to the number.
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

count_newtype!(
    /// Number of `'\n'` characters seen.
    LineCount
);
count_newtype!(
    /// Number of whitespace-terminated (or end-of-file-terminated) words.
    WordCount
);
count_newtype!(
    /// Number of decoded characters, not bytes.
    CharCount
);

/// Line, word and character totals.
///
/// Used both for the result of a single chunk and for running per-file and
/// global totals. Addition is commutative and associative, so totals do not
/// depend on the order in which chunk results are merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Counts {
    pub lines: LineCount,
    pub words: WordCount,
    pub chars: CharCount,
}

impl Counts {
    pub const ZERO: Self = Self {
        lines: LineCount::ZERO,
        words: WordCount::ZERO,
        chars: CharCount::ZERO,
    };

    #[inline]
    pub const fn new(lines: usize, words: usize, chars: usize) -> Self {
        Self {
            lines: LineCount::new(lines),
            words: WordCount::new(words),
            chars: CharCount::new(chars),
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.lines.is_zero() && self.words.is_zero() && self.chars.is_zero()
    }
}

impl Add for Counts {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            lines: self.lines + rhs.lines,
            words: self.words + rhs.words,
            chars: self.chars + rhs.chars,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.words += rhs.words;
        self.chars += rhs.chars;
    }
}

impl Sum for Counts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, x| acc + x)
    }
}

impl<'a> Sum<&'a Counts> for Counts {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
