//! Inclusive character ranges labelling automaton transitions.
//!
//! The symbol domain is the set of Unicode scalar values: `U+0000..=U+10FFFF`
//! minus the surrogate block. A range may straddle the surrogate block; its
//! members are then the scalar values on either side of it.

use serde::{Deserialize, Serialize};
use std::fmt;

const SURROGATE_START: u32 = 0xD800;
const SURROGATE_END: u32 = 0xDFFF;

/// Inclusive, non-empty range of characters.
///
/// # Example
///
/// ```rust
/// use regen::core::CharRange;
///
/// let digits = CharRange::new('0', '9');
/// assert_eq!(digits.len(), 10);
/// assert!(digits.contains('7'));
/// assert_eq!(digits.iter().collect::<String>(), "0123456789");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharRange {
    /// Lowest character in the range
    pub min: char,
    /// Highest character in the range
    pub max: char,
}

impl CharRange {
    /// Create a range. Callers are responsible for `min <= max`; the
    /// automaton builder rejects empty ranges.
    pub const fn new(min: char, max: char) -> Self {
        Self { min, max }
    }

    /// Range holding exactly one character.
    pub const fn single(c: char) -> Self {
        Self { min: c, max: c }
    }

    /// Every scalar value.
    pub const fn full() -> Self {
        Self {
            min: '\0',
            max: char::MAX,
        }
    }

    /// Build a range from raw code points, clamping endpoints that fall in
    /// the surrogate block. Returns `None` when nothing is left.
    pub fn from_scalars(lo: u32, hi: u32) -> Option<Self> {
        let hi = hi.min(char::MAX as u32);
        let lo = if (SURROGATE_START..=SURROGATE_END).contains(&lo) {
            SURROGATE_END + 1
        } else {
            lo
        };
        let hi = if (SURROGATE_START..=SURROGATE_END).contains(&hi) {
            SURROGATE_START - 1
        } else {
            hi
        };
        if lo > hi {
            return None;
        }
        Some(Self {
            min: char::from_u32(lo)?,
            max: char::from_u32(hi)?,
        })
    }

    /// Number of scalar values in the range.
    pub fn len(&self) -> u32 {
        if self.min > self.max {
            return 0;
        }
        let lo = self.min as u32;
        let hi = self.max as u32;
        let raw = hi - lo + 1;
        if lo < SURROGATE_START && hi > SURROGATE_END {
            raw - (SURROGATE_END - SURROGATE_START + 1)
        } else {
            raw
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }

    pub fn contains(&self, c: char) -> bool {
        self.min <= c && c <= self.max
    }

    /// True if the two ranges share at least one character.
    pub fn overlaps(&self, other: &CharRange) -> bool {
        self.min <= other.max && other.min <= self.max
    }

    /// Characters of the range in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> {
        self.min..=self.max
    }
}

impl fmt::Display for CharRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{:?}", self.min)
        } else {
            write!(f, "{:?}-{:?}", self.min, self.max)
        }
    }
}

/// The scalar value following `c`, skipping the surrogate block.
pub fn next_char(c: char) -> Option<char> {
    match c as u32 {
        0xD7FF => Some('\u{E000}'),
        n => char::from_u32(n + 1),
    }
}
