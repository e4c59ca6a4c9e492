//! Normalized sets of characters used while lowering classes.

use crate::core::CharRange;

const MAX_SCALAR: u32 = char::MAX as u32;

/// Sorted, disjoint, non-adjacent code point intervals.
///
/// Intervals are kept as raw `u32` pairs so complements and merges never
/// have to care about the surrogate gap; [`CharSet::ranges`] clamps on the
/// way out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharSet {
    intervals: Vec<(u32, u32)>,
}

impl CharSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn any() -> Self {
        Self {
            intervals: vec![(0, MAX_SCALAR)],
        }
    }

    pub fn from_intervals<I: IntoIterator<Item = (u32, u32)>>(intervals: I) -> Self {
        let mut raw: Vec<(u32, u32)> = intervals.into_iter().filter(|(lo, hi)| lo <= hi).collect();
        raw.sort_unstable();

        let mut merged: Vec<(u32, u32)> = Vec::with_capacity(raw.len());
        for (lo, hi) in raw {
            match merged.last_mut() {
                Some(last) if lo <= last.1.saturating_add(1) => last.1 = last.1.max(hi),
                _ => merged.push((lo, hi)),
            }
        }
        Self { intervals: merged }
    }

    pub fn union(&self, other: &CharSet) -> CharSet {
        Self::from_intervals(self.intervals.iter().chain(&other.intervals).copied())
    }

    pub fn complement(&self) -> CharSet {
        let mut out = Vec::with_capacity(self.intervals.len() + 1);
        let mut next = 0u32;
        for &(lo, hi) in &self.intervals {
            if lo > next {
                out.push((next, lo - 1));
            }
            next = hi.saturating_add(1);
        }
        if next <= MAX_SCALAR {
            out.push((next, MAX_SCALAR));
        }
        Self { intervals: out }
    }

    /// The set as character ranges, dropping pure-surrogate intervals.
    pub fn ranges(&self) -> Vec<CharRange> {
        self.intervals
            .iter()
            .filter_map(|&(lo, hi)| CharRange::from_scalars(lo, hi))
            .collect()
    }

    /// `\d`
    pub fn digit() -> Self {
        Self::from_intervals([('0' as u32, '9' as u32)])
    }

    /// `\w`
    pub fn word() -> Self {
        Self::from_intervals([
            ('0' as u32, '9' as u32),
            ('A' as u32, 'Z' as u32),
            ('_' as u32, '_' as u32),
            ('a' as u32, 'z' as u32),
        ])
    }

    /// `\s`
    pub fn space() -> Self {
        Self::from_intervals([(0x09, 0x0D), (0x20, 0x20)])
    }
}
