use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// A half-open span of character offsets into a conjugated form, marking characters that differ from the regular form.
///
/// Serialized as a two-element array, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct HighlightRange {
    /// The offset of the first highlighted character
    pub start: usize,
    /// The offset just past the last highlighted character
    pub end: usize,
}

impl HighlightRange {
    /// Creates a range covering `start` up to but not including `end`.
    pub fn new(start: usize, end: usize) -> HighlightRange {
        HighlightRange { start, end }
    }

    /// The number of characters covered by this range.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Determines whether this range covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Determines whether this range is a valid, non-empty span of a value with `len` characters.
    pub fn fits(&self, len: usize) -> bool {
        !self.is_empty() && self.end <= len
    }

    /// Extracts the characters covered by this range from `value`. Returns `None` if the range doesn't fit in `value`.
    pub fn slice(&self, value: &str) -> Option<String> {
        if !self.fits(value.chars().count()) {
            return None;
        }

        Some(value.chars().skip(self.start).take(self.len()).collect())
    }
}

impl From<(usize, usize)> for HighlightRange {
    fn from((start, end): (usize, usize)) -> Self {
        HighlightRange::new(start, end)
    }
}

impl From<HighlightRange> for (usize, usize) {
    fn from(range: HighlightRange) -> Self {
        (range.start, range.end)
    }
}

impl Display for HighlightRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_counts_characters_not_bytes() {
        let range = HighlightRange::new(1, 2);
        assert_eq!(Some("ä".to_string()), range.slice("fährst"));
    }

    #[test]
    fn slice_out_of_bounds() {
        let range = HighlightRange::new(3, 7);
        assert_eq!(None, range.slice("mach"));
    }

    #[test]
    fn empty_range_does_not_fit() {
        let range = HighlightRange::new(2, 2);
        assert!(range.is_empty());
        assert!(!range.fits(5));
    }

    #[test]
    fn display() {
        assert_eq!("[2, 4)", HighlightRange::new(2, 4).to_string());
    }
}
