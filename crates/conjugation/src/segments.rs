use std::collections::BTreeSet;

use itertools::Itertools;

use crate::HighlightRange;

/// A run of characters from a conjugated form that's either entirely highlighted or entirely not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightSegment {
    pub text: String,
    pub highlighted: bool,
}

impl HighlightSegment {
    fn plain(chars: &[char]) -> HighlightSegment {
        HighlightSegment {
            text: chars.iter().collect(),
            highlighted: false,
        }
    }

    fn highlighted(chars: &[char]) -> HighlightSegment {
        HighlightSegment {
            text: chars.iter().collect(),
            highlighted: true,
        }
    }
}

/// Splits `value` into alternating plain and highlighted segments.
///
/// Ranges are clipped to `value` and merged first, so overlapping or touching ranges come out as a single highlighted
/// segment and the segments always cover `value` exactly once.
pub fn segment(value: &str, ranges: &[HighlightRange]) -> Vec<HighlightSegment> {
    let chars = value.chars().collect::<Vec<char>>();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for range in normalize(ranges, chars.len()) {
        if range.start > cursor {
            segments.push(HighlightSegment::plain(&chars[cursor..range.start]));
        }
        segments.push(HighlightSegment::highlighted(&chars[range.start..range.end]));
        cursor = range.end;
    }

    if cursor < chars.len() {
        segments.push(HighlightSegment::plain(&chars[cursor..]));
    }

    segments
}

/// Wraps every highlighted part of `text` in the provided markers.
///
/// For example, "fährst" with the "ä" highlighted and markers of `{{hl}}` and `{{/hl}}` becomes "f{{hl}}ä{{/hl}}hrst".
pub fn apply_markers(text: &str, ranges: &[HighlightRange], open: &str, close: &str) -> String {
    segment(text, ranges)
        .into_iter()
        .map(|segment| {
            if segment.highlighted {
                format!("{open}{}{close}", segment.text)
            } else {
                segment.text
            }
        })
        .join("")
}

/// Finds the offsets of every highlighted character in a value with `len` characters.
pub fn index_set(ranges: &[HighlightRange], len: usize) -> BTreeSet<usize> {
    ranges
        .iter()
        .flat_map(|range| range.start..range.end.min(len))
        .collect()
}

/// Converts a set of highlighted character offsets into ranges, merging consecutive offsets.
pub fn ranges_from_indices(indices: &BTreeSet<usize>) -> Vec<HighlightRange> {
    let mut ranges: Vec<HighlightRange> = Vec::new();
    for &index in indices {
        match ranges.last_mut() {
            Some(last) if last.end == index => last.end += 1,
            _ => ranges.push(HighlightRange::new(index, index + 1)),
        }
    }

    ranges
}

/// Sorts and merges the provided ranges, clipping them to a value with `len` characters.
pub fn normalize(ranges: &[HighlightRange], len: usize) -> Vec<HighlightRange> {
    ranges_from_indices(&index_set(ranges, len))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: usize, end: usize) -> HighlightRange {
        HighlightRange::new(start, end)
    }

    fn texts(segments: &[HighlightSegment]) -> Vec<(&str, bool)> {
        segments
            .iter()
            .map(|s| (s.text.as_str(), s.highlighted))
            .collect()
    }

    #[test]
    fn segment_no_ranges() {
        let segments = segment("mache", &[]);
        assert_eq!(vec![("mache", false)], texts(&segments));
    }

    #[test]
    fn segment_middle() {
        let segments = segment("fährst", &[range(1, 2)]);
        assert_eq!(
            vec![("f", false), ("ä", true), ("hrst", false)],
            texts(&segments)
        );
    }

    #[test]
    fn segment_whole_value() {
        let segments = segment("ist", &[range(0, 3)]);
        assert_eq!(vec![("ist", true)], texts(&segments));
    }

    #[test]
    fn segment_unsorted_and_overlapping() {
        let segments = segment("gegangen", &[range(5, 7), range(3, 6), range(0, 1)]);
        assert_eq!(
            vec![("g", true), ("eg", false), ("ange", true), ("n", false)],
            texts(&segments)
        );
    }

    #[test]
    fn segment_touching_ranges_form_one_run() {
        let segments = segment("fährst", &[range(2, 3), range(1, 2)]);
        assert_eq!(
            vec![("f", false), ("äh", true), ("rst", false)],
            texts(&segments)
        );
    }

    #[test]
    fn segment_contained_range_does_not_repeat_text() {
        let segments = segment("gegangen", &[range(0, 5), range(1, 2)]);
        assert_eq!(vec![("gegan", true), ("gen", false)], texts(&segments));
    }

    #[test]
    fn segment_ignores_invalid_ranges() {
        let segments = segment("mach", &[range(2, 2), range(6, 8), range(3, 10)]);
        assert_eq!(vec![("mac", false), ("h", true)], texts(&segments));
    }

    #[test]
    fn markers() {
        assert_eq!(
            "f{{hl}}ä{{/hl}}hrst",
            apply_markers("fährst", &[range(1, 2)], "{{hl}}", "{{/hl}}")
        );
    }

    #[test]
    fn markers_without_ranges() {
        assert_eq!("macht", apply_markers("macht", &[], "<", ">"));
    }

    #[test]
    fn index_set_clips_to_length() {
        let indices = index_set(&[range(1, 3), range(2, 9)], 4);
        assert_eq!(BTreeSet::from([1, 2, 3]), indices);
    }

    #[test]
    fn ranges_from_indices_merges_neighbors() {
        let indices = BTreeSet::from([0, 1, 2, 5, 7, 8]);
        assert_eq!(
            vec![range(0, 3), range(5, 6), range(7, 9)],
            ranges_from_indices(&indices)
        );
    }

    #[test]
    fn ranges_from_no_indices() {
        assert_eq!(Vec::<HighlightRange>::new(), ranges_from_indices(&BTreeSet::new()));
    }

    #[test]
    fn normalize_merges_adjacent_ranges() {
        assert_eq!(
            vec![range(1, 5)],
            normalize(&[range(3, 5), range(1, 3)], 8)
        );
    }
}
