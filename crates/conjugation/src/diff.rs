use crate::HighlightRange;

/// Finds the part of `actual` that differs from `regular`, as character offsets into `actual`.
///
/// Returns `None` if the two are identical. Otherwise the common prefix and suffix of the two strings are skipped, and the
/// remaining middle of `actual` is returned as a single range. If that leaves nothing to highlight even though the strings differ,
/// all of `actual` is highlighted. An empty `actual` produces an empty list, since it has no characters to highlight.
///
/// For example, with a regular form of "fahrst" and an actual form of "fährst", the returned range covers just the "ä".
pub fn compute_highlight_ranges(regular: &str, actual: &str) -> Option<Vec<HighlightRange>> {
    if regular == actual {
        return None;
    }

    let regular = regular.chars().collect::<Vec<char>>();
    let actual = actual.chars().collect::<Vec<char>>();
    if actual.is_empty() {
        return Some(Vec::new());
    }

    let min_len = regular.len().min(actual.len());
    let prefix_len = regular
        .iter()
        .zip(&actual)
        .take_while(|(r, a)| r == a)
        .count();

    // the suffix can't reach back into the prefix
    let mut suffix_len = regular
        .iter()
        .rev()
        .zip(actual.iter().rev())
        .take(min_len - prefix_len)
        .take_while(|(r, a)| r == a)
        .count();

    let start = prefix_len;
    let mut end = actual.len() - suffix_len;

    // the suffix may have swallowed the differing characters, so give some back
    while start >= end && suffix_len > 0 {
        suffix_len -= 1;
        end = actual.len() - suffix_len;
    }

    if start >= end {
        return Some(vec![HighlightRange::new(0, actual.len())]);
    }

    Some(vec![HighlightRange::new(start, end)])
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Slices `actual` with the single range computed against `regular`.
    fn highlighted(regular: &str, actual: &str) -> String {
        let ranges = compute_highlight_ranges(regular, actual).expect("strings should differ");
        assert_eq!(1, ranges.len());
        ranges[0].slice(actual).expect("range should fit")
    }

    #[test]
    fn identical() {
        assert_eq!(None, compute_highlight_ranges("gemacht", "gemacht"));
    }

    #[test]
    fn single_letter_change() {
        assert_eq!(
            Some(vec![HighlightRange::new(2, 3)]),
            compute_highlight_ranges("gemacht", "gedacht")
        );
        assert_eq!("d", highlighted("gemacht", "gedacht"));
    }

    #[test]
    fn umlaut() {
        assert_eq!(
            Some(vec![HighlightRange::new(1, 2)]),
            compute_highlight_ranges("fahrst", "fährst")
        );
        assert_eq!("ä", highlighted("fahrst", "fährst"));
    }

    #[test]
    fn vowel_change_with_different_lengths() {
        assert_eq!("angen", highlighted("gegeht", "gegangen"));
        assert_eq!("i", highlighted("seht", "sieht"));
    }

    #[test]
    fn actual_is_prefix_of_regular() {
        // nothing is left after the prefix, so everything is highlighted
        assert_eq!(
            Some(vec![HighlightRange::new(0, 4)]),
            compute_highlight_ranges("mache", "mach")
        );
    }

    #[test]
    fn suffix_gives_back_characters() {
        assert_eq!(
            Some(vec![HighlightRange::new(2, 3)]),
            compute_highlight_ranges("macht", "mat")
        );
    }

    #[test]
    fn insertion() {
        assert_eq!(
            Some(vec![HighlightRange::new(4, 5)]),
            compute_highlight_ranges("mach", "mache")
        );
    }

    #[test]
    fn completely_different() {
        assert_eq!(
            Some(vec![HighlightRange::new(0, 3)]),
            compute_highlight_ranges("bin", "ist")
        );
    }

    #[test]
    fn empty_actual() {
        assert_eq!(Some(Vec::new()), compute_highlight_ranges("mache", ""));
    }

    #[test]
    fn empty_regular() {
        assert_eq!(
            Some(vec![HighlightRange::new(0, 4)]),
            compute_highlight_ranges("", "mach")
        );
    }

    #[test]
    fn ranges_always_fit_in_actual() {
        let pairs = [
            ("gemacht", "gedacht"),
            ("mache", "mach"),
            ("macht", "mat"),
            ("aaa", "aa"),
            ("aa", "aaa"),
            ("gegeht", "gegangen"),
            ("fahrst", "fährst"),
            ("x", "y"),
        ];

        for (regular, actual) in pairs {
            let ranges = compute_highlight_ranges(regular, actual).unwrap();
            for range in ranges {
                assert!(
                    range.fits(actual.chars().count()),
                    "{range} doesn't fit {actual:?}"
                );
            }
        }
    }
}
