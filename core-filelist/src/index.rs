//! Relative index resolution.

/// Resolve a possibly negative index against a length.
///
/// Negative values count back from the end. The result is clamped to
/// `0..=len`.
pub fn resolve_relative(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        (index as usize).min(len)
    }
}

/// Resolve optional `start`/`end` bounds into a half-open range.
///
/// `start` defaults to 0 and `end` to `len`. An end before the start
/// yields an empty range at `start`.
pub fn resolve_range(start: Option<isize>, end: Option<isize>, len: usize) -> (usize, usize) {
    let start = start.map_or(0, |s| resolve_relative(s, len));
    let end = end.map_or(len, |e| resolve_relative(e, len));
    (start, end.max(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_indices_clamp_to_len() {
        assert_eq!(resolve_relative(0, 3), 0);
        assert_eq!(resolve_relative(2, 3), 2);
        assert_eq!(resolve_relative(10, 3), 3);
    }

    #[test]
    fn test_negative_indices_count_from_end() {
        assert_eq!(resolve_relative(-1, 3), 2);
        assert_eq!(resolve_relative(-3, 3), 0);
        assert_eq!(resolve_relative(-10, 3), 0);
        assert_eq!(resolve_relative(isize::MIN, 3), 0);
    }

    #[test]
    fn test_range_defaults() {
        assert_eq!(resolve_range(None, None, 4), (0, 4));
        assert_eq!(resolve_range(Some(1), None, 4), (1, 4));
        assert_eq!(resolve_range(None, Some(-1), 4), (0, 3));
    }

    #[test]
    fn test_inverted_range_is_empty() {
        assert_eq!(resolve_range(Some(3), Some(1), 4), (3, 3));
        assert_eq!(resolve_range(Some(-1), Some(-2), 4), (3, 3));
    }

    #[test]
    fn test_empty_length() {
        assert_eq!(resolve_range(Some(-1), Some(5), 0), (0, 0));
    }
}
