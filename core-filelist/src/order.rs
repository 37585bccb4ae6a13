//! Default orderings for comparator-less sorts.

use std::cmp::Ordering;

use bridge_traits::FileHandle;

/// Compare two handles by name using UTF-16 code units.
///
/// JavaScript compares strings by code unit, which differs from Rust's
/// `str` ordering (by scalar value) for characters outside the BMP.
pub fn compare_names<F: FileHandle>(a: &F, b: &F) -> Ordering {
    a.name().encode_utf16().cmp(b.name().encode_utf16())
}

/// Stable merge sort over indices with a fallible comparator.
///
/// Returns the permutation that sorts `items`, or the first comparator
/// error. The comparator need not be a total order; an inconsistent one
/// yields some permutation rather than a panic.
pub fn try_sorted_indices<T, E, C>(items: &[T], mut compare: C) -> Result<Vec<usize>, E>
where
    C: FnMut(&T, &T) -> Result<Ordering, E>,
{
    let len = items.len();
    let mut order: Vec<usize> = (0..len).collect();
    let mut merged = Vec::with_capacity(len);
    let mut width = 1;

    while width < len {
        merged.clear();
        for start in (0..len).step_by(2 * width) {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);
            let (mut left, mut right) = (start, mid);

            while left < mid && right < end {
                // Ties keep the left run first
                if compare(&items[order[left]], &items[order[right]])? == Ordering::Greater {
                    merged.push(order[right]);
                    right += 1;
                } else {
                    merged.push(order[left]);
                    left += 1;
                }
            }
            merged.extend_from_slice(&order[left..mid]);
            merged.extend_from_slice(&order[right..end]);
        }
        std::mem::swap(&mut order, &mut merged);
        width *= 2;
    }

    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str);

    impl FileHandle for Named {
        fn name(&self) -> String {
            self.0.to_string()
        }

        fn size(&self) -> u64 {
            0
        }
    }

    #[test]
    fn test_ascii_order() {
        assert_eq!(compare_names(&Named("a.txt"), &Named("b.txt")), Ordering::Less);
        assert_eq!(compare_names(&Named("B.txt"), &Named("a.txt")), Ordering::Less);
        assert_eq!(compare_names(&Named("x"), &Named("x")), Ordering::Equal);
    }

    #[test]
    fn test_code_unit_order_outside_bmp() {
        // U+1F600 encodes as a surrogate pair starting 0xD83D, below U+FF5E
        let emoji = Named("\u{1F600}");
        let fullwidth = Named("\u{FF5E}");

        assert_eq!(compare_names(&emoji, &fullwidth), Ordering::Less);
        assert!(emoji.0 > fullwidth.0);
    }

    #[test]
    fn test_sorted_indices_stable() {
        let items = [3, 1, 2, 1, 3, 0];
        let order = try_sorted_indices(&items, |a, b| Ok::<_, ()>(a.cmp(b))).unwrap();
        assert_eq!(order, vec![5, 1, 3, 2, 0, 4]);
    }

    #[test]
    fn test_sorted_indices_small_inputs() {
        let empty: [u8; 0] = [];
        assert!(try_sorted_indices(&empty, |a, b| Ok::<_, ()>(a.cmp(b)))
            .unwrap()
            .is_empty());
        assert_eq!(
            try_sorted_indices(&[7], |a: &i32, b| Ok::<_, ()>(a.cmp(b))).unwrap(),
            vec![0]
        );
    }

    #[test]
    fn test_sorted_indices_stops_on_error() {
        let items = [2, 1, 0];
        let mut calls = 0;
        let result = try_sorted_indices(&items, |_, _| {
            calls += 1;
            Err::<Ordering, _>("comparator threw")
        });

        assert_eq!(result, Err("comparator threw"));
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_sorted_indices_inconsistent_comparator() {
        let items: Vec<u32> = (0..50).collect();
        let order = try_sorted_indices(&items, |_, _| Ok::<_, ()>(Ordering::Greater)).unwrap();

        let mut seen = order.clone();
        seen.sort_unstable();
        assert_eq!(seen, items.iter().map(|&i| i as usize).collect::<Vec<_>>());
    }
}
