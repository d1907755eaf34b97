/// In-place ascending quicksort, Hoare partition with the first element as
/// the pivot.
///
/// Recursion takes the smaller side of each partition; the larger side loops,
/// so the depth is logarithmic even on already-sorted input. Worst-case
/// running time stays quadratic, which is acceptable at set sizes.
pub(crate) fn sort_ascending(mut xs: &mut [i32]) {
    while xs.len() > 1 {
        let pivot = partition(xs);
        let (left, right) = xs.split_at_mut(pivot);
        let right = &mut right[1..];
        if left.len() < right.len() {
            sort_ascending(left);
            xs = right;
        } else {
            sort_ascending(right);
            xs = left;
        }
    }
}

/// Moves everything below the pivot key left of it and everything above
/// right of it, filling the hole the lifted key leaves behind from
/// alternating ends. Returns the key's resting index.
fn partition(xs: &mut [i32]) -> usize {
    let key = xs[0];
    let mut lo = 0;
    let mut hi = xs.len() - 1;
    while lo < hi {
        while lo < hi && xs[hi] >= key {
            hi -= 1;
        }
        if lo < hi {
            xs[lo] = xs[hi];
            lo += 1;
        }
        while lo < hi && xs[lo] <= key {
            lo += 1;
        }
        if lo < hi {
            xs[hi] = xs[lo];
            hi -= 1;
        }
    }
    xs[lo] = key;
    lo
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn empty_and_singleton_are_untouched() {
        let mut empty: [i32; 0] = [];
        sort_ascending(&mut empty);
        let mut one = [42];
        sort_ascending(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn unordered_input_is_sorted() {
        let mut xs = [5, -3, 9, 0, 2, -3, 7, 1];
        sort_ascending(&mut xs);
        assert_eq!(xs, [-3, -3, 0, 1, 2, 5, 7, 9]);
    }

    #[test]
    fn reverse_sorted_input_is_sorted() {
        let mut xs: Vec<i32> = (0..257).rev().collect();
        sort_ascending(&mut xs);
        let expected: Vec<i32> = (0..257).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn already_sorted_input_survives_the_skewed_partitions() {
        let mut xs: Vec<i32> = (0..4096).collect();
        sort_ascending(&mut xs);
        let expected: Vec<i32> = (0..4096).collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn all_equal_input_is_unchanged() {
        let mut xs = [7; 33];
        sort_ascending(&mut xs);
        assert_eq!(xs, [7; 33]);
    }

    #[test]
    fn extremes_sort_without_overflow() {
        let mut xs = [i32::MAX, 0, i32::MIN, -1, 1];
        sort_ascending(&mut xs);
        assert_eq!(xs, [i32::MIN, -1, 0, 1, i32::MAX]);
    }
}
