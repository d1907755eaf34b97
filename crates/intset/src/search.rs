use core::cmp::Ordering;

/// Binary membership probe over an ascending slice.
///
/// Callers guarantee the slice is sorted; every call site passes a canonical
/// element sequence.
pub(crate) fn contains(sorted: &[i32], key: i32) -> bool {
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match sorted[mid].cmp(&key) {
            Ordering::Equal => return true,
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
        }
    }
    false
}
