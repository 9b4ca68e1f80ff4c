use std::cmp::Ordering;

/// Compare two vectors entry by entry. The first entry that differs decides.
///
/// Panics if the lengths differ or an entry is NaN.
pub fn compare<T: PartialOrd>(a: &[T], b: &[T]) -> Ordering {
    assert_eq!(a.len(), b.len(), "can only compare vectors of equal length");
    a.iter()
        .zip(b)
        .map(|(x, y)| x.partial_cmp(y).expect("tried comparing nan"))
        .find(|&ordering| ordering != Ordering::Equal)
        .unwrap_or(Ordering::Equal)
}
