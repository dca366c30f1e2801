//! First-match search over a sequence.

/// Returns the first element for which `predicate` returns `true`.
///
/// The predicate is invoked with the element, its index, and the whole
/// sequence, scanning in order from index 0. Scanning stops at the first
/// match, so the predicate runs at most once per visited element and not
/// at all past a match. Returns [`None`] if no element matches; for an
/// empty sequence the predicate is never invoked.
///
/// # Examples
///
/// ```rust
/// use sequence_processing::processing::find;
///
/// let names = ["Alex Aaron", "Stephanie Cooper", "Bethany Jones"];
/// let hit = find(&names, |name, _, _| *name == "Stephanie Cooper");
/// assert_eq!(hit, Some(&"Stephanie Cooper"));
///
/// let numbers = [1, 2, 3];
/// assert_eq!(find(&numbers, |n, _, _| *n > 10), None);
/// ```
pub fn find<T, P>(items: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T, usize, &[T]) -> bool,
{
    for (index, item) in items.iter().enumerate() {
        if predicate(item, index, items) {
            return Some(item);
        }
    }
    None
}
