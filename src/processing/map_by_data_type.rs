//! Type-selective mapping over sequences.

use crate::types::{DataType, Value};

/// Returns the transforms of elements whose runtime type matches `data_type`.
///
/// This is a convenience wrapper around [`map_if`] with a
/// [`Value::data_type`] equality selector.
///
/// Iterates `items` in order. For each element whose [`Value::data_type`]
/// equals `data_type`, `transform` is invoked with the element, its
/// original index, and the whole sequence, and the result is appended to
/// the output. Non-matching elements are skipped entirely: never passed to
/// `transform` and not represented in the output. The output preserves the
/// relative order of matching elements and is empty if nothing matches.
///
/// Argument order is (sequence, transform, type tag); a call with the tag
/// and the transform swapped does not typecheck.
///
/// # Examples
///
/// ```rust
/// use sequence_processing::processing::map_by_data_type;
/// use sequence_processing::types::{DataType, Value};
///
/// let items = [
///     Value::Null,
///     Value::Int64(1),
///     Value::Utf8("a".to_string()),
///     Value::Int64(2),
/// ];
///
/// let tens = map_by_data_type(
///     &items,
///     |item, _, _| match item {
///         Value::Int64(n) => Value::Int64(n * 10),
///         other => other.clone(),
///     },
///     DataType::Int64,
/// );
/// assert_eq!(tens, vec![Value::Int64(10), Value::Int64(20)]);
/// ```
pub fn map_by_data_type<R, F>(items: &[Value], transform: F, data_type: DataType) -> Vec<R>
where
    F: FnMut(&Value, usize, &[Value]) -> R,
{
    map_if(items, transform, |item| item.data_type() == data_type)
}

/// Returns the transforms of elements matching `type_predicate`, skipping
/// the rest.
///
/// Generic engine behind [`map_by_data_type`], for sequences of any element
/// type or for selections a single [`DataType`] tag cannot express. The
/// selector sees only the element; `transform` receives the element, its
/// original index, and the whole sequence. Skip, ordering, and
/// empty-output behavior are as in [`map_by_data_type`].
///
/// # Examples
///
/// Selecting the whole numeric category (two tags wide):
///
/// ```rust
/// use sequence_processing::processing::map_if;
/// use sequence_processing::types::Value;
///
/// let items = [
///     Value::Int64(2),
///     Value::Utf8("x".to_string()),
///     Value::Float64(0.5),
/// ];
///
/// let doubled = map_if(
///     &items,
///     |item, _, _| match item {
///         Value::Int64(n) => Value::Int64(n * 2),
///         Value::Float64(f) => Value::Float64(f * 2.0),
///         other => other.clone(),
///     },
///     |item| item.is_numeric(),
/// );
/// assert_eq!(doubled, vec![Value::Int64(4), Value::Float64(1.0)]);
/// ```
pub fn map_if<T, R, F, P>(items: &[T], mut transform: F, mut type_predicate: P) -> Vec<R>
where
    F: FnMut(&T, usize, &[T]) -> R,
    P: FnMut(&T) -> bool,
{
    let mut results = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if type_predicate(item) {
            results.push(transform(item, index, items));
        }
    }
    results
}
