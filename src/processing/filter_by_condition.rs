//! Index-gated filtering.

/// Returns the elements that pass both the index gate and the element test.
///
/// Iterates by index from 0. For each index, `condition` is invoked first
/// with the index and the whole sequence; only when it returns `true` is
/// `test` invoked with the element, the index, and the sequence. Elements
/// passing both are cloned into the output in input order. Indices
/// rejected by `condition` never reach `test`. The output is empty if
/// nothing passes both gates.
///
/// The two predicates have different shapes (`(index, sequence)` vs
/// `(element, index, sequence)`), so passing them in the wrong order does
/// not typecheck.
///
/// # Examples
///
/// ```rust
/// use sequence_processing::processing::filter_by_condition;
///
/// let items = [10, 20, 30, 40];
/// let out = filter_by_condition(
///     &items,
///     |index, _| index > 1,
///     |n, _, _| *n >= 30,
/// );
/// assert_eq!(out, vec![30, 40]);
/// ```
pub fn filter_by_condition<T, C, P>(items: &[T], mut condition: C, mut test: P) -> Vec<T>
where
    T: Clone,
    C: FnMut(usize, &[T]) -> bool,
    P: FnMut(&T, usize, &[T]) -> bool,
{
    let mut results = Vec::new();
    for (index, item) in items.iter().enumerate() {
        if condition(index, items) && test(item, index, items) {
            results.push(item.clone());
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::filter_by_condition;
    use crate::types::Value;

    #[test]
    fn keeps_elements_passing_both_gates_in_order() {
        let items = [10, 20, 30, 40];
        let out = filter_by_condition(&items, |index, _| index > 1, |n, _, _| *n >= 30);
        assert_eq!(out, vec![30, 40]);
    }

    #[test]
    fn rejected_indices_never_reach_test() {
        let items = [10, 20, 30, 40];
        let mut tested_indices = Vec::new();
        let out = filter_by_condition(
            &items,
            |index, _| index % 2 == 0,
            |n, index, _| {
                tested_indices.push(index);
                *n > 5
            },
        );
        assert_eq!(out, vec![10, 30]);
        assert_eq!(tested_indices, vec![0, 2]);
    }

    #[test]
    fn element_failing_test_is_dropped_even_when_gated_in() {
        let items = [10, 20, 30, 40];
        let out = filter_by_condition(&items, |_, _| true, |n, _, _| *n > 25);
        assert_eq!(out, vec![30, 40]);
    }

    #[test]
    fn can_return_empty_output() {
        let items = [10, 20, 30, 40];
        let out = filter_by_condition(&items, |_, _| false, |_, _, _| true);
        assert!(out.is_empty());
    }

    #[test]
    fn empty_sequence_never_invokes_either_predicate() {
        let items: [i32; 0] = [];
        let mut condition_calls = 0;
        let mut test_calls = 0;
        let out = filter_by_condition(
            &items,
            |_, _| {
                condition_calls += 1;
                true
            },
            |_, _, _| {
                test_calls += 1;
                true
            },
        );
        assert!(out.is_empty());
        assert_eq!(condition_calls, 0);
        assert_eq!(test_calls, 0);
    }

    #[test]
    fn condition_receives_index_and_sequence() {
        let items = [7, 8, 9];
        let mut seen = Vec::new();
        let out = filter_by_condition(
            &items,
            |index, seq| {
                assert_eq!(seq, &items[..]);
                seen.push(index);
                true
            },
            |_, _, _| true,
        );
        assert_eq!(out, vec![7, 8, 9]);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn filters_dynamic_values() {
        let items = [
            Value::Int64(5),
            Value::Utf8("skip".to_string()),
            Value::Int64(50),
            Value::Int64(7),
        ];
        let out = filter_by_condition(
            &items,
            |index, seq| index < seq.len() - 1,
            |item, _, _| matches!(item, Value::Int64(n) if *n >= 5),
        );
        assert_eq!(out, vec![Value::Int64(5), Value::Int64(50)]);
    }
}
