//! Higher-order iteration helpers.
//!
//! Each operation is a single, synchronous, in-order pass over a slice,
//! fully parametrized by caller-supplied closures. The input is never
//! mutated; outputs are freshly constructed.
//!
//! Currently implemented:
//!
//! - [`find()`]: first element matching a predicate
//! - [`map_by_data_type()`] / [`map_if()`]: transform matching elements,
//!   skip the rest
//! - [`filter_by_condition()`]: index-gated filtering by two predicates
//!
//! Closures follow a fixed argument shape: element predicates and
//! transforms receive `(element, index, sequence)`, and the index gate of
//! [`filter_by_condition()`] receives `(index, sequence)`. All predicates
//! return plain `bool`; there is no truthiness coercion.
//!
//! ## Example: map → filter → find over a heterogeneous sequence
//!
//! ```rust
//! use sequence_processing::json::values_from_json_str;
//! use sequence_processing::processing::{filter_by_condition, find, map_by_data_type};
//! use sequence_processing::types::{DataType, Value};
//!
//! # fn main() -> Result<(), sequence_processing::SequenceError> {
//! let items = values_from_json_str(r#"[null, 4, "a", 7, 10]"#)?;
//!
//! // Scale every integer by 10; nulls and strings are skipped.
//! let scaled = map_by_data_type(
//!     &items,
//!     |item, _, _| match item {
//!         Value::Int64(n) => Value::Int64(n * 10),
//!         other => other.clone(),
//!     },
//!     DataType::Int64,
//! );
//! assert_eq!(
//!     scaled,
//!     vec![Value::Int64(40), Value::Int64(70), Value::Int64(100)]
//! );
//!
//! // Keep values at index >= 1 that are at least 70.
//! let kept = filter_by_condition(
//!     &scaled,
//!     |index, _| index >= 1,
//!     |item, _, _| matches!(item, Value::Int64(n) if *n >= 70),
//! );
//! assert_eq!(kept, vec![Value::Int64(70), Value::Int64(100)]);
//!
//! // First kept value over 90.
//! let first_big = find(&kept, |item, _, _| {
//!     matches!(item, Value::Int64(n) if *n > 90)
//! });
//! assert_eq!(first_big, Some(&Value::Int64(100)));
//! # Ok(())
//! # }
//! ```

pub mod filter_by_condition;
pub mod find;
pub mod map_by_data_type;

pub use filter_by_condition::filter_by_condition;
pub use find::find;
pub use map_by_data_type::{map_by_data_type, map_if};
