//! `sequence-processing` is a small library of higher-order iteration
//! helpers over in-memory sequences: [`processing::find`],
//! [`processing::map_by_data_type`], and
//! [`processing::filter_by_condition`].
//!
//! Sequences are plain slices, read-only from the library's perspective.
//! Homogeneous sequences (`&[i32]`, `&[&str]`, ...) work with the generic
//! operations directly; heterogeneous sequences (the `[null, 1, "a", 2]`
//! kind) use [`types::Value`], a dynamically typed element whose runtime
//! type is matched against [`types::DataType`] tags.
//!
//! ## Supported value types
//!
//! [`types::Value`] covers the scalar kinds of loosely typed data:
//!
//! - [`types::Value::Null`]
//! - [`types::Value::Int64`]
//! - [`types::Value::Float64`]
//! - [`types::Value::Bool`]
//! - [`types::Value::Utf8`]
//!
//! Heterogeneous sequences typically arrive as JSON; [`json`] converts a
//! JSON array to and from `Vec<Value>` entirely in memory.
//!
//! ## Quick examples
//!
//! Find the first match in a homogeneous sequence:
//!
//! ```rust
//! use sequence_processing::processing::find;
//!
//! let names = ["Alex Aaron", "Stephanie Cooper", "Bethany Jones"];
//! let hit = find(&names, |name, _, _| *name == "Stephanie Cooper");
//! assert_eq!(hit, Some(&"Stephanie Cooper"));
//! ```
//!
//! Transform only the integers of a heterogeneous sequence:
//!
//! ```rust
//! use sequence_processing::json::values_from_json_str;
//! use sequence_processing::processing::map_by_data_type;
//! use sequence_processing::types::{DataType, Value};
//!
//! # fn main() -> Result<(), sequence_processing::SequenceError> {
//! let items = values_from_json_str(r#"[null, 1, "a", 2]"#)?;
//! let tens = map_by_data_type(
//!     &items,
//!     |item, _, _| match item {
//!         Value::Int64(n) => Value::Int64(n * 10),
//!         other => other.clone(),
//!     },
//!     DataType::Int64,
//! );
//! assert_eq!(tens, vec![Value::Int64(10), Value::Int64(20)]);
//! # Ok(())
//! # }
//! ```
//!
//! Keep elements passing an index gate and an element test:
//!
//! ```rust
//! use sequence_processing::processing::filter_by_condition;
//!
//! let items = [10, 20, 30, 40];
//! let out = filter_by_condition(&items, |index, _| index > 1, |n, _, _| *n >= 30);
//! assert_eq!(out, vec![30, 40]);
//! ```
//!
//! ## Modules
//!
//! - [`processing`]: the iteration helpers
//! - [`types`]: dynamic value model and runtime type tags
//! - [`json`]: JSON array <-> sequence conversion (in-memory only)
//! - [`error`]: error types used by conversion and tag parsing

pub mod error;
pub mod json;
pub mod processing;
pub mod types;

pub use error::{SequenceError, SequenceResult};
