use thiserror::Error;

/// Convenience result type for sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Error type returned by fallible sequence operations.
///
/// The iteration helpers in [`crate::processing`] are infallible by
/// construction (argument-shape mistakes do not typecheck, and "not found"
/// is `None`, not an error). This enum covers the remaining fallible
/// surfaces: JSON conversion and type-tag parsing, both of which report
/// before any iteration begins.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// The input is not valid JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The input has the wrong top-level shape (e.g. not a sequence).
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// An element could not be converted into a [`crate::types::Value`].
    #[error("failed to convert value at index {index}: {message} (raw='{raw}')")]
    ParseError {
        index: usize,
        raw: String,
        message: String,
    },

    /// A type tag string did not name a known [`crate::types::DataType`].
    #[error("unknown type tag '{raw}' (expected one of: null, bool, int64, float64, utf8)")]
    UnknownTypeTag { raw: String },
}
