//! Error types for record normalisation.

use thiserror::Error;

/// Why a raw feed record could not be normalised.
///
/// Every variant describes a malformed record. Whether such a record is
/// skipped or aborts ingestion is decided by the caller.
#[derive(Debug, Error, PartialEq)]
pub enum NormalizeError {
    #[error("record is not a JSON object")]
    NotAnObject,

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("no coordinate rule matched (tried nested `location` and flat `lat`/`lng`)")]
    MissingCoordinates,

    #[error("invalid time {value:?}")]
    InvalidTime { value: String },
}
