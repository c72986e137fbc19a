//! Error types for the disk scheduling crate.

use thiserror::Error;

use crate::validation::ValidationError;

/// Crate result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by policy dispatch and input loading.
///
/// The policies themselves are total over valid input and never fail.
#[derive(Debug, Error)]
pub enum Error {
    /// A dispatch layer was given a policy identifier it does not know.
    #[error("unknown scheduling policy: {0}")]
    UnknownPolicy(String),

    #[error("invalid value for `{key}`: {value:?}")]
    InvalidValue { key: String, value: String },

    #[error("missing value for `{0}`")]
    MissingValue(String),

    /// Input parsed but failed the range/duplicate checks.
    #[error("invalid simulation input: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    #[error("failed to read simulation input: {0}")]
    Io(#[from] std::io::Error),
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
