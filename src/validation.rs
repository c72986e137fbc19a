//! Input validation for disk scheduling runs.
//!
//! The policies assume valid input and never re-check it. Callers run
//! these checks first. Detects:
//! - A disk with no positions
//! - A head outside the disk
//! - Requests outside the disk
//! - Duplicate requests
//!
//! All problems are collected rather than stopping at the first.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::models::Position;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// Disk size is zero.
    InvalidDiskSize,
    /// Head position is not in `[0, size)`.
    HeadOutOfRange,
    /// A request position is not in `[0, size)`.
    RequestOutOfRange,
    /// The same position was requested more than once.
    DuplicateRequest,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a scheduling run.
///
/// Checks:
/// 1. `size >= 1`
/// 2. `head < size`
/// 3. Every request is `< size`
/// 4. No request appears twice
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(size: u64, head: Position, requests: &[Position]) -> ValidationResult {
    let mut errors = Vec::new();

    if size == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidDiskSize,
            "Disk size must be at least 1",
        ));
    }

    if head >= size {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            format!("Head position {head} is outside 0..{size}"),
        ));
    }

    let mut seen = HashSet::new();
    for &request in requests {
        if request >= size {
            errors.push(ValidationError::new(
                ValidationErrorKind::RequestOutOfRange,
                format!("Request {request} is outside 0..{size}"),
            ));
        }
        if !seen.insert(request) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateRequest,
                format!("Duplicate request: {request}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
