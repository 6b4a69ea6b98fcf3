//! Error types for pointer resolution and report assembly.
//!
//! Resolution itself never fails. The variants here cover the validation
//! engine refusing to run, schema documents that do not load, and the
//! opt-in conversion of a non-empty report into an error.

use thiserror::Error;

use crate::report::ValidationReport;

/// The unified error type for the fieldptr crates.
#[derive(Debug, Error)]
pub enum FieldPtrError {
    /// The validation engine could not run against the input value.
    ///
    /// Distinct from a report with zero entries: zero entries means the
    /// value is valid, this means nothing was checked.
    #[error("validation engine failed: {reason}")]
    EngineFailed { reason: String },

    /// Validation ran and found at least one rule violation.
    #[error("validation failed with {} violation(s)", .0.len())]
    Invalid(ValidationReport),

    /// A schema document is malformed or references an unknown type.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

impl FieldPtrError {
    /// The report carried by `Invalid`, if any.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            FieldPtrError::Invalid(report) => Some(report),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the fieldptr crates.
pub type FieldPtrResult<T> = Result<T, FieldPtrError>;
