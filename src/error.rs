//! Error types for field configuration and write-time value resolution.
//!
//! Two error kinds originate in this crate: configuration errors raised when
//! a field is declared with an invalid option combination, and integrity
//! errors raised at the write boundary before an absent value can reach a
//! NOT NULL column. Everything else (length validation, type coercion in
//! query parameters) is the host framework's responsibility.

use thiserror::Error;

/// The error type for field declaration and pre-save resolution.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A field was declared with mutually exclusive or otherwise invalid
    /// options. A definition-time defect that must be fixed by the schema
    /// author; never retried.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// A NOT NULL column with no DEFAULT clause would receive no value.
    ///
    /// This is raised proactively at the write boundary so behavior is
    /// uniform across backends. The MySQL family would otherwise coerce the
    /// missing value to a zero date instead of rejecting the write.
    #[error("Integrity error: {0}")]
    IntegrityError(String),

    /// A record-level shape problem at the write boundary, such as a value
    /// slice whose length does not match the column list.
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// A convenience type alias for `Result<T, FieldError>`.
pub type FieldResult<T> = Result<T, FieldError>;
