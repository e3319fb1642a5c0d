//! Configuration check messages for field declarations.
//!
//! Each field descriptor exposes a `check()` method that validates its option
//! combination and returns a list of diagnostic messages; an empty list means
//! the configuration is valid. Checks run once at schema-definition time,
//! before any DDL is rendered.
//!
//! Message identifiers follow the host framework's convention
//! (e.g. "fields.E160").

use crate::error::{FieldError, FieldResult};

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    /// A potential problem.
    Warning,
    /// A definite problem that must be fixed.
    Error,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A diagnostic message produced by a field configuration check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// The human-readable message describing the issue.
    pub msg: String,
    /// An optional hint on how to fix the issue.
    pub hint: Option<String>,
    /// The object (field) that has the issue.
    pub obj: Option<String>,
    /// A unique identifier for this check message (e.g. "fields.E160").
    pub id: Option<String>,
}

impl CheckMessage {
    /// Creates a new `CheckMessage` with the given level and details.
    pub fn new(
        level: CheckLevel,
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self {
            level,
            msg: msg.into(),
            hint: hint.map(String::from),
            obj: obj.map(String::from),
            id: id.map(String::from),
        }
    }

    /// Creates a warning-level message.
    pub fn warning(
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self::new(CheckLevel::Warning, msg, hint, obj, id)
    }

    /// Creates an error-level message.
    pub fn error(
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self::new(CheckLevel::Error, msg, hint, obj, id)
    }

    /// Returns `true` if this message is error-level.
    pub fn is_error(&self) -> bool {
        self.level >= CheckLevel::Error
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref id) = self.id {
            write!(f, "({id}) ")?;
        }
        write!(f, "{}: {}", self.level, self.msg)?;
        if let Some(ref hint) = self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        if let Some(ref obj) = self.obj {
            write!(f, "\n\tObject: {obj}")?;
        }
        Ok(())
    }
}

/// Converts a list of check messages into a result.
///
/// Returns `Ok(())` when no error-level message is present, otherwise a
/// [`FieldError::ConfigurationError`] carrying the first error message.
/// Warning-level messages are logged and do not fail the check.
pub fn require_valid(messages: &[CheckMessage]) -> FieldResult<()> {
    for message in messages {
        if message.is_error() {
            tracing::debug!(check = %message, "field configuration check failed");
            return Err(FieldError::ConfigurationError(message.msg.clone()));
        }
        tracing::debug!(check = %message, "field configuration check warning");
    }
    Ok(())
}
