//! Fixed-length character field.

use crate::backend::Backend;
use crate::checks::CheckMessage;
use crate::error::FieldResult;
use crate::fields::{pass_through, quote_literal, Field};
use crate::value::Value;

/// A field descriptor that stores values in fixed-length `CHAR` columns.
///
/// Stock char fields save all values in `VARCHAR` data types with no option
/// to use a `CHAR` data type instead. `max_length` is kept for familiarity;
/// here its value is the length of the `CHAR` column.
///
/// The `CHAR(n)` keyword and the DEFAULT literal syntax are portable across
/// all three supported backends, so no backend branching happens here.
///
/// # Examples
///
/// ```
/// use forcedfields::{Backend, Field, FixedCharField};
///
/// let field = FixedCharField::new(4);
/// assert_eq!(field.db_type(Backend::Sqlite), "CHAR(4)");
///
/// let field = FixedCharField::new(2).default("NA");
/// assert_eq!(field.db_type(Backend::PostgreSql), "CHAR(2) DEFAULT 'NA'");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedCharField {
    max_length: u32,
    null: bool,
    default: Option<Value>,
}

impl FixedCharField {
    /// Creates a fixed char field of the given column length.
    pub const fn new(max_length: u32) -> Self {
        Self {
            max_length,
            null: false,
            default: None,
        }
    }

    /// Allows SQL NULL values in the column.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Declares a DEFAULT value for the column.
    ///
    /// `Value::Null` renders as `DEFAULT NULL`; any other value is
    /// stringified and single-quoted.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Returns the declared column length.
    pub const fn max_length(&self) -> u32 {
        self.max_length
    }

    /// Runs configuration checks, returning the field if they pass.
    pub fn checked(self) -> FieldResult<Self> {
        crate::checks::require_valid(&self.check())?;
        Ok(self)
    }
}

impl Field for FixedCharField {
    fn db_type(&self, _backend: Backend) -> String {
        let mut spec = format!("CHAR({})", self.max_length);
        if let Some(ref default) = self.default {
            let literal = match default {
                Value::Null => "NULL".to_string(),
                other => quote_literal(&other.to_string()),
            };
            spec.push_str(&format!(" DEFAULT {literal}"));
        }
        spec
    }

    fn check(&self) -> Vec<CheckMessage> {
        let mut messages = Vec::new();
        if self.max_length == 0 {
            messages.push(CheckMessage::error(
                "'max_length' must be a positive integer.",
                None,
                Some("forcedfields.FixedCharField"),
                Some("fields.E121"),
            ));
        }
        messages
    }

    fn is_nullable(&self) -> bool {
        self.null
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn pre_save(&self, supplied: Option<&Value>, _add: bool) -> FieldResult<Option<Value>> {
        pass_through(supplied, self.null, self.default.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;

    #[test]
    fn test_db_type_plain() {
        let field = FixedCharField::new(4);
        for backend in Backend::ALL {
            assert_eq!(field.db_type(backend), "CHAR(4)");
        }
    }

    #[test]
    fn test_db_type_with_default() {
        let field = FixedCharField::new(2).default("NA");
        for backend in Backend::ALL {
            assert_eq!(field.db_type(backend), "CHAR(2) DEFAULT 'NA'");
        }
    }

    #[test]
    fn test_db_type_with_null_default() {
        let field = FixedCharField::new(8).nullable().default(Value::Null);
        assert_eq!(field.db_type(Backend::MySql), "CHAR(8) DEFAULT NULL");
    }

    #[test]
    fn test_db_type_default_escapes_quotes() {
        let field = FixedCharField::new(4).default("it's");
        assert_eq!(field.db_type(Backend::Sqlite), "CHAR(4) DEFAULT 'it''s'");
    }

    #[test]
    fn test_db_type_deterministic() {
        let field = FixedCharField::new(4).default("four");
        assert_eq!(
            field.db_type(Backend::PostgreSql),
            field.db_type(Backend::PostgreSql)
        );
    }

    #[test]
    fn test_check_zero_max_length() {
        let messages = FixedCharField::new(0).check();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id.as_deref(), Some("fields.E121"));
    }

    #[test]
    fn test_checked_ok() {
        assert!(FixedCharField::new(4).checked().is_ok());
    }

    #[test]
    fn test_checked_zero_max_length() {
        let err = FixedCharField::new(0).checked().unwrap_err();
        assert!(matches!(err, FieldError::ConfigurationError(_)));
    }

    #[test]
    fn test_pre_save_passes_value_through() {
        let field = FixedCharField::new(4);
        let value = Value::String("four".into());
        assert_eq!(
            field.pre_save(Some(&value), true).unwrap(),
            Some(value.clone())
        );
        assert_eq!(field.pre_save(Some(&value), false).unwrap(), Some(value));
    }

    #[test]
    fn test_pre_save_absent_not_null() {
        let field = FixedCharField::new(4);
        let err = field.pre_save(None, true).unwrap_err();
        assert!(matches!(err, FieldError::IntegrityError(_)));
    }

    #[test]
    fn test_pre_save_absent_nullable() {
        let field = FixedCharField::new(4).nullable();
        assert_eq!(field.pre_save(None, true).unwrap(), None);
    }

    #[test]
    fn test_pre_save_absent_with_default() {
        let field = FixedCharField::new(4).default("four");
        assert_eq!(field.pre_save(None, false).unwrap(), None);
    }
}
