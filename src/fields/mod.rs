//! Field descriptors and the [`Field`] trait.
//!
//! A field descriptor is constructed once when a record schema is defined and
//! is immutable afterwards. It is consulted at two points: when the schema is
//! materialized into DDL ([`Field::db_type`]) and once per write operation
//! ([`Field::pre_save`]).

pub mod fixed_char;
pub mod timestamp;

pub use fixed_char::FixedCharField;
pub use timestamp::TimestampField;

use crate::backend::Backend;
use crate::checks::CheckMessage;
use crate::error::{FieldError, FieldResult};
use crate::value::Value;

/// The common interface of the forced-type field descriptors.
///
/// Object safe so that schema assembly and the write path can work over
/// heterogeneous field sets via `&dyn Field`.
pub trait Field {
    /// Returns the DDL column-type clause for the given backend.
    ///
    /// The returned string is consumed verbatim by the host schema layer
    /// inside `CREATE TABLE`/`ALTER TABLE` statements; keyword casing and
    /// clause order (type keyword, then DEFAULT, then ON UPDATE) are part of
    /// the contract. Nullability is not included here; the host appends
    /// `NULL`/`NOT NULL` after the type string (see
    /// [`column_sql`](crate::schema::column_sql)).
    fn db_type(&self, backend: Backend) -> String;

    /// Validates the field's option combination.
    ///
    /// Returns an empty vector when the configuration is valid.
    fn check(&self) -> Vec<CheckMessage>;

    /// Returns `true` if the column accepts SQL NULL.
    fn is_nullable(&self) -> bool;

    /// Returns the declared default value, if any.
    fn default_value(&self) -> Option<&Value>;

    /// Resolves the value to write for this field.
    ///
    /// `supplied` is the caller-supplied value, `None` meaning the caller
    /// supplied nothing (the absent-value marker, distinct from an explicit
    /// `Value::Null`). `add` is `true` for create operations and `false` for
    /// updates. Returns the value to serialize, or `Ok(None)` to omit the
    /// column and defer to its DEFAULT clause.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::IntegrityError`] when a non-nullable column with
    /// no DEFAULT clause would receive no value.
    fn pre_save(&self, supplied: Option<&Value>, add: bool) -> FieldResult<Option<Value>>;
}

/// Passes a caller-supplied value through the write boundary unchanged.
///
/// An absent value on a non-nullable, defaultless column is rejected here
/// rather than handed to the driver: PostgreSQL and SQLite would reject it
/// natively, but the MySQL family silently coerces the omission to a zero
/// date. Raising before the write reaches the driver makes the behavior
/// uniform. Explicit nulls pass through; the database's own NOT NULL
/// enforcement applies to those.
pub(crate) fn pass_through(
    supplied: Option<&Value>,
    nullable: bool,
    has_default: bool,
) -> FieldResult<Option<Value>> {
    match supplied {
        Some(value) => Ok(Some(value.clone())),
        None if nullable || has_default => Ok(None),
        None => Err(FieldError::IntegrityError(
            "no value supplied for a NOT NULL column with no DEFAULT".to_string(),
        )),
    }
}

/// Quotes a string as a SQL literal, doubling embedded single quotes.
pub(crate) fn quote_literal(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_through_explicit_value() {
        let value = Value::String("four".into());
        let resolved = pass_through(Some(&value), false, false).unwrap();
        assert_eq!(resolved, Some(value));
    }

    #[test]
    fn test_pass_through_explicit_null() {
        // Explicit nulls are the database's problem, not ours.
        let resolved = pass_through(Some(&Value::Null), false, false).unwrap();
        assert_eq!(resolved, Some(Value::Null));
    }

    #[test]
    fn test_pass_through_absent_nullable() {
        assert_eq!(pass_through(None, true, false).unwrap(), None);
    }

    #[test]
    fn test_pass_through_absent_with_default() {
        assert_eq!(pass_through(None, false, true).unwrap(), None);
    }

    #[test]
    fn test_pass_through_absent_not_null_no_default() {
        let err = pass_through(None, false, false).unwrap_err();
        assert!(matches!(err, FieldError::IntegrityError(_)));
    }

    #[test]
    fn test_quote_literal() {
        assert_eq!(quote_literal("four"), "'four'");
        assert_eq!(quote_literal("it's"), "'it''s'");
    }
}
