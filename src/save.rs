//! Record-level pre-save value resolution.
//!
//! Instead of mutating record attributes through a hidden setter as a side
//! effect of a save hook, the write path calls [`pre_save_record`] and uses
//! its return value directly. The input pairs each field descriptor with the
//! caller-supplied value (`None` meaning the caller supplied nothing); the
//! output holds only the columns with concrete values, so omitted columns
//! fall back to their DDL DEFAULT clause.

use crate::error::{FieldError, FieldResult};
use crate::fields::Field;
use crate::value::Value;

/// Resolves the outgoing values for a record before it is handed to the
/// persistence layer.
///
/// `add` is `true` for create operations and `false` for updates. Errors are
/// annotated with the offending column name.
///
/// # Errors
///
/// Returns [`FieldError::ValidationError`] when the field and value slices
/// have different lengths, or any error a field's
/// [`pre_save`](Field::pre_save) produces.
pub fn pre_save_record<'a>(
    columns: &[(&'a str, &dyn Field)],
    supplied: &[Option<Value>],
    add: bool,
) -> FieldResult<Vec<(&'a str, Value)>> {
    if columns.len() != supplied.len() {
        return Err(FieldError::ValidationError(format!(
            "record has {} columns but {} values were supplied",
            columns.len(),
            supplied.len()
        )));
    }

    let mut resolved = Vec::with_capacity(columns.len());
    for ((name, field), value) in columns.iter().zip(supplied) {
        match field.pre_save(value.as_ref(), add) {
            Ok(Some(value)) => resolved.push((*name, value)),
            Ok(None) => {} // omit; the column DEFAULT governs
            Err(err) => return Err(annotate(err, name)),
        }
    }
    Ok(resolved)
}

/// Prefixes an error message with the column it concerns.
fn annotate(err: FieldError, column: &str) -> FieldError {
    match err {
        FieldError::ConfigurationError(msg) => {
            FieldError::ConfigurationError(format!("column '{column}': {msg}"))
        }
        FieldError::IntegrityError(msg) => {
            FieldError::IntegrityError(format!("column '{column}': {msg}"))
        }
        FieldError::ValidationError(msg) => {
            FieldError::ValidationError(format!("column '{column}': {msg}"))
        }
    }
}
