//! Column and table DDL assembly.
//!
//! The host schema layer consumes [`Field::db_type`] verbatim; these helpers
//! wrap it into full column definitions and `CREATE TABLE` statements the way
//! a schema editor does, appending nullability after the type string.

use crate::backend::Backend;
use crate::fields::Field;

/// Generates the SQL fragment for a column definition.
///
/// The type string (including any DEFAULT and ON UPDATE clauses) comes first,
/// followed by `NULL` or `NOT NULL`. Clause order is part of the contract;
/// schema-diffing tools compare these strings verbatim.
pub fn column_sql(field: &dyn Field, backend: Backend) -> String {
    let null_sql = if field.is_nullable() { "NULL" } else { "NOT NULL" };
    format!("{} {null_sql}", field.db_type(backend))
}

/// Generates a `CREATE TABLE` statement for the given columns.
pub fn create_table_sql(
    table: &str,
    columns: &[(&str, &dyn Field)],
    backend: Backend,
) -> String {
    let col_defs: Vec<String> = columns
        .iter()
        .map(|(name, field)| {
            format!("{} {}", backend.quote_name(name), column_sql(*field, backend))
        })
        .collect();
    let statement = format!(
        "CREATE TABLE {} ({})",
        backend.quote_name(table),
        col_defs.join(", ")
    );
    tracing::debug!(table, backend = backend.vendor(), "generated CREATE TABLE");
    statement
}
