//! # forcedfields
//!
//! Forced-type ORM model fields for a Django-style database layer.
//!
//! Databases should be as self-documenting and semantic as possible,
//! independent of any application code or ORM models. To that end, this crate
//! provides field descriptors that force more explicit column data types than
//! a host framework's stock fields and shift duties from the application to
//! the database where the database can carry them:
//!
//! - [`FixedCharField`](fields::FixedCharField) stores values in fixed-length
//!   `CHAR(n)` columns. Stock char fields only ever emit `VARCHAR`.
//! - [`TimestampField`](fields::TimestampField) is a timezone-naive system
//!   timestamp column. On MySQL/MariaDB it uses the `TIMESTAMP` data type and
//!   its native `DEFAULT CURRENT_TIMESTAMP` / `ON UPDATE CURRENT_TIMESTAMP`
//!   modifiers; on PostgreSQL and SQLite, where no server-side ON UPDATE
//!   equivalent exists, update-time values are resolved at the write boundary
//!   instead.
//!
//! ## Module Overview
//!
//! - [`backend`] - The [`Backend`](backend::Backend) identifier and its DDL
//!   capability table
//! - [`value`] - The backend-agnostic [`Value`](value::Value) enum
//! - [`fields`] - The [`Field`](fields::Field) trait and the two descriptors
//! - [`checks`] - Configuration check messages
//! - [`schema`] - Column and `CREATE TABLE` DDL assembly
//! - [`save`] - The record-level pre-save transform
//!
//! Query compilation, connections, and migration execution remain the host
//! framework's responsibility; this crate only produces DDL type strings and
//! resolves outgoing write values.

// These clippy lints are intentionally allowed:
// - struct_excessive_bools: the timestamp field mirrors Django's option API
//   which is boolean-heavy by design
// - doc_markdown: backtick requirements for documentation items are too strict
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::doc_markdown)]

pub mod backend;
pub mod checks;
pub mod error;
pub mod fields;
pub mod save;
pub mod schema;
pub mod value;

// Re-export the most commonly used types at the crate root.
pub use backend::Backend;
pub use checks::{CheckLevel, CheckMessage};
pub use error::{FieldError, FieldResult};
pub use fields::{Field, FixedCharField, TimestampField};
pub use save::pre_save_record;
pub use schema::{column_sql, create_table_sql};
pub use value::Value;
