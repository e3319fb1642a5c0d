//! Timezone-naive system timestamp field.

use chrono::{NaiveDateTime, Utc};

use crate::backend::Backend;
use crate::checks::CheckMessage;
use crate::error::FieldResult;
use crate::fields::{pass_through, quote_literal, Field};
use crate::value::Value;

/// A field descriptor for timezone-free system timestamp columns.
///
/// System timestamps record system-level events and moments in time; they are
/// record metadata, not domain data, which is why this field deliberately
/// opts out of timezone-aware storage.
///
/// On the MySQL family the column is a `TIMESTAMP`, whose native
/// `DEFAULT CURRENT_TIMESTAMP` and `ON UPDATE CURRENT_TIMESTAMP` modifiers
/// act as an implicit trigger. PostgreSQL (`TIMESTAMP WITHOUT TIME ZONE`) and
/// SQLite (`DATETIME`) have no ON UPDATE equivalent, so update-time values
/// for those backends are resolved in [`pre_save`](Self::pre_save) instead of
/// in DDL.
///
/// Exactly one option may claim authorship of the DEFAULT clause
/// (`auto_now`, `auto_now_add`, or an explicit default), and
/// `auto_now_update` independently claims the ON UPDATE behavior;
/// [`check`](Field::check) enforces this.
///
/// # Examples
///
/// ```
/// use forcedfields::{Backend, Field, TimestampField};
///
/// let field = TimestampField::new().auto_now();
/// assert_eq!(
///     field.db_type(Backend::MySql),
///     "TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP"
/// );
/// assert_eq!(
///     field.db_type(Backend::PostgreSql),
///     "TIMESTAMP WITHOUT TIME ZONE DEFAULT CURRENT_TIMESTAMP"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimestampField {
    auto_now: bool,
    auto_now_add: bool,
    auto_now_update: bool,
    null: bool,
    default: Option<Value>,
}

impl TimestampField {
    /// Creates a timestamp field with no options set.
    ///
    /// With no options the column gets no DEFAULT clause; a write that
    /// supplies no value for a non-nullable column then fails with an
    /// integrity error at the write boundary.
    pub const fn new() -> Self {
        Self {
            auto_now: false,
            auto_now_add: false,
            auto_now_update: false,
            null: false,
            default: None,
        }
    }

    /// Sets the column to the current timestamp on every write.
    #[must_use]
    pub const fn auto_now(mut self) -> Self {
        self.auto_now = true;
        self
    }

    /// Sets the column to the current timestamp on create only.
    #[must_use]
    pub const fn auto_now_add(mut self) -> Self {
        self.auto_now_add = true;
        self
    }

    /// Sets the column to the current timestamp on update only.
    ///
    /// Mutually exclusive with [`auto_now`](Self::auto_now), which already
    /// implies update-time behavior.
    #[must_use]
    pub const fn auto_now_update(mut self) -> Self {
        self.auto_now_update = true;
        self
    }

    /// Allows SQL NULL values in the column.
    #[must_use]
    pub const fn nullable(mut self) -> Self {
        self.null = true;
        self
    }

    /// Declares a DEFAULT value for the column.
    ///
    /// `Value::Null` renders as `DEFAULT NULL`. Datetime values (or strings
    /// parseable as datetimes) render as single-quoted timestamp literals.
    /// Anything else fails the configuration check.
    #[must_use]
    pub fn default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Runs configuration checks, returning the field if they pass.
    pub fn checked(self) -> FieldResult<Self> {
        crate::checks::require_valid(&self.check())?;
        Ok(self)
    }

    /// Resolves the write value against an explicit "now".
    ///
    /// [`pre_save`](Field::pre_save) delegates here with the current time;
    /// tests use this variant directly for determinism.
    pub fn pre_save_at(
        &self,
        supplied: Option<&Value>,
        add: bool,
        now: NaiveDateTime,
    ) -> FieldResult<Option<Value>> {
        if self.auto_now || (self.auto_now_update && !add) || (self.auto_now_add && add) {
            // An application-side concrete value rather than a NOW() SQL
            // expression: one backend's write path quotes all literal values,
            // which would corrupt a function call passed down the same path.
            Ok(Some(Value::DateTime(now)))
        } else {
            // auto_now_add still emits a DEFAULT clause, so an omitted value
            // on the update path defers to it rather than violating NOT NULL.
            let has_default = self.auto_now_add || self.default.is_some();
            pass_through(supplied, self.null, has_default)
        }
    }

    /// Renders the declared default as a DDL literal.
    fn default_literal(default: &Value) -> String {
        match default {
            Value::Null => "NULL".to_string(),
            Value::DateTime(dt) => quote_literal(&dt.to_string()),
            Value::String(s) => parse_datetime(s).map_or_else(
                || quote_literal(s),
                |dt| quote_literal(&dt.to_string()),
            ),
            other => quote_literal(&other.to_string()),
        }
    }
}

impl Field for TimestampField {
    fn db_type(&self, backend: Backend) -> String {
        let mut spec = vec![backend.timestamp_column_type().to_string()];

        // Exactly one option set owns the DEFAULT clause; first match wins.
        if self.auto_now || self.auto_now_add {
            spec.push("DEFAULT CURRENT_TIMESTAMP".to_string());
        } else if let Some(ref default) = self.default {
            spec.push(format!("DEFAULT {}", Self::default_literal(default)));
        }

        // Mutual exclusivity between auto_now and auto_now_update has already
        // been ensured by check() by the time DDL is rendered.
        if backend.supports_on_update() && (self.auto_now || self.auto_now_update) {
            spec.push("ON UPDATE CURRENT_TIMESTAMP".to_string());
        }

        spec.join(" ")
    }

    fn check(&self) -> Vec<CheckMessage> {
        let mut messages = Vec::new();

        let default_claims =
            [self.auto_now, self.auto_now_add, self.default.is_some()];
        if default_claims.iter().filter(|claimed| **claimed).count() > 1 {
            messages.push(CheckMessage::error(
                "The options auto_now, auto_now_add, and default are mutually exclusive. \
                 Only one of these options may be present.",
                None,
                Some("forcedfields.TimestampField"),
                Some("fields.E160"),
            ));
        }

        if self.auto_now && self.auto_now_update {
            messages.push(CheckMessage::error(
                "The option auto_now is mutually exclusive with the option auto_now_update.",
                None,
                Some("forcedfields.TimestampField"),
                Some("fields.E161"),
            ));
        }

        if let Some(ref default) = self.default {
            let coercible = matches!(default, Value::Null | Value::DateTime(_))
                || default.as_str().is_some_and(|s| parse_datetime(s).is_some());
            if !coercible {
                messages.push(CheckMessage::error(
                    "'default' must be a datetime value, a datetime string, or NULL.",
                    None,
                    Some("forcedfields.TimestampField"),
                    Some("fields.E162"),
                ));
            }
        }

        messages
    }

    fn is_nullable(&self) -> bool {
        self.null
    }

    fn default_value(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    fn pre_save(&self, supplied: Option<&Value>, add: bool) -> FieldResult<Option<Value>> {
        self.pre_save_at(supplied, add, Utc::now().naive_utc())
    }
}

/// Parses a datetime string in either space- or T-separated form.
fn parse_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"))
        .ok()
}
