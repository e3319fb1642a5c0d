//! Database backend identifiers and their DDL capabilities.
//!
//! The three supported backend families differ in their timestamp column
//! keyword and in whether they support a server-side ON UPDATE trigger
//! modifier. Those differences are captured here as a small capability table
//! so the field descriptors can share a single clause-assembly routine
//! instead of one near-identical function per backend.

use std::fmt;

/// The database backend family a DDL type string targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Backend {
    /// MySQL and MariaDB.
    MySql,
    /// PostgreSQL.
    PostgreSql,
    /// SQLite.
    Sqlite,
}

impl Backend {
    /// Returns the canonical vendor identifier (e.g. "mysql").
    pub const fn vendor(self) -> &'static str {
        match self {
            Self::MySql => "mysql",
            Self::PostgreSql => "postgresql",
            Self::Sqlite => "sqlite",
        }
    }

    /// Maps a connection's vendor string to a backend family.
    ///
    /// Returns `None` for unrecognized vendors, in which case callers should
    /// fall back to the host framework's default type rendering.
    pub fn from_vendor(vendor: &str) -> Option<Self> {
        match vendor {
            "mysql" | "mariadb" => Some(Self::MySql),
            "postgresql" => Some(Self::PostgreSql),
            "sqlite" | "sqlite3" => Some(Self::Sqlite),
            _ => None,
        }
    }

    /// Returns the column keyword used for timezone-naive system timestamps.
    ///
    /// None of the three backends map their framework's default datetime
    /// concept onto a type that also supports auto-update semantics, so each
    /// keyword is chosen explicitly: MySQL's `TIMESTAMP` carries the native
    /// `CURRENT_TIMESTAMP` modifiers, PostgreSQL's `TIMESTAMP WITHOUT TIME
    /// ZONE` is its explicitly timezone-free variant, and SQLite stores
    /// datetimes as `DATETIME` text.
    pub const fn timestamp_column_type(self) -> &'static str {
        match self {
            Self::MySql => "TIMESTAMP",
            Self::PostgreSql => "TIMESTAMP WITHOUT TIME ZONE",
            Self::Sqlite => "DATETIME",
        }
    }

    /// Returns `true` if the backend supports an `ON UPDATE CURRENT_TIMESTAMP`
    /// column modifier.
    ///
    /// Only the MySQL family does. The other backends handle update-time
    /// values at the write boundary instead; see
    /// [`TimestampField::pre_save`](crate::fields::TimestampField).
    pub const fn supports_on_update(self) -> bool {
        matches!(self, Self::MySql)
    }

    /// Quotes a table or column identifier for this backend's dialect.
    pub fn quote_name(self, name: &str) -> String {
        match self {
            Self::MySql => format!("`{name}`"),
            Self::PostgreSql | Self::Sqlite => format!("\"{name}\""),
        }
    }

    /// All supported backend families, in a stable order.
    pub const ALL: [Self; 3] = [Self::MySql, Self::PostgreSql, Self::Sqlite];
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vendor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_round_trip() {
        for backend in Backend::ALL {
            assert_eq!(Backend::from_vendor(backend.vendor()), Some(backend));
        }
    }

    #[test]
    fn test_from_vendor_aliases() {
        assert_eq!(Backend::from_vendor("mariadb"), Some(Backend::MySql));
        assert_eq!(Backend::from_vendor("sqlite3"), Some(Backend::Sqlite));
    }

    #[test]
    fn test_from_vendor_unknown() {
        assert_eq!(Backend::from_vendor("oracle"), None);
        assert_eq!(Backend::from_vendor(""), None);
    }

    #[test]
    fn test_timestamp_column_type() {
        assert_eq!(Backend::MySql.timestamp_column_type(), "TIMESTAMP");
        assert_eq!(
            Backend::PostgreSql.timestamp_column_type(),
            "TIMESTAMP WITHOUT TIME ZONE"
        );
        assert_eq!(Backend::Sqlite.timestamp_column_type(), "DATETIME");
    }

    #[test]
    fn test_supports_on_update() {
        assert!(Backend::MySql.supports_on_update());
        assert!(!Backend::PostgreSql.supports_on_update());
        assert!(!Backend::Sqlite.supports_on_update());
    }

    #[test]
    fn test_quote_name() {
        assert_eq!(Backend::MySql.quote_name("ts_field"), "`ts_field`");
        assert_eq!(Backend::PostgreSql.quote_name("ts_field"), "\"ts_field\"");
        assert_eq!(Backend::Sqlite.quote_name("ts_field"), "\"ts_field\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Backend::PostgreSql.to_string(), "postgresql");
    }
}
