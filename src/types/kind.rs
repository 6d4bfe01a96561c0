//! Date and time column kinds.
//!
//! A `ColumnKind` fixes everything that differs between the date and the time
//! bindings: the storage pattern, the DDL request sent to the platform and
//! the native column type names it claims.

use super::platform::Platform;
use crate::value::date::DATE_PATTERN;
use crate::value::time::TIME_PATTERN;
use crate::value::ValueKind;
use sea_query::{Alias, ColumnDef};

/// The two column shapes a simple date/time type can map to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// `DATE` column, stored as `Y-m-d`
    Date,
    /// `TIME` column, stored as `H:i:s`
    Time,
}

impl ColumnKind {
    /// chrono pattern used when writing to the database
    pub fn format(self) -> &'static str {
        match self {
            ColumnKind::Date => DATE_PATTERN,
            ColumnKind::Time => TIME_PATTERN,
        }
    }

    /// Ask the platform for its native column syntax.
    pub fn sql_declaration(self, column: &ColumnMeta, platform: &dyn Platform) -> String {
        match self {
            ColumnKind::Date => platform.date_type_declaration_sql(column),
            ColumnKind::Time => platform.time_type_declaration_sql(column),
        }
    }

    /// Native column type names this kind claims during schema introspection
    pub fn mapped_database_types(self) -> &'static [&'static str] {
        match self {
            ColumnKind::Date => &["date"],
            ColumnKind::Time => &["time"],
        }
    }

    /// Map a column type name to a kind, if it is a date or a time.
    ///
    /// Accepts the spellings used by PostgreSQL, MySQL and SQLite:
    /// - "date" → `Date`
    /// - "time" / "time without time zone" → `Time`
    ///
    /// Zoned time columns (`timetz`, `time with time zone`) are not matched.
    pub fn from_type_name(col_type: &str) -> Option<Self> {
        let col_type_lower = col_type.trim().to_lowercase();
        let (base, rest) = match col_type_lower.find('(') {
            Some(open) => {
                let close = col_type_lower[open..]
                    .find(')')
                    .map_or(col_type_lower.len(), |i| open + i + 1);
                (col_type_lower[..open].trim(), col_type_lower[close..].trim())
            }
            None => match col_type_lower.find(' ') {
                Some(space) => (&col_type_lower[..space], col_type_lower[space..].trim()),
                None => (col_type_lower.as_str(), ""),
            },
        };
        match (base, rest) {
            ("date", "") => Some(ColumnKind::Date),
            ("time", "" | "without time zone") => Some(ColumnKind::Time),
            _ => None,
        }
    }
}

impl From<ValueKind> for ColumnKind {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::Date => ColumnKind::Date,
            ValueKind::Time => ColumnKind::Time,
        }
    }
}

/// Column metadata handed to the platform with a declaration request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMeta {
    /// Column name
    pub name: String,
    /// Whether the column is nullable
    pub nullable: bool,
}

impl Default for ColumnMeta {
    fn default() -> Self {
        Self {
            name: String::new(),
            nullable: true,
        }
    }
}

impl ColumnMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Convert to `SeaQuery`'s `ColumnDef` for schema building.
    ///
    /// The column type is the platform's own declaration, so the created
    /// column matches what `ColumnKind::sql_declaration` reports.
    pub fn to_column_def(&self, kind: ColumnKind, platform: &dyn Platform) -> ColumnDef {
        let mut def = ColumnDef::new(Alias::new(self.name.clone()));
        def.custom(Alias::new(kind.sql_declaration(self, platform)));

        if self.nullable {
            def.null();
        } else {
            def.not_null();
        }

        def
    }
}
