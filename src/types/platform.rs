//! Database platform hints.
//!
//! A `Platform` knows how its SQL dialect spells native `DATE` and `TIME`
//! columns and which `SeaQuery` builder renders its DDL.

use super::kind::ColumnMeta;
use sea_query::{MysqlQueryBuilder, PostgresQueryBuilder, SqliteQueryBuilder, TableCreateStatement};
use serde::Deserialize;

/// Column-syntax rules of a target database
pub trait Platform: Send + Sync {
    /// Short platform name used in logs
    fn name(&self) -> &'static str;

    /// Native DDL for a date-only column
    fn date_type_declaration_sql(&self, column: &ColumnMeta) -> String;

    /// Native DDL for a time-only column
    fn time_type_declaration_sql(&self, column: &ColumnMeta) -> String;

    /// Render a `CREATE TABLE` statement in this dialect
    fn create_table_sql(&self, table: &TableCreateStatement) -> String;
}

/// PostgreSQL: `DATE` and `TIME(0) WITHOUT TIME ZONE`
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresPlatform;

impl Platform for PostgresPlatform {
    fn name(&self) -> &'static str {
        "postgresql"
    }

    fn date_type_declaration_sql(&self, _column: &ColumnMeta) -> String {
        "DATE".to_string()
    }

    fn time_type_declaration_sql(&self, _column: &ColumnMeta) -> String {
        "TIME(0) WITHOUT TIME ZONE".to_string()
    }

    fn create_table_sql(&self, table: &TableCreateStatement) -> String {
        table.build(PostgresQueryBuilder)
    }
}

/// MySQL / MariaDB: `DATE` and `TIME`
#[derive(Debug, Clone, Copy, Default)]
pub struct MySqlPlatform;

impl Platform for MySqlPlatform {
    fn name(&self) -> &'static str {
        "mysql"
    }

    fn date_type_declaration_sql(&self, _column: &ColumnMeta) -> String {
        "DATE".to_string()
    }

    fn time_type_declaration_sql(&self, _column: &ColumnMeta) -> String {
        "TIME".to_string()
    }

    fn create_table_sql(&self, table: &TableCreateStatement) -> String {
        table.build(MysqlQueryBuilder)
    }
}

/// SQLite stores both as text; the declared names only steer type affinity.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlitePlatform;

impl Platform for SqlitePlatform {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn date_type_declaration_sql(&self, _column: &ColumnMeta) -> String {
        "DATE".to_string()
    }

    fn time_type_declaration_sql(&self, _column: &ColumnMeta) -> String {
        "TIME".to_string()
    }

    fn create_table_sql(&self, table: &TableCreateStatement) -> String {
        table.build(SqliteQueryBuilder)
    }
}

/// Platform selector, as written in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    #[default]
    #[serde(alias = "postgresql", alias = "pgsql")]
    Postgres,
    #[serde(alias = "mariadb")]
    MySql,
    Sqlite,
}

impl PlatformKind {
    /// The platform implementation for this selector
    pub fn platform(self) -> &'static dyn Platform {
        match self {
            PlatformKind::Postgres => &PostgresPlatform,
            PlatformKind::MySql => &MySqlPlatform,
            PlatformKind::Sqlite => &SqlitePlatform,
        }
    }
}
