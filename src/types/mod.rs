//! Column types for simple date/time value objects
//!
//! - **`TypeBinding`** - generic conversion between database values and value objects
//! - **`ColumnKind`** - what differs between `DATE` and `TIME` columns
//! - **`Platform`** - dialect-specific column syntax
//! - **`TypeRegistry`** - lookup of column types by name

pub mod binding;
pub mod bindings;
pub mod kind;
pub mod platform;
pub mod registry;

pub use binding::{ColumnValue, Constructor, DatabaseInput, TypeBinding};
pub use bindings::{SIMPLE_DATE, SIMPLE_DATE_IMMUTABLE, SIMPLE_TIME, SIMPLE_TIME_IMMUTABLE};
pub use kind::{ColumnKind, ColumnMeta};
pub use platform::{MySqlPlatform, Platform, PlatformKind, PostgresPlatform, SqlitePlatform};
pub use registry::{default_registry, ColumnType, TypeRegistry};
