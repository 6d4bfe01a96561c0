//! # simple-datetime-types
//!
//! Date-only and time-only value objects, and the column types that store
//! them in native `DATE` / `TIME` columns as `Y-m-d` / `H:i:s` text.
//!
//! ```rust
//! use simple_datetime_types::{SimpleDateImmutable, SimpleValue, SIMPLE_DATE_IMMUTABLE};
//!
//! let original = SimpleDateImmutable::new(2025, 12, 25)?;
//! let stored = SIMPLE_DATE_IMMUTABLE.convert_value_to_database(Some(&original))?;
//! assert_eq!(stored.as_deref(), Some("2025-12-25"));
//!
//! let restored = SIMPLE_DATE_IMMUTABLE.convert_text_to_value(stored.as_deref())?;
//! assert!(restored.is_some_and(|d| d.is_same(&original)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod types;
pub mod value;

pub use config::DatabaseConfig;
pub use error::TypeError;
pub use types::{
    default_registry, ColumnKind, ColumnMeta, ColumnType, ColumnValue, DatabaseInput, MySqlPlatform,
    Platform, PlatformKind, PostgresPlatform, SqlitePlatform, TypeBinding, TypeRegistry, SIMPLE_DATE,
    SIMPLE_DATE_IMMUTABLE, SIMPLE_TIME, SIMPLE_TIME_IMMUTABLE,
};
pub use value::{
    Formattable, SimpleDate, SimpleDateImmutable, SimpleTime, SimpleTimeImmutable, SimpleValue,
    ValueKind, ValueParseError,
};
