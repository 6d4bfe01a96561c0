//! `TypeBinding` - conversion between database values and value objects
//!
//! A binding is a plain configuration record: a type name, a column kind and
//! the function that builds the value object from its string form. Every
//! conversion goes through the same generic code below; the four concrete
//! column types in [`super::bindings`] are just four instances of it.
//!
//! ## Reading
//!
//! ```rust
//! use simple_datetime_types::{ColumnValue, SimpleDate, SIMPLE_DATE};
//!
//! let date = SIMPLE_DATE.convert_to_value(ColumnValue::from("2025-01-15"))?;
//! assert_eq!(date, Some(SimpleDate::new(2025, 1, 15)?));
//!
//! // NULL and '' both read as absent
//! assert_eq!(SIMPLE_DATE.convert_text_to_value(Some(""))?, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing
//!
//! ```rust
//! use simple_datetime_types::{DatabaseInput, SimpleTime, SIMPLE_TIME};
//!
//! let time = SimpleTime::new(14, 30, 45)?;
//! let stored = SIMPLE_TIME.convert_to_database_value(Some(DatabaseInput::formattable(&time)))?;
//! assert_eq!(stored.as_deref(), Some("14:30:45"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use super::kind::{ColumnKind, ColumnMeta};
use super::platform::Platform;
use crate::error::TypeError;
use crate::value::{Formattable, ValueParseError};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use sea_query::Value;
use std::fmt;

#[cfg(feature = "tracing")]
use crate::metrics::tracing_helpers;

/// Builds a value object from the string stored in the database
pub type Constructor<T> = fn(&str) -> Result<T, ValueParseError>;

/// A value read from the database side, before conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValue<T> {
    /// SQL `NULL`
    Null,
    /// Text as returned by the driver
    Text(String),
    /// Already the target value object; passed through untouched
    Value(T),
}

impl<T> From<&str> for ColumnValue<T> {
    fn from(text: &str) -> Self {
        ColumnValue::Text(text.to_string())
    }
}

impl<T> From<String> for ColumnValue<T> {
    fn from(text: String) -> Self {
        ColumnValue::Text(text)
    }
}

impl<T> From<Option<&str>> for ColumnValue<T> {
    fn from(text: Option<&str>) -> Self {
        text.map_or(ColumnValue::Null, Into::into)
    }
}

impl<T> From<Option<String>> for ColumnValue<T> {
    fn from(text: Option<String>) -> Self {
        text.map_or(ColumnValue::Null, ColumnValue::Text)
    }
}

/// A value on its way to the database.
///
/// Values that can render the column's pattern are formatted with it; any
/// other value is written as its `Display` output, unchanged.
#[derive(Clone, Copy)]
pub enum DatabaseInput<'a> {
    Formattable(&'a dyn Formattable),
    Display(&'a dyn fmt::Display),
}

impl<'a> DatabaseInput<'a> {
    pub fn formattable(value: &'a dyn Formattable) -> Self {
        DatabaseInput::Formattable(value)
    }

    pub fn display(value: &'a dyn fmt::Display) -> Self {
        DatabaseInput::Display(value)
    }
}

impl fmt::Debug for DatabaseInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseInput::Formattable(_) => f.write_str("DatabaseInput::Formattable(..)"),
            DatabaseInput::Display(value) => write!(f, "DatabaseInput::Display({value})"),
        }
    }
}

/// Static description of one column type
pub struct TypeBinding<T> {
    name: Option<&'static str>,
    kind: ColumnKind,
    construct: Constructor<T>,
}

impl<T> Clone for TypeBinding<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypeBinding<T> {}

impl<T> fmt::Debug for TypeBinding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeBinding")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("value_type", &std::any::type_name::<T>())
            .finish()
    }
}

impl<T> TypeBinding<T> {
    /// A named binding
    pub const fn new(name: &'static str, kind: ColumnKind, construct: Constructor<T>) -> Self {
        Self {
            name: Some(name),
            kind,
            construct,
        }
    }

    /// A binding without a type name. Conversions work, but [`Self::name`]
    /// fails and registries refuse it.
    pub const fn unnamed(kind: ColumnKind, construct: Constructor<T>) -> Self {
        Self {
            name: None,
            kind,
            construct,
        }
    }

    /// The registry name of this type
    pub fn name(&self) -> Result<&'static str, TypeError> {
        self.name.ok_or(TypeError::MissingName {
            value_type: std::any::type_name::<T>(),
        })
    }

    fn label(&self) -> &'static str {
        self.name.unwrap_or("<unnamed>")
    }

    pub fn kind(&self) -> ColumnKind {
        self.kind
    }

    /// chrono pattern used when writing to the database
    pub fn format(&self) -> &'static str {
        self.kind.format()
    }

    /// Platform-native DDL fragment for a column of this type
    pub fn sql_declaration(&self, column: &ColumnMeta, platform: &dyn Platform) -> String {
        self.kind.sql_declaration(column, platform)
    }

    /// Native column type names this binding claims
    pub fn mapped_database_types(&self, _platform: &dyn Platform) -> Vec<&'static str> {
        self.kind.mapped_database_types().to_vec()
    }

    /// Convert a database value to the value object.
    ///
    /// - `Null` and empty text become `None`
    /// - a value object is returned as is
    /// - any other text goes through the binding's constructor; its parse
    ///   error is returned unchanged inside [`TypeError::Parse`]
    pub fn convert_to_value(&self, value: ColumnValue<T>) -> Result<Option<T>, TypeError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::conversion_span(self.label(), "to_value").entered();

        let result = match value {
            ColumnValue::Null => Ok(None),
            ColumnValue::Text(text) if text.is_empty() => Ok(None),
            ColumnValue::Value(value) => Ok(Some(value)),
            ColumnValue::Text(text) => {
                log::trace!("{}: parsing '{}'", self.label(), text);
                (self.construct)(&text).map(Some).map_err(TypeError::from)
            }
        };

        #[cfg(feature = "metrics")]
        crate::metrics::METRICS.record_conversion(self.label(), "to_value", result.is_ok());

        result
    }

    /// Shortcut for drivers that hand back text columns
    pub fn convert_text_to_value(&self, text: Option<&str>) -> Result<Option<T>, TypeError> {
        self.convert_to_value(ColumnValue::from(text))
    }

    /// Convert a value to the string stored in the database.
    ///
    /// `None` stays `None`. Formattable values are rendered with
    /// [`Self::format`]; plain `Display` values are written as they print.
    pub fn convert_to_database_value(
        &self,
        value: Option<DatabaseInput<'_>>,
    ) -> Result<Option<String>, TypeError> {
        #[cfg(feature = "tracing")]
        let _span = tracing_helpers::conversion_span(self.label(), "to_database").entered();

        let result = match value {
            None => Ok(None),
            Some(DatabaseInput::Formattable(value)) => value
                .format_with(self.format())
                .map(Some)
                .map_err(|_| TypeError::Format {
                    type_name: self.label(),
                    pattern: self.format(),
                }),
            Some(DatabaseInput::Display(value)) => Ok(Some(value.to_string())),
        };

        #[cfg(feature = "metrics")]
        crate::metrics::METRICS.record_conversion(self.label(), "to_database", result.is_ok());

        result
    }

    /// Convert a `SeaQuery` value to the value object.
    ///
    /// Text is handled like [`Self::convert_to_value`]. chrono dates, times and
    /// datetimes are accepted too: they are rendered with the column's pattern
    /// and then parsed, so a datetime read into a date column keeps its date.
    pub fn from_sql_value(&self, value: Value) -> Result<Option<T>, TypeError> {
        match value {
            Value::String(text) => self.convert_to_value(ColumnValue::from(text)),
            other => match self.chrono_text(&other)? {
                Some(text) => self.convert_to_value(ColumnValue::Text(text)),
                None => Ok(None),
            },
        }
    }

    /// Render a chrono-valued `SeaQuery` value with this column's pattern.
    fn chrono_text(&self, value: &Value) -> Result<Option<String>, TypeError> {
        let rendered = if let Ok(date) = <Option<NaiveDate> as sea_query::ValueType>::try_from(value.clone()) {
            date.map(|d| d.format_with(self.format()))
        } else if let Ok(time) = <Option<NaiveTime> as sea_query::ValueType>::try_from(value.clone()) {
            time.map(|t| t.format_with(self.format()))
        } else if let Ok(datetime) =
            <Option<NaiveDateTime> as sea_query::ValueType>::try_from(value.clone())
        {
            datetime.map(|dt| dt.format_with(self.format()))
        } else {
            return Err(TypeError::UnsupportedValue(format!("{value:?}")));
        };

        rendered.transpose().map_err(|_| TypeError::Format {
            type_name: self.label(),
            pattern: self.format(),
        })
    }
}

impl<T: Formattable> TypeBinding<T> {
    /// Typed shortcut for [`Self::convert_to_database_value`]
    pub fn convert_value_to_database(&self, value: Option<&T>) -> Result<Option<String>, TypeError> {
        self.convert_to_database_value(value.map(|v| DatabaseInput::Formattable(v)))
    }

    /// Convert the value object to a `SeaQuery` text value (`NULL` when absent).
    pub fn to_sql_value(&self, value: Option<&T>) -> Result<Value, TypeError> {
        Ok(Value::String(self.convert_value_to_database(value)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::platform::PostgresPlatform;
    use crate::value::{SimpleDateImmutable, SimpleTime};

    const DATE: TypeBinding<SimpleDateImmutable> =
        TypeBinding::new("test_date", ColumnKind::Date, SimpleDateImmutable::from_string);
    const TIME: TypeBinding<SimpleTime> =
        TypeBinding::new("test_time", ColumnKind::Time, SimpleTime::from_string);

    #[test]
    fn test_null_and_empty_are_absent() {
        assert_eq!(DATE.convert_to_value(ColumnValue::Null), Ok(None));
        assert_eq!(DATE.convert_to_value(ColumnValue::from("")), Ok(None));
        assert_eq!(TIME.convert_text_to_value(None), Ok(None));
    }

    #[test]
    fn test_parse_error_propagates() {
        let err = DATE.convert_to_value(ColumnValue::from("15.01.2025")).unwrap_err();
        let expected = SimpleDateImmutable::from_string("15.01.2025").unwrap_err();
        assert_eq!(err, TypeError::Parse(expected));
    }

    #[test]
    fn test_unnamed_binding() {
        let binding = TypeBinding::unnamed(ColumnKind::Date, SimpleDateImmutable::from_string);
        assert!(matches!(binding.name(), Err(TypeError::MissingName { .. })));
        // conversions still work
        assert!(binding.convert_text_to_value(Some("2025-01-15")).unwrap().is_some());
    }

    #[test]
    fn test_date_only_value_in_time_column_fails_to_format() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let err = TIME
            .convert_to_database_value(Some(DatabaseInput::formattable(&date)))
            .unwrap_err();
        assert_eq!(
            err,
            TypeError::Format {
                type_name: "test_time",
                pattern: "%H:%M:%S"
            }
        );
    }

    #[test]
    fn test_sql_value_text_and_null() {
        let value = DATE.from_sql_value(Value::String(Some("2025-06-15".to_string())));
        assert_eq!(value.unwrap().map(|d| d.to_string()), Some("2025-06-15".to_string()));
        assert_eq!(DATE.from_sql_value(Value::String(None)), Ok(None));
    }

    #[test]
    fn test_sql_value_from_chrono() {
        let date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let datetime = date.and_hms_opt(9, 15, 30).unwrap();

        let from_date = DATE.from_sql_value(Value::from(date)).unwrap().unwrap();
        assert_eq!(from_date.to_string(), "2025-03-10");

        let from_datetime = TIME.from_sql_value(Value::from(datetime)).unwrap().unwrap();
        assert_eq!(from_datetime.to_string(), "09:15:30");
    }

    #[test]
    fn test_sql_value_unsupported() {
        assert!(matches!(
            DATE.from_sql_value(Value::Int(Some(20250115))),
            Err(TypeError::UnsupportedValue(_))
        ));
    }

    #[test]
    fn test_to_sql_value() {
        let time = SimpleTime::new(8, 0, 0).unwrap();
        assert_eq!(
            TIME.to_sql_value(Some(&time)),
            Ok(Value::String(Some("08:00:00".to_string())))
        );
        assert_eq!(TIME.to_sql_value(None), Ok(Value::String(None)));
    }

    #[test]
    fn test_declaration_follows_kind() {
        let column = ColumnMeta::new("starts_at");
        assert_eq!(
            TIME.sql_declaration(&column, &PostgresPlatform),
            "TIME(0) WITHOUT TIME ZONE"
        );
        assert_eq!(DATE.mapped_database_types(&PostgresPlatform), vec!["date"]);
    }
}
