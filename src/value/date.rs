//! Calendar dates without time or timezone.

use super::{ValueKind, ValueParseError};
use chrono::{Datelike, NaiveDate};

/// Canonical layout of a stored date (`Y-m-d`)
pub const DATE_PATTERN: &str = "%Y-%m-%d";

fn parse_date(value: &str) -> Result<NaiveDate, ValueParseError> {
    NaiveDate::parse_from_str(value, DATE_PATTERN)
        .map_err(|e| ValueParseError::malformed(ValueKind::Date, value, e))
}

fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValueParseError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| ValueParseError::OutOfRange {
        kind: ValueKind::Date,
        input: format!("{year:04}-{month:02}-{day:02}"),
    })
}

simple_value! {
    /// A calendar date that the owning application may reassign in place.
    SimpleDate(NaiveDate), kind = ValueKind::Date, parse = parse_date, pattern = DATE_PATTERN
}

simple_value! {
    /// A calendar date fixed at construction.
    SimpleDateImmutable(NaiveDate), kind = ValueKind::Date, parse = parse_date, pattern = DATE_PATTERN
}

macro_rules! date_accessors {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Build from year, month and day.
                pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ValueParseError> {
                    ymd(year, month, day).map(Self)
                }

                pub fn year(&self) -> i32 {
                    self.0.year()
                }

                pub fn month(&self) -> u32 {
                    self.0.month()
                }

                pub fn day(&self) -> u32 {
                    self.0.day()
                }
            }
        )+
    };
}

date_accessors!(SimpleDate, SimpleDateImmutable);

impl SimpleDate {
    /// Replace the wrapped date.
    pub fn set(&mut self, date: NaiveDate) {
        self.0 = date;
    }

    /// Replace the wrapped date from its components; unchanged on error.
    pub fn set_date(&mut self, year: i32, month: u32, day: u32) -> Result<(), ValueParseError> {
        self.0 = ymd(year, month, day)?;
        Ok(())
    }
}

impl SimpleDateImmutable {
    /// A copy holding a different date.
    pub fn with_date(self, year: i32, month: u32, day: u32) -> Result<Self, ValueParseError> {
        Self::new(year, month, day)
    }
}

impl From<SimpleDate> for SimpleDateImmutable {
    fn from(value: SimpleDate) -> Self {
        Self(value.0)
    }
}

impl From<SimpleDateImmutable> for SimpleDate {
    fn from(value: SimpleDateImmutable) -> Self {
        Self(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SimpleValue;

    #[test]
    fn test_from_string() {
        let date = SimpleDate::from_string("2025-01-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2025, 1, 15));
        assert_eq!(date.to_string(), "2025-01-15");
    }

    #[test]
    fn test_rejects_time_and_garbage() {
        assert!(SimpleDate::from_string("14:30:45").is_err());
        assert!(SimpleDate::from_string("2025-02-30").is_err());
        assert!(SimpleDateImmutable::from_string("").is_err());
        let err = "not-a-date".parse::<SimpleDateImmutable>().unwrap_err();
        assert_eq!(err.kind(), ValueKind::Date);
    }

    #[test]
    fn test_new_out_of_range() {
        let err = SimpleDate::new(2023, 2, 29).unwrap_err();
        assert_eq!(
            err,
            ValueParseError::OutOfRange {
                kind: ValueKind::Date,
                input: "2023-02-29".to_string()
            }
        );
    }

    #[test]
    fn test_mutable_set_date_keeps_value_on_error() {
        let mut date = SimpleDate::new(2025, 6, 15).unwrap();
        date.set_date(2025, 12, 25).unwrap();
        assert_eq!(date.to_string(), "2025-12-25");
        assert!(date.set_date(2025, 13, 1).is_err());
        assert_eq!(date.to_string(), "2025-12-25");
    }

    #[test]
    fn test_immutable_with_date_leaves_original() {
        let original = SimpleDateImmutable::new(2025, 6, 15).unwrap();
        let changed = original.with_date(2026, 1, 1).unwrap();
        assert_eq!(original.to_string(), "2025-06-15");
        assert_eq!(changed.to_string(), "2026-01-01");
    }

    #[test]
    fn test_is_same_across_mutability() {
        let mutable = SimpleDate::from_string("2000-02-29").unwrap();
        let immutable = SimpleDateImmutable::from(mutable);
        assert!(mutable.is_same(&immutable));
        assert!(immutable.is_same(&SimpleDate::from(immutable)));
        assert!(!immutable.is_same(&SimpleDate::new(2000, 3, 1).unwrap()));
    }

    #[test]
    fn test_serde_as_string() {
        let date = SimpleDateImmutable::new(2099, 12, 31).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2099-12-31\"");
        let back: SimpleDateImmutable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
        assert!(serde_json::from_str::<SimpleDate>("\"31/12/2099\"").is_err());
    }
}
