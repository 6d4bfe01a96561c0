//! Wall-clock times without date or timezone.
//!
//! Precision is whole seconds. A fractional part in the input (as some
//! databases return for `TIME(n)` columns) is accepted and discarded.
//! Leap seconds (`23:59:60`) are rejected; chrono keeps them as an extra
//! second of nanoseconds that the `H:i:s` layout can't carry through a
//! truncation.

use super::{ValueKind, ValueParseError};
use chrono::{NaiveTime, Timelike};

/// Canonical layout of a stored time (`H:i:s`)
pub const TIME_PATTERN: &str = "%H:%M:%S";

const TIME_INPUT_PATTERN: &str = "%H:%M:%S%.f";

fn parse_time(value: &str) -> Result<NaiveTime, ValueParseError> {
    let time = NaiveTime::parse_from_str(value, TIME_INPUT_PATTERN)
        .map_err(|e| ValueParseError::malformed(ValueKind::Time, value, e))?;
    truncate_subsec(time).ok_or_else(|| ValueParseError::OutOfRange {
        kind: ValueKind::Time,
        input: value.to_string(),
    })
}

/// Drop the fraction; `None` for a leap second.
fn truncate_subsec(time: NaiveTime) -> Option<NaiveTime> {
    if time.nanosecond() >= 1_000_000_000 {
        return None;
    }
    time.with_nanosecond(0)
}

fn hms(hour: u32, minute: u32, second: u32) -> Result<NaiveTime, ValueParseError> {
    NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| ValueParseError::OutOfRange {
        kind: ValueKind::Time,
        input: format!("{hour:02}:{minute:02}:{second:02}"),
    })
}

simple_value! {
    /// A time of day that the owning application may reassign in place.
    SimpleTime(NaiveTime), kind = ValueKind::Time, parse = parse_time, pattern = TIME_PATTERN
}

simple_value! {
    /// A time of day fixed at construction.
    SimpleTimeImmutable(NaiveTime), kind = ValueKind::Time, parse = parse_time, pattern = TIME_PATTERN
}

macro_rules! time_accessors {
    ($($name:ident),+) => {
        $(
            impl $name {
                /// Build from hour, minute and second.
                pub fn new(hour: u32, minute: u32, second: u32) -> Result<Self, ValueParseError> {
                    hms(hour, minute, second).map(Self)
                }

                pub fn hour(&self) -> u32 {
                    self.0.hour()
                }

                pub fn minute(&self) -> u32 {
                    self.0.minute()
                }

                pub fn second(&self) -> u32 {
                    self.0.second()
                }
            }
        )+
    };
}

time_accessors!(SimpleTime, SimpleTimeImmutable);

impl SimpleTime {
    /// Replace the wrapped time. Sub-second precision is dropped; a leap
    /// second is rejected and leaves the value unchanged.
    pub fn set(&mut self, time: NaiveTime) -> Result<(), ValueParseError> {
        self.0 = truncate_subsec(time).ok_or_else(|| ValueParseError::OutOfRange {
            kind: ValueKind::Time,
            input: time.to_string(),
        })?;
        Ok(())
    }

    /// Replace the wrapped time from its components; unchanged on error.
    pub fn set_time(&mut self, hour: u32, minute: u32, second: u32) -> Result<(), ValueParseError> {
        self.0 = hms(hour, minute, second)?;
        Ok(())
    }
}

impl SimpleTimeImmutable {
    /// A copy holding a different time.
    pub fn with_time(self, hour: u32, minute: u32, second: u32) -> Result<Self, ValueParseError> {
        Self::new(hour, minute, second)
    }
}

impl From<SimpleTime> for SimpleTimeImmutable {
    fn from(value: SimpleTime) -> Self {
        Self(value.0)
    }
}

impl From<SimpleTimeImmutable> for SimpleTime {
    fn from(value: SimpleTimeImmutable) -> Self {
        Self(value.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::SimpleValue;

    #[test]
    fn test_from_string() {
        let time = SimpleTime::from_string("14:30:45").unwrap();
        assert_eq!((time.hour(), time.minute(), time.second()), (14, 30, 45));
        assert_eq!(time.to_string(), "14:30:45");
    }

    #[test]
    fn test_fraction_is_discarded() {
        let time = SimpleTimeImmutable::from_string("09:15:30.250").unwrap();
        assert_eq!(time.to_string(), "09:15:30");
        assert!(time.is_same(&SimpleTime::new(9, 15, 30).unwrap()));
    }

    #[test]
    fn test_rejects_dates_and_garbage() {
        assert!(SimpleTime::from_string("2025-01-15").is_err());
        assert!(SimpleTime::from_string("24:00:00").is_err());
        assert!(SimpleTimeImmutable::from_string("noon").is_err());
    }

    #[test]
    fn test_new_out_of_range() {
        let err = SimpleTime::new(23, 60, 0).unwrap_err();
        assert_eq!(err.input(), "23:60:00");
        assert_eq!(err.kind(), ValueKind::Time);
    }

    #[test]
    fn test_mutable_setters() {
        let mut time = SimpleTime::new(0, 0, 0).unwrap();
        time.set_time(23, 59, 59).unwrap();
        assert_eq!(time.to_string(), "23:59:59");
        time.set(NaiveTime::from_hms_milli_opt(12, 0, 0, 500).unwrap()).unwrap();
        assert_eq!(time.native(), NaiveTime::from_hms_opt(12, 0, 0).unwrap());
    }

    #[test]
    fn test_leap_second_is_rejected() {
        let err = SimpleTime::from_string("23:59:60").unwrap_err();
        assert_eq!(err.kind(), ValueKind::Time);
        assert_eq!(err.input(), "23:59:60");
        assert!(matches!(err, ValueParseError::OutOfRange { .. }));
        assert!(SimpleTimeImmutable::from_string("23:59:60.5").is_err());

        let mut time = SimpleTime::new(23, 59, 59).unwrap();
        let leap = NaiveTime::from_hms_milli_opt(23, 59, 59, 1_500).unwrap();
        assert!(time.set(leap).is_err());
        assert_eq!(time.to_string(), "23:59:59");
    }

    #[test]
    fn test_immutable_with_time_leaves_original() {
        let original = SimpleTimeImmutable::new(16, 45, 0).unwrap();
        let changed = original.with_time(8, 0, 0).unwrap();
        assert_eq!(original.to_string(), "16:45:00");
        assert_eq!(changed.to_string(), "08:00:00");
    }

    #[test]
    fn test_format_with_other_pattern() {
        let time = SimpleTime::new(7, 5, 9).unwrap();
        assert_eq!(time.format("%H%M").unwrap(), "0705");
        assert!(time.format("%Y").is_err());
    }
}
