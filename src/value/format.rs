//! The `Formattable` capability.
//!
//! Anything that can render itself through a chrono `strftime` pattern can be
//! written to a DATE or TIME column. The value objects implement it, and so do
//! chrono's own date/time types, which lets a `NaiveDateTime` or a zoned
//! `DateTime` be stored in a DATE column (the time part is dropped) or a TIME
//! column (the date part is dropped).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt::{self, Display, Write};

/// A value that can be rendered with a chrono format pattern
pub trait Formattable {
    /// Render `self` with `pattern`.
    ///
    /// Fails with [`fmt::Error`] when the pattern asks for fields the value
    /// does not carry, e.g. `%H` on a date-only value.
    fn format_with(&self, pattern: &str) -> Result<String, fmt::Error>;
}

/// Writes a chrono `DelayedFormat` into a fresh string without panicking on
/// unsupported fields.
pub(crate) fn render(formatted: impl Display) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write!(out, "{formatted}")?;
    Ok(out)
}

impl Formattable for NaiveDate {
    fn format_with(&self, pattern: &str) -> Result<String, fmt::Error> {
        render(self.format(pattern))
    }
}

impl Formattable for NaiveTime {
    fn format_with(&self, pattern: &str) -> Result<String, fmt::Error> {
        render(self.format(pattern))
    }
}

impl Formattable for NaiveDateTime {
    fn format_with(&self, pattern: &str) -> Result<String, fmt::Error> {
        render(self.format(pattern))
    }
}

impl<Tz> Formattable for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    fn format_with(&self, pattern: &str) -> Result<String, fmt::Error> {
        render(self.format(pattern))
    }
}

impl<T: Formattable + ?Sized> Formattable for &T {
    fn format_with(&self, pattern: &str) -> Result<String, fmt::Error> {
        (**self).format_with(pattern)
    }
}
