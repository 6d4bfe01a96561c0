//! Date-only and time-only value objects
//!
//! Four wrappers over chrono's naive types:
//!
//! - **`SimpleDate`** / **`SimpleDateImmutable`** - calendar date, `YYYY-MM-DD`
//! - **`SimpleTime`** / **`SimpleTimeImmutable`** - wall-clock time, `HH:MM:SS`
//!
//! The mutable variants expose `set_*` methods; the immutable ones only offer
//! `with_*` methods that return a new value. Both variants of a unit convert
//! into each other and compare with [`SimpleValue::is_same`].

use std::fmt;
use std::str::FromStr;

/// Generates the parts every value object shares: parsing, formatting,
/// conversions to and from the chrono native type, and serde as a string.
macro_rules! simple_value {
    (
        $(#[$meta:meta])*
        $name:ident($native:ty), kind = $kind:expr, parse = $parse:path, pattern = $pattern:expr
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($native);

        impl $name {
            /// Build a value from its canonical string form.
            pub fn from_string(value: &str) -> Result<Self, $crate::value::ValueParseError> {
                $parse(value).map(Self)
            }

            /// Render with an arbitrary chrono pattern.
            pub fn format(&self, pattern: &str) -> Result<String, ::std::fmt::Error> {
                $crate::value::format::render(self.0.format(pattern))
            }
        }

        impl $crate::value::SimpleValue for $name {
            type Native = $native;
            const KIND: $crate::value::ValueKind = $kind;

            fn from_native(native: $native) -> Self {
                Self(native)
            }

            fn native(&self) -> $native {
                self.0
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::value::ValueParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0.format($pattern))
            }
        }

        impl $crate::value::Formattable for $name {
            fn format_with(&self, pattern: &str) -> Result<String, ::std::fmt::Error> {
                self.format(pattern)
            }
        }

        impl From<$native> for $name {
            fn from(native: $native) -> Self {
                Self(native)
            }
        }

        impl From<$name> for $native {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Self::from_string(&raw).map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub mod date;
pub mod error;
pub mod format;
mod postgres;
pub mod time;

pub use date::{SimpleDate, SimpleDateImmutable};
pub use error::{ValueKind, ValueParseError};
pub use format::Formattable;
pub use time::{SimpleTime, SimpleTimeImmutable};

/// Behaviour shared by the four value objects
pub trait SimpleValue:
    Formattable + fmt::Display + FromStr<Err = ValueParseError> + Copy + Send + Sync + 'static
{
    /// The chrono type being wrapped
    type Native: Copy + PartialEq + fmt::Debug;

    /// Whether this is a date or a time
    const KIND: ValueKind;

    /// Wrap a chrono value
    fn from_native(native: Self::Native) -> Self;

    /// The wrapped chrono value
    fn native(&self) -> Self::Native;

    /// Same instant in the same unit, regardless of mutability.
    fn is_same<O>(&self, other: &O) -> bool
    where
        O: SimpleValue<Native = Self::Native>,
    {
        self.native() == other.native()
    }
}
