//! Error type for column type operations.
//!
//! This module provides the `TypeError` enum returned by conversions, name
//! lookups and the type registry.

use crate::value::ValueParseError;

/// Error type for column type operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// A binding was built without a type name
    MissingName {
        /// Rust type the binding converts to
        value_type: &'static str,
    },
    /// The database string could not be turned into a value object.
    ///
    /// Displays exactly as the value object's own error.
    Parse(ValueParseError),
    /// A formattable value could not render the column's pattern
    Format {
        type_name: &'static str,
        pattern: &'static str,
    },
    /// The SQL value is neither text nor a chrono date/time
    UnsupportedValue(String),
    /// No type registered under this name
    UnknownType(String),
    /// A type is already registered under this name
    DuplicateType(String),
}

impl std::fmt::Display for TypeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeError::MissingName { value_type } => write!(
                f,
                "Column type for {} doesn't define a type name",
                value_type
            ),
            TypeError::Parse(e) => write!(f, "{}", e),
            TypeError::Format { type_name, pattern } => write!(
                f,
                "Value cannot be formatted as '{}' for column type {}",
                pattern, type_name
            ),
            TypeError::UnsupportedValue(value) => {
                write!(f, "Unsupported SQL value for a date/time column: {}", value)
            }
            TypeError::UnknownType(name) => write!(f, "Unknown column type: {}", name),
            TypeError::DuplicateType(name) => {
                write!(f, "Column type {} is already registered", name)
            }
        }
    }
}

impl std::error::Error for TypeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TypeError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValueParseError> for TypeError {
    fn from(error: ValueParseError) -> Self {
        TypeError::Parse(error)
    }
}

impl TypeError {
    /// Whether this is a configuration problem rather than a bad value
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            TypeError::MissingName { .. } | TypeError::UnknownType(_) | TypeError::DuplicateType(_)
        )
    }
}
