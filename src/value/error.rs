//! Parse errors raised by the value objects.

use std::fmt;

/// Which unit a value object represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Calendar date, `YYYY-MM-DD`
    Date,
    /// Wall-clock time, `HH:MM:SS`
    Time,
}

impl ValueKind {
    /// Human-readable grammar used in error messages
    pub fn expected_layout(self) -> &'static str {
        match self {
            ValueKind::Date => "YYYY-MM-DD",
            ValueKind::Time => "HH:MM:SS",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Date => write!(f, "date"),
            ValueKind::Time => write!(f, "time"),
        }
    }
}

/// Error returned when a string cannot be turned into a value object
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueParseError {
    /// The input does not follow the expected grammar
    Malformed {
        kind: ValueKind,
        input: String,
        source: chrono::format::ParseError,
    },
    /// The components are well-formed but do not name a real date or time
    OutOfRange { kind: ValueKind, input: String },
}

impl ValueParseError {
    pub(crate) fn malformed(kind: ValueKind, input: &str, source: chrono::format::ParseError) -> Self {
        ValueParseError::Malformed {
            kind,
            input: input.to_string(),
            source,
        }
    }

    /// The unit the failed input was meant to be
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueParseError::Malformed { kind, .. } | ValueParseError::OutOfRange { kind, .. } => *kind,
        }
    }

    /// The rejected input
    pub fn input(&self) -> &str {
        match self {
            ValueParseError::Malformed { input, .. } | ValueParseError::OutOfRange { input, .. } => input,
        }
    }
}

impl fmt::Display for ValueParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueParseError::Malformed { kind, input, source } => write!(
                f,
                "Invalid {} string '{}': expected {} ({})",
                kind,
                input,
                kind.expected_layout(),
                source
            ),
            ValueParseError::OutOfRange { kind, input } => {
                write!(f, "{} out of range: '{}'", kind, input)
            }
        }
    }
}

impl std::error::Error for ValueParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ValueParseError::Malformed { source, .. } => Some(source),
            ValueParseError::OutOfRange { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_layout_and_input() {
        let source = chrono::NaiveDate::parse_from_str("nope", "%Y-%m-%d").unwrap_err();
        let err = ValueParseError::malformed(ValueKind::Date, "nope", source);
        let msg = err.to_string();
        assert!(msg.contains("'nope'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert_eq!(err.kind(), ValueKind::Date);
        assert_eq!(err.input(), "nope");
    }

    #[test]
    fn test_out_of_range_has_no_source() {
        use std::error::Error;
        let err = ValueParseError::OutOfRange {
            kind: ValueKind::Time,
            input: "25:00:00".to_string(),
        };
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), "time out of range: '25:00:00'");
    }
}
