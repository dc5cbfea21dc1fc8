//! Error taxonomy for temporal parsing and conversion.

use keel_outcome::Outcome;
use thiserror::Error;

/// Outcome specialized to temporal failures.
pub type TimeOutcome<T> = Outcome<TimeError, T>;

/// Errors produced while parsing date text or converting temporal inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Input text was empty or whitespace-only.
    #[error("date text is empty")]
    EmptyInput,

    /// No registered pattern matched the input text.
    #[error("unable to parse date: {input}")]
    Unparseable { input: String },

    /// A structured input could not be converted to the requested shape.
    #[error("date conversion failed: {detail}")]
    Conversion { detail: String },

    /// The input kind has no conversion to the requested shape.
    #[error("unsupported input kind: {kind}")]
    UnsupportedInput { kind: String },
}

impl TimeError {
    /// No pattern matched `input`.
    pub fn unparseable(input: impl Into<String>) -> Self {
        Self::Unparseable {
            input: input.into(),
        }
    }

    /// Conversion failure with a detail message.
    pub fn conversion(detail: impl Into<String>) -> Self {
        Self::Conversion {
            detail: detail.into(),
        }
    }

    /// The input kind is not convertible.
    pub fn unsupported(kind: impl Into<String>) -> Self {
        Self::UnsupportedInput { kind: kind.into() }
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "TIME_EMPTY_INPUT",
            Self::Unparseable { .. } => "TIME_UNPARSEABLE",
            Self::Conversion { .. } => "TIME_CONVERSION_ERROR",
            Self::UnsupportedInput { .. } => "TIME_UNSUPPORTED_INPUT",
        }
    }

    /// Whether the error was caused by caller-supplied input.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::Unparseable { .. } | Self::UnsupportedInput { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(TimeError::EmptyInput.to_string(), "date text is empty");
        assert_eq!(
            TimeError::unparseable("next tuesday").to_string(),
            "unable to parse date: next tuesday"
        );
        assert_eq!(
            TimeError::unsupported("duration").to_string(),
            "unsupported input kind: duration"
        );
    }

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(TimeError::EmptyInput.code(), "TIME_EMPTY_INPUT");
        assert_eq!(TimeError::unparseable("x").code(), "TIME_UNPARSEABLE");
        assert_eq!(TimeError::conversion("x").code(), "TIME_CONVERSION_ERROR");
    }

    #[test]
    fn test_client_error_classification() {
        assert!(TimeError::EmptyInput.is_client_error());
        assert!(TimeError::unparseable("x").is_client_error());
        assert!(!TimeError::conversion("overflow").is_client_error());
    }
}
