//! Tree-engine error types.

use thiserror::Error;

use crate::node::NodeKind;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Errors produced by the tree engine.
///
/// All fallible tree operations report through this type, wrapped in
/// [`JsonOutcome`]. Navigation *reads* (`get_text`, `pointer_get`) never
/// produce it; they return `Option` instead.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JsonError {
    /// Input text could not be parsed as JSON.
    #[error("JSON parsing failed: {detail}")]
    Parse { detail: String },

    /// A value could not be serialized to JSON text.
    #[error("JSON serialization failed: {detail}")]
    Serialize { detail: String },

    /// A shape-to-shape coercion through the tree failed.
    #[error("type conversion failed: {detail}")]
    Conversion { detail: String },

    /// A path write hit a node of the wrong shape.
    #[error("cannot {operation} on {kind} node at segment '{segment}'")]
    Navigation {
        operation: &'static str,
        kind: NodeKind,
        segment: String,
    },

    /// Input text was empty or blank.
    #[error("JSON input is empty")]
    EmptyInput,
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl JsonError {
    /// Create a parse error from any displayable diagnostic.
    pub fn parse(detail: impl ToString) -> Self {
        Self::Parse {
            detail: detail.to_string(),
        }
    }

    /// Create a serialization error.
    pub fn serialize(detail: impl ToString) -> Self {
        Self::Serialize {
            detail: detail.to_string(),
        }
    }

    /// Create a conversion error.
    pub fn conversion(detail: impl ToString) -> Self {
        Self::Conversion {
            detail: detail.to_string(),
        }
    }

    /// Create a navigation error for a path write.
    pub fn navigation(operation: &'static str, kind: NodeKind, segment: impl Into<String>) -> Self {
        Self::Navigation {
            operation,
            kind,
            segment: segment.into(),
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl JsonError {
    /// Stable code for monitoring.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Parse { .. } => "JSON_PARSE_ERROR",
            Self::Serialize { .. } => "JSON_SERIALIZE_ERROR",
            Self::Conversion { .. } => "JSON_CONVERSION_ERROR",
            Self::Navigation { .. } => "JSON_NAVIGATION_ERROR",
            Self::EmptyInput => "JSON_EMPTY_INPUT",
        }
    }

    /// `true` when the caller's input is at fault.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Parse { .. } | Self::Conversion { .. } | Self::Navigation { .. } | Self::EmptyInput
        )
    }
}

// ============================================================================
// EXTERNAL ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for JsonError {
    fn from(error: serde_json::Error) -> Self {
        // The structured serde diagnostic is collapsed into a string; the
        // original line/column detail survives in the message only.
        Self::parse(error)
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Outcome alias for tree-engine operations.
pub type JsonOutcome<T> = keel_outcome::Outcome<JsonError, T>;
