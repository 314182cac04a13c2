//! Error type for dialect restriction.

use oxide_sql_ast::{SqlKind, SqlParserPos};

/// A construct outside the supported dialect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ValidationError {
    /// The statement uses a construct the engine does not support.
    #[error("{description} at {position}")]
    UnsupportedConstruct {
        /// Position of the offending node.
        position: SqlParserPos,
        /// What is not supported.
        description: String,
    },
}

impl ValidationError {
    /// Creates an error with a free-form description.
    #[must_use]
    pub fn new(position: SqlParserPos, description: impl Into<String>) -> Self {
        Self::UnsupportedConstruct {
            position,
            description: description.into(),
        }
    }

    /// Creates a `<name> is not supported` error.
    #[must_use]
    pub fn not_supported(position: SqlParserPos, name: impl AsRef<str>) -> Self {
        Self::new(position, format!("{} is not supported", name.as_ref()))
    }

    /// Creates the error for a call of an unsupported kind.
    #[must_use]
    pub fn unsupported_kind(position: SqlParserPos, kind: SqlKind) -> Self {
        Self::not_supported(position, kind.display_name())
    }

    /// Returns the position of the offending node.
    #[must_use]
    pub const fn position(&self) -> SqlParserPos {
        match self {
            Self::UnsupportedConstruct { position, .. } => *position,
        }
    }

    /// Returns what is not supported.
    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::UnsupportedConstruct { description, .. } => description,
        }
    }

    /// Renders the message with its full source range, the way the parser
    /// reports its own errors.
    #[must_use]
    pub fn context_message(&self) -> String {
        let position = self.position();
        format!(
            "From line {}, column {} to line {}, column {}: {}",
            position.line,
            position.column,
            position.end_line,
            position.end_column,
            self.description()
        )
    }
}

/// Result type for validation.
pub type Result<T> = std::result::Result<T, ValidationError>;
