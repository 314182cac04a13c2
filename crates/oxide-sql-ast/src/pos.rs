//! Source location tracking for AST nodes.

use core::fmt;

/// The region of SQL text a node was parsed from.
///
/// Lines and columns are 1-based. A position of all zeroes means the node
/// was synthesized rather than parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SqlParserPos {
    /// Start line (inclusive).
    pub line: u32,
    /// Start column (inclusive).
    pub column: u32,
    /// End line (inclusive).
    pub end_line: u32,
    /// End column (inclusive).
    pub end_column: u32,
}

impl SqlParserPos {
    /// Position of synthesized nodes.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Creates a new position.
    #[must_use]
    pub const fn new(line: u32, column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            line,
            column,
            end_line,
            end_column,
        }
    }

    /// Creates a position covering a single character.
    #[must_use]
    pub const fn point(line: u32, column: u32) -> Self {
        Self::new(line, column, line, column)
    }

    /// Returns true for the position of synthesized nodes.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.line == 0 && self.column == 0 && self.end_line == 0 && self.end_column == 0
    }

    /// Merges two positions into one that covers both.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        if self.is_zero() {
            return other;
        }
        if other.is_zero() {
            return self;
        }
        let (line, column) = if self.line < other.line
            || (self.line == other.line && self.column <= other.column)
        {
            (self.line, self.column)
        } else {
            (other.line, other.column)
        };
        let (end_line, end_column) = if self.end_line > other.end_line
            || (self.end_line == other.end_line && self.end_column >= other.end_column)
        {
            (self.end_line, self.end_column)
        } else {
            (other.end_line, other.end_column)
        };
        Self::new(line, column, end_line, end_column)
    }
}

impl fmt::Display for SqlParserPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}
