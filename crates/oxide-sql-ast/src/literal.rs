//! Literal values and the symbolic flags carried as literals.

use core::fmt;

use crate::pos::SqlParserPos;
use crate::types::SqlTypeName;

/// Join variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum JoinType {
    /// `INNER JOIN`.
    Inner,
    /// `FULL OUTER JOIN`.
    Full,
    /// `CROSS JOIN`.
    Cross,
    /// `LEFT OUTER JOIN`.
    Left,
    /// `RIGHT OUTER JOIN`.
    Right,
    /// Semi-join produced by rewrites.
    LeftSemiJoin,
    /// Anti-join produced by rewrites.
    LeftAntiJoin,
    /// Implicit join from a comma-separated FROM list.
    Comma,
}

impl JoinType {
    /// Returns the upstream constant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Inner => "INNER",
            Self::Full => "FULL",
            Self::Cross => "CROSS",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
            Self::LeftSemiJoin => "LEFT_SEMI_JOIN",
            Self::LeftAntiJoin => "LEFT_ANTI_JOIN",
            Self::Comma => "COMMA",
        }
    }
}

/// How a join states its condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinConditionType {
    /// No condition.
    None,
    /// `ON <expr>`.
    On,
    /// `USING (<columns>)`.
    Using,
}

impl JoinConditionType {
    /// Returns the upstream constant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "NONE",
            Self::On => "ON",
            Self::Using => "USING",
        }
    }
}

/// Which side `TRIM` removes characters from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrimFlag {
    Both,
    Leading,
    Trailing,
}

impl TrimFlag {
    /// Returns the upstream constant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Both => "BOTH",
            Self::Leading => "LEADING",
            Self::Trailing => "TRAILING",
        }
    }
}

/// Keywords that may follow `SELECT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectKeyword {
    Distinct,
    All,
    Stream,
}

impl SelectKeyword {
    /// Returns the upstream constant name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Distinct => "DISTINCT",
            Self::All => "ALL",
            Self::Stream => "STREAM",
        }
    }
}

/// The payload of a `SYMBOL` literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Symbol {
    Trim(TrimFlag),
    Select(SelectKeyword),
    Join(JoinType),
    JoinCondition(JoinConditionType),
    /// A time unit such as `YEAR` or `MILLISECOND`.
    TimeUnit(String),
    /// Any other flag, by its constant name.
    Other(String),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trim(flag) => f.write_str(flag.name()),
            Self::Select(keyword) => f.write_str(keyword.name()),
            Self::Join(join_type) => f.write_str(join_type.name()),
            Self::JoinCondition(condition) => f.write_str(condition.name()),
            Self::TimeUnit(name) | Self::Other(name) => f.write_str(name),
        }
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LiteralValue {
    /// NULL literal.
    Null,
    /// Boolean literal.
    Boolean(bool),
    /// Exact or approximate numeric, as written.
    Numeric(String),
    /// Character string.
    Text(String),
    /// Binary string.
    Binary(Vec<u8>),
    /// Date, time, or timestamp, as written.
    Temporal(String),
    /// Interval value, as written.
    Interval(String),
    /// Symbolic flag.
    Symbol(Symbol),
}

/// A literal node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlLiteral {
    /// The value.
    pub value: LiteralValue,
    /// The type the parser assigned to the literal.
    pub type_name: SqlTypeName,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlLiteral {
    /// Creates a literal with an explicit type.
    #[must_use]
    pub const fn new(value: LiteralValue, type_name: SqlTypeName, pos: SqlParserPos) -> Self {
        Self {
            value,
            type_name,
            pos,
        }
    }

    /// Creates a NULL literal.
    #[must_use]
    pub const fn null(pos: SqlParserPos) -> Self {
        Self::new(LiteralValue::Null, SqlTypeName::Null, pos)
    }

    /// Creates a boolean literal.
    #[must_use]
    pub const fn boolean(value: bool, pos: SqlParserPos) -> Self {
        Self::new(LiteralValue::Boolean(value), SqlTypeName::Boolean, pos)
    }

    /// Creates an exact integer literal.
    #[must_use]
    pub fn integer(value: i64, pos: SqlParserPos) -> Self {
        Self::new(
            LiteralValue::Numeric(value.to_string()),
            SqlTypeName::Integer,
            pos,
        )
    }

    /// Creates a decimal literal from its written form.
    #[must_use]
    pub fn decimal(value: impl Into<String>, pos: SqlParserPos) -> Self {
        Self::new(LiteralValue::Numeric(value.into()), SqlTypeName::Decimal, pos)
    }

    /// Creates a string literal.
    ///
    /// The parser types string literals as `CHAR`; the type validator
    /// narrows them to `VARCHAR` later.
    #[must_use]
    pub fn string(value: impl Into<String>, pos: SqlParserPos) -> Self {
        Self::new(LiteralValue::Text(value.into()), SqlTypeName::Char, pos)
    }

    /// Creates a symbol literal.
    #[must_use]
    pub const fn symbol(symbol: Symbol, pos: SqlParserPos) -> Self {
        Self::new(LiteralValue::Symbol(symbol), SqlTypeName::Symbol, pos)
    }

    /// Returns the symbol payload, if this is a symbol literal.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&Symbol> {
        match &self.value {
            LiteralValue::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}
