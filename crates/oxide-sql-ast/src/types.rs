//! SQL type names and data type specifications.

use core::fmt;

use crate::node::SqlIdentifier;
use crate::pos::SqlParserPos;

/// Scalar and structured type names known to the parser.
///
/// Literal nodes carry one of these directly; declared types carry an
/// identifier that is resolved with [`SqlTypeName::from_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SqlTypeName {
    // Boolean
    Boolean,

    // Exact numerics
    Tinyint,
    Smallint,
    Integer,
    Bigint,
    Decimal,

    // Approximate numerics
    Float,
    Real,
    Double,

    // Date/time
    Date,
    Time,
    TimeWithLocalTimeZone,
    Timestamp,
    TimestampWithLocalTimeZone,

    // Year-month intervals
    IntervalYear,
    IntervalYearMonth,
    IntervalMonth,

    // Day-time intervals
    IntervalDay,
    IntervalDayHour,
    IntervalDayMinute,
    IntervalDaySecond,
    IntervalHour,
    IntervalHourMinute,
    IntervalHourSecond,
    IntervalMinute,
    IntervalMinuteSecond,
    IntervalSecond,

    // Character and binary strings
    Char,
    Varchar,
    Binary,
    Varbinary,

    // Special
    Null,
    Any,
    Symbol,

    // Structured
    Multiset,
    Array,
    Map,
    Distinct,
    Structured,
    Row,
    Other,
    Cursor,
    ColumnList,
    DynamicStar,
    Geometry,
    Sarg,
}

const ALL_TYPE_NAMES: &[SqlTypeName] = &[
    SqlTypeName::Boolean,
    SqlTypeName::Tinyint,
    SqlTypeName::Smallint,
    SqlTypeName::Integer,
    SqlTypeName::Bigint,
    SqlTypeName::Decimal,
    SqlTypeName::Float,
    SqlTypeName::Real,
    SqlTypeName::Double,
    SqlTypeName::Date,
    SqlTypeName::Time,
    SqlTypeName::TimeWithLocalTimeZone,
    SqlTypeName::Timestamp,
    SqlTypeName::TimestampWithLocalTimeZone,
    SqlTypeName::IntervalYear,
    SqlTypeName::IntervalYearMonth,
    SqlTypeName::IntervalMonth,
    SqlTypeName::IntervalDay,
    SqlTypeName::IntervalDayHour,
    SqlTypeName::IntervalDayMinute,
    SqlTypeName::IntervalDaySecond,
    SqlTypeName::IntervalHour,
    SqlTypeName::IntervalHourMinute,
    SqlTypeName::IntervalHourSecond,
    SqlTypeName::IntervalMinute,
    SqlTypeName::IntervalMinuteSecond,
    SqlTypeName::IntervalSecond,
    SqlTypeName::Char,
    SqlTypeName::Varchar,
    SqlTypeName::Binary,
    SqlTypeName::Varbinary,
    SqlTypeName::Null,
    SqlTypeName::Any,
    SqlTypeName::Symbol,
    SqlTypeName::Multiset,
    SqlTypeName::Array,
    SqlTypeName::Map,
    SqlTypeName::Distinct,
    SqlTypeName::Structured,
    SqlTypeName::Row,
    SqlTypeName::Other,
    SqlTypeName::Cursor,
    SqlTypeName::ColumnList,
    SqlTypeName::DynamicStar,
    SqlTypeName::Geometry,
    SqlTypeName::Sarg,
];

impl SqlTypeName {
    /// Returns the upstream constant name of the type.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Tinyint => "TINYINT",
            Self::Smallint => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::Bigint => "BIGINT",
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::TimeWithLocalTimeZone => "TIME_WITH_LOCAL_TIME_ZONE",
            Self::Timestamp => "TIMESTAMP",
            Self::TimestampWithLocalTimeZone => "TIMESTAMP_WITH_LOCAL_TIME_ZONE",
            Self::IntervalYear => "INTERVAL_YEAR",
            Self::IntervalYearMonth => "INTERVAL_YEAR_MONTH",
            Self::IntervalMonth => "INTERVAL_MONTH",
            Self::IntervalDay => "INTERVAL_DAY",
            Self::IntervalDayHour => "INTERVAL_DAY_HOUR",
            Self::IntervalDayMinute => "INTERVAL_DAY_MINUTE",
            Self::IntervalDaySecond => "INTERVAL_DAY_SECOND",
            Self::IntervalHour => "INTERVAL_HOUR",
            Self::IntervalHourMinute => "INTERVAL_HOUR_MINUTE",
            Self::IntervalHourSecond => "INTERVAL_HOUR_SECOND",
            Self::IntervalMinute => "INTERVAL_MINUTE",
            Self::IntervalMinuteSecond => "INTERVAL_MINUTE_SECOND",
            Self::IntervalSecond => "INTERVAL_SECOND",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::Binary => "BINARY",
            Self::Varbinary => "VARBINARY",
            Self::Null => "NULL",
            Self::Any => "ANY",
            Self::Symbol => "SYMBOL",
            Self::Multiset => "MULTISET",
            Self::Array => "ARRAY",
            Self::Map => "MAP",
            Self::Distinct => "DISTINCT",
            Self::Structured => "STRUCTURED",
            Self::Row => "ROW",
            Self::Other => "OTHER",
            Self::Cursor => "CURSOR",
            Self::ColumnList => "COLUMN_LIST",
            Self::DynamicStar => "DYNAMIC_STAR",
            Self::Geometry => "GEOMETRY",
            Self::Sarg => "SARG",
        }
    }

    /// Looks up a type by its constant name, ignoring ASCII case.
    ///
    /// Returns `None` for names the parser does not know.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        ALL_TYPE_NAMES
            .iter()
            .copied()
            .find(|ty| ty.name().eq_ignore_ascii_case(name))
    }

    /// Returns true for year-month and day-time interval types.
    #[must_use]
    pub const fn is_interval(&self) -> bool {
        matches!(
            self,
            Self::IntervalYear
                | Self::IntervalYearMonth
                | Self::IntervalMonth
                | Self::IntervalDay
                | Self::IntervalDayHour
                | Self::IntervalDayMinute
                | Self::IntervalDaySecond
                | Self::IntervalHour
                | Self::IntervalHourMinute
                | Self::IntervalHourSecond
                | Self::IntervalMinute
                | Self::IntervalMinuteSecond
                | Self::IntervalSecond
        )
    }
}

impl fmt::Display for SqlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The shape of a declared type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TypeNameSpec {
    /// A built-in scalar type such as `VARCHAR` or `DECIMAL(10, 2)`.
    Basic {
        /// The type name.
        name: SqlIdentifier,
        /// Precision (optional).
        precision: Option<u32>,
        /// Scale (optional).
        scale: Option<u32>,
    },
    /// A type referenced by a user-supplied name.
    UserDefined {
        /// The type name.
        name: SqlIdentifier,
    },
    /// A collection such as `INTEGER ARRAY`.
    Collection {
        /// The element type.
        element: Box<TypeNameSpec>,
        /// The collection type name (`ARRAY`, `MULTISET`).
        collection: SqlIdentifier,
    },
    /// An inline `ROW(name type, ...)` type.
    Row {
        /// The row type name.
        name: SqlIdentifier,
        /// Field names with their types.
        fields: Vec<(SqlIdentifier, TypeNameSpec)>,
    },
}

impl TypeNameSpec {
    /// Returns the identifier naming the type.
    #[must_use]
    pub const fn type_name(&self) -> &SqlIdentifier {
        match self {
            Self::Basic { name, .. } | Self::UserDefined { name } | Self::Row { name, .. } => name,
            Self::Collection { collection, .. } => collection,
        }
    }

    /// Returns true for built-in scalar types.
    #[must_use]
    pub const fn is_basic(&self) -> bool {
        matches!(self, Self::Basic { .. })
    }
}

/// A type as written in a declaration or a `CAST`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDataTypeSpec {
    /// The declared type.
    pub spec: TypeNameSpec,
    /// Whether the type accepts NULL; `None` when unspecified.
    pub nullable: Option<bool>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlDataTypeSpec {
    /// Creates a new data type specification.
    #[must_use]
    pub const fn new(spec: TypeNameSpec, pos: SqlParserPos) -> Self {
        Self {
            spec,
            nullable: None,
            pos,
        }
    }

    /// Returns the identifier naming the type.
    #[must_use]
    pub const fn type_name(&self) -> &SqlIdentifier {
        self.spec.type_name()
    }
}
