//! Syntactic categories of calls.

use core::fmt;

/// The syntactic category of a call.
///
/// Several operators share a kind; `OtherFunction` in particular covers
/// every named function without a dedicated category. New kinds are added
/// as the grammar grows, so matches outside this crate need a wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SqlKind {
    // Queries and set operations
    Select,
    Join,
    Union,
    Except,
    Intersect,
    OrderBy,
    With,
    WithItem,
    Values,
    Row,
    Explicit,
    Lateral,
    Unnest,
    CollectionTable,
    ArgumentAssignment,
    Descending,
    NullsFirst,
    NullsLast,
    TableSample,
    Snapshot,
    MatchRecognize,

    // DML
    Insert,
    Update,
    Delete,
    Merge,
    Upsert,

    // DDL
    CreateTable,
    DropTable,
    AlterTable,
    CreateView,
    DropView,
    CreateIndex,
    DropIndex,
    CreateType,
    ColumnDecl,
    OtherDdl,

    // Predicates
    And,
    Or,
    Not,
    In,
    NotIn,
    Between,
    Exists,
    SomeQuantifier,
    AllQuantifier,
    Like,
    Similar,
    Overlaps,
    IsTrue,
    IsNotTrue,
    IsFalse,
    IsNotFalse,
    IsNull,
    IsNotNull,
    IsDistinctFrom,
    IsNotDistinctFrom,

    // Comparison
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,

    // Arithmetic
    Plus,
    Minus,
    Times,
    Divide,
    Mod,
    MinusPrefix,
    PlusPrefix,

    // Scalar special forms
    As,
    Cast,
    Case,
    Nullif,
    Coalesce,
    Ceil,
    Floor,
    Trim,
    Extract,
    Position,
    Dot,
    Item,

    // Constructors
    MapValueConstructor,
    ArrayValueConstructor,
    MultisetValueConstructor,
    ArrayQueryConstructor,
    MapQueryConstructor,
    CursorConstructor,

    // Aggregates and windows
    Count,
    Min,
    Max,
    Sum,
    Avg,
    StddevPop,
    VarPop,
    ListAgg,
    Over,
    Window,
    Filter,
    WithinGroup,
    RowNumber,
    Rank,
    Tumble,
    Hop,
    Session,

    // JSON
    JsonValueExpression,
    JsonArray,
    JsonObject,

    // Statements
    Explain,
    Describe,
    SetOption,

    // Catch-all categories
    OtherFunction,
    Other,
}

impl SqlKind {
    /// Returns the upstream constant name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Join => "JOIN",
            Self::Union => "UNION",
            Self::Except => "EXCEPT",
            Self::Intersect => "INTERSECT",
            Self::OrderBy => "ORDER_BY",
            Self::With => "WITH",
            Self::WithItem => "WITH_ITEM",
            Self::Values => "VALUES",
            Self::Row => "ROW",
            Self::Explicit => "EXPLICIT_TABLE",
            Self::Lateral => "LATERAL",
            Self::Unnest => "UNNEST",
            Self::CollectionTable => "COLLECTION_TABLE",
            Self::ArgumentAssignment => "ARGUMENT_ASSIGNMENT",
            Self::Descending => "DESCENDING",
            Self::NullsFirst => "NULLS_FIRST",
            Self::NullsLast => "NULLS_LAST",
            Self::TableSample => "TABLESAMPLE",
            Self::Snapshot => "SNAPSHOT",
            Self::MatchRecognize => "MATCH_RECOGNIZE",
            Self::Insert => "INSERT",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
            Self::Merge => "MERGE",
            Self::Upsert => "UPSERT",
            Self::CreateTable => "CREATE_TABLE",
            Self::DropTable => "DROP_TABLE",
            Self::AlterTable => "ALTER_TABLE",
            Self::CreateView => "CREATE_VIEW",
            Self::DropView => "DROP_VIEW",
            Self::CreateIndex => "CREATE_INDEX",
            Self::DropIndex => "DROP_INDEX",
            Self::CreateType => "CREATE_TYPE",
            Self::ColumnDecl => "COLUMN_DECL",
            Self::OtherDdl => "OTHER_DDL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::In => "IN",
            Self::NotIn => "NOT_IN",
            Self::Between => "BETWEEN",
            Self::Exists => "EXISTS",
            Self::SomeQuantifier => "SOME",
            Self::AllQuantifier => "ALL",
            Self::Like => "LIKE",
            Self::Similar => "SIMILAR",
            Self::Overlaps => "OVERLAPS",
            Self::IsTrue => "IS_TRUE",
            Self::IsNotTrue => "IS_NOT_TRUE",
            Self::IsFalse => "IS_FALSE",
            Self::IsNotFalse => "IS_NOT_FALSE",
            Self::IsNull => "IS_NULL",
            Self::IsNotNull => "IS_NOT_NULL",
            Self::IsDistinctFrom => "IS_DISTINCT_FROM",
            Self::IsNotDistinctFrom => "IS_NOT_DISTINCT_FROM",
            Self::Equals => "EQUALS",
            Self::NotEquals => "NOT_EQUALS",
            Self::LessThan => "LESS_THAN",
            Self::GreaterThan => "GREATER_THAN",
            Self::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            Self::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
            Self::Plus => "PLUS",
            Self::Minus => "MINUS",
            Self::Times => "TIMES",
            Self::Divide => "DIVIDE",
            Self::Mod => "MOD",
            Self::MinusPrefix => "MINUS_PREFIX",
            Self::PlusPrefix => "PLUS_PREFIX",
            Self::As => "AS",
            Self::Cast => "CAST",
            Self::Case => "CASE",
            Self::Nullif => "NULLIF",
            Self::Coalesce => "COALESCE",
            Self::Ceil => "CEIL",
            Self::Floor => "FLOOR",
            Self::Trim => "TRIM",
            Self::Extract => "EXTRACT",
            Self::Position => "POSITION",
            Self::Dot => "DOT",
            Self::Item => "ITEM",
            Self::MapValueConstructor => "MAP_VALUE_CONSTRUCTOR",
            Self::ArrayValueConstructor => "ARRAY_VALUE_CONSTRUCTOR",
            Self::MultisetValueConstructor => "MULTISET_VALUE_CONSTRUCTOR",
            Self::ArrayQueryConstructor => "ARRAY_QUERY_CONSTRUCTOR",
            Self::MapQueryConstructor => "MAP_QUERY_CONSTRUCTOR",
            Self::CursorConstructor => "CURSOR",
            Self::Count => "COUNT",
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Sum => "SUM",
            Self::Avg => "AVG",
            Self::StddevPop => "STDDEV_POP",
            Self::VarPop => "VAR_POP",
            Self::ListAgg => "LISTAGG",
            Self::Over => "OVER",
            Self::Window => "WINDOW",
            Self::Filter => "FILTER",
            Self::WithinGroup => "WITHIN_GROUP",
            Self::RowNumber => "ROW_NUMBER",
            Self::Rank => "RANK",
            Self::Tumble => "TUMBLE",
            Self::Hop => "HOP",
            Self::Session => "SESSION",
            Self::JsonValueExpression => "JSON_VALUE_EXPRESSION",
            Self::JsonArray => "JSON_ARRAY",
            Self::JsonObject => "JSON_OBJECT",
            Self::Explain => "EXPLAIN",
            Self::Describe => "DESCRIBE_TABLE",
            Self::SetOption => "SET_OPTION",
            Self::OtherFunction => "OTHER_FUNCTION",
            Self::Other => "OTHER",
        }
    }

    /// Returns the name used in diagnostics: the constant name with
    /// underscores rendered as spaces.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl fmt::Display for SqlKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
