//! The supported dialect, as data.
//!
//! Every supported construct is listed explicitly instead of being derived
//! from the parser's own groupings of kinds. When the parser learns a new
//! kind or function, it stays rejected until it is added here.

use std::collections::HashSet;
use std::sync::OnceLock;

use oxide_sql_ast::operators::{engine, standard};
use oxide_sql_ast::{
    JoinConditionType, JoinType, OperatorRef, SelectKeyword, SqlKind, SqlOperator, SqlTypeName,
    Symbol,
};

/// Kinds accepted without looking further at the call.
const SUPPORTED_KINDS: &[SqlKind] = &[
    // Predicates
    SqlKind::And,
    SqlKind::Or,
    SqlKind::Not,
    SqlKind::In,
    SqlKind::NotIn,
    SqlKind::Between,
    // Arithmetic
    SqlKind::Plus,
    SqlKind::Minus,
    SqlKind::Times,
    SqlKind::Divide,
    SqlKind::Mod,
    SqlKind::MinusPrefix,
    SqlKind::PlusPrefix,
    // IS predicates
    SqlKind::IsTrue,
    SqlKind::IsNotTrue,
    SqlKind::IsFalse,
    SqlKind::IsNotFalse,
    SqlKind::IsNull,
    SqlKind::IsNotNull,
    // Comparison
    SqlKind::Equals,
    SqlKind::NotEquals,
    SqlKind::LessThan,
    SqlKind::GreaterThan,
    SqlKind::GreaterThanOrEqual,
    SqlKind::LessThanOrEqual,
    // Miscellaneous
    SqlKind::As,
    SqlKind::Cast,
    SqlKind::Ceil,
    SqlKind::Floor,
    SqlKind::Like,
    SqlKind::Trim,
    SqlKind::Case,
    SqlKind::Nullif,
    SqlKind::Coalesce,
    SqlKind::Union,
    // Aggregations
    SqlKind::Count,
    SqlKind::Min,
    SqlKind::Max,
    SqlKind::Sum,
    SqlKind::Avg,
    // DDL & DML
    SqlKind::CreateTable,
    SqlKind::DropTable,
    SqlKind::ColumnDecl,
    SqlKind::Row,
    SqlKind::Values,
    SqlKind::Insert,
    // Table functions
    SqlKind::CollectionTable,
    SqlKind::ArgumentAssignment,
    // Ordering
    SqlKind::Descending,
];

/// Functions accepted when their call has a generic kind.
///
/// Identity matters: `standard::POWER` is not `engine::POWER`.
static SUPPORTED_OPERATORS: &[&SqlOperator] = &[
    // Math
    &engine::POWER,
    &engine::SQUARE,
    &engine::SQRT,
    &engine::CBRT,
    &engine::COS,
    &engine::SIN,
    &engine::TAN,
    &engine::COT,
    &engine::ACOS,
    &engine::ASIN,
    &engine::ATAN,
    &engine::ATAN2,
    &engine::EXP,
    &engine::LN,
    &engine::LOG10,
    &engine::RAND,
    &engine::ABS,
    &standard::PI,
    &engine::SIGN,
    &engine::DEGREES,
    &engine::RADIANS,
    &engine::ROUND,
    &engine::TRUNCATE,
    // Strings
    &engine::ASCII,
    &engine::INITCAP,
    &engine::CHAR_LENGTH,
    &engine::CHARACTER_LENGTH,
    &engine::LENGTH,
    &engine::LOWER,
    &engine::UPPER,
    &engine::CONCAT,
    &engine::CONCAT_WS,
    &engine::SUBSTRING,
    &engine::LTRIM,
    &engine::RTRIM,
    &engine::BTRIM,
    &engine::REPLACE,
    &engine::POSITION,
    &engine::NOT_LIKE,
    // Datetime
    &engine::EXTRACT,
    &engine::TO_TIMESTAMP_TZ,
    &engine::TO_EPOCH_MILLIS,
    // Extensions
    &engine::OPTION,
    &engine::SHOW_MAPPINGS,
    &engine::SHOW_JOBS,
    &engine::GENERATE_SERIES,
    &engine::GENERATE_STREAM,
    &engine::CSV_FILE,
    &engine::JSON_FLAT_FILE,
    &engine::AVRO_FILE,
    &engine::PARQUET_FILE,
];

/// Join variants the planner can execute.
pub const SUPPORTED_JOIN_TYPES: &[JoinType] = &[
    JoinType::Inner,
    JoinType::Comma,
    JoinType::Cross,
    JoinType::Left,
    JoinType::Right,
];

/// Concrete `OTHER_DDL` statement types.
///
/// These are matched by name because the parser gives all of them the same
/// kind and exposes no other discriminator.
pub const SUPPORTED_DDL_STATEMENTS: &[&str] = &[
    "CreateJob",
    "DropJob",
    "AlterJob",
    "CreateSnapshot",
    "DropSnapshot",
];

/// Name of the opaque object type users may declare.
pub const OBJECT_TYPE_NAME: &str = "OBJECT";

/// Types a column or `CAST` may declare.
///
/// `CHAR` and `ANY` exist internally but are not user types: strings are
/// always `VARCHAR` and `ANY` is spelled `OBJECT`.
pub const DECLARABLE_TYPES: &[SqlTypeName] = &[
    SqlTypeName::Boolean,
    SqlTypeName::Tinyint,
    SqlTypeName::Smallint,
    SqlTypeName::Integer,
    SqlTypeName::Bigint,
    SqlTypeName::Decimal,
    SqlTypeName::Real,
    SqlTypeName::Double,
    SqlTypeName::Varchar,
    SqlTypeName::Date,
    SqlTypeName::Time,
    SqlTypeName::Timestamp,
    SqlTypeName::TimestampWithLocalTimeZone,
    SqlTypeName::Null,
];

/// Literal types, in addition to intervals.
///
/// String literals are typed `CHAR` by the parser, and `ANY` shows up for
/// literals whose type is resolved later.
pub const LITERAL_TYPES: &[SqlTypeName] = &[
    SqlTypeName::Boolean,
    SqlTypeName::Tinyint,
    SqlTypeName::Smallint,
    SqlTypeName::Integer,
    SqlTypeName::Bigint,
    SqlTypeName::Decimal,
    SqlTypeName::Real,
    SqlTypeName::Double,
    SqlTypeName::Varchar,
    SqlTypeName::Char,
    SqlTypeName::Timestamp,
    SqlTypeName::TimestampWithLocalTimeZone,
    SqlTypeName::Date,
    SqlTypeName::Time,
    SqlTypeName::Any,
    SqlTypeName::Null,
];

/// Returns true for symbolic flags that may appear as literals.
///
/// Every trim side is accepted. `SELECT ALL` is the default opposite of
/// `SELECT DISTINCT`, so both are accepted; `STREAM` is not.
#[must_use]
pub fn is_supported_symbol(symbol: &Symbol) -> bool {
    match symbol {
        Symbol::Trim(_) => true,
        Symbol::Select(keyword) => matches!(keyword, SelectKeyword::Distinct | SelectKeyword::All),
        Symbol::Join(join_type) => SUPPORTED_JOIN_TYPES.contains(join_type),
        Symbol::JoinCondition(condition) => matches!(
            condition,
            JoinConditionType::On | JoinConditionType::None | JoinConditionType::Using
        ),
        _ => false,
    }
}

/// The two allow-lists consulted for every call.
#[derive(Debug, Clone)]
pub struct PolicyTables {
    supported_kinds: HashSet<SqlKind>,
    supported_operators: HashSet<OperatorRef>,
}

impl PolicyTables {
    /// Builds the tables for the supported dialect.
    #[must_use]
    pub fn new() -> Self {
        Self {
            supported_kinds: SUPPORTED_KINDS.iter().copied().collect(),
            supported_operators: SUPPORTED_OPERATORS
                .iter()
                .map(|&operator| OperatorRef::new(operator))
                .collect(),
        }
    }

    /// Returns the process-wide tables, building them on first use.
    #[must_use]
    pub fn get() -> &'static Self {
        static TABLES: OnceLock<PolicyTables> = OnceLock::new();
        TABLES.get_or_init(Self::new)
    }

    /// Returns true if calls of `kind` need no further checks.
    #[must_use]
    pub fn supports_kind(&self, kind: SqlKind) -> bool {
        self.supported_kinds.contains(&kind)
    }

    /// Returns true if `operator` is a supported function.
    #[must_use]
    pub fn supports_operator(&self, operator: OperatorRef) -> bool {
        self.supported_operators.contains(&operator)
    }

    /// Iterates over the supported kinds.
    pub fn supported_kinds(&self) -> impl Iterator<Item = SqlKind> + '_ {
        self.supported_kinds.iter().copied()
    }

    /// Iterates over the supported operators.
    pub fn supported_operators(&self) -> impl Iterator<Item = OperatorRef> + '_ {
        self.supported_operators.iter().copied()
    }
}

impl Default for PolicyTables {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_sql_ast::TrimFlag;

    #[test]
    fn test_tables_are_complete() {
        let tables = PolicyTables::get();
        assert_eq!(tables.supported_kinds().count(), SUPPORTED_KINDS.len());
        assert_eq!(tables.supported_operators().count(), SUPPORTED_OPERATORS.len());
    }

    #[test]
    fn test_get_returns_same_instance() {
        assert!(std::ptr::eq(PolicyTables::get(), PolicyTables::get()));
    }

    #[test]
    fn test_operator_identity() {
        let tables = PolicyTables::get();
        assert!(tables.supports_operator(OperatorRef::new(&engine::POWER)));
        assert!(!tables.supports_operator(OperatorRef::new(&standard::POWER)));
        assert!(tables.supports_operator(OperatorRef::new(&standard::PI)));
    }

    #[test]
    fn test_generic_kinds_are_not_supported_kinds() {
        let tables = PolicyTables::get();
        for kind in [
            SqlKind::Select,
            SqlKind::Join,
            SqlKind::Other,
            SqlKind::OtherFunction,
            SqlKind::OtherDdl,
            SqlKind::Extract,
            SqlKind::Position,
        ] {
            assert!(!tables.supports_kind(kind), "{kind} must be checked further");
        }
    }

    #[test]
    fn test_supported_symbols() {
        assert!(is_supported_symbol(&Symbol::Trim(TrimFlag::Leading)));
        assert!(is_supported_symbol(&Symbol::Select(SelectKeyword::All)));
        assert!(!is_supported_symbol(&Symbol::Select(SelectKeyword::Stream)));
        assert!(is_supported_symbol(&Symbol::Join(JoinType::Comma)));
        assert!(!is_supported_symbol(&Symbol::Join(JoinType::Full)));
        assert!(!is_supported_symbol(&Symbol::TimeUnit(String::from("YEAR"))));
    }
}
