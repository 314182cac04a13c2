//! Built-in operators of the SQL parser.
//!
//! Some functions here share a name with an engine function (`POWER`,
//! `UPPER`, ...). They are distinct operators; see [`crate::operator`].

use crate::kind::SqlKind;
use crate::operator::SqlOperator;

// Logical
pub static AND: SqlOperator = SqlOperator::new("AND", SqlKind::And);
pub static OR: SqlOperator = SqlOperator::new("OR", SqlKind::Or);
pub static NOT: SqlOperator = SqlOperator::new("NOT", SqlKind::Not);
pub static IN: SqlOperator = SqlOperator::new("IN", SqlKind::In);
pub static NOT_IN: SqlOperator = SqlOperator::new("NOT IN", SqlKind::NotIn);
pub static BETWEEN: SqlOperator = SqlOperator::new("BETWEEN", SqlKind::Between);
pub static EXISTS: SqlOperator = SqlOperator::new("EXISTS", SqlKind::Exists);
pub static SOME: SqlOperator = SqlOperator::new("SOME", SqlKind::SomeQuantifier);
pub static ALL: SqlOperator = SqlOperator::new("ALL", SqlKind::AllQuantifier);
pub static LIKE: SqlOperator = SqlOperator::new("LIKE", SqlKind::Like);
pub static SIMILAR_TO: SqlOperator = SqlOperator::new("SIMILAR TO", SqlKind::Similar);
pub static OVERLAPS: SqlOperator = SqlOperator::new("OVERLAPS", SqlKind::Overlaps);

// IS predicates
pub static IS_TRUE: SqlOperator = SqlOperator::new("IS TRUE", SqlKind::IsTrue);
pub static IS_NOT_TRUE: SqlOperator = SqlOperator::new("IS NOT TRUE", SqlKind::IsNotTrue);
pub static IS_FALSE: SqlOperator = SqlOperator::new("IS FALSE", SqlKind::IsFalse);
pub static IS_NOT_FALSE: SqlOperator = SqlOperator::new("IS NOT FALSE", SqlKind::IsNotFalse);
pub static IS_NULL: SqlOperator = SqlOperator::new("IS NULL", SqlKind::IsNull);
pub static IS_NOT_NULL: SqlOperator = SqlOperator::new("IS NOT NULL", SqlKind::IsNotNull);
pub static IS_DISTINCT_FROM: SqlOperator =
    SqlOperator::new("IS DISTINCT FROM", SqlKind::IsDistinctFrom);
pub static IS_NOT_DISTINCT_FROM: SqlOperator =
    SqlOperator::new("IS NOT DISTINCT FROM", SqlKind::IsNotDistinctFrom);

// Comparison
pub static EQUALS: SqlOperator = SqlOperator::new("=", SqlKind::Equals);
pub static NOT_EQUALS: SqlOperator = SqlOperator::new("<>", SqlKind::NotEquals);
pub static LESS_THAN: SqlOperator = SqlOperator::new("<", SqlKind::LessThan);
pub static GREATER_THAN: SqlOperator = SqlOperator::new(">", SqlKind::GreaterThan);
pub static LESS_THAN_OR_EQUAL: SqlOperator = SqlOperator::new("<=", SqlKind::LessThanOrEqual);
pub static GREATER_THAN_OR_EQUAL: SqlOperator =
    SqlOperator::new(">=", SqlKind::GreaterThanOrEqual);

// Arithmetic
pub static PLUS: SqlOperator = SqlOperator::new("+", SqlKind::Plus);
pub static MINUS: SqlOperator = SqlOperator::new("-", SqlKind::Minus);
pub static MULTIPLY: SqlOperator = SqlOperator::new("*", SqlKind::Times);
pub static DIVIDE: SqlOperator = SqlOperator::new("/", SqlKind::Divide);
pub static MOD: SqlOperator = SqlOperator::new("MOD", SqlKind::Mod);
pub static UNARY_MINUS: SqlOperator = SqlOperator::new("-", SqlKind::MinusPrefix);
pub static UNARY_PLUS: SqlOperator = SqlOperator::new("+", SqlKind::PlusPrefix);

// Special forms
pub static AS: SqlOperator = SqlOperator::new("AS", SqlKind::As);
pub static CAST: SqlOperator = SqlOperator::new("CAST", SqlKind::Cast);
pub static CASE: SqlOperator = SqlOperator::new("CASE", SqlKind::Case);
pub static NULLIF: SqlOperator = SqlOperator::new("NULLIF", SqlKind::Nullif);
pub static COALESCE: SqlOperator = SqlOperator::new("COALESCE", SqlKind::Coalesce);
pub static CEIL: SqlOperator = SqlOperator::new("CEIL", SqlKind::Ceil);
pub static FLOOR: SqlOperator = SqlOperator::new("FLOOR", SqlKind::Floor);
pub static TRIM: SqlOperator = SqlOperator::new("TRIM", SqlKind::Trim);
pub static EXTRACT: SqlOperator = SqlOperator::new("EXTRACT", SqlKind::Extract);
pub static POSITION: SqlOperator = SqlOperator::new("POSITION", SqlKind::Position);
pub static DOT: SqlOperator = SqlOperator::new("DOT", SqlKind::Dot);
pub static ITEM: SqlOperator = SqlOperator::new("ITEM", SqlKind::Item);

// Constructors
pub static ROW: SqlOperator = SqlOperator::new("ROW", SqlKind::Row);
pub static MAP_VALUE_CONSTRUCTOR: SqlOperator =
    SqlOperator::new("MAP", SqlKind::MapValueConstructor);
pub static ARRAY_VALUE_CONSTRUCTOR: SqlOperator =
    SqlOperator::new("ARRAY", SqlKind::ArrayValueConstructor);
pub static MULTISET_VALUE_CONSTRUCTOR: SqlOperator =
    SqlOperator::new("MULTISET", SqlKind::MultisetValueConstructor);

// Aggregates and windows
pub static COUNT: SqlOperator = SqlOperator::new("COUNT", SqlKind::Count);
pub static MIN: SqlOperator = SqlOperator::new("MIN", SqlKind::Min);
pub static MAX: SqlOperator = SqlOperator::new("MAX", SqlKind::Max);
pub static SUM: SqlOperator = SqlOperator::new("SUM", SqlKind::Sum);
pub static AVG: SqlOperator = SqlOperator::new("AVG", SqlKind::Avg);
pub static STDDEV_POP: SqlOperator = SqlOperator::new("STDDEV_POP", SqlKind::StddevPop);
pub static LISTAGG: SqlOperator = SqlOperator::new("LISTAGG", SqlKind::ListAgg);
pub static OVER: SqlOperator = SqlOperator::new("OVER", SqlKind::Over);
pub static FILTER: SqlOperator = SqlOperator::new("FILTER", SqlKind::Filter);
pub static ROW_NUMBER: SqlOperator = SqlOperator::new("ROW_NUMBER", SqlKind::RowNumber);
pub static RANK: SqlOperator = SqlOperator::new("RANK", SqlKind::Rank);
pub static TUMBLE: SqlOperator = SqlOperator::new("TUMBLE", SqlKind::Tumble);
pub static HOP: SqlOperator = SqlOperator::new("HOP", SqlKind::Hop);

// Queries
pub static SELECT: SqlOperator = SqlOperator::new("SELECT", SqlKind::Select);
pub static JOIN: SqlOperator = SqlOperator::new("JOIN", SqlKind::Join);
pub static UNION: SqlOperator = SqlOperator::new("UNION", SqlKind::Union);
pub static UNION_ALL: SqlOperator = SqlOperator::new("UNION ALL", SqlKind::Union);
pub static EXCEPT: SqlOperator = SqlOperator::new("EXCEPT", SqlKind::Except);
pub static INTERSECT: SqlOperator = SqlOperator::new("INTERSECT", SqlKind::Intersect);
pub static ORDER_BY: SqlOperator = SqlOperator::new("ORDER BY", SqlKind::OrderBy);
pub static WITH: SqlOperator = SqlOperator::new("WITH", SqlKind::With);
pub static VALUES: SqlOperator = SqlOperator::new("VALUES", SqlKind::Values);
pub static EXPLICIT_TABLE: SqlOperator = SqlOperator::new("TABLE", SqlKind::Explicit);
pub static LATERAL: SqlOperator = SqlOperator::new("LATERAL", SqlKind::Lateral);
pub static UNNEST: SqlOperator = SqlOperator::new("UNNEST", SqlKind::Unnest);
pub static COLLECTION_TABLE: SqlOperator =
    SqlOperator::new("TABLE", SqlKind::CollectionTable);
pub static ARGUMENT_ASSIGNMENT: SqlOperator =
    SqlOperator::new("=>", SqlKind::ArgumentAssignment);
pub static DESC: SqlOperator = SqlOperator::new("DESC", SqlKind::Descending);
pub static NULLS_FIRST: SqlOperator = SqlOperator::new("NULLS FIRST", SqlKind::NullsFirst);
pub static NULLS_LAST: SqlOperator = SqlOperator::new("NULLS LAST", SqlKind::NullsLast);

// DML
pub static INSERT: SqlOperator = SqlOperator::new("INSERT", SqlKind::Insert);
pub static UPDATE: SqlOperator = SqlOperator::new("UPDATE", SqlKind::Update);
pub static DELETE: SqlOperator = SqlOperator::new("DELETE", SqlKind::Delete);
pub static MERGE: SqlOperator = SqlOperator::new("MERGE", SqlKind::Merge);

// DDL
pub static CREATE_TABLE: SqlOperator = SqlOperator::new("CREATE TABLE", SqlKind::CreateTable);
pub static DROP_TABLE: SqlOperator = SqlOperator::new("DROP TABLE", SqlKind::DropTable);
pub static CREATE_VIEW: SqlOperator = SqlOperator::new("CREATE VIEW", SqlKind::CreateView);
pub static COLUMN_DECL: SqlOperator = SqlOperator::new("COLUMN_DECL", SqlKind::ColumnDecl);

// Statements
pub static EXPLAIN: SqlOperator = SqlOperator::new("EXPLAIN", SqlKind::Explain);
pub static DESCRIBE_TABLE: SqlOperator = SqlOperator::new("DESCRIBE", SqlKind::Describe);
pub static SET_OPTION: SqlOperator = SqlOperator::new("SET_OPTION", SqlKind::SetOption);

// Functions
pub static PI: SqlOperator = SqlOperator::new("PI", SqlKind::OtherFunction);
pub static POWER: SqlOperator = SqlOperator::new("POWER", SqlKind::OtherFunction);
pub static ABS: SqlOperator = SqlOperator::new("ABS", SqlKind::OtherFunction);
pub static SQRT: SqlOperator = SqlOperator::new("SQRT", SqlKind::OtherFunction);
pub static UPPER: SqlOperator = SqlOperator::new("UPPER", SqlKind::OtherFunction);
pub static LOWER: SqlOperator = SqlOperator::new("LOWER", SqlKind::OtherFunction);
pub static SUBSTRING: SqlOperator = SqlOperator::new("SUBSTRING", SqlKind::OtherFunction);
pub static CHAR_LENGTH: SqlOperator = SqlOperator::new("CHAR_LENGTH", SqlKind::OtherFunction);
pub static CONCAT: SqlOperator = SqlOperator::new("||", SqlKind::Other);
pub static CURRENT_TIMESTAMP: SqlOperator =
    SqlOperator::new("CURRENT_TIMESTAMP", SqlKind::OtherFunction);
pub static CURRENT_DATE: SqlOperator = SqlOperator::new("CURRENT_DATE", SqlKind::OtherFunction);
pub static JSON_VALUE: SqlOperator = SqlOperator::new("JSON_VALUE", SqlKind::OtherFunction);
pub static REGEXP_REPLACE: SqlOperator =
    SqlOperator::new("REGEXP_REPLACE", SqlKind::OtherFunction);
