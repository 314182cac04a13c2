//! Operators contributed by the engine.
//!
//! These are the engine's own implementations of scalar functions, the
//! extension statements, the source table functions, and the DDL operators
//! for mappings, jobs, and snapshots.

use crate::kind::SqlKind;
use crate::operator::SqlOperator;

// Math
pub static POWER: SqlOperator = SqlOperator::new("POWER", SqlKind::OtherFunction);
pub static SQUARE: SqlOperator = SqlOperator::new("SQUARE", SqlKind::OtherFunction);
pub static SQRT: SqlOperator = SqlOperator::new("SQRT", SqlKind::OtherFunction);
pub static CBRT: SqlOperator = SqlOperator::new("CBRT", SqlKind::OtherFunction);
pub static COS: SqlOperator = SqlOperator::new("COS", SqlKind::OtherFunction);
pub static SIN: SqlOperator = SqlOperator::new("SIN", SqlKind::OtherFunction);
pub static TAN: SqlOperator = SqlOperator::new("TAN", SqlKind::OtherFunction);
pub static COT: SqlOperator = SqlOperator::new("COT", SqlKind::OtherFunction);
pub static ACOS: SqlOperator = SqlOperator::new("ACOS", SqlKind::OtherFunction);
pub static ASIN: SqlOperator = SqlOperator::new("ASIN", SqlKind::OtherFunction);
pub static ATAN: SqlOperator = SqlOperator::new("ATAN", SqlKind::OtherFunction);
pub static ATAN2: SqlOperator = SqlOperator::new("ATAN2", SqlKind::OtherFunction);
pub static EXP: SqlOperator = SqlOperator::new("EXP", SqlKind::OtherFunction);
pub static LN: SqlOperator = SqlOperator::new("LN", SqlKind::OtherFunction);
pub static LOG10: SqlOperator = SqlOperator::new("LOG10", SqlKind::OtherFunction);
pub static RAND: SqlOperator = SqlOperator::new("RAND", SqlKind::OtherFunction);
pub static ABS: SqlOperator = SqlOperator::new("ABS", SqlKind::OtherFunction);
pub static SIGN: SqlOperator = SqlOperator::new("SIGN", SqlKind::OtherFunction);
pub static DEGREES: SqlOperator = SqlOperator::new("DEGREES", SqlKind::OtherFunction);
pub static RADIANS: SqlOperator = SqlOperator::new("RADIANS", SqlKind::OtherFunction);
pub static ROUND: SqlOperator = SqlOperator::new("ROUND", SqlKind::OtherFunction);
pub static TRUNCATE: SqlOperator = SqlOperator::new("TRUNCATE", SqlKind::OtherFunction);

// Strings
pub static ASCII: SqlOperator = SqlOperator::new("ASCII", SqlKind::OtherFunction);
pub static INITCAP: SqlOperator = SqlOperator::new("INITCAP", SqlKind::OtherFunction);
pub static CHAR_LENGTH: SqlOperator = SqlOperator::new("CHAR_LENGTH", SqlKind::OtherFunction);
pub static CHARACTER_LENGTH: SqlOperator =
    SqlOperator::new("CHARACTER_LENGTH", SqlKind::OtherFunction);
pub static LENGTH: SqlOperator = SqlOperator::new("LENGTH", SqlKind::OtherFunction);
pub static LOWER: SqlOperator = SqlOperator::new("LOWER", SqlKind::OtherFunction);
pub static UPPER: SqlOperator = SqlOperator::new("UPPER", SqlKind::OtherFunction);
pub static CONCAT: SqlOperator = SqlOperator::new("||", SqlKind::Other);
pub static CONCAT_WS: SqlOperator = SqlOperator::new("CONCAT_WS", SqlKind::OtherFunction);
pub static SUBSTRING: SqlOperator = SqlOperator::new("SUBSTRING", SqlKind::OtherFunction);
pub static LTRIM: SqlOperator = SqlOperator::new("LTRIM", SqlKind::OtherFunction);
pub static RTRIM: SqlOperator = SqlOperator::new("RTRIM", SqlKind::OtherFunction);
pub static BTRIM: SqlOperator = SqlOperator::new("BTRIM", SqlKind::OtherFunction);
pub static REPLACE: SqlOperator = SqlOperator::new("REPLACE", SqlKind::OtherFunction);
pub static POSITION: SqlOperator = SqlOperator::new("POSITION", SqlKind::Position);
pub static NOT_LIKE: SqlOperator = SqlOperator::new("NOT LIKE", SqlKind::Other);

// Datetime
pub static EXTRACT: SqlOperator = SqlOperator::new("EXTRACT", SqlKind::Extract);
pub static TO_TIMESTAMP_TZ: SqlOperator =
    SqlOperator::new("TO_TIMESTAMP_TZ", SqlKind::OtherFunction);
pub static TO_EPOCH_MILLIS: SqlOperator =
    SqlOperator::new("TO_EPOCH_MILLIS", SqlKind::OtherFunction);

// Extension statements
pub static OPTION: SqlOperator = SqlOperator::new("OPTION", SqlKind::Other);
pub static SHOW_MAPPINGS: SqlOperator = SqlOperator::new("SHOW MAPPINGS", SqlKind::Other);
pub static SHOW_JOBS: SqlOperator = SqlOperator::new("SHOW JOBS", SqlKind::Other);

// Table functions
pub static GENERATE_SERIES: SqlOperator =
    SqlOperator::new("GENERATE_SERIES", SqlKind::OtherFunction);
pub static GENERATE_STREAM: SqlOperator =
    SqlOperator::new("GENERATE_STREAM", SqlKind::OtherFunction);
pub static CSV_FILE: SqlOperator = SqlOperator::dynamic_table_function("CSV_FILE");
pub static JSON_FLAT_FILE: SqlOperator = SqlOperator::dynamic_table_function("JSON_FLAT_FILE");
pub static AVRO_FILE: SqlOperator = SqlOperator::dynamic_table_function("AVRO_FILE");
pub static PARQUET_FILE: SqlOperator = SqlOperator::dynamic_table_function("PARQUET_FILE");

// DDL
pub static CREATE_MAPPING: SqlOperator = SqlOperator::new("CREATE MAPPING", SqlKind::CreateTable);
pub static DROP_MAPPING: SqlOperator = SqlOperator::new("DROP MAPPING", SqlKind::DropTable);
pub static CREATE_JOB: SqlOperator = SqlOperator::new("CREATE JOB", SqlKind::OtherDdl);
pub static ALTER_JOB: SqlOperator = SqlOperator::new("ALTER JOB", SqlKind::OtherDdl);
pub static DROP_JOB: SqlOperator = SqlOperator::new("DROP JOB", SqlKind::OtherDdl);
pub static CREATE_SNAPSHOT: SqlOperator = SqlOperator::new("CREATE SNAPSHOT", SqlKind::OtherDdl);
pub static DROP_SNAPSHOT: SqlOperator = SqlOperator::new("DROP SNAPSHOT", SqlKind::OtherDdl);
pub static CREATE_VIEW: SqlOperator = SqlOperator::new("CREATE VIEW", SqlKind::OtherDdl);
pub static CREATE_INDEX: SqlOperator = SqlOperator::new("CREATE INDEX", SqlKind::OtherDdl);
pub static SINK_INTO: SqlOperator = SqlOperator::new("SINK INTO", SqlKind::Insert);
