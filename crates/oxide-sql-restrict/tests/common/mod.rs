#![allow(dead_code)]

use oxide_sql_ast::builder::{call, ident, Select};
use oxide_sql_ast::operators::standard;
use oxide_sql_ast::{SqlKind, SqlNode, SqlOperator, SqlParserPos};
use oxide_sql_restrict::{UnsupportedOperationValidator, ValidationError};

pub fn validate_ok(node: &SqlNode) {
    UnsupportedOperationValidator::new()
        .validate(node)
        .unwrap_or_else(|e| panic!("Expected {node:?} to validate\nError: {e}"));
}

pub fn validate_err(node: &SqlNode) -> ValidationError {
    UnsupportedOperationValidator::new()
        .validate(node)
        .expect_err(&format!("Expected validation error for: {node:?}"))
}

/// Asserts that validation fails with exactly `description`.
pub fn assert_rejected(node: &SqlNode, description: &str) {
    assert_eq!(validate_err(node).description(), description);
}

/// Creates an operator of `kind` that lives for the rest of the test run.
pub fn leak_operator(name: &'static str, kind: SqlKind) -> &'static SqlOperator {
    Box::leak(Box::new(SqlOperator::new(name, kind)))
}

/// `SELECT * FROM <from>`
pub fn select_from(from: SqlNode) -> SqlNode {
    Select::new()
        .columns([oxide_sql_ast::builder::star()])
        .from(from)
        .build()
}

/// `SELECT <expr> FROM t`
pub fn select_expr(expr: SqlNode) -> SqlNode {
    Select::new().columns([expr]).from(ident("t")).build()
}

/// `a > <value>`
pub fn greater_than(column: &str, value: SqlNode) -> SqlNode {
    call(&standard::GREATER_THAN, [ident(column), value])
}

pub fn pos(line: u32, column: u32) -> SqlParserPos {
    SqlParserPos::point(line, column)
}
