//! Tests for building trees and walking them.

mod common;
use common::*;

use oxide_sql_ast::builder::{
    alias, call, create_job, ident, insert, int, join, string, table_function, Select,
};
use oxide_sql_ast::operators::{engine, standard};
use oxide_sql_ast::{JoinType, OperatorRef, SqlCall, SqlKind, SqlNode, SqlParserPos};

#[test]
fn walk_is_preorder() {
    // SELECT a + 1 FROM t WHERE a > 1
    let query = Select::new()
        .columns([call(&standard::PLUS, [ident("a"), int(1)])])
        .from(ident("t"))
        .where_clause(call(&standard::GREATER_THAN, [ident("a"), int(1)]))
        .build();
    assert_eq!(
        call_kinds(&query),
        [SqlKind::Select, SqlKind::Plus, SqlKind::GreaterThan]
    );
}

#[test]
fn walk_visits_subqueries_and_joins() {
    let subquery = Select::new().columns([ident("a")]).from(ident("t")).build();
    let from = join(alias(subquery, "s"), JoinType::Left, ident("u"))
        .on(call(&standard::EQUALS, [ident("a"), ident("b")]));
    let query = Select::new().columns([ident("a")]).from(from).build();
    assert_eq!(
        call_kinds(&query),
        [
            SqlKind::Select,
            SqlKind::Join,
            SqlKind::As,
            SqlKind::Select,
            SqlKind::Equals,
        ]
    );
}

#[test]
fn walk_enters_ddl_operands() {
    let query = Select::new().columns([ident("a")]).from(ident("t")).build();
    let statement = create_job("job", insert("sink", [], query));
    assert_eq!(
        call_kinds(&statement),
        [SqlKind::OtherDdl, SqlKind::Insert, SqlKind::Select]
    );
}

#[test]
fn table_function_kinds() {
    let source = table_function(call(&engine::GENERATE_SERIES, [int(1), int(3)]));
    assert_eq!(
        call_kinds(&source),
        [SqlKind::CollectionTable, SqlKind::OtherFunction]
    );
}

#[test]
fn operator_identity_is_not_the_name() {
    let std_upper = call(&standard::UPPER, [string("a")]);
    let engine_upper = call(&engine::UPPER, [string("a")]);
    let operator = |node: &SqlNode| node.as_call().map(SqlCall::operator);

    assert_eq!(
        operator(&std_upper).map(OperatorRef::name),
        operator(&engine_upper).map(OperatorRef::name)
    );
    assert_ne!(operator(&std_upper), operator(&engine_upper));
    assert_eq!(
        operator(&engine_upper),
        Some(OperatorRef::new(&engine::UPPER))
    );
}

#[test]
fn positions_survive_building() {
    let pos = SqlParserPos::new(1, 8, 1, 20);
    let node = call(&standard::PLUS, [int(1), int(2)]).at(pos);
    assert_eq!(node.position(), pos);
    assert_eq!(node.as_call().map(SqlCall::position), Some(pos));
}
