//! Tests for the join variant gate.

mod common;
use common::*;

use oxide_sql_ast::builder::{call, ident, join, qualified, symbol};
use oxide_sql_ast::operators::standard;
use oxide_sql_ast::{JoinConditionType, JoinType, Symbol};

fn on_id() -> oxide_sql_ast::SqlNode {
    call(&standard::EQUALS, [qualified("a", "id"), qualified("b", "id")])
}

#[test]
fn supported_join_variants() {
    for join_type in [JoinType::Inner, JoinType::Left, JoinType::Right] {
        let query = select_from(join(ident("a"), join_type, ident("b")).on(on_id()));
        validate_ok(&query);
    }
}

#[test]
fn cross_and_comma_joins() {
    validate_ok(&select_from(
        join(ident("a"), JoinType::Cross, ident("b")).build(),
    ));
    // SELECT * FROM a, b WHERE a.id = b.id
    let query = oxide_sql_ast::builder::Select::new()
        .columns([oxide_sql_ast::builder::star()])
        .from(join(ident("a"), JoinType::Comma, ident("b")).build())
        .where_clause(on_id())
        .build();
    validate_ok(&query);
}

#[test]
fn join_using() {
    let query = select_from(join(ident("a"), JoinType::Left, ident("b")).using([ident("id")]));
    validate_ok(&query);
}

#[test]
fn full_join_is_rejected() {
    let query = select_from(join(ident("a"), JoinType::Full, ident("b")).on(on_id()));
    let err = validate_err(&query);
    assert!(err.description().contains("FULL"));
    assert_eq!(err.description(), "FULL join is not supported");
}

#[test]
fn semi_and_anti_joins_are_rejected() {
    assert_rejected(
        &select_from(join(ident("a"), JoinType::LeftSemiJoin, ident("b")).on(on_id())),
        "LEFT_SEMI_JOIN join is not supported",
    );
    assert_rejected(
        &select_from(join(ident("a"), JoinType::LeftAntiJoin, ident("b")).on(on_id())),
        "LEFT_ANTI_JOIN join is not supported",
    );
}

#[test]
fn nested_joins_are_checked() {
    // a JOIN (b FULL JOIN c)
    let inner = join(ident("b"), JoinType::Full, ident("c")).build();
    let query = select_from(join(ident("a"), JoinType::Inner, inner).on(on_id()));
    assert_rejected(&query, "FULL join is not supported");
}

#[test]
fn join_condition_is_validated() {
    let condition = call(&standard::IS_DISTINCT_FROM, [ident("x"), ident("y")]);
    let query = select_from(join(ident("a"), JoinType::Inner, ident("b")).on(condition));
    assert_rejected(&query, "IS DISTINCT FROM is not supported");
}

#[test]
fn join_symbols_as_literals() {
    validate_ok(&symbol(Symbol::Join(JoinType::Cross)));
    validate_ok(&symbol(Symbol::JoinCondition(JoinConditionType::Using)));
    assert_rejected(
        &symbol(Symbol::Join(JoinType::Full)),
        "FULL literal is not supported",
    );
}
