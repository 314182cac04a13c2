//! Tests for query blocks: scenarios, FETCH/OFFSET placement, ordering.

mod common;
use common::*;

use oxide_sql_ast::builder::{
    alias, call, desc, ident, int, join, list, param, star, string, Select,
};
use oxide_sql_ast::operators::{engine, standard};
use oxide_sql_ast::JoinType;

const NESTED_FETCH: &str = "FETCH/OFFSET is only supported for the top-level SELECT";

#[test]
fn select_with_where() {
    // SELECT a FROM t WHERE a > 1
    let query = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .where_clause(greater_than("a", int(1)))
        .build();
    validate_ok(&query);
}

#[test]
fn select_with_fetch_at_top_level() {
    // SELECT a FROM t FETCH FIRST 1 ROWS ONLY
    let query = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .fetch(int(1))
        .build();
    validate_ok(&query);
}

#[test]
fn select_with_offset_and_fetch_at_top_level() {
    let query = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .offset(int(10))
        .fetch(param(0))
        .build();
    validate_ok(&query);
}

#[test]
fn fetch_in_subquery_is_rejected() {
    // SELECT * FROM (SELECT a FROM t FETCH FIRST 1 ROWS ONLY)
    let subquery = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .fetch(int(1))
        .at(pos(1, 16))
        .build();
    let err = validate_err(&select_from(subquery));
    assert_eq!(err.description(), NESTED_FETCH);
    assert_eq!(err.position(), pos(1, 16));
}

#[test]
fn offset_in_subquery_is_rejected() {
    let subquery = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .offset(int(5))
        .build();
    assert_rejected(&select_from(subquery), NESTED_FETCH);
}

#[test]
fn fetch_deeply_nested_is_rejected() {
    let innermost = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .fetch(int(1))
        .build();
    let middle = select_from(alias(innermost, "x"));
    let outer = select_from(alias(middle, "y"));
    assert_rejected(&outer, NESTED_FETCH);
}

#[test]
fn fetch_in_where_subquery_is_rejected() {
    // SELECT a FROM t WHERE a IN (SELECT b FROM u FETCH FIRST 3 ROWS ONLY)
    let subquery = Select::new()
        .columns([ident("b")])
        .from(ident("u"))
        .fetch(int(3))
        .build();
    let query = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .where_clause(call(&standard::IN, [ident("a"), subquery]))
        .build();
    assert_rejected(&query, NESTED_FETCH);
}

#[test]
fn subquery_without_fetch_is_accepted() {
    let subquery = Select::new().columns([ident("a")]).from(ident("t")).build();
    let query = Select::new()
        .columns([star()])
        .from(alias(subquery, "s"))
        .fetch(int(1))
        .build();
    validate_ok(&query);
}

#[test]
fn distinct_and_all_are_accepted() {
    validate_ok(&Select::new().distinct().columns([ident("a")]).build());
    validate_ok(&Select::new().all().columns([ident("a")]).build());
}

#[test]
fn stream_keyword_is_rejected() {
    let query = Select::new().stream().columns([ident("a")]).build();
    assert_rejected(&query, "STREAM literal is not supported");
}

#[test]
fn group_by_having_order_by() {
    // SELECT a, COUNT(*) FROM t GROUP BY a HAVING COUNT(*) > 1 ORDER BY a DESC
    let count = || call(&standard::COUNT, [star()]);
    let query = Select::new()
        .columns([ident("a"), count()])
        .from(ident("t"))
        .group_by([ident("a")])
        .having(call(&standard::GREATER_THAN, [count(), int(1)]))
        .order_by([desc(ident("a"))])
        .build();
    validate_ok(&query);
}

#[test]
fn nulls_first_is_rejected() {
    let query = Select::new()
        .columns([ident("a")])
        .from(ident("t"))
        .order_by([call(&standard::NULLS_FIRST, [ident("a")])])
        .build();
    assert_rejected(&query, "NULLS FIRST is not supported");
}

#[test]
fn union_is_accepted() {
    let left = Select::new().columns([ident("a")]).from(ident("t")).build();
    let right = Select::new().columns([ident("a")]).from(ident("u")).build();
    validate_ok(&call(&standard::UNION_ALL, [left, right]));
}

#[test]
fn except_and_intersect_are_rejected() {
    let left = || Select::new().columns([ident("a")]).from(ident("t")).build();
    let right = || Select::new().columns([ident("a")]).from(ident("u")).build();
    assert_rejected(
        &call(&standard::EXCEPT, [left(), right()]),
        "EXCEPT is not supported",
    );
    assert_rejected(
        &call(&standard::INTERSECT, [left(), right()]),
        "INTERSECT is not supported",
    );
}

#[test]
fn order_by_wrapper_is_rejected_by_kind() {
    let query = Select::new().columns([ident("a")]).from(ident("t")).build();
    let wrapped = call(&standard::ORDER_BY, [query, list([ident("a")])]);
    assert_rejected(&wrapped, "ORDER BY is not supported");
}

#[test]
fn with_clause_is_rejected() {
    let query = Select::new().columns([ident("a")]).from(ident("w")).build();
    assert_rejected(&call(&standard::WITH, [list([]), query]), "WITH is not supported");
}

#[test]
fn window_functions_are_rejected() {
    let over = call(
        &standard::OVER,
        [call(&standard::ROW_NUMBER, []), list([])],
    );
    assert_rejected(&select_expr(over), "OVER is not supported");
}

#[test]
fn first_violation_in_preorder_wins() {
    // Select list is visited before FROM.
    let query = Select::new()
        .columns([call(&standard::EXISTS, [ident("a")])])
        .from(join(ident("a"), JoinType::Full, ident("b")).build())
        .build();
    assert_rejected(&query, "EXISTS is not supported");

    // FROM is visited before WHERE.
    let query = Select::new()
        .columns([ident("a")])
        .from(join(ident("a"), JoinType::Full, ident("b")).build())
        .where_clause(call(&standard::EXISTS, [ident("a")]))
        .build();
    assert_rejected(&query, "FULL join is not supported");
}

#[test]
fn parent_is_checked_before_children() {
    // Both the aggregate and its argument are unsupported.
    let expr = call(
        &standard::STDDEV_POP,
        [call(&standard::UPPER, [string("a")])],
    );
    assert_rejected(&select_expr(expr), "STDDEV POP is not supported");
}

#[test]
fn validation_is_deterministic() {
    let query = Select::new()
        .columns([call(&standard::JSON_VALUE, [ident("doc"), string("$.a")])])
        .from(ident("t"))
        .build();
    let first = validate_err(&query);
    let second = validate_err(&query);
    assert_eq!(first, second);
    assert_eq!(first.description(), "JSON_VALUE is not supported");
}

#[test]
fn engine_functions_in_expressions() {
    // SELECT UPPER(name) || '!', ROUND(POWER(x, 2)) FROM t WHERE name NOT LIKE 'a%'
    let query = Select::new()
        .columns([
            call(
                &engine::CONCAT,
                [call(&engine::UPPER, [ident("name")]), string("!")],
            ),
            call(
                &engine::ROUND,
                [call(&engine::POWER, [ident("x"), int(2)])],
            ),
        ])
        .from(ident("t"))
        .where_clause(call(&engine::NOT_LIKE, [ident("name"), string("a%")]))
        .build();
    validate_ok(&query);
}

#[test]
fn standard_function_shadowed_by_engine_is_rejected() {
    let query = select_expr(call(&standard::UPPER, [ident("name")]));
    assert_rejected(&query, "UPPER is not supported");
}
