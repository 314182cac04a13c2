//! Tests for table functions in FROM.

mod common;
use common::*;

use oxide_sql_ast::builder::{call, ident, int, named_argument, string, table_function};
use oxide_sql_ast::operators::{engine, standard};

fn file_options() -> oxide_sql_ast::SqlNode {
    call(
        &standard::MAP_VALUE_CONSTRUCTOR,
        [string("path"), string("/data"), string("glob"), string("*.csv")],
    )
}

#[test]
fn generate_series() {
    // SELECT * FROM TABLE(GENERATE_SERIES(1, 10))
    let source = table_function(call(&engine::GENERATE_SERIES, [int(1), int(10)]));
    validate_ok(&select_from(source));
}

#[test]
fn generate_stream_with_named_argument() {
    let source = table_function(call(
        &engine::GENERATE_STREAM,
        [named_argument("rate", int(100))],
    ));
    validate_ok(&select_from(source));
}

#[test]
fn map_constructor_is_rejected_elsewhere() {
    assert_rejected(&select_expr(file_options()), "MAP VALUE CONSTRUCTOR is not supported");
}

#[test]
fn file_table_functions_skip_their_options() {
    for function in [
        &engine::CSV_FILE,
        &engine::JSON_FLAT_FILE,
        &engine::AVRO_FILE,
        &engine::PARQUET_FILE,
    ] {
        let source = table_function(call(function, [file_options()]));
        validate_ok(&select_from(source));
    }
}

#[test]
fn skip_is_limited_to_the_file_function_subtree() {
    let source = table_function(call(&engine::CSV_FILE, [file_options()]));
    let query = oxide_sql_ast::builder::Select::new()
        .columns([call(&standard::JSON_VALUE, [ident("doc"), string("$")])])
        .from(source)
        .build();
    assert_rejected(&query, "JSON_VALUE is not supported");
}

#[test]
fn unnest_and_lateral_are_rejected() {
    assert_rejected(
        &select_from(call(&standard::UNNEST, [ident("arr")])),
        "UNNEST is not supported",
    );
    assert_rejected(
        &select_from(call(&standard::LATERAL, [ident("t")])),
        "LATERAL is not supported",
    );
}
