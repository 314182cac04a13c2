//! Statement builders: DDL, type specifications, INSERT, VALUES.

use super::expr::{call, ident, list, string};
use crate::node::{SqlDdl, SqlIdentifier, SqlNode};
use crate::operator::{OperatorRef, SqlOperator};
use crate::operators::{engine, standard};
use crate::pos::SqlParserPos;
use crate::types::{SqlDataTypeSpec, TypeNameSpec};

fn type_spec(spec: TypeNameSpec) -> SqlNode {
    SqlDataTypeSpec::new(spec, SqlParserPos::ZERO).into()
}

fn name(name: &str) -> SqlIdentifier {
    SqlIdentifier::new(name, SqlParserPos::ZERO)
}

/// Creates a built-in type such as `INTEGER`.
#[must_use]
pub fn basic_type(type_name: &str) -> SqlNode {
    basic_type_with(type_name, None, None)
}

/// Creates a built-in type with precision and scale, e.g. `DECIMAL(10, 2)`.
#[must_use]
pub fn basic_type_with(type_name: &str, precision: Option<u32>, scale: Option<u32>) -> SqlNode {
    type_spec(TypeNameSpec::Basic {
        name: name(type_name),
        precision,
        scale,
    })
}

/// Creates a type referenced by name.
#[must_use]
pub fn user_type(type_name: &str) -> SqlNode {
    type_spec(TypeNameSpec::UserDefined {
        name: name(type_name),
    })
}

/// Creates a collection type such as `INTEGER ARRAY`.
#[must_use]
pub fn collection_type(element: &str, collection: &str) -> SqlNode {
    type_spec(TypeNameSpec::Collection {
        element: Box::new(TypeNameSpec::Basic {
            name: name(element),
            precision: None,
            scale: None,
        }),
        collection: name(collection),
    })
}

/// Creates an inline row type from `(field, type)` pairs of built-in types.
#[must_use]
pub fn row_type<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> SqlNode {
    type_spec(TypeNameSpec::Row {
        name: name("ROW"),
        fields: fields
            .into_iter()
            .map(|(field, type_name)| {
                (
                    name(field),
                    TypeNameSpec::Basic {
                        name: name(type_name),
                        precision: None,
                        scale: None,
                    },
                )
            })
            .collect(),
    })
}

/// Creates a column declaration.
#[must_use]
pub fn column_decl(column: &str, type_spec: SqlNode) -> SqlNode {
    call(&standard::COLUMN_DECL, [ident(column), type_spec])
}

/// Creates an `OPTIONS` entry.
#[must_use]
pub fn option(key: &str, value: &str) -> SqlNode {
    call(&engine::OPTION, [string(key), string(value)])
}

/// Creates `CREATE MAPPING name (columns) OPTIONS (options)`.
#[must_use]
pub fn create_mapping(
    mapping: &str,
    columns: impl IntoIterator<Item = SqlNode>,
    options: impl IntoIterator<Item = SqlNode>,
) -> SqlNode {
    call(
        &engine::CREATE_MAPPING,
        [ident(mapping), list(columns), list(options)],
    )
}

/// Creates a DDL statement identified by its concrete statement type.
#[must_use]
pub fn ddl(
    operator: &'static SqlOperator,
    statement: &'static str,
    operands: impl IntoIterator<Item = SqlNode>,
) -> SqlNode {
    SqlDdl {
        operator: OperatorRef::new(operator),
        statement,
        operands: operands.into_iter().map(Some).collect(),
        pos: SqlParserPos::ZERO,
    }
    .into()
}

/// Creates `CREATE JOB name AS statement`.
#[must_use]
pub fn create_job(job: &str, statement: SqlNode) -> SqlNode {
    ddl(&engine::CREATE_JOB, "CreateJob", [ident(job), statement])
}

/// Creates a row constructor for VALUES.
#[must_use]
pub fn row(items: impl IntoIterator<Item = SqlNode>) -> SqlNode {
    call(&standard::ROW, items)
}

/// Creates `VALUES row, ...`.
#[must_use]
pub fn values(rows: impl IntoIterator<Item = SqlNode>) -> SqlNode {
    call(&standard::VALUES, rows)
}

/// Creates `INSERT INTO target (columns) source`.
#[must_use]
pub fn insert(target: &str, columns: impl IntoIterator<Item = SqlNode>, source: SqlNode) -> SqlNode {
    call(&standard::INSERT, [list([]), ident(target), source, list(columns)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SqlKind;
    use crate::node::SqlCall;

    #[test]
    fn test_create_job_is_other_ddl() {
        let node = create_job("j", values([row([string("a")])]));
        let Some(SqlCall::Ddl(ddl)) = node.as_call() else {
            panic!("Expected DDL, got {node:?}");
        };
        assert_eq!(ddl.statement(), "CreateJob");
        assert_eq!(node.as_call().map(SqlCall::kind), Some(SqlKind::OtherDdl));
    }

    #[test]
    fn test_row_type_fields() {
        let SqlNode::DataTypeSpec(spec) = row_type([("a", "INTEGER"), ("b", "VARCHAR")]) else {
            panic!("Expected a type specification");
        };
        assert!(matches!(&spec.spec, TypeNameSpec::Row { fields, .. } if fields.len() == 2));
    }
}
