//! Expression and leaf builders.

use crate::literal::{JoinConditionType, JoinType, LiteralValue, SqlLiteral, Symbol, TrimFlag};
use crate::node::{
    SqlBasicCall, SqlDynamicParam, SqlIdentifier, SqlIntervalQualifier, SqlJoin, SqlNode,
    SqlNodeList,
};
use crate::operator::{OperatorRef, SqlOperator};
use crate::operators::standard;
use crate::pos::SqlParserPos;
use crate::types::SqlTypeName;

/// Creates a single-part identifier.
#[must_use]
pub fn ident(name: &str) -> SqlNode {
    SqlIdentifier::new(name, SqlParserPos::ZERO).into()
}

/// Creates a qualified identifier such as `t.a`.
#[must_use]
pub fn qualified(table: &str, name: &str) -> SqlNode {
    SqlIdentifier::compound([table, name], SqlParserPos::ZERO).into()
}

/// Creates `*`.
#[must_use]
pub fn star() -> SqlNode {
    SqlIdentifier::star(SqlParserPos::ZERO).into()
}

/// Creates an integer literal.
#[must_use]
pub fn int(value: i64) -> SqlNode {
    SqlLiteral::integer(value, SqlParserPos::ZERO).into()
}

/// Creates a decimal literal.
#[must_use]
pub fn decimal(value: &str) -> SqlNode {
    SqlLiteral::decimal(value, SqlParserPos::ZERO).into()
}

/// Creates a string literal.
#[must_use]
pub fn string(value: &str) -> SqlNode {
    SqlLiteral::string(value, SqlParserPos::ZERO).into()
}

/// Creates a boolean literal.
#[must_use]
pub const fn boolean(value: bool) -> SqlNode {
    SqlNode::Literal(SqlLiteral::boolean(value, SqlParserPos::ZERO))
}

/// Creates a NULL literal.
#[must_use]
pub const fn null() -> SqlNode {
    SqlNode::Literal(SqlLiteral::null(SqlParserPos::ZERO))
}

/// Creates a literal of an arbitrary type.
#[must_use]
pub const fn literal(value: LiteralValue, type_name: SqlTypeName) -> SqlNode {
    SqlNode::Literal(SqlLiteral::new(value, type_name, SqlParserPos::ZERO))
}

/// Creates an interval literal such as `INTERVAL '1' DAY`.
#[must_use]
pub fn interval(value: &str, type_name: SqlTypeName) -> SqlNode {
    literal(LiteralValue::Interval(String::from(value)), type_name)
}

/// Creates a symbol literal.
#[must_use]
pub const fn symbol(symbol: Symbol) -> SqlNode {
    SqlNode::Literal(SqlLiteral::symbol(symbol, SqlParserPos::ZERO))
}

/// Creates a `?` placeholder.
#[must_use]
pub const fn param(index: usize) -> SqlNode {
    SqlNode::DynamicParam(SqlDynamicParam {
        index,
        pos: SqlParserPos::ZERO,
    })
}

/// Creates an interval qualifier such as `YEAR` or `DAY TO SECOND`.
#[must_use]
pub fn unit(start_unit: &str, end_unit: Option<&str>) -> SqlNode {
    SqlNode::IntervalQualifier(SqlIntervalQualifier {
        start_unit: String::from(start_unit),
        end_unit: end_unit.map(String::from),
        pos: SqlParserPos::ZERO,
    })
}

/// Creates a list.
#[must_use]
pub fn list(items: impl IntoIterator<Item = SqlNode>) -> SqlNode {
    SqlNodeList::new(items.into_iter().collect(), SqlParserPos::ZERO).into()
}

/// Creates a call of `operator` on `operands`.
#[must_use]
pub fn call(operator: &'static SqlOperator, operands: impl IntoIterator<Item = SqlNode>) -> SqlNode {
    SqlBasicCall::new(
        OperatorRef::new(operator),
        operands.into_iter().collect(),
        SqlParserPos::ZERO,
    )
    .into()
}

/// Creates `expr AS alias`.
#[must_use]
pub fn alias(expr: SqlNode, alias: &str) -> SqlNode {
    call(&standard::AS, [expr, ident(alias)])
}

/// Creates `expr DESC` for an ORDER BY list.
#[must_use]
pub fn desc(expr: SqlNode) -> SqlNode {
    call(&standard::DESC, [expr])
}

/// Creates `CAST(expr AS type)`.
#[must_use]
pub fn cast(expr: SqlNode, type_spec: SqlNode) -> SqlNode {
    call(&standard::CAST, [expr, type_spec])
}

/// Creates `TRIM(flag chars FROM expr)`.
#[must_use]
pub fn trim(flag: TrimFlag, chars: SqlNode, expr: SqlNode) -> SqlNode {
    call(&standard::TRIM, [symbol(Symbol::Trim(flag)), chars, expr])
}

/// Creates `TABLE(function(...))` for a table function in FROM.
#[must_use]
pub fn table_function(function_call: SqlNode) -> SqlNode {
    call(&standard::COLLECTION_TABLE, [function_call])
}

/// Creates `name => value` for a named table function argument.
#[must_use]
pub fn named_argument(name: &str, value: SqlNode) -> SqlNode {
    call(&standard::ARGUMENT_ASSIGNMENT, [value, ident(name)])
}

/// Starts a join of two table expressions.
#[must_use]
pub const fn join(left: SqlNode, join_type: JoinType, right: SqlNode) -> Join {
    Join {
        left,
        join_type,
        right,
    }
}

/// A join awaiting its condition.
pub struct Join {
    left: SqlNode,
    join_type: JoinType,
    right: SqlNode,
}

impl Join {
    /// Finishes the join with an `ON` condition.
    #[must_use]
    pub fn on(self, condition: SqlNode) -> SqlNode {
        self.finish(JoinConditionType::On, Some(condition))
    }

    /// Finishes the join with a `USING` column list.
    #[must_use]
    pub fn using(self, columns: impl IntoIterator<Item = SqlNode>) -> SqlNode {
        self.finish(JoinConditionType::Using, Some(list(columns)))
    }

    /// Finishes the join without a condition.
    #[must_use]
    pub fn build(self) -> SqlNode {
        self.finish(JoinConditionType::None, None)
    }

    fn finish(self, condition_type: JoinConditionType, condition: Option<SqlNode>) -> SqlNode {
        SqlJoin::new(
            self.left,
            self.join_type,
            self.right,
            condition_type,
            condition,
            SqlParserPos::ZERO,
        )
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::SqlKind;
    use crate::node::SqlCall;

    #[test]
    fn test_call_kind() {
        let expr = call(&standard::PLUS, [int(1), int(2)]);
        assert_eq!(expr.as_call().map(SqlCall::kind), Some(SqlKind::Plus));
    }

    #[test]
    fn test_join_condition() {
        let node = join(ident("a"), JoinType::Inner, ident("b")).using([ident("id")]);
        let Some(SqlCall::Join(join)) = node.as_call() else {
            panic!("Expected JOIN, got {node:?}");
        };
        assert_eq!(join.join_type(), Some(JoinType::Inner));
        assert_eq!(join.condition_type(), Some(JoinConditionType::Using));
        assert!(join.condition.is_some());
    }

    #[test]
    fn test_string_literal_is_char() {
        let node = string("x");
        assert_eq!(node.as_literal().unwrap().type_name, SqlTypeName::Char);
    }
}
