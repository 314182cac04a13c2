//! # oxide-sql-ast
//!
//! The call-tree representation of parsed SQL statements.
//!
//! The parser produces a tree in which every construct is a leaf
//! (literal, identifier, type specification, placeholder), a list, or a
//! call of an operator on operands. Each call has a [`SqlKind`] naming its
//! syntactic category and an [`OperatorRef`] naming the exact operator.
//!
//! This crate provides:
//! - The node types and the operator tables
//! - A generic pre-order visitor, [`SqlVisitor`]
//! - Builders for assembling trees by hand
//!
//! ```rust
//! use oxide_sql_ast::builder::{ident, join, Select};
//! use oxide_sql_ast::JoinType;
//!
//! // SELECT * FROM a LEFT JOIN b USING (id)
//! let query = Select::new()
//!     .columns([oxide_sql_ast::builder::star()])
//!     .from(join(ident("a"), JoinType::Left, ident("b")).using([ident("id")]))
//!     .build();
//! # let _ = query;
//! ```

pub mod builder;
pub mod kind;
pub mod literal;
pub mod node;
pub mod operator;
pub mod operators;
pub mod pos;
pub mod types;
pub mod visitor;

pub use kind::SqlKind;
pub use literal::{
    JoinConditionType, JoinType, LiteralValue, SelectKeyword, SqlLiteral, Symbol, TrimFlag,
};
pub use node::{
    SqlBasicCall, SqlCall, SqlDdl, SqlDynamicParam, SqlIdentifier, SqlIntervalQualifier, SqlJoin,
    SqlNode, SqlNodeList, SqlSelect,
};
pub use operator::{OperatorFamily, OperatorRef, SqlOperator};
pub use pos::SqlParserPos;
pub use types::{SqlDataTypeSpec, SqlTypeName, TypeNameSpec};
pub use visitor::{walk_call, walk_node, walk_node_list, SqlVisitor};
