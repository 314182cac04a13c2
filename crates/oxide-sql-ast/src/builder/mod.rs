//! Call tree builders.
//!
//! Parsers and tests assemble trees with these helpers instead of spelling
//! out every node. All nodes are created at [`SqlParserPos::ZERO`]; use
//! [`SqlNode::at`] or [`Select::at`] to place them.
//!
//! # Example
//!
//! ```rust
//! use oxide_sql_ast::builder::{call, ident, int, Select};
//! use oxide_sql_ast::operators::standard;
//!
//! // SELECT a FROM t WHERE a > 1
//! let query = Select::new()
//!     .columns([ident("a")])
//!     .from(ident("t"))
//!     .where_clause(call(&standard::GREATER_THAN, [ident("a"), int(1)]))
//!     .build();
//! # let _ = query;
//! ```
//!
//! [`SqlParserPos::ZERO`]: crate::pos::SqlParserPos::ZERO
//! [`SqlNode::at`]: crate::node::SqlNode::at

mod ddl;
mod expr;
mod select;

pub use ddl::{
    basic_type, basic_type_with, collection_type, column_decl, create_job, create_mapping, ddl,
    insert, option, row, row_type, user_type, values,
};
pub use expr::{
    alias, boolean, call, cast, decimal, desc, ident, int, interval, join, list, literal,
    named_argument, null, param, qualified, star, string, symbol, table_function, trim, unit,
    Join,
};
pub use select::{HasColumns, NoColumns, Select};
