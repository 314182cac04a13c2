//! # oxide-sql-restrict
//!
//! Restricts parsed SQL to the dialect the engine can execute.
//!
//! The parser accepts far more syntax than the engine supports. Before a
//! statement is planned, [`UnsupportedOperationValidator`] walks its tree
//! and rejects the first construct that is not explicitly listed in the
//! [`PolicyTables`]. The policy is closed-world: new parser syntax stays
//! rejected until it is added to the tables.
//!
//! ```rust
//! use oxide_sql_ast::builder::{ident, int, join, Select};
//! use oxide_sql_ast::operators::standard;
//! use oxide_sql_ast::JoinType;
//! use oxide_sql_restrict::validate;
//!
//! // SELECT a FROM t WHERE a > 1
//! let query = Select::new()
//!     .columns([ident("a")])
//!     .from(ident("t"))
//!     .where_clause(oxide_sql_ast::builder::call(&standard::GREATER_THAN, [ident("a"), int(1)]))
//!     .build();
//! assert!(validate(&query).is_ok());
//!
//! // SELECT * FROM a FULL JOIN b ON TRUE
//! let query = Select::new()
//!     .columns([oxide_sql_ast::builder::star()])
//!     .from(join(ident("a"), JoinType::Full, ident("b")).on(oxide_sql_ast::builder::boolean(true)))
//!     .build();
//! let err = validate(&query).unwrap_err();
//! assert_eq!(err.description(), "FULL join is not supported");
//! ```

pub mod error;
pub mod policy;
pub mod validator;

pub use error::{Result, ValidationError};
pub use policy::PolicyTables;
pub use validator::UnsupportedOperationValidator;

use oxide_sql_ast::SqlNode;

/// Validates `root` against the process-wide policy.
///
/// # Errors
///
/// Returns the first unsupported construct in pre-order.
pub fn validate(root: &SqlNode) -> Result<()> {
    UnsupportedOperationValidator::new().validate(root)
}
