//! Operator tables.
//!
//! [`standard`] holds the parser's built-in operators; [`engine`] holds the
//! engine's own functions, extension statements, and DDL operators.

pub mod engine;
pub mod standard;
