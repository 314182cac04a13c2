//! Query block builder using the typestate pattern.
//!
//! A query block cannot be built without a select list: `build()` only
//! exists once `columns()` has been called.

use std::marker::PhantomData;

use crate::literal::{SelectKeyword, SqlLiteral, Symbol};
use crate::node::{SqlNode, SqlNodeList, SqlSelect};
use crate::pos::SqlParserPos;

// Typestate markers (zero-sized types)

/// Marker: No select list specified yet.
pub struct NoColumns;
/// Marker: Select list has been specified.
pub struct HasColumns;

/// A query block builder.
///
/// ```rust
/// use oxide_sql_ast::builder::{ident, int, Select};
///
/// let query = Select::new()
///     .columns([ident("a")])
///     .from(ident("t"))
///     .fetch(int(1))
///     .build();
/// # let _ = query;
/// ```
pub struct Select<Cols> {
    keywords: Vec<SelectKeyword>,
    columns: Vec<SqlNode>,
    from: Option<SqlNode>,
    where_clause: Option<SqlNode>,
    group_by: Option<Vec<SqlNode>>,
    having: Option<SqlNode>,
    order_by: Option<Vec<SqlNode>>,
    offset: Option<SqlNode>,
    fetch: Option<SqlNode>,
    pos: SqlParserPos,
    _state: PhantomData<Cols>,
}

impl Select<NoColumns> {
    /// Creates a new query block builder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keywords: vec![],
            columns: vec![],
            from: None,
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            offset: None,
            fetch: None,
            pos: SqlParserPos::ZERO,
            _state: PhantomData,
        }
    }

    /// Specifies the select list.
    #[must_use]
    pub fn columns(self, columns: impl IntoIterator<Item = SqlNode>) -> Select<HasColumns> {
        Select {
            keywords: self.keywords,
            columns: columns.into_iter().collect(),
            from: self.from,
            where_clause: self.where_clause,
            group_by: self.group_by,
            having: self.having,
            order_by: self.order_by,
            offset: self.offset,
            fetch: self.fetch,
            pos: self.pos,
            _state: PhantomData,
        }
    }
}

impl Default for Select<NoColumns> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Cols> Select<Cols> {
    /// Adds `DISTINCT`.
    #[must_use]
    pub fn distinct(mut self) -> Self {
        self.keywords.push(SelectKeyword::Distinct);
        self
    }

    /// Adds an explicit `ALL`.
    #[must_use]
    pub fn all(mut self) -> Self {
        self.keywords.push(SelectKeyword::All);
        self
    }

    /// Adds `STREAM`.
    #[must_use]
    pub fn stream(mut self) -> Self {
        self.keywords.push(SelectKeyword::Stream);
        self
    }

    /// Sets the FROM clause.
    #[must_use]
    pub fn from(mut self, from: SqlNode) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the WHERE clause.
    #[must_use]
    pub fn where_clause(mut self, condition: SqlNode) -> Self {
        self.where_clause = Some(condition);
        self
    }

    /// Sets the GROUP BY expressions.
    #[must_use]
    pub fn group_by(mut self, exprs: impl IntoIterator<Item = SqlNode>) -> Self {
        self.group_by = Some(exprs.into_iter().collect());
        self
    }

    /// Sets the HAVING clause.
    #[must_use]
    pub fn having(mut self, condition: SqlNode) -> Self {
        self.having = Some(condition);
        self
    }

    /// Sets the ORDER BY items.
    #[must_use]
    pub fn order_by(mut self, items: impl IntoIterator<Item = SqlNode>) -> Self {
        self.order_by = Some(items.into_iter().collect());
        self
    }

    /// Sets the OFFSET clause.
    #[must_use]
    pub fn offset(mut self, offset: SqlNode) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the FETCH clause.
    #[must_use]
    pub fn fetch(mut self, fetch: SqlNode) -> Self {
        self.fetch = Some(fetch);
        self
    }

    /// Sets the source position of the query block.
    #[must_use]
    pub fn at(mut self, pos: SqlParserPos) -> Self {
        self.pos = pos;
        self
    }
}

impl Select<HasColumns> {
    /// Builds the query block.
    #[must_use]
    pub fn into_select(self) -> SqlSelect {
        let pos = self.pos;
        let keywords = self
            .keywords
            .into_iter()
            .map(|keyword| SqlNode::from(SqlLiteral::symbol(Symbol::Select(keyword), pos)))
            .collect();
        SqlSelect {
            keywords: SqlNodeList::new(keywords, pos),
            select_list: SqlNodeList::new(self.columns, pos),
            from: self.from.map(Box::new),
            where_clause: self.where_clause.map(Box::new),
            group_by: self.group_by.map(|items| SqlNodeList::new(items, pos)),
            having: self.having.map(Box::new),
            order_by: self.order_by.map(|items| SqlNodeList::new(items, pos)),
            offset: self.offset.map(Box::new),
            fetch: self.fetch.map(Box::new),
            pos,
        }
    }

    /// Builds the query block as a node.
    #[must_use]
    pub fn build(self) -> SqlNode {
        self.into_select().into()
    }
}
