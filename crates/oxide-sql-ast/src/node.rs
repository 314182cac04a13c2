//! Nodes of the call tree.
//!
//! Every construct of a statement is either a leaf (literal, identifier,
//! type, parameter, interval qualifier), a list, or a call of an operator
//! on operands. Queries, joins, and DDL statements are calls with named
//! operands.

use core::fmt;

use crate::kind::SqlKind;
use crate::literal::{JoinConditionType, JoinType, SqlLiteral, Symbol};
use crate::operator::OperatorRef;
use crate::operators::standard;
use crate::pos::SqlParserPos;
use crate::types::SqlDataTypeSpec;

/// A possibly qualified name. The star of `t.*` is an empty last part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlIdentifier {
    /// Name parts, outermost first.
    pub names: Vec<String>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlIdentifier {
    /// Creates a single-part identifier.
    #[must_use]
    pub fn new(name: impl Into<String>, pos: SqlParserPos) -> Self {
        Self {
            names: vec![name.into()],
            pos,
        }
    }

    /// Creates a qualified identifier.
    #[must_use]
    pub fn compound<I, S>(names: I, pos: SqlParserPos) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            pos,
        }
    }

    /// Creates the `*` identifier.
    #[must_use]
    pub fn star(pos: SqlParserPos) -> Self {
        Self::new(String::new(), pos)
    }

    /// Returns the name if the identifier has a single part.
    #[must_use]
    pub fn simple(&self) -> Option<&str> {
        match self.names.as_slice() {
            [name] => Some(name),
            _ => None,
        }
    }

    /// Returns true if the last part is a star.
    #[must_use]
    pub fn is_star(&self) -> bool {
        self.names.last().is_some_and(String::is_empty)
    }
}

impl fmt::Display for SqlIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            if name.is_empty() {
                f.write_str("*")?;
            } else {
                f.write_str(name)?;
            }
        }
        Ok(())
    }
}

/// A `?` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlDynamicParam {
    /// Zero-based placeholder index.
    pub index: usize,
    /// Source position.
    pub pos: SqlParserPos,
}

/// The unit part of an interval literal or of `EXTRACT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlIntervalQualifier {
    /// Leading unit (`YEAR`, `DAY`, ...).
    pub start_unit: String,
    /// Trailing unit of a range such as `YEAR TO MONTH`.
    pub end_unit: Option<String>,
    /// Source position.
    pub pos: SqlParserPos,
}

/// An ordered list of nodes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SqlNodeList {
    /// The items.
    pub items: Vec<SqlNode>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlNodeList {
    /// Creates a list.
    #[must_use]
    pub const fn new(items: Vec<SqlNode>, pos: SqlParserPos) -> Self {
        Self { items, pos }
    }

    /// Returns true if the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}

/// A call whose operands are positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlBasicCall {
    /// The operator.
    pub operator: OperatorRef,
    /// Operands; absent optional operands are `None`.
    pub operands: Vec<Option<SqlNode>>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlBasicCall {
    /// Creates a call with all operands present.
    #[must_use]
    pub fn new(operator: OperatorRef, operands: Vec<SqlNode>, pos: SqlParserPos) -> Self {
        Self {
            operator,
            operands: operands.into_iter().map(Some).collect(),
            pos,
        }
    }
}

/// A query block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlSelect {
    /// `DISTINCT`/`ALL`/`STREAM` keyword literals.
    pub keywords: SqlNodeList,
    /// Projected expressions.
    pub select_list: SqlNodeList,
    /// FROM clause.
    pub from: Option<Box<SqlNode>>,
    /// WHERE clause.
    pub where_clause: Option<Box<SqlNode>>,
    /// GROUP BY expressions.
    pub group_by: Option<SqlNodeList>,
    /// HAVING clause.
    pub having: Option<Box<SqlNode>>,
    /// ORDER BY items.
    pub order_by: Option<SqlNodeList>,
    /// OFFSET clause.
    pub offset: Option<Box<SqlNode>>,
    /// FETCH clause.
    pub fetch: Option<Box<SqlNode>>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlSelect {
    /// Creates a query block with only a select list.
    #[must_use]
    pub fn new(select_list: SqlNodeList, pos: SqlParserPos) -> Self {
        Self {
            keywords: SqlNodeList::new(Vec::new(), pos),
            select_list,
            from: None,
            where_clause: None,
            group_by: None,
            having: None,
            order_by: None,
            offset: None,
            fetch: None,
            pos,
        }
    }

    /// Returns the FETCH expression, if any.
    #[must_use]
    pub fn fetch(&self) -> Option<&SqlNode> {
        self.fetch.as_deref()
    }

    /// Returns the OFFSET expression, if any.
    #[must_use]
    pub fn offset(&self) -> Option<&SqlNode> {
        self.offset.as_deref()
    }
}

/// A join of two table expressions.
///
/// The variant, the NATURAL flag, and the condition type are stored as
/// literal operands so that a generic walk visits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlJoin {
    /// Left input.
    pub left: Box<SqlNode>,
    /// NATURAL flag (boolean literal).
    pub natural: Box<SqlNode>,
    /// Join variant (symbol literal).
    pub join_type: Box<SqlNode>,
    /// Right input.
    pub right: Box<SqlNode>,
    /// Condition type (symbol literal).
    pub condition_type: Box<SqlNode>,
    /// ON expression or USING column list.
    pub condition: Option<Box<SqlNode>>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlJoin {
    /// Creates a join.
    #[must_use]
    pub fn new(
        left: SqlNode,
        join_type: JoinType,
        right: SqlNode,
        condition_type: JoinConditionType,
        condition: Option<SqlNode>,
        pos: SqlParserPos,
    ) -> Self {
        Self {
            left: Box::new(left),
            natural: Box::new(SqlNode::Literal(SqlLiteral::boolean(false, pos))),
            join_type: Box::new(SqlNode::Literal(SqlLiteral::symbol(
                Symbol::Join(join_type),
                pos,
            ))),
            right: Box::new(right),
            condition_type: Box::new(SqlNode::Literal(SqlLiteral::symbol(
                Symbol::JoinCondition(condition_type),
                pos,
            ))),
            condition: condition.map(Box::new),
            pos,
        }
    }

    /// Returns the join variant.
    #[must_use]
    pub fn join_type(&self) -> Option<JoinType> {
        match self.join_type.as_literal()?.as_symbol()? {
            Symbol::Join(join_type) => Some(*join_type),
            _ => None,
        }
    }

    /// Returns how the join states its condition.
    #[must_use]
    pub fn condition_type(&self) -> Option<JoinConditionType> {
        match self.condition_type.as_literal()?.as_symbol()? {
            Symbol::JoinCondition(condition_type) => Some(*condition_type),
            _ => None,
        }
    }
}

/// A DDL statement other than the generic table statements.
///
/// The parser does not expose a structured subtype for these statements;
/// `statement` names the concrete statement type and is the only way to
/// tell, say, `CREATE JOB` from `CREATE VIEW` once both carry `OTHER_DDL`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlDdl {
    /// The operator.
    pub operator: OperatorRef,
    /// Name of the concrete statement type.
    pub statement: &'static str,
    /// Operands.
    pub operands: Vec<Option<SqlNode>>,
    /// Source position.
    pub pos: SqlParserPos,
}

impl SqlDdl {
    /// Returns the name of the concrete statement type.
    #[must_use]
    pub const fn statement(&self) -> &'static str {
        self.statement
    }
}

/// A call of an operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SqlCall {
    Basic(SqlBasicCall),
    Select(SqlSelect),
    Join(SqlJoin),
    Ddl(SqlDdl),
}

impl SqlCall {
    /// Returns the operator.
    #[must_use]
    pub fn operator(&self) -> OperatorRef {
        match self {
            Self::Basic(call) => call.operator,
            Self::Select(_) => OperatorRef::new(&standard::SELECT),
            Self::Join(_) => OperatorRef::new(&standard::JOIN),
            Self::Ddl(ddl) => ddl.operator,
        }
    }

    /// Returns the syntactic category, which is the operator's kind.
    #[must_use]
    pub fn kind(&self) -> SqlKind {
        self.operator().kind()
    }

    /// Returns the source position.
    #[must_use]
    pub const fn position(&self) -> SqlParserPos {
        match self {
            Self::Basic(SqlBasicCall { pos, .. })
            | Self::Select(SqlSelect { pos, .. })
            | Self::Join(SqlJoin { pos, .. })
            | Self::Ddl(SqlDdl { pos, .. }) => *pos,
        }
    }

    fn position_mut(&mut self) -> &mut SqlParserPos {
        match self {
            Self::Basic(SqlBasicCall { pos, .. })
            | Self::Select(SqlSelect { pos, .. })
            | Self::Join(SqlJoin { pos, .. })
            | Self::Ddl(SqlDdl { pos, .. }) => pos,
        }
    }
}

/// A node of the call tree.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SqlNode {
    Call(SqlCall),
    Literal(SqlLiteral),
    Identifier(SqlIdentifier),
    DataTypeSpec(SqlDataTypeSpec),
    DynamicParam(SqlDynamicParam),
    IntervalQualifier(SqlIntervalQualifier),
    NodeList(SqlNodeList),
}

impl SqlNode {
    /// Returns the source position.
    #[must_use]
    pub const fn position(&self) -> SqlParserPos {
        match self {
            Self::Call(call) => call.position(),
            Self::Literal(SqlLiteral { pos, .. })
            | Self::Identifier(SqlIdentifier { pos, .. })
            | Self::DataTypeSpec(SqlDataTypeSpec { pos, .. })
            | Self::DynamicParam(SqlDynamicParam { pos, .. })
            | Self::IntervalQualifier(SqlIntervalQualifier { pos, .. })
            | Self::NodeList(SqlNodeList { pos, .. }) => *pos,
        }
    }

    /// Returns the node with its own position replaced.
    #[must_use]
    pub fn at(mut self, new_pos: SqlParserPos) -> Self {
        match &mut self {
            Self::Call(call) => *call.position_mut() = new_pos,
            Self::Literal(SqlLiteral { pos, .. })
            | Self::Identifier(SqlIdentifier { pos, .. })
            | Self::DataTypeSpec(SqlDataTypeSpec { pos, .. })
            | Self::DynamicParam(SqlDynamicParam { pos, .. })
            | Self::IntervalQualifier(SqlIntervalQualifier { pos, .. })
            | Self::NodeList(SqlNodeList { pos, .. }) => *pos = new_pos,
        }
        self
    }

    /// Returns the call, if this node is one.
    #[must_use]
    pub const fn as_call(&self) -> Option<&SqlCall> {
        match self {
            Self::Call(call) => Some(call),
            _ => None,
        }
    }

    /// Returns the literal, if this node is one.
    #[must_use]
    pub const fn as_literal(&self) -> Option<&SqlLiteral> {
        match self {
            Self::Literal(literal) => Some(literal),
            _ => None,
        }
    }
}

impl From<SqlCall> for SqlNode {
    fn from(call: SqlCall) -> Self {
        Self::Call(call)
    }
}

impl From<SqlSelect> for SqlNode {
    fn from(select: SqlSelect) -> Self {
        Self::Call(SqlCall::Select(select))
    }
}

impl From<SqlJoin> for SqlNode {
    fn from(join: SqlJoin) -> Self {
        Self::Call(SqlCall::Join(join))
    }
}

impl From<SqlBasicCall> for SqlNode {
    fn from(call: SqlBasicCall) -> Self {
        Self::Call(SqlCall::Basic(call))
    }
}

impl From<SqlDdl> for SqlNode {
    fn from(ddl: SqlDdl) -> Self {
        Self::Call(SqlCall::Ddl(ddl))
    }
}

impl From<SqlLiteral> for SqlNode {
    fn from(literal: SqlLiteral) -> Self {
        Self::Literal(literal)
    }
}

impl From<SqlIdentifier> for SqlNode {
    fn from(identifier: SqlIdentifier) -> Self {
        Self::Identifier(identifier)
    }
}

impl From<SqlDataTypeSpec> for SqlNode {
    fn from(spec: SqlDataTypeSpec) -> Self {
        Self::DataTypeSpec(spec)
    }
}

impl From<SqlNodeList> for SqlNode {
    fn from(list: SqlNodeList) -> Self {
        Self::NodeList(list)
    }
}
