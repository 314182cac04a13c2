//! Generic traversal of the call tree.
//!
//! Implement [`SqlVisitor`] and override the methods for the nodes of
//! interest. The default methods visit every operand of a call in order,
//! so an override that wants to continue into the operands calls the
//! matching `walk_*` function.

use crate::literal::SqlLiteral;
use crate::node::{
    SqlCall, SqlDynamicParam, SqlIdentifier, SqlIntervalQualifier, SqlNode, SqlNodeList,
};
use crate::types::SqlDataTypeSpec;

/// A fallible pre-order visitor over nodes borrowed for `'ast`.
pub trait SqlVisitor<'ast> {
    /// Error that aborts the traversal.
    type Error;

    /// Visits any node.
    ///
    /// # Errors
    ///
    /// Returns the first error raised below this node.
    fn visit_node(&mut self, node: &'ast SqlNode) -> Result<(), Self::Error> {
        walk_node(self, node)
    }

    /// Visits a call.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by this call or its operands.
    fn visit_call(&mut self, call: &'ast SqlCall) -> Result<(), Self::Error> {
        walk_call(self, call)
    }

    /// Visits a list.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by an item.
    fn visit_node_list(&mut self, list: &'ast SqlNodeList) -> Result<(), Self::Error> {
        walk_node_list(self, list)
    }

    /// Visits a literal.
    ///
    /// # Errors
    ///
    /// Never fails by default.
    fn visit_literal(&mut self, _literal: &'ast SqlLiteral) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits an identifier.
    ///
    /// # Errors
    ///
    /// Never fails by default.
    fn visit_identifier(&mut self, _identifier: &'ast SqlIdentifier) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits a type specification.
    ///
    /// # Errors
    ///
    /// Never fails by default.
    fn visit_data_type_spec(&mut self, _spec: &'ast SqlDataTypeSpec) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits a `?` placeholder.
    ///
    /// # Errors
    ///
    /// Never fails by default.
    fn visit_dynamic_param(&mut self, _param: &'ast SqlDynamicParam) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Visits an interval qualifier.
    ///
    /// # Errors
    ///
    /// Never fails by default.
    fn visit_interval_qualifier(
        &mut self,
        _qualifier: &'ast SqlIntervalQualifier,
    ) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Dispatches a node to the visitor method for its variant.
///
/// # Errors
///
/// Propagates the visitor's error.
pub fn walk_node<'ast, V>(visitor: &mut V, node: &'ast SqlNode) -> Result<(), V::Error>
where
    V: SqlVisitor<'ast> + ?Sized,
{
    match node {
        SqlNode::Call(call) => visitor.visit_call(call),
        SqlNode::Literal(literal) => visitor.visit_literal(literal),
        SqlNode::Identifier(identifier) => visitor.visit_identifier(identifier),
        SqlNode::DataTypeSpec(spec) => visitor.visit_data_type_spec(spec),
        SqlNode::DynamicParam(param) => visitor.visit_dynamic_param(param),
        SqlNode::IntervalQualifier(qualifier) => visitor.visit_interval_qualifier(qualifier),
        SqlNode::NodeList(list) => visitor.visit_node_list(list),
    }
}

/// Visits the operands of a call in order, skipping absent ones.
///
/// # Errors
///
/// Propagates the first error raised by an operand.
pub fn walk_call<'ast, V>(visitor: &mut V, call: &'ast SqlCall) -> Result<(), V::Error>
where
    V: SqlVisitor<'ast> + ?Sized,
{
    match call {
        SqlCall::Basic(basic) => {
            for operand in basic.operands.iter().flatten() {
                visitor.visit_node(operand)?;
            }
        }
        SqlCall::Select(select) => {
            visitor.visit_node_list(&select.keywords)?;
            visitor.visit_node_list(&select.select_list)?;
            if let Some(from) = &select.from {
                visitor.visit_node(from)?;
            }
            if let Some(where_clause) = &select.where_clause {
                visitor.visit_node(where_clause)?;
            }
            if let Some(group_by) = &select.group_by {
                visitor.visit_node_list(group_by)?;
            }
            if let Some(having) = &select.having {
                visitor.visit_node(having)?;
            }
            if let Some(order_by) = &select.order_by {
                visitor.visit_node_list(order_by)?;
            }
            if let Some(offset) = &select.offset {
                visitor.visit_node(offset)?;
            }
            if let Some(fetch) = &select.fetch {
                visitor.visit_node(fetch)?;
            }
        }
        SqlCall::Join(join) => {
            visitor.visit_node(&join.left)?;
            visitor.visit_node(&join.natural)?;
            visitor.visit_node(&join.join_type)?;
            visitor.visit_node(&join.right)?;
            visitor.visit_node(&join.condition_type)?;
            if let Some(condition) = &join.condition {
                visitor.visit_node(condition)?;
            }
        }
        SqlCall::Ddl(ddl) => {
            for operand in ddl.operands.iter().flatten() {
                visitor.visit_node(operand)?;
            }
        }
    }
    Ok(())
}

/// Visits the items of a list in order.
///
/// # Errors
///
/// Propagates the first error raised by an item.
pub fn walk_node_list<'ast, V>(visitor: &mut V, list: &'ast SqlNodeList) -> Result<(), V::Error>
where
    V: SqlVisitor<'ast> + ?Sized,
{
    for item in &list.items {
        visitor.visit_node(item)?;
    }
    Ok(())
}

impl SqlNode {
    /// Runs a visitor over this node and everything below it.
    ///
    /// # Errors
    ///
    /// Propagates the visitor's error.
    pub fn accept<'ast, V>(&'ast self, visitor: &mut V) -> Result<(), V::Error>
    where
        V: SqlVisitor<'ast> + ?Sized,
    {
        visitor.visit_node(self)
    }
}
