#![allow(dead_code)]

use oxide_sql_ast::{SqlCall, SqlKind, SqlNode, SqlVisitor};

/// Records the kind of every call in visiting order.
#[derive(Default)]
pub struct Kinds(pub Vec<SqlKind>);

impl<'ast> SqlVisitor<'ast> for Kinds {
    type Error = std::convert::Infallible;

    fn visit_call(&mut self, call: &'ast SqlCall) -> Result<(), Self::Error> {
        self.0.push(call.kind());
        oxide_sql_ast::walk_call(self, call)
    }
}

pub fn call_kinds(node: &SqlNode) -> Vec<SqlKind> {
    let mut kinds = Kinds::default();
    match node.accept(&mut kinds) {
        Ok(()) => kinds.0,
        Err(never) => match never {},
    }
}
