//! The restriction visitor.
//!
//! A pass walks the tree pre-order and stops at the first construct that is
//! not in the policy. Every check is an allow-list lookup: anything the
//! dispatch does not name is rejected.

use oxide_sql_ast::{
    walk_call, SqlCall, SqlDataTypeSpec, SqlKind, SqlLiteral, SqlNode, SqlSelect, SqlTypeName,
    SqlVisitor, Symbol, TypeNameSpec,
};
use tracing::{debug, trace};

use crate::error::{Result, ValidationError};
use crate::policy::{
    is_supported_symbol, PolicyTables, DECLARABLE_TYPES, LITERAL_TYPES, OBJECT_TYPE_NAME,
    SUPPORTED_DDL_STATEMENTS, SUPPORTED_JOIN_TYPES,
};

/// Rejects statements that use constructs the engine cannot execute.
///
/// The validator holds no per-statement state, so one instance can check
/// any number of statements, from any number of threads.
///
/// ```rust
/// use oxide_sql_ast::builder::{ident, int, Select};
/// use oxide_sql_restrict::UnsupportedOperationValidator;
///
/// let validator = UnsupportedOperationValidator::new();
///
/// let top_level = Select::new().columns([ident("a")]).from(ident("t")).fetch(int(1)).build();
/// assert!(validator.validate(&top_level).is_ok());
///
/// let nested = Select::new().columns([ident("a")]).from(top_level).build();
/// let err = validator.validate(&nested).unwrap_err();
/// assert_eq!(
///     err.description(),
///     "FETCH/OFFSET is only supported for the top-level SELECT"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct UnsupportedOperationValidator<'p> {
    policy: &'p PolicyTables,
}

impl UnsupportedOperationValidator<'static> {
    /// Creates a validator for the process-wide policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(PolicyTables::get())
    }
}

impl Default for UnsupportedOperationValidator<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'p> UnsupportedOperationValidator<'p> {
    /// Creates a validator consulting `policy`.
    #[must_use]
    pub const fn with_policy(policy: &'p PolicyTables) -> Self {
        Self { policy }
    }

    /// Checks `root` and everything below it.
    ///
    /// # Errors
    ///
    /// Returns the first unsupported construct in pre-order.
    pub fn validate(&self, root: &SqlNode) -> Result<()> {
        debug!(position = %root.position(), "validating statement");
        let mut pass = RestrictionPass::new(self.policy);
        root.accept(&mut pass).inspect_err(|err| {
            debug!(
                position = %err.position(),
                description = err.description(),
                "unsupported construct"
            );
        })
    }
}

/// State of a single pass.
#[derive(Debug, Default)]
struct ValidationContext<'a> {
    /// The first query block of the pass. Set once, never replaced.
    top_level_select: Option<&'a SqlSelect>,
}

/// Visitor performing one pass over one statement.
struct RestrictionPass<'a, 'p> {
    policy: &'p PolicyTables,
    context: ValidationContext<'a>,
}

impl<'a, 'p> RestrictionPass<'a, 'p> {
    fn new(policy: &'p PolicyTables) -> Self {
        Self {
            policy,
            context: ValidationContext::default(),
        }
    }

    fn process_call(&mut self, call: &'a SqlCall) -> Result<()> {
        let kind = call.kind();
        if self.policy.supports_kind(kind) {
            return Ok(());
        }

        match kind {
            SqlKind::Select => self.process_select(call),
            SqlKind::Update | SqlKind::Delete => Ok(()),
            SqlKind::Join => process_join(call),
            SqlKind::Other | SqlKind::OtherFunction | SqlKind::Extract | SqlKind::Position => {
                self.process_other(call)
            }
            SqlKind::OtherDdl => process_other_ddl(call),
            _ => Err(ValidationError::unsupported_kind(call.position(), kind)),
        }
    }

    fn process_select(&mut self, call: &'a SqlCall) -> Result<()> {
        let SqlCall::Select(select) = call else {
            return Err(ValidationError::unsupported_kind(call.position(), call.kind()));
        };

        match self.context.top_level_select {
            None => {
                trace!(position = %select.pos, "recorded top-level SELECT");
                self.context.top_level_select = Some(select);
                Ok(())
            }
            Some(_) if select.fetch().is_some() || select.offset().is_some() => {
                Err(ValidationError::new(
                    select.pos,
                    "FETCH/OFFSET is only supported for the top-level SELECT",
                ))
            }
            Some(_) => Ok(()),
        }
    }

    fn process_other(&self, call: &SqlCall) -> Result<()> {
        let operator = call.operator();
        if self.policy.supports_operator(operator) {
            Ok(())
        } else {
            Err(ValidationError::not_supported(call.position(), operator.name()))
        }
    }
}

fn process_join(call: &SqlCall) -> Result<()> {
    let SqlCall::Join(join) = call else {
        return Err(ValidationError::unsupported_kind(call.position(), call.kind()));
    };

    match join.join_type() {
        Some(join_type) if SUPPORTED_JOIN_TYPES.contains(&join_type) => Ok(()),
        Some(join_type) => Err(ValidationError::not_supported(
            join.pos,
            format!("{} join", join_type.name()),
        )),
        None => Err(ValidationError::not_supported(join.pos, "Unknown join")),
    }
}

fn process_other_ddl(call: &SqlCall) -> Result<()> {
    let statement = match call {
        SqlCall::Ddl(ddl) if SUPPORTED_DDL_STATEMENTS.contains(&ddl.statement()) => {
            return Ok(());
        }
        SqlCall::Ddl(ddl) => ddl.statement(),
        _ => call.operator().name(),
    };
    Err(ValidationError::new(
        call.position(),
        format!("OTHER DDL class ({statement}) is not supported"),
    ))
}

fn validate_data_type_spec(spec: &SqlDataTypeSpec) -> Result<()> {
    match &spec.spec {
        TypeNameSpec::UserDefined { name }
            if name
                .simple()
                .is_some_and(|name| name.eq_ignore_ascii_case(OBJECT_TYPE_NAME)) =>
        {
            Ok(())
        }
        TypeNameSpec::Basic { name, .. } => {
            let type_name = name
                .simple()
                .and_then(SqlTypeName::from_name)
                .ok_or_else(|| ValidationError::not_supported(spec.pos, name.to_string()))?;
            if DECLARABLE_TYPES.contains(&type_name) {
                Ok(())
            } else {
                Err(ValidationError::not_supported(spec.pos, type_name.name()))
            }
        }
        _ => Err(ValidationError::new(
            spec.pos,
            "Complex type specifications are not supported",
        )),
    }
}

fn validate_literal(literal: &SqlLiteral) -> Result<()> {
    if let Some(symbol) = literal.as_symbol() {
        return validate_symbol(literal, symbol);
    }

    let type_name = literal.type_name;
    if type_name.is_interval() || LITERAL_TYPES.contains(&type_name) {
        Ok(())
    } else {
        Err(ValidationError::new(
            literal.pos,
            format!("{} literals are not supported", type_name.name()),
        ))
    }
}

fn validate_symbol(literal: &SqlLiteral, symbol: &Symbol) -> Result<()> {
    if is_supported_symbol(symbol) {
        Ok(())
    } else {
        Err(ValidationError::new(
            literal.pos,
            format!("{symbol} literal is not supported"),
        ))
    }
}

impl<'a> SqlVisitor<'a> for RestrictionPass<'a, '_> {
    type Error = ValidationError;

    fn visit_call(&mut self, call: &'a SqlCall) -> Result<()> {
        let operator = call.operator();
        if operator.get().is_dynamic_table_function() {
            // Options of file table functions are a MAP constructor, which
            // is not supported anywhere else.
            trace!(
                position = %call.position(),
                function = operator.name(),
                "skipping dynamic table function"
            );
            return Ok(());
        }

        self.process_call(call)?;
        walk_call(self, call)
    }

    fn visit_literal(&mut self, literal: &'a SqlLiteral) -> Result<()> {
        validate_literal(literal)
    }

    fn visit_data_type_spec(&mut self, spec: &'a SqlDataTypeSpec) -> Result<()> {
        validate_data_type_spec(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxide_sql_ast::builder::{basic_type, call, ident, int, join, string, user_type, Select};
    use oxide_sql_ast::operators::{engine, standard};
    use oxide_sql_ast::{JoinType, LiteralValue, SqlParserPos};

    fn validate(node: &SqlNode) -> Result<()> {
        UnsupportedOperationValidator::new().validate(node)
    }

    #[test]
    fn test_context_records_first_select_only() {
        let inner = Select::new().columns([ident("a")]).from(ident("t")).build();
        let outer = Select::new().columns([ident("a")]).from(inner).build();

        let mut pass = RestrictionPass::new(PolicyTables::get());
        outer.accept(&mut pass).unwrap();

        let recorded = pass.context.top_level_select.unwrap();
        let SqlNode::Call(SqlCall::Select(outer_select)) = &outer else {
            panic!("Expected SELECT, got {outer:?}");
        };
        assert!(std::ptr::eq(recorded, outer_select));
    }

    #[test]
    fn test_fresh_context_per_pass() {
        let validator = UnsupportedOperationValidator::new();
        let query = Select::new().columns([ident("a")]).fetch(int(1)).build();
        // A second pass must treat the query as top-level again.
        assert!(validator.validate(&query).is_ok());
        assert!(validator.validate(&query).is_ok());
    }

    #[test]
    fn test_supported_kind_is_accepted() {
        assert!(validate(&call(&standard::PLUS, [int(1), int(2)])).is_ok());
    }

    #[test]
    fn test_unsupported_kind_is_named() {
        let err = validate(&call(&standard::EXISTS, [ident("a")])).unwrap_err();
        assert_eq!(err.description(), "EXISTS is not supported");
    }

    #[test]
    fn test_operator_identity_decides() {
        assert!(validate(&call(&engine::POWER, [int(2), int(3)])).is_ok());
        let err = validate(&call(&standard::POWER, [int(2), int(3)])).unwrap_err();
        assert_eq!(err.description(), "POWER is not supported");
    }

    #[test]
    fn test_full_join_is_rejected() {
        let from = join(ident("a"), JoinType::Full, ident("b")).on(ident("c"));
        let err = validate(&from).unwrap_err();
        assert_eq!(err.description(), "FULL join is not supported");
    }

    #[test]
    fn test_update_and_delete_are_accepted() {
        assert!(validate(&call(&standard::UPDATE, [ident("t")])).is_ok());
        assert!(validate(&call(&standard::DELETE, [ident("t")])).is_ok());
    }

    #[test]
    fn test_object_type_is_case_insensitive() {
        assert!(validate(&user_type("object")).is_ok());
        let err = validate(&user_type("ADDRESS")).unwrap_err();
        assert_eq!(
            err.description(),
            "Complex type specifications are not supported"
        );
    }

    #[test]
    fn test_unknown_basic_type_is_named() {
        let err = validate(&basic_type("GEOGRAPHY")).unwrap_err();
        assert_eq!(err.description(), "GEOGRAPHY is not supported");
    }

    #[test]
    fn test_literal_type_gate() {
        assert!(validate(&string("x")).is_ok());
        let binary = SqlNode::Literal(SqlLiteral::new(
            LiteralValue::Binary(vec![0xab]),
            SqlTypeName::Varbinary,
            SqlParserPos::point(3, 9),
        ));
        let err = validate(&binary).unwrap_err();
        assert_eq!(err.description(), "VARBINARY literals are not supported");
        assert_eq!(err.position(), SqlParserPos::point(3, 9));
    }
}
