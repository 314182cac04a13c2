//! Operator identity.
//!
//! Operators are declared as `static` items in the operator tables. Two
//! operators are the same only if they are the same item: the engine
//! replaces several standard functions with its own implementations of
//! the same name, and the two must stay distinguishable.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::kind::SqlKind;

/// How an operator takes part in validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorFamily {
    /// Regular operator, validated like any other call.
    Builtin,
    /// Table function whose arguments use constructs that are not yet
    /// supported elsewhere (the `MAP[...]` options argument).
    DynamicTableFunction,
}

/// A named function or operator.
#[derive(Debug)]
pub struct SqlOperator {
    /// Display name.
    pub name: &'static str,
    /// Syntactic category of calls to this operator.
    pub kind: SqlKind,
    /// Validation family.
    pub family: OperatorFamily,
}

impl SqlOperator {
    /// Creates a regular operator.
    #[must_use]
    pub const fn new(name: &'static str, kind: SqlKind) -> Self {
        Self {
            name,
            kind,
            family: OperatorFamily::Builtin,
        }
    }

    /// Creates a dynamic table function.
    #[must_use]
    pub const fn dynamic_table_function(name: &'static str) -> Self {
        Self {
            name,
            kind: SqlKind::OtherFunction,
            family: OperatorFamily::DynamicTableFunction,
        }
    }

    /// Returns true for dynamic table functions.
    #[must_use]
    pub fn is_dynamic_table_function(&self) -> bool {
        self.family == OperatorFamily::DynamicTableFunction
    }
}

/// A reference to an operator, compared by identity.
#[derive(Debug, Clone, Copy)]
pub struct OperatorRef(&'static SqlOperator);

impl OperatorRef {
    /// Wraps an operator table entry.
    #[must_use]
    pub const fn new(operator: &'static SqlOperator) -> Self {
        Self(operator)
    }

    /// Returns the referenced operator.
    #[must_use]
    pub const fn get(self) -> &'static SqlOperator {
        self.0
    }

    /// Returns the operator's display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0.name
    }

    /// Returns the operator's kind.
    #[must_use]
    pub const fn kind(self) -> SqlKind {
        self.0.kind
    }
}

impl From<&'static SqlOperator> for OperatorRef {
    fn from(operator: &'static SqlOperator) -> Self {
        Self(operator)
    }
}

impl PartialEq for OperatorRef {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.0, other.0)
    }
}

impl Eq for OperatorRef {}

impl Hash for OperatorRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::ptr::hash(self.0, state);
    }
}

impl fmt::Display for OperatorRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    static FIRST: SqlOperator = SqlOperator::new("POWER", SqlKind::OtherFunction);
    static SECOND: SqlOperator = SqlOperator::new("POWER", SqlKind::OtherFunction);

    #[test]
    fn test_identity_not_name() {
        assert_eq!(OperatorRef::new(&FIRST), OperatorRef::new(&FIRST));
        assert_ne!(OperatorRef::new(&FIRST), OperatorRef::new(&SECOND));
    }

    #[test]
    fn test_hash_by_identity() {
        let set: HashSet<OperatorRef> = [OperatorRef::new(&FIRST)].into_iter().collect();
        assert!(set.contains(&OperatorRef::from(&FIRST)));
        assert!(!set.contains(&OperatorRef::from(&SECOND)));
    }

    #[test]
    fn test_dynamic_table_function() {
        static FILE: SqlOperator = SqlOperator::dynamic_table_function("CSV_FILE");
        assert!(FILE.is_dynamic_table_function());
        assert!(!FIRST.is_dynamic_table_function());
        assert_eq!(OperatorRef::new(&FILE).kind(), SqlKind::OtherFunction);
    }
}
