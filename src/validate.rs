//! Per-parameter role checks applied by node constructors.

use std::fmt;

use crate::{
    ast::{Identifier, Node, keywords::is_keyword},
    cast::{cast, is_identifier},
    error::{AqlError, Result},
    value::Value,
};

/// Declared role of a constructor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Any castable value (free-cast)
    Expression,
    /// The `WITH` part of an update or replace (free-cast)
    WithExpression,
    /// Operand of an operator (free-cast)
    Operand,
    /// Collection name: identifier-shaped text only
    Collection,
    /// Variable bound by `FOR` or `LET`
    Variable,
}

impl Role {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expression => "expression",
            Self::WithExpression => "with-expression",
            Self::Operand => "operand",
            Self::Collection => "collection name",
            Self::Variable => "variable name",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-cast role: anything [`cast`] accepts.
pub fn expression(role: Role, value: impl Into<Value>) -> Result<Node> {
    cast(value).map_err(|e| e.with_role(role))
}

/// Collection-name role.
///
/// Only raw text naming a non-keyword identifier is accepted. Nodes are
/// rejected even when they would print as a valid name.
///
/// ```
/// use aql_builder::validate::collection;
///
/// assert_eq!(collection("users").unwrap().name(), "users");
/// assert!(collection("in-valid").is_err());
/// assert!(collection(42).is_err());
/// ```
pub fn collection(value: impl Into<Value>) -> Result<Identifier> {
    let role = Role::Collection;
    match value.into() {
        Value::String(name) if is_keyword(&name) => Err(AqlError::role_violation(
            role,
            "a reserved keyword cannot name a collection",
            name,
        )),
        Value::String(name) if is_identifier(&name) => {
            Identifier::new(name).map_err(|e| e.with_role(role))
        }
        Value::String(name) => Err(AqlError::role_violation(
            role,
            "collection name must match [A-Za-z_][A-Za-z0-9_]*",
            name,
        )),
        other => Err(AqlError::role_violation(
            role,
            format!("collection name must be text, got {}", other.type_name()),
            other,
        )),
    }
}

/// Variable-name role: identifier text or an [`Identifier`] node, never a keyword.
pub fn variable(value: impl Into<Value>) -> Result<Identifier> {
    let role = Role::Variable;
    let ident = match value.into() {
        Value::String(name) if is_identifier(&name) => {
            Identifier::new(name).map_err(|e| e.with_role(role))?
        }
        Value::String(name) => {
            return Err(AqlError::role_violation(
                role,
                "variable name must match [A-Za-z_][A-Za-z0-9_]*",
                name,
            ));
        }
        Value::Node(Node::Identifier(ident)) => ident,
        other => {
            return Err(AqlError::role_violation(
                role,
                format!("variable name must be an identifier, got {}", other.type_name()),
                other,
            ));
        }
    };
    if is_keyword(ident.name()) {
        return Err(AqlError::role_violation(
            role,
            "a reserved keyword cannot name a variable",
            ident.name(),
        ));
    }
    Ok(ident)
}

/// A preceding node must itself be a statement or a partial statement.
pub fn preceding(prev: Option<Node>) -> Result<Option<Box<Node>>> {
    match prev {
        Some(node) if !node.category().can_precede() => Err(AqlError::structural_violation(
            "only statements can precede a clause",
            node,
        )),
        other => Ok(other.map(Box::new)),
    }
}
