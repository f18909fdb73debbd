use crate::{
    ast::{Node, NodeKind, ObjectLiteral},
    error::{AqlError, Result},
    value::Value,
};

/// A data-modification statement followed by an `OPTIONS` object.
///
/// The options are always a fresh object literal: a plain mapping is cast,
/// an existing object literal is copied, so the caller's object stays
/// independent of the wrapper.
///
/// # Example
/// ```text
/// INSERT doc INTO users OPTIONS {waitForSync: true}
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct WithOptions {
    statement: Box<Node>,
    opts: ObjectLiteral,
}

impl WithOptions {
    pub fn new(statement: impl Into<Node>, opts: impl Into<Value>) -> Result<Self> {
        let statement = statement.into();
        match statement.kind() {
            NodeKind::Insert | NodeKind::Update | NodeKind::Replace | NodeKind::Remove => {}
            _ => {
                return Err(AqlError::structural_violation(
                    "only INSERT, UPDATE, REPLACE and REMOVE take options",
                    statement,
                ));
            }
        }
        Ok(Self {
            statement: Box::new(statement),
            opts: ObjectLiteral::new(opts)?,
        })
    }

    pub fn statement(&self) -> &Node {
        &self.statement
    }

    pub const fn opts(&self) -> &ObjectLiteral {
        &self.opts
    }
}
