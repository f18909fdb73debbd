use crate::{
    ast::{BinOp, Node, UnaryOp},
    error::Result,
    validate::{Role, expression},
    value::Value,
};

/// Binary operation
///
/// Operands that are themselves operations or clauses print in parentheses.
///
/// # Examples
/// ```text
/// doc.age >= 18
/// (a + b) * 2
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOperation {
    op: BinOp,
    left: Box<Node>,
    right: Box<Node>,
}

impl BinaryOperation {
    pub fn new(op: BinOp, left: impl Into<Value>, right: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            op,
            left: Box::new(expression(Role::Operand, left)?),
            right: Box::new(expression(Role::Operand, right)?),
        })
    }

    pub const fn op(&self) -> BinOp {
        self.op
    }

    pub fn left(&self) -> &Node {
        &self.left
    }

    pub fn right(&self) -> &Node {
        &self.right
    }
}

/// Unary prefix operation
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOperation {
    op: UnaryOp,
    operand: Box<Node>,
}

impl UnaryOperation {
    pub fn new(op: UnaryOp, operand: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            op,
            operand: Box::new(expression(Role::Operand, operand)?),
        })
    }

    pub const fn op(&self) -> UnaryOp {
        self.op
    }

    pub fn operand(&self) -> &Node {
        &self.operand
    }
}
