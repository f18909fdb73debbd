//! Clause nodes.
//!
//! Every clause takes an optional preceding node as its first argument. The
//! preceding node prints first, followed by one space and the clause itself:
//!
//! ```text
//! FOR u IN users FILTER u.active RETURN u
//! ```

use crate::{
    ast::{Identifier, Node, WithOptions},
    error::Result,
    validate::{Role, collection, expression, preceding, variable},
    value::Value,
};

/// `FOR var IN expr` (partial statement)
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    prev: Option<Box<Node>>,
    var: Identifier,
    expr: Box<Node>,
}

impl For {
    pub fn new(prev: Option<Node>, var: impl Into<Value>, expr: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            var: variable(var)?,
            expr: Box::new(expression(Role::Expression, expr)?),
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub const fn var(&self) -> &Identifier {
        &self.var
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }
}

/// `FILTER expr` (partial statement)
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    prev: Option<Box<Node>>,
    expr: Box<Node>,
}

impl Filter {
    pub fn new(prev: Option<Node>, expr: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            expr: Box::new(expression(Role::Expression, expr)?),
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }
}

/// `LET var = expr` (partial statement)
#[derive(Debug, Clone, PartialEq)]
pub struct Let {
    prev: Option<Box<Node>>,
    var: Identifier,
    expr: Box<Node>,
}

impl Let {
    pub fn new(prev: Option<Node>, var: impl Into<Value>, expr: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            var: variable(var)?,
            expr: Box::new(expression(Role::Expression, expr)?),
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub const fn var(&self) -> &Identifier {
        &self.var
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }
}

/// `RETURN expr`
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    prev: Option<Box<Node>>,
    expr: Box<Node>,
}

impl Return {
    pub fn new(prev: Option<Node>, expr: impl Into<Value>) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            expr: Box::new(expression(Role::Expression, expr)?),
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }
}

/// `INSERT expr INTO collection`
///
/// ```
/// use aql_builder::{Render, ast::Insert};
///
/// let insert = Insert::new(None, "doc", "users").unwrap();
/// assert_eq!(insert.to_aql(), "INSERT doc INTO users");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    prev: Option<Box<Node>>,
    expr: Box<Node>,
    collection: Identifier,
}

impl Insert {
    pub fn new(
        prev: Option<Node>,
        expr: impl Into<Value>,
        collection_name: impl Into<Value>,
    ) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            expr: Box::new(expression(Role::Expression, expr)?),
            collection: collection(collection_name)?,
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }

    pub const fn collection(&self) -> &Identifier {
        &self.collection
    }
}

/// `UPDATE expr WITH with_expr IN collection`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    prev: Option<Box<Node>>,
    expr: Box<Node>,
    with_expr: Box<Node>,
    collection: Identifier,
}

impl Update {
    pub fn new(
        prev: Option<Node>,
        expr: impl Into<Value>,
        with_expr: impl Into<Value>,
        collection_name: impl Into<Value>,
    ) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            expr: Box::new(expression(Role::Expression, expr)?),
            with_expr: Box::new(expression(Role::WithExpression, with_expr)?),
            collection: collection(collection_name)?,
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }

    pub fn with_expr(&self) -> &Node {
        &self.with_expr
    }

    pub const fn collection(&self) -> &Identifier {
        &self.collection
    }
}

/// `REPLACE expr WITH with_expr IN collection`
#[derive(Debug, Clone, PartialEq)]
pub struct Replace {
    prev: Option<Box<Node>>,
    expr: Box<Node>,
    with_expr: Box<Node>,
    collection: Identifier,
}

impl Replace {
    pub fn new(
        prev: Option<Node>,
        expr: impl Into<Value>,
        with_expr: impl Into<Value>,
        collection_name: impl Into<Value>,
    ) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            expr: Box::new(expression(Role::Expression, expr)?),
            with_expr: Box::new(expression(Role::WithExpression, with_expr)?),
            collection: collection(collection_name)?,
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }

    pub fn with_expr(&self) -> &Node {
        &self.with_expr
    }

    pub const fn collection(&self) -> &Identifier {
        &self.collection
    }
}

/// `REMOVE expr IN collection`
#[derive(Debug, Clone, PartialEq)]
pub struct Remove {
    prev: Option<Box<Node>>,
    expr: Box<Node>,
    collection: Identifier,
}

impl Remove {
    pub fn new(
        prev: Option<Node>,
        expr: impl Into<Value>,
        collection_name: impl Into<Value>,
    ) -> Result<Self> {
        Ok(Self {
            prev: preceding(prev)?,
            expr: Box::new(expression(Role::Expression, expr)?),
            collection: collection(collection_name)?,
        })
    }

    pub fn prev(&self) -> Option<&Node> {
        self.prev.as_deref()
    }

    pub fn expr(&self) -> &Node {
        &self.expr
    }

    pub const fn collection(&self) -> &Identifier {
        &self.collection
    }
}

// Statements that accept a trailing OPTIONS clause.
macro_rules! impl_options {
    ($($t:ident),*) => {
        $(
            impl $t {
                /// Wrap a copy of this statement with an `OPTIONS` object.
                pub fn options(&self, opts: impl Into<Value>) -> Result<WithOptions> {
                    WithOptions::new(self.clone(), opts)
                }
            }
        )*
    };
}

impl_options!(Insert, Update, Replace, Remove);

/// Chaining: each helper consumes the node and makes it the preceding node
/// of the new clause.
impl Node {
    pub fn for_in(self, var: impl Into<Value>, expr: impl Into<Value>) -> Result<Self> {
        For::new(Some(self), var, expr).map(Self::For)
    }

    pub fn filter(self, expr: impl Into<Value>) -> Result<Self> {
        Filter::new(Some(self), expr).map(Self::Filter)
    }

    pub fn let_(self, var: impl Into<Value>, expr: impl Into<Value>) -> Result<Self> {
        Let::new(Some(self), var, expr).map(Self::Let)
    }

    pub fn ret(self, expr: impl Into<Value>) -> Result<Self> {
        Return::new(Some(self), expr).map(Self::Return)
    }

    pub fn insert(self, expr: impl Into<Value>, collection_name: impl Into<Value>) -> Result<Self> {
        Insert::new(Some(self), expr, collection_name).map(Self::Insert)
    }

    pub fn update(
        self,
        expr: impl Into<Value>,
        with_expr: impl Into<Value>,
        collection_name: impl Into<Value>,
    ) -> Result<Self> {
        Update::new(Some(self), expr, with_expr, collection_name).map(Self::Update)
    }

    pub fn replace(
        self,
        expr: impl Into<Value>,
        with_expr: impl Into<Value>,
        collection_name: impl Into<Value>,
    ) -> Result<Self> {
        Replace::new(Some(self), expr, with_expr, collection_name).map(Self::Replace)
    }

    pub fn remove(self, expr: impl Into<Value>, collection_name: impl Into<Value>) -> Result<Self> {
        Remove::new(Some(self), expr, collection_name).map(Self::Remove)
    }
}
