//! Query text rendering.
//!
//! This is the only place query text is produced. Every node implements
//! [`Render`]; [`AqlWriter`] holds the output buffer and the shared rules:
//!
//! - a preceding node prints first, then a single space;
//! - children in the `Operation`, `Statement` and `PartialStatement`
//!   categories print inside parentheses, expressions never do;
//! - lists print as `[a, b]`, objects as `{key: value}` in insertion order.
//!
//! Rendering cannot fail: every field of a constructed node is already valid.
//!
//! ```
//! use aql_builder::{Render, ast::{BinOp, BinaryOperation}};
//!
//! let sum = BinaryOperation::new(BinOp::Add, "a", "b").unwrap();
//! let product = BinaryOperation::new(BinOp::Multiply, sum, 2).unwrap();
//! assert_eq!(product.to_aql(), "(a + b) * 2");
//! ```

use crate::{
    ast::{
        BinaryOperation, BooleanLiteral, Filter, For, Identifier, Insert, IntegerLiteral, Keyword,
        Let, ListLiteral, Node, NullLiteral, NumberLiteral, ObjectLiteral, RawExpression, Remove,
        Replace, Return, SimpleReference, StringLiteral, UnaryOperation, Update, WithOptions,
        keywords::is_keyword,
    },
    cast::is_identifier,
};

/// Implemented by every node type.
pub trait Render {
    /// Append this node's text to the writer.
    fn render(&self, w: &mut AqlWriter);

    /// Serialize to query text.
    fn to_aql(&self) -> String {
        let mut w = AqlWriter::new();
        self.render(&mut w);
        w.into_aql()
    }
}

/// Output buffer shared by all [`Render`] implementations.
#[derive(Debug, Default)]
pub struct AqlWriter {
    buf: String,
}

impl AqlWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_aql(self) -> String {
        self.buf
    }

    pub fn push_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    /// Render an embedded child, parenthesized when its category asks for it.
    pub fn child(&mut self, node: &Node) {
        if node.category().needs_parens() {
            self.buf.push('(');
            node.render(self);
            self.buf.push(')');
        } else {
            node.render(self);
        }
    }

    /// Render the preceding node of a chain followed by a separating space.
    pub fn preceding(&mut self, prev: Option<&Node>) {
        if let Some(prev) = prev {
            prev.render(self);
            self.buf.push(' ');
        }
    }

    /// Render a name, escaped in backticks when it is a keyword.
    pub fn name(&mut self, name: &str) {
        if is_keyword(name) {
            self.buf.push('`');
            self.buf.push_str(name);
            self.buf.push('`');
        } else {
            self.buf.push_str(name);
        }
    }

    /// Render text as a double-quoted string with JSON escaping.
    pub fn quoted(&mut self, s: &str) {
        self.buf
            .push_str(&serde_json::Value::String(s.to_string()).to_string());
    }

    fn separated<'a, T: 'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
        mut each: impl FnMut(&mut Self, &'a T),
    ) {
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.buf.push_str(", ");
            }
            each(self, item);
        }
    }
}

impl Render for Node {
    fn render(&self, w: &mut AqlWriter) {
        match self {
            Self::Integer(n) => n.render(w),
            Self::Number(n) => n.render(w),
            Self::String(n) => n.render(w),
            Self::Boolean(n) => n.render(w),
            Self::Null(n) => n.render(w),
            Self::Identifier(n) => n.render(w),
            Self::SimpleReference(n) => n.render(w),
            Self::Raw(n) => n.render(w),
            Self::Keyword(n) => n.render(w),
            Self::List(n) => n.render(w),
            Self::Object(n) => n.render(w),
            Self::Binary(n) => n.render(w),
            Self::Unary(n) => n.render(w),
            Self::For(n) => n.render(w),
            Self::Filter(n) => n.render(w),
            Self::Let(n) => n.render(w),
            Self::Return(n) => n.render(w),
            Self::Insert(n) => n.render(w),
            Self::Update(n) => n.render(w),
            Self::Replace(n) => n.render(w),
            Self::Remove(n) => n.render(w),
            Self::WithOptions(n) => n.render(w),
        }
    }
}

// =============================================================================
// Literals
// =============================================================================

impl Render for IntegerLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str(self.text());
    }
}

impl Render for NumberLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str(self.text());
    }
}

impl Render for StringLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.quoted(self.value());
    }
}

impl Render for BooleanLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str(if self.value() { "true" } else { "false" });
    }
}

impl Render for NullLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str("null");
    }
}

impl Render for Identifier {
    fn render(&self, w: &mut AqlWriter) {
        w.name(self.name());
    }
}

impl Render for SimpleReference {
    fn render(&self, w: &mut AqlWriter) {
        for (i, segment) in self.segments().enumerate() {
            if i > 0 {
                w.push_str(".");
            }
            w.name(segment);
        }
    }
}

impl Render for RawExpression {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str(self.text());
    }
}

impl Render for Keyword {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str(self.word());
    }
}

impl Render for ListLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str("[");
        w.separated(self.values(), |w, v| w.child(v));
        w.push_str("]");
    }
}

impl Render for ObjectLiteral {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str("{");
        w.separated(self.entries(), |w, (key, value)| {
            if is_identifier(key) && !is_keyword(key) {
                w.push_str(key);
            } else {
                w.quoted(key);
            }
            w.push_str(": ");
            w.child(value);
        });
        w.push_str("}");
    }
}

// =============================================================================
// Operations
// =============================================================================

impl Render for BinaryOperation {
    fn render(&self, w: &mut AqlWriter) {
        w.child(self.left());
        w.push_str(" ");
        w.push_str(self.op().symbol());
        w.push_str(" ");
        w.child(self.right());
    }
}

impl Render for UnaryOperation {
    fn render(&self, w: &mut AqlWriter) {
        w.push_str(self.op().symbol());
        w.child(self.operand());
    }
}

// =============================================================================
// Clauses
// =============================================================================

impl Render for For {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("FOR ");
        self.var().render(w);
        w.push_str(" IN ");
        w.child(self.expr());
    }
}

impl Render for Filter {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("FILTER ");
        w.child(self.expr());
    }
}

impl Render for Let {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("LET ");
        self.var().render(w);
        w.push_str(" = ");
        w.child(self.expr());
    }
}

impl Render for Return {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("RETURN ");
        w.child(self.expr());
    }
}

impl Render for Insert {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("INSERT ");
        w.child(self.expr());
        w.push_str(" INTO ");
        self.collection().render(w);
    }
}

impl Render for Update {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("UPDATE ");
        w.child(self.expr());
        w.push_str(" WITH ");
        w.child(self.with_expr());
        w.push_str(" IN ");
        self.collection().render(w);
    }
}

impl Render for Replace {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("REPLACE ");
        w.child(self.expr());
        w.push_str(" WITH ");
        w.child(self.with_expr());
        w.push_str(" IN ");
        self.collection().render(w);
    }
}

impl Render for Remove {
    fn render(&self, w: &mut AqlWriter) {
        w.preceding(self.prev());
        w.push_str("REMOVE ");
        w.child(self.expr());
        w.push_str(" IN ");
        self.collection().render(w);
    }
}

impl Render for WithOptions {
    fn render(&self, w: &mut AqlWriter) {
        // The decorated statement is the head of this node, not a child.
        self.statement().render(w);
        w.push_str(" OPTIONS ");
        self.opts().render(w);
    }
}
