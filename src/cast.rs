//! Casting of raw host values into nodes.
//!
//! [`cast`] is an ordered, total decision over the [`Value`] categories:
//!
//! | input                         | node                  |
//! |-------------------------------|-----------------------|
//! | node                          | the same node         |
//! | null                          | `NullLiteral`         |
//! | boolean                       | `BooleanLiteral`      |
//! | integer, whole float/decimal  | `IntegerLiteral`      |
//! | other finite float/decimal    | `NumberLiteral`       |
//! | `name`                        | `Identifier`          |
//! | `a.b.c`                       | `SimpleReference`     |
//! | `"…"` or `'…'`                | `StringLiteral`       |
//! | array                         | `ListLiteral`         |
//! | object                        | `ObjectLiteral`       |
//!
//! Anything else is a cast failure; nothing is coerced to a default.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;

use crate::{
    ast::{
        BooleanLiteral, Identifier, IntegerLiteral, ListLiteral, Node, NullLiteral, NumberLiteral,
        ObjectLiteral, SimpleReference, StringLiteral,
    },
    error::{AqlError, Result},
    value::Value,
};

static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("identifier pattern"));

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*$").expect("reference pattern")
});

/// Whether `s` is a single ASCII identifier.
pub fn is_identifier(s: &str) -> bool {
    IDENTIFIER.is_match(s)
}

/// Whether `s` is one or more identifiers joined by `.`.
pub fn is_reference(s: &str) -> bool {
    REFERENCE.is_match(s)
}

/// Cast a raw value to its canonical node.
///
/// ```
/// use aql_builder::{cast, ast::NodeKind};
///
/// assert_eq!(cast(42).unwrap().kind(), NodeKind::IntegerLiteral);
/// assert_eq!(cast("some.ref").unwrap().kind(), NodeKind::SimpleReference);
/// assert_eq!(cast("\"hello\"").unwrap().to_aql(), "\"hello\"");
/// assert!(cast("not valid").is_err());
/// ```
pub fn cast(value: impl Into<Value>) -> Result<Node> {
    match value.into() {
        Value::Node(node) => Ok(node),
        Value::Null => Ok(NullLiteral::new().into()),
        Value::Boolean(b) => Ok(BooleanLiteral::new(b).into()),
        Value::Integer(n) => Ok(IntegerLiteral::new(n).into()),
        Value::Float(n) => cast_float(n),
        Value::Decimal(d) => Ok(cast_decimal(d)),
        Value::String(s) => cast_string(s),
        Value::Array(items) => ListLiteral::from_values(items).map(Node::List),
        Value::Object(pairs) => ObjectLiteral::from_pairs(pairs).map(Node::Object),
    }
}

fn cast_float(n: f64) -> Result<Node> {
    if n.is_finite() && n.fract() == 0.0 {
        return Ok(IntegerLiteral::from_whole_float(n).into());
    }
    NumberLiteral::new(n).map(Node::Number)
}

fn cast_decimal(d: Decimal) -> Node {
    let d = d.normalize();
    if d.scale() == 0 {
        IntegerLiteral::from_decimal(d).into()
    } else {
        NumberLiteral::from_decimal(d).into()
    }
}

fn cast_string(s: String) -> Result<Node> {
    if is_identifier(&s) {
        return Identifier::new(s).map(Node::Identifier);
    }

    if is_reference(&s) {
        return SimpleReference::new(s).map(Node::SimpleReference);
    }

    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        return serde_json::from_str::<String>(&s)
            .map(|content| StringLiteral::new(content).into())
            .map_err(|e| AqlError::cast_failure(format!("malformed string literal: {e}"), s));
    }

    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        return unescape_single_quoted(&s[1..s.len() - 1])
            .map(|content| StringLiteral::new(content).into())
            .ok_or_else(|| AqlError::cast_failure("malformed string literal", s));
    }

    Err(AqlError::cast_failure(
        "text is neither a reference nor a quoted string",
        s,
    ))
}

/// Undo `\'` and `\\`; an unescaped `'` inside the quotes is malformed.
fn unescape_single_quoted(inner: &str) -> Option<String> {
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => match chars.next()? {
                c @ ('\'' | '\\') => out.push(c),
                c => {
                    out.push('\\');
                    out.push(c);
                }
            },
            '\'' => return None,
            c => out.push(c),
        }
    }
    Some(out)
}
