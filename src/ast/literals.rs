use rust_decimal::Decimal;

use crate::{
    ast::{Category, Node, keywords::is_keyword},
    cast::{cast, is_identifier, is_reference},
    error::{AqlError, Result},
    value::Value,
};

/// Shortest text that reads back as the same double. Magnitudes outside
/// `1e-6..1e21` use exponent form, which AQL accepts.
fn float_text(n: f64) -> String {
    let abs = n.abs();
    if abs != 0.0 && !(1e-6..1e21).contains(&abs) {
        format!("{n:e}")
    } else {
        format!("{n}")
    }
}

/// Literal whole number, kept as its exact AQL text.
///
/// Values beyond `i64` (large doubles, big unsigned or decimal inputs) keep
/// their digits instead of being narrowed.
///
/// # Example
/// ```text
/// 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerLiteral(String);

impl IntegerLiteral {
    pub fn new(value: i64) -> Self {
        Self(value.to_string())
    }

    /// A finite double without a fractional part.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn from_whole_float(value: f64) -> Self {
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
        if value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Self::new(value as i64)
        } else {
            Self(float_text(value))
        }
    }

    /// A decimal whose normalized scale is zero.
    pub(crate) fn from_decimal(value: Decimal) -> Self {
        Self(value.normalize().to_string())
    }

    /// The value, when it fits an `i64`.
    pub fn as_i64(&self) -> Option<i64> {
        self.0.parse().ok()
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Literal non-integral number, kept as exact text.
///
/// Doubles print as their shortest round-trip form; decimals print every
/// significant digit.
///
/// # Example
/// ```text
/// 1.5
/// 1e-30
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral(String);

impl NumberLiteral {
    /// Fails for NaN and infinities.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(AqlError::cast_failure("number is not finite", value));
        }
        Ok(Self(float_text(value)))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value.normalize().to_string())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

/// String literal, holding the unquoted content.
///
/// # Example
/// ```text
/// "hello"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral(String);

impl StringLiteral {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

/// Boolean literal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanLiteral(bool);

impl BooleanLiteral {
    pub const fn new(value: bool) -> Self {
        Self(value)
    }

    pub const fn value(&self) -> bool {
        self.0
    }
}

/// Null literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NullLiteral;

impl NullLiteral {
    pub const fn new() -> Self {
        Self
    }
}

/// Bare name of a variable, attribute or collection.
///
/// Names that collide with a keyword are escaped in backticks when printed.
///
/// # Examples
/// ```text
/// doc
/// `for`
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !is_identifier(&name) {
            return Err(AqlError::cast_failure("not a valid identifier", name));
        }
        Ok(Self(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Dotted attribute path
///
/// # Examples
/// ```text
/// doc.address.city
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleReference(String);

impl SimpleReference {
    pub fn new(path: impl Into<String>) -> Result<Self> {
        let path = path.into();
        if !is_reference(&path) {
            return Err(AqlError::cast_failure("not a valid reference", path));
        }
        Ok(Self(path))
    }

    pub fn path(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }
}

/// Text passed through to the output verbatim.
///
/// The category defaults to [`Category::Expression`]; a fragment that is
/// really an operation or a clause should say so, so it gets parenthesized
/// like the real thing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression {
    text: String,
    category: Category,
}

impl RawExpression {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: Category::Expression,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn category(&self) -> Category {
        self.category
    }
}

/// A reserved word, printed uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword(String);

impl Keyword {
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if !is_keyword(&word) {
            return Err(AqlError::cast_failure("not a reserved keyword", word));
        }
        Ok(Self(word.to_ascii_uppercase()))
    }

    pub fn word(&self) -> &str {
        &self.0
    }
}

/// List literal
///
/// # Example
/// ```text
/// [1, "two", doc.three]
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListLiteral {
    values: Vec<Node>,
}

impl ListLiteral {
    /// Build from an array of raw values, or copy another list literal.
    ///
    /// ```
    /// use aql_builder::{Render, ast::ListLiteral};
    ///
    /// let list = ListLiteral::new(vec![1, 2, 3]).unwrap();
    /// assert_eq!(list.to_aql(), "[1, 2, 3]");
    /// ```
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        match value.into() {
            Value::Array(items) => Self::from_values(items),
            Value::Node(Node::List(list)) => Ok(list),
            other => Err(AqlError::structural_violation(
                format!("expected an array or list literal, got {}", other.type_name()),
                other,
            )),
        }
    }

    pub(crate) fn from_values(items: Vec<Value>) -> Result<Self> {
        let values = items.into_iter().map(cast).collect::<Result<Vec<_>>>()?;
        Ok(Self { values })
    }

    /// Cast and append one value.
    pub fn push(&mut self, value: impl Into<Value>) -> Result<()> {
        self.values.push(cast(value)?);
        Ok(())
    }

    pub fn values(&self) -> &[Node] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Object literal
///
/// Keys keep the order in which they were first seen.
///
/// # Example
/// ```text
/// {name: doc.name, "first-seen": true}
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLiteral {
    entries: Vec<(String, Node)>,
}

impl ObjectLiteral {
    /// Build from a mapping of raw values, or copy another object literal.
    pub fn new(value: impl Into<Value>) -> Result<Self> {
        match value.into() {
            Value::Object(pairs) => Self::from_pairs(pairs),
            Value::Node(Node::Object(object)) => Ok(object),
            other => Err(AqlError::structural_violation(
                format!("expected an object or object literal, got {}", other.type_name()),
                other,
            )),
        }
    }

    pub(crate) fn from_pairs(pairs: Vec<(String, Value)>) -> Result<Self> {
        let mut object = Self::default();
        for (key, value) in pairs {
            object.insert(key, value)?;
        }
        Ok(object)
    }

    /// Cast and store a value. An existing key keeps its position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<()> {
        let key = key.into();
        let node = cast(value)?;
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = node,
            None => self.entries.push((key, node)),
        }
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn entries(&self) -> &[(String, Node)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<&ListLiteral> for Value {
    fn from(list: &ListLiteral) -> Self {
        Self::Node(Node::List(list.clone()))
    }
}

impl From<&ObjectLiteral> for Value {
    fn from(object: &ObjectLiteral) -> Self {
        Self::Node(Node::Object(object.clone()))
    }
}
