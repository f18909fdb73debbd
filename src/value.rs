use rust_decimal::Decimal;

use crate::ast::Node;

/// A raw host value handed to a node constructor.
///
/// This is the closed set of inputs the casting engine understands: the JSON
/// types (with integers kept apart from floats, and objects kept in
/// insertion order) plus nodes that were already built.
///
/// # Examples
///
/// ```
/// use aql_builder::Value;
///
/// // Scalar values
/// let null = Value::Null;
/// let boolean = Value::from(true);
/// let integer = Value::from(42);
/// let text = Value::from("some.ref");
///
/// // Collections
/// let array = Value::from(vec![1, 2, 3]);
/// let object = Value::Object(vec![("a".to_string(), Value::from(1))]);
/// # let _ = (null, boolean, integer, text, array, object);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Host null marker
    Null,

    /// Boolean (true/false)
    Boolean(bool),

    /// Integer number (preserved separately from floats)
    Integer(i64),

    /// Floating-point number
    Float(f64),

    /// Exact decimal number, including integers beyond `i64`
    Decimal(Decimal),

    /// Text, still to be classified by the casting engine
    String(String),

    /// Ordered sequence of raw values
    Array(Vec<Value>),

    /// String-keyed mapping, in insertion order
    Object(Vec<(String, Value)>),

    /// A node that was already constructed
    Node(Node),
}

impl Value {
    /// Human-readable category name used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Decimal(_) => "decimal",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Node(_) => "node",
        }
    }

    /// Build an object value from key/value pairs, keeping their order.
    pub fn object<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Object(pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Integer(i64::from(n))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        i64::try_from(n).map_or_else(|_| Self::Decimal(Decimal::from(n)), Self::Integer)
    }
}

impl From<Decimal> for Value {
    fn from(d: Decimal) -> Self {
        Self::Decimal(d)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<Node> for Value {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

/// Convert a parsed JSON document into a host value.
///
/// Object keys keep their document order.
impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Boolean(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    Self::from(u)
                } else {
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(arr) => Self::Array(arr.into_iter().map(Self::from).collect()),
            serde_json::Value::Object(obj) => {
                Self::Object(obj.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
