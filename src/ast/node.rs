use std::fmt;

use crate::{
    ast::{
        BinaryOperation, BooleanLiteral, Category, Filter, For, Identifier, Insert, IntegerLiteral,
        Keyword, Let, ListLiteral, NullLiteral, NumberLiteral, ObjectLiteral, RawExpression,
        Remove, Replace, Return, SimpleReference, StringLiteral, UnaryOperation, Update,
        WithOptions,
    },
    output::Render,
    value::Value,
};

/// A node of the generated query tree.
///
/// Composition is strictly top-down: a node exclusively owns its children,
/// and `Clone` is a deep copy.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // Literals and primitives
    Integer(IntegerLiteral),
    Number(NumberLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Null(NullLiteral),
    Identifier(Identifier),
    SimpleReference(SimpleReference),
    Raw(RawExpression),
    Keyword(Keyword),
    List(ListLiteral),
    Object(ObjectLiteral),

    // Operations
    Binary(BinaryOperation),
    Unary(UnaryOperation),

    // Clauses
    For(For),
    Filter(Filter),
    Let(Let),
    Return(Return),
    Insert(Insert),
    Update(Update),
    Replace(Replace),
    Remove(Remove),
    WithOptions(WithOptions),
}

/// Concrete kind of a [`Node`], for callers that inspect built trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    IntegerLiteral,
    NumberLiteral,
    StringLiteral,
    BooleanLiteral,
    NullLiteral,
    Identifier,
    SimpleReference,
    RawExpression,
    Keyword,
    ListLiteral,
    ObjectLiteral,
    BinaryOperation,
    UnaryOperation,
    For,
    Filter,
    Let,
    Return,
    Insert,
    Update,
    Replace,
    Remove,
    WithOptions,
}

impl Node {
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Integer(_) => NodeKind::IntegerLiteral,
            Self::Number(_) => NodeKind::NumberLiteral,
            Self::String(_) => NodeKind::StringLiteral,
            Self::Boolean(_) => NodeKind::BooleanLiteral,
            Self::Null(_) => NodeKind::NullLiteral,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::SimpleReference(_) => NodeKind::SimpleReference,
            Self::Raw(_) => NodeKind::RawExpression,
            Self::Keyword(_) => NodeKind::Keyword,
            Self::List(_) => NodeKind::ListLiteral,
            Self::Object(_) => NodeKind::ObjectLiteral,
            Self::Binary(_) => NodeKind::BinaryOperation,
            Self::Unary(_) => NodeKind::UnaryOperation,
            Self::For(_) => NodeKind::For,
            Self::Filter(_) => NodeKind::Filter,
            Self::Let(_) => NodeKind::Let,
            Self::Return(_) => NodeKind::Return,
            Self::Insert(_) => NodeKind::Insert,
            Self::Update(_) => NodeKind::Update,
            Self::Replace(_) => NodeKind::Replace,
            Self::Remove(_) => NodeKind::Remove,
            Self::WithOptions(_) => NodeKind::WithOptions,
        }
    }

    /// Structural category, fixed per kind.
    ///
    /// No wildcard arm: a new kind has to pick its category here.
    pub const fn category(&self) -> Category {
        match self {
            Self::Integer(_)
            | Self::Number(_)
            | Self::String(_)
            | Self::Boolean(_)
            | Self::Null(_)
            | Self::Identifier(_)
            | Self::SimpleReference(_)
            | Self::Keyword(_)
            | Self::List(_)
            | Self::Object(_) => Category::Expression,
            Self::Raw(raw) => raw.category(),
            Self::Binary(_) | Self::Unary(_) => Category::Operation,
            Self::For(_) | Self::Filter(_) | Self::Let(_) => Category::PartialStatement,
            Self::Return(_)
            | Self::Insert(_)
            | Self::Update(_)
            | Self::Replace(_)
            | Self::Remove(_)
            | Self::WithOptions(_) => Category::Statement,
        }
    }

    /// Serialize to query text.
    pub fn to_aql(&self) -> String {
        Render::to_aql(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_aql())
    }
}

macro_rules! impl_node_from {
    ($($variant:ident($t:ty)),* $(,)?) => {
        $(
            impl From<$t> for Node {
                fn from(n: $t) -> Self {
                    Self::$variant(n)
                }
            }

            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Node(Node::$variant(n))
                }
            }
        )*
    };
}

impl_node_from!(
    Integer(IntegerLiteral),
    Number(NumberLiteral),
    String(StringLiteral),
    Boolean(BooleanLiteral),
    Null(NullLiteral),
    Identifier(Identifier),
    SimpleReference(SimpleReference),
    Raw(RawExpression),
    Keyword(Keyword),
    List(ListLiteral),
    Object(ObjectLiteral),
    Binary(BinaryOperation),
    Unary(UnaryOperation),
    For(For),
    Filter(Filter),
    Let(Let),
    Return(Return),
    Insert(Insert),
    Update(Update),
    Replace(Replace),
    Remove(Remove),
    WithOptions(WithOptions),
);
