//! # AQL Builder - Node Tree
//!
//! Typed nodes for generated AQL. Nodes are built by their constructors,
//! which cast and validate every argument up front, and are immutable
//! afterwards (list and object literals can still be extended in place).
//!
//! ## Architecture Overview
//!
//! - **[category]** - The four structural categories driving parenthesization
//! - **[node]** - The closed [`Node`] enum over every concrete kind
//! - **[literals]** - Literal and primitive leaves, list and object literals
//! - **[operators]** / **[operations]** - Unary and binary operations
//! - **[statements]** - `FOR`, `FILTER`, `LET`, `RETURN` and the
//!   data-modification statements
//! - **[options]** - The `OPTIONS` decoration of data-modification statements
//! - **[keywords]** - Reserved words
//!
//! ## Categories
//!
//! | category           | kinds                                        |
//! |--------------------|----------------------------------------------|
//! | `Expression`       | literals, identifiers, references, keywords  |
//! | `Operation`        | unary and binary operations                  |
//! | `PartialStatement` | `FOR`, `FILTER`, `LET`                       |
//! | `Statement`        | `RETURN`, `INSERT`, `UPDATE`, `REPLACE`, `REMOVE`, options |
//!
//! A child of any category but `Expression` is printed in parentheses.
//!
//! ## Example
//!
//! ```
//! use aql_builder::{Value, ast::{BinOp, BinaryOperation, For}};
//!
//! let query = aql_builder::ast::Node::from(For::new(None, "u", "users").unwrap())
//!     .filter(BinaryOperation::new(BinOp::GreaterEqual, "u.age", 18).unwrap())
//!     .and_then(|q| q.ret(Value::object([("name", "u.name")])))
//!     .unwrap();
//!
//! assert_eq!(query.to_aql(), "FOR u IN users FILTER (u.age >= 18) RETURN {name: u.name}");
//! ```
pub mod category;
pub mod keywords;
pub mod literals;
pub mod node;
pub mod operations;
pub mod operators;
pub mod options;
pub mod statements;

pub use category::Category;
pub use literals::{
    BooleanLiteral, Identifier, IntegerLiteral, Keyword, ListLiteral, NullLiteral, NumberLiteral,
    ObjectLiteral, RawExpression, SimpleReference, StringLiteral,
};
pub use node::{Node, NodeKind};
pub use operations::{BinaryOperation, UnaryOperation};
pub use operators::{BinOp, UnaryOp};
pub use options::WithOptions;
pub use statements::{Filter, For, Insert, Let, Remove, Replace, Return, Update};
