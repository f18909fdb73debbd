pub mod ast;
pub mod cast;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod output;
pub mod validate;
pub mod value;

pub use ast::{Category, Node, NodeKind};
pub use cast::cast;
pub use error::{AqlError, ErrorCode, Result};
pub use output::{AqlWriter, Render};
pub use validate::Role;
pub use value::Value;
