//! Build a single node from command-line arguments and render it

use super::CliError;
use crate::{
    Node, Value,
    ast::{Insert, Remove, Replace, Update, keywords::KEYWORDS},
    cast,
};

/// What to build, with every value still in its raw command-line form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Cast a single value
    Cast { value: String },
    /// `INSERT expr INTO collection`
    Insert {
        expr: String,
        collection: String,
        options: Option<String>,
    },
    /// `UPDATE expr WITH with_expr IN collection`
    Update {
        expr: String,
        with_expr: String,
        collection: String,
        options: Option<String>,
    },
    /// `REPLACE expr WITH with_expr IN collection`
    Replace {
        expr: String,
        with_expr: String,
        collection: String,
        options: Option<String>,
    },
    /// `REMOVE expr IN collection`
    Remove {
        expr: String,
        collection: String,
        options: Option<String>,
    },
}

/// Interpret an argument as JSON, falling back to bare text.
///
/// `42`, `true`, `{"a": 1}` and `"\"quoted\""` are JSON; `doc.name` is not
/// and stays text for the casting engine to classify.
///
/// A JSON string decodes to its content, which is then cast like any other
/// text: `"hello"` becomes the identifier `hello`, and `{"name": "Ada"}` holds
/// a reference. Wrap the content in single quotes (`"'Ada'"`, or `'Ada'` at
/// the top level) to get a string literal.
pub fn parse_input(input: &str) -> Value {
    let trimmed = input.trim();
    serde_json::from_str::<serde_json::Value>(trimmed)
        .map_or_else(|_| Value::String(trimmed.to_string()), Value::from)
}

/// Options are always an object, so they must be valid JSON.
fn parse_options(options: Option<&str>) -> Result<Option<Value>, CliError> {
    options
        .map(|s| serde_json::from_str::<serde_json::Value>(s).map(Value::from))
        .transpose()
        .map_err(CliError::from)
}

/// Build the requested node and return its query text.
pub fn execute(request: &Request) -> Result<String, CliError> {
    let node: Node = match request {
        Request::Cast { value } => cast(parse_input(value))?,
        Request::Insert {
            expr,
            collection,
            options,
        } => {
            let stmt = Insert::new(None, parse_input(expr), collection.as_str())?;
            match parse_options(options.as_deref())? {
                Some(opts) => stmt.options(opts)?.into(),
                None => stmt.into(),
            }
        }
        Request::Update {
            expr,
            with_expr,
            collection,
            options,
        } => {
            let stmt = Update::new(
                None,
                parse_input(expr),
                parse_input(with_expr),
                collection.as_str(),
            )?;
            match parse_options(options.as_deref())? {
                Some(opts) => stmt.options(opts)?.into(),
                None => stmt.into(),
            }
        }
        Request::Replace {
            expr,
            with_expr,
            collection,
            options,
        } => {
            let stmt = Replace::new(
                None,
                parse_input(expr),
                parse_input(with_expr),
                collection.as_str(),
            )?;
            match parse_options(options.as_deref())? {
                Some(opts) => stmt.options(opts)?.into(),
                None => stmt.into(),
            }
        }
        Request::Remove {
            expr,
            collection,
            options,
        } => {
            let stmt = Remove::new(None, parse_input(expr), collection.as_str())?;
            match parse_options(options.as_deref())? {
                Some(opts) => stmt.options(opts)?.into(),
                None => stmt.into(),
            }
        }
    };

    Ok(node.to_aql())
}

/// One reserved keyword per line.
pub fn keywords_listing() -> String {
    let mut out = KEYWORDS.join("\n");
    out.push('\n');
    out
}
