use aql_builder::cli::{self, CliError, Request};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "aqb")]
#[command(about = "aqb - Build AQL statements from JSON or bare values")]
#[command(version)]
#[command(after_help = "Values are parsed as JSON, else kept as text. JSON strings are cast by \
their content: '\"hello\"' prints the identifier hello. Use \"'hello'\" for a string literal.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Values are parsed as JSON when possible and otherwise kept as text, so
/// `doc.name` is a reference and `'hello'` is a string literal. JSON strings
/// are cast by their content: `"hello"` and `{"a": "b"}` hold references, so
/// write `'hello'` or `{"a": "'b'"}` for string literals.
#[derive(Subcommand)]
enum Commands {
    /// Cast a single value and print its AQL
    Cast {
        /// The value (reads from stdin if not provided)
        value: Option<String>,
    },

    /// Build an INSERT statement
    Insert {
        /// Document expression
        expr: String,

        /// Target collection
        #[arg(long)]
        into: String,

        /// Options object as JSON
        #[arg(short, long)]
        options: Option<String>,
    },

    /// Build an UPDATE statement
    Update {
        /// Document or key expression
        expr: String,

        /// Partial document to merge
        #[arg(long = "with")]
        with_expr: String,

        /// Target collection
        #[arg(long = "in")]
        collection: String,

        /// Options object as JSON
        #[arg(short, long)]
        options: Option<String>,
    },

    /// Build a REPLACE statement
    Replace {
        /// Document or key expression
        expr: String,

        /// Replacement document
        #[arg(long = "with")]
        with_expr: String,

        /// Target collection
        #[arg(long = "in")]
        collection: String,

        /// Options object as JSON
        #[arg(short, long)]
        options: Option<String>,
    },

    /// Build a REMOVE statement
    Remove {
        /// Document or key expression
        expr: String,

        /// Target collection
        #[arg(long = "in")]
        collection: String,

        /// Options object as JSON
        #[arg(short, long)]
        options: Option<String>,
    },

    /// List reserved keywords
    Keywords,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast { value } => read_value(value).map(|value| Request::Cast { value }),
        Commands::Insert {
            expr,
            into,
            options,
        } => Ok(Request::Insert {
            expr,
            collection: into,
            options,
        }),
        Commands::Update {
            expr,
            with_expr,
            collection,
            options,
        } => Ok(Request::Update {
            expr,
            with_expr,
            collection,
            options,
        }),
        Commands::Replace {
            expr,
            with_expr,
            collection,
            options,
        } => Ok(Request::Replace {
            expr,
            with_expr,
            collection,
            options,
        }),
        Commands::Remove {
            expr,
            collection,
            options,
        } => Ok(Request::Remove {
            expr,
            collection,
            options,
        }),
        Commands::Keywords => {
            print!("{}", cli::keywords_listing());
            return;
        }
    }
    .and_then(|request| cli::execute(&request));

    match result {
        Ok(aql) => println!("{aql}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn read_value(value: Option<String>) -> Result<String, CliError> {
    match value {
        Some(s) => Ok(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        None => Err(CliError::NoInput),
    }
}
