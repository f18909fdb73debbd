/// Structural category of a node.
///
/// Every concrete node kind maps to exactly one category. The printer uses
/// it (and nothing else) to decide whether a child must be parenthesized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// General value-producing term
    #[default]
    Expression,

    /// Operator-built term with its own precedence
    Operation,

    /// Complete top-level clause
    Statement,

    /// Clause fragment awaiting further composition
    PartialStatement,
}

impl Category {
    /// Whether a child of this category is wrapped in `(` `)` when embedded.
    pub const fn needs_parens(self) -> bool {
        match self {
            Self::Expression => false,
            Self::Operation | Self::Statement | Self::PartialStatement => true,
        }
    }

    /// Whether a node of this category may precede another clause.
    pub const fn can_precede(self) -> bool {
        match self {
            Self::Expression | Self::Operation => false,
            Self::Statement | Self::PartialStatement => true,
        }
    }
}
