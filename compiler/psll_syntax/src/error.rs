//! Front-end errors.

/// Unbalanced brackets or quotes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SyntaxError {
    /// A closing delimiter with no matching opener.
    #[error("unmatched '{close}' at byte {offset}")]
    UnmatchedClose { offset: usize, close: char },

    /// Input ended inside a context.
    #[error("unterminated '{open}'")]
    Unterminated { open: char },
}

/// S-expressions that do not describe a ternary tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LowerError {
    /// A node takes a root and at most two arguments.
    #[error("bracket has {found} elements, at most 3 are allowed: {list}")]
    Arity { found: usize, list: String },

    /// The first element of a bracket must be an atom.
    #[error("bracket root must be an atom, not a bracket: {list}")]
    SubtreeRoot { list: String },

    /// `_` marks an empty argument, never a root.
    #[error("'_' cannot be a bracket root: {list}")]
    AbsentRoot { list: String },

    /// `_` marks an empty argument, never a statement.
    #[error("'_' cannot appear at top level (statement {index})")]
    AbsentTopLevel { index: usize },
}

/// Any error between source text and a program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrontendError {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("invalid tree: {0}")]
    Lower(#[from] LowerError),
}
