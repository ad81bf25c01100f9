//! Build errors.

use psll_trees::ShapeError;

/// Error produced while building or compiling a program.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// Layout broke a shape invariant.
    #[error(transparent)]
    Shape(#[from] ShapeError),

    /// A program needs at least one top-level node.
    #[error("program has no top-level nodes")]
    EmptyProgram,

    /// Empty slots only make sense as arguments.
    #[error("top-level node {index} is an empty slot")]
    AbsentTopLevel { index: usize },
}
