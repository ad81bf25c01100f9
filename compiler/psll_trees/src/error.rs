//! Geometry errors.
//!
//! None of these occur while compiling a well-formed syntax tree; they signal
//! a broken invariant upstream and are never retried.

use std::fmt;

/// Error produced when a grid or a composition breaks a shape invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    /// A shape must have at least one row.
    #[error("grid must not be empty")]
    EmptyGrid,

    /// Rows of one shape must all have the same total width.
    #[error("row {row} has width {found} while the first row has width {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },

    /// A composition asked for a negative amount of padding, which would make
    /// glyphs of neighbouring shapes overlap.
    #[error("composition requires negative padding ({pad})")]
    NegativePadding { pad: isize },

    /// The grid does not have the shape of a single pyramid.
    #[error("not a pyramid (row {row}): {defect}")]
    InvalidPyramid { row: usize, defect: PyramidDefect },

    /// Two children can only be attached to a single pyramid.
    #[error("cannot attach two children to a tree that is not a single pyramid")]
    NonExpandableParent,
}

/// The specific way a grid fails to be a pyramid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PyramidDefect {
    /// The first row is not a lone apex glyph.
    InvalidTop,
    /// Left and right padding differ.
    Asymmetric,
    /// Padding does not shrink by exactly one per row.
    NotNarrowing,
    /// A body row is not enclosed in side glyphs.
    OpenSide,
    /// The last row is not a dash line with single-column padding.
    InvalidBase,
}

impl fmt::Display for PyramidDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            PyramidDefect::InvalidTop => "top row must be a single apex",
            PyramidDefect::Asymmetric => "left and right padding differ",
            PyramidDefect::NotNarrowing => "padding must shrink by one per row",
            PyramidDefect::OpenSide => "body rows must be enclosed by '/' and '\\'",
            PyramidDefect::InvalidBase => "last row must be a dash line padded by one",
        };
        f.write_str(message)
    }
}
