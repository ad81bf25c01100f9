//! Trees of pyramids.
//!
//! A [`Tree`] is any rectangular grid of rows. Composition never mutates a
//! tree; every operation returns a new one and re-checks the rectangular
//! invariant on the way out.

mod attach;
mod compose;

pub use attach::Side;
pub use compose::Spacing;

use crate::error::ShapeError;
use crate::grid::Row;
use crate::pyramid::{self, Pyramid};

/// A rectangular grid of rows, all of the same width.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Tree {
    rows: Vec<Row>,
    width: usize,
}

impl Tree {
    /// Create a tree from its rows, checking that every row has the same width.
    pub fn new(rows: Vec<Row>) -> Result<Self, ShapeError> {
        let Some(first) = rows.first() else {
            return Err(ShapeError::EmptyGrid);
        };
        let expected = first.width();
        if let Some((row, found)) = rows
            .iter()
            .map(Row::width)
            .enumerate()
            .find(|&(_, found)| found != expected)
        {
            return Err(ShapeError::RaggedRow {
                row,
                found,
                expected,
            });
        }
        Ok(Tree {
            rows,
            width: expected,
        })
    }

    /// Wrap rows that are rectangular by construction.
    pub(crate) fn from_rows_unchecked(rows: Vec<Row>, width: usize) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|row| row.width() == width));
        Tree { rows, width }
    }

    /// A single pyramid holding `text`, as a tree.
    pub fn from_text(text: &str) -> Self {
        Pyramid::from_text(text).into_tree()
    }

    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// The top row. Trees are never empty.
    #[inline]
    pub fn first_row(&self) -> &Row {
        &self.rows[0]
    }

    /// The bottom row. Trees are never empty.
    #[inline]
    pub fn last_row(&self) -> &Row {
        &self.rows[self.rows.len() - 1]
    }

    /// Whether this tree is a single pyramid.
    pub fn is_pyramid(&self) -> bool {
        pyramid::validate(&self.rows).is_ok()
    }

    /// Reduce this tree to a single pyramid, if it is one.
    pub fn to_pyramid(&self) -> Result<Pyramid, ShapeError> {
        Pyramid::try_from(self.clone())
    }
}

impl From<Pyramid> for Tree {
    fn from(pyramid: Pyramid) -> Self {
        pyramid.into_tree()
    }
}

/// Widen a width for signed pad arithmetic.
#[allow(
    clippy::cast_possible_wrap,
    reason = "shape widths are bounded by the rendered program size"
)]
#[inline]
pub(crate) fn signed(n: usize) -> isize {
    n as isize
}

/// Narrow a signed pad back to a column count.
#[inline]
pub(crate) fn pad(n: isize) -> Result<usize, ShapeError> {
    usize::try_from(n).map_err(|_| ShapeError::NegativePadding { pad: n })
}

#[cfg(test)]
mod tests;
