//! Single pyramids.

mod text;

use crate::error::{PyramidDefect, ShapeError};
use crate::grid::{Row, BASE, LEFT_SIDE, RIGHT_SIDE, SPACE, TOP};
use crate::tree::Tree;

/// Options for laying text out inside a pyramid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextOptions {
    /// Grow the pyramid until its base is at least this wide. Rounded up to
    /// an odd width. `None` and `Some(0)` both mean no minimum.
    pub min_width: Option<usize>,
    /// Drop blanks from the text before laying it out.
    pub remove_spaces: bool,
}

/// A tree that is exactly one pyramid.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pyramid(Tree);

impl Pyramid {
    /// The smallest pyramid holding `text`, blanks kept.
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with(text, TextOptions::default())
    }

    pub fn from_text_with(text: &str, options: TextOptions) -> Self {
        let (rows, width) = text::text_to_rows(text, options);
        Pyramid(Tree::from_rows_unchecked(rows, width))
    }

    /// The text inside the pyramid, with every blank removed.
    pub fn content(&self) -> String {
        content_of(self.0.rows())
    }

    #[inline]
    pub fn as_tree(&self) -> &Tree {
        &self.0
    }

    #[inline]
    pub fn into_tree(self) -> Tree {
        self.0
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.0.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.0.height()
    }
}

impl TryFrom<Tree> for Pyramid {
    type Error = ShapeError;

    fn try_from(tree: Tree) -> Result<Self, Self::Error> {
        validate(tree.rows())?;
        Ok(Pyramid(tree))
    }
}

impl AsRef<Tree> for Pyramid {
    fn as_ref(&self) -> &Tree {
        &self.0
    }
}

/// Text of the body rows of a pyramid grid, sides and blanks stripped.
pub(crate) fn content_of(rows: &[Row]) -> String {
    let body = rows.get(1..rows.len().saturating_sub(1)).unwrap_or_default();
    let mut content = String::new();
    for row in body {
        let mut chars = row.content.chars();
        chars.next();
        chars.next_back();
        content.extend(chars.filter(|&c| c != SPACE));
    }
    content.trim().to_owned()
}

/// Check that `rows` form a single pyramid.
///
/// The top is a lone apex, pads are symmetric and shrink by one per row
/// (the last two rows may both have a pad of one), body rows are enclosed by
/// side glyphs and the last row is a dash line padded by one.
pub(crate) fn validate(rows: &[Row]) -> Result<(), ShapeError> {
    let defect = |row, defect| ShapeError::InvalidPyramid { row, defect };

    let Some(top) = rows.first() else {
        return Err(ShapeError::EmptyGrid);
    };
    if top.content.len() != 1 || top.first_glyph() != Some(TOP) {
        return Err(defect(0, PyramidDefect::InvalidTop));
    }

    for (i, pair) in rows.windows(2).enumerate() {
        let (row, next) = (&pair[0], &pair[1]);
        if row.left != row.right {
            return Err(defect(i, PyramidDefect::Asymmetric));
        }
        let both_last = row.left == 1 && next.left == 1;
        if !both_last && row.left != next.left + 1 {
            return Err(defect(i + 1, PyramidDefect::NotNarrowing));
        }
    }

    let last = rows.len() - 1;
    if last == 0 {
        return Err(defect(0, PyramidDefect::InvalidBase));
    }
    for (i, row) in rows.iter().enumerate().take(last).skip(1) {
        let enclosed = row.content_width() >= 2
            && row.first_glyph() == Some(LEFT_SIDE)
            && row.last_glyph() == Some(RIGHT_SIDE);
        if !enclosed {
            return Err(defect(i, PyramidDefect::OpenSide));
        }
    }

    let base = &rows[last];
    let flat = !base.content.is_empty() && base.content.chars().all(|c| c == BASE);
    if !flat || base.left != 1 || base.right != 1 {
        return Err(defect(last, PyramidDefect::InvalidBase));
    }

    Ok(())
}
