//! Side-by-side composition.

use tracing::trace;

use super::{pad, signed, Tree};
use crate::error::ShapeError;
use crate::grid::{push_blanks, Row, BASE, TOP};

/// How two trees are spaced when placed side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Spacing {
    /// Squeeze the trees together as far as their outlines allow.
    pub tight: bool,
    /// Minimum number of blanks between the two top rows.
    pub min_spacing: Option<usize>,
    /// Force an odd number of blanks between the two top rows, so a parent
    /// base can sit centred between two apexes.
    pub odd: bool,
}

impl Spacing {
    /// As tight as possible, no further constraints.
    pub const fn tight() -> Self {
        Spacing {
            tight: true,
            min_spacing: None,
            odd: false,
        }
    }

    /// Bounding boxes touch, no squeezing.
    pub const fn loose() -> Self {
        Spacing {
            tight: false,
            min_spacing: None,
            odd: false,
        }
    }

    #[must_use = "with_min_spacing returns a new Spacing"]
    pub const fn with_min_spacing(self, min_spacing: usize) -> Self {
        Spacing {
            min_spacing: Some(min_spacing),
            ..self
        }
    }

    #[must_use = "odd returns a new Spacing"]
    pub const fn odd(self) -> Self {
        Spacing { odd: true, ..self }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::tight()
    }
}

/// Blanks between two facing rows, allowing an apex to tuck one column into
/// a neighbouring base line.
fn row_distance(left: &Row, right: &Row) -> isize {
    let mut distance = signed(left.right + right.left);
    match (left.last_glyph(), right.first_glyph()) {
        (Some(TOP), Some(BASE)) | (Some(BASE), Some(TOP)) => distance -= 1,
        _ => {}
    }
    distance
}

impl Tree {
    /// How far `other` can slide left over `self` before their glyphs touch.
    ///
    /// Rows are paired from the top; only as many rows as the shorter tree
    /// has are compared.
    pub fn squeeze(&self, other: &Tree) -> isize {
        self.rows
            .iter()
            .zip(&other.rows)
            .map(|(left, right)| row_distance(left, right))
            .min()
            .unwrap_or(0)
    }

    /// Place `other` to the right of `self` with the default (tight) spacing.
    pub fn beside(&self, other: &Tree) -> Result<Tree, ShapeError> {
        self.add_side_by_side(other, Spacing::tight())
    }

    /// Place `other` to the right of `self`.
    ///
    /// The trees are aligned at their top rows. Rows below the shorter tree
    /// are padded out on the side of the missing tree.
    pub fn add_side_by_side(&self, other: &Tree, spacing: Spacing) -> Result<Tree, ShapeError> {
        let mut squeeze = if spacing.tight {
            self.squeeze(other)
        } else {
            0
        };

        // Blanks between the two top rows (the apexes, for pyramids)
        let top_gap = signed(self.first_row().right + other.first_row().left);
        let mut peak_gap = top_gap - squeeze;
        if let Some(min_spacing) = spacing.min_spacing.filter(|&m| m > 0) {
            squeeze -= (signed(min_spacing) - peak_gap).max(0);
            peak_gap = top_gap - squeeze;
        }
        if spacing.odd && peak_gap.rem_euclid(2) == 0 {
            squeeze -= 1;
        }

        let (overhang, left_extra, right_extra) = if self.height() > other.height() {
            let overhang = signed(other.width) - squeeze;
            (overhang, 0, pad((-overhang).max(0))?)
        } else {
            let overhang = signed(self.width) - squeeze;
            (overhang, pad((-overhang).max(0))?, 0)
        };
        let extend = pad(overhang.max(0))?;

        trace!(squeeze, overhang, "side by side");

        let mut rows = Vec::with_capacity(self.height().max(other.height()));
        let mut left_rows = self.rows.iter();
        let mut right_rows = other.rows.iter();
        loop {
            let row = match (left_rows.next(), right_rows.next()) {
                (Some(l), Some(r)) => {
                    let gap = pad(signed(l.right + r.left) - squeeze)?;
                    let mut content = String::with_capacity(l.content.len() + gap + r.content.len());
                    content.push_str(&l.content);
                    push_blanks(&mut content, gap);
                    content.push_str(&r.content);
                    Row::new(l.left + left_extra, content, r.right + right_extra)
                }
                (Some(l), None) => Row::new(l.left, l.content.clone(), l.right + extend),
                (None, Some(r)) => Row::new(extend + r.left, r.content.clone(), r.right),
                (None, None) => break,
            };
            rows.push(row);
        }

        Tree::new(rows)
    }
}
