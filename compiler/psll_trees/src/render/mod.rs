//! Text form of grids.
//!
//! Rows render as `left` blanks, the content, then `right` blanks, joined
//! with `\n`. Parsing reverses this: pads are the runs of blanks at either
//! end of a line.

use std::fmt;
use std::str::FromStr;

use crate::error::ShapeError;
use crate::grid::{push_blanks, Row, SPACE};
use crate::pyramid::Pyramid;
use crate::tree::Tree;

/// Render rows as text, one line per row.
pub fn render_rows(rows: &[Row]) -> String {
    let capacity = rows
        .iter()
        .map(|row| row.left + row.content.len() + row.right + 1)
        .sum();
    let mut out = String::with_capacity(capacity);
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        push_blanks(&mut out, row.left);
        out.push_str(&row.content);
        push_blanks(&mut out, row.right);
    }
    out
}

/// Split rendered text back into rows.
///
/// A line of only blanks becomes a row with empty content and all of its
/// width on the left.
pub fn parse_rows(text: &str) -> Vec<Row> {
    text.split('\n')
        .map(|line| {
            let width = line.chars().count();
            let trimmed = line.trim_start_matches(SPACE);
            if trimmed.is_empty() {
                return Row::new(width, String::new(), 0);
            }
            let content = trimmed.trim_end_matches(SPACE);
            let left = width - trimmed.chars().count();
            let right = trimmed.len() - content.len();
            Row::new(left, content, right)
        })
        .collect()
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_rows(self.rows()))
    }
}

impl fmt::Display for Pyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_tree(), f)
    }
}

impl FromStr for Tree {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tree::new(parse_rows(s))
    }
}

impl FromStr for Pyramid {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pyramid::try_from(s.parse::<Tree>()?)
    }
}
