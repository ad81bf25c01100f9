//! Hanging children off the base of a parent.

use tracing::trace;

use super::{pad, signed, Spacing, Tree};
use crate::error::ShapeError;
use crate::grid::Row;
use crate::pyramid::{self, Pyramid, TextOptions};

/// Corner of the parent's base a single child hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Tree {
    /// Attach up to two children below `self`.
    ///
    /// With no children the tree is returned unchanged.
    pub fn attach(&self, left: Option<&Tree>, right: Option<&Tree>) -> Result<Tree, ShapeError> {
        match (left, right) {
            (Some(left), Some(right)) => self.add_two_children(left, right),
            (Some(child), None) => self.add_one_child(child, Side::Left),
            (None, Some(child)) => self.add_one_child(child, Side::Right),
            (None, None) => Ok(self.clone()),
        }
    }

    /// Hang `child` off one corner of the last row.
    ///
    /// The child's top row is joined to the parent's base row on `side`. The
    /// parent is never resized.
    pub fn add_one_child(&self, child: &Tree, side: Side) -> Result<Tree, ShapeError> {
        let base = self.last_row();
        let top = child.first_row();
        let base_width = signed(base.content_width());

        let (parent_pad, overhang) = match side {
            Side::Left => (top.left, signed(top.right) - (base_width + signed(base.right))),
            Side::Right => (top.right, signed(top.left) - (base_width + signed(base.left))),
        };
        let grow = pad(overhang.max(0))?;
        let shrink = pad((-overhang).max(0))?;

        let body = &self.rows[..self.rows.len() - 1];
        let mut rows = Vec::with_capacity(body.len() + child.height());

        rows.extend(body.iter().map(|p| match side {
            Side::Left => Row::new(parent_pad + p.left, p.content.clone(), p.right + grow),
            Side::Right => Row::new(grow + p.left, p.content.clone(), p.right + parent_pad),
        }));

        rows.push(match side {
            Side::Left => Row::new(
                top.left,
                format!("{}{}", top.content, base.content),
                base.right + grow,
            ),
            Side::Right => Row::new(
                grow + base.left,
                format!("{}{}", base.content, top.content),
                top.right,
            ),
        });

        rows.extend(child.rows[1..].iter().map(|c| match side {
            Side::Left => Row::new(c.left, c.content.clone(), c.right + shrink),
            Side::Right => Row::new(shrink + c.left, c.content.clone(), c.right),
        }));

        Tree::new(rows)
    }

    /// Hang `left` and `right` off the two corners of a single pyramid.
    ///
    /// The children are set side by side at least as far apart as the
    /// parent's base is wide, with an odd gap between their apexes. If they
    /// end up wider than the base, the parent is rebuilt from its own content
    /// at the wider size.
    pub fn add_two_children(&self, left: &Tree, right: &Tree) -> Result<Tree, ShapeError> {
        pyramid::validate(&self.rows).map_err(|_| ShapeError::NonExpandableParent)?;

        let base_width = self.last_row().content_width();
        let parent_width = base_width / 2 * 2 + 1;

        let children =
            left.add_side_by_side(right, Spacing::tight().with_min_spacing(parent_width).odd())?;
        let top = children.first_row();
        let children_width = signed(top.content_width()) - 2;

        let regrown;
        let parent = if children_width > signed(parent_width) || parent_width > base_width {
            let content = pyramid::content_of(&self.rows);
            let min_width = usize::try_from(children_width).ok().filter(|&w| w > 0);
            trace!(%content, ?min_width, "regrow parent");
            regrown = Pyramid::from_text_with(
                &content,
                TextOptions {
                    min_width,
                    remove_spaces: false,
                },
            )
            .into_tree();
            &regrown
        } else {
            self
        };

        let body = &parent.rows[..parent.rows.len() - 1];
        let base = parent.last_row();
        let mut rows = Vec::with_capacity(body.len() + children.height());

        rows.extend(
            body.iter()
                .map(|p| Row::new(top.left + p.left, p.content.clone(), p.right + top.right)),
        );

        let mut glyphs = top.content.chars();
        let mut joined = String::with_capacity(base.content.len() + 2);
        joined.extend(glyphs.next());
        joined.push_str(&base.content);
        joined.extend(glyphs.next_back());
        rows.push(Row::new(top.left, joined, top.right));

        rows.extend(children.rows[1..].iter().cloned());

        Tree::new(rows)
    }
}
