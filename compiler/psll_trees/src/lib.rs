//! ASCII Pyramid Geometry
//!
//! Layout engine for Pyramid Scheme programs, where every instruction is an
//! ASCII triangle and arguments hang off the base of their caller.
//!
//! # Architecture
//!
//! Every shape is a rectangular grid of [`Row`]s. A row is stored as
//! `(left pad, content, right pad)` and every row of a shape has the same
//! total width, so composition only ever has to reason about the pads.
//!
//! - [`Pyramid`]: a single triangle built from one text token. Carries the
//!   strict pyramid invariant (apex, bordered body, flat base).
//! - [`Tree`]: any composition of pyramids. Only the rectangular invariant
//!   holds. Every pyramid is a tree; a tree is a pyramid only if it passes
//!   validation ([`Pyramid::try_from`]).
//!
//! # Composition
//!
//! - [`Tree::add_side_by_side`]: place two trees next to each other, squeezed
//!   as tightly as their outlines allow
//! - [`Tree::add_one_child`]: hang a tree off one corner of a parent's base
//! - [`Tree::add_two_children`]: hang two trees off a single pyramid, growing
//!   the pyramid if the children are wider than its base
//!
//! # Rendering
//!
//! [`render_rows`] and [`parse_rows`] convert between grids and text; the
//! conversion is lossless for every shape this crate produces.

mod error;
mod grid;
mod pyramid;
mod render;
mod tree;

pub use error::{PyramidDefect, ShapeError};
pub use grid::{Row, BASE, LEFT_SIDE, RIGHT_SIDE, SPACE, TOP};
pub use pyramid::{Pyramid, TextOptions};
pub use render::{parse_rows, render_rows};
pub use tree::{Side, Spacing, Tree};
