//! Pyramid Tree Builder
//!
//! Turns the normalized ternary syntax tree into pyramid layouts and
//! renders whole programs.
//!
//! # Architecture
//!
//! - Leaves become single pyramids ([`psll_trees::Pyramid::from_text`])
//! - Empty slots build to nothing
//! - A ternary node builds its root pyramid, then hangs the built children
//!   off its base ([`psll_trees::Tree::attach`])
//!
//! Building is memoised per [`TreeBuilder`]. The optimizer recompiles many
//! programs that share almost all of their subtrees, so one builder is kept
//! for a whole optimisation run and each distinct subtree is laid out once.
//!
//! # Program Output
//!
//! Top-level trees are joined side by side, in order, as tightly as their
//! outlines allow. The rendering then loses its first column and every line
//! loses its trailing blanks.

mod builder;
mod error;

pub use builder::{CacheStats, TreeBuilder, DEFAULT_CACHE_LIMIT};
pub use error::BuildError;

use psll_ir::Program;

/// Compile a program with a fresh builder.
pub fn compile(program: &Program) -> Result<String, BuildError> {
    TreeBuilder::new().compile(program)
}
