//! psll Surface Syntax
//!
//! Source text to [`Program`], in three stages:
//!
//! 1. [`preprocess`]: strip comments and newlines, normalise blanks around
//!    brackets
//! 2. [`lex`]: split on blanks outside of `()`, `[]` and `""`, recursing into
//!    brackets, giving [`Sexpr`]s
//! 3. [`lower_program`]: run the [`PASSES`] in order, then convert the
//!    S-expressions into ternary nodes
//!
//! Lowering is strict: lists must already be in ternary form
//! (`(root)`, `(root a)` or `(root a b)`). The only rewrites applied are the
//! empty-bracket and implicit-root passes.

mod error;
mod lexer;
mod lower;
mod preprocess;

pub use error::{FrontendError, LowerError, SyntaxError};
pub use lexer::{context_split, lex, split, Sexpr, ESCAPE, LEXER_CONTEXTS};
pub use lower::{lower_program, Pass, ABSENT, PASSES};
pub use preprocess::preprocess;

use psll_ir::Program;

/// Preprocess, lex and lower `source`.
pub fn parse_program(source: &str) -> Result<Program, FrontendError> {
    let reduced = preprocess(source);
    tracing::trace!(%reduced, "preprocessed");
    let sexprs = lex(&reduced)?;
    Ok(lower_program(sexprs)?)
}

/// Grow the stack before recursing into nested brackets.
#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 100 * 1024;
    const STACK_PER_RECURSION: usize = 1024 * 1024;
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
