//! Program Size Optimizer
//!
//! Shrinks compiled programs by inserting empty-root pyramids at top level.
//! An empty root can pull two neighbouring trees under one apex, or lift a
//! single tree so it packs more tightly against its neighbours.
//!
//! # Strategies
//!
//! - [`Strategy::Greedy`]: scan candidates in a fixed order and take the
//!   first one that is strictly shorter, then rescan
//! - [`Strategy::Considerate`]: evaluate every candidate of a round, up to a
//!   wrapper depth, and take the shortest
//!
//! Both only ever accept strictly shorter programs, so the compiled length
//! never grows, and both stop after at most [`SearchLimits::max_iter`]
//! rounds.
//!
//! # Parallelism
//!
//! Considerate rounds can fan out over rayon with one builder per worker.
//! Ties are broken by candidate order, so the result matches the sequential
//! search exactly. Greedy search is inherently ordered and always sequential.

mod candidates;
mod config;
mod error;
mod optimizer;

pub use candidates::{considerate_candidates, greedy_candidates};
pub use config::{OptimizeOptions, SearchLimits, Strategy};
pub use error::OptimizeError;
pub use optimizer::{Optimized, Optimizer};

use psll_ir::Program;

/// Optimise `program` with a fresh builder.
pub fn optimize(program: Program, options: &OptimizeOptions) -> Result<Optimized, OptimizeError> {
    Optimizer::new(options.limits).run(program, options)
}
