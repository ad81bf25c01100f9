//! Optimizer errors.

use psll_build::BuildError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizeError {
    /// The search must be allowed at least one round.
    #[error("max_iter must be at least 1")]
    ZeroIterations,

    /// A candidate failed to compile.
    #[error(transparent)]
    Build(#[from] BuildError),
}
