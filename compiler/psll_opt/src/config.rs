//! Search configuration.

use std::fmt;

use crate::OptimizeError;

/// Bounds on the search. There are no defaults; callers choose them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    max_iter: usize,
    max_depth: usize,
}

impl SearchLimits {
    /// `max_iter` caps the number of rounds and must be at least 1.
    /// Considerate search wraps candidates `1..max_depth` times.
    pub fn new(max_iter: usize, max_depth: usize) -> Result<Self, OptimizeError> {
        if max_iter == 0 {
            return Err(OptimizeError::ZeroIterations);
        }
        Ok(SearchLimits {
            max_iter,
            max_depth,
        })
    }

    #[inline]
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

/// Which search to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Compile the program as written.
    None,
    Greedy,
    Considerate,
}

impl Strategy {
    /// Parse a strategy name as written on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "none" => Some(Strategy::None),
            "greedy" => Some(Strategy::Greedy),
            "considerate" => Some(Strategy::Considerate),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::None => "none",
            Strategy::Greedy => "greedy",
            Strategy::Considerate => "considerate",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the optimizer needs to know about one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OptimizeOptions {
    pub strategy: Strategy,
    pub limits: SearchLimits,
    /// Evaluate considerate candidates on the rayon pool.
    pub parallel: bool,
}

impl OptimizeOptions {
    pub fn new(strategy: Strategy, limits: SearchLimits) -> Self {
        OptimizeOptions {
            strategy,
            limits,
            parallel: false,
        }
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
