//! Hill-climbing drivers.

use psll_build::TreeBuilder;
use psll_ir::Program;
use rayon::prelude::*;
use tracing::debug;

use crate::candidates::{considerate_candidates, greedy_candidates};
use crate::{OptimizeError, OptimizeOptions, SearchLimits, Strategy};

/// Result of an optimisation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Optimized {
    pub program: Program,
    /// Number of accepted mutations.
    pub rounds: usize,
    /// Compiled length before the search, in characters.
    pub initial_len: usize,
    /// Compiled length after the search, in characters.
    pub final_len: usize,
}

/// Runs searches with one builder memo for the whole run.
pub struct Optimizer {
    builder: TreeBuilder,
    limits: SearchLimits,
}

impl Optimizer {
    pub fn new(limits: SearchLimits) -> Self {
        Optimizer {
            builder: TreeBuilder::new(),
            limits,
        }
    }

    /// The memo shared by every candidate this optimizer compiles.
    pub fn builder(&self) -> &TreeBuilder {
        &self.builder
    }

    /// Hand the warm memo to the caller, e.g. to compile the result.
    pub fn into_builder(self) -> TreeBuilder {
        self.builder
    }

    /// Run the strategy named in `options`.
    pub fn run(
        &mut self,
        program: Program,
        options: &OptimizeOptions,
    ) -> Result<Optimized, OptimizeError> {
        match options.strategy {
            Strategy::None => {
                let len = self.builder.compiled_len(&program)?;
                Ok(Optimized {
                    program,
                    rounds: 0,
                    initial_len: len,
                    final_len: len,
                })
            }
            Strategy::Greedy => self.greedy(program),
            Strategy::Considerate if options.parallel => self.considerate_parallel(program),
            Strategy::Considerate => self.considerate(program),
        }
    }

    /// First-improvement search.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = program.len()))]
    pub fn greedy(&mut self, program: Program) -> Result<Optimized, OptimizeError> {
        let initial_len = self.builder.compiled_len(&program)?;
        let mut current = program;
        let mut len = initial_len;
        let mut rounds = 0;

        for round in 1..=self.limits.max_iter() {
            let mut accepted = None;
            for candidate in greedy_candidates(&current) {
                let candidate_len = self.builder.compiled_len(&candidate)?;
                if candidate_len < len {
                    accepted = Some((candidate, candidate_len));
                    break;
                }
            }
            let Some((candidate, candidate_len)) = accepted else {
                break;
            };
            debug!(round, old_len = len, new_len = candidate_len, "accepted");
            current = candidate;
            len = candidate_len;
            rounds += 1;
        }

        debug!(stats = ?self.builder.stats(), "greedy search done");
        Ok(Optimized {
            program: current,
            rounds,
            initial_len,
            final_len: len,
        })
    }

    /// Best-improvement search, one candidate at a time.
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = program.len()))]
    pub fn considerate(&mut self, program: Program) -> Result<Optimized, OptimizeError> {
        let initial_len = self.builder.compiled_len(&program)?;
        let builder = &mut self.builder;
        considerate_search(program, initial_len, self.limits, |candidates| {
            let mut best: Option<(usize, usize)> = None;
            for (index, candidate) in candidates.iter().enumerate() {
                let len = builder.compiled_len(candidate)?;
                if best.map_or(true, |(best_len, _)| len < best_len) {
                    best = Some((len, index));
                }
            }
            Ok(best)
        })
    }

    /// Best-improvement search with candidates compiled on the rayon pool.
    ///
    /// Workers keep their own builders; the winner is the shortest
    /// candidate with the lowest index, as in [`Optimizer::considerate`].
    #[tracing::instrument(level = "debug", skip_all, fields(nodes = program.len()))]
    pub fn considerate_parallel(&mut self, program: Program) -> Result<Optimized, OptimizeError> {
        let initial_len = self.builder.compiled_len(&program)?;
        considerate_search(program, initial_len, self.limits, |candidates| {
            candidates
                .par_iter()
                .enumerate()
                .map_init(TreeBuilder::new, |builder, (index, candidate)| {
                    builder.compiled_len(candidate).map(|len| (len, index))
                })
                .try_reduce_with(|a, b| Ok(a.min(b)))
                .transpose()
                .map_err(OptimizeError::from)
        })
    }
}

/// Shared round loop for the considerate searches.
///
/// `shortest` returns `(length, index)` of the best candidate of a round, or
/// `None` if there are no candidates.
fn considerate_search<F>(
    program: Program,
    initial_len: usize,
    limits: SearchLimits,
    mut shortest: F,
) -> Result<Optimized, OptimizeError>
where
    F: FnMut(&[Program]) -> Result<Option<(usize, usize)>, OptimizeError>,
{
    let mut current = program;
    let mut len = initial_len;
    let mut rounds = 0;

    for round in 1..=limits.max_iter() {
        let mut candidates = considerate_candidates(&current, limits.max_depth());
        let Some((candidate_len, index)) = shortest(&candidates)? else {
            break;
        };
        if candidate_len >= len {
            break;
        }
        debug!(round, old_len = len, new_len = candidate_len, "accepted");
        current = candidates.swap_remove(index);
        len = candidate_len;
        rounds += 1;
    }

    Ok(Optimized {
        program: current,
        rounds,
        initial_len,
        final_len: len,
    })
}

#[cfg(test)]
mod tests;
