//! Candidate programs for one search round.
//!
//! Candidates differ from the current program in exactly one top-level
//! window, replaced by an empty-root wrapper around it.

use psll_ir::{Node, Program};

/// Candidates in greedy order.
///
/// Every adjacent pair merged under an empty root first, then every single
/// node wrapped as a left child, then as a right child, position by position.
/// Candidates are produced lazily; greedy search usually stops early.
pub fn greedy_candidates(program: &Program) -> impl Iterator<Item = Program> + '_ {
    let nodes = program.nodes();

    let merges = nodes.windows(2).enumerate().filter_map(move |(start, pair)| {
        program.replace_window(start, 2, Node::merge(pair[0].clone(), pair[1].clone()))
    });

    let wraps = nodes.iter().enumerate().flat_map(move |(start, node)| {
        [Node::wrap_left(node.clone()), Node::wrap_right(node.clone())]
            .into_iter()
            .filter_map(move |wrapped| program.replace_window(start, 1, wrapped))
    });

    merges.chain(wraps)
}

/// Candidates in considerate order.
///
/// Windows of one node, then windows of two. A two-node window is first
/// merged under an empty root, and the merged pair is itself a candidate.
/// The window's node is then wrapped `1..max_depth` times as a left child,
/// then `1..max_depth` times as a right child.
pub fn considerate_candidates(program: &Program, max_depth: usize) -> Vec<Program> {
    let nodes = program.nodes();
    let per_window = 2 * max_depth.saturating_sub(1) + 1;
    let mut candidates = Vec::with_capacity(per_window * (2 * nodes.len()));

    let singles = nodes.iter().enumerate().map(|(start, node)| (start, 1, node.clone()));
    let pairs = nodes.windows(2).enumerate().map(|(start, pair)| {
        (start, 2, Node::merge(pair[0].clone(), pair[1].clone()))
    });

    let wraps: [fn(Node) -> Node; 2] = [Node::wrap_left, Node::wrap_right];
    for (start, width, node) in singles.chain(pairs) {
        if width == 2 {
            candidates.extend(program.replace_window(start, width, node.clone()));
        }
        for wrap in wraps {
            let mut wrapped = node.clone();
            for _ in 1..max_depth {
                wrapped = wrap(wrapped);
                candidates.extend(program.replace_window(start, width, wrapped.clone()));
            }
        }
    }

    candidates
}
