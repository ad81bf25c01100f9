//! Lowering S-expressions to ternary nodes.

use psll_ir::{Node, Program};
use tracing::debug;

use crate::{ensure_sufficient_stack, LowerError, Sexpr};

/// The atom marking an empty argument slot.
pub const ABSENT: &str = "_";

/// One rewrite over the lexed program.
pub struct Pass {
    pub name: &'static str,
    pub run: fn(Vec<Sexpr>) -> Vec<Sexpr>,
}

/// Rewrites applied before conversion, in order.
pub const PASSES: &[Pass] = &[
    Pass {
        name: "implicit-root",
        run: implicit_root,
    },
    Pass {
        name: "empty-brackets",
        run: empty_brackets,
    },
];

/// Run [`PASSES`], then convert every top-level expression to a node.
pub fn lower_program(sexprs: Vec<Sexpr>) -> Result<Program, LowerError> {
    let mut sexprs = sexprs;
    for pass in PASSES {
        sexprs = (pass.run)(sexprs);
        debug!(pass = pass.name, statements = sexprs.len(), "lowering pass");
    }

    sexprs
        .iter()
        .enumerate()
        .map(|(index, sexpr)| match sexpr {
            Sexpr::Atom(text) if text == ABSENT => Err(LowerError::AbsentTopLevel { index }),
            _ => lower(sexpr),
        })
        .collect()
}

/// Bottom-up rewrite of every list.
fn map_lists(sexprs: Vec<Sexpr>, f: fn(Vec<Sexpr>) -> Sexpr) -> Vec<Sexpr> {
    sexprs
        .into_iter()
        .map(|sexpr| match sexpr {
            Sexpr::List(items) => f(ensure_sufficient_stack(|| map_lists(items, f))),
            atom @ Sexpr::Atom(_) => atom,
        })
        .collect()
}

/// `((a) (b))`, `((a))` and `(_ (a))` get an empty root: `("" (a) (b))`.
fn implicit_root(sexprs: Vec<Sexpr>) -> Vec<Sexpr> {
    map_lists(sexprs, |mut items| {
        let has_list = items.iter().any(Sexpr::is_list);
        let only_slots = items
            .iter()
            .all(|item| item.is_list() || item.as_atom() == Some(ABSENT));
        if has_list && only_slots && items.len() <= 2 {
            items.insert(0, Sexpr::atom(""));
        }
        Sexpr::List(items)
    })
}

/// `()` is the empty leaf.
fn empty_brackets(sexprs: Vec<Sexpr>) -> Vec<Sexpr> {
    map_lists(sexprs, |items| {
        if items.is_empty() {
            Sexpr::atom("")
        } else {
            Sexpr::List(items)
        }
    })
}

fn lower(sexpr: &Sexpr) -> Result<Node, LowerError> {
    let items = match sexpr {
        Sexpr::Atom(text) if text == ABSENT => return Ok(Node::Absent),
        Sexpr::Atom(text) => return Ok(Node::leaf(text.as_str())),
        Sexpr::List(items) => items,
    };

    let (root, args) = match items.as_slice() {
        [] => return Ok(Node::leaf("")),
        [root, args @ ..] if args.len() <= 2 => (root, args),
        _ => {
            return Err(LowerError::Arity {
                found: items.len(),
                list: sexpr.to_string(),
            })
        }
    };

    let root = match root {
        Sexpr::Atom(text) if text == ABSENT => {
            return Err(LowerError::AbsentRoot {
                list: sexpr.to_string(),
            })
        }
        Sexpr::Atom(text) => text.as_str(),
        Sexpr::List(_) => {
            return Err(LowerError::SubtreeRoot {
                list: sexpr.to_string(),
            })
        }
    };

    let slot = |i: usize| -> Result<Node, LowerError> {
        match args.get(i) {
            Some(arg) => ensure_sufficient_stack(|| lower(arg)),
            None => Ok(Node::Absent),
        }
    };
    Ok(Node::ternary(root, slot(0)?, slot(1)?))
}
