//! psll Intermediate Representation
//!
//! The normalized ternary syntax tree handed from the front end to the
//! layout engine.
//!
//! Every call site in a Pyramid Scheme program has at most two arguments, so
//! after normalization each node is one of:
//!
//! - [`Node::Leaf`]: a single keyword or literal, drawn as one pyramid
//! - [`Node::Absent`]: an empty argument slot
//! - [`Node::Ternary`]: a root keyword with a left and a right argument
//!
//! A [`Program`] is the ordered list of top-level nodes, laid out side by side.
//!
//! # Sharing
//!
//! Nodes are immutable and reference counted. Subtrees are shared freely
//! between programs (the optimizer builds thousands of candidates that differ
//! only near the top level), and each ternary node carries a structural
//! fingerprint so that equal subtrees hash and compare cheaply.

mod node;
mod program;

pub use node::{Node, Ternary};
pub use program::Program;
