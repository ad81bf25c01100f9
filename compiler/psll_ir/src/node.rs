//! Ternary syntax tree nodes.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

/// Fingerprint salt for [`Node::Absent`].
const ABSENT_FINGERPRINT: u64 = 0x9e37_79b9_7f4a_7c15;

/// A node of the normalized ternary syntax tree.
///
/// Cloning is cheap: leaf text and ternary bodies are reference counted.
#[derive(Clone)]
pub enum Node {
    /// A keyword or literal drawn as a single pyramid.
    Leaf(Arc<str>),
    /// An empty argument slot.
    Absent,
    /// A root keyword with two argument slots.
    Ternary(Arc<Ternary>),
}

/// Body of a [`Node::Ternary`].
///
/// The root is plain text by construction; a subtree can never sit in root
/// position.
pub struct Ternary {
    root: Arc<str>,
    left: Node,
    right: Node,
    fingerprint: u64,
}

impl Ternary {
    /// The root keyword.
    #[inline]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The left argument slot.
    #[inline]
    pub fn left(&self) -> &Node {
        &self.left
    }

    /// The right argument slot.
    #[inline]
    pub fn right(&self) -> &Node {
        &self.right
    }
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(text: impl Into<Arc<str>>) -> Self {
        Node::Leaf(text.into())
    }

    /// Create a ternary node from a root keyword and two argument slots.
    pub fn ternary(root: impl Into<Arc<str>>, left: Node, right: Node) -> Self {
        let root = root.into();
        let mut hasher = FxHasher::default();
        root.hash(&mut hasher);
        hasher.write_u64(left.fingerprint());
        hasher.write_u64(right.fingerprint());
        Node::Ternary(Arc::new(Ternary {
            root,
            left,
            right,
            fingerprint: hasher.finish(),
        }))
    }

    /// Merge two nodes under an empty root: `("" left right)`.
    pub fn merge(left: Node, right: Node) -> Self {
        Node::ternary("", left, right)
    }

    /// Wrap a node as the left argument of an empty root: `("" node _)`.
    pub fn wrap_left(node: Node) -> Self {
        Node::ternary("", node, Node::Absent)
    }

    /// Wrap a node as the right argument of an empty root: `("" _ node)`.
    pub fn wrap_right(node: Node) -> Self {
        Node::ternary("", Node::Absent, node)
    }

    /// Whether this is an empty argument slot.
    #[inline]
    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// The ternary body, if this node has one.
    #[inline]
    pub fn as_ternary(&self) -> Option<&Ternary> {
        match self {
            Node::Ternary(ternary) => Some(ternary),
            Node::Leaf(_) | Node::Absent => None,
        }
    }

    /// Number of nodes in this subtree, counting empty slots.
    pub fn size(&self) -> usize {
        match self {
            Node::Leaf(_) | Node::Absent => 1,
            Node::Ternary(t) => 1 + t.left.size() + t.right.size(),
        }
    }

    /// Depth of this subtree. Leaves and empty slots have depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) | Node::Absent => 1,
            Node::Ternary(t) => 1 + t.left.depth().max(t.right.depth()),
        }
    }

    /// Structural fingerprint. Equal subtrees always share a fingerprint.
    pub fn fingerprint(&self) -> u64 {
        match self {
            Node::Leaf(text) => {
                let mut hasher = FxHasher::default();
                text.hash(&mut hasher);
                hasher.finish()
            }
            Node::Absent => ABSENT_FINGERPRINT,
            Node::Ternary(t) => t.fingerprint,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Leaf(a), Node::Leaf(b)) => a == b,
            (Node::Absent, Node::Absent) => true,
            (Node::Ternary(a), Node::Ternary(b)) => {
                Arc::ptr_eq(a, b)
                    || (a.fingerprint == b.fingerprint
                        && a.root == b.root
                        && a.left == b.left
                        && a.right == b.right)
            }
            _ => false,
        }
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::leaf(text)
    }
}

/// S-expression rendering. Empty slots print as `_`, empty text as `""`.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Leaf(text) if text.is_empty() => f.write_str("\"\""),
            Node::Leaf(text) => f.write_str(text),
            Node::Absent => f.write_str("_"),
            Node::Ternary(t) => {
                if t.root.is_empty() {
                    write!(f, "(\"\" {} {})", t.left, t.right)
                } else {
                    write!(f, "({} {} {})", t.root, t.left, t.right)
                }
            }
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({self})")
    }
}

#[cfg(test)]
mod tests;
