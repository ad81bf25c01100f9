//! Top-level program: an ordered list of nodes laid out side by side.

use std::fmt;

use crate::Node;

/// An ordered sequence of top-level nodes.
///
/// Programs are values: window replacement returns a new program and leaves
/// the original untouched, sharing every node it does not replace.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Program {
    nodes: Vec<Node>,
}

impl Program {
    /// Create a program from its top-level nodes.
    pub fn new(nodes: Vec<Node>) -> Self {
        Program { nodes }
    }

    /// The top-level nodes, in layout order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Consume the program, returning its nodes.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Replace `width` consecutive nodes starting at `start` with `node`.
    ///
    /// Returns `None` if the window does not fit inside the program.
    pub fn replace_window(&self, start: usize, width: usize, node: Node) -> Option<Program> {
        let end = start.checked_add(width)?;
        if end > self.nodes.len() {
            return None;
        }
        let mut nodes = Vec::with_capacity(self.nodes.len() + 1 - width);
        nodes.extend_from_slice(&self.nodes[..start]);
        nodes.push(node);
        nodes.extend_from_slice(&self.nodes[end..]);
        Some(Program { nodes })
    }
}

impl From<Vec<Node>> for Program {
    fn from(nodes: Vec<Node>) -> Self {
        Program::new(nodes)
    }
}

impl FromIterator<Node> for Program {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Program {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Top-level nodes separated by single spaces.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{node}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.nodes).finish()
    }
}
