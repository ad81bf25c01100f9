//! Memoised tree building.

use std::sync::Arc;

use psll_ir::{Node, Program};
use psll_trees::{Pyramid, Tree};
use rustc_hash::{FxBuildHasher, FxHashMap};
use tracing::trace;

use crate::BuildError;

/// Soft cap on memoised subtrees. The cache is dropped wholesale when full.
pub const DEFAULT_CACHE_LIMIT: usize = 10_000;

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Counters for the subtree memo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

/// Builds trees from syntax nodes, remembering every subtree it has laid out.
///
/// One builder is meant to live for one compilation run. It is not shared
/// between threads; parallel callers keep one builder per worker.
pub struct TreeBuilder {
    cache: FxHashMap<Node, Arc<Tree>>,
    limit: usize,
    hits: usize,
    misses: usize,
}

impl TreeBuilder {
    pub fn new() -> Self {
        TreeBuilder {
            cache: FxHashMap::default(),
            limit: DEFAULT_CACHE_LIMIT,
            hits: 0,
            misses: 0,
        }
    }

    /// Create with pre-allocated cache capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        TreeBuilder {
            cache: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
            ..Self::new()
        }
    }

    /// Set the number of subtrees kept before the cache is cleared.
    #[must_use]
    pub fn with_cache_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Build the tree for `node`. Empty slots build to `None`.
    pub fn build(&mut self, node: &Node) -> Result<Option<Arc<Tree>>, BuildError> {
        if node.is_absent() {
            return Ok(None);
        }
        if let Some(tree) = self.cache.get(node) {
            self.hits += 1;
            return Ok(Some(Arc::clone(tree)));
        }
        self.misses += 1;

        let Some(tree) = ensure_sufficient_stack(|| self.layout(node))? else {
            return Ok(None);
        };
        let tree = Arc::new(tree);
        if self.cache.len() >= self.limit {
            trace!(entries = self.cache.len(), "tree cache full, clearing");
            self.cache.clear();
        }
        self.cache.insert(node.clone(), Arc::clone(&tree));
        Ok(Some(tree))
    }

    fn layout(&mut self, node: &Node) -> Result<Option<Tree>, BuildError> {
        match node {
            Node::Absent => Ok(None),
            Node::Leaf(text) => Ok(Some(Pyramid::from_text(text).into_tree())),
            Node::Ternary(ternary) => {
                let left = self.build(ternary.left())?;
                let right = self.build(ternary.right())?;
                trace!(root = ternary.root(), "attach children");
                let root = Pyramid::from_text(ternary.root()).into_tree();
                Ok(Some(root.attach(left.as_deref(), right.as_deref())?))
            }
        }
    }

    /// Build every top-level node and join the trees side by side.
    pub fn build_program(&mut self, program: &Program) -> Result<Tree, BuildError> {
        let mut joined: Option<Tree> = None;
        for (index, node) in program.iter().enumerate() {
            let tree = self
                .build(node)?
                .ok_or(BuildError::AbsentTopLevel { index })?;
            joined = Some(match joined {
                None => Tree::clone(&tree),
                Some(left) => left.beside(&tree)?,
            });
        }
        joined.ok_or(BuildError::EmptyProgram)
    }

    /// Compile a program to its final text.
    pub fn compile(&mut self, program: &Program) -> Result<String, BuildError> {
        let rendered = self.build_program(program)?.to_string();
        Ok(strip_margin(&rendered))
    }

    /// Length of the compiled program in characters.
    pub fn compiled_len(&mut self, program: &Program) -> Result<usize, BuildError> {
        Ok(self.compile(program)?.chars().count())
    }

    /// Check if a built tree exists for a node.
    pub fn is_cached(&self, node: &Node) -> bool {
        self.cache.contains_key(node)
    }

    /// Get the number of cached trees.
    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    /// Clear the tree cache. Counters are kept.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.cache.len(),
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Drop the first column and trailing blanks of every line.
fn strip_margin(rendered: &str) -> String {
    let mut out = String::with_capacity(rendered.len());
    for (i, line) in rendered.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut chars = line.chars();
        chars.next();
        out.push_str(chars.as_str().trim_end());
    }
    out
}

#[inline]
fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
