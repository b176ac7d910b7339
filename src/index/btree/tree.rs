//! The B-tree engine: owns the root node and orchestrates mutation.
//!
//! All per-node surgery lives in [`super::node`]; this module adds the two
//! pieces only the tree as a whole can do: growing a new root when the old
//! one fills up, and shrinking away an emptied root after removal.

use tracing::debug;

use crate::common::config::MIN_BRANCHING_DEGREE;
use crate::common::{Error, Result};
use crate::index::btree::node::Node;
use crate::index::btree::pair::{Key, KeyValuePair, Value};

/// An ordered key-value map backed by a B-tree of minimum branching
/// degree `t`.
///
/// # Complexity
/// `search`, `insert` and `remove` each visit `O(log_t n)` nodes and do an
/// `O(log t)` binary search plus `O(t)` entry movement per node.
///
/// # Concurrency
/// Single-threaded by design: every operation runs to completion before
/// returning and there is no internal locking. Callers that need shared
/// access must serialize externally.
///
/// # Example
/// ```
/// use branchdb::BTree;
///
/// let mut tree = BTree::new(2).unwrap();
/// assert!(tree.insert(7, 70));
/// assert!(!tree.insert(7, 71)); // duplicate key, tree unchanged
/// assert_eq!(tree.search(7), Some(70));
/// assert_eq!(tree.remove(7), Some(70));
/// assert_eq!(tree.search(7), None);
/// ```
#[derive(Debug)]
pub struct BTree {
    /// The root node. May hold fewer than `t - 1` entries, transiently even
    /// zero; every other node obeys the occupancy bounds.
    root: Box<Node>,

    /// Minimum branching degree `t`, fixed at construction.
    min_branching_degree: usize,

    /// Number of live pairs in the tree.
    len: usize,
}

impl BTree {
    /// Create an empty tree with the given minimum branching degree.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDegree`] if `min_branching_degree < 2`; no
    /// tree is constructed in that case.
    pub fn new(min_branching_degree: usize) -> Result<Self> {
        if min_branching_degree < MIN_BRANCHING_DEGREE {
            return Err(Error::InvalidDegree(min_branching_degree));
        }
        Ok(Self {
            root: Box::new(Node::new_leaf()),
            min_branching_degree,
            len: 0,
        })
    }

    /// The degree parameter `t` this tree was built with.
    #[inline]
    pub fn min_branching_degree(&self) -> usize {
        self.min_branching_degree
    }

    /// Number of pairs currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no pairs.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    // ========================================================================
    // Public API: Search / Insert / Remove
    // ========================================================================

    /// Look up the value stored under `key`.
    ///
    /// Returns `None` if the key is absent. No side effects.
    pub fn search(&self, key: Key) -> Option<Value> {
        self.root.search(key)
    }

    /// Insert a pair, keeping keys unique.
    ///
    /// Returns `false` (and changes nothing) if `key` is already present.
    /// If the root is full it is split preemptively, so the recursive
    /// descent never enters a full node.
    pub fn insert(&mut self, key: Key, value: Value) -> bool {
        if self.search(key).is_some() {
            return false;
        }

        let t = self.min_branching_degree;
        if self.root.is_full(t) {
            // Grow: a fresh root adopts the old one as its sole child, then
            // splits it. This is the only way the tree gains a level.
            let old_root = std::mem::replace(&mut self.root, Box::new(Node::new_internal()));
            self.root.children.push(old_root);
            self.root.split_child(0, t);
            debug!(len = self.len, "root split, tree grew one level");
        }
        self.root.insert_non_full(key, value, t);
        self.len += 1;
        true
    }

    /// Remove `key` and return its value, or `None` if the key is absent.
    ///
    /// Removing a nonexistent key is not an error. Note that even a miss
    /// can restructure the tree: sibling borrows and merges happen on the
    /// way *down*, before each descent step.
    pub fn remove(&mut self, key: Key) -> Option<Value> {
        let t = self.min_branching_degree;
        let removed = self.root.remove(key, t);
        if removed.is_some() {
            self.len -= 1;
        }

        if self.root.payload.is_empty() && !self.root.is_leaf {
            // Merging the root's last two children leaves it with exactly
            // one child; promote that child. An emptied leaf root is simply
            // kept in place.
            let child = self.root.children.remove(0);
            self.root = child;
            debug!(len = self.len, "root emptied, tree shrank one level");
        }
        removed
    }

    // ========================================================================
    // Diagnostics
    // ========================================================================

    /// Snapshot of every pair in ascending key order.
    ///
    /// A whole-tree traversal for tests and diagnostics, not a range-query
    /// API: it always walks everything.
    pub fn pairs(&self) -> Vec<KeyValuePair> {
        let mut out = Vec::with_capacity(self.len);
        Self::collect_in_order(&self.root, &mut out);
        out
    }

    fn collect_in_order(node: &Node, out: &mut Vec<KeyValuePair>) {
        if node.is_leaf {
            out.extend_from_slice(&node.payload);
            return;
        }
        for (index, pair) in node.payload.iter().enumerate() {
            Self::collect_in_order(&node.children[index], out);
            out.push(*pair);
        }
        Self::collect_in_order(&node.children[node.payload.len()], out);
    }

    /// Walk the whole tree and panic on any structural violation.
    ///
    /// Checks, for every node: occupancy bounds (root exempt from the lower
    /// bound), `children == payload + 1` for internal nodes, equal leaf
    /// depth, and globally strictly ascending in-order keys. Debugging and
    /// testing aid; not called on any operational path.
    pub fn assert_invariants(&self) {
        let t = self.min_branching_degree;
        Self::check_node(&self.root, t, true);

        let pairs = self.pairs();
        assert_eq!(pairs.len(), self.len, "len matches in-order traversal");
        assert!(
            pairs.windows(2).all(|w| w[0].key < w[1].key),
            "in-order keys strictly ascend"
        );
    }

    /// Returns the height of the subtree, counting this node as one level.
    fn check_node(node: &Node, t: usize, is_root: bool) -> usize {
        assert!(node.payload.len() <= 2 * t - 1, "node within capacity");
        if !is_root {
            assert!(node.payload.len() >= t - 1, "non-root node at least half full");
        }

        if node.is_leaf {
            assert!(node.children.is_empty(), "leaf has no children");
            return 1;
        }

        assert_eq!(
            node.children.len(),
            node.payload.len() + 1,
            "internal node has one more child than entries"
        );
        let mut depths = node
            .children
            .iter()
            .map(|child| Self::check_node(child, t, false));
        let first = depths.next().expect("internal node has children");
        assert!(depths.all(|d| d == first), "all leaves at equal depth");
        first + 1
    }
}
