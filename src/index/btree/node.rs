//! B-tree node and node-level operations.
//!
//! A [`Node`] owns an ordered payload of key-value pairs and, if internal,
//! one more child than it has pairs. All structural surgery lives here:
//! splitting a full child, merging underfull siblings, and borrowing an
//! entry through the parent. The tree-level orchestration (root growth and
//! shrink, degree validation) lives in [`super::tree`].
//!
//! # Layout
//! ```text
//! payload:   [ k0 | k1 | k2 ]
//! children: [c0 | c1 | c2 | c3]      (absent for leaves)
//! ```
//! Subtree `c_i` holds only keys strictly between `k(i-1)` and `k_i`, with
//! open bounds at the ends.

use crate::index::btree::pair::{Key, KeyValuePair, Value};

/// One tree node; the unit that would map to a disk page.
///
/// Children are exclusively owned (`Box`), so ownership transfer during
/// split and merge is explicit: a split hands the parent a new child, a
/// merge absorbs one sibling's entries and children and drops the sibling.
#[derive(Debug)]
pub(crate) struct Node {
    /// True if this node has no children.
    pub(crate) is_leaf: bool,

    /// Pairs sorted ascending by key; length in `[0, 2t-1]`.
    pub(crate) payload: Vec<KeyValuePair>,

    /// Child subtrees; empty for leaves, `payload.len() + 1` otherwise.
    pub(crate) children: Vec<Box<Node>>,
}

impl Node {
    /// Create an empty leaf.
    pub(crate) fn new_leaf() -> Self {
        Self {
            is_leaf: true,
            payload: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an empty internal node. The caller is responsible for giving
    /// it children before the node is reachable from the tree.
    pub(crate) fn new_internal() -> Self {
        Self {
            is_leaf: false,
            payload: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether this node holds the maximum `2t - 1` entries.
    #[inline]
    pub(crate) fn is_full(&self, t: usize) -> bool {
        self.payload.len() == 2 * t - 1
    }

    /// Upper-bound binary search over the payload.
    ///
    /// Returns `(true, i)` if `payload[i].key == key`, otherwise
    /// `(false, i)` where `i` is the index of the first entry with a key
    /// greater than `key` (== `payload.len()` if no such entry). `O(log m)`
    /// for `m` entries.
    #[inline]
    pub(crate) fn locate(&self, key: Key) -> (bool, usize) {
        match self.payload.binary_search_by_key(&key, |pair| pair.key) {
            Ok(index) => (true, index),
            Err(index) => (false, index),
        }
    }

    // ========================================================================
    // Search
    // ========================================================================

    /// Recursive lookup. Descends until the key matches or a leaf runs out.
    pub(crate) fn search(&self, key: Key) -> Option<Value> {
        let (found, index) = self.locate(key);
        if found {
            Some(self.payload[index].value)
        } else if self.is_leaf {
            None
        } else {
            self.children[index].search(key)
        }
    }

    // ========================================================================
    // Insert
    // ========================================================================

    /// Insert into a subtree whose root is known not to be full.
    ///
    /// The caller guarantees `key` is absent from the tree and that this
    /// node has room for one more entry; any full child on the descent path
    /// is split before we step into it, preserving that guarantee.
    pub(crate) fn insert_non_full(&mut self, key: Key, value: Value, t: usize) {
        let (_, mut index) = self.locate(key);
        if self.is_leaf {
            self.payload.insert(index, KeyValuePair::new(key, value));
        } else {
            if self.children[index].is_full(t) {
                self.split_child(index, t);
                // The promoted median may now sit at `index`; step over it
                // if the new key belongs to its right.
                if key > self.payload[index].key {
                    index += 1;
                }
            }
            self.children[index].insert_non_full(key, value, t);
        }
    }

    /// Split the full child at `child_index` into two half-full nodes,
    /// promoting its median entry into this node.
    ///
    /// The child keeps its left `t - 1` entries (and `t` children if
    /// internal); a new right sibling takes the rest. `O(t)`.
    pub(crate) fn split_child(&mut self, child_index: usize, t: usize) {
        let child = &mut self.children[child_index];
        debug_assert!(child.is_full(t), "only full children are split");

        // Entries after the median, and the matching children, move to the
        // new right sibling.
        let right_payload = child.payload.split_off(t);
        let right_children = if child.is_leaf {
            Vec::new()
        } else {
            child.children.split_off(t)
        };
        let median = child
            .payload
            .pop()
            .expect("a full child has a median entry");

        let right = Box::new(Node {
            is_leaf: child.is_leaf,
            payload: right_payload,
            children: right_children,
        });

        self.payload.insert(child_index, median);
        self.children.insert(child_index + 1, right);
    }

    // ========================================================================
    // Remove
    // ========================================================================

    /// Recursive removal. Returns the removed value, or `None` if `key` is
    /// not in this subtree.
    ///
    /// Structural repair happens strictly *before* descending: a child is
    /// topped up to at least `t` entries (borrow or merge) before the
    /// recursion steps into it, so no node is ever left underfull
    /// mid-recursion.
    pub(crate) fn remove(&mut self, key: Key, t: usize) -> Option<Value> {
        let (found, mut index) = self.locate(key);
        if found {
            let value = self.payload[index].value;
            if self.is_leaf {
                self.remove_from_leaf(index);
            } else {
                self.remove_internal_entry(index, t);
            }
            return Some(value);
        }

        if self.is_leaf {
            return None;
        }

        let was_last = index == self.payload.len();
        if self.children[index].payload.len() < t {
            self.fill(index, t);
            // A merge at the tail shrinks the payload by one, shifting the
            // target child left.
            if was_last && index > self.payload.len() {
                index -= 1;
            }
        }
        self.children[index].remove(key, t)
    }

    /// Delete the entry at `index` from a leaf.
    fn remove_from_leaf(&mut self, index: usize) {
        self.payload.remove(index);
    }

    /// Delete the entry at `index` from an internal node.
    ///
    /// The entry is overwritten with its in-order predecessor or successor
    /// (whichever neighboring child can spare an entry), and that pair is
    /// then removed from the child subtree it came from. If neither child
    /// can spare one, both are merged around the entry and removal recurses
    /// into the merged node. Each arm continues into a child holding at
    /// least `t` entries.
    fn remove_internal_entry(&mut self, index: usize, t: usize) {
        if self.children[index].payload.len() > t - 1 {
            let pred = self.predecessor(index);
            self.payload[index] = pred;
            self.children[index].remove(pred.key, t);
        } else if self.children[index + 1].payload.len() > t - 1 {
            let succ = self.successor(index);
            self.payload[index] = succ;
            self.children[index + 1].remove(succ.key, t);
        } else {
            let key = self.payload[index].key;
            self.merge_children(index);
            self.children[index].remove(key, t);
        }
    }

    /// In-order predecessor of the entry at `index`: the rightmost pair of
    /// the rightmost descendant of `children[index]`.
    fn predecessor(&self, index: usize) -> KeyValuePair {
        let mut current = &self.children[index];
        while !current.is_leaf {
            current = &current.children[current.children.len() - 1];
        }
        current.payload[current.payload.len() - 1]
    }

    /// In-order successor of the entry at `index`: the leftmost pair of the
    /// leftmost descendant of `children[index + 1]`.
    fn successor(&self, index: usize) -> KeyValuePair {
        let mut current = &self.children[index + 1];
        while !current.is_leaf {
            current = &current.children[0];
        }
        current.payload[0]
    }

    // ========================================================================
    // Fill: borrow or merge to restore minimum occupancy
    // ========================================================================

    /// Top up `children[index]` (which holds fewer than `t` entries) to at
    /// least `t` entries, preferring a borrow from a sibling over a merge.
    fn fill(&mut self, index: usize, t: usize) {
        if index > 0 && self.children[index - 1].payload.len() > t - 1 {
            self.take_from_previous(index);
        } else if index < self.payload.len() && self.children[index + 1].payload.len() > t - 1 {
            self.take_from_next(index);
        } else if index < self.payload.len() {
            self.merge_children(index);
        } else {
            self.merge_children(index - 1);
        }
    }

    /// Rotate one entry from the left sibling through this node into the
    /// front of `children[index]`.
    ///
    /// The separator at `index - 1` drops into the child, the sibling's
    /// rightmost entry replaces the separator, and (for internal children)
    /// the sibling's rightmost child moves along with its entry.
    fn take_from_previous(&mut self, index: usize) {
        let (left, right) = self.children.split_at_mut(index);
        let prev = &mut left[index - 1];
        let child = &mut right[0];

        let moved_up = prev
            .payload
            .pop()
            .expect("donor sibling has an entry to spare");
        let separator = std::mem::replace(&mut self.payload[index - 1], moved_up);
        child.payload.insert(0, separator);

        if !child.is_leaf {
            let moved_child = prev
                .children
                .pop()
                .expect("internal donor has a child to spare");
            child.children.insert(0, moved_child);
        }
    }

    /// Mirror image of [`Self::take_from_previous`]: rotate one entry from
    /// the right sibling through this node onto the back of
    /// `children[index]`.
    fn take_from_next(&mut self, index: usize) {
        let (left, right) = self.children.split_at_mut(index + 1);
        let child = &mut left[index];
        let next = &mut right[0];

        let moved_up = next.payload.remove(0);
        let separator = std::mem::replace(&mut self.payload[index], moved_up);
        child.payload.push(separator);

        if !child.is_leaf {
            child.children.push(next.children.remove(0));
        }
    }

    /// Fold `children[index]`, the separator at `index`, and
    /// `children[index + 1]` into a single node of `2t - 1` entries.
    ///
    /// The absorbed right sibling is removed from this node and dropped;
    /// its entries and children transfer to the left child.
    fn merge_children(&mut self, index: usize) {
        let separator = self.payload.remove(index);
        let mut sibling = self.children.remove(index + 1);
        let child = &mut self.children[index];

        child.payload.push(separator);
        child.payload.append(&mut sibling.payload);
        child.children.append(&mut sibling.children);
    }
}
