//! The key-value pair stored in tree nodes.

/// Key type. Keys are globally unique across one tree.
pub type Key = i64;

/// Value type. Opaque payload from the tree's point of view.
pub type Value = i64;

/// One entry in a node's payload.
///
/// Two machine words, so pairs are `Copy` and move freely between nodes
/// during split, merge and borrow without cloning ceremony.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyValuePair {
    pub key: Key,
    pub value: Value,
}

impl KeyValuePair {
    /// Create a new pair.
    #[inline]
    pub fn new(key: Key, value: Value) -> Self {
        Self { key, value }
    }
}
