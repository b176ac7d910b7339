//! Index structures.
//!
//! Currently a single index type lives here: the in-memory B-tree
//! ([`btree::BTree`]). The module boundary exists so alternative ordered
//! indexes can be added alongside it without touching callers.

pub mod btree;

pub use btree::{BTree, Key, KeyValuePair, Value};
