//! B-tree index implementation.
//!
//! A B-tree of minimum branching degree `t`: every non-root node holds
//! between `t - 1` and `2t - 1` key-value pairs, internal nodes hold one
//! more child than they hold pairs, and all leaves sit at the same depth.
//!
//! # Components
//! - [`KeyValuePair`] - The unit of storage (integer key, integer value)
//! - `Node` - One tree node; a would-be disk page (crate-private)
//! - [`BTree`] - The engine owning the root and the degree parameter
//!
//! Each node maps to what would be one disk page in a persistent
//! implementation: the points where a node is first touched during descent
//! are where page-fetch and page-flush hooks would go.

mod node;
mod pair;
mod tree;

pub use pair::{Key, KeyValuePair, Value};
pub use tree::BTree;
