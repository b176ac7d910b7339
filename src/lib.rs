//! BranchDB - an in-memory B-tree key-value engine with a configurable
//! minimum branching degree.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                       BranchDB                        │
//! ├───────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │           Command Processor (command)           │  │
//! │  │     find / insert / delete, one per line        │  │
//! │  └─────────────────────────────────────────────────┘  │
//! │                          ↓                            │
//! │  ┌─────────────────────────────────────────────────┐  │
//! │  │           B-Tree Engine (index/btree)           │  │
//! │  │   BTree: Search · Insert · Remove               │  │
//! │  │   Node:  split · merge · borrow-from-sibling    │  │
//! │  └─────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! Every non-root node holds between `t - 1` and `2t - 1` key-value pairs
//! and all leaves sit at the same depth, so search, insert and remove all
//! run in logarithmic time. Each node corresponds to a would-be disk page;
//! this crate keeps every node resident, but node boundaries mark where a
//! persistent implementation would hook in page I/O.
//!
//! # Modules
//! - [`common`] - Shared primitives (Error, Result, config)
//! - [`index`] - The B-tree engine
//! - [`command`] - Text-protocol command loop driving one engine
//!
//! # Quick Start
//! ```
//! use branchdb::BTree;
//!
//! let mut tree = BTree::new(2).unwrap();
//! tree.insert(10, 1);
//! tree.insert(20, 2);
//! assert_eq!(tree.search(10), Some(1));
//! assert_eq!(tree.remove(20), Some(2));
//! assert_eq!(tree.search(20), None);
//! ```

pub mod command;
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::config::MIN_BRANCHING_DEGREE;
pub use common::{Error, Result};
pub use index::btree::{BTree, Key, KeyValuePair, Value};
