//! Common types and utilities shared across BranchDB.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types

pub mod config;
pub mod error;

pub use error::{Error, Result};
