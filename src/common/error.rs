//! Error types for BranchDB.

use thiserror::Error;

use crate::common::config::MIN_BRANCHING_DEGREE;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in BranchDB.
///
/// Note what is *not* here: inserting a duplicate key and looking up or
/// removing a missing key are ordinary outcomes, reported through `bool` /
/// `Option` return values. A well-formed tree with a valid degree cannot
/// fail structurally, so there is no "tree corrupted" variant either.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from the command input or result output streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested minimum branching degree is below the floor.
    ///
    /// Rejected before any tree is constructed.
    #[error("minimum branching degree must be at least {MIN_BRANCHING_DEGREE}, got {0}")]
    InvalidDegree(usize),

    /// The command processor saw a command token it does not understand.
    ///
    /// This is a fatal protocol error: the run terminates.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A command line was missing a field or carried a non-integer field.
    #[error("malformed command line '{0}'")]
    MalformedCommand(String),
}
