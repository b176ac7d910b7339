//! Command processor - drives one B-tree over a line-oriented text protocol.
//!
//! One command per line, fields whitespace-separated:
//!
//! | Command              | Engine call       | Output               |
//! |----------------------|-------------------|----------------------|
//! | `find <key>`         | [`BTree::search`] | value, or `null`     |
//! | `insert <key> <val>` | [`BTree::insert`] | `true` / `false`     |
//! | `delete <key>`       | [`BTree::remove`] | value, or `null`     |
//!
//! Blank lines are skipped. Anything else is a fatal protocol error that
//! ends the run: an unrecognized command token yields
//! [`Error::UnknownCommand`], a missing or non-integer field yields
//! [`Error::MalformedCommand`].

use std::io::{BufRead, Write};

use crate::common::{Error, Result};
use crate::index::btree::{BTree, Key};

/// Marker emitted when `find` or `delete` misses.
const NULL_MARKER: &str = "null";

/// Process commands from `input`, writing one result line per command to
/// `output`, against a fresh tree of the given minimum branching degree.
///
/// # Errors
/// - [`Error::InvalidDegree`] if `min_branching_degree < 2` (checked before
///   any input is read)
/// - [`Error::UnknownCommand`] / [`Error::MalformedCommand`] on the first
///   bad command line
/// - [`Error::Io`] if reading or writing fails
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, min_branching_degree: usize) -> Result<()> {
    let mut tree = BTree::new(min_branching_degree)?;

    for line in input.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let Some(command) = fields.next() else {
            continue;
        };

        match command {
            "find" => {
                let key = parse_field(fields.next(), &line)?;
                match tree.search(key) {
                    Some(value) => writeln!(output, "{value}")?,
                    None => writeln!(output, "{NULL_MARKER}")?,
                }
            }
            "insert" => {
                let key = parse_field(fields.next(), &line)?;
                let value = parse_field(fields.next(), &line)?;
                writeln!(output, "{}", tree.insert(key, value))?;
            }
            "delete" => {
                let key = parse_field(fields.next(), &line)?;
                match tree.remove(key) {
                    Some(value) => writeln!(output, "{value}")?,
                    None => writeln!(output, "{NULL_MARKER}")?,
                }
            }
            other => return Err(Error::UnknownCommand(other.to_string())),
        }
    }

    output.flush()?;
    Ok(())
}

/// Parse one integer field, reporting the whole offending line on failure.
fn parse_field(field: Option<&str>, line: &str) -> Result<Key> {
    field
        .ok_or_else(|| Error::MalformedCommand(line.to_string()))?
        .parse()
        .map_err(|_| Error::MalformedCommand(line.to_string()))
}
