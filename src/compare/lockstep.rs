//! Lockstep dual line iteration
//!
//! Pairs two forward-only line readers and advances them together, stopping
//! at the first exhausted side. No buffering of either file beyond the
//! current line; the sequence is finite and not restartable.

use crate::types::FirstdiffError;
use std::io::{self, BufRead};
use std::path::Path;

/// Which input a read fault came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Expected,
    Actual,
}

/// A read fault inside the lockstep iteration
///
/// The iterator has no knowledge of file paths, so the fault records which
/// side failed; the caller attaches the path via [`ReadFault::into_error`].
#[derive(Debug)]
pub struct ReadFault {
    pub side: Side,
    pub line: u64,
    pub source: io::Error,
}

impl ReadFault {
    /// Attach the failing side's path, producing the crate-level error
    pub fn into_error(self, expected_path: &Path, actual_path: &Path) -> FirstdiffError {
        let path = match self.side {
            Side::Expected => expected_path,
            Side::Actual => actual_path,
        };
        FirstdiffError::Read {
            path: path.to_path_buf(),
            line: self.line,
            source: self.source,
        }
    }
}

/// One line from each source at the same positional index
///
/// Ephemeral: built per iteration step, dropped after comparison. Lines keep
/// their terminators so the equality check sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinePair {
    /// 1-based line number, incremented once per produced pair
    pub line_number: u64,

    /// Line from the expected source, raw
    pub expected: String,

    /// Line from the actual source, raw
    pub actual: String,
}

impl LinePair {
    /// Exact equality, including any newline terminator
    pub fn is_match(&self) -> bool {
        self.expected == self.actual
    }
}

/// Lazy pairing of two line streams
pub struct LinePairs<A, B> {
    expected: A,
    actual: B,
    line: u64,
}

impl<A: BufRead, B: BufRead> LinePairs<A, B> {
    pub fn new(expected: A, actual: B) -> Self {
        Self {
            expected,
            actual,
            line: 0,
        }
    }
}

impl<A: BufRead, B: BufRead> Iterator for LinePairs<A, B> {
    type Item = Result<LinePair, ReadFault>;

    fn next(&mut self) -> Option<Self::Item> {
        // The expected side is polled first. If it is exhausted, the actual
        // side is never read this step; if the actual side turns out to be
        // exhausted instead, the expected line just read is discarded.
        let mut expected = String::new();
        match self.expected.read_line(&mut expected) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(source) => {
                return Some(Err(ReadFault {
                    side: Side::Expected,
                    line: self.line + 1,
                    source,
                }))
            }
        }

        let mut actual = String::new();
        match self.actual.read_line(&mut actual) {
            Ok(0) => return None,
            Ok(_) => {}
            Err(source) => {
                return Some(Err(ReadFault {
                    side: Side::Actual,
                    line: self.line + 1,
                    source,
                }))
            }
        }

        self.line += 1;
        Some(Ok(LinePair {
            line_number: self.line,
            expected,
            actual,
        }))
    }
}
