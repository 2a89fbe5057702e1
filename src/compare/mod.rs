//! Line-by-line comparison core

mod lockstep;

pub use lockstep::{LinePair, LinePairs, ReadFault, Side};

use crate::types::Divergence;
use std::io::BufRead;

/// Find the first line at which two sources diverge
///
/// Drives a lockstep iteration over both sources and compares each pair for
/// exact equality, terminators included. Returns `Ok(Some(_))` for the first
/// unequal pair, at which point iteration stops immediately and no further
/// lines are read from either source. Returns `Ok(None)` when either source
/// is exhausted first.
///
/// Single forward pass: O(min(len(A), len(B))) time, one line from each
/// source in memory at a time.
pub fn find_divergence<A: BufRead, B: BufRead>(
    expected: A,
    actual: B,
) -> Result<Option<Divergence>, ReadFault> {
    for pair in LinePairs::new(expected, actual) {
        let pair = pair?;
        if !pair.is_match() {
            return Ok(Some(Divergence::new(
                pair.line_number,
                pair.expected,
                pair.actual,
            )));
        }
    }

    Ok(None)
}
