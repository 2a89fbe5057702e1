//! Divergence report formatting
//!
//! The output contract is exact: one block per run at most, nothing else on
//! stdout.

use crate::types::Divergence;
use std::io::{self, Write};

/// Write the divergence report block
///
/// ```text
/// Line <N>:
/// Correct: '<expected, newline-stripped>'
/// Got: '<actual, newline-stripped>'
/// <blank line>
/// ```
pub fn write_report<W: Write>(out: &mut W, divergence: &Divergence) -> io::Result<()> {
    writeln!(out, "Line {}:", divergence.line_number)?;
    writeln!(out, "Correct: '{}'", divergence.expected_text())?;
    writeln!(out, "Got: '{}'", divergence.actual_text())?;
    writeln!(out)?;
    Ok(())
}
