//! The first-divergence record

/// The first position at which the two sources' lines are not exactly equal
///
/// Holds the raw lines as read, terminators included. The raw equality check
/// happens before this is built, so two lines that differ only in a trailing
/// newline still count as a divergence even though [`Divergence::expected_text`]
/// and [`Divergence::actual_text`] will display them identically. That quirk
/// is preserved on purpose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// 1-based line number of the mismatch
    pub line_number: u64,

    /// The expected line, raw
    pub expected: String,

    /// The actual line, raw
    pub actual: String,
}

impl Divergence {
    /// Create a new divergence record
    pub fn new(line_number: u64, expected: String, actual: String) -> Self {
        Self {
            line_number,
            expected,
            actual,
        }
    }

    /// The expected line with at most one trailing `\n` stripped
    pub fn expected_text(&self) -> &str {
        strip_newline(&self.expected)
    }

    /// The actual line with at most one trailing `\n` stripped
    pub fn actual_text(&self) -> &str {
        strip_newline(&self.actual)
    }
}

/// Strip exactly one trailing `\n` if present
///
/// Only the final character is checked: a CRLF line keeps its `\r`, and an
/// empty line has nothing to strip.
fn strip_newline(line: &str) -> &str {
    line.strip_suffix('\n').unwrap_or(line)
}
