//! # firstdiff - First-Divergence File Comparison
//!
//! Reads two text files in lockstep and reports the first line at which
//! they diverge: the line number plus both mismatched lines with trailing
//! newlines stripped. Identical files (up to the shorter one's length)
//! produce no output at all.

// Module declarations
pub mod commands;
pub mod compare;
pub mod config;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use compare::find_divergence;
pub use config::Config;
pub use types::{Divergence, FirstdiffError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
