//! Core type definitions for firstdiff

mod divergence;
mod error;

pub use divergence::Divergence;
pub use error::FirstdiffError;
