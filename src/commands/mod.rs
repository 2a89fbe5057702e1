//! User-facing commands

pub mod compare;
