//! Command handlers.
//!
//! Each handler takes the bootstrapped [`crate::CliContext`] and a writer,
//! so output can be captured in tests.

pub mod executable;
pub mod paths;
