//! # awssize
//!
//! Command-line front end for the instance size scale.
//!
//! The binary uses these modules through the `main.rs` entry point.

pub mod cli;

// Re-export awssize_core for convenience
pub use awssize_core;
