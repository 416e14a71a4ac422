//! Common utilities for the chisel crates.
//!
//! This crate provides shared infrastructure used by all chisel components:
//! - **Warning System** - colored, deduplicated terminal output for lax input

pub mod warning;
