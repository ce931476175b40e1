//! # chatrs Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//!
//! Shared helpers that are not specific to the responder or to a single
//! command. Currently only filesystem I/O lives here.
//!

/// Utilities for filesystem operations.
pub mod fs;
