//! # chatrs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//! Author: Christi Mahu
//!
//! Functionality is delegated to submodules; import from them directly,
//! e.g. `use crate::common::fs::io::write_string_to_file;`.
//!

/// Basic file I/O used by state persistence (`read_file_if_exists`, `write_string_to_file`).
pub mod io;
