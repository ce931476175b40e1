//! # chatrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test crates in `cli/tests/`. Each test
//! runs the compiled `chatrs` binary inside its own temporary directory, with
//! `HOME`/`XDG_CONFIG_HOME` pointed there too, so neither the developer's
//! configuration nor a stray state file can leak into a test.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// `assert_cmd::Command` for the `chatrs` binary built for this test run.
///
/// ## Panics
/// Panics if the `chatrs` binary cannot be found via `Command::cargo_bin`.
pub fn chatrs_cmd() -> Command {
    Command::cargo_bin("chatrs").expect("Failed to find chatrs binary for testing")
}

/// `chatrs` running in `dir`, isolated from user configuration and the environment.
pub fn chatrs_in(dir: &Path) -> Command {
    let mut cmd = chatrs_cmd();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("CHATRS_STATE_FILE")
        .env_remove("RUST_LOG");
    cmd
}

/// Path of the state file used by tests in `dir`.
pub fn state_file(dir: &Path) -> PathBuf {
    dir.join("state.json")
}
