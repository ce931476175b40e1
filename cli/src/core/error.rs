//! # chatrs Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module defines the error types used throughout chatrs. It follows the
//! same two-layer approach everywhere:
//! - `ChatError`: a `thiserror` enum for failures that callers may want to match on
//! - `Result<T>`: an alias for `anyhow::Result<T>` so I/O failures can carry context
//!
//! Not every failure mode is an error. Empty input is answered with a prompt,
//! a missing state file is reported as `LoadOutcome::NotFound`, and a malformed
//! `learn:` line in the shell becomes a usage hint. Only the cases below
//! propagate.
//!
//! ## Examples
//!
//! ```rust,ignore
//! // Wrap a parse failure with the offending path
//! let state: ConversationState = serde_json::from_str(&content)
//!     .map_err(|source| ChatError::MalformedState { path: path.to_path_buf(), source })?;
//!
//! // Branch on a specific kind
//! match responder.load(path) {
//!     Err(e) if e.downcast_ref::<ChatError>().is_some() => { /* ... */ }
//!     other => { /* ... */ }
//! }
//! ```
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the chatrs application.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("State file '{path}' is not valid conversation JSON: {source}")]
    MalformedState {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid pattern '{pattern}' in category '{category}': {source}")]
    InvalidPattern {
        category: String,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Usage error: {0}")]
    Usage(String),
}

/// Type alias for Result using anyhow::Error.
pub type Result<T> = anyhow::Result<T>;
