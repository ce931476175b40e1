//! # chatrs Library
//!
//! File: cli/src/lib.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A small rule-based conversational responder. It answers free text using an
//! ordered table of regex categories, a table of replies taught by the user,
//! and a little session memory (the user's name), and persists all of it as
//! one JSON file.
//!
//! The library is split the same way as the binary uses it:
//! - `bot`: the `Responder` and its state
//! - `core`: configuration and error types
//! - `common`: shared filesystem helpers
//! - `commands`: the CLI command handlers (used by `main.rs`)
//!
pub mod bot;
pub mod commands;
pub mod common;
pub mod core;
