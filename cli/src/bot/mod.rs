//! # chatrs Responder (`bot`)
//!
//! File: cli/src/bot/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The conversational core. Everything here is synchronous and owned by a
//! single `Responder`; the command handlers in `commands::` only move text in
//! and out of it.
//!
//! - **`text`**: input normalization and name capitalization.
//! - **`category`**: the ordered pattern/reply table and first-match lookup.
//! - **`state`**: exchange log, session memory, learned table and their JSON form.
//! - **`responder`**: turn processing, learning, memory, summary, save/load.
//!

pub mod category;
pub mod responder;
pub mod state;
pub mod text;

pub use responder::{ConversationSummary, LoadOutcome, Responder, NAME_KEY};
pub use state::{ConversationState, Exchange};
