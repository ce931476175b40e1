//! # chatrs Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module aggregates the top-level commands of the chatrs CLI. Each
//! command defines its own Clap arguments struct and a `handle_*` function
//! that receives those arguments plus the already-loaded `Config`.
//!
//! ## Commands
//!
//! - `chat`: Interactive shell (the default when no command is given)
//! - `ask`: Answer a single message
//! - `learn`: Teach a reply and persist it
//! - `summary`: Show statistics about the saved conversation
//!
use crate::bot::{LoadOutcome, Responder};
use crate::core::{config::Config, error::Result};
use tracing::debug;

/// One-shot question answering. Loads state, replies once, optionally saves.
pub mod ask;
/// The interactive conversation shell.
pub mod chat;
/// Teach a trigger/reply pair and save it.
pub mod learn;
/// Print the conversation summary, as text or JSON.
pub mod summary;

/// Builds a responder from `config` and loads its state file, if there is one.
pub(crate) fn load_responder(config: &Config) -> Result<(Responder, LoadOutcome)> {
    let mut responder = Responder::new(&config.bot.name)?;
    let outcome = responder.load(&config.state_path())?;
    debug!("State file {}: {:?}", config.state_path().display(), outcome);
    Ok((responder, outcome))
}
