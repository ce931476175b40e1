//! # chatrs Chat Command
//!
//! File: cli/src/commands/chat/mod.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `chatrs chat`, the interactive shell, which is also what runs
//! when no command is given. Line handling lives in `shell.rs`; this module
//! only wires the shell to the terminal.
//!
//! ## Examples
//!
//! ```bash
//! chatrs
//! chatrs chat --state ~/chats/work.json
//! ```
//!
use crate::core::{config::Config, error::Result};
use clap::Parser;
use std::io;
use tracing::info;

pub mod shell;

/// Arguments for `chatrs chat`.
#[derive(Parser, Debug, Default)]
#[command(
    about = "Start an interactive conversation (default)",
    long_about = "Starts an interactive conversation. Type 'learn:question|response' to teach a reply,\n\
                  'summary' for statistics, 'save' to persist the conversation, 'quit' or 'exit' to leave.\n\
                  State is loaded at start and is only written by 'save'."
)]
pub struct ChatArgs {}

/// Runs the shell on the process's stdin/stdout until the user quits.
pub fn handle_chat(_args: ChatArgs, config: &Config) -> Result<()> {
    info!(
        "Starting chat as '{}' with state file {}",
        config.bot.name,
        config.state_path().display()
    );
    let mut responder = crate::bot::Responder::new(&config.bot.name)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    shell::run_shell(
        &mut responder,
        &config.state_path(),
        stdin.lock(),
        stdout.lock(),
    )
}
