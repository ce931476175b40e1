//! # chatrs Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: Christi Mahu
//!
//! Implements `chatrs ask <message...>`: loads the saved conversation,
//! answers one message on stdout and exits. The exchange is only persisted
//! with `--save`.
//!
//! ```bash
//! chatrs ask how are you
//! chatrs ask --save my name is Alice
//! ```
//!
use crate::commands::load_responder;
use crate::core::{config::Config, error::Result};
use clap::Parser;
use tracing::info;

/// Arguments for `chatrs ask`.
#[derive(Parser, Debug)]
#[command(about = "Answer a single message and exit")]
pub struct AskArgs {
    /// The message; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,

    /// Save the conversation (including this exchange) afterwards.
    #[arg(long)]
    pub save: bool,
}

pub fn handle_ask(args: AskArgs, config: &Config) -> Result<()> {
    let (mut responder, _) = load_responder(config)?;
    let message = args.message.join(" ");
    let reply = responder.respond(&message);
    println!("{reply}");

    if args.save {
        let path = config.state_path();
        responder.save(&path)?;
        info!("Conversation saved to {}", path.display());
    }
    Ok(())
}
