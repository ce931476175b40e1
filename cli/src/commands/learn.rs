//! # chatrs Learn Command
//!
//! File: cli/src/commands/learn.rs
//! Author: Christi Mahu
//!
//! Implements `chatrs learn <trigger> <reply>`, the non-interactive form of
//! the shell's `learn:trigger|reply`. The state file is loaded, the reply is
//! appended to the trigger's list and the state is saved again, since a
//! one-shot command has no later `save`.
//!
//! ```bash
//! chatrs learn "what's up" "Not much, you?"
//! ```
//!
use crate::commands::load_responder;
use crate::core::{
    config::Config,
    error::{ChatError, Result},
};
use anyhow::bail;
use clap::Parser;

/// Arguments for `chatrs learn`.
#[derive(Parser, Debug)]
#[command(about = "Teach a reply for a trigger phrase and save it")]
pub struct LearnArgs {
    /// Text that should trigger the reply (matched case-insensitively, trimmed).
    pub trigger: String,
    /// Reply to give for the trigger.
    pub reply: String,
}

pub fn handle_learn(args: LearnArgs, config: &Config) -> Result<()> {
    let trigger = args.trigger.trim();
    let reply = args.reply.trim();
    if trigger.is_empty() || reply.is_empty() {
        bail!(ChatError::Usage(
            "learn needs a non-empty trigger and reply".to_string()
        ));
    }

    let (mut responder, _) = load_responder(config)?;
    responder.learn(trigger, reply);
    let path = config.state_path();
    responder.save(&path)?;
    println!(
        "Got it! When you say '{trigger}', I'll respond with '{reply}'. (saved to {})",
        path.display()
    );
    Ok(())
}
