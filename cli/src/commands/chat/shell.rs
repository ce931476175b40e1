//! # Interactive Shell
//!
//! File: cli/src/commands/chat/shell.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Reads one line per turn and routes it either to one of the shell
//! commands or to `Responder::respond`. Parsing produces an explicit
//! `ShellCommand`, so a malformed `learn:` line is just another variant
//! (`LearnUsage`) rather than an error.
//!
//! | Input                       | Effect                                              |
//! |-----------------------------|-----------------------------------------------------|
//! | `quit` / `exit`             | prints a goodbye reply and ends the session         |
//! | `summary`                   | prints conversation statistics                      |
//! | `save`                      | writes the state file                               |
//! | `learn:<trigger>\|<reply>`  | teaches a reply (split on the first `\|`)           |
//! | empty line                  | ignored                                             |
//! | anything else               | answered by the responder                           |
//!
//! End of input ends the session as well. Nothing is saved automatically.
//!
//! The loop is generic over `BufRead`/`Write` so tests can drive it with
//! in-memory buffers.
//!
use crate::bot::{LoadOutcome, Responder};
use crate::commands::summary::write_summary;
use crate::core::error::Result;
use rand::Rng;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::{debug, error};

const LEARN_PREFIX: &str = "learn:";

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Quit,
    Summary,
    Save,
    Learn { trigger: String, reply: String },
    /// A `learn:` line without a non-empty trigger and reply.
    LearnUsage,
    Skip,
    Say(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => return Self::Skip,
            "quit" | "exit" => return Self::Quit,
            "summary" => return Self::Summary,
            "save" => return Self::Save,
            _ => {}
        }
        match strip_prefix_ignore_ascii_case(trimmed, LEARN_PREFIX) {
            Some(rest) => Self::parse_learn(rest),
            None => Self::Say(trimmed.to_string()),
        }
    }

    fn parse_learn(rest: &str) -> Self {
        match rest.split_once('|') {
            Some((trigger, reply)) if !trigger.trim().is_empty() && !reply.trim().is_empty() => {
                Self::Learn {
                    trigger: trigger.trim().to_string(),
                    reply: reply.trim().to_string(),
                }
            }
            _ => Self::LearnUsage,
        }
    }
}

fn strip_prefix_ignore_ascii_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Runs a full session: banner, state load, then the read/respond loop.
///
/// # Errors
///
/// Fails if the state file exists but cannot be parsed, or if reading input
/// or writing output fails. A failed `save` is reported in the conversation
/// and the session continues.
pub fn run_shell<R, I, O>(
    responder: &mut Responder<R>,
    state_path: &Path,
    mut input: I,
    mut out: O,
) -> Result<()>
where
    R: Rng,
    I: BufRead,
    O: Write,
{
    let bot = responder.name().to_string();
    writeln!(
        out,
        "🤖 {bot}: Hello! I'm your AI chatbot. Type 'quit' or 'exit' to end our conversation."
    )?;
    writeln!(
        out,
        "💡 You can teach me new responses by typing 'learn:' followed by what I should respond to (learn:question|response)."
    )?;
    writeln!(out, "📊 Type 'summary' to see conversation statistics.")?;
    writeln!(out, "💾 Type 'save' to save our conversation.\n")?;

    match responder.load(state_path)? {
        LoadOutcome::Loaded => writeln!(out, "Conversation loaded from {}", state_path.display())?,
        LoadOutcome::NotFound => writeln!(
            out,
            "No saved conversation found at {}",
            state_path.display()
        )?,
    }

    loop {
        write!(out, "You: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "\n🤖 {bot}: Goodbye! Thanks for chatting!")?;
            break;
        }

        let command = ShellCommand::parse(&line);
        debug!("Shell command: {:?}", command);
        match command {
            ShellCommand::Quit => {
                let farewell = responder.respond("goodbye");
                writeln!(out, "🤖 {bot}: {farewell}")?;
                break;
            }
            ShellCommand::Summary => write_summary(&mut out, &responder.summary())?,
            ShellCommand::Save => match responder.save(state_path) {
                Ok(()) => writeln!(out, "Conversation saved to {}", state_path.display())?,
                Err(e) => {
                    error!("Saving to {} failed: {:?}", state_path.display(), e);
                    writeln!(out, "🤖 {bot}: I couldn't save our conversation: {e:#}")?;
                }
            },
            ShellCommand::Learn { trigger, reply } => {
                responder.learn(&trigger, &reply);
                writeln!(
                    out,
                    "🤖 {bot}: Got it! I learned that when you say '{trigger}', I should respond with '{reply}'"
                )?;
            }
            ShellCommand::LearnUsage => writeln!(
                out,
                "🤖 {bot}: To teach me, use format: learn:question|response"
            )?,
            ShellCommand::Skip => {}
            ShellCommand::Say(text) => {
                let reply = responder.respond(&text);
                writeln!(out, "🤖 {bot}: {reply}")?;
            }
        }
    }
    Ok(())
}
