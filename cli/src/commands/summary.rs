//! # chatrs Summary Command
//!
//! File: cli/src/commands/summary.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Implements `chatrs summary`, which loads the saved conversation and prints
//! its statistics. The same text layout is used by the shell's `summary`
//! command:
//!
//! ```text
//! 📊 Conversation Summary:
//!    - Total exchanges: 12
//!    - Your name: Alice
//!    - Learned responses: 3
//!    - Started: 2024-05-01 09:30:00
//! ```
//!
//! With `--json` the `ConversationSummary` is printed as JSON instead, with
//! absent values as `null`.
//!
use crate::bot::ConversationSummary;
use crate::commands::load_responder;
use crate::core::{config::Config, error::Result};
use clap::Parser;
use std::io::{self, Write};

/// Arguments for `chatrs summary`.
#[derive(Parser, Debug, Default)]
#[command(about = "Show statistics about the saved conversation")]
pub struct SummaryArgs {
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

pub fn handle_summary(args: SummaryArgs, config: &Config) -> Result<()> {
    let (responder, _) = load_responder(config)?;
    let summary = responder.summary();
    let mut out = io::stdout().lock();
    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&summary)?)?;
    } else {
        write_summary(&mut out, &summary)?;
    }
    Ok(())
}

/// Writes the human-readable summary block.
pub(crate) fn write_summary<W: Write>(out: &mut W, summary: &ConversationSummary) -> Result<()> {
    writeln!(out, "📊 Conversation Summary:")?;
    writeln!(out, "   - Total exchanges: {}", summary.total_exchanges)?;
    writeln!(
        out,
        "   - Your name: {}",
        summary.user_name.as_deref().unwrap_or("Not provided")
    )?;
    writeln!(out, "   - Learned responses: {}", summary.learned_responses)?;
    writeln!(
        out,
        "   - Started: {}",
        summary.conversation_start.as_deref().unwrap_or("Just now")
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_summary_uses_placeholders() {
        let summary = ConversationSummary {
            total_exchanges: 0,
            user_name: None,
            learned_responses: 0,
            conversation_start: None,
        };
        let mut out = Vec::new();
        write_summary(&mut out, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Total exchanges: 0"));
        assert!(text.contains("Your name: Not provided"));
        assert!(text.contains("Started: Just now"));
    }

    #[test]
    fn json_shape() {
        let summary = ConversationSummary {
            total_exchanges: 4,
            user_name: Some("Alice".into()),
            learned_responses: 2,
            conversation_start: Some("2024-05-01 09:30:00".into()),
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["total_exchanges"], 4);
        assert_eq!(value["user_name"], "Alice");
        assert_eq!(value["learned_responses"], 2);
        assert_eq!(value["conversation_start"], "2024-05-01 09:30:00");
    }
}
