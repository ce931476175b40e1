//! # chatrs Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This file serves as the main entry point for the chatrs CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Loading configuration once and routing to the command handlers
//!
//! ## Examples
//!
//! ```bash
//! # Start chatting (same as `chatrs chat`)
//! chatrs
//!
//! # Use a different state file and show debug logs on stderr
//! chatrs -vv --state ./work_chat.json chat
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Load configuration (files + `--state` override)
//! 4. Route to the command handler and report any error
//!
use chatrs::commands;
use chatrs::core::config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "chatrs",
    about = "🦀 chatrs 💬: A rule-based chatbot that learns from you",
    long_about = "Chat with a rule-based bot that remembers your name, can be taught new replies,\n\
                  and keeps its conversation in a JSON state file.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Conversation state file (overrides configuration files).
    #[arg(long, global = true, env = "CHATRS_STATE_FILE", value_name = "PATH")]
    state: Option<PathBuf>,
}

/// Enum defining all available top-level commands.
#[derive(Subcommand, Debug)]
enum Commands {
    #[command(alias = "c")]
    Chat(commands::chat::ChatArgs),
    #[command(alias = "a")]
    Ask(commands::ask::AskArgs),
    #[command(alias = "l")]
    Learn(commands::learn::LearnArgs),
    #[command(alias = "s")]
    Summary(commands::summary::SummaryArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = config::load_config(cli.state.as_deref()).and_then(|cfg| {
        match cli
            .command
            .unwrap_or_else(|| Commands::Chat(commands::chat::ChatArgs::default()))
        {
            Commands::Chat(args) => commands::chat::handle_chat(args, &cfg),
            Commands::Ask(args) => commands::ask::handle_ask(args, &cfg),
            Commands::Learn(args) => commands::learn::handle_learn(args, &cfg),
            Commands::Summary(args) => commands::summary::handle_summary(args, &cfg),
        }
    });

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
