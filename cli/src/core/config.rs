//! # chatrs Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module loads, merges and validates the chatrs configuration. Only two
//! settings exist today: the bot's display name and the location of the
//! conversation state file.
//!
//! Configuration sources (in order of precedence):
//! 1. `--state <PATH>` on the command line (or `CHATRS_STATE_FILE`)
//! 2. Project-specific `.chatrs.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/chatrs/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [bot]
//! name = "Rusty"
//!
//! [storage]
//! state_file = "~/chats/chatbot_conversation.json"
//! ```
//!
//! ```rust,ignore
//! let cfg = config::load_config(None)?;
//! let mut responder = Responder::new(&cfg.bot.name)?;
//! responder.load(&cfg.state_path())?;
//! ```
//!
use crate::core::error::{ChatError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info, warn};

/// Default location of the conversation state file, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "chatbot_conversation.json";

const PROJECT_CONFIG_FILENAME: &str = ".chatrs.toml";

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub bot: BotConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Settings describing the bot itself.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BotConfig {
    /// Name the bot introduces itself with.
    #[serde(default = "default_bot_name")]
    pub name: String,
}

/// Where the conversation state is persisted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the JSON state file (can use ~). Will be expanded.
    #[serde(default = "default_state_file")]
    pub state_file: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: default_bot_name(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
        }
    }
}

impl Config {
    /// The state file location as a path.
    pub fn state_path(&self) -> PathBuf {
        PathBuf::from(&self.storage.state_file)
    }
}

fn default_bot_name() -> String {
    "Rusty".to_string()
}
fn default_state_file() -> String {
    DEFAULT_STATE_FILE.to_string()
}

/// Loads the effective configuration.
///
/// `state_override` comes from the `--state` flag and wins over every file.
pub fn load_config(state_override: Option<&Path>) -> Result<Config> {
    let user_config = load_user_config()?;
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let project_config = load_project_config(&current_dir)?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    if let Some(path) = state_override {
        debug!("State file overridden on the command line: {}", path.display());
        merged_config.storage.state_file = path.to_string_lossy().into_owned();
    }
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "chatrs", "chatrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config(start: &Path) -> Result<Option<Config>> {
    if let Some(project_config_path) = find_project_config_path(start) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.chatrs.toml) found.");
        Ok(None)
    }
}

/// Walks from `start` towards the filesystem root looking for `.chatrs.toml`.
/// The search stops at the first directory containing `.git`.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Project values win wherever they differ from the built-in defaults.
fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let Some(project_cfg) = project else {
        return user;
    };
    let mut merged = Config::default();
    merged.bot.name = if project_cfg.bot.name != default_bot_name() {
        project_cfg.bot.name
    } else {
        user.bot.name
    };
    merged.storage.state_file = if project_cfg.storage.state_file != default_state_file() {
        project_cfg.storage.state_file
    } else {
        user.storage.state_file
    };
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.storage.state_file = shellexpand::tilde(&config.storage.state_file).into_owned();
    debug!("Expanded state file path: {}", config.storage.state_file);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.bot.name.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "bot.name must not be empty.".to_string()
        )));
    }
    if config.storage.state_file.trim().is_empty() {
        return Err(anyhow!(ChatError::Config(
            "storage.state_file must not be empty.".to_string()
        )));
    }
    let state_path = config.state_path();
    if state_path.is_dir() {
        return Err(anyhow!(ChatError::Config(format!(
            "Configured state file '{}' is a directory.",
            state_path.display()
        ))));
    }
    Ok(())
}
