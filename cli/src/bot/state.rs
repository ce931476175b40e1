//! # Conversation State & Persistence
//!
//! File: cli/src/bot/state.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `ConversationState` is everything that survives between runs: the exchange
//! log, the session memory and the learned-response table. It is saved as a
//! single pretty-printed JSON document:
//!
//! ```json
//! {
//!   "conversation_history": [
//!     { "timestamp": "2024-05-01 09:30:00", "user": "hi", "bot_response": "Hey! Nice to meet you!" }
//!   ],
//!   "user_data": { "name": "Alice" },
//!   "learning_responses": { "ping": ["pong"] }
//! }
//! ```
//!
//! Missing top-level fields load as empty, so older or hand-written files work.
//!
use crate::common::fs::io;
use crate::core::error::{ChatError, Result};
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::info;

/// Wall-clock format used in the state file and in summaries.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged user input and the reply it received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    #[serde(with = "timestamp_format")]
    pub timestamp: NaiveDateTime,
    pub user: String,
    /// `None` only while the reply for this turn is being computed.
    pub bot_response: Option<String>,
}

impl Exchange {
    /// A pending exchange stamped with the current local time, to the second.
    pub fn now(user: &str) -> Self {
        Self::at(Local::now().naive_local().trunc_subsecs(0), user)
    }

    pub fn at(timestamp: NaiveDateTime, user: &str) -> Self {
        Self {
            timestamp,
            user: user.to_string(),
            bot_response: None,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// The unit of persistence: exchange log, session memory and learned table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationState {
    #[serde(rename = "conversation_history")]
    pub history: Vec<Exchange>,
    #[serde(rename = "user_data")]
    pub memory: BTreeMap<String, String>,
    #[serde(rename = "learning_responses")]
    pub learned: BTreeMap<String, Vec<String>>,
}

impl ConversationState {
    /// Reads a state file. `Ok(None)` means there is no file at `path`.
    ///
    /// # Errors
    ///
    /// `ChatError::MalformedState` when the file is not valid state JSON, or
    /// an I/O error with context if it cannot be read.
    pub fn read_from(path: &Path) -> Result<Option<Self>> {
        let Some(content) = io::read_file_if_exists(path)? else {
            return Ok(None);
        };
        let state = serde_json::from_str(&content).map_err(|source| ChatError::MalformedState {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(state))
    }

    /// Writes the state as pretty-printed JSON, replacing any existing file.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        io::write_string_to_file(path, &json)?;
        info!(
            "Saved {} exchanges and {} learned triggers to {}",
            self.history.len(),
            self.learned.len(),
            path.display()
        );
        Ok(())
    }
}

mod timestamp_format {
    use super::TIMESTAMP_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
