//! # Responder
//!
//! File: cli/src/bot/responder.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The `Responder` turns one line of user text into one reply and keeps the
//! conversation state that goes with it. Each turn runs these checks in
//! order and stops at the first that produces a reply:
//!
//! 1. Empty or whitespace-only input gets a fixed prompt and is not logged.
//! 2. Name extraction (`my name is …`, `i'm …`, `i am …`, `call me …`)
//!    stores the capitalized name and acknowledges it.
//! 3. The learned-response table, keyed by normalized input.
//! 4. The category table, first match in declared order. Greeting and
//!    how-are-you replies are personalized once the user's name is known.
//! 5. A fallback reply.
//!
//! Every logged exchange has its reply filled in before `respond` returns.
//!
//! All random choices go through the `R: Rng` the responder was built with,
//! so tests can pass a seeded `StdRng`.
//!
//! ## Examples
//!
//! ```rust
//! use chatrs::bot::Responder;
//!
//! # fn main() -> anyhow::Result<()> {
//! let mut bot = Responder::new("Rusty")?;
//! bot.learn("ping", "pong");
//! assert_eq!(bot.respond("  PING "), "pong");
//!
//! let ack = bot.respond("call me alice");
//! assert!(ack.contains("Alice"));
//! assert_eq!(bot.recall("name"), Some("Alice"));
//! # Ok(())
//! # }
//! ```
//!
use crate::bot::category::{self, Category};
use crate::bot::state::{ConversationState, Exchange};
use crate::bot::text::{capitalize, normalize};
use crate::core::error::{ChatError, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use regex::Regex;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// Session memory key holding the user's name.
pub const NAME_KEY: &str = "name";

/// Reply for empty or whitespace-only input.
pub const EMPTY_INPUT_REPLY: &str = "I didn't catch that. Could you say something?";

/// Tried in this order against the lowercased input.
const NAME_PATTERNS: [&str; 4] = [
    r"my name is (\w+)",
    r"i'm (\w+)",
    r"i am (\w+)",
    r"call me (\w+)",
];

const FALLBACK_REPLIES: [&str; 5] = [
    "That's interesting! Tell me more about that.",
    "I'm not sure I understand completely. Can you elaborate?",
    "Hmm, that's something new for me. What do you think about it?",
    "I'd love to learn more about what you just said!",
    "That's a unique perspective! Can you explain further?",
];

/// Read-only snapshot of the conversation, as shown by the `summary` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationSummary {
    /// Every logged exchange, answered or not.
    pub total_exchanges: usize,
    pub user_name: Option<String>,
    /// Number of distinct learned triggers.
    pub learned_responses: usize,
    /// Timestamp of the first logged exchange.
    pub conversation_start: Option<String>,
}

/// Result of [`Responder::load`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// State was replaced with the file's contents.
    Loaded,
    /// No file at the path; the current state was left untouched.
    NotFound,
}

/// Every reply the fallback step can produce for `input`.
pub fn fallback_candidates(input: &str) -> Vec<String> {
    FALLBACK_REPLIES
        .iter()
        .map(|reply| reply.to_string())
        .chain(std::iter::once(quoted_fallback(input)))
        .collect()
}

fn quoted_fallback(input: &str) -> String {
    format!("You mentioned '{input}' - that sounds intriguing!")
}

/// Rule-based conversational responder owning its conversation state.
pub struct Responder<R = StdRng> {
    name: String,
    categories: Vec<Category>,
    name_patterns: Vec<Regex>,
    state: ConversationState,
    rng: R,
}

impl Responder<StdRng> {
    /// Creates a responder with the built-in categories and an entropy-seeded RNG.
    pub fn new(bot_name: &str) -> Result<Self> {
        Self::with_rng(bot_name, StdRng::from_entropy())
    }
}

impl<R: Rng> Responder<R> {
    /// Creates a responder drawing every random choice from `rng`.
    pub fn with_rng(bot_name: &str, rng: R) -> Result<Self> {
        let categories = category::default_categories(bot_name)?;
        Self::with_categories(bot_name, categories, rng)
    }

    /// Creates a responder over a custom category table, scanned in the given order.
    pub fn with_categories(bot_name: &str, categories: Vec<Category>, rng: R) -> Result<Self> {
        let name_patterns = NAME_PATTERNS
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ChatError::InvalidPattern {
                    category: "name_extraction".to_string(),
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            name: bot_name.to_string(),
            categories,
            name_patterns,
            state: ConversationState::default(),
            rng,
        })
    }

    /// The bot's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    /// Produces the reply to one line of user input and logs the exchange.
    pub fn respond(&mut self, input: &str) -> String {
        if input.trim().is_empty() {
            return EMPTY_INPUT_REPLY.to_string();
        }

        self.state.history.push(Exchange::now(input));
        let reply = self.compute_reply(input);
        if let Some(pending) = self.state.history.last_mut() {
            pending.bot_response = Some(reply.clone());
        }
        reply
    }

    fn compute_reply(&mut self, input: &str) -> String {
        if let Some(ack) = self.extract_user_name(input) {
            return ack;
        }
        if let Some(learned) = self.learned_response(input) {
            return learned;
        }
        match self.category_response(input) {
            Some(reply) => reply,
            None => self.fallback_response(input),
        }
    }

    fn extract_user_name(&mut self, input: &str) -> Option<String> {
        let lowered = input.to_lowercase();
        let name = self
            .name_patterns
            .iter()
            .find_map(|re| re.captures(&lowered))
            .and_then(|caps| caps.get(1))
            .map(|word| capitalize(word.as_str()))?;
        debug!("Extracted user name '{}'", name);
        self.remember(NAME_KEY, &name);
        Some(format!("Nice to meet you, {name}! I'll remember your name."))
    }

    fn learned_response(&mut self, input: &str) -> Option<String> {
        let key = normalize(input);
        let reply = self.state.learned.get(&key)?.choose(&mut self.rng)?.clone();
        debug!("Answering '{}' from the learned table", key);
        Some(reply)
    }

    fn category_response(&mut self, input: &str) -> Option<String> {
        let normalized = normalize(input);
        let category = category::find_match(&self.categories, &normalized)?;
        let reply = category.replies().choose(&mut self.rng)?;
        debug!("Matched category '{}'", category.id());

        match self.state.memory.get(NAME_KEY) {
            Some(user) if category.is_personalized() => {
                // Everything after the first '!' is dropped.
                let head = reply.split_once('!').map_or(reply.as_str(), |(head, _)| head);
                Some(format!("{head}, {user}!"))
            }
            _ => Some(reply.clone()),
        }
    }

    fn fallback_response(&mut self, input: &str) -> String {
        debug!("No learned reply or category for input, using fallback");
        let pick = self.rng.gen_range(0..=FALLBACK_REPLIES.len());
        match FALLBACK_REPLIES.get(pick) {
            Some(reply) => reply.to_string(),
            None => quoted_fallback(input),
        }
    }

    /// Teaches a reply for `trigger`. Replies accumulate; duplicates are kept.
    pub fn learn(&mut self, trigger: &str, reply: &str) {
        let key = normalize(trigger);
        debug!("Learning reply for '{}'", key);
        self.state
            .learned
            .entry(key)
            .or_default()
            .push(reply.to_string());
    }

    /// Stores a session memory value, replacing any previous one.
    pub fn remember(&mut self, key: &str, value: &str) {
        self.state.memory.insert(key.to_string(), value.to_string());
    }

    pub fn recall(&self, key: &str) -> Option<&str> {
        self.state.memory.get(key).map(String::as_str)
    }

    pub fn summary(&self) -> ConversationSummary {
        ConversationSummary {
            total_exchanges: self.state.history.len(),
            user_name: self.recall(NAME_KEY).map(str::to_string),
            learned_responses: self.state.learned.len(),
            conversation_start: self
                .state
                .history
                .first()
                .map(Exchange::formatted_timestamp),
        }
    }

    /// Writes the conversation state to `path`, overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.state.write_to(path)
    }

    /// Replaces the conversation state with the contents of `path`.
    ///
    /// A missing file is not an error: the state is left as is and
    /// `LoadOutcome::NotFound` is returned.
    ///
    /// # Errors
    ///
    /// `ChatError::MalformedState` if the file exists but is not valid state JSON.
    pub fn load(&mut self, path: &Path) -> Result<LoadOutcome> {
        match ConversationState::read_from(path)? {
            Some(state) => {
                info!(
                    "Loaded {} exchanges from {}",
                    state.history.len(),
                    path.display()
                );
                self.state = state;
                Ok(LoadOutcome::Loaded)
            }
            None => {
                info!("No saved conversation at {}", path.display());
                Ok(LoadOutcome::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::category::{default_categories, find_match};
    use tempfile::tempdir;

    fn bot() -> Responder<StdRng> {
        Responder::with_rng("Rusty", StdRng::seed_from_u64(7)).expect("responder builds")
    }

    fn replies_of(id: &str) -> Vec<String> {
        default_categories("Rusty")
            .unwrap()
            .into_iter()
            .find(|c| c.id() == id)
            .map(|c| c.replies().to_vec())
            .unwrap()
    }

    #[test]
    fn empty_input_prompts_without_logging() {
        let mut bot = bot();
        assert_eq!(bot.respond(""), EMPTY_INPUT_REPLY);
        assert_eq!(bot.respond("   \t"), EMPTY_INPUT_REPLY);
        assert!(bot.state().history.is_empty());
    }

    #[test]
    fn extracts_and_capitalizes_name() {
        let mut bot = bot();
        let reply = bot.respond("My name is aLiCe");
        assert_eq!(reply, "Nice to meet you, Alice! I'll remember your name.");
        assert_eq!(bot.recall(NAME_KEY), Some("Alice"));
    }

    #[test]
    fn name_patterns_in_priority_order() {
        let mut bot = bot();
        bot.respond("call me dave, my name is eve");
        assert_eq!(bot.recall(NAME_KEY), Some("Eve"));

        bot.respond("I am Frank");
        assert_eq!(bot.recall(NAME_KEY), Some("Frank"));

        bot.respond("hi, i'm gus");
        assert_eq!(bot.recall(NAME_KEY), Some("Gus"));
    }

    #[test]
    fn name_extraction_beats_learned_replies() {
        let mut bot = bot();
        bot.learn("call me zed", "learned");
        assert!(bot.respond("call me zed").contains("Zed"));
    }

    #[test]
    fn learned_reply_ignores_case_and_whitespace() {
        let mut bot = bot();
        bot.learn("What's Up", "Not much");
        assert_eq!(bot.respond("  WHAT'S UP  "), "Not much");
        assert_eq!(bot.respond("what's up"), "Not much");
    }

    #[test]
    fn learned_replies_accumulate() {
        let mut bot = bot();
        bot.learn("ping", "pong");
        bot.learn("PING ", "pong!");
        bot.learn("ping", "pong");
        assert_eq!(bot.state().learned["ping"], vec!["pong", "pong!", "pong"]);
        assert_eq!(bot.summary().learned_responses, 1);

        for _ in 0..20 {
            let reply = bot.respond("ping");
            assert!(reply == "pong" || reply == "pong!");
        }
    }

    #[test]
    fn learned_reply_overrides_category() {
        let mut bot = bot();
        bot.learn("hello", "Ahoy!");
        assert_eq!(bot.respond("Hello"), "Ahoy!");
        // Only the exact normalized key is overridden.
        assert!(replies_of(category::GREETING).contains(&bot.respond("hello there")));
    }

    #[test]
    fn category_reply_comes_from_matching_category() {
        let mut bot = bot();
        assert!(replies_of(category::GOODBYE).contains(&bot.respond("Goodbye")));
        assert!(replies_of(category::WEATHER).contains(&bot.respond("is it sunny?")));
        assert!(replies_of(category::NAME_QUESTION).contains(&bot.respond("Who are you?")));
    }

    #[test]
    fn earlier_category_wins() {
        let mut bot = bot();
        for _ in 0..10 {
            assert!(replies_of(category::GREETING).contains(&bot.respond("hello, i need help")));
        }
    }

    #[test]
    fn greeting_is_personalized_once_name_known() {
        let mut bot = bot();
        bot.respond("My name is Alice");
        for _ in 0..20 {
            let reply = bot.respond("hello");
            assert!(reply.ends_with(", Alice!"), "unexpected reply: {reply}");
            assert_eq!(reply.matches('!').count(), 1);
        }
    }

    #[test]
    fn how_are_you_is_personalized_by_truncation() {
        let mut bot = bot();
        bot.remember(NAME_KEY, "Bo");
        let expected: Vec<String> = replies_of(category::HOW_ARE_YOU)
            .iter()
            .map(|r| format!("{}, Bo!", r.split('!').next().unwrap()))
            .collect();
        for _ in 0..10 {
            assert!(expected.contains(&bot.respond("how are you")));
        }
    }

    #[test]
    fn other_categories_are_not_personalized() {
        let mut bot = bot();
        bot.remember(NAME_KEY, "Bo");
        assert!(replies_of(category::THANKS).contains(&bot.respond("thanks")));
    }

    #[test]
    fn fallback_for_unmatched_input() {
        let mut bot = bot();
        let input = "Quantum entanglement";
        assert!(find_match(&default_categories("Rusty").unwrap(), &normalize(input)).is_none());
        for _ in 0..20 {
            let reply = bot.respond(input);
            assert!(fallback_candidates(input).contains(&reply));
        }
    }

    #[test]
    fn quoted_fallback_uses_raw_input() {
        let candidates = fallback_candidates("  Zebras? ");
        assert_eq!(
            candidates.last().map(String::as_str),
            Some("You mentioned '  Zebras? ' - that sounds intriguing!")
        );
        assert_eq!(candidates.len(), FALLBACK_REPLIES.len() + 1);
    }

    #[test]
    fn odd_input_never_panics() {
        let mut bot = bot();
        let long = "long ".repeat(5_000);
        for input in ["こんにちは 🌸", "!!!???", "my name is", "(((", long.as_str()] {
            assert!(!bot.respond(input).is_empty());
        }
    }

    #[test]
    fn every_exchange_is_completed() {
        let mut bot = bot();
        for input in ["hi", "my name is Ann", "zzz", "weather?"] {
            let reply = bot.respond(input);
            let last = bot.state().history.last().unwrap();
            assert_eq!(last.user, input);
            assert_eq!(last.bot_response.as_deref(), Some(reply.as_str()));
        }
        assert_eq!(bot.state().history.len(), 4);
    }

    #[test]
    fn remember_last_write_wins() {
        let mut bot = bot();
        assert_eq!(bot.recall("color"), None);
        bot.remember("color", "red");
        bot.remember("color", "blue");
        assert_eq!(bot.recall("color"), Some("blue"));
    }

    #[test]
    fn summary_of_fresh_and_used_bot() {
        let mut bot = bot();
        assert_eq!(
            bot.summary(),
            ConversationSummary {
                total_exchanges: 0,
                user_name: None,
                learned_responses: 0,
                conversation_start: None,
            }
        );

        bot.respond("I'm Cleo");
        bot.respond("hello");
        bot.learn("a", "b");
        bot.learn("c", "d");

        let summary = bot.summary();
        assert_eq!(summary.total_exchanges, 2);
        assert_eq!(summary.user_name.as_deref(), Some("Cleo"));
        assert_eq!(summary.learned_responses, 2);
        assert_eq!(
            summary.conversation_start,
            Some(bot.state().history[0].formatted_timestamp())
        );
    }

    #[test]
    fn save_and_load_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("chat.json");

        let mut original = bot();
        original.respond("My name is Alice");
        original.respond("hello");
        original.learn("ping", "pong");
        original.save(&path)?;

        let mut restored = bot();
        assert_eq!(restored.load(&path)?, LoadOutcome::Loaded);
        assert_eq!(restored.state(), original.state());
        assert_eq!(restored.respond("PING"), "pong");
        Ok(())
    }

    #[test]
    fn load_replaces_existing_state() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("chat.json");
        std::fs::write(&path, r#"{ "user_data": { "name": "Dora" } }"#)?;

        let mut bot = bot();
        bot.respond("hello");
        bot.learn("x", "y");
        bot.load(&path)?;

        assert!(bot.state().history.is_empty());
        assert!(bot.state().learned.is_empty());
        assert_eq!(bot.recall(NAME_KEY), Some("Dora"));
        Ok(())
    }

    #[test]
    fn load_missing_file_keeps_state() -> Result<()> {
        let dir = tempdir()?;
        let mut bot = bot();
        bot.learn("x", "y");

        let outcome = bot.load(&dir.path().join("nope.json"))?;
        assert_eq!(outcome, LoadOutcome::NotFound);
        assert_eq!(bot.state().learned.len(), 1);
        Ok(())
    }

    #[test]
    fn load_malformed_file_fails_and_keeps_state() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "[1, 2")?;

        let mut bot = bot();
        bot.learn("x", "y");
        assert!(bot.load(&path).is_err());
        assert_eq!(bot.state().learned.len(), 1);
        Ok(())
    }

    #[test]
    fn custom_categories_are_used() -> Result<()> {
        let table = vec![Category::new("cheese", &[r"\bbrie\b"], vec!["Creamy!"])?];
        let mut bot = Responder::with_categories("Rusty", table, StdRng::seed_from_u64(1))?;
        assert_eq!(bot.respond("Do you like BRIE?"), "Creamy!");
        Ok(())
    }
}
