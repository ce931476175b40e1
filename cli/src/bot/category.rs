//! # Response Categories
//!
//! File: cli/src/bot/category.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! A category is a named group of regular expressions and candidate replies.
//! The built-in table is scanned in declared order and the first category
//! with a pattern that matches anywhere in the normalized input wins, so an
//! input such as "hello, i need help" resolves to `greeting` rather than
//! `help`.
//!
//! Patterns are plain substring searches (`hi` also matches "this"); that
//! looseness is part of the bot's behavior and is kept as is.
//!
use crate::core::error::{ChatError, Result};
use regex::{Regex, RegexBuilder};

pub const GREETING: &str = "greeting";
pub const GOODBYE: &str = "goodbye";
pub const HOW_ARE_YOU: &str = "how_are_you";
pub const NAME_QUESTION: &str = "name_question";
pub const AGE_QUESTION: &str = "age_question";
pub const HELP: &str = "help";
pub const THANKS: &str = "thanks";
pub const WEATHER: &str = "weather";

/// Categories whose replies get the user's name appended once it is known.
pub const PERSONALIZED: [&str; 2] = [GREETING, HOW_ARE_YOU];

/// A named group of match patterns and candidate replies. Immutable once built.
#[derive(Debug, Clone)]
pub struct Category {
    id: String,
    patterns: Vec<Regex>,
    replies: Vec<String>,
}

impl Category {
    /// Compiles `patterns` (case-insensitive) into a new category.
    ///
    /// # Errors
    ///
    /// `ChatError::InvalidPattern` if any pattern fails to compile.
    pub fn new<S: Into<String>>(id: &str, patterns: &[&str], replies: Vec<S>) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|source| ChatError::InvalidPattern {
                        category: id.to_string(),
                        pattern: pattern.to_string(),
                        source,
                    })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self {
            id: id.to_string(),
            patterns,
            replies: replies.into_iter().map(Into::into).collect(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// True when any pattern is found somewhere in `normalized`.
    pub fn matches(&self, normalized: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(normalized))
    }

    /// Whether replies from this category are personalized with the user's name.
    pub fn is_personalized(&self) -> bool {
        PERSONALIZED.contains(&self.id.as_str())
    }
}

/// Returns the first category in `categories` matching `normalized`.
pub fn find_match<'a>(categories: &'a [Category], normalized: &str) -> Option<&'a Category> {
    categories.iter().find(|category| category.matches(normalized))
}

/// The built-in category table, in priority order.
///
/// `bot_name` is substituted into the replies that introduce the bot.
pub fn default_categories(bot_name: &str) -> Result<Vec<Category>> {
    Ok(vec![
        Category::new(
            GREETING,
            &["hello", "hi", "hey", "good morning", "good afternoon"],
            vec![
                "Hello! How can I help you today?".to_string(),
                "Hi there! What's on your mind?".to_string(),
                "Hey! Nice to meet you!".to_string(),
                format!("Hello! I'm {bot_name}, ready to chat!"),
            ],
        )?,
        Category::new(
            GOODBYE,
            &["bye", "goodbye", "see you", "farewell"],
            vec![
                "Goodbye! Have a great day!",
                "See you later! Take care!",
                "Bye! It was nice talking with you!",
                "Farewell! Come back anytime!",
            ],
        )?,
        Category::new(
            HOW_ARE_YOU,
            &["how are you", "how do you feel", "are you okay"],
            vec![
                "I'm doing well, thank you for asking!",
                "I'm great! How about you?",
                "I'm functioning perfectly! How are you?",
                "All systems running smoothly! What about you?",
            ],
        )?,
        Category::new(
            NAME_QUESTION,
            &["what is your name", "who are you", "your name"],
            vec![
                format!("I'm {bot_name}, your AI assistant!"),
                format!("My name is {bot_name}. What's yours?"),
                format!("I go by {bot_name}. Nice to meet you!"),
            ],
        )?,
        Category::new(
            AGE_QUESTION,
            &["how old are you", "your age", "age"],
            vec![
                "I was just created, so I'm brand new!",
                "Age is just a number for an AI like me!",
                "I exist in the eternal now of computing!",
            ],
        )?,
        Category::new(
            HELP,
            &["help", "what can you do", "commands"],
            vec![
                "I can chat with you, remember our conversation, learn from you, and answer questions!",
                "Try asking me about myself, tell me about you, or just have a normal conversation!",
                "I'm here to chat! Ask me anything or tell me about your day!",
            ],
        )?,
        Category::new(
            THANKS,
            &["thank you", "thanks", "thx"],
            vec![
                "You're welcome! Happy to help!",
                "No problem at all!",
                "Glad I could help!",
                "Anytime! That's what I'm here for!",
            ],
        )?,
        Category::new(
            WEATHER,
            &["weather", "temperature", "sunny", "rain"],
            vec![
                "I wish I could check the weather for you! Try looking outside or checking a weather app.",
                "I don't have access to current weather data, but I hope it's nice where you are!",
                "Weather is always interesting to talk about! What's it like outside?",
            ],
        )?,
    ])
}
