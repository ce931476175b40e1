//! # Input Text Helpers
//!
//! File: cli/src/bot/text.rs
//! Author: Christi Mahu
//!
//! Normalization used for every learned-table key and category match, plus
//! the capitalization applied to extracted user names.
//!

/// Lowercases and trims leading/trailing whitespace.
///
/// Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(input: &str) -> String {
    input.to_lowercase().trim().to_string()
}

/// Uppercases the first character and lowercases the rest (`"aLICE"` -> `"Alice"`).
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
