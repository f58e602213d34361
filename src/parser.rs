//! Subdomain label parsing.
//!
//! A label such as `pasta-carbonara-for2-easy` encodes a dish request: the
//! first two plain tokens name the dish, any further plain tokens describe a
//! style, `forN` sets the serving count and a difficulty word is kept as
//! metadata.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Words recognised as a difficulty modifier
pub const DIFFICULTY_WORDS: [&str; 5] = ["easy", "medium", "hard", "simple", "quick"];

/// Number of plain tokens that make up the dish name
const DISH_TOKENS: usize = 2;

/// A dish request decoded from a subdomain label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedRequest {
    pub dish: String,
    pub style: String,
    pub servings: Option<String>,
    pub difficulty: Option<String>,
    pub raw: String,
}

fn servings_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^for(\d+)$").expect("valid regex"))
}

/// Digits of a `forN` token, if the token is serving syntax
fn servings_of(token: &str) -> Option<&str> {
    servings_re()
        .captures(token)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn is_difficulty(token: &str) -> bool {
    DIFFICULTY_WORDS.contains(&token)
}

/// Modifiers are excluded from the dish and style names
pub fn is_modifier(token: &str) -> bool {
    is_difficulty(token) || servings_of(token).is_some()
}

/// Parse a subdomain label into a [`ParsedRequest`].
///
/// Never fails: a label without plain tokens simply yields an empty dish.
pub fn parse_subdomain(label: &str) -> ParsedRequest {
    let tokens: Vec<&str> = label.split('-').filter(|t| !t.is_empty()).collect();

    let servings = tokens.iter().find_map(|t| servings_of(t)).map(str::to_string);
    let difficulty = tokens
        .iter()
        .find(|t| is_difficulty(t))
        .map(|t| t.to_string());

    let plain: Vec<&str> = tokens.iter().copied().filter(|t| !is_modifier(t)).collect();
    let split = plain.len().min(DISH_TOKENS);
    let (dish, style) = plain.split_at(split);

    ParsedRequest {
        dish: dish.join(" "),
        style: style.join(" "),
        servings,
        difficulty,
        raw: label.to_string(),
    }
}
