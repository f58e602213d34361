use serde::Serialize;

use crate::parser::ParsedRequest;

/// The instruction template sent to the provider.
///
/// The template is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
///
/// Contains `{{RECIPE_NAME}}` and `{{SERVINGS}}` placeholders that are
/// replaced by [`build_prompt`].
pub const RECIPE_PROMPT: &str = include_str!("prompt.txt");

/// Serving count used when the request does not name a usable one
pub const DEFAULT_SERVINGS: u32 = 4;

/// Sampling temperature for every generation
pub const TEMPERATURE: f64 = 0.3;

/// Upper bound on generated tokens for every generation
pub const MAX_OUTPUT_TOKENS: u32 = 800;

/// Generation settings sent along with the prompt
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        }
    }
}

/// A ready-to-send prompt
#[derive(Debug, Clone, PartialEq)]
pub struct RecipePrompt {
    pub recipe_name: String,
    pub servings: u32,
    pub text: String,
    pub generation_config: GenerationConfig,
}

/// Parse a requested serving count, falling back to [`DEFAULT_SERVINGS`]
/// when it is missing, not a number or not positive.
pub fn resolve_servings(servings: Option<&str>) -> u32 {
    servings
        .and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|&count| count > 0)
        .unwrap_or(DEFAULT_SERVINGS)
}

/// Style goes in front of the dish when there is one.
pub fn recipe_name(dish: &str, style: &str) -> String {
    if style.is_empty() {
        dish.to_string()
    } else {
        format!("{} {}", style, dish)
    }
}

/// Build the prompt for a parsed request. Difficulty is not part of it.
pub fn build_prompt(request: &ParsedRequest) -> RecipePrompt {
    let recipe_name = recipe_name(&request.dish, &request.style);
    let servings = resolve_servings(request.servings.as_deref());
    let text = RECIPE_PROMPT
        .replace("{{RECIPE_NAME}}", &recipe_name)
        .replace("{{SERVINGS}}", &servings.to_string());

    RecipePrompt {
        recipe_name,
        servings,
        text,
        generation_config: GenerationConfig::default(),
    }
}
