use crate::error::RecipeError;
use crate::providers::{RecipePrompt, RecipeProvider};
use async_trait::async_trait;
use log::debug;
use serde_json::json;

/// Offline provider that answers every prompt with a stock recipe.
///
/// Useful for local development without an API key. The output goes
/// through the same decoder as real provider output.
#[derive(Debug, Default)]
pub struct PlaceholderProvider;

impl PlaceholderProvider {
    pub fn new() -> Self {
        PlaceholderProvider
    }
}

#[async_trait]
impl RecipeProvider for PlaceholderProvider {
    fn provider_name(&self) -> &str {
        "placeholder"
    }

    async fn generate(&self, prompt: &RecipePrompt) -> Result<String, RecipeError> {
        debug!("Placeholder recipe for {}", prompt.recipe_name);

        let recipe = json!({
            "name": prompt.recipe_name,
            "servings": prompt.servings,
            "cookTime": 30,
            "ingredients": [
                format!("Ingredients for {} servings of {}", prompt.servings, prompt.recipe_name),
                "Salt and pepper to taste",
            ],
            "steps": [
                "Prepare all ingredients",
                format!("Cook the {} until done", prompt.recipe_name),
                "Serve warm",
            ],
        });

        Ok(recipe.to_string())
    }
}
