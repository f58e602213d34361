use log::{debug, info};

use crate::error::RecipeError;
use crate::model::Recipe;
use crate::parser::ParsedRequest;
use crate::providers::{build_prompt, RecipeProvider};

/// Prompt, provider call and decode for a single parsed request
pub struct RecipePipeline {
    provider: Box<dyn RecipeProvider>,
}

impl RecipePipeline {
    pub fn new(provider: Box<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Generate a recipe. Makes at most one provider call and never
    /// returns a partially filled recipe.
    pub async fn generate_recipe(&self, request: &ParsedRequest) -> Result<Recipe, RecipeError> {
        let prompt = build_prompt(request);
        info!(
            "Generating \"{}\" for {} with {}",
            prompt.recipe_name,
            prompt.servings,
            self.provider.provider_name()
        );

        let text = self.provider.generate(&prompt).await?;
        debug!("Generated text: {}", text);

        Recipe::decode(&text)
    }
}
