use serde::{Deserialize, Serialize};

use crate::error::RecipeError;

/// A generated recipe, as returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub name: String,
    pub servings: u32,
    /// Minutes
    pub cook_time: u32,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

impl Recipe {
    /// Strictly decode generated text into a recipe.
    ///
    /// Every field is required. Malformed JSON or mismatched types give
    /// [`RecipeError::RecipeDecode`]; a zero serving count gives
    /// [`RecipeError::InvalidRecipe`].
    pub fn decode(text: &str) -> Result<Self, RecipeError> {
        let recipe: Recipe = serde_json::from_str(text.trim()).map_err(RecipeError::RecipeDecode)?;
        if recipe.servings == 0 {
            return Err(RecipeError::InvalidRecipe(
                "servings must be a positive number".to_string(),
            ));
        }
        Ok(recipe)
    }
}
