mod factory;
mod google;
mod placeholder;
pub mod prompt;

pub use factory::ProviderFactory;
pub use google::GoogleProvider;
pub use placeholder::PlaceholderProvider;
pub use prompt::{build_prompt, GenerationConfig, RecipePrompt};

use async_trait::async_trait;

use crate::error::RecipeError;

/// Unified trait for everything that can turn a prompt into recipe text
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "google", "placeholder")
    fn provider_name(&self) -> &str;

    /// Generate the raw text for a prompt. The text is expected to be a
    /// JSON recipe document but is not validated here.
    async fn generate(&self, prompt: &RecipePrompt) -> Result<String, RecipeError>;
}
