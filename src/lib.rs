//! Recipes addressed by hostname.
//!
//! A request for `chocolate-cake-for8.undakam.com` is resolved to the
//! subdomain label `chocolate-cake-for8`, parsed into a dish request and
//! answered with a recipe from a generative-language provider.
//!
//! # Example
//! ```no_run
//! # use undakam::{generate_recipe_for_host, AppConfig};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
//! let config = AppConfig::load()?;
//! let recipe = generate_recipe_for_host("pasta-carbonara-for2.undakam.com", &config).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hostname;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod providers;
pub mod server;

pub use config::{AppConfig, ProviderConfig, ServerConfig};
pub use error::{RecipeError, ShapeError};
pub use hostname::{extract_subdomain, is_main_site, resolve_host};
pub use model::Recipe;
pub use parser::{parse_subdomain, ParsedRequest};
pub use pipeline::RecipePipeline;
pub use providers::{ProviderFactory, RecipeProvider};

/// One-shot convenience: resolve `host`, parse its label and generate a
/// recipe with the configured provider.
///
/// Returns `Ok(None)` when the host addresses the main site or names no dish.
pub async fn generate_recipe_for_host(
    host: &str,
    config: &AppConfig,
) -> Result<Option<(ParsedRequest, Recipe)>, RecipeError> {
    let subdomain = extract_subdomain(host);
    if is_main_site(subdomain) {
        return Ok(None);
    }

    let parsed = parse_subdomain(subdomain);
    if parsed.dish.is_empty() {
        return Ok(None);
    }

    let pipeline = RecipePipeline::new(ProviderFactory::create(&config.provider)?);
    let recipe = pipeline.generate_recipe(&parsed).await?;
    Ok(Some((parsed, recipe)))
}
