use crate::config::ProviderConfig;
use crate::error::RecipeError;
use crate::providers::{GoogleProvider, PlaceholderProvider, RecipeProvider};

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the provider named in configuration
    pub fn create(config: &ProviderConfig) -> Result<Box<dyn RecipeProvider>, RecipeError> {
        match config.name.as_str() {
            "google" => Ok(Box::new(GoogleProvider::new(config)?)),
            "placeholder" => Ok(Box::new(PlaceholderProvider::new())),
            other => Err(RecipeError::UnknownProvider(other.to_string())),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["google", "placeholder"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider_config(name: &str) -> ProviderConfig {
        ProviderConfig {
            name: name.to_string(),
            api_key: Some("test-key".to_string()),
            ..ProviderConfig::default()
        }
    }

    #[test]
    fn test_create_google_provider() {
        let provider = ProviderFactory::create(&create_test_provider_config("google")).unwrap();
        assert_eq!(provider.provider_name(), "google");
    }

    #[test]
    fn test_create_google_provider_without_key() {
        let mut config = create_test_provider_config("google");
        config.api_key = None;
        assert!(ProviderFactory::create(&config).is_ok());
    }

    #[test]
    fn test_create_placeholder_provider() {
        let provider =
            ProviderFactory::create(&create_test_provider_config("placeholder")).unwrap();
        assert_eq!(provider.provider_name(), "placeholder");
    }

    #[test]
    fn test_create_unknown_provider() {
        let result = ProviderFactory::create(&create_test_provider_config("unknown"));
        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("unknown provider"));
        }
    }

    #[test]
    fn test_available_providers() {
        let providers = ProviderFactory::available_providers();
        for config_name in providers.iter() {
            assert!(ProviderFactory::create(&create_test_provider_config(config_name)).is_ok());
        }
    }
}
