use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment variable consulted when no API key is configured
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Top level application configuration
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// HTTP listener and CORS settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Recipe provider settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

/// Settings for the inbound HTTP server
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Address to bind to
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origins allowed by the CORS policy
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Settings for the recipe provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider to use ("google" or "placeholder")
    #[serde(default = "default_provider")]
    pub name: String,
    /// Model identifier (e.g., "gemini-1.5-flash")
    #[serde(default = "default_model")]
    pub model: String,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// API key for authentication (can also be set via GEMINI_API_KEY)
    pub api_key: Option<String>,
    /// Outbound request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider(),
            model: default_model(),
            base_url: default_base_url(),
            api_key: None,
            timeout: default_timeout(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "https://www.undakam.com".to_string(),
        "https://undakam.com".to_string(),
        "http://localhost:3001".to_string(),
        "https://localhost:3001".to_string(),
    ]
}

fn default_provider() -> String {
    "google".to_string()
}

fn default_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with UNDAKAM__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: UNDAKAM__PROVIDER__API_KEY.
    /// When none of these set an API key, GEMINI_API_KEY is used.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: UNDAKAM__PROVIDER__MODEL
            .add_source(
                Environment::with_prefix("UNDAKAM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        Ok(config.with_api_key_fallback(std::env::var(API_KEY_ENV).ok()))
    }

    /// Fill a missing API key from the given fallback value
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        let configured = self
            .provider
            .api_key
            .take()
            .filter(|key| !key.trim().is_empty());
        self.provider.api_key =
            configured.or_else(|| fallback.filter(|key| !key.trim().is_empty()));
        self
    }
}
