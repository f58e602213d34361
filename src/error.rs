use thiserror::Error;

/// Errors that can occur while turning a parsed request into a recipe
#[derive(Error, Debug)]
pub enum RecipeError {
    /// No API key was configured for the provider
    #[error("Configuration error: {0} not set")]
    MissingApiKey(&'static str),

    /// The configured provider name is not known
    #[error("Configuration error: unknown provider '{0}'")]
    UnknownProvider(String),

    /// Failed to reach the provider
    #[error("Failed to reach provider: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider body was not JSON
    #[error("Provider returned a malformed response: {0}")]
    ProviderResponse(#[source] serde_json::Error),

    /// Provider answered with an error object instead of candidates
    #[error("Provider API error ({code}): {message}")]
    ProviderApi { code: i64, message: String },

    /// Provider JSON did not have the expected shape
    #[error("Unexpected provider response shape: {0}")]
    ProviderShape(#[from] ShapeError),

    /// Generated text was not a valid recipe document
    #[error("Failed to parse recipe JSON: {0}")]
    RecipeDecode(#[source] serde_json::Error),

    /// Generated recipe parsed but holds impossible values
    #[error("Invalid recipe: {0}")]
    InvalidRecipe(String),
}

/// Each way the `candidates[0].content.parts[0].text` path can be broken
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeError {
    #[error("no candidates in response")]
    MissingCandidates,
    #[error("candidates is not an array")]
    CandidatesNotArray,
    #[error("candidates array is empty")]
    EmptyCandidates,
    #[error("candidate has no content")]
    MissingContent,
    #[error("candidate content is not an object")]
    ContentNotObject,
    #[error("content has no parts")]
    MissingParts,
    #[error("content parts is not an array")]
    PartsNotArray,
    #[error("no parts in response")]
    EmptyParts,
    #[error("no text in response part")]
    MissingText,
    #[error("response part text is not a string")]
    TextNotString,
}
