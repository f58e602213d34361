use crate::config::{ProviderConfig, API_KEY_ENV};
use crate::error::{RecipeError, ShapeError};
use crate::providers::{RecipePrompt, RecipeProvider};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

pub struct GoogleProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl GoogleProvider {
    /// Create a new Google Gemini provider from configuration.
    ///
    /// A missing API key is not an error here; it is reported by
    /// [`RecipeProvider::generate`] before any request is made.
    pub fn new(config: &ProviderConfig) -> Result<Self, RecipeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()?;

        Ok(GoogleProvider {
            client,
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl RecipeProvider for GoogleProvider {
    fn provider_name(&self) -> &str {
        "google"
    }

    async fn generate(&self, prompt: &RecipePrompt) -> Result<String, RecipeError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(RecipeError::MissingApiKey(API_KEY_ENV))?;

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .json(&json!({
                "contents": [{
                    "parts": [{
                        "text": prompt.text
                    }]
                }],
                "generationConfig": prompt.generation_config
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let response_body: Value =
            serde_json::from_str(&body).map_err(RecipeError::ProviderResponse)?;
        debug!("Google Gemini response ({}): {:?}", status, response_body);

        // Check for API error response
        if let Some(error) = response_body.get("error") {
            let code = error["code"].as_i64().unwrap_or(i64::from(status.as_u16()));
            let message = error["message"]
                .as_str()
                .unwrap_or("Unknown error")
                .to_string();
            error!("Google Gemini API error ({}): {}", code, message);
            return Err(RecipeError::ProviderApi { code, message });
        }

        Ok(extract_text(&response_body)?.to_string())
    }
}

/// Walk `candidates[0].content.parts[0].text`, naming the first broken link.
pub fn extract_text(response: &Value) -> Result<&str, ShapeError> {
    let candidates = response
        .get("candidates")
        .ok_or(ShapeError::MissingCandidates)?
        .as_array()
        .ok_or(ShapeError::CandidatesNotArray)?;
    let candidate = candidates.first().ok_or(ShapeError::EmptyCandidates)?;

    let content = candidate
        .get("content")
        .ok_or(ShapeError::MissingContent)?;
    if !content.is_object() {
        return Err(ShapeError::ContentNotObject);
    }

    let parts = content
        .get("parts")
        .ok_or(ShapeError::MissingParts)?
        .as_array()
        .ok_or(ShapeError::PartsNotArray)?;
    let part = parts.first().ok_or(ShapeError::EmptyParts)?;

    part.get("text")
        .ok_or(ShapeError::MissingText)?
        .as_str()
        .ok_or(ShapeError::TextNotString)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_subdomain;
    use crate::providers::build_prompt;
    use mockito::{Matcher, Server};

    const MODEL_PATH: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn test_config(base_url: String, api_key: Option<&str>) -> ProviderConfig {
        ProviderConfig {
            name: "google".to_string(),
            model: "gemini-1.5-flash".to_string(),
            base_url,
            api_key: api_key.map(str::to_string),
            timeout: 5,
        }
    }

    fn test_prompt() -> RecipePrompt {
        build_prompt(&parse_subdomain("pasta-carbonara-for2"))
    }

    #[test]
    fn test_extract_text() {
        let response = json!({
            "candidates": [{"content": {"parts": [{"text": "{}"}]}}]
        });
        assert_eq!(extract_text(&response), Ok("{}"));
    }

    #[test]
    fn test_extract_text_reports_each_broken_link() {
        let cases = [
            (json!({}), ShapeError::MissingCandidates),
            (json!({"candidates": {}}), ShapeError::CandidatesNotArray),
            (json!({"candidates": []}), ShapeError::EmptyCandidates),
            (json!({"candidates": [{}]}), ShapeError::MissingContent),
            (json!({"candidates": [{"content": "x"}]}), ShapeError::ContentNotObject),
            (json!({"candidates": [{"content": {}}]}), ShapeError::MissingParts),
            (json!({"candidates": [{"content": {"parts": 3}}]}), ShapeError::PartsNotArray),
            (json!({"candidates": [{"content": {"parts": []}}]}), ShapeError::EmptyParts),
            (json!({"candidates": [{"content": {"parts": [{}]}}]}), ShapeError::MissingText),
            (
                json!({"candidates": [{"content": {"parts": [{"text": 1}]}}]}),
                ShapeError::TextNotString,
            ),
        ];

        for (response, expected) in cases {
            assert_eq!(extract_text(&response), Err(expected), "{response}");
        }
    }

    #[tokio::test]
    async fn test_generate() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", MODEL_PATH)
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::PartialJson(json!({
                "generationConfig": {"temperature": 0.3, "maxOutputTokens": 800}
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates": [{"content": {"parts": [{"text": "{\"name\": \"x\"}"}]}}]}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(server.url(), Some("test-key"))).unwrap();
        let text = provider.generate(&test_prompt()).await.unwrap();
        assert_eq!(text, r#"{"name": "x"}"#);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_api_key_makes_no_request() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(server.url(), None)).unwrap();
        let result = provider.generate(&test_prompt()).await;
        assert!(matches!(result, Err(RecipeError::MissingApiKey(_))));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_missing_candidates_is_shape_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", MODEL_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"promptFeedback": {}}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(server.url(), Some("k"))).unwrap();
        let result = provider.generate(&test_prompt()).await;
        assert!(matches!(
            result,
            Err(RecipeError::ProviderShape(ShapeError::MissingCandidates))
        ));
    }

    #[tokio::test]
    async fn test_api_error_object() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", MODEL_PATH)
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error": {"code": 400, "message": "API key not valid"}}"#)
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(server.url(), Some("bad"))).unwrap();
        match provider.generate(&test_prompt()).await {
            Err(RecipeError::ProviderApi { code, message }) => {
                assert_eq!(code, 400);
                assert_eq!(message, "API key not valid");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_non_json_body() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", MODEL_PATH)
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("<html>Bad Gateway</html>")
            .create_async()
            .await;

        let provider = GoogleProvider::new(&test_config(server.url(), Some("k"))).unwrap();
        let result = provider.generate(&test_prompt()).await;
        assert!(matches!(result, Err(RecipeError::ProviderResponse(_))));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let provider =
            GoogleProvider::new(&test_config("http://127.0.0.1:1".to_string(), Some("k")))
                .unwrap();
        let result = provider.generate(&test_prompt()).await;
        assert!(matches!(result, Err(RecipeError::Transport(_))));
    }

    #[test]
    fn test_provider_name() {
        let provider =
            GoogleProvider::new(&test_config("https://example.com/".to_string(), None)).unwrap();
        assert_eq!(provider.provider_name(), "google");
        assert_eq!(
            provider.endpoint(),
            format!("https://example.com{}", MODEL_PATH)
        );
    }
}
