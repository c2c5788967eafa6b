//! HTTP dispatcher for the outfit API.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{AssistantDispatcher, read_answer};
use crate::config::AssistantConfig;
use crate::error::{Error, Result};
use crate::types::{OutfitRequest, PromptRequest};

const GENERATE_PATH: &str = "/generate-outfit";

/// Outfit API reached over HTTP.
///
/// Structured requests always go to `{api_root}/generate-outfit`. Free-text
/// prompts go to `{api_root}{prompt_path}`; the stock outfit API rejects
/// `{ "prompt": .. }` there with a 422, so point `prompt_path` at an endpoint
/// that accepts prompts when not running in mock mode.
#[derive(Clone)]
pub struct HttpAssistant {
    client: reqwest::Client,
    outfit_url: String,
    prompt_url: String,
}

impl HttpAssistant {
    /// Create a dispatcher for the outfit API under `api_root`.
    pub fn new(config: &AssistantConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            outfit_url: config.api_url(GENERATE_PATH),
            prompt_url: config.api_url(&config.prompt_path),
        })
    }

    /// Request a single outfit for a structured scenario.
    pub async fn generate_outfit(&self, request: &OutfitRequest) -> Result<String> {
        self.send(&self.outfit_url, request).await
    }

    async fn send<B: Serialize>(&self, url: &str, body: &B) -> Result<String> {
        debug!("Assistant request: POST {}", url);

        let resp = self.client.post(url).json(body).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let error_text = resp.text().await.unwrap_or_default();
            return Err(Error::status(url, status.as_u16(), error_text));
        }

        let text = resp.text().await?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| Error::Dispatch(format!("malformed response from assistant: {}", e)))?;

        read_answer(&payload)
    }
}

#[async_trait]
impl AssistantDispatcher for HttpAssistant {
    async fn ask(&self, prompt: &str) -> Result<String> {
        let body = PromptRequest {
            prompt: prompt.to_string(),
        };
        self.send(&self.prompt_url, &body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn assistant_for(server: &MockServer) -> HttpAssistant {
        let config = AssistantConfig {
            api_root: server.uri(),
            ..AssistantConfig::default()
        };
        HttpAssistant::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_ask_posts_prompt() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-outfit"))
            .and(body_json(json!({ "prompt": "USER QUERY: linen for a beach wedding" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "outfit": "Light linen suit." })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let answer = assistant_for(&server)
            .ask("USER QUERY: linen for a beach wedding")
            .await
            .unwrap();
        assert_eq!(answer, "Light linen suit.");
    }

    #[tokio::test]
    async fn test_ask_uses_configured_prompt_path() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/ask-stylist"))
            .and(body_json(json!({ "prompt": "USER QUERY: boots for rain" })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "outfit": "Chelsea rain boots." })),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/generate-outfit"))
            .respond_with(ResponseTemplate::new(422))
            .expect(0)
            .mount(&server)
            .await;

        let config = AssistantConfig {
            api_root: server.uri(),
            prompt_path: "/ask-stylist".into(),
            ..AssistantConfig::default()
        };
        let answer = HttpAssistant::new(&config)
            .unwrap()
            .ask("USER QUERY: boots for rain")
            .await
            .unwrap();
        assert_eq!(answer, "Chelsea rain boots.");
    }

    #[tokio::test]
    async fn test_generate_outfit_posts_scenario() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-outfit"))
            .and(body_json(json!({
                "event": "dinner with friends",
                "weather": "70°F",
                "mood": "casual"
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "outfit": "Flowy top, linen pants." })),
            )
            .mount(&server)
            .await;

        let request = OutfitRequest {
            event: "dinner with friends".into(),
            weather: "70°F".into(),
            mood: "casual".into(),
        };
        let answer = assistant_for(&server).generate_outfit(&request).await.unwrap();
        assert_eq!(answer, "Flowy top, linen pants.");
    }

    #[tokio::test]
    async fn test_non_success_status_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-outfit"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let err = assistant_for(&server).ask("anything").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_non_json_body_is_dispatch_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generate-outfit"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let err = assistant_for(&server).ask("anything").await.unwrap_err();
        assert!(err.is_dispatch());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let config = AssistantConfig {
            api_root: "http://127.0.0.1:9".into(),
            ..AssistantConfig::default()
        };
        let err = HttpAssistant::new(&config).unwrap().ask("hello").await.unwrap_err();
        assert!(err.is_transport());
    }
}
