// src/readme/gemini.rs
// =============================================================================
// TextGenerator backed by Google's Gemini REST API.
//
//   POST {base}/v1beta/models/{model}:generateContent
//   x-goog-api-key: <key>
//   {"contents": [{"parts": [{"text": "<prompt>"}]}]}
//
// A 404 means the model identifier is unknown to the service, which we report
// as Attempt::Rejected so the caller can move on to the next model.
// =============================================================================

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::generator::{Attempt, GenerationError, TextGenerator};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// {"error": {"code": 404, "message": "models/x is not found ...", "status": "NOT_FOUND"}}
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

impl GenerateResponse {
    // Concatenates the text parts of the first candidate
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|p| p.text).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

pub struct GeminiClient {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: Url, api_key: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to create Gemini HTTP client")?;

        Ok(Self {
            client,
            base_url,
            api_key: api_key.into(),
        })
    }

    fn endpoint(&self, model: &str) -> Result<Url, GenerationError> {
        let action = format!("{model}:generateContent");
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| GenerationError::Transport(format!("invalid API base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(["v1beta", "models", action.as_str()]);
        Ok(url)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<Attempt, GenerationError> {
        let url = self.endpoint(model)?;
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        debug!(model, prompt_len = prompt.len(), "Gemini request");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorEnvelope>().await {
                Ok(envelope) => envelope.error.message,
                Err(_) => format!("HTTP {status}"),
            };

            if status == StatusCode::NOT_FOUND {
                return Ok(Attempt::Rejected(message));
            }
            return Err(GenerationError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::Transport(format!("unexpected response: {e}")))?;

        parsed
            .into_text()
            .map(Attempt::Generated)
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint() {
        let client = GeminiClient::new(
            Url::parse("https://generativelanguage.googleapis.com").unwrap(),
            "key",
        )
        .unwrap();

        assert_eq!(
            client.endpoint("gemini-pro").unwrap().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: "hi" }],
            }],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"contents": [{"parts": [{"text": "hi"}]}]})
        );
    }

    #[test]
    fn test_response_text_joins_parts() {
        let response: GenerateResponse = serde_json::from_str(
            r##"{"candidates": [{"content": {"parts": [{"text": "# A"}, {"text": "\n\nbody"}], "role": "model"}}]}"##,
        )
        .unwrap();
        assert_eq!(response.into_text().as_deref(), Some("# A\n\nbody"));
    }

    #[test]
    fn test_response_without_text() {
        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
        assert_eq!(blocked.into_text(), None);

        let blank: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#)
                .unwrap();
        assert_eq!(blank.into_text(), None);
    }
}
