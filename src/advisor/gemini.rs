//! Google Gemini `generateContent` client.
//!
//! Sends one user turn per request and reads back the text parts of the
//! first candidate.

use async_trait::async_trait;
use serde::Deserialize;

use super::HealthAdvisor;
use crate::config::AppConfig;
use crate::{HealthDeskError, Result};

// ── Request Building ───────────────────────────────────────────

/// Build a `generateContent` request body holding a single user turn.
pub fn build_request(prompt: &str) -> serde_json::Value {
    serde_json::json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": prompt}],
        }],
    })
}

// ── Response Parsing ───────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    #[serde(default)]
    block_reason: Option<String>,
}

/// Extract the reply text from a successful response body.
///
/// The text parts of the first candidate are joined. A response with no
/// candidates, or a first candidate that carries no text part, is an error.
pub fn parse_response(body: &str) -> Result<String> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| HealthDeskError::ResponseError(format!("invalid JSON: {e}")))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|f| f.block_reason)
            .unwrap_or_else(|| "no candidates returned".to_string());
        return Err(HealthDeskError::ResponseError(format!(
            "response contained no candidates ({reason})"
        )));
    };

    let texts: Vec<String> = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if texts.is_empty() {
        let reason = candidate
            .finish_reason
            .unwrap_or_else(|| "unspecified".to_string());
        return Err(HealthDeskError::ResponseError(format!(
            "candidate has no text (finish reason: {reason})"
        )));
    }

    Ok(texts.concat())
}

// ── Error Mapping ──────────────────────────────────────────────

/// Map HTTP error responses to typed errors.
pub fn map_http_error(status: reqwest::StatusCode, body: &str) -> HealthDeskError {
    let detail = extract_error_message(body);

    match status.as_u16() {
        401 | 403 => HealthDeskError::AuthError(detail),
        429 => HealthDeskError::RateLimited(detail),
        400 | 404 => HealthDeskError::RequestError(detail),
        s if s >= 500 => HealthDeskError::ProviderError(detail),
        _ => HealthDeskError::RequestError(format!("HTTP {status}: {detail}")),
    }
}

fn extract_error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(|m| m.as_str())
                .map(String::from)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                "no response body".to_string()
            } else {
                body.chars().take(500).collect()
            }
        })
}

// ── Client ─────────────────────────────────────────────────────

pub struct GeminiClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            HealthDeskError::ConfigError(format!("cannot build HTTP client: {e}"))
        })?;

        Ok(Self {
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
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
impl HealthAdvisor for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending Gemini request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Gemini request failed");
                HealthDeskError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HealthDeskError::Transport(e.to_string()))?;

        if !status.is_success() {
            tracing::error!(status = %status, "Gemini request returned error");
            return Err(map_http_error(status, &body));
        }

        let text = parse_response(&body)?;
        tracing::debug!(reply_len = text.len(), "Gemini reply received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_request_body_shape() {
        let body = build_request("What is flu?");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "What is flu?");
    }

    #[test]
    fn test_parse_joins_text_parts() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Flu is "},{"text":"viral."}],"role":"model"}}]}"#;
        assert_eq!(parse_response(body).unwrap(), "Flu is viral.");
    }

    #[test]
    fn test_parse_candidate_without_text_names_finish_reason() {
        let body = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        match parse_response(body) {
            Err(HealthDeskError::ResponseError(msg)) => assert!(msg.contains("SAFETY")),
            other => panic!("unexpected result: {other:?}"),
        }

        let body = r#"{"candidates":[{"content":{"parts":[],"role":"model"},"finishReason":"RECITATION"}]}"#;
        assert!(parse_response(body)
            .unwrap_err()
            .to_string()
            .contains("RECITATION"));
    }

    #[test]
    fn test_parse_empty_text_part_is_empty() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":""}]},"finishReason":"STOP"}]}"#;
        assert_eq!(parse_response(body).unwrap(), "");
    }

    #[test]
    fn test_parse_blocked_prompt() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let err = parse_response(body).unwrap_err();
        assert!(err.to_string().contains("SAFETY"));
    }

    #[test]
    fn test_parse_invalid_json() {
        assert!(matches!(
            parse_response("not json"),
            Err(HealthDeskError::ResponseError(_))
        ));
    }

    #[test]
    fn test_map_http_error() {
        let body = r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#;
        match map_http_error(StatusCode::FORBIDDEN, body) {
            HealthDeskError::AuthError(msg) => assert_eq!(msg, "API key not valid"),
            other => panic!("unexpected error: {other:?}"),
        }

        assert!(matches!(
            map_http_error(StatusCode::TOO_MANY_REQUESTS, ""),
            HealthDeskError::RateLimited(_)
        ));
        assert!(matches!(
            map_http_error(StatusCode::SERVICE_UNAVAILABLE, "down"),
            HealthDeskError::ProviderError(ref m) if m == "down"
        ));
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = AppConfig::default().with_base_url("http://localhost:1234/");
        let client = GeminiClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "http://localhost:1234/v1beta/models/gemini-pro:generateContent"
        );
    }
}
