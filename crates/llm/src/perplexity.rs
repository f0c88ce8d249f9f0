//! HTTP client for the Perplexity chat-completions endpoint.

use serde::{Deserialize, Serialize};

/// Default endpoint for chat completions.
pub const DEFAULT_API_URL: &str = "https://api.perplexity.ai";
/// Model used for all drafting requests.
pub const MODEL: &str = "sonar";
const MAX_TOKENS: u32 = 200;
const TEMPERATURE: f64 = 0.7;

/// Errors from the Perplexity API layer.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// The HTTP request itself failed.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Perplexity returned a non-2xx status code.
    #[error("Perplexity API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// The response contained no usable completion text.
    #[error("No completion returned")]
    EmptyAnswer,
}

/// HTTP client for the Perplexity API.
pub struct PerplexityApi {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f64,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Default, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Default, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatResponse {
    fn first_answer(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|c| c.message)
            .and_then(|m| m.content)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

/// Pull a readable message out of an error body (`error.message`, `message`,
/// or the raw text).
fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(json) => json["error"]["message"]
            .as_str()
            .or_else(|| json["message"].as_str())
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string()),
        Err(_) if !body.trim().is_empty() => body.trim().to_string(),
        Err(_) => fallback.to_string(),
    }
}

impl PerplexityApi {
    pub fn new(api_key: String) -> Self {
        Self::with_url(reqwest::Client::new(), DEFAULT_API_URL.to_string(), api_key)
    }

    pub fn with_url(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Send a single-message chat completion and return the trimmed answer.
    pub async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatRequest {
            model: MODEL,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_url))
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let fallback = format!(
                "Perplexity API error: {}",
                status.canonical_reason().unwrap_or("unknown status")
            );
            let message = error_message(&text, &fallback);
            tracing::warn!(status = status.as_u16(), %message, "Perplexity request failed");
            return Err(LlmError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ChatResponse>()
            .await?
            .first_answer()
            .ok_or(LlmError::EmptyAnswer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_answer_is_trimmed() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"content":"  Teams shipping rockets.\n"}}]}"#,
        )
        .unwrap();
        assert_eq!(parsed.first_answer().as_deref(), Some("Teams shipping rockets."));
    }

    #[test]
    fn blank_or_missing_answer_is_none() {
        let blank: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":"   "}}]}"#).unwrap();
        assert!(blank.first_answer().is_none());

        let empty: ChatResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.first_answer().is_none());
    }

    #[test]
    fn error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error":{"message":"bad key"}}"#, "fb"),
            "bad key"
        );
        assert_eq!(error_message(r#"{"message":"slow down"}"#, "fb"), "slow down");
        assert_eq!(error_message("upstream exploded", "fb"), "upstream exploded");
        assert_eq!(error_message("", "fb"), "fb");
        assert_eq!(error_message(r#"{"other":1}"#, "fb"), "fb");
    }

    #[test]
    fn request_body_shape() {
        let body = ChatRequest {
            model: MODEL,
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "sonar");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 200);
    }
}
