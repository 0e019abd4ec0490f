//! OpenAI-compatible generation provider.
//!
//! The provider makes at most two attempts per request, first success wins:
//!
//! 1. A structured call to the `/responses` endpoint with bounded output
//!    length and temperature, attaching a reasoning-effort hint when the
//!    model name indicates a reasoning variant.
//! 2. On any typed failure, one simpler single-shot `/chat/completions`
//!    call against the general-purpose fallback model — skipped entirely
//!    for reasoning variants.
//!
//! Response payloads are decoded by an ordered list of shape matchers, each
//! returning `Some(text)` or `None`; the first match wins.

use super::{is_reasoning_model, AiProvider};
use crate::errors::PipelineError;
use crate::types::ReasoningEffort;
use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Hard deadline for one generation attempt.
const GENERATION_TIMEOUT: Duration = Duration::from_secs(35);
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
const DEFAULT_TEMPERATURE: f32 = 0.7;

// --- Request structures ---

#[derive(Serialize, Debug)]
struct PrimaryRequest<'a> {
    model: &'a str,
    instructions: &'a str,
    input: &'a str,
    max_output_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning: Option<ReasoningHint<'a>>,
}

#[derive(Serialize, Debug)]
struct ReasoningHint<'a> {
    effort: &'a str,
}

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatRequestMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Debug)]
struct ChatRequestMessage<'a> {
    role: &'a str,
    content: &'a str,
}

// --- Payload decoding ---

/// Direct text field: `{"output_text": "..."}`.
fn match_output_text(value: &Value) -> Option<String> {
    value
        .get("output_text")
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Itemized output list: `{"output": [{"content": [{"text": "..."}]}]}`.
fn match_output_items(value: &Value) -> Option<String> {
    let items = value.get("output")?.as_array()?;
    let mut parts = Vec::new();
    for item in items {
        if let Some(content) = item.get("content").and_then(Value::as_array) {
            for part in content {
                if let Some(text) = part.get("text").and_then(Value::as_str) {
                    parts.push(text.to_string());
                }
            }
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(""))
    }
}

/// Nested message content parts: `{"message": {"content": ...}}` where the
/// content is either a string or a list of text parts.
fn match_message_content(value: &Value) -> Option<String> {
    let content = value.get("message")?.get("content")?;
    match content {
        Value::String(text) => Some(text.clone()),
        Value::Array(parts) => {
            let texts: Vec<String> = parts
                .iter()
                .filter_map(|part| part.get("text").and_then(Value::as_str))
                .map(str::to_string)
                .collect();
            if texts.is_empty() {
                None
            } else {
                Some(texts.join(""))
            }
        }
        _ => None,
    }
}

/// Legacy choice/message shape: `{"choices": [{"message": {"content": "..."}}]}`.
fn match_choices(value: &Value) -> Option<String> {
    value
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?
        .as_str()
        .map(str::to_string)
}

/// Extracts the generated text from a backend payload by trying each known
/// shape in a fixed priority order. Returns `None` when no shape yields a
/// non-empty text.
pub(crate) fn extract_completion_text(value: &Value) -> Option<String> {
    let matchers: [fn(&Value) -> Option<String>; 4] = [
        match_output_text,
        match_output_items,
        match_message_content,
        match_choices,
    ];
    matchers
        .iter()
        .find_map(|matcher| matcher(value).filter(|text| !text.trim().is_empty()))
}

// --- Provider implementation ---

/// A provider for an OpenAI-compatible generation API.
#[derive(Clone, Debug)]
pub struct OpenAiProvider {
    client: ReqwestClient,
    api_base_url: String,
    api_key: String,
    model: String,
    fallback_model: String,
    max_output_tokens: u32,
    temperature: f32,
    reasoning_effort: Option<ReasoningEffort>,
}

impl OpenAiProvider {
    pub fn new(
        api_base_url: String,
        api_key: String,
        model: String,
        fallback_model: String,
    ) -> Result<Self, PipelineError> {
        if api_key.is_empty() {
            return Err(PipelineError::MissingApiKey);
        }
        let client = ReqwestClient::builder()
            .timeout(GENERATION_TIMEOUT)
            .build()
            .map_err(PipelineError::ReqwestClientBuild)?;
        Ok(Self {
            client,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            api_key,
            model,
            fallback_model,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            reasoning_effort: None,
        })
    }

    /// Overrides the primary model for one request.
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    /// Overrides the reasoning-effort hint for one request. The hint is only
    /// attached when the model is a reasoning variant.
    pub fn with_reasoning_effort(mut self, effort: Option<ReasoningEffort>) -> Self {
        self.reasoning_effort = effort;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn post_and_extract(
        &self,
        url: String,
        body: Value,
    ) -> Result<String, PipelineError> {
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(PipelineError::AiRequest)?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::AiApi(error_text));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(PipelineError::AiDeserialization)?;

        extract_completion_text(&payload).ok_or(PipelineError::AiEmptyCompletion)
    }

    /// The structured primary attempt.
    async fn primary_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PipelineError> {
        let reasoning = if is_reasoning_model(&self.model) {
            let effort = self.reasoning_effort.unwrap_or(ReasoningEffort::Medium);
            Some(ReasoningHint {
                effort: effort.as_str(),
            })
        } else {
            None
        };

        let request_body = PrimaryRequest {
            model: &self.model,
            instructions: system_prompt,
            input: user_prompt,
            max_output_tokens: self.max_output_tokens,
            temperature: self.temperature,
            reasoning,
        };
        debug!(model = %self.model, "--> Sending primary generation request");

        self.post_and_extract(
            format!("{}/responses", self.api_base_url),
            serde_json::to_value(&request_body)?,
        )
        .await
    }

    /// The simpler single-shot secondary attempt against the fallback model.
    async fn chat_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PipelineError> {
        let request_body = ChatRequest {
            model: &self.fallback_model,
            messages: vec![
                ChatRequestMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatRequestMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_output_tokens,
            stream: false,
        };
        debug!(model = %self.fallback_model, "--> Sending secondary generation request");

        self.post_and_extract(
            format!("{}/chat/completions", self.api_base_url),
            serde_json::to_value(&request_body)?,
        )
        .await
    }
}

#[async_trait]
impl AiProvider for OpenAiProvider {
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, PipelineError> {
        match self.primary_completion(system_prompt, user_prompt).await {
            Ok(text) => Ok(text),
            Err(err) if !is_reasoning_model(&self.model) => {
                warn!(
                    "Primary generation attempt failed ({err}); retrying once with model '{}'.",
                    self.fallback_model
                );
                self.chat_completion(system_prompt, user_prompt).await
            }
            Err(err) => Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_direct_output_text() {
        let payload = json!({ "output_text": "direct" });
        assert_eq!(extract_completion_text(&payload).as_deref(), Some("direct"));
    }

    #[test]
    fn decodes_itemized_output_list() {
        let payload = json!({
            "output": [
                { "type": "reasoning", "content": [] },
                { "type": "message", "content": [{ "type": "output_text", "text": "from items" }] }
            ]
        });
        assert_eq!(
            extract_completion_text(&payload).as_deref(),
            Some("from items")
        );
    }

    #[test]
    fn decodes_nested_message_content_parts() {
        let string_shape = json!({ "message": { "content": "from message" } });
        assert_eq!(
            extract_completion_text(&string_shape).as_deref(),
            Some("from message")
        );

        let parts_shape = json!({
            "message": { "content": [{ "text": "part one, " }, { "text": "part two" }] }
        });
        assert_eq!(
            extract_completion_text(&parts_shape).as_deref(),
            Some("part one, part two")
        );
    }

    #[test]
    fn decodes_legacy_choices_shape() {
        let payload = json!({
            "choices": [{ "message": { "role": "assistant", "content": "from choices" } }]
        });
        assert_eq!(
            extract_completion_text(&payload).as_deref(),
            Some("from choices")
        );
    }

    #[test]
    fn earlier_shapes_win_over_later_ones() {
        let payload = json!({
            "output_text": "first",
            "choices": [{ "message": { "content": "last" } }]
        });
        assert_eq!(extract_completion_text(&payload).as_deref(), Some("first"));
    }

    #[test]
    fn empty_or_unknown_payloads_yield_none() {
        assert!(extract_completion_text(&json!({})).is_none());
        assert!(extract_completion_text(&json!({ "output_text": "  " })).is_none());
        assert!(extract_completion_text(&json!({ "unexpected": true })).is_none());
    }

    #[test]
    fn missing_api_key_is_rejected_at_construction() {
        let result = OpenAiProvider::new(
            "https://api.example.com/v1".to_string(),
            String::new(),
            "gpt-4.1-mini".to_string(),
            "gpt-4o-mini".to_string(),
        );
        assert!(matches!(result, Err(PipelineError::MissingApiKey)));
    }
}
