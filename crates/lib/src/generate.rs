//! Generation orchestration.
//!
//! Composes the prompt, calls the generation backend when one is configured,
//! and degrades to a deterministic synthesized response when no credential
//! exists or the backend fails. Every path returns the full audit payload:
//! the assembled messages, the retrieval examples used, the guideline
//! categories, and the used-web flag.

use crate::compose::{compose_messages, ComposeOptions, ComposedPrompt};
use crate::providers::ai::AiProvider;
use crate::types::{ChatMessage, GuidelineSet, WebSearchResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Everything gathered for one generation request before composition.
#[derive(Debug, Clone, Default)]
pub struct GenerationContext {
    pub guidelines: GuidelineSet,
    pub upload_examples: Vec<String>,
    pub website_excerpts: Vec<String>,
    pub linkedin_context: Option<String>,
    pub web_results: Vec<WebSearchResult>,
}

/// Which path produced the final text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionSource {
    /// The generation backend (primary or secondary attempt).
    Model,
    /// The deterministic synthesized response.
    Fallback,
}

/// The final text plus the audit payload. Returned on every path, including
/// degraded ones.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationOutcome {
    pub text: String,
    pub source: CompletionSource,
    pub used_web: bool,
    pub upload_examples: Vec<String>,
    pub website_excerpts: Vec<String>,
    pub guidelines: GuidelineSet,
    pub messages: Vec<ChatMessage>,
}

fn labeled_section(label: &str, items: &[String]) -> Option<String> {
    let parts: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(format!("[{label}] {}", parts.join("; ")))
    }
}

/// Deterministic last-resort response: labeled sections assembled from
/// whatever guidelines and examples were gathered. Sections with no content
/// are omitted; the request line is always present. This path never fails.
pub fn fallback_text(
    user_request: &str,
    guidelines: &GuidelineSet,
    examples: &[String],
) -> String {
    let mut lines = Vec::new();
    if let Some(line) = labeled_section("Tone", &guidelines.tone) {
        lines.push(line);
    }
    if let Some(line) = labeled_section("Terminology", &guidelines.terminology) {
        lines.push(line);
    }
    if let Some(line) = labeled_section("Style", &guidelines.style) {
        lines.push(line);
    }
    if let Some(line) = labeled_section("Rules", &guidelines.rules) {
        lines.push(line);
    }
    if let Some(line) = labeled_section("Similar", examples) {
        lines.push(line);
    }
    lines.push(format!("[Request] {}", user_request.trim()));
    lines.join("\n")
}

/// Runs one generation request to completion.
///
/// With no provider configured the deterministic fallback is used directly,
/// without any attempt. A provider failure (the provider itself already
/// retried once where allowed) degrades to the same fallback; the caller
/// always receives a usable response.
pub async fn run_generation(
    provider: Option<&dyn AiProvider>,
    user_request: &str,
    context: GenerationContext,
    options: &ComposeOptions,
) -> GenerationOutcome {
    let GenerationContext {
        guidelines,
        upload_examples,
        website_excerpts,
        linkedin_context,
        web_results,
    } = context;

    let ComposedPrompt { system, user } = compose_messages(
        user_request,
        &guidelines,
        &upload_examples,
        &website_excerpts,
        linkedin_context.as_deref(),
        &web_results,
        options,
    );

    let messages = vec![
        ChatMessage {
            role: "system".to_string(),
            content: system.clone(),
        },
        ChatMessage {
            role: "user".to_string(),
            content: user.clone(),
        },
    ];

    let fallback_examples: Vec<String> = upload_examples
        .iter()
        .chain(website_excerpts.iter())
        .cloned()
        .collect();

    let (text, source) = match provider {
        Some(provider) => match provider.generate(&system, &user).await {
            Ok(text) if !text.trim().is_empty() => (text, CompletionSource::Model),
            Ok(_) => {
                warn!("Generation backend returned empty text; using deterministic fallback.");
                (
                    fallback_text(user_request, &guidelines, &fallback_examples),
                    CompletionSource::Fallback,
                )
            }
            Err(err) => {
                warn!("Generation failed ({err}); using deterministic fallback.");
                (
                    fallback_text(user_request, &guidelines, &fallback_examples),
                    CompletionSource::Fallback,
                )
            }
        },
        None => (
            fallback_text(user_request, &guidelines, &fallback_examples),
            CompletionSource::Fallback,
        ),
    };

    GenerationOutcome {
        text,
        source,
        used_web: !web_results.is_empty(),
        upload_examples,
        website_excerpts,
        guidelines,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Channel;

    #[tokio::test]
    async fn no_credential_goes_straight_to_the_fallback() {
        let context = GenerationContext {
            guidelines: GuidelineSet {
                tone: vec!["Always friendly".to_string()],
                ..GuidelineSet::default()
            },
            ..GenerationContext::default()
        };
        let options = ComposeOptions {
            channel: Channel::parse("linkedin"),
            ..ComposeOptions::default()
        };

        let outcome =
            run_generation(None, "Write a LinkedIn post about X", context, &options).await;

        assert_eq!(outcome.source, CompletionSource::Fallback);
        assert!(outcome
            .text
            .contains("[Request] Write a LinkedIn post about X"));
        assert!(outcome.text.contains("[Tone] Always friendly"));
        assert!(!outcome.used_web);
    }

    #[tokio::test]
    async fn audit_payload_is_always_present() {
        let context = GenerationContext {
            upload_examples: vec!["Past campaign".to_string()],
            ..GenerationContext::default()
        };
        let outcome = run_generation(
            None,
            "Write something",
            context,
            &ComposeOptions::default(),
        )
        .await;

        assert_eq!(outcome.messages.len(), 2);
        assert_eq!(outcome.messages[0].role, "system");
        assert_eq!(outcome.messages[1].role, "user");
        assert!(outcome.messages[1].content.contains("### User Request"));
        assert_eq!(outcome.upload_examples, vec!["Past campaign".to_string()]);
    }

    #[test]
    fn fallback_omits_empty_sections() {
        let guidelines = GuidelineSet {
            rules: vec!["No emoji".to_string()],
            ..GuidelineSet::default()
        };
        let text = fallback_text("A request", &guidelines, &[]);
        assert!(!text.contains("[Tone]"));
        assert!(!text.contains("[Similar]"));
        assert!(text.contains("[Rules] No emoji"));
        assert!(text.ends_with("[Request] A request"));
    }

    #[test]
    fn fallback_joins_multiple_entries() {
        let guidelines = GuidelineSet {
            tone: vec!["Warm".to_string(), "Direct".to_string()],
            ..GuidelineSet::default()
        };
        let text = fallback_text("Go", &guidelines, &["Example one".to_string()]);
        assert!(text.contains("[Tone] Warm; Direct"));
        assert!(text.contains("[Similar] Example one"));
    }
}
