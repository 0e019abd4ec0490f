pub mod openai;

use crate::errors::PipelineError;
use async_trait::async_trait;
use dyn_clone::DynClone;
pub use openai::OpenAiProvider;
use std::fmt::Debug;

/// A trait for interacting with a generation backend.
///
/// Implementations receive the composed system and user messages and return
/// the generated text, converting every upstream failure into a typed error.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a given system and user prompt.
    async fn generate(&self, system_prompt: &str, user_prompt: &str)
        -> Result<String, PipelineError>;
}

dyn_clone::clone_trait_object!(AiProvider);

/// Whether a model name indicates a reasoning variant. Reasoning models get
/// a reasoning-effort hint on the primary call and are never retried against
/// the general-purpose fallback model.
pub fn is_reasoning_model(model: &str) -> bool {
    let model = model.to_ascii_lowercase();
    model.starts_with("o1") || model.starts_with("o3") || model.starts_with("o4")
        || model.starts_with("gpt-5")
}

#[cfg(test)]
mod tests {
    use super::is_reasoning_model;

    #[test]
    fn reasoning_model_names_are_detected() {
        assert!(is_reasoning_model("o3-mini"));
        assert!(is_reasoning_model("gpt-5"));
        assert!(!is_reasoning_model("gpt-4.1-mini"));
        assert!(!is_reasoning_model("gpt-4o"));
    }
}
