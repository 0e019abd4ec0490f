//! # brandrag
//!
//! Core pipeline for the marketing-content generation backend: splitting
//! heterogeneous text sources into bounded chunks, embedding them with a
//! deterministic hashed bag-of-words vectorizer, ranking stored chunks by
//! cosine similarity, composing a channel-aware generation prompt, and
//! calling the generation backend with a layered fallback chain.

pub mod chunk;
pub mod compose;
pub mod embed;
pub mod errors;
pub mod exemplars;
pub mod generate;
pub mod ingest;
pub mod providers;
pub mod rank;
pub mod types;
pub mod websearch;

pub use compose::{compose_messages, Channel, ComposeOptions, ComposedPrompt};
pub use errors::PipelineError;
pub use generate::{run_generation, CompletionSource, GenerationContext, GenerationOutcome};
pub use types::{GuidelineCategory, GuidelineSet, SourceType};
