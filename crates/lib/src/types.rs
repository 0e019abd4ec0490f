//! Shared record types for the content pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of parent record an indexed chunk was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Guideline,
    Upload,
    Website,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Guideline => "guideline",
            SourceType::Upload => "upload",
            SourceType::Website => "website",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "guideline" => Some(SourceType::Guideline),
            "upload" => Some(SourceType::Upload),
            "website" => Some(SourceType::Website),
            _ => None,
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Brand guideline categories. When guidance conflicts, the composed prompt
/// instructs the model to prioritize Rules > Terminology > Tone > Style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelineCategory {
    Tone,
    Terminology,
    Style,
    Rules,
}

impl GuidelineCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuidelineCategory::Tone => "tone",
            GuidelineCategory::Terminology => "terminology",
            GuidelineCategory::Style => "style",
            GuidelineCategory::Rules => "rules",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "tone" => Some(GuidelineCategory::Tone),
            "terminology" => Some(GuidelineCategory::Terminology),
            "style" => Some(GuidelineCategory::Style),
            "rules" => Some(GuidelineCategory::Rules),
            _ => None,
        }
    }
}

/// A stored brand guideline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidelineRecord {
    pub id: i64,
    pub owner_id: String,
    pub title: String,
    pub content: String,
    pub category: GuidelineCategory,
    pub created_at: String,
}

/// The guideline contents of one owner, grouped by category. Guidelines are
/// always included in prompts verbatim; they are never retrieval-filtered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GuidelineSet {
    pub tone: Vec<String>,
    pub terminology: Vec<String>,
    pub style: Vec<String>,
    pub rules: Vec<String>,
}

impl GuidelineSet {
    pub fn push(&mut self, category: GuidelineCategory, content: String) {
        match category {
            GuidelineCategory::Tone => self.tone.push(content),
            GuidelineCategory::Terminology => self.terminology.push(content),
            GuidelineCategory::Style => self.style.push(content),
            GuidelineCategory::Rules => self.rules.push(content),
        }
    }
}

/// Supported campaign-archive file kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Csv,
    Txt,
    Json,
}

impl FileKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileKind::Csv => "csv",
            FileKind::Txt => "txt",
            FileKind::Json => "json",
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(FileKind::Csv),
            "txt" => Some(FileKind::Txt),
            "json" => Some(FileKind::Json),
            _ => None,
        }
    }
}

/// One normalized campaign record parsed from an uploaded file. Each item is
/// indexed as exactly one chunk to preserve whole-campaign semantics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParsedItem {
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Map<String, serde_json::Value>>,
}

/// A stored campaign-archive upload. `parsed_items` is derived once at
/// upload time and never mutated; a re-upload creates a new record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    pub id: i64,
    pub owner_id: String,
    pub filename: String,
    pub file_kind: FileKind,
    pub parsed_items: Vec<ParsedItem>,
    pub item_count: usize,
    pub created_at: String,
}

/// A stored LinkedIn or Trustpilot scrape. Scrapes accumulate historically;
/// only the most recent one is used as live context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeRecord {
    pub id: i64,
    pub owner_id: String,
    pub url: String,
    pub content: String,
    pub created_at: String,
}

/// A stored website crawl. At most one live website corpus exists per owner;
/// a new crawl replaces the previous record and all of its chunks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebsiteScrapeRecord {
    pub id: i64,
    pub owner_id: String,
    pub url: String,
    pub post_urls: Vec<String>,
    pub created_at: String,
}

/// A chunk candidate handed to the ranker: the stored vector plus the text
/// to surface once ranked.
#[derive(Debug, Clone)]
pub struct CandidateChunk {
    pub id: i64,
    pub text: String,
    pub vector: Vec<f32>,
}

/// A fully loaded chunk row, used by audit/debug listings.
#[derive(Debug, Clone)]
pub struct StoredChunk {
    pub id: i64,
    pub source_type: SourceType,
    pub source_id: i64,
    pub text: String,
    pub vector: Vec<f32>,
}

/// A chunk as returned from ranked retrieval. `score` is only populated on
/// ranked responses, never on raw storage listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub id: i64,
    pub source_type: SourceType,
    pub source_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// One web-search hit from the external search collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebSearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// A single chat message of the assembled generation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// Reasoning-effort hint for generation backends that support internal
/// deliberation control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReasoningEffort {
    Low,
    Medium,
    High,
}

impl ReasoningEffort {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasoningEffort::Low => "low",
            ReasoningEffort::Medium => "medium",
            ReasoningEffort::High => "high",
        }
    }
}
