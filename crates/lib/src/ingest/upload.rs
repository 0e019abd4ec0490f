//! Campaign-archive file parsing.
//!
//! Uploaded CSV/TXT/JSON files are normalized once, at upload time, into an
//! ordered list of `{title, content, meta?}` records. Unparseable input
//! yields an empty list rather than an error; the upload record still exists
//! with zero items.

use crate::types::{FileKind, ParsedItem};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::OnceLock;

const TITLE_KEYS: [&str; 4] = ["title", "subject", "Subject", "Title"];
const CONTENT_KEYS: [&str; 4] = ["content", "body", "Body", "Content"];
const TXT_TITLE_MAX_CHARS: usize = 120;

/// Parses the raw text of an uploaded file into normalized campaign items.
pub fn parse_upload(kind: FileKind, raw_text: &str) -> Vec<ParsedItem> {
    match kind {
        FileKind::Csv => parse_csv(raw_text),
        FileKind::Txt => parse_txt(raw_text),
        FileKind::Json => parse_json(raw_text),
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Null => String::new(),
        other => other.to_string().trim().to_string(),
    }
}

fn first_non_empty(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| record.get(*key))
        .map(value_to_text)
        .find(|text| !text.is_empty())
}

/// Normalizes one record: title from the first populated title-like key
/// (default `"Untitled"`), content from the first populated content-like key
/// (default empty), all other keys preserved as metadata.
fn normalize_record(record: &Map<String, Value>) -> ParsedItem {
    let title = first_non_empty(record, &TITLE_KEYS).unwrap_or_else(|| "Untitled".to_string());
    let content = first_non_empty(record, &CONTENT_KEYS).unwrap_or_default();

    let extras: Map<String, Value> = record
        .iter()
        .filter(|(key, _)| {
            !TITLE_KEYS.contains(&key.as_str()) && !CONTENT_KEYS.contains(&key.as_str())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    ParsedItem {
        title,
        content,
        meta: if extras.is_empty() { None } else { Some(extras) },
    }
}

fn parse_csv(text: &str) -> Vec<ParsedItem> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(_) => return Vec::new(),
    };

    let mut items = Vec::new();
    for record in reader.records() {
        let Ok(record) = record else { continue };
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let map: Map<String, Value> = headers
            .iter()
            .zip(record.iter())
            .map(|(header, field)| (header.to_string(), Value::String(field.to_string())))
            .collect();
        items.push(normalize_record(&map));
    }
    items
}

fn txt_block_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Blocks are separated by rules of dashes/equals or two or more blank lines.
    PATTERN.get_or_init(|| Regex::new(r"\n\s*[-=]{3,}\s*\n|\n{2,}").expect("valid block pattern"))
}

fn parse_txt(text: &str) -> Vec<ParsedItem> {
    let mut items = Vec::new();
    for block in txt_block_pattern().split(text.trim()) {
        let lines: Vec<&str> = block
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = lines.first() else { continue };
        let title: String = first.chars().take(TXT_TITLE_MAX_CHARS).collect();
        let content = lines[1..].join("\n");
        items.push(ParsedItem {
            title,
            content,
            meta: None,
        });
    }
    items
}

fn parse_json(text: &str) -> Vec<ParsedItem> {
    let Ok(value) = serde_json::from_str::<Value>(text) else {
        return Vec::new();
    };

    let records: Vec<&Map<String, Value>> = match &value {
        Value::Array(entries) => entries.iter().filter_map(Value::as_object).collect(),
        Value::Object(map) => match map.get("campaigns").and_then(Value::as_array) {
            Some(campaigns) => campaigns.iter().filter_map(Value::as_object).collect(),
            None => vec![map],
        },
        _ => Vec::new(),
    };

    records.into_iter().map(normalize_record).collect()
}
