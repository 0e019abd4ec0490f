//! Source-ingestion helpers: text composition rules for indexable records
//! and campaign-archive file parsing.

pub mod upload;

pub use upload::parse_upload;

use crate::types::ParsedItem;

/// The text a guideline is indexed under: title and content joined by a
/// newline when a title is present, content alone otherwise. Returns `None`
/// when the combined text is blank (nothing to index).
pub fn guideline_index_text(title: &str, content: &str) -> Option<String> {
    let title = title.trim();
    let text = if title.is_empty() {
        content.to_string()
    } else {
        format!("{title}\n{content}")
    };
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

/// The text an uploaded campaign item is indexed under. Items where both
/// title and content are blank are skipped.
pub fn upload_item_text(item: &ParsedItem) -> Option<String> {
    let title = item.title.trim();
    let content = item.content.trim();
    if title.is_empty() && content.is_empty() {
        return None;
    }
    if title.is_empty() {
        Some(content.to_string())
    } else {
        Some(format!("{title}\n{content}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guideline_text_joins_title_and_content() {
        assert_eq!(
            guideline_index_text("Voice", "Always friendly").as_deref(),
            Some("Voice\nAlways friendly")
        );
        assert_eq!(
            guideline_index_text("  ", "Always friendly").as_deref(),
            Some("Always friendly")
        );
        assert!(guideline_index_text(" ", "  ").is_none());
    }

    #[test]
    fn blank_upload_items_are_skipped() {
        let blank = ParsedItem {
            title: " ".into(),
            content: "".into(),
            meta: None,
        };
        assert!(upload_item_text(&blank).is_none());

        let titled = ParsedItem {
            title: "Subject line".into(),
            content: "".into(),
            meta: None,
        };
        assert_eq!(upload_item_text(&titled).as_deref(), Some("Subject line"));
    }
}
