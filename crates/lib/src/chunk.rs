//! Sentence-boundary text chunker.
//!
//! Splits raw text on sentence-terminal punctuation and newlines, packing
//! consecutive fragments into chunks of at most `max_chars` characters.
//! A single fragment longer than the budget is emitted whole as its own
//! oversized chunk rather than cut mid-fragment.

/// Character budget used when indexing source text.
pub const DEFAULT_CHUNK_CHARS: usize = 512;

/// Splits `text` into trimmed, non-empty chunks of at most `max_chars`
/// characters each (oversized single fragments excepted).
///
/// Concatenating the chunks reconstructs the input modulo whitespace trimmed
/// at chunk boundaries. Empty input produces no chunks.
pub fn split_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut parts: Vec<String> = Vec::new();
    let mut buffer = String::new();
    let mut current = 0usize;

    for fragment in fragments(text) {
        let fragment_len = fragment.chars().count();
        if current + fragment_len > max_chars && !buffer.is_empty() {
            flush(&mut parts, &buffer);
            buffer.clear();
            current = 0;
        }
        buffer.push_str(fragment);
        current += fragment_len;
    }
    if !buffer.is_empty() {
        flush(&mut parts, &buffer);
    }

    parts
}

fn flush(parts: &mut Vec<String>, buffer: &str) {
    let trimmed = buffer.trim();
    if !trimmed.is_empty() {
        parts.push(trimmed.to_string());
    }
}

/// Splits text into fragments, keeping each terminator (`.`, `!`, `?`,
/// newline) as its own fragment so chunk boundaries never drop characters.
fn fragments(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0usize;
    for (i, ch) in text.char_indices() {
        if matches!(ch, '.' | '!' | '?' | '\n') {
            if i > start {
                out.push(&text[start..i]);
            }
            out.push(&text[i..i + ch.len_utf8()]);
            start = i + ch.len_utf8();
        }
    }
    if start < text.len() {
        out.push(&text[start..]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_produces_no_chunks() {
        assert!(split_text("", 512).is_empty());
        assert!(split_text("   \n  ", 512).is_empty());
    }

    #[test]
    fn short_text_is_one_chunk() {
        let chunks = split_text("Hello world. How are you?", 512);
        assert_eq!(chunks, vec!["Hello world. How are you?"]);
    }

    #[test]
    fn packs_sentences_up_to_the_budget() {
        let text = "One sentence here. Another sentence there. A third one too.";
        let chunks = split_text(text, 30);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30, "chunk too long: {chunk:?}");
        }
    }

    #[test]
    fn reconstruction_preserves_non_whitespace_characters() {
        let text = "First! Second? Third.\nFourth line with more words. Fifth.";
        let chunks = split_text(text, 20);
        let rebuilt: String = chunks.concat();
        let squash = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        assert_eq!(squash(&rebuilt), squash(text));
    }

    #[test]
    fn oversized_fragment_is_emitted_whole() {
        let long_word = "x".repeat(600);
        let text = format!("Short intro. {long_word}. Outro.");
        let chunks = split_text(&text, 512);
        assert!(chunks.iter().any(|c| c.contains(&long_word)));
        // Everything except the oversized fragment stays within budget.
        for chunk in chunks.iter().filter(|c| !c.contains(&long_word)) {
            assert!(chunk.chars().count() <= 512);
        }
    }

    #[test]
    fn splits_on_newlines_as_well_as_punctuation() {
        let chunks = split_text("alpha\nbeta\ngamma", 6);
        assert_eq!(chunks, vec!["alpha", "beta", "gamma"]);
    }
}
