//! HTML-to-text extraction heuristics.
//!
//! Script and style blocks are stripped with regexes before the document is
//! parsed, then `scraper` handles tag removal and entity decoding. The
//! extractors deliberately stay naive: they feed a retrieval index, not a
//! rendering pipeline.

use regex::Regex;
use scraper::{Html, Selector};
use std::sync::OnceLock;

fn script_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<script[\s\S]*?</script>").expect("valid pattern"))
}

fn style_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?is)<style[\s\S]*?</style>").expect("valid pattern"))
}

fn break_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(?i)<br\s*/?>|</p>").expect("valid pattern"))
}

fn whitespace_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\s+").expect("valid pattern"))
}

fn nav_noise_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)Trustpilot|Log in|Sign up|Categories|Business|Claimed|Cookies|Privacy|Terms")
            .expect("valid pattern")
    })
}

fn strip_blocks(html: &str) -> String {
    let without_scripts = script_pattern().replace_all(html, " ");
    style_pattern().replace_all(&without_scripts, " ").to_string()
}

fn document_text(html: &str) -> String {
    let document = Html::parse_document(html);
    document.root_element().text().collect::<Vec<_>>().join(" ")
}

/// Extracts the visible text of a page as a single whitespace-collapsed
/// string.
pub fn visible_text(html: &str) -> String {
    let cleaned = strip_blocks(html);
    let text = document_text(&cleaned);
    whitespace_pattern().replace_all(&text, " ").trim().to_string()
}

/// Extracts visible text preserving line structure: `<br>` and `</p>` become
/// newlines, whitespace collapses within each line, empty lines are dropped.
pub fn text_lines(html: &str) -> Vec<String> {
    let cleaned = strip_blocks(html);
    let with_breaks = break_pattern().replace_all(&cleaned, "\n");
    let text = document_text(&with_breaks);
    text.lines()
        .map(|line| whitespace_pattern().replace_all(line, " ").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Review extraction tuned for Trustpilot pages: line-structured text with
/// navigation/legal noise and short fragments dropped.
pub fn review_lines(html: &str) -> Vec<String> {
    text_lines(html)
        .into_iter()
        .filter(|line| !nav_noise_pattern().is_match(line))
        .filter(|line| line.chars().count() >= 20)
        .collect()
}

/// The page title, falling back to the first `h1` heading.
pub fn page_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    static TITLE: OnceLock<Selector> = OnceLock::new();
    static H1: OnceLock<Selector> = OnceLock::new();
    let title_selector = TITLE.get_or_init(|| Selector::parse("title").expect("valid selector"));
    let h1_selector = H1.get_or_init(|| Selector::parse("h1").expect("valid selector"));

    for selector in [title_selector, h1_selector] {
        if let Some(element) = document.select(selector).next() {
            let text = element.text().collect::<String>().trim().to_string();
            if !text.is_empty() {
                return Some(text);
            }
        }
    }
    None
}

const POST_PATH_MARKERS: [&str; 4] = ["/blog/", "/posts/", "/article", "/news/"];

/// Discovers likely blog-post links on an index page: anchors whose href
/// contains a post-like path segment, absolutized against `base_url`,
/// de-duplicated in order, capped at `max_urls`.
pub fn discover_post_links(html: &str, base_url: &str, max_urls: usize) -> Vec<String> {
    static ANCHOR: OnceLock<Selector> = OnceLock::new();
    let anchor_selector =
        ANCHOR.get_or_init(|| Selector::parse("a[href]").expect("valid selector"));

    let Ok(base) = reqwest::Url::parse(base_url) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut seen = Vec::new();
    for element in document.select(anchor_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let lowered = href.to_ascii_lowercase();
        if !POST_PATH_MARKERS.iter().any(|marker| lowered.contains(marker)) {
            continue;
        }
        let Ok(absolute) = base.join(href) else {
            continue;
        };
        let absolute = absolute.to_string();
        if !seen.contains(&absolute) {
            seen.push(absolute);
        }
        if seen.len() >= max_urls {
            break;
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_drops_scripts_styles_and_tags() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><script>var x = 1;</script><h1>Hello</h1><p>World &amp; more</p></body></html>"#;
        let text = visible_text(html);
        assert!(text.contains("Hello"));
        assert!(text.contains("World & more"));
        assert!(!text.contains("color: red"));
        assert!(!text.contains("var x"));
    }

    #[test]
    fn text_lines_respects_br_and_p_boundaries() {
        let html = "<p>First line</p><p>Second line</p>Third<br>Fourth";
        let lines = text_lines(html);
        assert_eq!(lines, vec!["First line", "Second line", "Third", "Fourth"]);
    }

    #[test]
    fn review_lines_drop_nav_noise_and_short_fragments() {
        let html = "<p>Log in</p>\
                    <p>ok</p>\
                    <p>This product saved our team hours every single week.</p>\
                    <p>Read our Privacy policy and Terms here</p>";
        let lines = review_lines(html);
        assert_eq!(
            lines,
            vec!["This product saved our team hours every single week."]
        );
    }

    #[test]
    fn discover_post_links_filters_absolutizes_and_dedups() {
        let html = r#"
            <a href="/blog/first-post">First</a>
            <a href="/about">About</a>
            <a href="https://example.com/blog/second-post">Second</a>
            <a href="/blog/first-post">First again</a>
            <a href="/news/launch">Launch</a>
        "#;
        let links = discover_post_links(html, "https://example.com", 15);
        assert_eq!(
            links,
            vec![
                "https://example.com/blog/first-post",
                "https://example.com/blog/second-post",
                "https://example.com/news/launch",
            ]
        );
    }

    #[test]
    fn discover_post_links_honors_the_cap() {
        let html: String = (0..30)
            .map(|i| format!("<a href=\"/blog/post-{i}\">p</a>"))
            .collect();
        let links = discover_post_links(&html, "https://example.com", 15);
        assert_eq!(links.len(), 15);
    }

    #[test]
    fn page_title_prefers_title_tag_then_h1() {
        assert_eq!(
            page_title("<title>Doc title</title><h1>Heading</h1>").as_deref(),
            Some("Doc title")
        );
        assert_eq!(
            page_title("<body><h1>Heading only</h1></body>").as_deref(),
            Some("Heading only")
        );
        assert!(page_title("<body><p>no heading</p></body>").is_none());
    }
}
