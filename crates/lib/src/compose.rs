//! Prompt composition.
//!
//! Assembles the two-message generation request from brand guidelines,
//! retrieved campaign examples, live scrape context, optional web-search
//! results, channel style exemplars, and the literal user request. Section
//! order is fixed so the composed prompt is stable for identical inputs.

use crate::exemplars::exemplars_for;
use crate::types::{GuidelineSet, ReasoningEffort, WebSearchResult};
use serde::{Deserialize, Serialize};

/// Character cap applied to the live LinkedIn context.
pub const LINKEDIN_CONTEXT_MAX_CHARS: usize = 1500;
/// Character budget per style exemplar on non-blog channels.
pub const EXEMPLAR_MAX_CHARS: usize = 700;
/// Marker appended to a truncated exemplar.
pub const EXEMPLAR_ELLIPSIS: &str = "…";
/// Maximum exemplars shown for the blog channel (full text).
pub const BLOG_EXEMPLAR_LIMIT: usize = 2;
/// Maximum exemplars shown for short-form channels (truncated).
pub const SHORT_FORM_EXEMPLAR_LIMIT: usize = 5;
/// Maximum web-search results composed into the prompt.
pub const WEB_RESULT_LIMIT: usize = 3;
/// Maximum website excerpts composed into the prompt.
pub const WEBSITE_EXCERPT_LIMIT: usize = 5;
/// Maximum retrieved campaign examples composed into the prompt.
pub const EXAMPLE_LIMIT: usize = 5;
/// Default number of chunks retrieved per source type.
pub const DEFAULT_TOP_K: usize = 5;

const SYSTEM_PROMPT: &str = "You are an expert marketing copywriter. Generate compelling, brand-\n\
consistent marketing copy that strictly follows the provided brand\n\
guidelines. Prefer clarity, brevity, and persuasive language.\n\
Do not invent facts. If information is missing, proceed with safe defaults\n\
that remain on-brand.\n\
Channel style examples are style and structure references only; never treat\n\
them as a source of facts.";

/// The target content channel. Unknown or empty channel strings fall back to
/// LinkedIn, never to an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Linkedin,
    Facebook,
    Newsletter,
    Blog,
}

impl Channel {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "facebook" => Channel::Facebook,
            "newsletter" => Channel::Newsletter,
            "blog" => Channel::Blog,
            _ => Channel::Linkedin,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Linkedin => "linkedin",
            Channel::Facebook => "facebook",
            Channel::Newsletter => "newsletter",
            Channel::Blog => "blog",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            Channel::Linkedin => "LinkedIn post",
            Channel::Facebook => "Facebook post",
            Channel::Newsletter => "Newsletter",
            Channel::Blog => "Blog article",
        }
    }
}

/// Named, typed configuration for one generation request.
#[derive(Debug, Clone)]
pub struct ComposeOptions {
    pub channel: Channel,
    pub top_k: usize,
    pub use_web: bool,
    pub company: Option<String>,
    pub links: Vec<String>,
    pub model: Option<String>,
    pub reasoning_effort: Option<ReasoningEffort>,
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self {
            channel: Channel::Linkedin,
            top_k: DEFAULT_TOP_K,
            use_web: false,
            company: None,
            links: Vec::new(),
            model: None,
            reasoning_effort: None,
        }
    }
}

/// The two ordered text blocks of a generation request.
#[derive(Debug, Clone)]
pub struct ComposedPrompt {
    pub system: String,
    pub user: String,
}

fn join_guidelines(items: &[String]) -> String {
    let lines: Vec<String> = items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| format!("- {}", item.trim()))
        .collect();
    if lines.is_empty() {
        "- (none)".to_string()
    } else {
        lines.join("\n")
    }
}

fn brand_guidelines_section(guidelines: &GuidelineSet) -> String {
    format!(
        "### Brand Guidelines\n\n\
         #### Tone\n{}\n\n\
         #### Terminology\n{}\n\n\
         #### Style\n{}\n\n\
         #### Content Rules\n{}",
        join_guidelines(&guidelines.tone),
        join_guidelines(&guidelines.terminology),
        join_guidelines(&guidelines.style),
        join_guidelines(&guidelines.rules),
    )
}

fn truncate_chars(text: &str, max_chars: usize) -> (String, bool) {
    if text.chars().count() <= max_chars {
        (text.to_string(), false)
    } else {
        (text.chars().take(max_chars).collect(), true)
    }
}

fn linkedin_section(context: &str) -> Option<String> {
    let trimmed = context.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (snippet, _) = truncate_chars(trimmed, LINKEDIN_CONTEXT_MAX_CHARS);
    Some(format!(
        "### LinkedIn Context (verbatim snippets)\n\nSnippet 1:\n{snippet}"
    ))
}

fn website_section(excerpts: &[String]) -> Option<String> {
    if excerpts.is_empty() {
        return None;
    }
    let mut lines = vec!["### Website Blog Excerpts (RAG)".to_string()];
    for (i, excerpt) in excerpts.iter().take(WEBSITE_EXCERPT_LIMIT).enumerate() {
        lines.push(format!("Excerpt {}:\n{}", i + 1, excerpt.trim()));
    }
    Some(lines.join("\n\n"))
}

fn web_results_section(results: &[WebSearchResult]) -> Option<String> {
    if results.is_empty() {
        return None;
    }
    let mut lines = vec!["### Web Search Results".to_string()];
    for (i, result) in results.iter().take(WEB_RESULT_LIMIT).enumerate() {
        lines.push(format!(
            "Result {}: {}\n{}\n{}",
            i + 1,
            result.title.trim(),
            result.url.trim(),
            result.snippet.trim()
        ));
    }
    Some(lines.join("\n\n"))
}

/// Suggested searches synthesized from user-supplied directive links and the
/// company name. Omitted entirely when both are absent.
fn directives_section(company: Option<&str>, links: &[String]) -> Option<String> {
    let company = company.map(str::trim).filter(|c| !c.is_empty());
    let links: Vec<&String> = links.iter().filter(|l| !l.trim().is_empty()).collect();
    if company.is_none() && links.is_empty() {
        return None;
    }

    let mut lines = vec!["### Suggested Web Searches".to_string()];
    for link in links {
        lines.push(format!("- {}", link.trim()));
    }
    if let Some(company) = company {
        lines.push(format!("- {company} latest news"));
        lines.push(format!("- {company} customer reviews"));
        lines.push(format!("- {company} blog"));
    }
    Some(lines.join("\n"))
}

fn examples_section(examples: &[String]) -> String {
    let mut lines = vec!["### Similar Past Campaigns (for inspiration only)".to_string()];
    if examples.is_empty() {
        lines.push("(no close matches found)".to_string());
    } else {
        for (i, example) in examples.iter().take(EXAMPLE_LIMIT).enumerate() {
            lines.push(format!("Example {}:\n{}", i + 1, example.trim()));
        }
    }
    lines.join("\n\n")
}

fn exemplar_section(channel: Channel) -> String {
    let mut lines = vec![format!(
        "### Channel Style Examples\n\
         The following examples show the expected style, tone, and structure for\n\
         a {}. They are style references ONLY and must never be used as a source\n\
         of facts.",
        channel.display_name()
    )];

    let exemplars = exemplars_for(channel);
    match channel {
        Channel::Blog => {
            for (i, exemplar) in exemplars.iter().take(BLOG_EXEMPLAR_LIMIT).enumerate() {
                lines.push(format!("Style example {}:\n{}", i + 1, exemplar));
            }
        }
        _ => {
            for (i, exemplar) in exemplars.iter().take(SHORT_FORM_EXEMPLAR_LIMIT).enumerate() {
                let (text, truncated) = truncate_chars(exemplar, EXEMPLAR_MAX_CHARS);
                let marker = if truncated { EXEMPLAR_ELLIPSIS } else { "" };
                lines.push(format!("Style example {}:\n{}{}", i + 1, text, marker));
            }
        }
    }
    lines.join("\n\n")
}

/// Per-channel output-instruction deltas: word budgets and structural hints.
fn channel_instructions(channel: Channel) -> &'static str {
    match channel {
        Channel::Linkedin => {
            "- Keep within 100-200 words unless the user specifies length.\n\
             - Open with a strong hook line and end with 3-5 relevant hashtags."
        }
        Channel::Facebook => {
            "- Keep within 80-150 words unless the user specifies length.\n\
             - Keep the tone conversational and end with a clear call to action."
        }
        Channel::Newsletter => {
            "- Keep within 200-400 words unless the user specifies length.\n\
             - Start with a subject line, then short, scannable paragraphs."
        }
        Channel::Blog => {
            "- Write 600-900 words unless the user specifies length.\n\
             - Structure the article with a title and descriptive subheadings."
        }
    }
}

fn output_instructions(channel: Channel) -> String {
    format!(
        "### Output Instructions\n\
         - Write in the brand's tone and style.\n\
         - Use the brand's terminology consistently.\n\
         - If rules conflict, prioritize Content Rules > Terminology > Tone > Style.\n\
         - Channel style examples are structural references only; never treat them as factual sources.\n\
         - Provide a single, cohesive piece of content unless asked otherwise.\n\
         {}",
        channel_instructions(channel)
    )
}

/// Composes the system instruction and the single user message.
///
/// Section order is fixed: brand guidelines, then the optional context
/// sections (LinkedIn, website excerpts, web results, search directives —
/// each omitted when empty), then similar past campaigns (always present),
/// then the channel header and style exemplars, the literal user request,
/// and the output instructions.
#[allow(clippy::too_many_arguments)]
pub fn compose_messages(
    user_request: &str,
    guidelines: &GuidelineSet,
    upload_examples: &[String],
    website_excerpts: &[String],
    linkedin_context: Option<&str>,
    web_results: &[WebSearchResult],
    options: &ComposeOptions,
) -> ComposedPrompt {
    let mut sections: Vec<String> = vec![brand_guidelines_section(guidelines)];

    if let Some(section) = linkedin_context.and_then(linkedin_section) {
        sections.push(section);
    }
    if let Some(section) = website_section(website_excerpts) {
        sections.push(section);
    }
    if let Some(section) = web_results_section(web_results) {
        sections.push(section);
    }
    if let Some(section) = directives_section(options.company.as_deref(), &options.links) {
        sections.push(section);
    }

    sections.push(examples_section(upload_examples));
    sections.push(format!("### Channel\n{}", options.channel.as_str()));
    sections.push(exemplar_section(options.channel));
    sections.push(format!("### User Request\n{}", user_request.trim()));
    sections.push(output_instructions(options.channel));

    ComposedPrompt {
        system: SYSTEM_PROMPT.to_string(),
        user: sections.join("\n\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guidelines() -> GuidelineSet {
        GuidelineSet {
            tone: vec!["Always friendly".to_string()],
            terminology: vec!["Say customer, not client".to_string()],
            style: vec![],
            rules: vec!["Never promise legal advice".to_string()],
        }
    }

    #[test]
    fn guideline_bullets_are_verbatim_and_categorized() {
        let prompt = compose_messages(
            "Write a post",
            &guidelines(),
            &[],
            &[],
            None,
            &[],
            &ComposeOptions::default(),
        );
        assert!(prompt.user.contains("#### Tone\n- Always friendly"));
        assert!(prompt
            .user
            .contains("#### Terminology\n- Say customer, not client"));
        assert!(prompt.user.contains("#### Style\n- (none)"));
        assert!(prompt
            .user
            .contains("#### Content Rules\n- Never promise legal advice"));
    }

    #[test]
    fn empty_context_sections_are_omitted() {
        let prompt = compose_messages(
            "Write a post",
            &GuidelineSet::default(),
            &[],
            &[],
            None,
            &[],
            &ComposeOptions::default(),
        );
        assert!(!prompt.user.contains("### LinkedIn Context"));
        assert!(!prompt.user.contains("### Website Blog Excerpts"));
        assert!(!prompt.user.contains("### Web Search Results"));
        assert!(!prompt.user.contains("### Suggested Web Searches"));
        assert!(prompt.user.contains("(no close matches found)"));
    }

    #[test]
    fn section_order_is_stable() {
        let options = ComposeOptions {
            company: Some("Acme".to_string()),
            ..ComposeOptions::default()
        };
        let prompt = compose_messages(
            "Write a post",
            &guidelines(),
            &["A past campaign".to_string()],
            &["A website excerpt".to_string()],
            Some("LinkedIn text"),
            &[WebSearchResult {
                title: "Hit".to_string(),
                url: "https://example.com".to_string(),
                snippet: "Snippet".to_string(),
            }],
            &options,
        );

        let order = [
            "### Brand Guidelines",
            "### LinkedIn Context",
            "### Website Blog Excerpts",
            "### Web Search Results",
            "### Suggested Web Searches",
            "### Similar Past Campaigns",
            "### Channel\n",
            "### Channel Style Examples",
            "### User Request",
            "### Output Instructions",
        ];
        let mut last = 0;
        for marker in order {
            let pos = prompt.user.find(marker).unwrap_or_else(|| {
                panic!("missing section {marker:?}");
            });
            assert!(pos > last || last == 0, "section {marker:?} out of order");
            last = pos;
        }
    }

    #[test]
    fn blog_exemplars_are_complete_and_capped_at_two() {
        let options = ComposeOptions {
            channel: Channel::Blog,
            ..ComposeOptions::default()
        };
        let prompt = compose_messages(
            "Write an article",
            &GuidelineSet::default(),
            &[],
            &[],
            None,
            &[],
            &options,
        );
        let count = prompt.user.matches("Style example ").count();
        assert_eq!(count, BLOG_EXEMPLAR_LIMIT);
        // Full text: no truncation marker inside the exemplar block.
        for exemplar in crate::exemplars::exemplars_for(Channel::Blog) {
            assert!(prompt.user.contains(exemplar));
        }
    }

    #[test]
    fn short_form_exemplars_are_truncated_with_a_marker() {
        let prompt = compose_messages(
            "Write a post",
            &GuidelineSet::default(),
            &[],
            &[],
            None,
            &[],
            &ComposeOptions::default(),
        );
        for exemplar in crate::exemplars::exemplars_for(Channel::Linkedin) {
            if exemplar.chars().count() > EXEMPLAR_MAX_CHARS {
                let truncated: String = exemplar.chars().take(EXEMPLAR_MAX_CHARS).collect();
                let expected = format!("{truncated}{EXEMPLAR_ELLIPSIS}");
                assert!(prompt.user.contains(&expected));
                assert!(!prompt.user.contains(exemplar));
            }
        }
    }

    #[test]
    fn unknown_channel_falls_back_to_linkedin() {
        assert_eq!(Channel::parse("tiktok"), Channel::Linkedin);
        assert_eq!(Channel::parse(""), Channel::Linkedin);
        assert_eq!(Channel::parse("Blog"), Channel::Blog);
    }

    #[test]
    fn linkedin_context_is_truncated_to_the_cap() {
        let long = "x".repeat(LINKEDIN_CONTEXT_MAX_CHARS + 100);
        let prompt = compose_messages(
            "Write a post",
            &GuidelineSet::default(),
            &[],
            &[],
            Some(&long),
            &[],
            &ComposeOptions::default(),
        );
        assert!(prompt.user.contains("### LinkedIn Context"));
        assert!(!prompt.user.contains(&long));
        let capped = "x".repeat(LINKEDIN_CONTEXT_MAX_CHARS);
        assert!(prompt.user.contains(&capped));
    }

    #[test]
    fn priority_rule_is_stated_in_the_instructions() {
        let prompt = compose_messages(
            "Write a post",
            &GuidelineSet::default(),
            &[],
            &[],
            None,
            &[],
            &ComposeOptions::default(),
        );
        assert!(prompt
            .user
            .contains("prioritize Content Rules > Terminology > Tone > Style"));
        assert!(prompt.system.contains("style and structure references only"));
    }

    #[test]
    fn web_results_are_capped_at_three() {
        let results: Vec<WebSearchResult> = (0..5)
            .map(|i| WebSearchResult {
                title: format!("Result title {i}"),
                url: format!("https://example.com/{i}"),
                snippet: "text".to_string(),
            })
            .collect();
        let prompt = compose_messages(
            "Write a post",
            &GuidelineSet::default(),
            &[],
            &[],
            None,
            &results,
            &ComposeOptions::default(),
        );
        assert!(prompt.user.contains("Result 3:"));
        assert!(!prompt.user.contains("Result 4:"));
    }
}
