use regex::Regex;
use std::sync::LazyLock;

pub const NO_TITLE: &str = "No title found";
pub const NO_SUMMARY: &str = "No summary found";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Title:\s*["']?([^"'\n]+)"#).expect("title pattern"));
static TAGS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Tags:\s*\[([^\]]+)\]").expect("tags pattern"));
static SUMMARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"Summary:\s*["']?([^"'\n]+)"#).expect("summary pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedResponse {
    pub title: String,
    pub tags: Vec<String>,
    pub summary: String,
}

/// Turns raw model output into the three fields we keep.
///
/// Implementations never fail: missing fields fall back to placeholder values.
pub trait ResponseParser {
    fn parse(&self, raw: &str) -> ParsedResponse;
}

/// Best-effort extraction of `Title:`, `Tags: [...]` and `Summary:` lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LabeledFieldParser;

impl ResponseParser for LabeledFieldParser {
    fn parse(&self, raw: &str) -> ParsedResponse {
        parse_response(raw)
    }
}

pub fn parse_response(raw: &str) -> ParsedResponse {
    let title = first_capture(&TITLE_RE, raw).unwrap_or_else(|| NO_TITLE.to_string());
    let summary = first_capture(&SUMMARY_RE, raw).unwrap_or_else(|| NO_SUMMARY.to_string());

    let tags = TAGS_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|list| split_tags(list.as_str()))
        .unwrap_or_default();

    ParsedResponse {
        title,
        tags,
        summary,
    }
}

fn first_capture(re: &Regex, raw: &str) -> Option<String> {
    re.captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}

// Whitespace is trimmed before quotes, not after, so `' ai'` keeps its inner space.
fn split_tags(list: &str) -> Vec<String> {
    list.split(',')
        .map(|tag| tag.trim().trim_matches(&['\'', '"'][..]).to_string())
        .collect()
}
