use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("valid URL regex"));

/// One run of description text: plain prose, or a bare URL the renderer
/// should turn into a link.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum DescriptionSegment {
    Text(String),
    Link(String),
}

/// Splits free text into prose and link segments on bare `http(s)://` URLs.
pub fn linkify(text: &str) -> Vec<DescriptionSegment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for found in URL_RE.find_iter(text) {
        if found.start() > last {
            segments.push(DescriptionSegment::Text(text[last..found.start()].to_string()));
        }
        segments.push(DescriptionSegment::Link(found.as_str().to_string()));
        last = found.end();
    }
    if last < text.len() {
        segments.push(DescriptionSegment::Text(text[last..].to_string()));
    }

    segments
}
