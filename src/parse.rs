//! Parser for the research reply format
//!
//! The text model is asked to answer with two literal sections:
//!
//! ```text
//! FACTS:
//! - first fact
//! - second fact
//!
//! IMAGE_PROMPT:
//! a detailed prompt running to the end of the reply
//! ```
//!
//! Headers match case-insensitively. A missing section is reported as
//! absent rather than as an error; the caller decides the fallback.

use std::collections::HashMap;

use crate::prompt::{FACTS_HEADER, IMAGE_PROMPT_HEADER};
use crate::types::SearchResultItem;

/// Maximum number of facts kept from a reply
pub const MAX_FACTS: usize = 5;

/// Sections recovered from a research reply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub facts: Vec<String>,
    /// Trimmed text after `IMAGE_PROMPT:`, `None` when the header is missing
    /// or nothing follows it
    pub image_prompt: Option<String>,
}

pub fn parse_research_reply(text: &str) -> ParsedReply {
    // ASCII lowercasing keeps byte offsets valid for slicing the original
    let folded = text.to_ascii_lowercase();
    let facts_header = FACTS_HEADER.to_ascii_lowercase();
    let prompt_header = IMAGE_PROMPT_HEADER.to_ascii_lowercase();

    let facts = folded
        .find(&facts_header)
        .map(|at| {
            let start = at + facts_header.len();
            let end = folded[start..]
                .find(&prompt_header)
                .map(|rel| start + rel)
                .unwrap_or(text.len());
            parse_facts(&text[start..end])
        })
        .unwrap_or_default();

    let image_prompt = folded
        .find(&prompt_header)
        .map(|at| text[at + prompt_header.len()..].trim())
        .filter(|prompt| !prompt.is_empty())
        .map(str::to_string);

    ParsedReply {
        facts,
        image_prompt,
    }
}

/// Splits a facts block into at most [`MAX_FACTS`] bullet items
pub fn parse_facts(block: &str) -> Vec<String> {
    block
        .lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .take(MAX_FACTS)
        .map(str::to_string)
        .collect()
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    match line.strip_prefix('-') {
        Some(rest) => rest.trim(),
        None => line,
    }
}

/// Collapses citations sharing a url. The entry keeps the position of the
/// url's first appearance and the title of its last.
pub fn dedup_by_url(items: impl IntoIterator<Item = SearchResultItem>) -> Vec<SearchResultItem> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<SearchResultItem> = Vec::new();

    for item in items {
        match positions.get(&item.url) {
            Some(&index) => unique[index].title = item.title,
            None => {
                positions.insert(item.url.clone(), unique.len());
                unique.push(item);
            }
        }
    }

    unique
}
