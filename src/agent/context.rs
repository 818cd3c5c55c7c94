//! Context assembly for the completion backend.
//!
//! Two strategies behind one seam. Section-scored mode splits raw knowledge
//! text at heading lines and ranks sections by keyword occurrence counts.
//! Document-list mode formats ranked corpus-search results as titled
//! blocks. Both bound their output so the downstream completion call stays
//! within its input capacity; caps are counted in characters, never bytes.

use std::cmp::Reverse;

use super::keywords;
use crate::corpus::types::DocSection;
use crate::corpus::{CorpusStore, Knowledge};

/// Character cap for the section-scored strategy, ellipsis included.
pub const SCORED_CONTEXT_CAP: usize = 10_000;
/// Character cap for the raw-prefix fallback when nothing scores.
pub const RAW_CONTEXT_CAP: usize = 8_000;
/// Appended when the scored context is cut at the cap.
pub const ELLIPSIS: &str = "\n\n...";

const MAX_SCORED_SECTIONS: usize = 5;
const MAX_LISTED_SECTIONS: usize = 3;

/// Pick the strategy for the knowledge shape at hand: a real documentation
/// file is the richer free-text source, so score its sections; a
/// synthesized knowledge base defers to live corpus search, with the raw
/// prefix as the zero-result floor.
pub fn build(knowledge: &Knowledge, corpus: &CorpusStore, question: &str) -> String {
    match knowledge {
        Knowledge::File(text) => from_knowledge(text, question),
        Knowledge::Synthesized(text) => {
            let hits = corpus.search(question);
            if hits.is_empty() {
                head_chars(text, RAW_CONTEXT_CAP)
            } else {
                from_sections(&hits)
            }
        }
    }
}

/// Section-scored mode: split at heading lines, score each section by
/// summed case-insensitive keyword occurrences, keep positive scorers,
/// take the top five (stable on ties), and join with blank lines. Falls
/// back to the leading slice of the raw text when nothing scores.
pub fn from_knowledge(text: &str, question: &str) -> String {
    let question_keywords = keywords::extract_keywords(question);

    let mut scored: Vec<(usize, String)> = split_sections(text)
        .into_iter()
        .filter_map(|section| {
            let lower = section.to_lowercase();
            let score: usize = question_keywords
                .iter()
                .map(|k| lower.matches(k.as_str()).count())
                .sum();
            (score > 0).then_some((score, section))
        })
        .collect();

    if scored.is_empty() {
        return head_chars(text, RAW_CONTEXT_CAP);
    }

    scored.sort_by_key(|(score, _)| Reverse(*score));

    let combined = scored
        .iter()
        .take(MAX_SCORED_SECTIONS)
        .map(|(_, section)| section.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    if combined.chars().count() > SCORED_CONTEXT_CAP {
        let mut out = head_chars(&combined, SCORED_CONTEXT_CAP - ELLIPSIS.len());
        out.push_str(ELLIPSIS);
        out
    } else {
        combined
    }
}

/// Document-list mode: up to the top three search results as titled
/// blocks.
pub fn from_sections(sections: &[&DocSection]) -> String {
    sections
        .iter()
        .take(MAX_LISTED_SECTIONS)
        .map(|s| format!("## {}\n\n{}", s.title, s.content))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Split raw knowledge text into sections at heading lines. A heading is
/// any line whose first non-whitespace character is `#`. Text before the
/// first heading forms its own section.
fn split_sections(text: &str) -> Vec<String> {
    let mut sections = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim_start().starts_with('#') && !current.trim().is_empty() {
            sections.push(current.trim().to_string());
            current.clear();
        }
        current.push_str(line);
        current.push('\n');
    }
    if !current.trim().is_empty() {
        sections.push(current.trim().to_string());
    }

    sections
}

fn head_chars(text: &str, cap: usize) -> String {
    text.chars().take(cap).collect()
}
