pub mod data;
pub mod types;

use std::cmp::Reverse;
use std::path::Path;

use tracing::{info, warn};

use types::DocSection;

/// Read-only view over the documentation corpus.
///
/// Populated once at construction and shared across requests; nothing here
/// mutates after that.
pub struct CorpusStore {
    sections: &'static [DocSection],
}

impl CorpusStore {
    pub fn new() -> Self {
        Self {
            sections: data::STORY_DOCS,
        }
    }

    /// Build a store over an alternate section table.
    pub fn with_sections(sections: &'static [DocSection]) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &'static [DocSection] {
        self.sections
    }

    /// Keyword search: splits the query into lowercase tokens, matches ANY
    /// token as a substring of title + content + keywords (OR logic), and
    /// ranks by the number of distinct tokens that hit. Ties keep corpus
    /// order. A blank query returns the full corpus in definition order,
    /// which is the "give me everything" call path.
    pub fn search(&self, query: &str) -> Vec<&'static DocSection> {
        let tokens: Vec<String> = query
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();

        if tokens.is_empty() {
            return self.sections.iter().collect();
        }

        let mut hits: Vec<(usize, &'static DocSection)> = Vec::new();
        for section in self.sections {
            let haystack = searchable_text(section);
            let matches = tokens
                .iter()
                .filter(|t| haystack.contains(t.as_str()))
                .count();
            if matches > 0 {
                hits.push((matches, section));
            }
        }

        // sort_by_key is stable, so equal counts preserve definition order
        hits.sort_by_key(|(matches, _)| Reverse(*matches));
        hits.into_iter().map(|(_, section)| section).collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&'static DocSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn by_category(&self, category: &str) -> Vec<&'static DocSection> {
        self.sections
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Distinct categories in definition order.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for section in self.sections {
            if !seen.contains(&section.category) {
                seen.push(section.category);
            }
        }
        seen
    }

    /// Join every section into one markdown text. This is the synthesized
    /// knowledge base used when no combined docs file is available.
    pub fn combined_text(&self) -> String {
        self.sections
            .iter()
            .map(|s| format!("# {}\n\n{}\n\n", s.title, s.content))
            .collect()
    }
}

impl Default for CorpusStore {
    fn default() -> Self {
        Self::new()
    }
}

fn searchable_text(section: &DocSection) -> String {
    format!(
        "{} {} {}",
        section.title,
        section.content,
        section.keywords.join(" ")
    )
    .to_lowercase()
}

/// The free-text knowledge source backing context extraction.
///
/// A file on disk supersedes the synthesized form; both are loaded once and
/// immutable afterwards. Reloading means rebuilding the agent.
pub enum Knowledge {
    /// Raw documentation text loaded from disk (e.g. docs/combined.md).
    File(String),
    /// Fallback join of the structured corpus.
    Synthesized(String),
}

impl Knowledge {
    /// Load the knowledge base from `path`, synthesizing from the corpus
    /// when the file is missing, unreadable, or empty.
    pub fn load(path: &Path, corpus: &CorpusStore) -> Self {
        match std::fs::read_to_string(path) {
            Ok(text) if !text.trim().is_empty() => {
                info!(path = %path.display(), size = text.len(), "Loaded knowledge base");
                Knowledge::File(text)
            }
            Ok(_) => {
                warn!(path = %path.display(), "Knowledge base file is empty, synthesizing from corpus");
                Knowledge::Synthesized(corpus.combined_text())
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "Knowledge base not found, synthesizing from corpus");
                Knowledge::Synthesized(corpus.combined_text())
            }
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Knowledge::File(text) | Knowledge::Synthesized(text) => text,
        }
    }
}
