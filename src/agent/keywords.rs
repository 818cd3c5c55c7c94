//! Question text utilities: normalization and keyword extraction.

/// Dropped during keyword extraction: articles, auxiliaries, prepositions,
/// wh-words, modals.
const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "can", "must", "how", "what", "when",
    "where", "why", "who",
];

const MAX_KEYWORDS: usize = 10;

/// Collapse whitespace runs and trim. Applied once before gating so every
/// downstream substring test sees the same text.
pub fn normalize_question(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce a question to its salient terms: lowercase, strip punctuation,
/// drop short tokens and stop words, keep the first ten survivors in
/// original order. Pure function.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|w| w.len() > 2 && !STOP_WORDS.contains(w))
        .take(MAX_KEYWORDS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(
            normalize_question("  what   is\n\nstory  protocol? "),
            "what is story protocol?"
        );
    }

    #[test]
    fn test_extract_drops_stop_words_and_short_tokens() {
        let keywords = extract_keywords("How do I register an IP asset on Story Protocol?");
        assert_eq!(keywords, vec!["register", "asset", "story", "protocol"]);
    }

    #[test]
    fn test_extract_strips_punctuation() {
        let keywords = extract_keywords("royalties, derivatives... licensing!");
        assert_eq!(keywords, vec!["royalties", "derivatives", "licensing"]);
    }

    #[test]
    fn test_extract_caps_at_ten() {
        let text = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima";
        assert_eq!(extract_keywords(text).len(), 10);
    }

    #[test]
    fn test_extract_is_idempotent() {
        let text = "How does royalty distribution work for derivative works?";
        let first = extract_keywords(text);
        let second = extract_keywords(text);
        assert_eq!(first, second);
    }

    #[test]
    fn test_extract_preserves_order() {
        let keywords = extract_keywords("licensing before royalties before derivatives");
        assert_eq!(keywords, vec!["licensing", "before", "royalties", "before", "derivatives"]);
    }
}
