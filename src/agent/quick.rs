//! Canned answers for canonical question phrasings.
//!
//! Cheap shortcut ahead of retrieval and generation: first trigger whose
//! string appears in the lowercased question wins, no scoring. The table is
//! an ordered slice so the first-match rule is deterministic.

use crate::corpus::data::QUICK_ANSWERS;

pub fn quick_answer(question: &str) -> Option<&'static str> {
    let lower = question.to_lowercase();
    QUICK_ANSWERS
        .iter()
        .find(|(trigger, _)| lower.contains(trigger))
        .map(|(_, answer)| *answer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_phrasing_hits() {
        let answer = quick_answer("What is Story Protocol?").unwrap();
        assert!(answer.starts_with("Story Protocol is the world's IP blockchain"));
    }

    #[test]
    fn test_trigger_matches_inside_longer_question() {
        let answer = quick_answer("hey, quick one: how do royalties work on mainnet?").unwrap();
        assert!(answer.contains("automatically distributed"));
    }

    #[test]
    fn test_first_trigger_in_definition_order_wins() {
        // Contains both the "what is story protocol" and "what is spg"
        // triggers; the earlier table entry must win.
        let question = "what is story protocol and what is spg";
        let answer = quick_answer(question).unwrap();
        assert_eq!(answer, QUICK_ANSWERS[0].1);
    }

    #[test]
    fn test_no_trigger_no_answer() {
        assert!(quick_answer("explain derivative licensing fees").is_none());
    }
}
