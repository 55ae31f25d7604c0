//! Job-description keyword overlap

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Overlap between the job description's important words and the resume's
/// word tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdMatch {
    /// floor(matched / max(important, 1) * 100)
    pub score: u8,
    /// Matched occurrences, duplicates counted.
    pub matched_count: usize,
    /// Important JD words, duplicates counted.
    pub important_count: usize,
    /// Unique important words absent from the resume, capped, in
    /// unspecified order.
    pub missing_keywords: Vec<String>,
}

pub struct JdMatcher {
    token: Regex,
    min_token_len: usize,
    max_missing: usize,
}

impl JdMatcher {
    pub fn new(min_token_len: usize, max_missing: usize) -> Self {
        let token = Regex::new(r"\b\w+\b").expect("Invalid token regex");

        Self {
            token,
            min_token_len,
            max_missing,
        }
    }

    /// Returns `None` for a blank job description: the score is absent, not
    /// zero. Resume tokens come from the already-normalized resume text;
    /// matching is exact-token, unlike the substring checks elsewhere.
    pub fn match_against(&self, jd_text: &str, resume_text: &str) -> Option<JdMatch> {
        if jd_text.trim().is_empty() {
            return None;
        }

        let jd_lower = jd_text.to_lowercase();

        // Duplicates deliberately kept: a word repeated in the JD counts
        // repeatedly in both numerator and denominator.
        let important: Vec<&str> = self
            .token
            .find_iter(&jd_lower)
            .map(|m| m.as_str())
            .filter(|word| word.chars().count() > self.min_token_len)
            .collect();

        let resume_words: HashSet<&str> =
            self.token.find_iter(resume_text).map(|m| m.as_str()).collect();

        let matched_count = important
            .iter()
            .filter(|word| resume_words.contains(**word))
            .count();

        let missing_set: HashSet<&str> = important
            .iter()
            .copied()
            .filter(|word| !resume_words.contains(*word))
            .collect();

        let missing_keywords: Vec<String> = missing_set
            .into_iter()
            .take(self.max_missing)
            .map(str::to_string)
            .collect();

        let score =
            (matched_count as f64 / important.len().max(1) as f64 * 100.0).floor() as u8;

        Some(JdMatch {
            score,
            matched_count,
            important_count: important.len(),
            missing_keywords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_matcher() -> JdMatcher {
        JdMatcher::new(4, 10)
    }

    #[test]
    fn blank_jd_yields_no_match_result() {
        let matcher = default_matcher();
        assert!(matcher.match_against("", "some resume text").is_none());
        assert!(matcher.match_against("   \n\t ", "some resume text").is_none());
    }

    #[test]
    fn only_words_longer_than_four_chars_are_important() {
        let result = default_matcher()
            .match_against("Looking for experience with distributed systems and databases", "")
            .unwrap();
        // looking, experience, distributed, systems, databases; "with" is
        // exactly four characters and excluded
        assert_eq!(result.important_count, 5);
    }

    #[test]
    fn missing_words_appear_in_missing_list() {
        let resume = "worked on backend services with postgres";
        let result = default_matcher()
            .match_against("Looking for experience with distributed systems and databases", resume)
            .unwrap();

        assert!(result.missing_keywords.contains(&"distributed".to_string()));
        assert!(result.missing_keywords.contains(&"databases".to_string()));
    }

    #[test]
    fn matching_is_exact_token_not_substring() {
        // "system" as a resume token does not match the JD word "systems"
        let result = default_matcher()
            .match_against("distributed systems", "system design work")
            .unwrap();
        assert_eq!(result.matched_count, 0);
    }

    #[test]
    fn duplicates_count_in_numerator_and_denominator() {
        let result = default_matcher()
            .match_against("python python testing", "python developer")
            .unwrap();
        // important: python, python, testing; matched: python twice
        assert_eq!(result.important_count, 3);
        assert_eq!(result.matched_count, 2);
        assert_eq!(result.score, 66);
        // missing list is unique
        assert_eq!(result.missing_keywords, vec!["testing".to_string()]);
    }

    #[test]
    fn full_overlap_scores_100() {
        let result = default_matcher()
            .match_against("python developer", "senior python developer resume")
            .unwrap();
        assert_eq!(result.score, 100);
        assert!(result.missing_keywords.is_empty());
    }

    #[test]
    fn missing_list_is_capped_at_ten() {
        let jd = "alpha1 bravo2 charlie3 delta4 echo55 foxtrot golf77 hotel8 india9 juliet kilo11 lima12";
        let result = default_matcher().match_against(jd, "unrelated resume").unwrap();
        assert_eq!(result.missing_keywords.len(), 10);
    }
}
