//! ATS keyword coverage and length scoring

use crate::analysis::keywords::KeywordSet;
use crate::analysis::normalizer::word_count;
use crate::error::{Result, ResumeAnalyzerError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Score breakdown for one resume against one keyword list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtsScore {
    /// Final score, 0-100.
    pub score: u8,
    pub keyword_points: f64,
    pub length_points: f64,
    /// Keyword entries found as substrings, in list order, duplicates kept.
    pub matched_keywords: Vec<String>,
    pub total_keywords: usize,
    pub word_count: usize,
}

impl AtsScore {
    fn empty(total_keywords: usize, word_count: usize) -> Self {
        Self {
            score: 0,
            keyword_points: 0.0,
            length_points: 0.0,
            matched_keywords: Vec::new(),
            total_keywords,
            word_count,
        }
    }
}

/// Scores normalized resume text: keyword coverage weighted at 70 points,
/// length at 30, summed and floored.
pub struct AtsScorer {
    keyword_weight: f64,
    length_weight: f64,
    target_word_count: usize,
}

impl AtsScorer {
    pub fn new(keyword_weight: f64, length_weight: f64, target_word_count: usize) -> Self {
        Self {
            keyword_weight,
            length_weight,
            target_word_count,
        }
    }

    /// Empty text or an empty keyword list scores 0. A keyword matches when
    /// its lowercase form occurs anywhere in the text; no word boundaries.
    /// The length component is computed independently of keyword hits.
    pub fn score(&self, text: &str, keywords: &KeywordSet) -> Result<AtsScore> {
        let words = word_count(text);

        if text.is_empty() || keywords.is_empty() {
            return Ok(AtsScore::empty(keywords.len(), words));
        }

        let matched_keywords = self.find_matches(text, keywords)?;

        let keyword_points =
            matched_keywords.len() as f64 / keywords.len() as f64 * self.keyword_weight;

        let length_points = if words >= self.target_word_count {
            self.length_weight
        } else {
            words as f64 / self.target_word_count as f64 * self.length_weight
        };

        let score = (keyword_points + length_points).floor().min(100.0) as u8;

        Ok(AtsScore {
            score,
            keyword_points,
            length_points,
            matched_keywords,
            total_keywords: keywords.len(),
            word_count: words,
        })
    }

    /// One automaton pass over the text instead of a substring scan per
    /// keyword; the hit set is then mapped back onto list entries so that
    /// duplicated entries are each counted.
    fn find_matches(&self, text: &str, keywords: &KeywordSet) -> Result<Vec<String>> {
        let patterns: Vec<String> = keywords
            .phrases()
            .iter()
            .map(|phrase| phrase.to_lowercase())
            .collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                ResumeAnalyzerError::Configuration(format!("Failed to build keyword matcher: {}", e))
            })?;

        let mut found: HashSet<&str> = HashSet::new();
        for mat in matcher.find_overlapping_iter(text) {
            found.insert(patterns[mat.pattern().as_usize()].as_str());
        }

        Ok(keywords
            .phrases()
            .iter()
            .filter(|phrase| found.contains(phrase.to_lowercase().as_str()))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_scorer() -> AtsScorer {
        AtsScorer::new(70.0, 30.0, 300)
    }

    fn default_keywords() -> KeywordSet {
        KeywordSet::from_phrases(vec![
            "python".to_string(),
            "java".to_string(),
            "sql".to_string(),
            "machine learning".to_string(),
            "data analysis".to_string(),
        ])
    }

    #[test]
    fn empty_text_scores_zero() {
        let score = default_scorer().score("", &default_keywords()).unwrap();
        assert_eq!(score.score, 0);
        assert!(score.matched_keywords.is_empty());
    }

    #[test]
    fn empty_keyword_list_scores_zero() {
        let keywords = KeywordSet::from_phrases(Vec::new());
        let score = default_scorer().score("plenty of text here", &keywords).unwrap();
        assert_eq!(score.score, 0);
    }

    #[test]
    fn worked_example_scores_42() {
        // 9 words, 3 of 5 keywords matched: 42.0 keyword points plus
        // 9/300*30 = 0.9 length points, floored to 42.
        let text = "built a machine learning project using python and sql";
        let score = default_scorer().score(text, &default_keywords()).unwrap();

        assert_eq!(score.word_count, 9);
        assert_eq!(score.matched_keywords.len(), 3);
        assert!((score.keyword_points - 42.0).abs() < 1e-9);
        assert!((score.length_points - 0.9).abs() < 1e-9);
        assert_eq!(score.score, 42);
    }

    #[test]
    fn full_coverage_long_text_scores_100() {
        let mut text = String::from("python java sql machine learning data analysis ");
        while word_count(&text) < 300 {
            text.push_str("filler ");
        }
        let score = default_scorer().score(&text, &default_keywords()).unwrap();
        assert_eq!(score.score, 100);
    }

    #[test]
    fn duplicate_keywords_count_per_entry() {
        let keywords = KeywordSet::from_phrases(vec![
            "python".to_string(),
            "python".to_string(),
            "java".to_string(),
            "java".to_string(),
        ]);
        let score = default_scorer().score("loves python", &keywords).unwrap();
        // 2 of 4 entries match, so half of the keyword weight.
        assert_eq!(score.matched_keywords, vec!["python", "python"]);
        assert!((score.keyword_points - 35.0).abs() < 1e-9);
    }

    #[test]
    fn substring_matching_has_no_word_boundaries() {
        let keywords = KeywordSet::from_phrases(vec!["java".to_string()]);
        let score = default_scorer().score("senior javascript developer", &keywords).unwrap();
        assert_eq!(score.matched_keywords, vec!["java"]);
    }

    #[test]
    fn score_is_monotonic_in_matches_and_length() {
        let scorer = default_scorer();
        let keywords = default_keywords();

        // More keyword matches, same word count.
        let one = scorer.score("python aa bb cc dd ee ff gg hh", &keywords).unwrap();
        let two = scorer.score("python sql bb cc dd ee ff gg hh", &keywords).unwrap();
        assert_eq!(one.word_count, two.word_count);
        assert!(two.score >= one.score);

        // Same matches, more words.
        let short = scorer.score("python resume", &keywords).unwrap();
        let mut long_text = String::from("python resume ");
        for _ in 0..200 {
            long_text.push_str("word ");
        }
        let long = scorer.score(&long_text, &keywords).unwrap();
        assert!(long.score >= short.score);
        assert!(long.score <= 100);
    }

    #[test]
    fn length_score_is_independent_of_matches() {
        let keywords = KeywordSet::from_phrases(vec!["nowhere".to_string()]);
        let score = default_scorer().score("ten words of text right here in this short resume", &keywords).unwrap();
        assert_eq!(score.matched_keywords.len(), 0);
        assert!((score.length_points - 1.0).abs() < 1e-9);
        assert_eq!(score.score, 1);
    }
}
