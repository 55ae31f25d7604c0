//! Strength and weakness findings

use crate::analysis::normalizer::word_count;
use serde::{Deserialize, Serialize};

pub const EXTRACTION_WEAKNESS: &str = "Resume text could not be extracted properly";
pub const TECHNICAL_STRENGTH: &str = "Strong technical skill presence";
pub const PROJECT_STRENGTH: &str = "Hands-on project experience";
pub const INTERNSHIP_WEAKNESS: &str = "Internship or real-world experience not mentioned";
pub const BREVITY_WEAKNESS: &str = "Resume content is too brief for ATS optimization";

/// Human-readable observations, insertion order preserved for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

pub struct FindingsAnalyzer {
    technical_skills: Vec<String>,
    min_word_count: usize,
}

impl FindingsAnalyzer {
    pub fn new(technical_skills: Vec<String>, min_word_count: usize) -> Self {
        Self {
            technical_skills,
            min_word_count,
        }
    }

    /// All checks are plain substring tests against normalized text, so
    /// "projector" counts as project experience. Empty text short-circuits
    /// to the extraction weakness alone.
    pub fn analyze(&self, text: &str) -> Findings {
        let mut findings = Findings::default();

        if text.is_empty() {
            findings.weaknesses.push(EXTRACTION_WEAKNESS.to_string());
            return findings;
        }

        if self
            .technical_skills
            .iter()
            .any(|skill| text.contains(skill.to_lowercase().as_str()))
        {
            findings.strengths.push(TECHNICAL_STRENGTH.to_string());
        }

        if text.contains("project") {
            findings.strengths.push(PROJECT_STRENGTH.to_string());
        }

        if !text.contains("internship") {
            findings.weaknesses.push(INTERNSHIP_WEAKNESS.to_string());
        }

        if word_count(text) < self.min_word_count {
            findings.weaknesses.push(BREVITY_WEAKNESS.to_string());
        }

        findings
    }
}
