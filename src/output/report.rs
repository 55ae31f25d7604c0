//! Analysis report data model

use crate::analysis::ats::AtsScore;
use crate::analysis::findings::Findings;
use crate::analysis::jd::JdMatch;
use crate::analysis::skills::SkillPresence;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one analysis run produces, in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub ats: AtsScore,
    pub findings: Findings,
    pub tips: Vec<String>,
    /// Absent when no job description was provided or it was blank.
    pub jd_match: Option<JdMatch>,
    pub skill_chart: Vec<SkillPresence>,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub analyzer_version: String,
    pub resume_file: String,
    pub keyword_count: usize,
    pub processing_time_ms: u64,
}

/// Display band for a 0-100 score: green from 70, orange from 50, red below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Strong,
    Moderate,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: u8) -> Self {
        match score {
            70..=u8::MAX => ScoreBand::Strong,
            50..=69 => ScoreBand::Moderate,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "STRONG",
            ScoreBand::Moderate => "MODERATE",
            ScoreBand::Weak => "WEAK",
        }
    }

    /// CSS class used by the HTML report.
    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "score-strong",
            ScoreBand::Moderate => "score-moderate",
            ScoreBand::Weak => "score-weak",
        }
    }
}

impl AnalysisReport {
    /// One-line verdict for the summary header.
    pub fn verdict(&self) -> &'static str {
        match ScoreBand::from_score(self.ats.score) {
            ScoreBand::Strong => "Well optimized for ATS screening",
            ScoreBand::Moderate => "Partially optimized, targeted improvements recommended",
            ScoreBand::Weak => "Likely to be filtered out by ATS screening",
        }
    }

    /// At most five tips, in generation order.
    pub fn top_tips(&self) -> &[String] {
        &self.tips[..self.tips.len().min(5)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_follow_display_thresholds() {
        assert_eq!(ScoreBand::from_score(100), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(70), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(69), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(50), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(49), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(0), ScoreBand::Weak);
    }
}
