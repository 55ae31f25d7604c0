//! Analysis engine running the fixed forward pipeline

use crate::analysis::ats::AtsScorer;
use crate::analysis::findings::FindingsAnalyzer;
use crate::analysis::jd::JdMatcher;
use crate::analysis::keywords::KeywordSet;
use crate::analysis::normalizer::TextNormalizer;
use crate::analysis::skills::skill_presence;
use crate::analysis::tips::TipGenerator;
use crate::config::Config;
use crate::error::Result;
use crate::output::report::{AnalysisReport, ReportMetadata};
use std::time::Instant;

/// Coordinates the analysis components: normalize, score, findings, tips,
/// JD overlap, skill chart. One invocation per upload, no state carried
/// between runs.
pub struct AnalysisEngine {
    normalizer: TextNormalizer,
    scorer: AtsScorer,
    findings: FindingsAnalyzer,
    tips: TipGenerator,
    jd: JdMatcher,
    skill_chart: Vec<String>,
}

impl AnalysisEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            normalizer: TextNormalizer::new(),
            scorer: AtsScorer::new(
                config.scoring.keyword_weight,
                config.scoring.length_weight,
                config.scoring.target_word_count,
            ),
            findings: FindingsAnalyzer::new(
                config.analysis.technical_skills.clone(),
                config.analysis.min_word_count,
            ),
            tips: TipGenerator::new(config.analysis.tip_rules.clone()),
            jd: JdMatcher::new(config.jd.min_token_len, config.jd.max_missing_keywords),
            skill_chart: config.analysis.skill_chart.clone(),
        }
    }

    pub fn analyze(
        &self,
        raw_text: &str,
        jd_text: Option<&str>,
        keywords: &KeywordSet,
        resume_name: &str,
    ) -> Result<AnalysisReport> {
        let started = Instant::now();

        let text = self.normalizer.normalize(raw_text);
        let ats = self.scorer.score(&text, keywords)?;
        let findings = self.findings.analyze(&text);
        let tips = self.tips.generate(&findings.weaknesses);
        let jd_match = jd_text.and_then(|jd| self.jd.match_against(jd, &text));
        let skill_chart = skill_presence(&self.skill_chart, &text);

        Ok(AnalysisReport {
            ats,
            findings,
            tips,
            jd_match,
            skill_chart,
            metadata: ReportMetadata {
                generated_at: chrono::Utc::now(),
                analyzer_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_name.to_string(),
                keyword_count: keywords.len(),
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::findings::{EXTRACTION_WEAKNESS, PROJECT_STRENGTH, TECHNICAL_STRENGTH};

    fn engine() -> AnalysisEngine {
        AnalysisEngine::new(&Config::default())
    }

    fn keywords() -> KeywordSet {
        KeywordSet::from_phrases(vec![
            "python".to_string(),
            "java".to_string(),
            "sql".to_string(),
            "machine learning".to_string(),
            "data analysis".to_string(),
        ])
    }

    #[test]
    fn pipeline_normalizes_before_scoring() {
        // Punctuation and case differences must not break keyword hits.
        let raw = "Built a MACHINE-LEARNING project; used Python & SQL!";
        let report = engine().analyze(raw, None, &keywords(), "resume.txt").unwrap();

        // "machine-learning" loses its hyphen but gains no space, so only
        // python and sql match.
        assert_eq!(report.ats.matched_keywords, vec!["python", "sql"]);
        assert!(report.findings.strengths.contains(&TECHNICAL_STRENGTH.to_string()));
        assert!(report.findings.strengths.contains(&PROJECT_STRENGTH.to_string()));
    }

    #[test]
    fn empty_resume_reports_extraction_failure() {
        let report = engine().analyze("", None, &keywords(), "resume.pdf").unwrap();

        assert_eq!(report.ats.score, 0);
        assert!(report.findings.strengths.is_empty());
        assert_eq!(report.findings.weaknesses, vec![EXTRACTION_WEAKNESS.to_string()]);
        assert_eq!(
            report.tips,
            vec!["Ensure the resume is text-based and not a scanned image PDF.".to_string()]
        );
        assert!(report.skill_chart.iter().all(|row| !row.present));
    }

    #[test]
    fn jd_is_optional_and_absent_when_blank() {
        let report = engine()
            .analyze("some resume text", Some("   "), &keywords(), "resume.txt")
            .unwrap();
        assert!(report.jd_match.is_none());

        let report = engine()
            .analyze("python developer resume", Some("python developer"), &keywords(), "resume.txt")
            .unwrap();
        let jd = report.jd_match.unwrap();
        assert_eq!(jd.score, 100);
    }

    #[test]
    fn metadata_records_inputs() {
        let report = engine().analyze("text", None, &keywords(), "cv.pdf").unwrap();
        assert_eq!(report.metadata.resume_file, "cv.pdf");
        assert_eq!(report.metadata.keyword_count, 5);
    }
}
