//! Integration tests for the resume analyzer

use resume_analyzer::analysis::engine::AnalysisEngine;
use resume_analyzer::analysis::keywords::KeywordSet;
use resume_analyzer::config::{Config, OutputFormat};
use resume_analyzer::input::manager::InputManager;
use resume_analyzer::output::formatter::{ReportArtifact, ReportGenerator};
use std::path::Path;

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("machine learning"));
    assert!(text.contains("Docker"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("John Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("machine learning"));
    // Markdown structure must not leak into the extracted text
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_full_analysis_pipeline() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let jd_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();

    let keywords = KeywordSet::load(Path::new("assets/keywords.txt")).unwrap();
    let engine = AnalysisEngine::new(&Config::default());

    let report = engine
        .analyze(&resume_text, Some(&jd_text), &keywords, "sample_resume.txt")
        .unwrap();

    assert!(report.ats.score > 0);
    assert!(report.ats.score <= 100);
    assert!(report
        .findings
        .strengths
        .contains(&"Strong technical skill presence".to_string()));
    assert!(report
        .findings
        .strengths
        .contains(&"Hands-on project experience".to_string()));
    // The fixture mentions no internship and is under 300 words
    assert!(report
        .findings
        .weaknesses
        .contains(&"Internship or real-world experience not mentioned".to_string()));
    assert!(report
        .findings
        .weaknesses
        .contains(&"Resume content is too brief for ATS optimization".to_string()));
    assert_eq!(report.tips.len(), 2);

    let jd = report.jd_match.as_ref().unwrap();
    assert!(jd.score > 0);
    assert!(jd.score < 100);
    assert!(jd.missing_keywords.contains(&"kubernetes".to_string()));
    assert!(jd.missing_keywords.contains(&"terraform".to_string()));
    assert!(jd.missing_keywords.len() <= 10);

    let python_row = report
        .skill_chart
        .iter()
        .find(|row| row.skill == "python")
        .unwrap();
    assert!(python_row.present);
}

#[tokio::test]
async fn test_analysis_without_job_description() {
    let mut manager = InputManager::new();
    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    let keywords = KeywordSet::load(Path::new("assets/keywords.txt")).unwrap();
    let engine = AnalysisEngine::new(&Config::default());

    let report = engine
        .analyze(&resume_text, None, &keywords, "sample_resume.txt")
        .unwrap();

    assert!(report.jd_match.is_none());

    let generator = ReportGenerator::with_options(false, false, true);
    let artifact = generator.generate(&report, &OutputFormat::Text).unwrap();
    match artifact {
        ReportArtifact::Text(content) => {
            assert!(content.contains("AI RESUME ANALYSIS REPORT"));
            assert!(content.contains("STRENGTHS:"));
            assert!(content.contains("WEAKNESSES:"));
            assert!(content.contains("TOP 5 IMPROVEMENTS:"));
            assert!(content.contains("JD Match Score: N/A (no job description provided)"));
        }
        ReportArtifact::Binary(_) => panic!("text format must produce a text artifact"),
    }
}

#[tokio::test]
async fn test_missing_keyword_asset_is_fatal() {
    let result = KeywordSet::load(Path::new("assets/nonexistent_keywords.txt"));
    assert!(result.is_err());
}

#[test]
fn test_report_saving_round_trip() {
    let keywords = KeywordSet::from_phrases(vec!["python".to_string()]);
    let engine = AnalysisEngine::new(&Config::default());
    let report = engine
        .analyze("a short python resume", None, &keywords, "resume.txt")
        .unwrap();

    let generator = ReportGenerator::with_options(false, false, true);
    let artifact = generator.generate(&report, &OutputFormat::Html).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.html");
    artifact.write_to(&path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert!(saved.contains("AI Resume Analysis Report"));
}
