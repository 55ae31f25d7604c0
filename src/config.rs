//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub keywords: KeywordConfig,
    pub scoring: ScoringConfig,
    pub analysis: AnalysisConfig,
    pub jd: JdConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Comma-separated keyword phrases, re-read on every analysis run.
    pub asset_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub keyword_weight: f64,
    pub length_weight: f64,
    pub target_word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Skills whose presence counts as a technical-skill strength.
    pub technical_skills: Vec<String>,
    /// Skills shown in the presence chart. Display only, no score weight.
    pub skill_chart: Vec<String>,
    /// Ordered trigger -> advice rules applied to weakness strings.
    pub tip_rules: Vec<TipRule>,
    pub min_word_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipRule {
    pub trigger: String,
    pub advice: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdConfig {
    /// JD tokens must be strictly longer than this to count as important.
    pub min_token_len: usize,
    pub max_missing_keywords: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
    pub detailed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Text,
    Html,
    Pdf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keywords: KeywordConfig {
                asset_path: PathBuf::from("assets/keywords.txt"),
            },
            scoring: ScoringConfig {
                keyword_weight: 70.0,
                length_weight: 30.0,
                target_word_count: 300,
            },
            analysis: AnalysisConfig {
                technical_skills: vec![
                    "python".to_string(),
                    "java".to_string(),
                    "sql".to_string(),
                    "machine learning".to_string(),
                    "data analysis".to_string(),
                ],
                skill_chart: vec![
                    "python".to_string(),
                    "java".to_string(),
                    "sql".to_string(),
                    "machine learning".to_string(),
                    "data analysis".to_string(),
                    "deep learning".to_string(),
                    "cloud computing".to_string(),
                    "git".to_string(),
                    "communication".to_string(),
                    "leadership".to_string(),
                ],
                tip_rules: default_tip_rules(),
                min_word_count: 300,
            },
            jd: JdConfig {
                min_token_len: 4,
                max_missing_keywords: 10,
            },
            output: OutputConfig {
                format: OutputFormat::Console,
                color_output: true,
                detailed: false,
            },
        }
    }
}

fn default_tip_rules() -> Vec<TipRule> {
    vec![
        TipRule {
            trigger: "internship".to_string(),
            advice: "Add internships, freelance projects, or industry experience to improve credibility.".to_string(),
        },
        TipRule {
            trigger: "brief".to_string(),
            advice: "Expand bullet points with measurable achievements, tools used, and outcomes.".to_string(),
        },
        TipRule {
            trigger: "extract".to_string(),
            advice: "Ensure the resume is text-based and not a scanned image PDF.".to_string(),
        },
    ]
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }
}
