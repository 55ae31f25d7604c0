//! CLI interface for the resume analyzer

use clap::{Parser, Subcommand};
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Resume ATS scoring with strengths, weaknesses, and improvement tips")]
#[command(long_about = "Score a resume against a keyword list and an optional job description: \
ATS-style keyword coverage, strength/weakness findings, improvement tips, and a downloadable report")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (TXT, MD)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Inline job description text (takes precedence over --job)
        #[arg(long)]
        job_text: Option<String>,

        /// Keyword asset file, overriding the configured path
        #[arg(short, long)]
        keywords: Option<PathBuf>,

        /// Output format: console, json, text, html, pdf
        #[arg(short, long, default_value = "console")]
        output: String,

        /// Save the report to a file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Show the full keyword and skill breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Keyword asset commands
    Keywords {
        #[command(subcommand)]
        action: KeywordAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum KeywordAction {
    /// List the keywords loaded from the asset file
    List,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "text" | "txt" => Ok(crate::config::OutputFormat::Text),
        "html" => Ok(crate::config::OutputFormat::Html),
        "pdf" => Ok(crate::config::OutputFormat::Pdf),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, text, html, pdf",
            format
        )),
    }
}

/// Validate file extension. Extensionless files pass; their type is sniffed
/// from content at extraction time.
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Ok(()),
    }
}
