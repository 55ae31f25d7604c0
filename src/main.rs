//! Resume analyzer: ATS scoring with strengths, weaknesses, and tips

mod analysis;
mod cli;
mod config;
mod error;
mod input;
mod output;

use analysis::engine::AnalysisEngine;
use analysis::keywords::KeywordSet;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, KeywordAction};
use config::{Config, OutputFormat};
use error::{Result, ResumeAnalyzerError};
use input::manager::InputManager;
use log::{error, info, warn};
use output::formatter::{suggest_filename, ReportArtifact, ReportGenerator};
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            job_text,
            keywords,
            output,
            save,
            detailed,
            no_color,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Resume file: {}", e)))?;

            if let Some(job_path) = &job {
                cli::validate_file_extension(job_path, &["txt", "md"])
                    .map_err(|e| ResumeAnalyzerError::InvalidInput(format!("Job description file: {}", e)))?;
            }

            let output_format = cli::parse_output_format(&output).map_err(ResumeAnalyzerError::InvalidInput)?;

            info!("Starting resume analysis for {}", resume.display());

            let mut input_manager = InputManager::new();

            let raw_resume = input_manager.extract_text_lenient(&resume).await?;
            if raw_resume.is_empty() {
                warn!("No text extracted from {}", resume.display());
            }

            let jd_input = match (job_text, &job) {
                (Some(inline), _) => Some(inline),
                (None, Some(path)) => Some(input_manager.extract_text(path).await?),
                (None, None) => None,
            };

            // Re-read on every run; a missing asset is fatal for this
            // invocation.
            let keyword_path = keywords.unwrap_or_else(|| config.keywords.asset_path.clone());
            let keyword_set = KeywordSet::load(&keyword_path)?;
            info!("Loaded {} keywords from {}", keyword_set.len(), keyword_path.display());

            let engine = AnalysisEngine::new(&config);
            let report = engine.analyze(
                &raw_resume,
                jd_input.as_deref(),
                &keyword_set,
                &resume.to_string_lossy(),
            )?;

            let use_colors = config.output.color_output && !no_color;
            let generator =
                ReportGenerator::with_options(use_colors, detailed || config.output.detailed, true);

            match generator.generate(&report, &output_format) {
                Ok(artifact) => {
                    deliver_artifact(&artifact, &output_format, save, &resume, &report)?;
                }
                Err(ResumeAnalyzerError::ReportGeneration(msg))
                    if output_format == OutputFormat::Pdf =>
                {
                    // The analysis itself still succeeded; only the
                    // downloadable artifact is unavailable.
                    warn!("PDF report disabled: {}", msg);
                    println!("PDF report unavailable: {}\n", msg);
                    if let ReportArtifact::Text(content) =
                        generator.generate(&report, &OutputFormat::Console)?
                    {
                        println!("{}", content);
                    }
                }
                Err(e) => return Err(e),
            }
        }

        Commands::Keywords { action } => match action {
            KeywordAction::List => {
                let keyword_set = KeywordSet::load(&config.keywords.asset_path)?;
                println!(
                    "{} keywords loaded from {}\n",
                    keyword_set.len(),
                    config.keywords.asset_path.display()
                );
                for phrase in keyword_set.phrases() {
                    println!("  {}", phrase);
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current Configuration\n");
                println!("Keyword asset: {}", config.keywords.asset_path.display());
                println!("\nScoring:");
                println!("  Keyword weight: {:.0}", config.scoring.keyword_weight);
                println!("  Length weight: {:.0}", config.scoring.length_weight);
                println!("  Target word count: {}", config.scoring.target_word_count);
                println!("\nAnalysis:");
                println!("  Technical skills: {}", config.analysis.technical_skills.join(", "));
                println!("  Skill chart: {}", config.analysis.skill_chart.join(", "));
                println!("  Tip rules: {}", config.analysis.tip_rules.len());
                println!("\nJD matching:");
                println!("  Min token length: {}", config.jd.min_token_len);
                println!("  Max missing keywords: {}", config.jd.max_missing_keywords);
            }

            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

/// Print text artifacts, save when requested. A binary artifact with no
/// save target goes to a suggested filename in the working directory.
fn deliver_artifact(
    artifact: &ReportArtifact,
    format: &OutputFormat,
    save: Option<PathBuf>,
    resume: &std::path::Path,
    report: &output::report::AnalysisReport,
) -> Result<()> {
    match artifact {
        ReportArtifact::Text(content) => {
            println!("{}", content);
            if let Some(path) = save {
                // Saved console output should not carry ANSI color codes.
                let to_save = if *format == OutputFormat::Console {
                    match ReportGenerator::with_options(false, false, true).generate(report, format)? {
                        ReportArtifact::Text(plain) => plain,
                        ReportArtifact::Binary(_) => unreachable!("console output is text"),
                    }
                } else {
                    content.clone()
                };
                ReportArtifact::Text(to_save).write_to(&path)?;
                println!("Report saved to {}", path.display());
            }
        }
        ReportArtifact::Binary(_) => {
            let path = save.unwrap_or_else(|| {
                PathBuf::from(suggest_filename(format, &resume.to_string_lossy()))
            });
            artifact.write_to(&path)?;
            println!("Report saved to {}", path.display());
        }
    }
    Ok(())
}
