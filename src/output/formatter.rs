//! Output formatters: console, JSON, plain-text report, HTML, and the
//! optional PDF report

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{AnalysisReport, ScoreBand};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// A rendered report ready to print or save.
pub enum ReportArtifact {
    Text(String),
    Binary(Vec<u8>),
}

impl ReportArtifact {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        match self {
            ReportArtifact::Text(content) => std::fs::write(path, content)?,
            ReportArtifact::Binary(bytes) => std::fs::write(path, bytes)?,
        }
        Ok(())
    }
}

/// Trait for text-producing report formatters
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and textual progress bars
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured downstream use
pub struct JsonFormatter {
    pretty: bool,
}

/// Plain-text downloadable report
pub struct TextFormatter;

/// HTML report with the same score thresholds as CSS classes
pub struct HtmlFormatter;

const BAR_WIDTH: usize = 20;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn band_color(band: ScoreBand) -> Color {
        match band {
            ScoreBand::Strong => Color::Green,
            ScoreBand::Moderate => Color::Yellow,
            ScoreBand::Weak => Color::Red,
        }
    }

    /// `[████████░░░░░░░░░░░░] 42 / 100 [WEAK]`, colored by band.
    fn format_score_line(&self, score: u8) -> String {
        let band = ScoreBand::from_score(score);
        let filled = (score as usize * BAR_WIDTH) / 100;
        let bar = format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled));
        let line = format!("[{}] {} / 100 [{}]", bar, score, band.label());
        self.colorize(&line, Self::band_color(band))
    }

    fn format_skill_row(&self, skill: &str, present: bool) -> String {
        let (bar, marker, color) = if present {
            ("██████████", "found", Color::Green)
        } else {
            ("··········", "not found", Color::BrightBlack)
        };
        format!("  {:<18} {}  {}", skill, self.colorize(bar, color), marker)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("AI RESUME ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        output.push_str(&self.format_header("ATS Compatibility Score", 2));
        output.push_str(&format!("{}\n", self.format_score_line(report.ats.score)));
        output.push_str(&format!("Verdict: {}\n", self.colorize(report.verdict(), Color::Cyan)));

        output.push_str(&self.format_header("Job Description Match", 2));
        match &report.jd_match {
            Some(jd) => {
                output.push_str(&format!("{}\n", self.format_score_line(jd.score)));
                output.push_str(&format!(
                    "Matched {} of {} important JD words\n",
                    jd.matched_count, jd.important_count
                ));
            }
            None => output.push_str("No job description provided.\n"),
        }

        output.push_str(&self.format_header("Strengths", 2));
        if report.findings.strengths.is_empty() {
            output.push_str("No major strengths detected based on ATS signals.\n");
        } else {
            for strength in &report.findings.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        output.push_str(&self.format_header("Weaknesses", 2));
        if report.findings.weaknesses.is_empty() {
            output.push_str("No critical weaknesses detected.\n");
        } else {
            for weakness in &report.findings.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }
        }

        output.push_str(&self.format_header("Improvement Recommendations", 2));
        if report.tips.is_empty() {
            output.push_str("Your resume is well optimized for ATS systems.\n");
        } else {
            for (i, tip) in report.tips.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, tip));
            }
        }

        if let Some(jd) = &report.jd_match {
            if !jd.missing_keywords.is_empty() {
                output.push_str(&self.format_header("Missing JD Keywords", 2));
                for keyword in &jd.missing_keywords {
                    output.push_str(&format!("  • {}\n", self.colorize(keyword, Color::Red)));
                }
            }
        }

        output.push_str(&self.format_header("Skill Coverage", 2));
        for row in &report.skill_chart {
            output.push_str(&format!("{}\n", self.format_skill_row(&row.skill, row.present)));
        }

        if self.detailed {
            output.push_str(&self.format_header("Keyword Breakdown", 3));
            output.push_str(&format!(
                "Matched {} of {} keywords: {}\n",
                report.ats.matched_keywords.len(),
                report.ats.total_keywords,
                report.ats.matched_keywords.join(", ")
            ));
            output.push_str(&format!(
                "Keyword points: {:.1} | Length points: {:.1} | Word count: {}\n",
                report.ats.keyword_points, report.ats.length_points, report.ats.word_count
            ));
        }

        output.push_str(&format!(
            "\n{} Generated by Resume Analyzer v{} | {} keywords\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.analyzer_version,
            report.metadata.keyword_count
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

/// Section lines of the downloadable plain-text report. Shared with the PDF
/// renderer so both artifacts carry identical content.
pub(crate) fn text_report_lines(report: &AnalysisReport) -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("AI RESUME ANALYSIS REPORT".to_string());
    lines.push("=".repeat(40));
    lines.push(format!(
        "Generated: {}",
        report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    lines.push(format!("Resume: {}", report.metadata.resume_file));
    lines.push(String::new());

    lines.push(format!("ATS Score: {} / 100", report.ats.score));
    match &report.jd_match {
        Some(jd) => lines.push(format!("JD Match Score: {} / 100", jd.score)),
        None => lines.push("JD Match Score: N/A (no job description provided)".to_string()),
    }
    lines.push(String::new());

    lines.push("STRENGTHS:".to_string());
    if report.findings.strengths.is_empty() {
        lines.push("- None".to_string());
    } else {
        for strength in &report.findings.strengths {
            lines.push(format!("- {}", strength));
        }
    }
    lines.push(String::new());

    lines.push("WEAKNESSES:".to_string());
    if report.findings.weaknesses.is_empty() {
        lines.push("- None".to_string());
    } else {
        for weakness in &report.findings.weaknesses {
            lines.push(format!("- {}", weakness));
        }
    }
    lines.push(String::new());

    lines.push("TOP 5 IMPROVEMENTS:".to_string());
    if report.tips.is_empty() {
        lines.push("- None".to_string());
    } else {
        for tip in report.top_tips() {
            lines.push(format!("- {}", tip));
        }
    }

    if let Some(jd) = &report.jd_match {
        lines.push(String::new());
        lines.push("MISSING JD KEYWORDS:".to_string());
        if jd.missing_keywords.is_empty() {
            lines.push("- None".to_string());
        } else {
            for keyword in &jd.missing_keywords {
                lines.push(format!("- {}", keyword));
            }
        }
    }

    lines
}

impl OutputFormatter for TextFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut content = text_report_lines(report).join("\n");
        content.push('\n');
        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Text
    }
}

/// Askama template for the HTML report
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>AI Resume Analysis Report</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #007acc;
            padding-bottom: 20px;
        }
        h2.score-strong { color: #28a745; }
        h2.score-moderate { color: #fd7e14; }
        h2.score-weak { color: #dc3545; }
        .bar {
            background: #e9ecef;
            border-radius: 10px;
            height: 18px;
            overflow: hidden;
            margin: 8px 0 20px 0;
        }
        .bar .fill { height: 100%; }
        .fill.score-strong { background: #28a745; }
        .fill.score-moderate { background: #fd7e14; }
        .fill.score-weak { background: #dc3545; }
        .section { margin: 25px 0; }
        .strengths { border-left: 4px solid #28a745; padding: 10px 15px; background: #f8f9fa; }
        .weaknesses { border-left: 4px solid #fd7e14; padding: 10px 15px; background: #f8f9fa; }
        .tips { border-left: 4px solid #007acc; padding: 10px 15px; background: #f8f9fa; }
        .missing { border-left: 4px solid #dc3545; padding: 10px 15px; background: #f8f9fa; }
        .skill-row { display: grid; grid-template-columns: 160px 1fr; gap: 10px; margin: 4px 0; }
        .skill-bar { border-radius: 4px; height: 14px; align-self: center; }
        .skill-bar.present { background: #28a745; }
        .skill-bar.absent { background: #e9ecef; }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>AI Resume Analysis Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2 class="{{ ats_band_class }}">ATS Compatibility Score: {{ ats_score }} / 100</h2>
            <div class="bar"><div class="fill {{ ats_band_class }}" style="width: {{ ats_score }}%"></div></div>
            <p><strong>Verdict:</strong> {{ verdict }}</p>
        </div>

        {% if has_jd %}
        <div class="section">
            <h2 class="{{ jd_band_class }}">Job Description Match: {{ jd_score }} / 100</h2>
            <div class="bar"><div class="fill {{ jd_band_class }}" style="width: {{ jd_score }}%"></div></div>
        </div>
        {% endif %}

        <div class="section">
            <h2>Strengths</h2>
            <div class="strengths">{{ strengths_html|safe }}</div>
        </div>

        <div class="section">
            <h2>Weaknesses</h2>
            <div class="weaknesses">{{ weaknesses_html|safe }}</div>
        </div>

        <div class="section">
            <h2>Improvement Recommendations</h2>
            <div class="tips">{{ tips_html|safe }}</div>
        </div>

        {% if has_missing %}
        <div class="section">
            <h2>Missing JD Keywords</h2>
            <div class="missing">{{ missing_html|safe }}</div>
        </div>
        {% endif %}

        <div class="section">
            <h2>Skill Coverage</h2>
            {{ skills_html|safe }}
        </div>

        <div class="metadata">
            <p><strong>Generated by Resume Analyzer v{{ version }}</strong></p>
            <p><strong>Resume:</strong> {{ resume_file }} | <strong>Keywords checked:</strong> {{ keyword_count }}</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlReportTemplate {
    generated_at: String,
    processing_time: u64,
    ats_score: u8,
    ats_band_class: String,
    verdict: String,
    has_jd: bool,
    jd_score: u8,
    jd_band_class: String,
    strengths_html: String,
    weaknesses_html: String,
    tips_html: String,
    has_missing: bool,
    missing_html: String,
    skills_html: String,
    version: String,
    resume_file: String,
    keyword_count: usize,
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn html_list(items: &[String], empty_message: &str) -> String {
    if items.is_empty() {
        format!("<p>{}</p>", escape_html(empty_message))
    } else {
        let rows: Vec<String> = items
            .iter()
            .map(|item| format!("  <li>{}</li>", escape_html(item)))
            .collect();
        format!("<ul>\n{}\n</ul>", rows.join("\n"))
    }
}

impl HtmlFormatter {
    pub fn new() -> Self {
        Self
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlReportTemplate {
        let ats_band = ScoreBand::from_score(report.ats.score);

        let (has_jd, jd_score, jd_band_class, has_missing, missing_html) = match &report.jd_match {
            Some(jd) => (
                true,
                jd.score,
                ScoreBand::from_score(jd.score).css_class().to_string(),
                !jd.missing_keywords.is_empty(),
                html_list(&jd.missing_keywords, "None"),
            ),
            None => (false, 0, String::new(), false, String::new()),
        };

        let skills_html = report
            .skill_chart
            .iter()
            .map(|row| {
                let class = if row.present { "present" } else { "absent" };
                format!(
                    "<div class=\"skill-row\"><span>{}</span><div class=\"skill-bar {}\"></div></div>",
                    escape_html(&row.skill),
                    class
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        HtmlReportTemplate {
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            ats_score: report.ats.score,
            ats_band_class: ats_band.css_class().to_string(),
            verdict: report.verdict().to_string(),
            has_jd,
            jd_score,
            jd_band_class,
            strengths_html: html_list(
                &report.findings.strengths,
                "No major strengths detected based on ATS signals.",
            ),
            weaknesses_html: html_list(
                &report.findings.weaknesses,
                "No critical weaknesses detected.",
            ),
            tips_html: html_list(
                report.top_tips(),
                "Your resume is well optimized for ATS systems.",
            ),
            has_missing,
            missing_html,
            skills_html,
            version: report.metadata.analyzer_version.clone(),
            resume_file: report.metadata.resume_file.clone(),
            keyword_count: report.metadata.keyword_count,
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let template = self.create_template_data(report);
        template
            .render()
            .map_err(|e| crate::error::ResumeAnalyzerError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

/// Coordinates the formatters and dispatches on the requested format.
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    text_formatter: TextFormatter,
    html_formatter: HtmlFormatter,
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true)
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            text_formatter: TextFormatter,
            html_formatter: HtmlFormatter::new(),
        }
    }

    pub fn generate(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<ReportArtifact> {
        match format {
            OutputFormat::Console => {
                Ok(ReportArtifact::Text(self.console_formatter.format_report(report)?))
            }
            OutputFormat::Json => {
                Ok(ReportArtifact::Text(self.json_formatter.format_report(report)?))
            }
            OutputFormat::Text => {
                Ok(ReportArtifact::Text(self.text_formatter.format_report(report)?))
            }
            OutputFormat::Html => {
                Ok(ReportArtifact::Text(self.html_formatter.format_report(report)?))
            }
            OutputFormat::Pdf => self.generate_pdf(report),
        }
    }

    #[cfg(feature = "pdf-report")]
    fn generate_pdf(&self, report: &AnalysisReport) -> Result<ReportArtifact> {
        let bytes = crate::output::pdf::PdfFormatter::new().render(report)?;
        Ok(ReportArtifact::Binary(bytes))
    }

    #[cfg(not(feature = "pdf-report"))]
    fn generate_pdf(&self, _report: &AnalysisReport) -> Result<ReportArtifact> {
        Err(crate::error::ResumeAnalyzerError::ReportGeneration(
            "PDF report support is not built in; rebuild with --features pdf-report".to_string(),
        ))
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let extension = match format {
        OutputFormat::Console | OutputFormat::Text => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Html => "html",
        OutputFormat::Pdf => "pdf",
    };

    format!("{}_analysis.{}", base_name, extension)
}
