//! Text extraction from various file formats

use crate::error::{Result, ResumeAnalyzerError};
use pulldown_cmark::{Event, Parser, Tag};
use std::path::Path;
use tokio::fs;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path).await.map_err(ResumeAnalyzerError::Io)?;

        let text = pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            ResumeAnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).await.map_err(ResumeAnalyzerError::Io)?;
        Ok(content)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    async fn extract(&self, path: &Path) -> Result<String> {
        let markdown = fs::read_to_string(path).await.map_err(ResumeAnalyzerError::Io)?;
        Ok(markdown_to_text(&markdown))
    }
}

/// Strip markdown structure, keeping only the text content. Block ends
/// become line breaks so word boundaries survive.
fn markdown_to_text(markdown: &str) -> String {
    let mut text = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Text(content) | Event::Code(content) => text.push_str(&content),
            Event::SoftBreak | Event::HardBreak => text.push('\n'),
            Event::End(Tag::Paragraph) | Event::End(Tag::Item) => text.push('\n'),
            Event::End(Tag::Heading(..)) => text.push('\n'),
            _ => {}
        }
    }

    let lines: Vec<&str> = text
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_formatting_is_stripped() {
        let markdown = "# John Doe\n\n**Software Engineer** with *Python* experience.\n\n- React\n- Node.js\n";
        let text = markdown_to_text(markdown);

        assert!(text.contains("John Doe"));
        assert!(text.contains("Software Engineer"));
        assert!(text.contains("Python"));
        assert!(text.contains("React"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('-'));
    }

    #[test]
    fn markdown_headings_keep_word_boundaries() {
        let text = markdown_to_text("# Skills\nPython");
        assert!(text.contains("Skills\nPython"));
    }

    #[test]
    fn inline_code_is_kept_as_text() {
        let text = markdown_to_text("Built tooling in `rust` and `sql`.");
        assert!(text.contains("rust"));
        assert!(text.contains("sql"));
        assert!(!text.contains('`'));
    }
}
