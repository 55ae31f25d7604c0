//! Keyword asset loading

use crate::error::{Result, ResumeAnalyzerError};
use std::path::Path;

/// Ordered keyword list loaded from a comma-separated asset file.
///
/// Duplicates are kept on purpose: the ATS score counts every entry, so a
/// phrase listed twice weighs twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    phrases: Vec<String>,
}

impl KeywordSet {
    pub fn from_phrases(phrases: Vec<String>) -> Self {
        Self { phrases }
    }

    /// Read the asset file, splitting on commas and dropping blank entries.
    /// A missing or unreadable file is a fatal configuration error for this
    /// invocation; there is no fallback list.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ResumeAnalyzerError::KeywordAsset(format!(
                "Cannot read keyword asset '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::parse(&content))
    }

    fn parse(content: &str) -> Self {
        let phrases = content
            .split(',')
            .map(|phrase| phrase.trim().to_string())
            .filter(|phrase| !phrase.is_empty())
            .collect();

        Self { phrases }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
