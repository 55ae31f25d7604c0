//! Input manager for handling different file types

use crate::error::{Result, ResumeAnalyzerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

pub struct InputManager {
    cache: HashMap<String, String>,
    enable_cache: bool,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            enable_cache: true,
        }
    }

    pub fn with_cache(mut self, enable: bool) -> Self {
        self.enable_cache = enable;
        self
    }

    pub async fn extract_text(&mut self, path: &Path) -> Result<String> {
        let path_str = path.to_string_lossy().to_string();

        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(&path_str) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(ResumeAnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let file_type = self.detect_file_type(path).await?;

        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path).await?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path).await?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path).await?
            }
            FileType::Unknown => {
                return Err(ResumeAnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path_str, text.clone());
        }

        Ok(text)
    }

    /// Extraction for the resume upload path. A PDF whose text layer cannot
    /// be read yields empty text, which downstream analysis surfaces as the
    /// extraction weakness; other failures still propagate.
    pub async fn extract_text_lenient(&mut self, path: &Path) -> Result<String> {
        match self.extract_text(path).await {
            Ok(text) => Ok(text),
            Err(ResumeAnalyzerError::PdfExtraction(msg)) => {
                warn!("Treating resume as empty after extraction failure: {}", msg);
                Ok(String::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Extension-based detection, with a content sniff for extensionless
    /// files (typical for raw uploads).
    async fn detect_file_type(&self, path: &Path) -> Result<FileType> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Ok(FileType::from_extension(ext)),
            None => {
                let bytes = tokio::fs::read(path).await?;
                Ok(FileType::sniff(&bytes))
            }
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}
