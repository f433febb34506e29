//! Input manager for handling different file types

use crate::error::{AnalyzerError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor};
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Raw text of one input file, named after the file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub name: String,
    pub path: PathBuf,
    pub text: String,
}

pub struct InputManager {
    cache: HashMap<PathBuf, String>,
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

    pub fn extract_text(&mut self, path: &Path) -> Result<String> {
        if self.enable_cache {
            if let Some(cached_text) = self.cache.get(path) {
                info!("Using cached text for: {}", path.display());
                return Ok(cached_text.clone());
            }
        }

        if !path.exists() {
            return Err(AnalyzerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let text = match FileType::from_path(path).unwrap_or(FileType::Unknown) {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", path.display());
                PdfExtractor.extract(path)?
            }
            FileType::Text => {
                info!("Reading plain text file: {}", path.display());
                PlainTextExtractor.extract(path)?
            }
            FileType::Markdown => {
                info!("Processing markdown file: {}", path.display());
                MarkdownExtractor.extract(path)?
            }
            FileType::Unknown => {
                return Err(AnalyzerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if self.enable_cache {
            self.cache.insert(path.to_path_buf(), text.clone());
        }

        Ok(text)
    }

    /// Read `path` and name it after its file stem.
    pub fn load(&mut self, path: &Path) -> Result<SourceText> {
        let text = self.extract_text(path)?;
        Ok(SourceText {
            name: document_name(path),
            path: path.to_path_buf(),
            text,
        })
    }

    pub fn load_all(&mut self, paths: &[PathBuf]) -> Result<Vec<SourceText>> {
        paths.iter().map(|p| self.load(p)).collect()
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }
}

pub fn document_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_extension_is_unsupported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("Martin");
        std::fs::write(&path, "Winter is coming.").unwrap();

        let result = InputManager::new().extract_text(&path);
        assert!(matches!(result, Err(AnalyzerError::UnsupportedFormat(_))));
    }

    #[test]
    fn missing_file_is_invalid_input() {
        let result = InputManager::new().extract_text(Path::new("no/such/file.txt"));
        assert!(matches!(result, Err(AnalyzerError::InvalidInput(_))));
    }

    #[test]
    fn name_is_file_stem() {
        assert_eq!(document_name(Path::new("texts/RJ_Martin.txt")), "RJ_Martin");
        assert_eq!(document_name(Path::new("Martin")), "Martin");
    }
}
