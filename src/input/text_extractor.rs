//! Text extraction from various file formats

use crate::error::{AnalyzerError, Result};
use pulldown_cmark::{Event, Parser, Tag};
use std::fs;
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;

        pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
            AnalyzerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })
    }
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        Ok(fs::read_to_string(path)?)
    }
}

pub struct MarkdownExtractor;

impl TextExtractor for MarkdownExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let markdown_content = fs::read_to_string(path)?;
        Ok(Self::markdown_to_text(&markdown_content))
    }
}

impl MarkdownExtractor {
    /// Keep the prose of a Markdown document and drop its markup. Block
    /// ends become blank lines so sentence segmentation still sees them.
    pub fn markdown_to_text(markdown: &str) -> String {
        let mut text = String::with_capacity(markdown.len());

        for event in Parser::new(markdown) {
            match event {
                Event::Text(t) | Event::Code(t) => text.push_str(&t),
                Event::SoftBreak => text.push(' '),
                Event::HardBreak => text.push('\n'),
                Event::End(Tag::Paragraph)
                | Event::End(Tag::Heading(..))
                | Event::End(Tag::Item)
                | Event::End(Tag::BlockQuote)
                | Event::End(Tag::CodeBlock(_)) => text.push_str("\n\n"),
                _ => {}
            }
        }

        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_markup_removed() {
        let md = "# Act I\n\n**Romeo** meets *Juliet* in `Verona`.\n\n- Tybalt\n- Mercutio\n";
        let text = MarkdownExtractor::markdown_to_text(md);
        assert!(text.contains("Act I"));
        assert!(text.contains("Romeo meets Juliet in Verona."));
        assert!(text.contains("Tybalt"));
        assert!(!text.contains("**"));
        assert!(!text.contains('#'));
        assert!(!text.contains('`'));
    }

    #[test]
    fn blocks_end_up_on_separate_lines() {
        let text = MarkdownExtractor::markdown_to_text("First part\n\nSecond part");
        assert_eq!(text, "First part\nSecond part");
    }
}
