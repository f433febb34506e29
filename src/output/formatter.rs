//! Report formatting for console, JSON and Markdown output

use crate::config::OutputFormat;
use crate::error::{AnalyzerError, Result};
use crate::output::report::*;
use colored::{Color, Colorize};
use std::path::Path;

pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
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

    fn format_document(&self, doc: &DocumentReport) -> String {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("=== {} ===", doc.name), 2));
        output.push_str(&format!("Total tokens (raw): {}\n", doc.token_count));
        output.push_str(&format!(
            "Processed tokens: {} ({} distinct, {} trigrams)\n",
            doc.processed_token_count, doc.distinct_tokens, doc.trigram_count
        ));
        output.push_str(&format!(
            "Unique named entities ({}): {}\n",
            doc.named_entities.len(),
            self.colorize(&doc.named_entities.join(", "), Color::Cyan)
        ));

        output.push_str(&self.format_header(
            &format!("Top {} tokens (after processing)", doc.top_tokens.len()),
            3,
        ));
        for entry in &doc.top_tokens {
            output.push_str(&format!("  {}: {}\n", entry.token, entry.count));
        }

        output.push_str(&self.format_header(&format!("Top {} trigrams", doc.top_trigrams.len()), 3));
        if doc.top_trigrams.is_empty() {
            output.push_str(&self.colorize("  (too few tokens for trigrams)\n", Color::BrightBlack));
        }
        for entry in &doc.top_trigrams {
            output.push_str(&format!("  {}: {}\n", entry.trigram, entry.count));
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("NLP COMPARATIVE ANALYSIS", 1));
        output.push_str(&format!(
            "Generated: {} | Stop-word filter: {}\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            if report.metadata.stopword_filter { "on" } else { "off" }
        ));

        for doc in &report.documents {
            output.push_str(&self.format_document(doc));
        }

        if let Some(overlap) = &report.thematic_overlap {
            output.push_str(&self.format_header("THEMATIC OVERLAP", 1));
            output.push_str(&format!("Documents: {}\n", overlap.documents.join(", ")));
            output.push_str(&format!(
                "Shared entities: {}\n",
                self.colorize(&overlap.shared_entities.join(", "), Color::Cyan)
            ));
            output.push_str(&format!(
                "Shared top-{} tokens: {}\n",
                overlap.top_n,
                self.colorize(&overlap.shared_tokens.join(", "), Color::Green)
            ));
            output.push_str(&format!("Pairwise {} similarity:\n", overlap.metric));
            for pair in &overlap.pairwise {
                output.push_str(&format!("  {} <-> {}: {:.4}\n", pair.first, pair.second, pair.score));
            }
        }

        if let Some(attribution) = &report.attribution {
            output.push_str(&self.format_header("AUTHORSHIP ANALYSIS VIA TRIGRAMS", 1));
            output.push_str(&format!(
                "Candidate: {} | Metric: {}\n",
                attribution.candidate, attribution.metric
            ));
            for (i, score) in attribution.scores.iter().enumerate() {
                let line = format!(
                    "  {}. {}: {:.4} ({} shared trigrams)",
                    i + 1,
                    score.reference,
                    score.score,
                    score.shared_trigrams
                );
                if i == 0 {
                    output.push_str(&self.colorize(&line, Color::Green));
                } else {
                    output.push_str(&line);
                }
                output.push('\n');
            }
        }

        let conclusions = report.conclusions();
        if !conclusions.is_empty() {
            output.push_str(&self.format_header("CONCLUSION", 1));
            for line in conclusions {
                output.push_str(&format!("  • {}\n", line));
            }
        }

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

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# NLP Comparative Analysis\n\n");

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Version:** {} | **Stop-word filter:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.analyzer_version,
                if report.metadata.stopword_filter { "on" } else { "off" }
            ));
        }

        for doc in &report.documents {
            output.push_str(&format!("## {}\n\n", doc.name));
            output.push_str(&format!(
                "- **Tokens (raw):** {}\n- **Processed tokens:** {}\n- **Distinct tokens:** {}\n- **Trigrams:** {}\n",
                doc.token_count, doc.processed_token_count, doc.distinct_tokens, doc.trigram_count
            ));
            output.push_str(&format!(
                "- **Named entities ({}):** {}\n\n",
                doc.named_entities.len(),
                doc.named_entities.join(", ")
            ));

            output.push_str("### Top tokens\n\n");
            output.push_str("| Token | Count |\n|-------|-------|\n");
            for entry in &doc.top_tokens {
                output.push_str(&format!("| {} | {} |\n", entry.token, entry.count));
            }
            output.push('\n');

            if !doc.top_trigrams.is_empty() {
                output.push_str("### Top trigrams\n\n");
                output.push_str("| Trigram | Count |\n|---------|-------|\n");
                for entry in &doc.top_trigrams {
                    output.push_str(&format!("| {} | {} |\n", entry.trigram, entry.count));
                }
                output.push('\n');
            }
        }

        if let Some(overlap) = &report.thematic_overlap {
            output.push_str("## Thematic Overlap\n\n");
            output.push_str(&format!(
                "**Shared entities:** {}\n\n",
                overlap.shared_entities.join(", ")
            ));
            output.push_str(&format!(
                "**Shared top-{} tokens:** {}\n\n",
                overlap.top_n,
                overlap.shared_tokens.join(", ")
            ));
            output.push_str(&format!("| Pair | {} similarity |\n|------|------|\n", overlap.metric));
            for pair in &overlap.pairwise {
                output.push_str(&format!("| {} / {} | {:.4} |\n", pair.first, pair.second, pair.score));
            }
            output.push('\n');
        }

        if let Some(attribution) = &report.attribution {
            output.push_str("## Authorship Attribution\n\n");
            output.push_str(&format!("**Candidate:** {}\n\n", attribution.candidate));
            output.push_str(&format!(
                "| Reference | {} similarity | Shared trigrams |\n|-----------|------|------|\n",
                attribution.metric
            ));
            for score in &attribution.scores {
                output.push_str(&format!(
                    "| {} | {:.4} | {} |\n",
                    score.reference, score.score, score.shared_trigrams
                ));
            }
            output.push('\n');
        }

        let conclusions = report.conclusions();
        if !conclusions.is_empty() {
            output.push_str("## Conclusion\n\n");
            for line in conclusions {
                output.push_str(&format!("- {}\n", line));
            }
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, true, true)
    }

    pub fn with_options(use_colors: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if file_path.is_dir() {
        return Err(AnalyzerError::OutputFormatting(format!(
            "Report path is a directory: {}",
            file_path.display()
        )));
    }
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, base_name: &str, timestamp: bool) -> String {
    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_analysis{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_analysis{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_analysis{}.md", base_name, timestamp_suffix),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::comparison::{attribute_authorship, thematic_overlap, SimilarityMetric};
    use crate::processing::text_processor::TextProcessor;

    fn sample_report() -> AnalysisReport {
        let a = TextProcessor::new("RJ_Tolkien", "Romeo walked the road to Verona where Juliet waited by the river.");
        let b = TextProcessor::new("RJ_Martin", "Romeo rode hard to Verona, and Juliet waited in the cold keep.");
        let overlap = thematic_overlap(&[&a, &b], 20, SimilarityMetric::Cosine);
        let attribution = attribute_authorship(&b, &[&a], SimilarityMetric::Overlap);

        AnalysisReport::new(
            vec![
                DocumentReport::from_processor(&a, 20, 10),
                DocumentReport::from_processor(&b, 20, 10),
            ],
            true,
        )
        .with_thematic_overlap(overlap)
        .with_attribution(attribution)
    }

    #[test]
    fn console_without_colors_is_plain() {
        let output = ConsoleFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.contains("=== RJ_Tolkien ==="));
        assert!(output.contains("THEMATIC OVERLAP"));
        assert!(output.contains("AUTHORSHIP ANALYSIS VIA TRIGRAMS"));
        assert!(output.contains("romeo"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn json_is_parseable() {
        let output = JsonFormatter::new(false).format_report(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["documents"].as_array().unwrap().len(), 2);
        assert_eq!(value["documents"][0]["name"], "RJ_Tolkien");
        assert_eq!(value["thematic_overlap"]["metric"], "cosine");
        assert_eq!(value["attribution"]["candidate"], "RJ_Martin");
    }

    #[test]
    fn markdown_has_sections() {
        let output = MarkdownFormatter::new(false).format_report(&sample_report()).unwrap();
        assert!(output.starts_with("# NLP Comparative Analysis"));
        assert!(output.contains("## RJ_Martin"));
        assert!(output.contains("## Thematic Overlap"));
        assert!(output.contains("## Authorship Attribution"));
        assert!(!output.contains("**Generated:**"));
    }

    #[test]
    fn generator_dispatches_by_format() {
        let generator = ReportGenerator::with_options(false, true, true);
        let report = sample_report();
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown] {
            assert!(!generator.generate_report(&report, &format).unwrap().is_empty());
        }
        assert_eq!(generator.console_formatter.supports_format(), OutputFormat::Console);
        assert_eq!(generator.markdown_formatter.supports_format(), OutputFormat::Markdown);
    }

    #[test]
    fn saving_over_a_directory_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = save_report_to_file("report", dir.path());
        assert!(matches!(result, Err(AnalyzerError::OutputFormatting(_))));
    }

    #[test]
    fn filenames_follow_format() {
        assert_eq!(suggest_filename(&OutputFormat::Json, "rj", false), "rj_analysis.json");
        assert_eq!(suggest_filename(&OutputFormat::Markdown, "rj", false), "rj_analysis.md");
        assert!(suggest_filename(&OutputFormat::Console, "rj", true).ends_with(".txt"));
    }
}
