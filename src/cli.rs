//! CLI interface for the literary analyzer

use crate::config::OutputFormat;
use crate::processing::comparison::SimilarityMetric;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "literary-analyzer")]
#[command(about = "Token, entity and trigram analysis of literary texts")]
#[command(long_about = "Tokenize, normalize and profile literary texts, compare their themes, and attribute authorship by trigram similarity")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored console output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Options shared by every analysis command.
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Keep stop words in the processed tokens
    #[arg(long)]
    pub no_stopwords: bool,

    /// Output format: console, json, markdown
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Summarize one or more texts
    Analyze {
        /// Text files (TXT, MD, PDF)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Number of top tokens to report
        #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
        top: Option<usize>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Find themes shared by several texts
    Compare {
        /// Text files to compare (at least two)
        #[arg(required = true, num_args = 2..)]
        files: Vec<PathBuf>,

        /// Similarity metric: cosine, overlap, jaccard
        #[arg(short, long)]
        metric: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Attribute a text to the closest reference by trigram similarity
    Attribute {
        /// Text of unknown authorship
        #[arg(long)]
        candidate: PathBuf,

        /// Reference texts of known authorship
        #[arg(short, long = "reference", required = true, num_args = 1..)]
        references: Vec<PathBuf>,

        /// Similarity metric: cosine, overlap, jaccard
        #[arg(short, long)]
        metric: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Summaries, thematic overlap and attribution in one run
    Workflow {
        /// Texts to summarize and compare; they also serve as attribution references
        #[arg(short, long, required = true, num_args = 1..)]
        texts: Vec<PathBuf>,

        /// Text to attribute to one of the references
        #[arg(long)]
        candidate: PathBuf,

        /// Similarity metric: cosine, overlap, jaccard
        #[arg(short, long)]
        metric: Option<String>,

        #[command(flatten)]
        report: ReportArgs,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

pub fn parse_metric(metric: &str) -> Result<SimilarityMetric, String> {
    metric.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn output_formats() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("html").is_err());
    }

    #[test]
    fn workflow_arguments() {
        let cli = Cli::try_parse_from([
            "literary-analyzer",
            "--no-color",
            "workflow",
            "--texts",
            "a.txt",
            "b.txt",
            "c.txt",
            "--candidate",
            "d.txt",
            "--metric",
            "overlap",
        ])
        .unwrap();

        assert!(cli.no_color);
        match cli.command {
            Commands::Workflow { texts, candidate, metric, report } => {
                assert_eq!(texts.len(), 3);
                assert_eq!(candidate, PathBuf::from("d.txt"));
                assert_eq!(parse_metric(metric.as_deref().unwrap()).unwrap(), SimilarityMetric::Overlap);
                assert!(!report.no_stopwords);
            }
            _ => panic!("expected workflow command"),
        }
    }

    #[test]
    fn analyze_top_must_be_positive() {
        assert!(Cli::try_parse_from(["literary-analyzer", "analyze", "a.txt", "--top", "0"]).is_err());

        let cli = Cli::try_parse_from(["literary-analyzer", "analyze", "a.txt", "--top", "5"]).unwrap();
        match cli.command {
            Commands::Analyze { top, .. } => assert_eq!(top, Some(5)),
            _ => panic!("expected analyze command"),
        }
    }

    #[test]
    fn compare_needs_two_files() {
        assert!(Cli::try_parse_from(["literary-analyzer", "compare", "a.txt"]).is_err());
        assert!(Cli::try_parse_from(["literary-analyzer", "compare", "a.txt", "b.txt"]).is_ok());
    }

    #[test]
    fn attribute_collects_references() {
        let cli = Cli::try_parse_from([
            "literary-analyzer",
            "attribute",
            "--candidate",
            "x.txt",
            "-r",
            "a.txt",
            "-r",
            "b.txt",
            "--no-stopwords",
        ])
        .unwrap();

        match cli.command {
            Commands::Attribute { references, report, .. } => {
                assert_eq!(references, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
                assert!(report.no_stopwords);
            }
            _ => panic!("expected attribute command"),
        }
    }
}
