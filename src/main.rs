//! Literary analyzer: token, entity and trigram profiles of literary texts

use clap::Parser;
use literary_analyzer::cli::{self, Cli, Commands, ConfigAction, ReportArgs};
use literary_analyzer::config::{Config, OutputFormat};
use literary_analyzer::error::{AnalyzerError, Result};
use literary_analyzer::input::InputManager;
use literary_analyzer::output::formatter::{save_report_to_file, suggest_filename, ReportGenerator};
use literary_analyzer::output::report::{AnalysisReport, DocumentReport};
use literary_analyzer::processing::comparison::{attribute_authorship, thematic_overlap, SimilarityMetric};
use literary_analyzer::processing::{Pipeline, TextProcessor};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config, cli.no_color) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config, config_path: Option<PathBuf>, no_color: bool) -> Result<()> {
    let use_colors = config.report.color_output && !no_color;
    let mut input_manager = InputManager::new();

    match command {
        Commands::Analyze { files, top, report } => {
            let pipeline = build_pipeline(&config, &report)?;
            let documents = load_documents(&mut input_manager, &pipeline, &files)?;
            let top_tokens = top.unwrap_or(config.report.top_tokens);

            let output = AnalysisReport::new(
                document_reports(&documents, top_tokens, &config),
                pipeline.stopword_filter(),
            );
            emit(&output, &report, &config, use_colors)?;
        }

        Commands::Compare { files, metric, report } => {
            let metric = resolve_metric(metric.as_deref(), &config)?;
            let pipeline = build_pipeline(&config, &report)?;
            let documents = load_documents(&mut input_manager, &pipeline, &files)?;

            let refs: Vec<&TextProcessor> = documents.iter().collect();
            let overlap = thematic_overlap(&refs, config.comparison.theme_top_n, metric);

            let output = AnalysisReport::new(
                document_reports(&documents, config.report.top_tokens, &config),
                pipeline.stopword_filter(),
            )
            .with_thematic_overlap(overlap);
            emit(&output, &report, &config, use_colors)?;
        }

        Commands::Attribute { candidate, references, metric, report } => {
            let metric = resolve_metric(metric.as_deref(), &config)?;
            let pipeline = build_pipeline(&config, &report)?;
            let references = load_documents(&mut input_manager, &pipeline, &references)?;
            let candidate = load_document(&mut input_manager, &pipeline, &candidate)?;

            let refs: Vec<&TextProcessor> = references.iter().collect();
            let attribution = attribute_authorship(&candidate, &refs, metric);

            let mut reports = document_reports(&references, config.report.top_tokens, &config);
            reports.push(DocumentReport::from_processor(
                &candidate,
                config.report.top_tokens,
                config.report.top_trigrams,
            ));

            let output = AnalysisReport::new(reports, pipeline.stopword_filter()).with_attribution(attribution);
            emit(&output, &report, &config, use_colors)?;
        }

        Commands::Workflow { texts, candidate, metric, report } => {
            let metric = resolve_metric(metric.as_deref(), &config)?;
            let pipeline = build_pipeline(&config, &report)?;

            info!("Step 1: loading and summarizing {} texts", texts.len());
            let documents = load_documents(&mut input_manager, &pipeline, &texts)?;
            let refs: Vec<&TextProcessor> = documents.iter().collect();

            info!("Step 2: thematic overlap across {} texts", refs.len());
            let overlap = thematic_overlap(&refs, config.comparison.theme_top_n, metric);

            info!("Step 3: attributing {} by trigram {} similarity", candidate.display(), metric);
            let candidate = load_document(&mut input_manager, &pipeline, &candidate)?;
            let attribution = attribute_authorship(&candidate, &refs, metric);

            let output = AnalysisReport::new(
                document_reports(&documents, config.report.top_tokens, &config),
                pipeline.stopword_filter(),
            )
            .with_thematic_overlap(overlap)
            .with_attribution(attribution);
            emit(&output, &report, &config, use_colors)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("# {}", config_file(config_path.as_deref()).display());
                print!("{}", config.to_toml_string()?);
            }

            Some(ConfigAction::Reset) => {
                let saved = Config::default().save(config_path.as_deref())?;
                println!("Configuration reset to defaults: {}", saved.display());
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_file(config_path.as_deref()).display());
            }
        },
    }

    Ok(())
}

fn config_file(explicit: Option<&Path>) -> PathBuf {
    explicit.map(Path::to_path_buf).unwrap_or_else(Config::config_path)
}

fn build_pipeline(config: &Config, report: &ReportArgs) -> Result<Pipeline> {
    let stopword_filter = config.analysis.stopword_filter && !report.no_stopwords;
    Ok(Pipeline::new(config)?.with_stopword_filter(stopword_filter))
}

fn load_document(manager: &mut InputManager, pipeline: &Pipeline, path: &Path) -> Result<TextProcessor> {
    let source = manager.load(path)?;
    info!("Loaded {} ({} bytes)", source.name, source.text.len());
    Ok(pipeline.process(source.name, source.text))
}

fn load_documents(manager: &mut InputManager, pipeline: &Pipeline, paths: &[PathBuf]) -> Result<Vec<TextProcessor>> {
    paths
        .iter()
        .map(|path| load_document(manager, pipeline, path))
        .collect()
}

fn document_reports(documents: &[TextProcessor], top_tokens: usize, config: &Config) -> Vec<DocumentReport> {
    documents
        .iter()
        .map(|doc| DocumentReport::from_processor(doc, top_tokens, config.report.top_trigrams))
        .collect()
}

fn resolve_metric(metric: Option<&str>, config: &Config) -> Result<SimilarityMetric> {
    match metric {
        Some(name) => cli::parse_metric(name).map_err(AnalyzerError::InvalidInput),
        None => Ok(config.comparison.metric),
    }
}

fn resolve_format(format: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match format {
        Some(name) => cli::parse_output_format(name).map_err(AnalyzerError::InvalidInput),
        None => Ok(config.report.format),
    }
}

fn emit(report: &AnalysisReport, args: &ReportArgs, config: &Config, use_colors: bool) -> Result<()> {
    let format = resolve_format(args.output.as_deref(), config)?;
    let generator = ReportGenerator::with_options(use_colors && args.save.is_none(), true, true);
    let content = generator.generate_report(report, &format)?;

    match &args.save {
        Some(path) => {
            let target = if path.is_dir() {
                let base = report.documents.first().map_or("report", |d| d.name.as_str());
                path.join(suggest_filename(&format, base, true))
            } else {
                path.clone()
            };
            save_report_to_file(&content, &target)?;
            info!("Report saved to {}", target.display());
        }
        None => println!("{}", content),
    }

    Ok(())
}
