use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use setlist_stats::config::{Config, ConfigBuilder, ConfigError, OutputFormat};
use setlist_stats::{AnalysisService, LineOutcome, SetlistExtractor, StatisticsReport, corpus};
use time::OffsetDateTime;
use tracing::info;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

/// setlist-stats - rank recurring songs across recognized setlist photos
#[derive(Parser)]
#[command(name = "setlist-stats")]
#[command(about = "Ranks recurring songs across recognized setlist text")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Analyze a directory of recognized text files
    Analyze(AnalyzeCommand),
    /// Show how each line of one file is classified
    Inspect(InspectCommand),
}

/// Analyze a corpus of documents
#[derive(Parser)]
struct AnalyzeCommand {
    /// Directory containing one text file per document
    #[arg(value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Extension of document files
    #[arg(long, value_name = "EXT")]
    ext: Option<String>,

    /// Number of entries in the top-N summary
    #[arg(short, long, value_name = "N")]
    top: Option<usize>,

    /// Minimum percentage for the threshold summary
    #[arg(long, value_name = "PERCENT")]
    threshold: Option<f64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Inspect a single document
#[derive(Parser)]
struct InspectCommand {
    /// The text file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// JSON output wrapper around the report.
#[derive(Serialize)]
struct ReportEnvelope<'a> {
    #[serde(with = "time::serde::rfc3339")]
    generated_at: OffsetDateTime,
    documents_dir: &'a Path,
    report: &'a StatisticsReport,
}

fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Analyze(cmd) => handle_analyze(cmd),
        Commands::Inspect(cmd) => handle_inspect(cmd),
    };

    if let Err(e) = result {
        // Determine exit code based on error type
        let exit_code = if is_user_error(&e) { 1 } else { 2 };
        eprintln!("Error: {e:#}");
        std::process::exit(exit_code);
    }
}

/// Installs a stderr subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Determines if an error is a user error (vs internal error).
///
/// User errors are bad configuration and paths that do not exist.
fn is_user_error(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause.downcast_ref::<ConfigError>().is_some()
            || cause
                .downcast_ref::<std::io::Error>()
                .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
    })
}

/// Builds the run configuration from command-line overrides.
fn build_config(cmd: &AnalyzeCommand) -> Result<Config, ConfigError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = &cmd.dir {
        builder = builder.documents_dir(dir);
    }
    if let Some(ext) = &cmd.ext {
        builder = builder.extension(ext);
    }
    if let Some(top) = cmd.top {
        builder = builder.top_n(top);
    }
    if let Some(threshold) = cmd.threshold {
        builder = builder.threshold_percent(threshold);
    }
    if cmd.json {
        builder = builder.format(OutputFormat::Json);
    }
    builder.build()
}

/// Handles the analyze command.
fn handle_analyze(cmd: &AnalyzeCommand) -> Result<()> {
    let config = build_config(cmd)?;

    let documents = corpus::load_documents(&config.documents_dir, &config.extension)?;
    info!(
        dir = %config.documents_dir.display(),
        documents = documents.len(),
        "analyzing corpus"
    );

    let report = AnalysisService::new().analyze(&documents, documents.len());

    let output = match config.format {
        OutputFormat::Table => render_table(&report, config.top_n, config.threshold_percent),
        OutputFormat::Json => {
            let envelope = ReportEnvelope {
                generated_at: OffsetDateTime::now_utc(),
                documents_dir: &config.documents_dir,
                report: &report,
            };
            serde_json::to_string_pretty(&envelope).context("Failed to serialize report")?
        }
    };

    println!("{output}");
    Ok(())
}

/// Handles the inspect command.
fn handle_inspect(cmd: &InspectCommand) -> Result<()> {
    let document = corpus::load_document(&cmd.file)?;
    let extractor = SetlistExtractor::new();

    print!("{}", render_inspection(&extractor, document.text()));
    Ok(())
}

/// Renders the ranked table followed by the top-N and threshold summaries.
///
/// Names are padded by terminal display width, so full-width titles line up.
fn render_table(report: &StatisticsReport, top_n: usize, threshold: f64) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Documents: {}  Unique songs: {}  Occurrences: {}",
        report.total_documents, report.total_unique_names, report.total_occurrences
    );

    if report.is_empty() {
        let _ = writeln!(out, "No songs found.");
        return out;
    }

    let name_width = report
        .ranked_results
        .iter()
        .map(|s| s.name.as_str().width())
        .max()
        .unwrap_or(0)
        .max("Song".len());

    let _ = writeln!(out);
    let _ = writeln!(out, "{:>4}  {:<name_width$}  {:>5}  {:>6}", "Rank", "Song", "Count", "%");
    for stat in &report.ranked_results {
        let pad = name_width - stat.name.as_str().width();
        let _ = writeln!(
            out,
            "{:>4}  {}{}  {:>5}  {:>6.1}",
            stat.rank,
            stat.name,
            " ".repeat(pad),
            stat.count,
            stat.percentage
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Top {top_n}:");
    for stat in report.top(top_n) {
        let _ = writeln!(out, "  {}. {} ({} times)", stat.rank, stat.name, stat.count);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Played at {threshold:.1}% or more of shows:");
    let mut any = false;
    for stat in report.at_least(threshold) {
        any = true;
        let _ = writeln!(out, "  {} ({:.1}%)", stat.name, stat.percentage);
    }
    if !any {
        let _ = writeln!(out, "  (none)");
    }

    out
}

/// Renders one row per line with its extraction outcome.
fn render_inspection(extractor: &SetlistExtractor, text: &str) -> String {
    let mut out = String::new();
    for (line_number, line, outcome) in extractor.inspect(text) {
        let verdict = match &outcome {
            LineOutcome::Noise => "noise".to_string(),
            LineOutcome::NoMatch => "-".to_string(),
            LineOutcome::Rejected { rule, .. } => format!("rejected ({rule})"),
            LineOutcome::Accepted { rule, name } => format!("{name} ({rule})"),
        };
        let _ = writeln!(out, "{line_number:>4}  {:<40}  {verdict}", line.trim_end());
    }
    out
}
