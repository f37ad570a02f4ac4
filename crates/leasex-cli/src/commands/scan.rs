//! Scan command - unattended import of every lease in a folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use futures_util::stream::{self, StreamExt};
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use leasex_core::extract::rules::format_grouped_amount;
use leasex_core::models::config::{LeaseConfig, OutputConfig};
use leasex_core::{read_text_or_empty, ContractDraft, LeaseCandidates, LeaseParser, Preset};

use super::{load_config, PresetArg};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Folder to scan, or a glob pattern
    #[arg(required = true)]
    input: String,

    /// Output directory (default: current directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Extraction profile
    #[arg(long, value_enum, default_value = "batch")]
    preset: PresetArg,
}

/// Outcome of one scanned document.
struct ScanOutcome {
    path: PathBuf,
    candidates: LeaseCandidates,
    draft: ContractDraft,
    text_chars: usize,
    processing_time_ms: u64,
}

pub async fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    let files = discover_files(&args.input, &config)?;
    if files.is_empty() {
        anyhow::bail!("No lease documents found in: {}", args.input);
    }

    println!(
        "{} Found {} documents to scan",
        style("ℹ").blue(),
        files.len()
    );

    let output_dir = args.output_dir.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&output_dir)?;

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let preset = Preset::from(args.preset);
    let parser = Arc::new(LeaseParser::new(config.extraction(preset)));
    let output_config = Arc::new(config.output.clone());

    // Each document is independent; buffered() keeps discovery order.
    let outcomes: Vec<ScanOutcome> = stream::iter(files)
        .map(|path| {
            let parser = Arc::clone(&parser);
            let output_config = Arc::clone(&output_config);
            async move {
                let worker_path = path.clone();
                let worker_output = Arc::clone(&output_config);
                let worker = tokio::task::spawn_blocking(move || {
                    scan_document(worker_path, &parser, &worker_output)
                });
                join_or_empty(worker, path, &output_config).await
            }
        })
        .buffered(args.jobs.max(1))
        .inspect(|_| progress.inc(1))
        .collect()
        .await;

    progress.finish_with_message("Complete");

    for outcome in &outcomes {
        print_outcome(outcome);
        if outcome.text_chars < config.pdf.min_text_length {
            warn!(
                "{} has little or no text layer ({} chars)",
                outcome.path.display(),
                outcome.text_chars
            );
        }
    }

    let drafts: Vec<&ContractDraft> = outcomes.iter().map(|o| &o.draft).collect();
    let contracts_path = output_dir.join("contracts.json");
    fs::write(&contracts_path, serde_json::to_string_pretty(&drafts)?)?;
    info!("Wrote {} contracts to {}", drafts.len(), contracts_path.display());

    if args.summary {
        let summary_path = output_dir.join("summary.csv");
        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let without_text = outcomes.iter().filter(|o| o.text_chars == 0).count();

    println!();
    println!(
        "{} Scanned {} documents in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} with text, {} without text",
        style(outcomes.len() - without_text).green(),
        style(without_text).red()
    );
    println!(
        "{} Contracts written to {}",
        style("✓").green(),
        contracts_path.display()
    );

    Ok(())
}

/// Documents to scan: a directory's direct children, or glob matches.
/// Results are sorted by path so runs are reproducible.
fn discover_files(input: &str, config: &LeaseConfig) -> anyhow::Result<Vec<PathBuf>> {
    let input_path = Path::new(input);

    let candidates: Vec<PathBuf> = if input_path.is_dir() {
        fs::read_dir(input_path)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .collect()
    } else {
        glob(input)?.filter_map(|r| r.ok()).collect()
    };

    let mut files: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|path| has_scanned_extension(path, &config.pdf.extensions))
        .collect();
    files.sort();

    debug!("Discovered {} documents under {}", files.len(), input);
    Ok(files)
}

fn has_scanned_extension(path: &Path, extensions: &[String]) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    extensions.iter().any(|allowed| allowed.eq_ignore_ascii_case(&ext))
}

fn scan_document(path: PathBuf, parser: &LeaseParser, output: &OutputConfig) -> ScanOutcome {
    let file_start = Instant::now();

    let text = read_text_or_empty(&path);
    let candidates = parser.extract(&text);
    let draft = ContractDraft::from_candidates(&path, &candidates, &text, output);

    ScanOutcome {
        text_chars: text.chars().count(),
        processing_time_ms: file_start.elapsed().as_millis() as u64,
        path,
        candidates,
        draft,
    }
}

/// Wait for a document worker. A worker that panicked still yields an
/// empty outcome so the rest of the batch is written.
async fn join_or_empty(
    worker: JoinHandle<ScanOutcome>,
    path: PathBuf,
    output: &OutputConfig,
) -> ScanOutcome {
    match worker.await {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!("Worker for {} failed: {}", path.display(), e);
            empty_outcome(path, output)
        }
    }
}

fn empty_outcome(path: PathBuf, output: &OutputConfig) -> ScanOutcome {
    let candidates = LeaseCandidates::default();
    let draft = ContractDraft::from_candidates(&path, &candidates, "", output);

    ScanOutcome {
        text_chars: 0,
        processing_time_ms: 0,
        path,
        candidates,
        draft,
    }
}

fn print_outcome(outcome: &ScanOutcome) {
    let name = outcome
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let candidates = &outcome.candidates;

    println!("{} {}", style("▸").cyan(), name);
    println!(
        "    tenant:   {}",
        candidates.tenant.as_deref().unwrap_or("(not found)")
    );
    println!("    property: {}", outcome.draft.property);
    println!("    dates:    {}", join_dates(candidates));
    println!("    amounts:  {}", join_amounts(candidates));
}

fn join_dates(candidates: &LeaseCandidates) -> String {
    if candidates.dates.is_empty() {
        return "(none)".to_string();
    }
    candidates
        .dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_amounts(candidates: &LeaseCandidates) -> String {
    if candidates.amounts.is_empty() {
        return "(none)".to_string();
    }
    candidates
        .amounts
        .iter()
        .map(|a| format!("₪{}", format_grouped_amount(*a)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_summary(path: &Path, outcomes: &[ScanOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "tenant_name",
        "property",
        "start_date",
        "end_date",
        "monthly_rent",
        "dates",
        "amounts",
        "text_chars",
        "processing_time_ms",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let draft = &outcome.draft;
        let dates: Vec<String> = outcome.candidates.dates.iter().map(|d| d.to_string()).collect();
        let amounts: Vec<String> = outcome.candidates.amounts.iter().map(|a| a.to_string()).collect();

        wtr.write_record(&[
            filename.to_string(),
            draft.tenant_name.clone().unwrap_or_default(),
            draft.property.clone(),
            draft.start_date.map(|d| d.to_string()).unwrap_or_default(),
            draft.end_date.map(|d| d.to_string()).unwrap_or_default(),
            draft.monthly_rent.map(|a| a.to_string()).unwrap_or_default(),
            dates.join(" "),
            amounts.join(" "),
            outcome.text_chars.to_string(),
            outcome.processing_time_ms.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
