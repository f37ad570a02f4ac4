//! Extract command - candidate fields from a single lease for review.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use leasex_core::extract::rules::format_grouped_amount;
use leasex_core::{read_text_or_empty, DocumentKind, LeaseParser, Preset, ScanPreview};

use super::{load_config, PresetArg};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input file (PDF or text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Extraction profile
    #[arg(long, value_enum, default_value = "interactive")]
    preset: PresetArg,

    /// Report fields that produced no candidates
    #[arg(long)]
    show_warnings: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    if DocumentKind::from_path(&args.input).is_none() {
        anyhow::bail!("Unsupported file format: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = read_text_or_empty(&args.input);
    if text.chars().count() < config.pdf.min_text_length {
        warn!(
            "{} has little or no text layer ({} chars); scanned images need OCR first",
            args.input.display(),
            text.chars().count()
        );
    }

    let preset = Preset::from(args.preset);
    let parser = LeaseParser::new(config.extraction(preset));
    let result = parser.parse(&text);
    let warnings = result.warnings;

    let preview = ScanPreview::from_candidates(&args.input, result.candidates, &text, &config.output);

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&preview)?,
        OutputFormat::Text => format_preview_text(&preview),
    };

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_warnings && !warnings.is_empty() {
        eprintln!("{}", style("Extraction warnings:").yellow());
        for warning in &warnings {
            eprintln!("  - {}", warning);
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn format_preview_text(preview: &ScanPreview) -> String {
    let join_or_none = |items: Vec<String>| {
        if items.is_empty() {
            "(none)".to_string()
        } else {
            items.join(", ")
        }
    };
    let optional = |value: Option<String>| value.unwrap_or_else(|| "(not found)".to_string());

    let mut output = String::new();

    output.push_str(&format!("File:     {}\n", preview.filename));
    output.push_str(&format!("Property: {}\n", preview.property));
    output.push_str(&format!("Tenant:   {}\n", optional(preview.tenant.clone())));
    output.push_str(&format!(
        "Dates:    {}\n",
        join_or_none(preview.dates.iter().map(|d| d.to_string()).collect())
    ));
    output.push_str(&format!(
        "Amounts:  {}\n",
        join_or_none(
            preview
                .amounts
                .iter()
                .map(|a| format!("₪{}", format_grouped_amount(*a)))
                .collect()
        )
    ));
    output.push('\n');

    output.push_str(&format!(
        "Start date:   {}\n",
        optional(preview.start_date.map(|d| d.to_string()))
    ));
    output.push_str(&format!(
        "End date:     {}\n",
        optional(preview.end_date.map(|d| d.to_string()))
    ));
    output.push_str(&format!(
        "Monthly rent: {}\n",
        optional(preview.monthly_rent.map(|a| format!("₪{}", format_grouped_amount(a))))
    ));

    output
}
