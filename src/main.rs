use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use salon_catalog::settings::Settings;
use salon_catalog::{build_catalog, inspect, output, source};
use tracing::info;

#[derive(Parser)]
#[command(name = "salon_catalog", about = "Build the grouped salon service catalog from the offer export")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize the Latin-1 offer CSV and write the grouped JSON catalog
    Build {
        /// Source CSV (default: $SALON_SOURCE or my_app/offre.csv)
        #[arg(short, long)]
        source: Option<PathBuf>,
        /// Output JSON (default: $SALON_OUTPUT or my_app/assets/services.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List distinct subcategory slugs and whether each has a table entry
    Subcategories {
        #[arg(short, long)]
        source: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load().context("loading SALON_* settings")?;
    info!(?settings, "settings loaded");

    match cli.command {
        Commands::Build { source, output } => {
            let source = source.unwrap_or(settings.source);
            let output = output.unwrap_or(settings.output);
            run_build(&source, &output)
        }
        Commands::Subcategories { source } => {
            let source = source.unwrap_or(settings.source);
            let rows = source::read_rows(&source)
                .with_context(|| format!("reading {}", source.display()))?;
            inspect::print_report(&inspect::subcategory_slugs(&rows));
            Ok(())
        }
    }
}

fn run_build(source: &Path, output: &Path) -> anyhow::Result<()> {
    let t0 = Instant::now();
    let rows = source::read_rows(source)
        .with_context(|| format!("reading {}", source.display()))?;
    info!(rows = rows.len(), source = %source.display(), "loaded offer rows");

    let pb = ProgressBar::new(rows.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} rows")
            .context("progress bar template")?
            .progress_chars("#>-"),
    );
    let (catalog, report) = build_catalog(&rows, |n| pb.inc(n as u64));
    pb.finish_and_clear();

    let document = catalog.to_document().context("serializing catalog")?;
    output::write_document(output, &document)
        .with_context(|| format!("writing {}", output.display()))?;

    info!(
        rows = report.rows_read,
        discarded = report.rows_discarded,
        records = report.records,
        duplicate_ids = report.duplicate_ids,
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "catalog written"
    );
    println!(
        "Wrote services grouped into {} categories to {}",
        catalog.category_count(),
        output.display()
    );
    Ok(())
}
