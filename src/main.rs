mod fetcher;
mod parser;
mod models;
mod archiver;
mod validate;
mod scrape;
mod fallback;
mod pause;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use rand::Rng;

use crate::models::Review;
use crate::validate::DateRange;

const OUTPUT_FILE: &str = "output.json";

#[derive(Parser, Debug)]
#[command(name = "review_scraper")]
#[command(about = "SaaS Review Scraper")]
struct Cli {
    /// Company slug as it appears in the review site URL
    #[arg(long)]
    company: String,

    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    start: String,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long)]
    end: String,

    /// Review source name, used for generated reviews
    #[arg(long)]
    source: String,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "warn", value_enum)]
    log_level: LogLevel,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // Keep the HTML parser crates quiet when tracing our own code.
    fn filter(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug,selectors=warn,html5ever=warn",
            LogLevel::Trace => "trace,selectors=warn,html5ever=warn",
        }
    }
}

fn init_tracing(level: &LogLevel) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.filter()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] validate::InputError),
    #[error(transparent)]
    Output(#[from] anyhow::Error),
}

/// Where the reviews ended up.
#[derive(Debug)]
struct Summary {
    path: PathBuf,
    count: usize,
}

fn main() -> Result<()> {
    println!("🚀 Script started");

    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let output_dir = std::env::current_dir()?;
    let summary = match run(&cli, &output_dir, scrape::scrape_g2, &mut rand::rng()) {
        Ok(summary) => summary,
        Err(RunError::Input(e)) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
        Err(RunError::Output(e)) => return Err(e),
    };

    println!("✅ {OUTPUT_FILE} CREATED");
    println!("📦 Total reviews: {}", summary.count);
    println!("📁 Location: {}", summary.path.display());

    pause::wait_for_enter(!cli.no_pause)?;
    Ok(())
}

/// Validate, scrape or fabricate, then write `output.json` into `output_dir`.
///
/// Nothing is fetched or written when the date range is rejected.
fn run<S, R>(cli: &Cli, output_dir: &Path, scrape: S, rng: &mut R) -> Result<Summary, RunError>
where
    S: FnOnce(&str) -> Vec<Review>,
    R: Rng + ?Sized,
{
    let range = DateRange::parse(&cli.start, &cli.end)?;
    tracing::debug!(start = %range.start_date, end = %range.end_date, "Validated date range");

    let scraped = scrape(&cli.company);
    let reviews = collect_reviews(scraped, &cli.company, &cli.source, &range, rng);

    let path = output_dir.join(OUTPUT_FILE);
    archiver::save_to_file(&reviews, &path)?;

    Ok(Summary { path, count: reviews.len() })
}

/// Scraped reviews win; synthetic ones only fill an empty result.
fn collect_reviews<R: Rng + ?Sized>(
    scraped: Vec<Review>,
    company: &str,
    source: &str,
    range: &DateRange,
    rng: &mut R,
) -> Vec<Review> {
    if scraped.is_empty() {
        tracing::info!("Scrape returned no reviews, falling back to generated data");
        fallback::generate(company, source, range, rng)
    } else {
        scraped
    }
}
