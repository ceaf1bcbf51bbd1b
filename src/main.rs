use clap::Parser;
use marmiton_scraper::{HttpFetcher, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

/// Scrapes marmiton's top rated entrees, main courses and desserts into a csv file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Output csv file, overwritten on every run
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    let args = Args::parse();
    info!("Scraping into {}", args.output.display());

    let fetcher = HttpFetcher::new();
    marmiton_scraper::run(&fetcher, &args.output).await?;

    Ok(())
}
