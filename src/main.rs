use std::{process::ExitCode, sync::Arc};

use anyhow::Result;
use chrono::Utc;
use watchlist_export::{
    config::Config,
    error::AppError,
    models::{watchlist_timestamp, MediaKind},
    services::{providers::OmdbProvider, run_export, ExportSummary},
};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing; progress output goes to stdout, so stay quiet by default
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            if let Some(hint) = err.downcast_ref::<AppError>().and_then(AppError::hint) {
                eprintln!("{}", hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    // One timestamp for every row of this run
    let watchlisted_at = watchlist_timestamp(Utc::now());

    let config = Config::from_env()?;
    let provider = Arc::new(OmdbProvider::from_config(&config));

    let summary = run_export(&config, provider, &watchlisted_at).await?;
    print_summary(&config, &summary);

    Ok(())
}

fn print_summary(config: &Config, summary: &ExportSummary) {
    println!(
        "\nProcessing complete! Results saved to '{}'",
        config.output_csv_file
    );
    for kind in [MediaKind::Movie, MediaKind::Show] {
        let counts = summary.kind(kind);
        println!(
            "{}: {} rows, {} resolved, {} not found, {} API errors",
            kind, counts.rows, counts.found, counts.not_found, counts.errors
        );
    }
    println!("Review the CSV, especially rows marked 'Not Found' or 'API Error'.");
    println!("You might need to manually search for those or refine their titles.");
    println!("For Trakt import, you will only need the 'id' column.");
}
