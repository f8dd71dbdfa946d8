mod config;
mod error;
mod fetch;
mod links;
mod model;
mod parser;
mod pipeline;
mod sink;

use std::time::Instant;

use clap::Parser;

use config::ScraperConfig;
use fetch::HttpFetcher;
use pipeline::Scraper;

#[derive(Parser)]
#[command(
    name = "room_scraper",
    version,
    about = "Scrape the campus room catalogue into a JSON dataset"
)]
struct Cli {}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let _cli = Cli::parse();
    let t0 = Instant::now();

    let cfg = ScraperConfig::default();
    let scraper = Scraper::new(HttpFetcher::new(cfg.user_agent.clone()), cfg.clone());

    // Discovery failure aborts before anything is written.
    let report = scraper.run().await?;
    sink::save_json(&cfg.output_path, &report.rooms)?;

    println!(
        "Scraped {} of {} rooms ({} failed, {} anomalies).",
        report.rooms.len(),
        report.attempted,
        report.failures.len(),
        report.anomalies.len()
    );
    for f in &report.failures {
        println!("  ✗ {}: {}", f.url, f.error);
    }
    println!("Saved to {}", cfg.output_path);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }
    Ok(())
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
