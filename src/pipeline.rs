use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::{mpsc, Semaphore};
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetch::Fetch;
use crate::links::discover_links;
use crate::model::{Anomaly, Extraction, RoomRecord};
use crate::parser;

/// A room page that produced no record.
#[derive(Debug)]
pub struct RoomFailure {
    pub url: String,
    pub error: ScrapeError,
}

/// Outcome of a full run. `rooms` is in completion order.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub attempted: usize,
    pub rooms: Vec<RoomRecord>,
    pub failures: Vec<RoomFailure>,
    pub anomalies: Vec<(String, Anomaly)>,
}

/// Result of one unit, sent from its worker to the coordinator.
struct UnitOutcome {
    url: String,
    result: Result<Extraction, ScrapeError>,
}

pub struct Scraper<F> {
    fetcher: Arc<F>,
    cfg: Arc<ScraperConfig>,
}

impl<F: Fetch + 'static> Scraper<F> {
    pub fn new(fetcher: F, cfg: ScraperConfig) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            cfg: Arc::new(cfg),
        }
    }

    /// Discover room links, then scrape every one of them.
    ///
    /// Fails only when the index URL is invalid or its page cannot be fetched.
    pub async fn run(&self) -> Result<ScrapeReport, ScrapeError> {
        let links = discover_links(self.fetcher.as_ref(), &self.cfg).await?;
        Ok(self.scrape_rooms(links).await)
    }

    /// Scrape `links` on a bounded pool. Per-room failures are logged and
    /// reported, never propagated.
    pub async fn scrape_rooms(&self, links: Vec<String>) -> ScrapeReport {
        let total = links.len();
        let workers = self.cfg.worker_count();
        info!("Scraping {} rooms using {} workers...", total, workers);

        let semaphore = Arc::new(Semaphore::new(workers));
        let pb = ProgressBar::new(total as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
        {
            pb.set_style(style.progress_chars("=> "));
        }

        // Workers send outcomes; only this task touches the report.
        let (tx, mut rx) = mpsc::channel::<UnitOutcome>(workers * 2);

        for url in links {
            let fetcher = Arc::clone(&self.fetcher);
            let cfg = Arc::clone(&self.cfg);
            let sem = Arc::clone(&semaphore);
            let tx = tx.clone();

            tokio::spawn(async move {
                let Ok(_permit) = sem.acquire().await else {
                    return;
                };
                let result = scrape_room(fetcher.as_ref(), &url, &cfg).await;
                let _ = tx.send(UnitOutcome { url, result }).await;
            });
        }

        // rx closes once every worker has dropped its sender.
        drop(tx);

        let mut report = ScrapeReport {
            attempted: total,
            ..Default::default()
        };
        let mut completed = 0usize;

        while let Some(UnitOutcome { url, result }) = rx.recv().await {
            completed += 1;
            match result {
                Ok(Extraction { record, anomalies }) => {
                    emit_status(&pb, &status_line(completed, total, &url, None));
                    for anomaly in anomalies {
                        warn!("{} for {}", anomaly, url);
                        report.anomalies.push((url.clone(), anomaly));
                    }
                    report.rooms.push(record);
                }
                Err(error) => {
                    emit_status(&pb, &status_line(completed, total, &url, Some(&error)));
                    warn!("Error scraping {}: {}", url, error);
                    report.failures.push(RoomFailure { url, error });
                }
            }
            pb.inc(1);
        }

        pb.finish_and_clear();
        if completed < total {
            warn!("{} room tasks ended without reporting", total - completed);
        }
        info!(
            "Successfully scraped {} of {} rooms ({} failed)",
            report.rooms.len(),
            total,
            report.failures.len()
        );
        report
    }
}

/// Fetch and extract a single room page.
async fn scrape_room<F: Fetch + ?Sized>(
    fetcher: &F,
    url: &str,
    cfg: &ScraperConfig,
) -> Result<Extraction, ScrapeError> {
    let body = fetcher.fetch(url).await?;
    parser::extract_room(url, &body, cfg)
}

/// Per-unit progress line, e.g. `[3/5] ✓ cle-a224-classroom.php`.
fn status_line(completed: usize, total: usize, url: &str, error: Option<&ScrapeError>) -> String {
    match error {
        None => format!("[{}/{}] ✓ {}", completed, total, page_name(url)),
        Some(e) => format!("[{}/{}] ✗ {} - {}", completed, total, page_name(url), e),
    }
}

/// Print above the bar. `ProgressBar::println` drops output while the bar is
/// hidden (stderr not a terminal); `suspend` prints either way.
fn emit_status(pb: &ProgressBar, line: &str) {
    pb.suspend(|| println!("{}", line));
}

fn page_name(url: &str) -> &str {
    url.rsplit('/').next().unwrap_or(url)
}
