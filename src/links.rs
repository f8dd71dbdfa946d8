use std::collections::HashSet;
use std::sync::LazyLock;

use scraper::{Html, Selector};
use tracing::{debug, info};
use url::Url;

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetch::Fetch;

static ANCHOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Fetch the index page and return absolute room page URLs in page order.
pub async fn discover_links<F: Fetch + ?Sized>(
    fetcher: &F,
    cfg: &ScraperConfig,
) -> Result<Vec<String>, ScrapeError> {
    let base = Url::parse(&cfg.index_url).map_err(|source| ScrapeError::IndexUrl {
        url: cfg.index_url.clone(),
        source,
    })?;

    info!("Fetching room links: {}", cfg.index_url);
    let html = fetcher
        .fetch(&cfg.index_url)
        .await
        .map_err(ScrapeError::Discovery)?;

    let found = parse_room_links(&html, &base, &cfg.link_marker, &cfg.page_suffix);
    info!(
        "Found {} room links ({} duplicates dropped)",
        found.links.len(),
        found.duplicates
    );
    Ok(found.links)
}

/// Room page URLs selected from an index page.
#[derive(Debug, Default)]
pub struct FoundLinks {
    pub links: Vec<String>,
    /// Anchors whose resolved target was already listed.
    pub duplicates: usize,
}

/// Every `<a href>` whose target contains `marker` and ends with `suffix`,
/// resolved against `base`. Repeated targets are kept once.
pub fn parse_room_links(html: &str, base: &Url, marker: &str, suffix: &str) -> FoundLinks {
    let doc = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut found = FoundLinks::default();

    for anchor in doc.select(&ANCHOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        if !href.contains(marker) || !href.ends_with(suffix) {
            continue;
        }
        let url = match base.join(href) {
            Ok(u) => u.to_string(),
            Err(e) => {
                debug!("Skipping unresolvable href {:?}: {}", href, e);
                continue;
            }
        };
        if seen.insert(url.clone()) {
            found.links.push(url);
        } else {
            found.duplicates += 1;
        }
    }

    found
}
