use thiserror::Error;

/// Failures surfaced by the fetch collaborator.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not read body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} unavailable: {reason}")]
    Unavailable { url: String, reason: String },
}

/// Errors of a scrape run.
///
/// Only `Discovery` ever escapes `Scraper::run`; the per-room variants are
/// caught at the unit boundary and reported in the run's failure list.
#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("link discovery failed: {0}")]
    Discovery(#[source] FetchError),

    #[error("invalid index URL {url}: {source}")]
    IndexUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("could not parse {url}: {reason}")]
    Parse { url: String, reason: String },
}
