use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::FetchError;

/// Retrieves the body of a page. Non-2xx responses are errors.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// HTTP fetcher that opens a fresh client for every request, so concurrent
/// units never share connection state.
pub struct HttpFetcher {
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }

    fn session(&self, url: &str) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if let Err(e) = Url::parse(url) {
            return Err(FetchError::Unavailable {
                url: url.to_string(),
                reason: format!("invalid URL: {}", e),
            });
        }
        let client = self.session(url)?;
        let response = client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })?;
        debug!("Fetched {} ({} bytes)", url, body.len());
        Ok(body)
    }
}
