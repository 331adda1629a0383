use crate::availability::PageContent;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info};

// Listing sites answer bot-looking clients with challenge pages, so the
// request carries a desktop browser User-Agent.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },
}

/// HTTP client for pulling raw listing page markup.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    /// Builds a fetcher whose timeout covers the whole request, connect
    /// through body.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }

    /// Issues one GET and returns the document text. Any non-2xx status is an
    /// error; there are no retries.
    pub async fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        debug!(%url, "requesting listing page");

        let response = self
            .client
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
                status,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        info!(%url, bytes = body.len(), "fetched listing page");
        Ok(PageContent::new(body))
    }
}
