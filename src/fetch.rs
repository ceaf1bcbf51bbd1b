use crate::{Fetcher, ScrapeError};
use tracing::{debug, warn};

/// Plain GET over a shared `reqwest::Client`. No timeout, no retry.
#[derive(Debug, Default, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("Visit {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
        }

        Ok(response.text().await?)
    }
}
