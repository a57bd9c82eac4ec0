use crate::domain::ports::{FetchResponse, Fetcher};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// `Fetcher` over a shared `reqwest::Client`. Non-success statuses are
/// returned, not turned into errors; the loader decides what they mean.
#[derive(Debug, Clone, Default)]
pub struct ReqwestFetcher {
    client: Client,
}

impl ReqwestFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchResponse> {
        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("API response status: {}", status);

        let body = response.bytes().await?.to_vec();
        Ok(FetchResponse { status, body })
    }
}
