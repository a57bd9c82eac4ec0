use crate::domain::model::{LaborStatsDocument, PageData};
use crate::domain::ports::Fetcher;
use crate::utils::error::{LoaderError, Result};

pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/mthelm85/labor-market-data/main/data/labor_stats.json";

/// Fetches the labor statistics document and shapes it into page data.
pub struct LaborDataLoader<F: Fetcher> {
    fetcher: F,
    url: String,
}

impl<F: Fetcher> LaborDataLoader<F> {
    pub fn new(fetcher: F, url: impl Into<String>) -> Self {
        Self {
            fetcher,
            url: url.into(),
        }
    }

    pub fn with_default_url(fetcher: F) -> Self {
        Self::new(fetcher, DEFAULT_SOURCE_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One fetch and one parse. Any failure is returned as is.
    pub async fn try_load(&self) -> Result<PageData> {
        let response = self.fetcher.fetch(&self.url).await?;

        if !response.is_success() {
            return Err(LoaderError::StatusError {
                status: response.status,
            });
        }

        // 只解析一次，欄位原樣投影到頁面資料
        let body: serde_json::Value = serde_json::from_slice(&response.body)?;
        let document = LaborStatsDocument::from_json_value(body)?;
        let page = PageData::from_document(document);

        let (monthly, industries, occupations) = page.entry_counts();
        tracing::debug!(
            "Parsed labor document: {} monthly, {} industries, {} occupations",
            monthly,
            industries,
            occupations
        );

        Ok(page)
    }

    /// Like [`try_load`](Self::try_load), but every failure becomes the
    /// fallback page data carrying the error message.
    pub async fn load(&self) -> PageData {
        match self.try_load().await {
            Ok(page) => page,
            Err(e) => {
                tracing::error!("Error loading labor data: {}", e);
                PageData::fallback(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FetchResponse;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    enum Scripted {
        Respond(u16, Vec<u8>),
        Fail,
    }

    struct MockFetcher {
        reply: Scripted,
        requested: Arc<Mutex<Vec<String>>>,
    }

    impl MockFetcher {
        fn json(status: u16, body: serde_json::Value) -> Self {
            Self::raw(status, serde_json::to_vec(&body).unwrap())
        }

        fn raw(status: u16, body: Vec<u8>) -> Self {
            Self {
                reply: Scripted::Respond(status, body),
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Scripted::Fail,
                requested: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchResponse> {
            self.requested.lock().unwrap().push(url.to_string());
            match &self.reply {
                Scripted::Respond(status, body) => Ok(FetchResponse {
                    status: *status,
                    body: body.clone(),
                }),
                Scripted::Fail => Err(LoaderError::IoError(std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "connection refused",
                ))),
            }
        }
    }

    #[tokio::test]
    async fn test_load_projects_document_fields() {
        let fetcher = MockFetcher::json(
            200,
            json!({
                "monthly": [{"date": "2024-12", "unemployment_rate": 4.2}],
                "industries": [{"name": "Construction", "employment": 8200}],
                "occupations": [{"title": "Nurses", "openings": 1200}],
                "generated_at": "2025-01-15T08:00:00Z",
                "lookback_months": 24,
                "extra": "ignored"
            }),
        );
        let requested = fetcher.requested.clone();
        let loader = LaborDataLoader::with_default_url(fetcher);

        let page = loader.load().await;

        assert_eq!(*requested.lock().unwrap(), vec![DEFAULT_SOURCE_URL.to_string()]);
        assert_eq!(page.monthly, json!([{"date": "2024-12", "unemployment_rate": 4.2}]));
        assert_eq!(page.industries, json!([{"name": "Construction", "employment": 8200}]));
        assert_eq!(page.occupations, json!([{"title": "Nurses", "openings": 1200}]));
        assert_eq!(page.generated_at, Some(json!("2025-01-15T08:00:00Z")));
        assert_eq!(page.lookback_months, Some(json!(24)));
        assert!(page.error.is_none());
    }

    #[tokio::test]
    async fn test_load_defaults_missing_series_to_empty() {
        let loader = LaborDataLoader::new(
            MockFetcher::json(200, json!({ "monthly": [1, 2, 3] })),
            "http://localhost/labor.json",
        );

        let page = loader.load().await;

        assert_eq!(page.monthly, json!([1, 2, 3]));
        assert_eq!(page.industries, json!([]));
        assert_eq!(page.occupations, json!([]));
        assert!(page.generated_at.is_none());
        assert!(page.lookback_months.is_none());
        assert!(!page.is_fallback());
    }

    #[tokio::test]
    async fn test_non_success_status_falls_back() {
        let loader = LaborDataLoader::with_default_url(MockFetcher::json(404, json!({})));

        let page = loader.load().await;

        assert_eq!(page, PageData::fallback("Failed to fetch labor data"));
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_with_message() {
        let loader = LaborDataLoader::with_default_url(MockFetcher::failing());

        let page = loader.load().await;

        assert_eq!(page.monthly, json!([]));
        assert_eq!(page.lookback_months, Some(json!(0)));
        assert!(page.error.unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_loosely_typed_metadata_is_not_a_failure() {
        let loader = LaborDataLoader::with_default_url(MockFetcher::json(
            200,
            json!({
                "monthly": {"2024-12": 4.1},
                "generated_at": 1736900000,
                "lookback_months": 24.0
            }),
        ));

        let page = loader.try_load().await.unwrap();

        assert!(!page.is_fallback());
        assert_eq!(page.monthly, json!({"2024-12": 4.1}));
        assert_eq!(page.generated_at, Some(json!(1736900000)));
        assert_eq!(page.lookback_months, Some(json!(24.0)));
    }

    #[tokio::test]
    async fn test_null_body_falls_back() {
        let loader = LaborDataLoader::with_default_url(MockFetcher::raw(200, b"null".to_vec()));

        assert!(matches!(loader.try_load().await, Err(LoaderError::ParseError(_))));
        assert!(loader.load().await.is_fallback());
    }

    #[tokio::test]
    async fn test_malformed_json_falls_back() {
        let loader =
            LaborDataLoader::with_default_url(MockFetcher::raw(200, b"<html>oops</html>".to_vec()));

        assert!(matches!(loader.try_load().await, Err(LoaderError::ParseError(_))));

        let page = loader.load().await;
        assert!(page.is_fallback());
        assert!(page.generated_at.is_none());
    }
}
