use std::time::Duration;

use url::Url;

use crate::{FetchError, HistoryRecord, ReelData, ScrapeResponse, SubmitError};

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Scrapes drive a real browser on the backend, so this stays generous.
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(90),
        }
    }
}

/// Seam over the two backend endpoints.
#[async_trait::async_trait]
pub trait Api: Send + Sync {
    /// `POST /scrape` for one URL; error precedence already applied.
    async fn submit_scrape(&self, url: &str) -> Result<ReelData, SubmitError>;
    /// `GET /data`: the full history collection, backend order.
    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    scrape_url: Url,
    data_url: Url,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, FetchError> {
        let base = Url::parse(settings.base_url.trim_end_matches('/'))
            .map_err(|err| FetchError::BadEndpoint(err.to_string()))?;
        let scrape_url = join_endpoint(&base, "scrape")?;
        let data_url = join_endpoint(&base, "data")?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(Self {
            client,
            scrape_url,
            data_url,
        })
    }
}

fn join_endpoint(base: &Url, segment: &str) -> Result<Url, FetchError> {
    let mut endpoint = base.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| FetchError::BadEndpoint("base URL cannot carry a path".to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(endpoint)
}

#[async_trait::async_trait]
impl Api for ReqwestApi {
    async fn submit_scrape(&self, url: &str) -> Result<ReelData, SubmitError> {
        let response = self
            .client
            .post(self.scrape_url.clone())
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;

        // No status-code contract: any parseable JSON body is an answer,
        // anything else is a transport failure.
        let body = response
            .text()
            .await
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        let parsed: ScrapeResponse = serde_json::from_str(&body)
            .map_err(|err| SubmitError::InvalidResponse(err.to_string()))?;
        parsed.into_outcome()
    }

    async fn fetch_history(&self) -> Result<Vec<HistoryRecord>, FetchError> {
        let response = self
            .client
            .get(self.data_url.clone())
            .send()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|err| FetchError::Network(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| FetchError::InvalidResponse(err.to_string()))
    }
}
