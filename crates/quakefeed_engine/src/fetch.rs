use std::time::Duration;

use crate::types::{FailureKind, FetchError};

/// Fixed transport bounds for one feed request. Not user-configurable in
/// production; tests shrink them to exercise failure paths.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_millis(15_000),
            read_timeout: Duration::from_millis(10_000),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    /// Performs a single GET and returns the response body as text.
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, FetchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.read_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        // Client and response are scoped to this call; connections are
        // released on every exit path. One attempt, no retries.
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(FetchError::new(
                FailureKind::UnexpectedStatus(status),
                response.status().to_string(),
            ));
        }

        response.text().await.map_err(map_reqwest_error)
    }
}

// Timeouts, DNS and connection failures all classify as Network; the message
// keeps the underlying cause for the diagnostic log.
fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    FetchError::new(FailureKind::Network, err.to_string())
}
