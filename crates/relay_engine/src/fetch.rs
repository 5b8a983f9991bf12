use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;

use crate::{FailureKind, FetchError, FetchMetadata, FetchOutput};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            user_agent: "page-relay fetch script".to_string(),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError>;
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
            .timeout(self.settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(
                self.settings.redirect_limit,
            ))
            .user_agent(self.settings.user_agent.clone())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    /// One GET, any status. Callers decide whether a non-success status is a
    /// problem; the fetch scripts print it and carry on, the page probe
    /// treats it as a failed read.
    async fn fetch(&self, url: &str) -> Result<FetchOutput, FetchError> {
        let parsed = url::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let metadata = FetchMetadata {
            original_url: url.to_string(),
            final_url,
            status,
            content_type,
            headers,
            byte_len: bytes.len() as u64,
        };

        Ok(FetchOutput { bytes, metadata })
    }
}

/// Run one fetch to completion on a private current-thread runtime.
///
/// The interactive fetch scripts are synchronous front to back; the runtime
/// stays an engine detail, as it does for the pipeline driver.
pub fn fetch_blocking(settings: FetchSettings, url: &str) -> Result<FetchOutput, FetchError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
    runtime.block_on(async { ReqwestFetcher::new(settings).fetch(url).await })
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
