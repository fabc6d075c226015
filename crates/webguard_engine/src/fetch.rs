use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::CONTENT_TYPE;
use scraper::Selector;

use crate::decode::decode_page;
use crate::extract::select_text;
use crate::{FetchError, FetchFailure};

/// The page and element under watch, validated once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget {
    url: String,
    selector: String,
}

impl WatchTarget {
    /// Validates the URL and CSS selector eagerly so a typo fails the process
    /// at startup instead of on the first scheduled cycle.
    pub fn new(url: impl Into<String>, selector: impl Into<String>) -> Result<Self, FetchError> {
        let url = url.into();
        let selector = selector.into();
        reqwest::Url::parse(&url)
            .map_err(|err| FetchError::new(FetchFailure::InvalidUrl, err.to_string()))?;
        Selector::parse(&selector)
            .map_err(|err| FetchError::new(FetchFailure::InvalidSelector, err.to_string()))?;
        Ok(Self { url, selector })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }
}

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Overall bound on the fetch, the "wait timeout" of the monitor.
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
            redirect_limit: 5,
            max_bytes: 5 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
            ],
        }
    }
}

/// Narrow fetch contract consumed by the monitor cycle: resolve the watched
/// target to the current text of its element, or say precisely why not.
#[async_trait::async_trait]
pub trait ContentFetcher: Send + Sync {
    async fn fetch(&self, target: &WatchTarget) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    settings: FetchSettings,
}

impl HttpFetcher {
    pub fn new(settings: FetchSettings) -> Self {
        Self { settings }
    }

    fn build_client(
        &self,
        redirect_counter: Arc<AtomicUsize>,
    ) -> Result<reqwest::Client, FetchError> {
        let redirect_limit = self.settings.redirect_limit;
        let policy = reqwest::redirect::Policy::custom(move |attempt| {
            let count = attempt.previous().len();
            redirect_counter.store(count, Ordering::Relaxed);
            if count >= redirect_limit {
                attempt.error("redirect limit exceeded")
            } else {
                attempt.follow()
            }
        });

        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .redirect(policy)
            .build()
            .map_err(|err| FetchError::new(FetchFailure::Network, err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    async fn download(&self, url: &str) -> Result<(Vec<u8>, Option<String>), FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FetchFailure::InvalidUrl, err.to_string()))?;
        let redirect_counter = Arc::new(AtomicUsize::new(0));
        let client = self.build_client(redirect_counter)?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FetchFailure::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FetchFailure::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FetchFailure::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
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
                    FetchFailure::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        Ok((bytes, content_type))
    }
}

#[async_trait::async_trait]
impl ContentFetcher for HttpFetcher {
    async fn fetch(&self, target: &WatchTarget) -> Result<String, FetchError> {
        let (bytes, content_type) = self.download(target.url()).await?;
        let page = decode_page(&bytes, content_type.as_deref())?;
        select_text(&page.html, target.selector())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FetchFailure::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FetchFailure::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FetchFailure::Network, err.to_string())
}
