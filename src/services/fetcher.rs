use std::error::Error as StdError;
use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue, CONTENT_TYPE};
use scraper::Html;

use super::content_extractor::{clean_text, extract_content, strip_page_chrome};

/// Browser-like identity; bare client UAs get blocked outright by many
/// business sites.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Backoff before the single retry.
const RETRY_BACKOFF: Duration = Duration::from_secs(1);

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("secure transport error: {0}")]
    TransportSecurity(String),
    #[error("request failed: {0}")]
    Request(String),
    #[error("not html content: {0}")]
    NonHtmlContent(String),
    #[error("response could not be parsed: {0}")]
    Parse(String),
}

impl FetchError {
    // TLS failures and non-HTML responses will not improve on a second
    // attempt; only network-level failures get the retry.
    fn is_retryable(&self) -> bool {
        matches!(
            self,
            FetchError::Timeout | FetchError::Request(_) | FetchError::Parse(_)
        )
    }
}

/// One successfully fetched page: cleaned text for signal extraction plus
/// the raw body for link discovery. Consumed immediately, never persisted.
pub struct FetchedPage {
    pub content: String,
    pub html: String,
}

/// Resilient single-page fetcher. Each instance owns its own HTTP session;
/// workers never share one.
pub struct PageFetcher {
    client: reqwest::Client,
    request_delay: Duration,
}

impl PageFetcher {
    pub fn new(timeout: Duration, request_delay: Duration) -> Self {
        let client = reqwest::Client::builder()
            .default_headers(browser_headers())
            .timeout(timeout)
            // Small-business sites routinely ship broken certificates;
            // accept them rather than lose the page.
            .danger_accept_invalid_certs(true)
            .build()
            .expect("failed to build http client");

        PageFetcher {
            client,
            request_delay,
        }
    }

    /// Fetch one page: normalize the scheme, GET with one retry on
    /// transient failure, reject non-HTML, then extract cleaned text.
    pub async fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let url = normalize_url(url);

        // Fixed delay before every request, part of the contract: it keeps
        // the crawl below typical rate-limiting thresholds.
        tokio::time::sleep(self.request_delay).await;

        let body = match self.get_html(&url).await {
            Ok(body) => body,
            Err(e) if e.is_retryable() => {
                log::warn!("First request failed for {}: {}. Retrying once", url, e);
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.get_html(&url).await?
            }
            Err(e) => return Err(e),
        };

        let stripped = strip_page_chrome(&body);
        let content = {
            let document = Html::parse_document(&stripped);
            clean_text(&extract_content(&document))
        };

        Ok(FetchedPage {
            content,
            html: body,
        })
    }

    async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(classify_error)?
            .error_for_status()
            .map_err(classify_error)?;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_lowercase();
        if !content_type.contains("text/html") {
            return Err(FetchError::NonHtmlContent(content_type));
        }

        response.text().await.map_err(classify_error)
    }
}

/// Rewrite to the secure scheme before dispatch; bare hosts get https.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim();
    if let Some(rest) = url.strip_prefix("http://") {
        format!("https://{}", rest)
    } else if url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::USER_AGENT, HeaderValue::from_static(USER_AGENT));
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static("en-US,en;q=0.9"),
    );
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        HeaderValue::from_static("1"),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("max-age=0"),
    );
    headers
}

fn classify_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else if is_tls_error(&err) {
        FetchError::TransportSecurity(err.to_string())
    } else if err.is_decode() {
        FetchError::Parse(err.to_string())
    } else {
        FetchError::Request(err.to_string())
    }
}

fn is_tls_error(err: &reqwest::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = err.source();
    while let Some(inner) = source {
        let message = inner.to_string().to_lowercase();
        if message.contains("certificate") || message.contains("tls") || message.contains("ssl") {
            return true;
        }
        source = inner.source();
    }
    false
}
