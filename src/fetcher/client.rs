use crate::fetcher::{errors::FetchError, pipeline::process_response, types::PageResponse};
use reqwest::{
    Client, ClientBuilder,
    header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tracing::instrument;

const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024; // 5MB

/// The listing page serves a different document to non-browser clients.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const BROWSER_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const BROWSER_ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9";

const SERVICE_USER_AGENT: &str = concat!("cafe-digest/", env!("CARGO_PKG_VERSION"));

/// Client that presents itself as a desktop browser, for scraping.
pub fn browser_client() -> Result<Client, FetchError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static(BROWSER_ACCEPT));
    headers.insert(
        ACCEPT_LANGUAGE,
        HeaderValue::from_static(BROWSER_ACCEPT_LANGUAGE),
    );

    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(BROWSER_USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .default_headers(headers)
        .build()
        .map_err(|e| FetchError::ClientSetup(e.to_string()))
}

/// Client for JSON APIs, feeds and callback delivery.
pub fn service_client() -> Result<Client, FetchError> {
    ClientBuilder::new()
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .user_agent(SERVICE_USER_AGENT)
        .build()
        .map_err(|e| FetchError::ClientSetup(e.to_string()))
}

/// Fetch an HTML page and decode it to UTF-8.
///
/// The body is always decoded with `encoding_label`. The listing server's
/// Content-Type charset is not reliable, so it is ignored.
#[instrument(skip_all, fields(url = %url))]
pub async fn fetch_page(
    client: &Client,
    url: &str,
    encoding_label: &str,
) -> Result<PageResponse, FetchError> {
    let parsed_url = url::Url::parse(url)?;

    let response = client
        .get(parsed_url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    if let Some(content_length) = response.content_length()
        && content_length > MAX_BODY_SIZE
    {
        return Err(FetchError::BodyTooLarge(content_length));
    }

    let final_url = response.url().clone();
    let status = response.status();

    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let body_bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    // Content-Length may be missing or wrong
    if body_bytes.len() as u64 > MAX_BODY_SIZE {
        return Err(FetchError::BodyTooLarge(body_bytes.len() as u64));
    }

    process_response(final_url, status, body_bytes, encoding_label)
}
