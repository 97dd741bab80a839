use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::{config::SearchApiConfig, fetcher::FetchError};

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub description: String,
}

/// Client for the cafe article search API.
#[derive(Clone)]
pub struct SearchClient {
    http: Client,
    api: SearchApiConfig,
}

impl SearchClient {
    pub fn new(http: Client, api: SearchApiConfig) -> Self {
        Self { http, api }
    }

    /// Newest-first search for `query`, at most `limit` results.
    #[instrument(skip(self), fields(url = %self.api.url))]
    pub async fn search(&self, query: &str, limit: u32) -> Result<SearchResponse, FetchError> {
        let display = limit.to_string();
        let response = self
            .http
            .get(&self.api.url)
            .header(CLIENT_ID_HEADER, &self.api.client_id)
            .header(CLIENT_SECRET_HEADER, &self.api.client_secret)
            .query(&[
                ("query", query),
                ("display", display.as_str()),
                ("sort", "date"),
            ])
            .send()
            .await
            .map_err(FetchError::from_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http { status });
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Json(e.to_string()))?;

        debug!(items = body.items.len(), "search API responded");
        Ok(body)
    }
}

/// First result whose link mentions the article id, either as an
/// `articleid=` parameter or after a slash.
///
/// This is a substring test: `/123` also matches a link containing `/1234`.
pub fn find_matching_item<'a>(items: &'a [SearchItem], article_id: &str) -> Option<&'a SearchItem> {
    let by_param = format!("articleid={article_id}");
    let by_path = format!("/{article_id}");
    items
        .iter()
        .find(|item| item.link.contains(&by_param) || item.link.contains(&by_path))
}
