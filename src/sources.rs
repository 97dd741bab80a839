use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;
use tracing::info;

use crate::{
    cafe::{self, SearchClient},
    config::Config,
    digest::format_digest,
    feed,
    fetcher::{FetchError, browser_client, service_client},
    models::Post,
};

/// Where the digest's two post lists come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DigestSource: Send + Sync {
    async fn cafe_posts(&self) -> anyhow::Result<Vec<Post>>;
    async fn feed_posts(&self) -> anyhow::Result<Vec<Post>>;
}

/// The real sources: cafe listing + search API, and the syndication feed.
pub struct LiveSources {
    config: Arc<Config>,
    browser: Client,
    http: Client,
    search: SearchClient,
}

impl LiveSources {
    pub fn new(config: Arc<Config>) -> Result<Self, FetchError> {
        let browser = browser_client()?;
        let http = service_client()?;
        let search = SearchClient::new(http.clone(), config.search().clone());
        Ok(Self {
            config,
            browser,
            http,
            search,
        })
    }
}

#[async_trait]
impl DigestSource for LiveSources {
    async fn cafe_posts(&self) -> anyhow::Result<Vec<Post>> {
        Ok(cafe::fetch_cafe_posts(&self.browser, &self.search, &self.config).await)
    }

    async fn feed_posts(&self) -> anyhow::Result<Vec<Post>> {
        Ok(feed::fetch_feed_posts(&self.http, self.config.feed_url()).await)
    }
}

/// Collect both sources concurrently and render the message.
pub async fn build_digest(source: &dyn DigestSource) -> anyhow::Result<String> {
    let (cafe_posts, feed_posts) = tokio::join!(source.cafe_posts(), source.feed_posts());
    let (cafe_posts, feed_posts) = (cafe_posts?, feed_posts?);

    info!(
        cafe = cafe_posts.len(),
        feed = feed_posts.len(),
        "posts collected"
    );

    Ok(format_digest(&cafe_posts, &feed_posts))
}
