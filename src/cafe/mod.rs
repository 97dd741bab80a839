//! Forum ("cafe") post aggregation.
//!
//! The listing page is scraped first and its posts are enriched with
//! descriptions from the search API. When scraping yields nothing, or fails,
//! the search API is used on its own. Nothing here returns an error: the worst
//! case is an empty list.

pub mod enricher;
pub mod fallback;
pub mod scraper;
pub mod search;

pub use search::SearchClient;

use reqwest::Client;
use tracing::{info, warn};

use crate::{config::Config, config::limits, models::Post};

pub async fn fetch_cafe_posts(browser: &Client, search: &SearchClient, config: &Config) -> Vec<Post> {
    let cafe = config.cafe();

    let scraped =
        match scraper::fetch_cafe_posts_from_html(browser, cafe, limits::POSTS_COUNT).await {
            Ok(scraped) => scraped,
            Err(e) => {
                warn!(error = %e, "cafe scrape failed, falling back to search API");
                return fallback_or_empty(search, config).await;
            }
        };

    if scraped.is_empty() {
        info!("no posts found on listing page, falling back to search API");
        return fallback_or_empty(search, config).await;
    }

    let posts = enricher::enrich_posts(search, &cafe.enrich_query, scraped).await;
    info!(count = posts.len(), "cafe posts scraped");
    posts
}

async fn fallback_or_empty(search: &SearchClient, config: &Config) -> Vec<Post> {
    match fallback::fetch_cafe_posts_from_api(search, config.cafe(), limits::POSTS_COUNT).await {
        Ok(posts) => posts,
        Err(e) => {
            warn!(error = %e, "search API fallback failed");
            Vec::new()
        }
    }
}
