use regex::Regex;
use reqwest::Client;
use scraper::{Html, Selector};
use std::{collections::HashSet, sync::LazyLock};
use tracing::{debug, instrument};

use crate::{
    config::CafeConfig,
    fetcher::{FetchError, fetch_page},
    models::ScrapedPost,
    text::clean,
};

static ARTICLE_LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"a[href*="ArticleRead.nhn"]"#).expect("Failed to parse article selector")
});

static ARTICLE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"articleid=(\d+)").expect("Failed to compile article id regex"));

const ARTICLE_READ_PAGE: &str = "ArticleRead.nhn";

/// Link texts that point at replies or comment counts rather than posts.
const NOISE_TITLES: [&str; 3] = ["[2]", "답글", "댓글"];

const MIN_TITLE_CHARS: usize = 2;

/// Scrape the newest posts off the cafe listing page.
///
/// Transport and decoding errors are returned as-is; the caller decides how
/// to recover.
#[instrument(skip_all, fields(url = %cafe.list_url))]
pub async fn fetch_cafe_posts_from_html(
    client: &Client,
    cafe: &CafeConfig,
    limit: usize,
) -> Result<Vec<ScrapedPost>, FetchError> {
    let page = fetch_page(client, &cafe.list_url, &cafe.page_encoding).await?;
    debug!(
        encoding = page.encoding,
        bytes = page.body_raw.len(),
        "listing page fetched"
    );
    Ok(extract_posts(&page.body_utf8, cafe, limit))
}

/// Pull up to `limit` distinct article links out of a listing page, in
/// document order.
pub fn extract_posts(html: &str, cafe: &CafeConfig, limit: usize) -> Vec<ScrapedPost> {
    let document = Html::parse_document(html);
    let club_marker = format!("clubid={}", cafe.club_id);

    let mut posts = Vec::new();
    let mut seen_ids = HashSet::new();

    for element in document.select(&ARTICLE_LINK_SELECTOR) {
        if posts.len() >= limit {
            break;
        }

        let href = element.value().attr("href").unwrap_or_default();
        let text = element.text().collect::<String>();
        let text = text.trim();

        let Some(article_id) = ARTICLE_ID_REGEX
            .captures(href)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
        else {
            continue;
        };

        if seen_ids.contains(article_id) || text.chars().count() < MIN_TITLE_CHARS {
            continue;
        }
        if NOISE_TITLES.contains(&text) {
            continue;
        }
        // Search result pages can list articles from other communities.
        if !href.contains(&club_marker) {
            continue;
        }

        seen_ids.insert(article_id.to_string());

        posts.push(ScrapedPost {
            article_id: article_id.to_string(),
            title: clean(text),
            link: absolute_link(href, cafe),
        });
    }

    posts
}

fn absolute_link(href: &str, cafe: &CafeConfig) -> String {
    if href.starts_with('/') {
        format!("{}{}", cafe.origin, href)
    } else if href.starts_with(ARTICLE_READ_PAGE) {
        format!("{}{}", cafe.community_url, href)
    } else {
        href.to_string()
    }
}
