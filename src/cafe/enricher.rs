use tracing::{info, warn};

use crate::{
    cafe::search::{SearchClient, SearchItem, find_matching_item},
    config::limits,
    config::messages,
    models::{Post, ScrapedPost},
    text::{clean, truncate},
};

/// Fill in descriptions for scraped posts from the search API.
///
/// Never fails: if the API is unreachable every post gets the placeholder.
/// Either way the article ids are gone from the returned posts.
pub async fn enrich_posts(search: &SearchClient, query: &str, posts: Vec<ScrapedPost>) -> Vec<Post> {
    match search.search(query, limits::ENRICH_DISPLAY).await {
        Ok(response) => apply_descriptions(posts, &response.items),
        Err(e) => {
            warn!(error = %e, "search API unavailable, using placeholder descriptions");
            posts
                .into_iter()
                .map(|post| post.finalize(messages::NO_PREVIEW))
                .collect()
        }
    }
}

pub fn apply_descriptions(posts: Vec<ScrapedPost>, items: &[SearchItem]) -> Vec<Post> {
    let mut matched = 0;
    let enriched: Vec<Post> = posts
        .into_iter()
        .map(|post| {
            let description = find_matching_item(items, &post.article_id)
                .and_then(|item| preview_from(&item.description));
            if description.is_some() {
                matched += 1;
            }
            post.finalize(description.unwrap_or_else(|| messages::NO_PREVIEW.to_string()))
        })
        .collect();

    info!(total = enriched.len(), matched, "descriptions applied");
    enriched
}

fn preview_from(raw: &str) -> Option<String> {
    let description = truncate(&clean(raw), limits::DESCRIPTION_LENGTH);
    let length = description.chars().count();
    (length >= limits::MIN_ENRICHED_LENGTH && length >= limits::MIN_DESCRIPTION_LENGTH)
        .then_some(description)
}
