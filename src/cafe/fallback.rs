use tracing::{info, instrument};

use crate::{
    cafe::search::{SearchClient, SearchItem},
    config::{CafeConfig, limits, messages},
    fetcher::FetchError,
    models::Post,
    text::{clean, truncate},
};

/// Read the newest cafe posts straight from the search API, bypassing the
/// listing page.
#[instrument(skip_all)]
pub async fn fetch_cafe_posts_from_api(
    search: &SearchClient,
    cafe: &CafeConfig,
    limit: usize,
) -> Result<Vec<Post>, FetchError> {
    let response = search
        .search(&cafe.fallback_query, limits::FALLBACK_DISPLAY)
        .await?;
    let posts = posts_from_search(&response.items, &cafe.community_filter, limit);
    info!(count = posts.len(), "cafe posts read from search API");
    Ok(posts)
}

/// Keep results from our own community, newest first, as finished posts.
pub fn posts_from_search(items: &[SearchItem], community_filter: &str, limit: usize) -> Vec<Post> {
    items
        .iter()
        .filter(|item| item.link.contains(community_filter))
        .take(limit)
        .map(|item| {
            let description = match clean(&item.description) {
                d if d.is_empty() => messages::NO_PREVIEW.to_string(),
                d => d,
            };
            Post {
                title: clean(&item.title),
                description: truncate(&description, limits::TEXT_LENGTH),
                link: item.link.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILTER: &str = "cafe.naver.com/linkus16";

    fn item(link: &str, title: &str, description: &str) -> SearchItem {
        SearchItem {
            title: title.to_string(),
            link: link.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_filters_foreign_communities() {
        let items = vec![
            item("https://cafe.naver.com/othercafe/1", "남의 글", "본문"),
            item("https://cafe.naver.com/linkus16/2", "<b>우리</b> 글", "우리 카페 본문"),
        ];

        let posts = posts_from_search(&items, FILTER, 3);

        assert_eq!(
            posts,
            vec![Post {
                title: "우리 글".to_string(),
                description: "우리 카페 본문".to_string(),
                link: "https://cafe.naver.com/linkus16/2".to_string(),
            }]
        );
    }

    #[test]
    fn test_takes_first_n_after_filtering() {
        let items: Vec<_> = (1..=6)
            .map(|i| item(&format!("https://cafe.naver.com/linkus16/{i}"), "제목", "본문"))
            .collect();

        let posts = posts_from_search(&items, FILTER, 3);

        let links: Vec<_> = posts.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://cafe.naver.com/linkus16/1",
                "https://cafe.naver.com/linkus16/2",
                "https://cafe.naver.com/linkus16/3",
            ]
        );
    }

    #[test]
    fn test_missing_description_gets_placeholder() {
        let items = vec![item("https://cafe.naver.com/linkus16/1", "제목", "<br/>")];

        let posts = posts_from_search(&items, FILTER, 3);

        assert_eq!(posts[0].description, messages::NO_PREVIEW);
    }

    #[test]
    fn test_description_is_capped() {
        let items = vec![item("https://cafe.naver.com/linkus16/1", "제목", &"a".repeat(200))];

        let posts = posts_from_search(&items, FILTER, 3);

        assert_eq!(posts[0].description, format!("{}...", "a".repeat(150)));
    }
}
