//! Syndication feed aggregation.

use feed_rs::{
    model::{Entry, Feed, FeedType},
    parser::{self, ParseFeedError},
};
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::{
    config::{limits, messages},
    fetcher::FetchError,
    models::Post,
    text::{clean, strip_hashtags, truncate},
};

/// Newest posts from the feed, or nothing at all.
///
/// An unset address, a transport failure or an unparseable document all
/// produce an empty list.
pub async fn fetch_feed_posts(client: &Client, feed_url: Option<&str>) -> Vec<Post> {
    let Some(feed_url) = feed_url else {
        info!("feed url not configured, skipping feed");
        return Vec::new();
    };

    match fetch_feed(client, feed_url).await {
        Ok(feed) => {
            let posts = posts_from_feed(&feed, limits::POSTS_COUNT);
            info!(count = posts.len(), "feed posts read");
            posts
        }
        Err(e) => {
            warn!(error = %e, "feed unavailable");
            Vec::new()
        }
    }
}

#[instrument(skip(client))]
async fn fetch_feed(client: &Client, feed_url: &str) -> Result<Feed, FetchError> {
    let url = url::Url::parse(feed_url)?;
    let response = client
        .get(url)
        .send()
        .await
        .map_err(FetchError::from_reqwest_error)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Http { status });
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?;

    parse_feed(&bytes).map_err(|e| FetchError::Feed(e.to_string()))
}

/// Parse a feed document. Entries without a global identifier keep an empty
/// `id` instead of a generated one.
pub fn parse_feed(bytes: &[u8]) -> Result<Feed, ParseFeedError> {
    parser::Builder::new()
        .id_generator(|_, _, _| String::new())
        .build()
        .parse(bytes)
}

pub fn posts_from_feed(feed: &Feed, limit: usize) -> Vec<Post> {
    if feed.entries.is_empty() {
        info!("feed has no entries");
        return Vec::new();
    }

    feed.entries
        .iter()
        .take(limit)
        .map(|entry| post_from_entry(&feed.feed_type, entry))
        .collect()
}

fn post_from_entry(feed_type: &FeedType, entry: &Entry) -> Post {
    let caption = caption_text(select_caption(feed_type, entry).unwrap_or_default());

    let link = entry
        .links
        .first()
        .map(|link| link.href.as_str())
        .filter(|href| !href.is_empty())
        .unwrap_or(entry.id.as_str())
        .to_string();

    Post {
        title: messages::FEED_POST_TITLE.to_string(),
        description: caption,
        link,
    }
}

/// The entry's caption text. RSS items carry the post text in
/// `<description>`, so it comes before `content:encoded`; Atom and JSON
/// entries prefer their content over the summary. Empty fields are skipped.
pub fn select_caption<'a>(feed_type: &FeedType, entry: &'a Entry) -> Option<&'a str> {
    let content = entry
        .content
        .as_ref()
        .and_then(|content| content.body.as_deref());
    let summary = entry.summary.as_ref().map(|text| text.content.as_str());

    let ordered = match feed_type {
        FeedType::RSS0 | FeedType::RSS1 | FeedType::RSS2 => [summary, content],
        _ => [content, summary],
    };

    ordered.into_iter().flatten().find(|text| !text.is_empty())
}

/// Sanitize a raw caption for display: no markup, no hashtags, capped.
pub fn caption_text(raw: &str) -> String {
    let caption = strip_hashtags(&clean(raw));
    if caption.is_empty() {
        messages::NO_CONTENT.to_string()
    } else {
        truncate(&caption, limits::TEXT_LENGTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(xml: &str) -> Feed {
        parse_feed(xml.as_bytes()).unwrap()
    }

    fn rss(items: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>linkus</title>
    <link>https://www.instagram.com/linkus_official_/</link>
    <description>feed</description>
    {items}
  </channel>
</rss>"#
        )
    }

    #[test]
    fn test_caption_hashtags_removed() {
        assert_eq!(caption_text("Great day #fun #sunny today"), "Great day today");
    }

    #[test]
    fn test_caption_markup_removed_before_hashtags() {
        assert_eq!(
            caption_text("<p>모임 후기</p><p>#링커스 #모임</p>"),
            "모임 후기"
        );
    }

    #[test]
    fn test_caption_only_hashtags_gets_placeholder() {
        assert_eq!(caption_text("#a #b"), messages::NO_CONTENT);
        assert_eq!(caption_text(""), messages::NO_CONTENT);
    }

    #[test]
    fn test_caption_is_capped() {
        let caption = caption_text(&"가".repeat(200));
        assert_eq!(caption.chars().count(), limits::TEXT_LENGTH + 3);
    }

    #[test]
    fn test_posts_from_feed_maps_entries() {
        let feed = parse(&rss(
            r#"
    <item>
      <title>ignored</title>
      <link>https://www.instagram.com/p/abc/</link>
      <guid>https://www.instagram.com/p/abc/</guid>
      <description><![CDATA[<div>Great day #fun #sunny today</div>]]></description>
    </item>"#,
        ));

        let posts = posts_from_feed(&feed, 3);

        assert_eq!(
            posts,
            vec![Post {
                title: messages::FEED_POST_TITLE.to_string(),
                description: "Great day today".to_string(),
                link: "https://www.instagram.com/p/abc/".to_string(),
            }]
        );
    }

    #[test]
    fn test_guid_used_when_link_missing() {
        let feed = parse(&rss(
            r#"
    <item>
      <guid>https://www.instagram.com/p/xyz/</guid>
      <description>caption</description>
    </item>"#,
        ));

        let posts = posts_from_feed(&feed, 3);

        assert_eq!(posts[0].link, "https://www.instagram.com/p/xyz/");
    }

    #[test]
    fn test_link_empty_without_link_or_guid() {
        let feed = parse(&rss(
            r#"
    <item>
      <description>caption only</description>
    </item>"#,
        ));

        let posts = posts_from_feed(&feed, 3);

        assert_eq!(posts[0].link, "");
        assert_eq!(posts[0].description, "caption only");
    }

    #[test]
    fn test_rss_description_preferred_over_encoded_content() {
        let feed = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0" xmlns:content="http://purl.org/rss/1.0/modules/content/">
  <channel>
    <title>linkus</title>
    <link>https://www.instagram.com/linkus_official_/</link>
    <description>feed</description>
    <item>
      <link>https://www.instagram.com/p/1/</link>
      <description>short summary</description>
      <content:encoded><![CDATA[<p>full caption text</p>]]></content:encoded>
    </item>
    <item>
      <link>https://www.instagram.com/p/2/</link>
      <content:encoded><![CDATA[<p>encoded only</p>]]></content:encoded>
    </item>
  </channel>
</rss>"#,
        );

        let posts = posts_from_feed(&feed, 3);

        assert_eq!(posts[0].description, "short summary");
        assert_eq!(posts[1].description, "encoded only");
    }

    #[test]
    fn test_atom_content_preferred_over_summary() {
        let feed = parse(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>linkus</title>
  <id>urn:linkus:feed</id>
  <updated>2026-10-19T10:00:00Z</updated>
  <entry>
    <title>post</title>
    <id>urn:linkus:post:1</id>
    <updated>2026-10-19T10:00:00Z</updated>
    <link href="https://www.instagram.com/p/atom/"/>
    <summary>short summary</summary>
    <content type="html">&lt;p&gt;full caption text&lt;/p&gt;</content>
  </entry>
</feed>"#,
        );

        let posts = posts_from_feed(&feed, 3);

        assert_eq!(posts[0].description, "full caption text");
        assert_eq!(posts[0].link, "https://www.instagram.com/p/atom/");
    }

    #[test]
    fn test_only_first_entries_taken() {
        let items: String = (1..=5)
            .map(|i| {
                format!(
                    "<item><link>https://www.instagram.com/p/{i}/</link><description>post {i}</description></item>"
                )
            })
            .collect();
        let feed = parse(&rss(&items));

        let posts = posts_from_feed(&feed, 3);

        let links: Vec<_> = posts.iter().map(|p| p.link.as_str()).collect();
        assert_eq!(
            links,
            vec![
                "https://www.instagram.com/p/1/",
                "https://www.instagram.com/p/2/",
                "https://www.instagram.com/p/3/",
            ]
        );
    }

    #[test]
    fn test_empty_feed_yields_nothing() {
        let feed = parse(&rss(""));
        assert!(posts_from_feed(&feed, 3).is_empty());
    }
}
