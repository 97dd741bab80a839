#![allow(dead_code)]

use cafe_digest::{
    cafe::SearchClient,
    config::Config,
    fetcher::{browser_client, service_client},
};
use reqwest::Client;
use serde_json::{Value, json};
use wiremock::MockServer;

pub const LIST_PATH: &str = "/linkus16/ArticleList.nhn";
pub const SEARCH_PATH: &str = "/v1/search/cafearticle.json";
pub const FEED_PATH: &str = "/feed.xml";
pub const CALLBACK_PATH: &str = "/callback";

/// Default config with every upstream pointed at the mock server.
pub fn test_config(server: &MockServer) -> Config {
    Config::default()
        .with_cafe_list_url(format!("{}{}", server.uri(), LIST_PATH))
        .with_search_api_url(format!("{}{}", server.uri(), SEARCH_PATH))
        .with_feed_url(Some(format!("{}{}", server.uri(), FEED_PATH)))
}

pub fn clients(config: &Config) -> (Client, SearchClient) {
    let browser = browser_client().unwrap();
    let search = SearchClient::new(service_client().unwrap(), config.search().clone());
    (browser, search)
}

/// Listing page with one link per `(article_id, title)`, EUC-KR encoded.
pub fn listing_page(articles: &[(&str, &str)]) -> Vec<u8> {
    let links: String = articles
        .iter()
        .map(|(id, title)| {
            format!(
                r#"<tr><td><a href="/ArticleRead.nhn?clubid=28434924&amp;articleid={id}&amp;boardtype=L">{title}</a></td></tr>"#
            )
        })
        .collect();
    let html = format!(
        r#"<html><head><meta http-equiv="Content-Type" content="text/html; charset=euc-kr"><title>링커스 카페</title></head><body><table>{links}</table></body></html>"#
    );
    let (bytes, _, _) = encoding_rs::EUC_KR.encode(&html);
    bytes.into_owned()
}

/// Search API body with one item per `(link, title, description)`.
pub fn search_body(items: &[(&str, &str, &str)]) -> Value {
    let items: Vec<Value> = items
        .iter()
        .map(|(link, title, description)| {
            json!({
                "title": title,
                "link": link,
                "description": description,
                "cafename": "링커스",
                "cafeurl": "https://cafe.naver.com/linkus16"
            })
        })
        .collect();
    json!({
        "lastBuildDate": "Mon, 19 Oct 2026 10:00:00 +0900",
        "total": items.len(),
        "start": 1,
        "display": items.len(),
        "items": items
    })
}

pub fn rss_feed(items: &[(&str, &str)]) -> String {
    let items: String = items
        .iter()
        .map(|(link, caption)| {
            format!(
                "<item><title>post</title><link>{link}</link><guid>{link}</guid><description><![CDATA[{caption}]]></description></item>"
            )
        })
        .collect();
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>linkus_official_</title>
    <link>https://www.instagram.com/linkus_official_/</link>
    <description>Instagram feed</description>
    {items}
  </channel>
</rss>"#
    )
}
