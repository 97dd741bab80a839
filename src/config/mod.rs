//! Configuration handling for the digest service.
//!
//! Everything the aggregators need (endpoints, credentials, community
//! identifiers) lives in one immutable [`Config`] built at process start and
//! shared behind an `Arc`. `Config::from_env` reads the environment and falls
//! back to the documented defaults for anything missing.

use std::env;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Environment variable names.
pub const ENV_SEARCH_CLIENT_ID: &str = "NAVER_CLIENT_ID";
pub const ENV_SEARCH_CLIENT_SECRET: &str = "NAVER_CLIENT_SECRET";
pub const ENV_FEED_URL: &str = "INSTAGRAM_RSS_URL";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_PORT: &str = "PORT";
pub const ENV_CAFE_LIST_URL: &str = "CAFE_LIST_URL";
pub const ENV_SEARCH_API_URL: &str = "SEARCH_API_URL";

const DEFAULT_SEARCH_CLIENT_ID: &str = "WsS5zQq6UET5SNzjN0jq";
const DEFAULT_SEARCH_CLIENT_SECRET: &str = "w92PtEgAKi";
const DEFAULT_FEED_URL: &str = "https://rss.app/feeds/xWmi4R4ZOPbcsOAG.xml";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CAFE_LIST_URL: &str =
    "https://cafe.naver.com/linkus16/ArticleList.nhn?search.clubid=28434924&search.boardtype=L";
const DEFAULT_SEARCH_API_URL: &str = "https://openapi.naver.com/v1/search/cafearticle.json";

/// Per-source caps and thresholds.
pub mod limits {
    /// Posts taken from each source.
    pub const POSTS_COUNT: usize = 3;
    /// Enriched descriptions are cut to this many characters.
    pub const DESCRIPTION_LENGTH: usize = 100;
    /// An enriched description shorter than this is not used.
    pub const MIN_ENRICHED_LENGTH: usize = 10;
    /// Anything shorter than this gets the placeholder.
    pub const MIN_DESCRIPTION_LENGTH: usize = 5;
    pub const ENRICH_DISPLAY: u32 = 100;
    pub const FALLBACK_DISPLAY: u32 = 20;
    /// Fallback descriptions and feed captions.
    pub const TEXT_LENGTH: usize = 150;
    pub const CALLBACK_TIMEOUT_SECS: u64 = 10;
}

/// User-visible strings.
pub mod messages {
    pub const NO_PREVIEW: &str = "링크를 클릭해서 전체 내용을 확인하세요 📖";
    pub const NO_CONTENT: &str = "내용 없음";
    pub const ERROR: &str = "최신 소식을 가져오는 중 오류가 발생했습니다.\n잠시 후 다시 시도해 주세요.";
    pub const LOADING: &str = "최신 소식을 가져오고 있어요... 잠시만 기다려주세요! 📰";
    pub const FEED_POST_TITLE: &str = "인스타그램 게시물";
    pub const CAFE_HEADER: &str = "📌 링커스 카페 최신 글";
    pub const FEED_HEADER: &str = "📸 인스타그램 최신 게시물";
    pub const CAFE_EMPTY: &str = "최신 글을 가져오지 못했습니다.";
    pub const FEED_EMPTY: &str = "최신 게시물을 가져오지 못했습니다.";
    pub const HEALTH: &str = "Linkus News Skill Server OK";
    pub const SKILL_VERSION: &str = "2.0";
}

/// Credentials and endpoint for the cafe search API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchApiConfig {
    pub url: String,
    pub client_id: String,
    pub client_secret: String,
}

/// The forum community we aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeConfig {
    /// Listing page that gets scraped.
    pub list_url: String,
    /// Prefix for root-relative hrefs.
    pub origin: String,
    /// Prefix for bare `ArticleRead.nhn` hrefs.
    pub community_url: String,
    pub club_id: String,
    /// Search results must link somewhere under this host+path.
    pub community_filter: String,
    /// Encoding label used when the response does not declare one.
    pub page_encoding: String,
    pub enrich_query: String,
    pub fallback_query: String,
}

impl Default for CafeConfig {
    fn default() -> Self {
        Self {
            list_url: DEFAULT_CAFE_LIST_URL.to_string(),
            origin: "https://cafe.naver.com".to_string(),
            community_url: "https://cafe.naver.com/linkus16/".to_string(),
            club_id: "28434924".to_string(),
            community_filter: "cafe.naver.com/linkus16".to_string(),
            page_encoding: "euc-kr".to_string(),
            enrich_query: "linkus16".to_string(),
            fallback_query: "링커스 카페".to_string(),
        }
    }
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    bind_addr: String,
    search: SearchApiConfig,
    cafe: CafeConfig,
    feed_url: Option<String>,
}

impl Config {
    /// Load from environment variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr = match env::var(ENV_BIND_ADDR) {
            Ok(addr) => addr,
            Err(_) => {
                let port = match env::var(ENV_PORT) {
                    Ok(raw) => raw.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                        field: ENV_PORT,
                        reason: e.to_string(),
                    })?,
                    Err(_) => DEFAULT_PORT,
                };
                format!("0.0.0.0:{port}")
            }
        };

        let search = SearchApiConfig {
            url: env::var(ENV_SEARCH_API_URL).unwrap_or_else(|_| DEFAULT_SEARCH_API_URL.to_string()),
            client_id: env::var(ENV_SEARCH_CLIENT_ID)
                .unwrap_or_else(|_| DEFAULT_SEARCH_CLIENT_ID.to_string()),
            client_secret: env::var(ENV_SEARCH_CLIENT_SECRET)
                .unwrap_or_else(|_| DEFAULT_SEARCH_CLIENT_SECRET.to_string()),
        };

        let mut cafe = CafeConfig::default();
        if let Ok(list_url) = env::var(ENV_CAFE_LIST_URL) {
            cafe.list_url = list_url;
        }

        // An explicitly empty value disables the feed.
        let feed_url = match env::var(ENV_FEED_URL) {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => Some(url),
            Err(_) => Some(DEFAULT_FEED_URL.to_string()),
        };

        Ok(Self {
            bind_addr,
            search,
            cafe,
            feed_url,
        })
    }

    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn search(&self) -> &SearchApiConfig {
        &self.search
    }

    pub fn cafe(&self) -> &CafeConfig {
        &self.cafe
    }

    /// Syndication feed address, if one is configured.
    pub fn feed_url(&self) -> Option<&str> {
        self.feed_url.as_deref()
    }

    pub fn with_cafe_list_url(mut self, url: impl Into<String>) -> Self {
        self.cafe.list_url = url.into();
        self
    }

    pub fn with_search_api_url(mut self, url: impl Into<String>) -> Self {
        self.search.url = url.into();
        self
    }

    pub fn with_feed_url(mut self, url: Option<String>) -> Self {
        self.feed_url = url;
        self
    }
}

impl Default for Config {
    /// Built-in defaults, ignoring the environment.
    fn default() -> Self {
        Self {
            bind_addr: format!("0.0.0.0:{DEFAULT_PORT}"),
            search: SearchApiConfig {
                url: DEFAULT_SEARCH_API_URL.to_string(),
                client_id: DEFAULT_SEARCH_CLIENT_ID.to_string(),
                client_secret: DEFAULT_SEARCH_CLIENT_SECRET.to_string(),
            },
            cafe: CafeConfig::default(),
            feed_url: Some(DEFAULT_FEED_URL.to_string()),
        }
    }
}

/// Errors that can occur while building a configuration.
#[derive(Debug)]
pub enum ConfigError {
    InvalidValue { field: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl Error for ConfigError {}
