use bytes::Bytes;
use reqwest::StatusCode;
use url::Url;

#[derive(Debug)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub body_raw: Bytes,
    pub body_utf8: String,
    /// Name of the encoding the body was decoded with.
    pub encoding: &'static str,
}
