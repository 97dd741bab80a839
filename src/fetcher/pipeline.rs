use crate::fetcher::{errors::FetchError, types::PageResponse};
use bytes::Bytes;
use encoding_rs::Encoding;
use reqwest::StatusCode;
use tracing::warn;
use url::Url;

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    body_bytes: Bytes,
    encoding_label: &str,
) -> Result<PageResponse, FetchError> {
    let encoding = select_encoding(encoding_label)?;
    let body_utf8 = decode_body(&body_bytes, encoding);

    Ok(PageResponse {
        url_final,
        status,
        body_raw: body_bytes,
        body_utf8,
        encoding: encoding.name(),
    })
}

fn select_encoding(label: &str) -> Result<&'static Encoding, FetchError> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| FetchError::Charset(format!("unknown encoding label: {label}")))
}

fn decode_body(body_bytes: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _encoding, had_errors) = encoding.decode(body_bytes);

    if had_errors {
        warn!(
            encoding = encoding.name(),
            "Malformed byte sequences replaced while decoding page"
        );
    }

    decoded.into_owned()
}
