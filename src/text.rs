use regex::Regex;
use std::sync::LazyLock;

static TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("Failed to compile tag regex"));

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Failed to compile whitespace regex"));

static HASHTAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[^\s#]+").expect("Failed to compile hashtag regex"));

const ELLIPSIS: &str = "...";

/// Strip tags, decode the four basic entities and collapse whitespace.
///
/// `&amp;` is decoded first and exactly once, so `&amp;lt;` ends up as the
/// literal text `&lt;`.
pub fn clean(text: &str) -> String {
    let stripped = TAG_REGEX.replace_all(text, "");
    let decoded = stripped
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"");
    collapse_whitespace(&decoded)
}

/// Hard cut at `max_len` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        let mut cut: String = text.chars().take(max_len).collect();
        cut.push_str(ELLIPSIS);
        cut
    } else {
        text.to_string()
    }
}

/// Remove `#tag` tokens anywhere in the text.
pub fn strip_hashtags(text: &str) -> String {
    collapse_whitespace(&HASHTAG_REGEX.replace_all(text, ""))
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text, " ").trim().to_string()
}
