use serde::{Deserialize, Serialize};

/// A finished post, ready to be rendered into the digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    pub description: String,
    pub link: String,
}

/// A forum post straight off the listing page.
///
/// It still carries the article id used to find its description; the only
/// way to get a [`Post`] out of it is [`ScrapedPost::finalize`], which drops
/// the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedPost {
    pub article_id: String,
    pub title: String,
    pub link: String,
}

impl ScrapedPost {
    pub fn finalize(self, description: impl Into<String>) -> Post {
        Post {
            title: self.title,
            description: description.into(),
            link: self.link,
        }
    }
}
