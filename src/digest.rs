use crate::{config::messages, models::Post};

/// Numbered post blocks separated by blank lines.
pub fn format_post_list(posts: &[Post]) -> String {
    posts
        .iter()
        .enumerate()
        .map(|(index, post)| {
            format!(
                "{}. {}\n{}\n🔗 {}\n",
                index + 1,
                post.title,
                post.description,
                post.link
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render both sources into the chat message.
pub fn format_digest(cafe_posts: &[Post], feed_posts: &[Post]) -> String {
    let sections = [
        format!("{}\n", messages::CAFE_HEADER),
        section_body(cafe_posts, messages::CAFE_EMPTY),
        format!("{}\n", messages::FEED_HEADER),
        section_body(feed_posts, messages::FEED_EMPTY),
    ];
    sections.join("\n")
}

fn section_body(posts: &[Post], empty_message: &str) -> String {
    if posts.is_empty() {
        format!("{empty_message}\n")
    } else {
        format_post_list(posts)
    }
}
