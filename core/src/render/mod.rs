//! Markup fragments for the regions in [`crate::document::Document`].
//!
//! Every value that came from the server goes through [`escape_html`] before
//! it is interpolated, attributes included.

pub mod admin;
pub mod search;

use crate::escape::escape_html;
use crate::format::{avatar_url, DEFAULT_AVATAR};
use crate::model::Comment;
use std::fmt::Write;

pub fn like_icon(liked: bool) -> &'static str {
    if liked {
        "❤️"
    } else {
        "🤍"
    }
}

pub(crate) fn avatar_img(avatar: Option<&str>, alt: &str) -> String {
    format!(
        r#"<img src="{src}" alt="{alt}" class="avatar-small" onerror="this.src='{fallback}'">"#,
        src = escape_html(&avatar_url(avatar)),
        alt = escape_html(alt),
        fallback = DEFAULT_AVATAR,
    )
}

/// One `comment-item` node built from the comment the server echoed back.
pub fn comment_item(comment: &Comment) -> String {
    format!(
        concat!(
            r#"<div class="comment-item">{avatar}<div class="comment-body">"#,
            r#"<div class="comment-meta"><strong>{name}</strong> <span class="comment-time">{time}</span></div>"#,
            r#"<p class="comment-text">{content}</p></div></div>"#,
        ),
        avatar = avatar_img(comment.user_avatar.as_deref(), &comment.user_name),
        name = escape_html(&comment.user_name),
        time = escape_html(comment.created_at.as_deref().unwrap_or_default()),
        content = escape_html(&comment.content),
    )
}

pub fn tag_suggestions(tags: &[&str]) -> String {
    let mut html = String::new();
    for tag in tags {
        let _ = write!(
            html,
            r#"<div class="tag-suggestion" data-tag="{tag}">#{tag}</div>"#,
            tag = escape_html(tag)
        );
    }
    html
}

pub fn muted(text: &str) -> String {
    format!(r#"<p class="text-muted">{}</p>"#, escape_html(text))
}

pub fn error(text: &str) -> String {
    format!(r#"<p class="text-error">{}</p>"#, escape_html(text))
}
