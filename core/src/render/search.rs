use super::{avatar_img, like_icon};
use crate::escape::{encode_component, escape_html};
use crate::format::{post_date, upload_url};
use crate::model::{PostHit, SearchResponse, TagHit, UserHit};
use crate::UserId;
use std::fmt::Write;

pub const SEARCHING: &str = r#"<p class="search-status">Searching...</p>"#;
pub const SEARCH_FAILED: &str = r#"<p class="search-error">Error performing search</p>"#;

/// Markup for the live-search dropdown, grouped by entity kind.
pub fn results(data: &SearchResponse, query: &str) -> String {
    if data.is_empty() {
        return no_results(query);
    }

    let mut html = String::new();
    if !data.users.is_empty() {
        html.push_str(r#"<div class="live-search-section"><h3>Users</h3>"#);
        for user in &data.users {
            user_item(&mut html, user, data.current_user_id);
        }
        html.push_str("</div>");
    }
    if !data.tags.is_empty() {
        html.push_str(r#"<div class="live-search-section"><h3>Tags</h3>"#);
        for tag in &data.tags {
            tag_item(&mut html, tag);
        }
        html.push_str("</div>");
    }
    if !data.posts.is_empty() {
        html.push_str(r#"<div class="live-search-section"><h3>Posts</h3>"#);
        for post in &data.posts {
            post_card(&mut html, post);
        }
        html.push_str("</div>");
    }
    html
}

pub fn no_results(query: &str) -> String {
    format!(
        r#"<p class="search-empty">No results found for "{}"</p>"#,
        escape_html(query)
    )
}

fn user_item(html: &mut String, user: &UserHit, viewer: Option<UserId>) {
    let name = escape_html(&user.name);
    let _ = write!(
        html,
        concat!(
            r#"<div class="live-search-item">{avatar}<div class="live-search-body">"#,
            r#"<a href="/profile/{id}" class="live-search-name">{name}</a>"#,
            r#"<p class="live-search-meta">{email}</p></div>"#,
        ),
        avatar = avatar_img(user.avatar.as_deref(), &user.name),
        id = user.id,
        name = name,
        email = escape_html(&user.email),
    );
    if Some(user.id) != viewer {
        let label = if user.is_following { "Unfollow" } else { "Follow" };
        let _ = write!(
            html,
            concat!(
                r#"<form method="POST" action="/follow/{id}" class="follow-form" data-user-id="{id}">"#,
                r#"<button type="submit" class="btn btn-small">{label}</button></form>"#,
            ),
            id = user.id,
            label = label,
        );
    }
    html.push_str("</div>");
}

fn tag_item(html: &mut String, tag: &TagHit) {
    let _ = write!(
        html,
        concat!(
            r#"<div class="live-search-item"><div class="live-search-body">"#,
            r#"<a href="/explore?tag={href}" class="live-search-tag">#{name}</a>"#,
            r#"<p class="live-search-meta">{count} posts</p></div></div>"#,
        ),
        href = escape_html(&encode_component(&tag.name)),
        name = escape_html(&tag.name),
        count = tag.post_count.unwrap_or(0),
    );
}

fn post_card(html: &mut String, post: &PostHit) {
    let _ = write!(
        html,
        concat!(
            r#"<article class="post-card"><div class="post-header">{avatar}<div class="post-author">"#,
            r#"<a href="/profile/{user_id}" class="author-name">{name}</a>"#,
            r#"<span class="post-time">{time}</span></div></div>"#,
        ),
        avatar = avatar_img(post.user_avatar.as_deref(), &post.user_name),
        user_id = post.user_id,
        name = escape_html(&post.user_name),
        time = escape_html(&post_date(post.created_at.as_deref())),
    );
    if let Some(content) = post.content.as_deref().filter(|c| !c.is_empty()) {
        let _ = write!(html, r#"<div class="post-content">{}</div>"#, escape_html(content));
    }
    if let (Some("audio"), Some(path)) = (post.media_type.as_deref(), post.media_path.as_deref()) {
        if !path.is_empty() {
            let _ = write!(
                html,
                concat!(
                    r#"<div class="post-audio"><audio controls class="audio-player">"#,
                    r#"<source src="{src}" type="audio/mpeg"></audio></div>"#,
                ),
                src = escape_html(&upload_url(path)),
            );
        }
    }
    let _ = write!(
        html,
        r#"<div class="post-actions"><span class="action-btn">{icon} {likes}</span></div></article>"#,
        icon = like_icon(true),
        likes = post.total_likes.unwrap_or(0),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_groups_are_omitted() {
        let data = SearchResponse {
            tags: vec![TagHit { name: "lo fi".into(), post_count: Some(3) }],
            ..SearchResponse::default()
        };
        let html = results(&data, "lo");
        assert!(html.contains("<h3>Tags</h3>"));
        assert!(!html.contains("<h3>Users</h3>"));
        assert!(!html.contains("<h3>Posts</h3>"));
        assert!(html.contains(r#"href="/explore?tag=lo%20fi""#));
        assert!(html.contains("3 posts"));
    }

    #[test]
    fn no_results_quotes_query() {
        let html = results(&SearchResponse::default(), r#"<i>"x"#);
        assert_eq!(
            html,
            r#"<p class="search-empty">No results found for "&lt;i&gt;&quot;x"</p>"#
        );
    }

    #[test]
    fn audio_player_only_for_audio_posts() {
        let mut post = PostHit {
            id: 1,
            user_name: "Bo".into(),
            media_type: Some("audio".into()),
            media_path: Some("1_a_take.mp3".into()),
            ..PostHit::default()
        };
        let mut html = String::new();
        post_card(&mut html, &post);
        assert!(html.contains(r#"src="/static/uploads/1_a_take.mp3""#));
        assert!(html.contains("❤️ 0"));

        post.media_type = Some("image".into());
        let mut html = String::new();
        post_card(&mut html, &post);
        assert!(!html.contains("<audio"));
    }
}
