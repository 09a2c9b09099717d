//! In-memory mirror of the page regions the interaction layer patches.
//!
//! The server renders the page; controllers only ever replace, append to, or
//! toggle the pieces modelled here.

use crate::model::{Comment, LikeResponse, SearchResponse};
use crate::render;
use crate::{PostId, UserId};
use std::collections::BTreeMap;

/// A container whose markup is replaced wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub visible: bool,
    pub html: String,
}

impl Region {
    pub fn show(&mut self, html: impl Into<String>) {
        self.html = html.into();
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowLabel {
    Follow,
    Unfollow,
}

impl FollowLabel {
    pub fn for_state(is_following: bool) -> Self {
        if is_following {
            FollowLabel::Unfollow
        } else {
            FollowLabel::Follow
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            FollowLabel::Follow => FollowLabel::Unfollow,
            FollowLabel::Unfollow => FollowLabel::Follow,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FollowLabel::Follow => "Follow",
            FollowLabel::Unfollow => "Unfollow",
        }
    }
}

/// One post card of the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostNode {
    pub liked: bool,
    pub like_count: String,
    /// Rendered `comment-item` nodes in display order.
    pub comments: Vec<String>,
    /// Whether the "No comments yet" paragraph is present.
    pub placeholder: bool,
    /// Text of the `(N)` counter next to the comment button; `None` when the span is absent.
    pub comment_count: Option<String>,
    pub comment_input: String,
    pub comments_open: bool,
    pub editing: bool,
}

impl Default for PostNode {
    fn default() -> Self {
        Self::new(false, 0)
    }
}

impl PostNode {
    /// A freshly rendered card with no comments.
    pub fn new(liked: bool, total_likes: i64) -> Self {
        Self {
            liked,
            like_count: total_likes.to_string(),
            comments: Vec::new(),
            placeholder: true,
            comment_count: None,
            comment_input: String::new(),
            comments_open: false,
            editing: false,
        }
    }

    pub fn like_icon(&self) -> &'static str {
        render::like_icon(self.liked)
    }

    /// Adopts the server's like state verbatim.
    pub fn apply_like(&mut self, like: &LikeResponse) {
        self.liked = like.liked;
        self.like_count = like.total_likes.unwrap_or(0).to_string();
    }

    /// Appends one comment node and recounts from the nodes actually present.
    pub fn append_comment(&mut self, comment: &Comment) -> usize {
        self.placeholder = false;
        self.comments.push(render::comment_item(comment));
        let count = self.comments.len();
        self.comment_count = Some(format!("({count})"));
        count
    }

    pub fn toggle_comments(&mut self) {
        self.comments_open = !self.comments_open;
    }

    pub fn toggle_edit(&mut self) {
        self.editing = !self.editing;
    }

    pub fn cancel_edit(&mut self) {
        self.editing = false;
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AdminSection {
    #[default]
    Users,
    Posts,
    Languages,
}

impl AdminSection {
    pub fn element_id(self) -> &'static str {
        match self {
            AdminSection::Users => "users-section",
            AdminSection::Posts => "posts-section",
            AdminSection::Languages => "languages-section",
        }
    }
}

/// The click that switched admin tabs. `target` is the id of the clicked tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabEvent<'a> {
    pub target: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub search_input: String,
    pub search_results: Region,
    /// Token of the search whose output currently occupies `search_results`.
    pub search_token: u64,
    pub follow_buttons: BTreeMap<UserId, FollowLabel>,
    pub tags_input: String,
    pub tag_suggestions: Region,
    pub post_error: Region,
    pub posts: BTreeMap<PostId, PostNode>,
    pub admin_section: AdminSection,
    pub active_tab: Option<String>,
    pub languages_display: Region,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(posts: impl IntoIterator<Item = (PostId, PostNode)>) -> Self {
        Self {
            posts: posts.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn post(&self, id: PostId) -> Option<&PostNode> {
        self.posts.get(&id)
    }

    pub fn post_mut(&mut self, id: PostId) -> Option<&mut PostNode> {
        self.posts.get_mut(&id)
    }

    pub fn remove_post(&mut self, id: PostId) -> Option<PostNode> {
        self.posts.remove(&id)
    }

    /// Replaces the live-search region and resets the inline follow buttons.
    pub fn show_search_results(&mut self, results: &SearchResponse, query: &str) {
        self.follow_buttons = results
            .users
            .iter()
            .filter(|u| Some(u.id) != results.current_user_id)
            .map(|u| (u.id, FollowLabel::for_state(u.is_following)))
            .collect();
        self.search_results.show(render::search::results(results, query));
    }

    /// Flips the follow button for `user_id`, if one is on screen.
    pub fn flip_follow(&mut self, user_id: UserId) -> Option<FollowLabel> {
        let label = self.follow_buttons.get_mut(&user_id)?;
        *label = label.toggled();
        Some(*label)
    }

    pub fn show_section(&mut self, section: AdminSection, event: TabEvent<'_>) {
        self.admin_section = section;
        self.active_tab = Some(event.target.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserHit;

    fn comment(text: &str) -> Comment {
        Comment {
            user_name: "Ada".into(),
            content: text.into(),
            ..Comment::default()
        }
    }

    #[test]
    fn like_adopts_server_count() {
        let mut node = PostNode::new(false, 5);
        node.apply_like(&LikeResponse { liked: true, total_likes: Some(6) });
        assert!(node.liked);
        assert_eq!(node.like_count, "6");
        assert_eq!(node.like_icon(), "❤️");

        node.apply_like(&LikeResponse { liked: false, total_likes: None });
        assert_eq!(node.like_count, "0");
        assert_eq!(node.like_icon(), "🤍");
    }

    #[test]
    fn appending_counts_nodes() {
        let mut node = PostNode::default();
        assert!(node.placeholder);
        assert_eq!(node.append_comment(&comment("first")), 1);
        assert!(!node.placeholder);
        assert_eq!(node.append_comment(&comment("second")), 2);
        assert_eq!(node.comment_count.as_deref(), Some("(2)"));
        assert_eq!(node.comments.len(), 2);
    }

    #[test]
    fn follow_buttons_skip_viewer() {
        let results = SearchResponse {
            users: vec![
                UserHit { id: 1, name: "me".into(), ..UserHit::default() },
                UserHit { id: 2, name: "them".into(), is_following: true, ..UserHit::default() },
            ],
            current_user_id: Some(1),
            ..SearchResponse::default()
        };
        let mut doc = Document::new();
        doc.show_search_results(&results, "m");
        assert!(doc.search_results.visible);
        assert_eq!(doc.follow_buttons.len(), 1);
        assert_eq!(doc.flip_follow(2), Some(FollowLabel::Follow));
        assert_eq!(doc.flip_follow(1), None);
    }

    #[test]
    fn edit_and_comment_toggles() {
        let mut node = PostNode::default();
        node.toggle_edit();
        assert!(node.editing);
        node.cancel_edit();
        node.cancel_edit();
        assert!(!node.editing);
        node.toggle_comments();
        assert!(node.comments_open);
    }

    #[test]
    fn tab_switch_uses_event_target() {
        let mut doc = Document::new();
        doc.show_section(AdminSection::Languages, TabEvent { target: "languages-tab" });
        assert_eq!(doc.admin_section, AdminSection::Languages);
        assert_eq!(doc.admin_section.element_id(), "languages-section");
        assert_eq!(doc.active_tab.as_deref(), Some("languages-tab"));
    }
}
