//! Like, comment, delete, and create, patched into the feed without a reload
//! wherever the server hands back enough to do so.

use crate::api::{Api, PostDraft};
use crate::error::ApiError;
use crate::window::Page;
use echoverse_core::model::LikeResponse;
use echoverse_core::validate::{comment_content, post_content};
use echoverse_core::{escape_html, PostId, PostNode};
use tracing::error;

pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this post?";

pub struct PostController {
    api: Api,
    page: Page,
}

impl PostController {
    pub fn new(api: Api, page: Page) -> Self {
        Self { api, page }
    }

    /// Applies the server's like state; the count is never adjusted locally.
    pub async fn toggle_like(&self, post_id: PostId) -> Option<LikeResponse> {
        match self.api.toggle_like(post_id).await {
            Ok(like) => {
                self.page.update(|doc| {
                    if let Some(node) = doc.post_mut(post_id) {
                        node.apply_like(&like);
                    }
                });
                Some(like)
            }
            Err(err) => {
                error!(post_id, %err, "error toggling like");
                self.page.window().alert("Failed to toggle like");
                None
            }
        }
    }

    /// Submits a comment and appends the echoed comment. Returns the new comment count.
    pub async fn add_comment(&self, post_id: PostId, raw: &str) -> Option<usize> {
        let content = match comment_content(raw) {
            Ok(content) => content,
            Err(err) => {
                self.page.window().alert(&err.to_string());
                return None;
            }
        };

        match self.api.add_comment(post_id, content).await {
            Ok(comment) => self.page.update(|doc| {
                let node = doc.post_mut(post_id)?;
                node.comment_input.clear();
                Some(node.append_comment(&comment))
            }),
            Err(err) => {
                error!(post_id, %err, "error adding comment");
                let message = if err.is_server_reported() {
                    err.server_message().unwrap_or("Failed to add comment").to_string()
                } else {
                    "Error adding comment".to_string()
                };
                self.page.window().alert(&message);
                None
            }
        }
    }

    /// Deletes after confirmation. The card is removed only on success.
    pub async fn delete_post(&self, post_id: PostId) -> bool {
        if !self.page.window().confirm(CONFIRM_DELETE) {
            return false;
        }
        match self.api.delete_post(post_id).await {
            Ok(()) => {
                self.page.update(|doc| doc.remove_post(post_id));
                true
            }
            Err(err) => {
                error!(post_id, %err, "error deleting post");
                let message = match err {
                    ApiError::Network(_) => "Error deleting post",
                    _ => "Failed to delete post",
                };
                self.page.window().alert(message);
                false
            }
        }
    }

    /// Validates and uploads a new post, then reloads. Problems show inline.
    pub async fn create_post(&self, draft: PostDraft) -> bool {
        let content = match post_content(&draft.content, draft.audio.is_some()) {
            Ok(content) => content.to_string(),
            Err(err) => {
                self.show_post_error(&err.to_string());
                return false;
            }
        };
        let draft = PostDraft { content, ..draft };

        match self.api.create_post(&draft).await {
            Ok(()) => {
                self.page.update(|doc| doc.post_error.hide());
                self.page.window().reload();
                true
            }
            Err(err) => {
                error!(%err, "error creating post");
                let message = match err {
                    ApiError::Network(_) => "Error creating post",
                    _ => "Failed to create post",
                };
                self.show_post_error(message);
                false
            }
        }
    }

    pub fn toggle_comments(&self, post_id: PostId) {
        self.with_post(post_id, PostNode::toggle_comments);
    }

    pub fn toggle_edit(&self, post_id: PostId) {
        self.with_post(post_id, PostNode::toggle_edit);
    }

    pub fn cancel_edit(&self, post_id: PostId) {
        self.with_post(post_id, PostNode::cancel_edit);
    }

    fn with_post(&self, post_id: PostId, f: impl FnOnce(&mut PostNode)) {
        self.page.update(|doc| {
            if let Some(node) = doc.post_mut(post_id) {
                f(node);
            }
        });
    }

    fn show_post_error(&self, message: &str) {
        self.page.update(|doc| doc.post_error.show(escape_html(message)));
    }
}
