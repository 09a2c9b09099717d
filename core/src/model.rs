//! Wire types for the JSON bodies the EchoVerse server returns.
//!
//! Fields the server may omit or send as `null` are `Option`s or carry
//! `#[serde(default)]`; unknown fields are ignored.

use crate::{PostId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bodies that carry a `success` flag and an optional `error` string.
pub trait Envelope {
    fn succeeded(&self) -> bool;
    fn error(&self) -> Option<&str>;
}

/// Minimal shape used to pull an `error` out of a non-2xx body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagsResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserHit {
    pub id: UserId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_following: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TagHit {
    pub name: String,
    #[serde(default)]
    pub post_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PostHit {
    pub id: PostId,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub user_id: UserId,
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub media_type: Option<String>,
    #[serde(default)]
    pub media_path: Option<String>,
    #[serde(default)]
    pub total_likes: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default)]
    pub users: Vec<UserHit>,
    #[serde(default)]
    pub tags: Vec<TagHit>,
    #[serde(default)]
    pub posts: Vec<PostHit>,
    #[serde(default)]
    pub current_user_id: Option<UserId>,
}

impl SearchResponse {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.tags.is_empty() && self.posts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikeResponse {
    pub liked: bool,
    #[serde(default)]
    pub total_likes: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_avatar: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CommentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of the block toggles and the dictionary sync.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LanguagesResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub available_languages: Vec<String>,
    #[serde(default)]
    pub languages: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DictionaryRow {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub english: String,
    #[serde(default)]
    pub danish: String,
    #[serde(default)]
    pub spanish: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DictionaryResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub total_keys: usize,
    #[serde(default)]
    pub data: Vec<DictionaryRow>,
    #[serde(default)]
    pub error: Option<String>,
}

macro_rules! envelope {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Envelope for $ty {
                fn succeeded(&self) -> bool {
                    self.success
                }

                fn error(&self) -> Option<&str> {
                    self.error.as_deref()
                }
            }
        )*
    };
}

envelope!(
    TagsResponse,
    CommentResponse,
    ActionResponse,
    LanguagesResponse,
    DictionaryResponse,
);
