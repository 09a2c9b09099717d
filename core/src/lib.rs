pub mod autocomplete;
pub mod document;
pub mod escape;
pub mod format;
pub mod model;
pub mod render;
pub mod validate;

pub type UserId = u64;
pub type PostId = u64;

pub use autocomplete::{apply_suggestion, TagSuggester, MAX_SUGGESTIONS};
pub use document::{AdminSection, Document, FollowLabel, PostNode, Region, TabEvent};
pub use escape::{encode_component, escape_html};
pub use validate::{CommentError, DraftError, MAX_POST_CHARS};
