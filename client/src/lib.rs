//! Client side of the EchoVerse interaction layer.
//!
//! Each controller owns its slice of page state, talks to the server through
//! [`Api`], and patches the shared [`echoverse_core::Document`] held by a
//! [`Page`]. The server's answer is always taken as the truth.

pub mod admin;
pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod posts;
pub mod search;
pub mod tags;
pub mod window;

pub use admin::{Moderation, Translations};
pub use api::{Api, Attachment, PostDraft};
pub use config::ClientConfig;
pub use debounce::{Debouncer, SEARCH_DELAY};
pub use error::ApiError;
pub use posts::PostController;
pub use search::LiveSearch;
pub use tags::TagField;
pub use window::{Page, ScriptedWindow, Window, WindowEvent};
