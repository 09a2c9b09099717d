//! Typed calls against the EchoVerse HTTP endpoints.

use crate::config::ClientConfig;
use crate::error::ApiError;
use echoverse_core::model::{
    ActionResponse, Comment, CommentResponse, DictionaryResponse, Envelope, ErrorBody,
    LanguagesResponse, LikeResponse, SearchResponse, TagsResponse,
};
use echoverse_core::{PostId, UserId};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;
use url::Url;

/// An audio file picked for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio".to_string());
        Ok(Self { file_name, bytes })
    }

    fn mime(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "mp3" => "audio/mpeg",
            "wav" => "audio/wav",
            "ogg" => "audio/ogg",
            "m4a" => "audio/mp4",
            "aac" => "audio/aac",
            _ => "application/octet-stream",
        }
    }
}

/// Contents of the new-post form.
#[derive(Debug, Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub tags: String,
    pub audio: Option<Attachment>,
}

#[derive(Clone)]
pub struct Api {
    http: Client,
    base: Url,
}

impl Api {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        // the server answers JSON only to requests that look like XHR
        headers.insert("X-Requested-With", HeaderValue::from_static("XMLHttpRequest"));
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(&format!("session={cookie}"))
                .map_err(|e| ApiError::Config(format!("session cookie: {e}")))?;
            headers.insert(header::COOKIE, value);
        }

        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(5))
            .timeout(config.timeout)
            .build()?;
        Ok(Self { http, base: config.base_url.clone() })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        Ok(self.base.join(path)?)
    }

    pub async fn tags(&self) -> Result<Vec<String>, ApiError> {
        let resp = self.http.get(self.url("/api/tags")?).send().await?;
        let body: TagsResponse = accepted(read_json(resp).await?)?;
        Ok(body.tags.unwrap_or_default())
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
        debug!(query, "search");
        let resp = self
            .http
            .get(self.url("/search")?)
            .query(&[("q", query)])
            .send()
            .await?;
        read_json(resp).await
    }

    pub async fn toggle_like(&self, post_id: PostId) -> Result<LikeResponse, ApiError> {
        let resp = self.http.post(self.url(&format!("/like/{post_id}"))?).send().await?;
        read_json(resp).await
    }

    /// Posts a comment and returns the comment as the server stored it.
    pub async fn add_comment(&self, post_id: PostId, content: &str) -> Result<Comment, ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/comment/{post_id}"))?)
            .form(&[("content", content)])
            .send()
            .await?;
        let body: CommentResponse = accepted(read_json(resp).await?)?;
        body.comment.ok_or(ApiError::Rejected(body.error))
    }

    pub async fn create_post(&self, draft: &PostDraft) -> Result<(), ApiError> {
        let mut form = Form::new()
            .text("content", draft.content.clone())
            .text("tags", draft.tags.clone());
        if let Some(audio) = &draft.audio {
            let part = Part::bytes(audio.bytes.clone())
                .file_name(audio.file_name.clone())
                .mime_str(audio.mime())?;
            form = form.part("audio_file", part);
        }
        let resp = self.http.post(self.url("/post")?).multipart(form).send().await?;
        expect_success(resp).await
    }

    pub async fn delete_post(&self, post_id: PostId) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/post/{post_id}/delete"))?)
            .send()
            .await?;
        expect_success(resp).await
    }

    /// Only the status matters here; the server answers with a redirect.
    pub async fn toggle_follow(&self, user_id: UserId) -> Result<(), ApiError> {
        let resp = self.http.post(self.url(&format!("/follow/{user_id}"))?).send().await?;
        expect_success(resp).await
    }

    pub async fn toggle_user_block(&self, user_id: UserId) -> Result<ActionResponse, ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/admin/user/{user_id}/toggle-block"))?)
            .send()
            .await?;
        accepted(read_json(resp).await?)
    }

    pub async fn toggle_post_block(&self, post_id: PostId) -> Result<ActionResponse, ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/admin/post/{post_id}/toggle-block"))?)
            .send()
            .await?;
        accepted(read_json(resp).await?)
    }

    pub async fn languages(&self) -> Result<LanguagesResponse, ApiError> {
        let resp = self.http.get(self.url("/admin/languages")?).send().await?;
        accepted(read_json(resp).await?)
    }

    pub async fn dictionary(&self) -> Result<DictionaryResponse, ApiError> {
        let resp = self.http.get(self.url("/admin/languages/dictionary")?).send().await?;
        accepted(read_json(resp).await?)
    }

    /// Overwrites the server's dictionary from the spreadsheet.
    pub async fn sync_languages(&self) -> Result<ActionResponse, ApiError> {
        let resp = self.http.post(self.url("/admin/languages/sync")?).send().await?;
        accepted(read_json(resp).await?)
    }
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if !status.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&bytes)
            .ok()
            .and_then(|b| b.error);
        return Err(ApiError::Server { status: status.as_u16(), message });
    }
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_success(resp: Response) -> Result<(), ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(());
    }
    let bytes = resp.bytes().await.unwrap_or_default();
    let message = serde_json::from_slice::<ErrorBody>(&bytes)
        .ok()
        .and_then(|b| b.error);
    Err(ApiError::Server { status: status.as_u16(), message })
}

fn accepted<T: Envelope>(body: T) -> Result<T, ApiError> {
    if body.succeeded() {
        Ok(body)
    } else {
        Err(ApiError::Rejected(body.error().map(str::to_owned)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attachment_mime_from_extension() {
        let a = Attachment { file_name: "Take.MP3".into(), bytes: vec![] };
        assert_eq!(a.mime(), "audio/mpeg");
        let b = Attachment { file_name: "noext".into(), bytes: vec![] };
        assert_eq!(b.mime(), "application/octet-stream");
    }

    #[test]
    fn rejects_unsuccessful_envelopes() {
        let body = ActionResponse { success: false, error: Some("Unauthorized".into()), ..ActionResponse::default() };
        let err = accepted(body).unwrap_err();
        assert_eq!(err.server_message(), Some("Unauthorized"));
    }

    #[test]
    fn bad_session_cookie_is_config_error() {
        let config = ClientConfig::default().with_session("bad\nvalue");
        assert!(matches!(Api::new(&config), Err(ApiError::Config(_))));
    }
}
