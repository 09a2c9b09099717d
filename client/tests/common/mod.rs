#![allow(dead_code)]

use axum::Router;
use echoverse_client::{Api, ClientConfig, Page, ScriptedWindow, Window};
use echoverse_core::Document;
use std::sync::Arc;
use tokio::net::TcpListener;
use url::Url;

pub const SESSION: &str = "test-session";

/// Serves `app` on an ephemeral port and returns a client pointed at it.
pub async fn serve(app: Router) -> Api {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    api_for(&format!("http://{addr}"))
}

/// A client for an address nothing listens on.
pub async fn unreachable() -> Api {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    api_for(&format!("http://{addr}"))
}

fn api_for(base: &str) -> Api {
    let config = ClientConfig::new(Url::parse(base).unwrap()).with_session(SESSION);
    Api::new(&config).unwrap()
}

pub fn page(document: Document, answer: bool) -> (Page, Arc<ScriptedWindow>) {
    let window = Arc::new(if answer {
        ScriptedWindow::accepting()
    } else {
        ScriptedWindow::declining()
    });
    let host: Arc<dyn Window> = window.clone();
    (Page::new(document, host), window)
}

/// True when the request carries what the server needs to answer with JSON for our session.
pub fn looks_like_xhr(headers: &axum::http::HeaderMap) -> bool {
    let xhr = headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        == Some("XMLHttpRequest");
    let cookie = headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains(&format!("session={SESSION}")));
    xhr && cookie
}
