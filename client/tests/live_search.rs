mod common;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use echoverse_client::LiveSearch;
use echoverse_core::render::search::{SEARCHING, SEARCH_FAILED};
use echoverse_core::{Document, FollowLabel};
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
struct Seen {
    queries: Mutex<Vec<String>>,
}

/// A search endpoint that answers with one user named after the query.
fn echo_search(seen: Arc<Seen>) -> Router {
    Router::new().route(
        "/search",
        get(move |Query(params): Query<HashMap<String, String>>, headers: HeaderMap| {
            let seen = seen.clone();
            async move {
                let q = params.get("q").cloned().unwrap_or_default();
                seen.queries.lock().push(q.clone());
                if !common::looks_like_xhr(&headers) {
                    return (StatusCode::FOUND, Json(json!({})));
                }
                if q == "slow" {
                    tokio::time::sleep(Duration::from_millis(300)).await;
                }
                let body = match q.as_str() {
                    "zzz" => json!({"users": [], "tags": [], "posts": [], "current_user_id": 1}),
                    _ => json!({
                        "users": [{"id": 7, "name": format!("user-{q}"), "email": "", "avatar": null, "is_following": false}],
                        "tags": [],
                        "posts": [],
                        "current_user_id": 1
                    }),
                };
                (StatusCode::OK, Json(body))
            }
        }),
    )
}

#[tokio::test]
async fn burst_sends_one_request_for_last_value() {
    let seen = Arc::new(Seen::default());
    let api = common::serve(echo_search(seen.clone())).await;
    let (page, _window) = common::page(Document::new(), true);
    let mut search = LiveSearch::with_delay(api, page.clone(), Duration::from_millis(50));

    for raw in ["b", "be", "bea", " beat "] {
        search.input(raw);
    }
    search.settle().await;

    assert_eq!(*seen.queries.lock(), vec!["beat".to_string()]);
    let doc = page.snapshot();
    assert_eq!(doc.search_input, " beat ");
    assert!(doc.search_results.visible);
    assert!(doc.search_results.html.contains("user-beat"));
    assert_eq!(doc.follow_buttons.get(&7), Some(&FollowLabel::Follow));
}

#[tokio::test]
async fn blank_input_cancels_pending_query() {
    let seen = Arc::new(Seen::default());
    let api = common::serve(echo_search(seen.clone())).await;
    let (page, _window) = common::page(Document::new(), true);
    let mut search = LiveSearch::with_delay(api, page.clone(), Duration::from_millis(50));

    search.input("beat");
    search.input("   ");
    search.settle().await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(seen.queries.lock().is_empty());
    assert!(!page.snapshot().search_results.visible);
}

#[tokio::test]
async fn stale_response_is_discarded() {
    let seen = Arc::new(Seen::default());
    let api = common::serve(echo_search(seen.clone())).await;
    let (page, _window) = common::page(Document::new(), true);
    let search = LiveSearch::new(api, page.clone());

    let slow = search.search_now("slow");
    let fast = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        search.search_now("fast").await;
    };
    tokio::join!(slow, fast);

    assert_eq!(seen.queries.lock().len(), 2);
    let html = page.snapshot().search_results.html;
    assert!(html.contains("user-fast"));
    assert!(!html.contains("user-slow"));
}

#[tokio::test]
async fn response_after_clear_stays_hidden() {
    let seen = Arc::new(Seen::default());
    let api = common::serve(echo_search(seen.clone())).await;
    let (page, _window) = common::page(Document::new(), true);
    let mut search = LiveSearch::with_delay(api, page.clone(), Duration::from_millis(10));

    search.input("slow");
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(page.snapshot().search_results.html, SEARCHING);

    search.clear();
    tokio::time::sleep(Duration::from_millis(400)).await;

    let doc = page.snapshot();
    assert!(doc.search_input.is_empty());
    assert!(!doc.search_results.visible);
    assert_eq!(seen.queries.lock().len(), 1);
}

#[tokio::test]
async fn empty_results_say_so() {
    let seen = Arc::new(Seen::default());
    let api = common::serve(echo_search(seen)).await;
    let (page, _window) = common::page(Document::new(), true);
    let search = LiveSearch::new(api, page.clone());

    search.search_now("zzz").await;
    assert_eq!(
        page.snapshot().search_results.html,
        r#"<p class="search-empty">No results found for "zzz"</p>"#
    );
}

#[tokio::test]
async fn failed_search_shows_error() {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let api = common::serve(app).await;
    let (page, window) = common::page(Document::new(), true);
    let search = LiveSearch::new(api, page.clone());

    search.search_now("beat").await;
    let doc = page.snapshot();
    assert!(doc.search_results.visible);
    assert_eq!(doc.search_results.html, SEARCH_FAILED);
    assert!(window.events().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn displayed_token_tracks_newest_dispatch() {
    let seen = Arc::new(Seen::default());
    let api = common::serve(echo_search(seen.clone())).await;
    let (page, _window) = common::page(Document::new(), true);
    let search = Arc::new(LiveSearch::new(api, page.clone()));

    let runs: Vec<_> = (0..32)
        .map(|i| {
            let search = search.clone();
            tokio::spawn(async move { search.search_now(&format!("q{i}")).await })
        })
        .collect();
    for run in runs {
        run.await.unwrap();
    }

    assert_eq!(seen.queries.lock().len(), 32);
    let doc = page.snapshot();
    assert_eq!(doc.search_token, 32);
    assert!(doc.search_results.html.contains("user-q"));
}
