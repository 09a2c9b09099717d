//! Live search: debounced queries, the results dropdown, inline follow buttons.

use crate::api::Api;
use crate::debounce::{Debouncer, SEARCH_DELAY};
use crate::window::Page;
use echoverse_core::render::search::{SEARCHING, SEARCH_FAILED};
use echoverse_core::{FollowLabel, UserId};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Hands out increasing tokens so a slow, superseded response cannot
/// overwrite newer output.
#[derive(Debug, Default)]
struct Tokens(AtomicU64);

impl Tokens {
    fn issue(&self) -> u64 {
        self.0.fetch_add(1, Ordering::Relaxed) + 1
    }
}

pub struct LiveSearch {
    api: Api,
    page: Page,
    debouncer: Debouncer,
    tokens: Arc<Tokens>,
}

impl LiveSearch {
    pub fn new(api: Api, page: Page) -> Self {
        Self::with_delay(api, page, SEARCH_DELAY)
    }

    pub fn with_delay(api: Api, page: Page, delay: Duration) -> Self {
        Self { api, page, debouncer: Debouncer::new(delay), tokens: Arc::default() }
    }

    /// Handles one edit of the search box.
    pub fn input(&mut self, raw: &str) {
        self.page.update(|doc| doc.search_input = raw.to_string());
        let query = raw.trim();
        if query.is_empty() {
            self.debouncer.cancel();
            self.hide();
            return;
        }
        let run = perform(self.api.clone(), self.page.clone(), self.tokens.clone(), query.to_string());
        self.debouncer.schedule(run);
    }

    /// Empties the search box and closes the dropdown.
    pub fn clear(&mut self) {
        self.debouncer.cancel();
        self.page.update(|doc| doc.search_input.clear());
        self.hide();
    }

    /// Runs a search right away, skipping the debounce delay.
    pub async fn search_now(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            self.hide();
            return;
        }
        perform(self.api.clone(), self.page.clone(), self.tokens.clone(), query.to_string()).await;
    }

    /// Waits until the pending query, if any, has fired and rendered.
    pub async fn settle(&mut self) {
        self.debouncer.settle().await;
    }

    /// Follow button inside the dropdown. The label flips only when the call succeeds.
    pub async fn toggle_follow(&self, user_id: UserId) -> Option<FollowLabel> {
        match self.api.toggle_follow(user_id).await {
            Ok(()) => self.page.update(|doc| doc.flip_follow(user_id)),
            Err(err) => {
                error!(user_id, %err, "error toggling follow");
                None
            }
        }
    }

    fn hide(&self) {
        // claim a token so responses still in flight are dropped
        self.page.update(|doc| {
            doc.search_token = self.tokens.issue();
            doc.search_results.hide();
        });
    }
}

async fn perform(api: Api, page: Page, tokens: Arc<Tokens>, query: String) {
    // issued under the document lock so the displayed token never moves backward
    let token = page.update(|doc| {
        let token = tokens.issue();
        doc.search_token = token;
        doc.search_results.show(SEARCHING);
        token
    });
    debug!(token, query = %query, "live search dispatched");

    let outcome = api.search(&query).await;
    page.update(|doc| {
        if doc.search_token > token {
            debug!(token, current = doc.search_token, "discarding stale search response");
            return;
        }
        match outcome {
            Ok(results) => doc.show_search_results(&results, &query),
            Err(err) => {
                error!(%err, "search error");
                doc.search_results.show(SEARCH_FAILED);
            }
        }
    });
}
