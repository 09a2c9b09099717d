use crate::api::Api;
use crate::window::Page;
use echoverse_core::{apply_suggestion, render, TagSuggester};
use tracing::warn;

/// The tags field of the new-post form.
pub struct TagField {
    suggester: TagSuggester,
    page: Page,
}

impl TagField {
    pub fn new(tags: Vec<String>, page: Page) -> Self {
        Self { suggester: TagSuggester::new(tags), page }
    }

    /// Fetches the tag list once. A failed fetch leaves autocomplete inert.
    pub async fn load(api: &Api, page: Page) -> Self {
        let tags = match api.tags().await {
            Ok(tags) => tags,
            Err(err) => {
                warn!(%err, "error loading tags");
                Vec::new()
            }
        };
        Self::new(tags, page)
    }

    pub fn known_tags(&self) -> usize {
        self.suggester.len()
    }

    /// Handles an edit of the field and returns the suggestions now shown.
    pub fn input(&self, value: &str) -> Vec<String> {
        let hits = self.suggester.suggest(value);
        self.page.update(|doc| {
            doc.tags_input = value.to_string();
            if hits.is_empty() {
                doc.tag_suggestions.hide();
            } else {
                doc.tag_suggestions.show(render::tag_suggestions(&hits));
            }
        });
        hits.into_iter().map(str::to_owned).collect()
    }

    /// Picks a suggestion and re-runs the filter for the next, empty token.
    pub fn select(&self, tag: &str) -> String {
        let current = self.page.read(|doc| doc.tags_input.clone());
        let value = apply_suggestion(&current, tag);
        self.input(&value);
        value
    }

    pub fn blur(&self) {
        self.page.update(|doc| doc.tag_suggestions.hide());
    }
}
