//! Tag suggestions for the comma-separated tags field.

/// Upper bound on suggestions shown for one keystroke.
pub const MAX_SUGGESTIONS: usize = 5;

/// Splits a tags field into its committed tags and the trailing in-progress token.
///
/// Every segment is trimmed. The committed slice may contain empty segments
/// (for example from `"a,,b"`); callers decide whether those matter.
pub fn split_input(value: &str) -> (Vec<&str>, &str) {
    let mut parts: Vec<&str> = value.split(',').map(str::trim).collect();
    // `split` always yields at least one item
    let token = parts.pop().unwrap_or_default();
    (parts, token)
}

/// Value of the tags field after the user picks `tag`: the in-progress token
/// is replaced and a fresh, empty token follows.
pub fn apply_suggestion(value: &str, tag: &str) -> String {
    let (committed, _) = split_input(value);
    let mut out = committed
        .into_iter()
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if !out.is_empty() {
        out.push_str(", ");
    }
    out.push_str(tag);
    out.push_str(", ");
    out
}

/// The tag list fetched once per page view, filtered against partial input.
#[derive(Debug, Clone, Default)]
pub struct TagSuggester {
    tags: Vec<String>,
}

impl TagSuggester {
    pub fn new(tags: Vec<String>) -> Self {
        Self { tags }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Tags that extend the in-progress token, in list order, capped at [`MAX_SUGGESTIONS`].
    ///
    /// Candidates equal to the token or to an already committed tag are skipped;
    /// all comparisons ignore case. An empty token yields nothing.
    pub fn suggest(&self, value: &str) -> Vec<&str> {
        let (committed, token) = split_input(value);
        if token.is_empty() || self.tags.is_empty() {
            return Vec::new();
        }
        let token = token.to_lowercase();
        let committed: Vec<String> = committed.iter().map(|t| t.to_lowercase()).collect();

        self.tags
            .iter()
            .filter(|tag| {
                let lower = tag.to_lowercase();
                lower.starts_with(&token) && lower != token && !committed.contains(&lower)
            })
            .map(String::as_str)
            .take(MAX_SUGGESTIONS)
            .collect()
    }
}
