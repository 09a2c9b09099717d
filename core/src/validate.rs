use thiserror::Error;

/// Longest post body accepted, counted in characters.
pub const MAX_POST_CHARS: usize = 500;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please enter content or upload an audio file")]
    Empty,
    #[error("Content must be 500 characters or less")]
    TooLong,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CommentError {
    #[error("Comment cannot be empty")]
    Empty,
}

/// Checks a new post before upload and returns the trimmed body.
pub fn post_content(raw: &str, has_attachment: bool) -> Result<&str, DraftError> {
    let content = raw.trim();
    if content.is_empty() && !has_attachment {
        return Err(DraftError::Empty);
    }
    if content.chars().count() > MAX_POST_CHARS {
        return Err(DraftError::TooLong);
    }
    Ok(content)
}

pub fn comment_content(raw: &str) -> Result<&str, CommentError> {
    let content = raw.trim();
    if content.is_empty() {
        return Err(CommentError::Empty);
    }
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_needs_text_or_audio() {
        assert_eq!(post_content("   ", false), Err(DraftError::Empty));
        assert_eq!(post_content("   ", true), Ok(""));
        assert_eq!(post_content("  new track  ", false), Ok("new track"));
    }

    #[test]
    fn post_length_counts_chars() {
        let at_limit = "é".repeat(MAX_POST_CHARS);
        assert!(post_content(&at_limit, false).is_ok());
        let over = "x".repeat(MAX_POST_CHARS + 1);
        assert_eq!(post_content(&over, true), Err(DraftError::TooLong));
    }

    #[test]
    fn whitespace_comment_rejected() {
        assert_eq!(comment_content(" \t\n"), Err(CommentError::Empty));
        assert_eq!(comment_content(" nice "), Ok("nice"));
    }
}
