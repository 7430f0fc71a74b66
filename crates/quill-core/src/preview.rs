//! Content previews for the post list.

use std::borrow::Cow;

/// Maximum number of characters shown before truncating.
pub const PREVIEW_CHARS: usize = 150;

/// Appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Cut `content` to [`PREVIEW_CHARS`] characters, marking the cut with
/// [`ELLIPSIS`]. Counts `char`s, not bytes or words.
pub fn content_preview(content: &str) -> Cow<'_, str> {
    match content.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => Cow::Owned(format!("{}{}", &content[..cut], ELLIPSIS)),
        None => Cow::Borrowed(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_limit_is_unabridged() {
        let content = "a".repeat(150);
        assert_eq!(content_preview(&content), content.as_str());
    }

    #[test]
    fn test_one_over_limit_is_truncated() {
        let content = "a".repeat(151);
        let preview = content_preview(&content);

        assert_eq!(preview.len(), 150 + ELLIPSIS.len());
        assert!(preview.ends_with(ELLIPSIS));
        assert_eq!(&preview[..150], &content[..150]);
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let content = "é".repeat(151);
        let preview = content_preview(&content);

        assert_eq!(preview.chars().count(), 150 + ELLIPSIS.chars().count());
        assert!(preview.starts_with(&"é".repeat(150)));
    }

    #[test]
    fn test_short_content_is_borrowed() {
        assert!(matches!(content_preview("short"), Cow::Borrowed("short")));
        assert_eq!(content_preview(""), "");
    }
}
