//! HTML utility functions.
//!
//! Provides the small set of markup helpers the renderer needs:
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `link_tag()`, `meta_tag()` - self-closing head elements
//! - `conditional_comment()` - legacy IE conditional comments

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```
/// use pagehead::utils::html::escape;
///
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Tag Builders
// =============================================================================

/// Build a `<link>` tag. `kind` becomes the `type` attribute when present.
pub fn link_tag(rel: &str, href: &str, kind: Option<&str>) -> String {
    let kind = kind
        .map(|k| format!(" type=\"{}\"", escape_attr(k)))
        .unwrap_or_default();
    format!(
        "<link rel=\"{}\"{kind} href=\"{}\" />",
        escape_attr(rel),
        escape_attr(href)
    )
}

/// Build a `<meta>` tag keyed by `attr` (`name`, `property` or `http-equiv`).
pub fn meta_tag(attr: &str, key: &str, content: &str) -> String {
    format!(
        "<meta {attr}=\"{}\" content=\"{}\" />",
        escape_attr(key),
        escape_attr(content)
    )
}

/// Wrap markup in an IE conditional comment, e.g. `lt IE 9`.
pub fn conditional_comment(condition: &str, inner: &str) -> String {
    format!("<!--[if {condition}]>{inner}<![endif]-->")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_plain() {
        assert_eq!(escape("hello world"), "hello world");
    }

    #[test]
    fn test_escape_special_chars() {
        assert_eq!(escape("<script>"), "&lt;script&gt;");
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape("it's"), "it&#39;s");
    }

    #[test]
    fn test_escape_borrows_when_clean() {
        assert!(matches!(escape("plain"), Cow::Borrowed(_)));
        assert!(matches!(escape("a<b"), Cow::Owned(_)));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("normal"), "normal");
        assert_eq!(escape_attr("a\"b&c"), "a&quot;b&amp;c");
    }

    #[test]
    fn test_link_tag() {
        assert_eq!(
            link_tag("canonical", "https://example.com/?a=1&b=2", None),
            "<link rel=\"canonical\" href=\"https://example.com/?a=1&amp;b=2\" />"
        );
        assert_eq!(
            link_tag("shortcut icon", "/favicon.ico", Some("image/x-icon")),
            "<link rel=\"shortcut icon\" type=\"image/x-icon\" href=\"/favicon.ico\" />"
        );
    }

    #[test]
    fn test_meta_tag() {
        assert_eq!(
            meta_tag("name", "robots", "noindex"),
            "<meta name=\"robots\" content=\"noindex\" />"
        );
        assert_eq!(
            meta_tag("property", "og:title", "Tom & Jerry"),
            "<meta property=\"og:title\" content=\"Tom &amp; Jerry\" />"
        );
    }

    #[test]
    fn test_conditional_comment() {
        assert_eq!(
            conditional_comment("lt IE 9", "<b>x</b>"),
            "<!--[if lt IE 9]><b>x</b><![endif]-->"
        );
    }
}
