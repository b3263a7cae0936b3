//! Collaborators injected into a `PageAssembler`.
//!
//! | Trait         | Purpose                                        |
//! |---------------|------------------------------------------------|
//! | `CurrentUrl`  | Absolute URL of the in-flight request          |
//! | `HtmlEmitter` | Markup for file-referencing script/style tags  |

use crate::utils::html::{escape_attr, link_tag};

/// Source of the current request URL.
///
/// Consumed for `%CURRENTURL%` substitution, which is also the default
/// `og:url` value.
pub trait CurrentUrl {
    fn current(&self) -> String;
}

/// A fixed URL, for callers that already know it when building the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticUrl(pub String);

impl StaticUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }
}

impl CurrentUrl for StaticUrl {
    fn current(&self) -> String {
        self.0.clone()
    }
}

impl<F> CurrentUrl for F
where
    F: Fn() -> String,
{
    fn current(&self) -> String {
        self()
    }
}

/// Serializes tags that reference external files.
pub trait HtmlEmitter {
    /// `<script>` tag loading `src`.
    fn script_tag(&self, src: &str) -> String;
    /// Stylesheet tag loading `href`.
    fn style_tag(&self, href: &str) -> String;
}

/// Plain HTML5 markup with escaped attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Html5Emitter;

impl HtmlEmitter for Html5Emitter {
    fn script_tag(&self, src: &str) -> String {
        format!("<script src=\"{}\"></script>", escape_attr(src))
    }

    fn style_tag(&self, href: &str) -> String {
        link_tag("stylesheet", href, Some("text/css"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_url() {
        let url = StaticUrl::new("https://example.com/a");
        assert_eq!(url.current(), "https://example.com/a");
    }

    #[test]
    fn test_closure_url() {
        let host = "example.org";
        let url = move || format!("https://{host}/");
        assert_eq!(url.current(), "https://example.org/");
    }

    #[test]
    fn test_html5_emitter() {
        let emitter = Html5Emitter;
        assert_eq!(
            emitter.script_tag("/js/app.js?v=1&x=2"),
            "<script src=\"/js/app.js?v=1&amp;x=2\"></script>"
        );
        assert_eq!(
            emitter.style_tag("/css/app.css"),
            "<link rel=\"stylesheet\" type=\"text/css\" href=\"/css/app.css\" />"
        );
    }
}
