//! Serialization of a `PageAssembler` into HTML fragments.
//!
//! Rendering borrows the assembler immutably: social loaders are merged
//! into a copy of the footer bucket, so rendering twice gives the same
//! output.

use serde::Serialize;

use super::bucket::{Bucket, JsInline, Position};
use super::context::{CurrentUrl, HtmlEmitter};
use super::lang::{TextKey, fill_markers};
use super::merge::Placeholders;
use super::meta::MetaType;
use super::social::FB_ROOT;
use super::{Breadcrumb, PageAssembler, PageError};
use crate::utils::html::{conditional_comment, escape, escape_attr, link_tag};
use crate::utils::mime;

const HTML5SHIV_SRC: &str = "//cdnjs.cloudflare.com/ajax/libs/html5shiv/3.7.2/html5shiv.min.js";
const BROWSEHAPPY_LINK: &str = "<a href=\"http://browsehappy.com/\" target=\"_blank\">";

/// Everything a page template needs, rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub head: String,
    pub footer: String,
    pub body_class: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_html: Option<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

impl<U: CurrentUrl, E: HtmlEmitter> PageAssembler<U, E> {
    /// Render the fragment for `<head>`.
    pub fn render_head(&self) -> Result<String, PageError> {
        let title = self.title()?;
        let current_url = self.url.current();
        let placeholders = Placeholders {
            title: &title,
            locale: &self.locale,
            current_url: &current_url,
            description: self.description.as_deref().unwrap_or_default(),
        };

        let mut html = vec![
            format!("<meta charset=\"{}\">", escape_attr(&self.charset)),
            format!("<title>{}</title>", escape(&title)),
        ];

        if self.html5_shiv {
            html.push(conditional_comment(
                "lt IE 9",
                &self.emitter.script_tag(HTML5SHIV_SRC),
            ));
        }

        html.extend(
            self.css_files
                .unique()
                .into_iter()
                .map(|href| self.emitter.style_tag(href)),
        );

        if !self.css_inline.is_empty() {
            html.push(format!(
                "<style type=\"text/css\">{}</style>",
                self.css_inline.concat()
            ));
        }

        if let Some(favicon) = &self.favicon {
            html.push(link_tag(
                "shortcut icon",
                favicon,
                Some(mime::for_icon(favicon)),
            ));
        }
        if let Some(icon) = &self.apple_touch_icon {
            html.push(link_tag("apple-touch-icon", icon, None));
        }
        if let Some(canonical) = &self.canonical {
            html.push(link_tag("canonical", canonical, None));
        }

        html.extend(self.meta.render(&placeholders));
        html.extend(self.og.render(&placeholders, |key| {
            self.meta.get(MetaType::Property, key).is_some()
        }));

        self.push_scripts(Position::Head, &self.js_inline[Position::Head], &mut html);

        Ok(join(html))
    }

    /// Render the fragment placed right before `</body>`.
    pub fn render_footer(&self) -> String {
        let mut html = Vec::new();

        if self.social.has_facebook() {
            html.push(FB_ROOT.to_string());
        }

        let snippets = self.social.snippets(&self.locale);
        if snippets.is_empty() {
            self.push_scripts(Position::Footer, &self.js_inline[Position::Footer], &mut html);
        } else {
            let mut inline = self.js_inline[Position::Footer].clone();
            for code in snippets {
                inline.push(
                    0,
                    JsInline {
                        code,
                        wrap_ready: false,
                    },
                );
            }
            self.push_scripts(Position::Footer, &inline, &mut html);
        }

        join(html)
    }

    /// Render both fragments together with the body-level accessors.
    pub fn render(&self) -> Result<Rendered, PageError> {
        Ok(Rendered {
            head: self.render_head()?,
            footer: self.render_footer(),
            body_class: self.body_classes(),
            title_html: self.page_title_html(None),
            breadcrumbs: self.breadcrumbs.clone(),
        })
    }

    /// Outdated-browser notice for IE < 8, in the active locale.
    pub fn browse_happy_html(&self) -> Result<String, PageError> {
        let text = self.lang.get(&self.locale, TextKey::BrowseHappy)?;
        let notice = fill_markers(text, &["<strong>", "</strong>", BROWSEHAPPY_LINK, "</a>"]);
        Ok(conditional_comment(
            "lt IE 8",
            &format!("<p id=\"browsehappy\">{notice}</p>"),
        ))
    }

    /// Script files of `position` followed by the inline script block.
    fn push_scripts(&self, position: Position, inline: &Bucket<JsInline>, html: &mut Vec<String>) {
        html.extend(
            self.js_files[position]
                .unique()
                .into_iter()
                .map(|src| self.emitter.script_tag(src)),
        );
        if let Some(block) = inline_script(inline) {
            html.push(block);
        }
    }
}

/// One `<script>` block: plain code first, then ready-wrapped code inside
/// a single DOM-ready handler. `None` when there is no code.
fn inline_script(inline: &Bucket<JsInline>) -> Option<String> {
    let mut plain = String::new();
    let mut ready = String::new();
    for entry in inline.iter() {
        if entry.wrap_ready {
            ready.push_str(&entry.code);
        } else {
            plain.push_str(&entry.code);
        }
    }

    if plain.is_empty() && ready.is_empty() {
        return None;
    }
    if !ready.is_empty() {
        plain.push_str("document.addEventListener('DOMContentLoaded',function(){");
        plain.push_str(&ready);
        plain.push_str("});");
    }
    Some(format!("<script>{plain}</script>"))
}

fn join(html: Vec<String>) -> String {
    if html.is_empty() {
        return String::new();
    }
    let mut out = html.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(entries: &[(i32, &str, bool)]) -> Bucket<JsInline> {
        let mut bucket = Bucket::new();
        for &(index, code, wrap_ready) in entries {
            bucket.push(
                index,
                JsInline {
                    code: code.into(),
                    wrap_ready,
                },
            );
        }
        bucket
    }

    #[test]
    fn test_inline_script_empty() {
        assert_eq!(inline_script(&Bucket::new()), None);
    }

    #[test]
    fn test_inline_script_plain_before_ready() {
        let inline = bucket(&[(0, "r1();", true), (0, "p1();", false), (1, "r2();", true)]);
        assert_eq!(
            inline_script(&inline).unwrap(),
            "<script>p1();document.addEventListener('DOMContentLoaded',function(){r1();r2();});</script>"
        );
    }

    #[test]
    fn test_inline_script_plain_only() {
        let inline = bucket(&[(2, "b();", false), (0, "a();", false)]);
        assert_eq!(inline_script(&inline).unwrap(), "<script>a();b();</script>");
    }

    #[test]
    fn test_join() {
        assert_eq!(join(Vec::new()), "");
        assert_eq!(join(vec!["a".into(), "b".into()]), "a\nb\n");
    }
}
