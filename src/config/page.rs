//! Page description files rendered by `pagehead render`.
//!
//! A page file lists the calls a page template would make on the
//! assembler, as TOML:
//!
//! ```toml
//! title = "Hello"
//! description = "A first post"
//! canonical = "https://example.com/hello"
//! body_classes = ["Blog Post"]
//! breadcrumbs = [{ label = "Home", url = "/" }, { label = "Hello" }]
//! meta = [{ type = "name", key = "robots", value = "noindex" }]
//! og = [{ key = "image", value = { url = "/hello.jpg", width = 1200 } }]
//! styles = ["/css/post.css"]
//! scripts = [{ path = "/js/post.js", index = 1 }]
//! inline_js = [{ code = "init();", wrap_ready = false }]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::section::{ScriptEntry, StyleEntry};
use crate::page::{Breadcrumb, CurrentUrl, HtmlEmitter, JsOptions, OgValue, PageAssembler, Position};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageFile {
    pub title: Option<String>,
    pub description: Option<String>,
    pub canonical: Option<String>,
    pub locale: Option<String>,
    pub body_classes: Vec<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub meta: Vec<MetaEntry>,
    pub og: Vec<OgEntry>,
    pub styles: Vec<StyleEntry>,
    pub inline_css: Vec<String>,
    pub scripts: Vec<ScriptEntry>,
    pub inline_js: Vec<InlineJsEntry>,
}

/// `value` omitted removes the tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaEntry {
    #[serde(rename = "type")]
    pub kind: String,
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OgEntry {
    pub key: String,
    pub value: OgValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InlineJsEntry {
    pub code: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub index: i32,
    #[serde(default = "default_true")]
    pub wrap_ready: bool,
}

fn default_true() -> bool {
    true
}

impl PageFile {
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read page file `{}`", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse page file `{}`", path.display()))
    }

    /// Replay the file's calls on `page`, in field order.
    pub fn apply<U: CurrentUrl, E: HtmlEmitter>(&self, page: &mut PageAssembler<U, E>) {
        if let Some(title) = &self.title {
            page.set_title(title.as_str());
        }
        if let Some(description) = &self.description {
            page.set_description(description.as_str());
        }
        if let Some(canonical) = &self.canonical {
            page.set_canonical(canonical.as_str());
        }
        if let Some(locale) = &self.locale {
            page.set_locale(locale.as_str());
        }
        for class in &self.body_classes {
            page.add_body_class(class);
        }
        for crumb in &self.breadcrumbs {
            page.add_breadcrumb(crumb.label.as_str(), crumb.url.as_deref());
        }
        for entry in &self.meta {
            page.set_meta_str(&entry.kind, &entry.key, entry.value.as_deref());
        }
        for entry in &self.og {
            page.set_open_graph(&entry.key, entry.value.clone());
        }
        for style in &self.styles {
            page.add_css_file_at(style.path(), style.index());
        }
        for code in &self.inline_css {
            page.add_css_inline(code.as_str());
        }
        for script in &self.scripts {
            page.add_js_file_at(script.path(), script.position(), script.index());
        }
        for js in &self.inline_js {
            page.add_js_inline_with(
                js.code.as_str(),
                js.position,
                JsOptions::default().index(js.index).wrap_ready(js.wrap_ready),
            );
        }
    }
}
