//! Page metadata assembly.
//!
//! A [`PageAssembler`] collects everything a page wants in its `<head>` and
//! before `</body>`, then renders both fragments on demand.
//!
//! # Module Structure
//!
//! ```text
//! page/
//! ├── bucket     # Position, index-ordered resource buckets
//! ├── context    # CurrentUrl / HtmlEmitter collaborators
//! ├── error      # PageError
//! ├── lang       # Localized texts with fallback
//! ├── merge      # Caller/default merge + placeholder substitution
//! ├── meta       # <meta> tags keyed by (type, name)
//! ├── og         # Open Graph properties
//! ├── render     # head/footer serialization
//! └── social     # Social SDK loaders
//! ```
//!
//! # Example
//!
//! ```
//! use pagehead::page::{MetaType, PageAssembler, Position, StaticUrl};
//!
//! let mut page = PageAssembler::new(StaticUrl::new("https://example.com/post"));
//! page.set_title("Post")
//!     .set_append_title(" | Blog")
//!     .set_meta(MetaType::Name, "robots", Some("noindex"))
//!     .add_css_file("/css/app.css")
//!     .add_js_file("/js/app.js", Position::Footer);
//!
//! let head = page.render_head().unwrap();
//! assert!(head.contains("<title>Post | Blog</title>"));
//! assert!(page.render_footer().contains("/js/app.js"));
//! ```

pub mod bucket;
pub mod context;
mod error;
pub mod lang;
pub mod merge;
pub mod meta;
pub mod og;
mod render;
pub mod social;

pub use bucket::{ByPosition, Bucket, JsInline, JsOptions, Position};
pub use context::{CurrentUrl, Html5Emitter, HtmlEmitter, StaticUrl};
pub use error::PageError;
pub use lang::{DEFAULT_LOCALE, LangTable, TextKey};
pub use meta::{MetaType, UnknownMetaType};
pub use og::{OgImage, OgValue};
pub use render::Rendered;
pub use social::{FACEBOOK_DEFAULT_VERSION, FacebookSdk, SocialEmbeds};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::debug;
use crate::utils::{html::escape, slug::slugify};
use meta::MetaTags;
use og::OpenGraph;

/// Default `<meta charset>`.
pub const DEFAULT_CHARSET: &str = "utf-8";

/// One breadcrumb trail item. Items without a URL are usually the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Accumulates page metadata for one request and renders it.
///
/// Setters return `&mut Self` so calls can be chained from any number of
/// call sites. Create one assembler per request; nothing is shared.
#[derive(Debug, Clone)]
pub struct PageAssembler<U, E = Html5Emitter> {
    url: U,
    emitter: E,

    title: Option<String>,
    default_title: Option<String>,
    append_title: Option<String>,
    description: Option<String>,

    meta: MetaTags,
    og: OpenGraph,

    css_files: Bucket<String>,
    css_inline: Vec<String>,
    js_files: ByPosition<Bucket<String>>,
    js_inline: ByPosition<Bucket<JsInline>>,

    favicon: Option<String>,
    apple_touch_icon: Option<String>,
    canonical: Option<String>,
    locale: String,
    charset: String,
    html5_shiv: bool,

    body_classes: Vec<String>,
    breadcrumbs: Vec<Breadcrumb>,
    social: SocialEmbeds,
    lang: LangTable,
}

impl<U: CurrentUrl> PageAssembler<U> {
    /// Assembler emitting plain HTML5 file tags.
    pub fn new(url: U) -> Self {
        Self::with_emitter(url, Html5Emitter)
    }
}

impl<U: CurrentUrl, E: HtmlEmitter> PageAssembler<U, E> {
    pub fn with_emitter(url: U, emitter: E) -> Self {
        Self {
            url,
            emitter,
            title: None,
            default_title: None,
            append_title: None,
            description: None,
            meta: MetaTags::default(),
            og: OpenGraph::default(),
            css_files: Bucket::new(),
            css_inline: Vec::new(),
            js_files: ByPosition::default(),
            js_inline: ByPosition::default(),
            favicon: None,
            apple_touch_icon: None,
            canonical: None,
            locale: DEFAULT_LOCALE.to_string(),
            charset: DEFAULT_CHARSET.to_string(),
            html5_shiv: false,
            body_classes: Vec::new(),
            breadcrumbs: Vec::new(),
            social: SocialEmbeds::default(),
            lang: LangTable::builtin(),
        }
    }

    // ========================================================================
    // title & description
    // ========================================================================

    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Title used when no page title is set.
    pub fn set_default_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.default_title = Some(title.into());
        self
    }

    /// Suffix appended to the page title (not to the default title).
    pub fn set_append_title(&mut self, suffix: impl Into<String>) -> &mut Self {
        self.append_title = Some(suffix.into());
        self
    }

    /// Set the description; also writes the `name=description` meta tag.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        let description = description.into();
        self.meta
            .set(MetaType::Name, "description".into(), Some(description.clone()));
        self.description = Some(description);
        self
    }

    // ========================================================================
    // meta & open graph
    // ========================================================================

    /// Set a meta tag, or remove it when `value` is `None`.
    pub fn set_meta<V: Into<String>>(
        &mut self,
        kind: MetaType,
        key: impl Into<String>,
        value: Option<V>,
    ) -> &mut Self {
        self.meta.set(kind, key.into(), value.map(Into::into));
        self
    }

    /// Remove a meta tag if present.
    pub fn remove_meta(&mut self, kind: MetaType, key: impl Into<String>) -> &mut Self {
        self.set_meta(kind, key, None::<String>)
    }

    /// String-typed variant of [`set_meta`](Self::set_meta).
    ///
    /// An unrecognized `kind` leaves the page untouched.
    pub fn set_meta_str(&mut self, kind: &str, key: &str, value: Option<&str>) -> &mut Self {
        match kind.parse::<MetaType>() {
            Ok(kind) => self.set_meta(kind, key, value),
            Err(err) => {
                debug!("meta"; "ignoring `{}`: {}", key, err);
                self
            }
        }
    }

    pub fn set_open_graph(&mut self, key: &str, value: impl Into<OgValue>) -> &mut Self {
        self.og.set(key, value.into());
        self
    }

    // ========================================================================
    // stylesheets & scripts
    // ========================================================================

    pub fn add_css_file(&mut self, path: impl Into<String>) -> &mut Self {
        self.add_css_file_at(path, 0)
    }

    /// Add a stylesheet with an explicit load-order index.
    pub fn add_css_file_at(&mut self, path: impl Into<String>, index: i32) -> &mut Self {
        self.css_files.push(index, path.into());
        self
    }

    pub fn add_css_inline(&mut self, code: impl Into<String>) -> &mut Self {
        self.css_inline.push(code.into());
        self
    }

    pub fn add_js_file(&mut self, path: impl Into<String>, position: Position) -> &mut Self {
        self.add_js_file_at(path, position, 0)
    }

    /// Add a script file with an explicit load-order index.
    pub fn add_js_file_at(
        &mut self,
        path: impl Into<String>,
        position: Position,
        index: i32,
    ) -> &mut Self {
        self.js_files[position].push(index, path.into());
        self
    }

    /// Add inline code at index 0, run from the DOM-ready handler.
    pub fn add_js_inline(&mut self, code: impl Into<String>, position: Position) -> &mut Self {
        self.add_js_inline_with(code, position, JsOptions::default())
    }

    pub fn add_js_inline_with(
        &mut self,
        code: impl Into<String>,
        position: Position,
        options: JsOptions,
    ) -> &mut Self {
        self.js_inline[position].push(
            options.index,
            JsInline {
                code: code.into(),
                wrap_ready: options.wrap_ready,
            },
        );
        self
    }

    // ========================================================================
    // document settings
    // ========================================================================

    pub fn set_favicon(&mut self, path: impl Into<String>) -> &mut Self {
        self.favicon = Some(path.into());
        self
    }

    pub fn set_apple_touch_icon(&mut self, path: impl Into<String>) -> &mut Self {
        self.apple_touch_icon = Some(path.into());
        self
    }

    pub fn set_canonical(&mut self, url: impl Into<String>) -> &mut Self {
        self.canonical = Some(url.into());
        self
    }

    /// Locale as `language_TERRITORY` (e.g. `de_DE`).
    pub fn set_locale(&mut self, locale: impl Into<String>) -> &mut Self {
        self.locale = locale.into();
        self
    }

    pub fn set_charset(&mut self, charset: impl Into<String>) -> &mut Self {
        self.charset = charset.into();
        self
    }

    /// Load html5shiv for IE < 9.
    pub fn set_html5_shiv(&mut self, enabled: bool) -> &mut Self {
        self.html5_shiv = enabled;
        self
    }

    /// Add a body class. Stored slugified, rendered as `has-<slug>`.
    pub fn add_body_class(&mut self, name: &str) -> &mut Self {
        let slug = slugify(name);
        if slug.is_empty() {
            debug!("page"; "body class `{}` is empty after slugify", name);
        } else {
            self.body_classes.push(slug);
        }
        self
    }

    // ========================================================================
    // social embeds
    // ========================================================================

    /// Embed the Facebook SDK with the default API version.
    pub fn add_facebook_sdk(&mut self, app_id: impl Into<String>) -> &mut Self {
        self.add_facebook_sdk_version(app_id, FACEBOOK_DEFAULT_VERSION)
    }

    pub fn add_facebook_sdk_version(
        &mut self,
        app_id: impl Into<String>,
        version: impl Into<String>,
    ) -> &mut Self {
        self.social.facebook = Some(FacebookSdk {
            app_id: app_id.into(),
            version: version.into(),
        });
        self
    }

    pub fn add_twitter_sdk(&mut self) -> &mut Self {
        self.social.twitter = true;
        self
    }

    pub fn add_youtube_sdk(&mut self) -> &mut Self {
        self.social.youtube = true;
        self
    }

    pub fn add_google_plus_sdk(&mut self) -> &mut Self {
        self.social.google_plus = true;
        self
    }

    // ========================================================================
    // breadcrumbs
    // ========================================================================

    pub fn add_breadcrumb(&mut self, label: impl Into<String>, url: Option<&str>) -> &mut Self {
        self.breadcrumbs.push(Breadcrumb {
            label: label.into(),
            url: url.map(str::to_string),
        });
        self
    }

    // ========================================================================
    // accessors
    // ========================================================================

    pub fn breadcrumbs(&self) -> &[Breadcrumb] {
        &self.breadcrumbs
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn social(&self) -> &SocialEmbeds {
        &self.social
    }

    /// Translations used for the no-title warning and browsehappy notice.
    pub fn lang_mut(&mut self) -> &mut LangTable {
        &mut self.lang
    }

    /// Document title: page title plus suffix, else the default title,
    /// else a visible warning.
    pub fn title(&self) -> Result<String, PageError> {
        match (&self.title, &self.default_title) {
            (Some(title), _) => Ok(format!(
                "{title}{}",
                self.append_title.as_deref().unwrap_or_default()
            )),
            (None, Some(default)) => Ok(default.clone()),
            (None, None) => Ok(format!(
                "! {} !",
                self.lang.get(&self.locale, TextKey::NoTitle)?
            )),
        }
    }

    /// Page title wrapped in `tag` (default `h1`), without the suffix.
    ///
    /// `None` when neither a page title nor a default title is set.
    pub fn page_title_html(&self, tag: Option<&str>) -> Option<String> {
        let tag = tag.unwrap_or("h1");
        self.title
            .as_deref()
            .or(self.default_title.as_deref())
            .map(|title| format!("<{tag}>{}</{tag}>", escape(title)))
    }

    /// Space-separated `has-<slug>` classes, duplicates removed.
    pub fn body_classes(&self) -> String {
        let mut seen = FxHashSet::default();
        self.body_classes
            .iter()
            .filter(|slug| seen.insert(slug.as_str()))
            .map(|slug| format!("has-{slug}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `class="..."` attribute for `<body>`, or an empty string.
    pub fn body_class_attr(&self) -> String {
        let classes = self.body_classes();
        if classes.is_empty() {
            String::new()
        } else {
            format!("class=\"{classes}\"")
        }
    }
}
