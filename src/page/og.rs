//! Open Graph properties.
//!
//! Keys from the standard vocabulary (`title`, `image`, `locale:alternate`,
//! `image:width`, ...) are prefixed with `og:` automatically; anything else
//! (`article:author`, `fb:app_id`) is kept as given. Singleton properties
//! replace earlier values, array properties (`image`, `audio`, `video`,
//! `locale:alternate`) accumulate.

use serde::{Deserialize, Serialize};

use super::merge::{Placeholders, merge_with_defaults};
use crate::utils::html::meta_tag;

/// Standard Open Graph property roots that receive the `og:` prefix.
const OG_PROPERTIES: &[&str] = &[
    "title",
    "type",
    "image",
    "url",
    "audio",
    "description",
    "determiner",
    "locale",
    "site_name",
    "video",
];

/// Properties that may appear at most once.
const SINGLETONS: &[&str] = &[
    "og:title",
    "og:type",
    "og:url",
    "og:description",
    "og:determiner",
    "og:locale",
    "og:site_name",
];

/// Roots that take structured `OgImage` values.
const STRUCTURED: &[&str] = &["og:image", "og:audio", "og:video"];

/// Default template, merged per key at render time.
const DEFAULTS: &[(&str, &str)] = &[
    ("og:title", "%TITLE%"),
    ("og:url", "%CURRENTURL%"),
    ("og:type", "website"),
    ("og:locale", "%LOCALE%"),
    ("og:description", "%DESCRIPTION%"),
];

/// Structured image, expanded into `og:image:*` properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secure_url: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl OgImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn secure_url(mut self, url: impl Into<String>) -> Self {
        self.secure_url = Some(url.into());
        self
    }

    pub fn mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// `(suffix, value)` pairs for the fields that are set, in tag order.
    fn properties(&self) -> Vec<(&'static str, String)> {
        let mut props = vec![("url", self.url.clone())];
        if let Some(secure_url) = &self.secure_url {
            props.push(("secure_url", secure_url.clone()));
        }
        if let Some(mime) = &self.mime {
            props.push(("type", mime.clone()));
        }
        if let Some(width) = self.width {
            props.push(("width", width.to_string()));
        }
        if let Some(height) = self.height {
            props.push(("height", height.to_string()));
        }
        props
    }
}

/// Value of an Open Graph property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OgValue {
    Text(String),
    Image(OgImage),
}

impl From<&str> for OgValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OgValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<OgImage> for OgValue {
    fn from(value: OgImage) -> Self {
        Self::Image(value)
    }
}

/// Resolve the property name a caller key maps to.
///
/// ```
/// use pagehead::page::og::property_name;
///
/// assert_eq!(property_name("title"), "og:title");
/// assert_eq!(property_name("image:width"), "og:image:width");
/// assert_eq!(property_name("og:url"), "og:url");
/// assert_eq!(property_name("article:author"), "article:author");
/// ```
pub fn property_name(key: &str) -> String {
    let root = key.split(':').next().unwrap_or(key);
    if OG_PROPERTIES.contains(&root) {
        format!("og:{key}")
    } else {
        key.to_string()
    }
}

/// Ordered Open Graph properties.
#[derive(Debug, Clone, Default)]
pub struct OpenGraph {
    entries: Vec<(String, String)>,
}

impl OpenGraph {
    pub fn set(&mut self, key: &str, value: OgValue) {
        let property = property_name(key);
        match value {
            OgValue::Text(text) => {
                if SINGLETONS.contains(&property.as_str()) {
                    self.entries.retain(|(k, _)| *k != property);
                }
                self.entries.push((property, text));
            }
            OgValue::Image(image) if STRUCTURED.contains(&property.as_str()) => {
                for (suffix, value) in image.properties() {
                    self.entries.push((format!("{property}:{suffix}"), value));
                }
            }
            // other properties have no sub-properties; keep the url
            OgValue::Image(image) => self.set(key, OgValue::Text(image.url)),
        }
    }

    /// Merge with the default template and render one tag per entry.
    ///
    /// Defaults for properties in `overridden` (set elsewhere, e.g. as
    /// `property` meta tags) are skipped.
    pub fn render(
        &self,
        placeholders: &Placeholders<'_>,
        overridden: impl Fn(&str) -> bool,
    ) -> Vec<String> {
        let defaults: Vec<_> = DEFAULTS
            .iter()
            .copied()
            .filter(|(key, _)| !overridden(key))
            .collect();
        merge_with_defaults(
            &self.entries,
            &defaults,
            |(k, _)| k.as_str(),
            |(_, v)| v.as_str(),
            |template| placeholders.substitute(template),
        )
        .into_iter()
        .map(|(key, value)| meta_tag("property", key, &value))
        .collect()
    }
}
