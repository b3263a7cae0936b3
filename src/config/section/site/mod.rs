//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! default_title = "My Blog"
//! append_title = " | My Blog"
//! locale = "en_US"
//! url = "https://myblog.com"
//!
//! [site.header]
//! favicon = "/favicon.ico"
//! styles = ["/css/app.css"]
//! scripts = ["/js/app.js", { path = "/js/head.js", position = "head" }]
//!
//! [site.meta]
//! "name.author" = "Alice"
//!
//! [site.og]
//! site_name = "My Blog"
//! ```

mod header;
mod info;

pub use header::{HeaderConfig, ScriptEntry, StyleEntry};
pub use info::{SiteInfoConfig, is_locale};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::MetaType;

const META: FieldPath = FieldPath::new("site.meta");

/// Site section configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Document defaults (titles, locale, charset, url).
    pub info: SiteInfoConfig,

    /// Icons, stylesheets and scripts for every page.
    pub header: HeaderConfig,

    /// Extra meta tags as `"<type>.<name>" = "<content>"`.
    pub meta: BTreeMap<String, String>,

    /// Site-wide Open Graph properties (`site_name`, `fb:app_id`, ...).
    pub og: BTreeMap<String, String>,
}

impl SiteSectionConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(diag);
        self.header.validate(diag);
        for key in self.meta.keys() {
            if let Err(message) = split_meta_key(key) {
                diag.error_with_hint(
                    META,
                    message,
                    "use \"<type>.<name>\", e.g. \"name.author\" or \"http-equiv.refresh\"",
                );
            }
        }
    }

    /// Parsed `[site.meta]` entries; invalid keys are skipped.
    pub fn meta_entries(&self) -> impl Iterator<Item = (MetaType, &str, &str)> {
        self.meta.iter().filter_map(|(key, value)| {
            split_meta_key(key)
                .ok()
                .map(|(kind, name)| (kind, name, value.as_str()))
        })
    }
}

/// Split `"name.author"` into its meta type and name.
fn split_meta_key(key: &str) -> Result<(MetaType, &str), String> {
    let (kind, name) = key
        .split_once('.')
        .ok_or_else(|| format!("meta key '{key}' has no type prefix"))?;
    let kind = kind.parse::<MetaType>().map_err(|e| e.to_string())?;
    if name.is_empty() {
        return Err(format!("meta key '{key}' has an empty name"));
    }
    Ok((kind, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_split_meta_key() {
        assert_eq!(split_meta_key("name.author"), Ok((MetaType::Name, "author")));
        assert_eq!(
            split_meta_key("property.fb:app_id"),
            Ok((MetaType::Property, "fb:app_id"))
        );
        assert_eq!(
            split_meta_key("http-equiv.refresh"),
            Ok((MetaType::HttpEquiv, "refresh"))
        );
        assert!(split_meta_key("author").is_err());
        assert!(split_meta_key("itemprop.name").is_err());
        assert!(split_meta_key("name.").is_err());
    }

    #[test]
    fn test_meta_entries() {
        let config = test_parse_config(
            "[site.meta]\n\"name.author\" = \"Alice\"\n\"bogus.key\" = \"x\"",
        );
        let entries: Vec<_> = config.site.meta_entries().collect();
        assert_eq!(entries, [(MetaType::Name, "author", "Alice")]);

        let mut diag = ConfigDiagnostics::new();
        config.site.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }

    #[test]
    fn test_og_section() {
        let config = test_parse_config("[site.og]\nsite_name = \"Blog\"");
        assert_eq!(config.site.og.get("site_name").map(String::as_str), Some("Blog"));
    }
}
