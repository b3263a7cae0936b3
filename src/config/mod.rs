//! Site configuration management for `pagehead.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── lang       # [lang]
//! │   ├── site       # [site] and sub-sections
//! │   └── social     # [social]
//! ├── types/         # ConfigError, diagnostics, field paths
//! ├── page           # Page description files (CLI input)
//! ├── util           # Config discovery, URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `[site.info]`   | Default/append title, locale, charset, url    |
//! | `[site.header]` | Icons, stylesheets, scripts                   |
//! | `[site.meta]`   | Site-wide meta tags                           |
//! | `[site.og]`     | Site-wide Open Graph properties               |
//! | `[social]`      | Social SDK embeds                             |
//! | `[lang]`        | Extra translations                            |

pub mod page;
pub mod section;
pub mod types;
mod util;

pub use page::PageFile;
pub use section::{LangConfig, SiteSectionConfig, SocialConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, page_url};

use crate::log;
use crate::page::{CurrentUrl, HtmlEmitter, PageAssembler};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "pagehead.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing pagehead.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Path of the loaded config file (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Document defaults, header resources, meta and og
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Social SDK embeds
    #[serde(default)]
    pub social: SocialConfig,

    /// Extra translations
    #[serde(default)]
    pub lang: LangConfig,
}

impl SiteConfig {
    /// Load, warn about unknown fields, and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.config_path = Some(path.to_path_buf());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        self.social.validate(&mut diag);
        self.lang.validate(&mut diag);
        diag.print_warnings();
        diag.into_result().map_err(ConfigError::Diagnostics)
    }

    // ========================================================================
    // page assembly
    // ========================================================================

    /// Fresh assembler for one request, pre-configured with site defaults.
    pub fn assembler<U: CurrentUrl>(&self, url: U) -> PageAssembler<U> {
        let mut page = PageAssembler::new(url);
        self.apply(&mut page);
        page
    }

    /// Apply site-wide settings to `page`.
    pub fn apply<U: CurrentUrl, E: HtmlEmitter>(&self, page: &mut PageAssembler<U, E>) {
        let info = &self.site.info;
        let header = &self.site.header;

        page.set_locale(info.locale.as_str())
            .set_charset(info.charset.as_str())
            .set_html5_shiv(info.html5_shiv);
        if let Some(title) = &info.default_title {
            page.set_default_title(title.as_str());
        }
        if let Some(suffix) = &info.append_title {
            page.set_append_title(suffix.as_str());
        }
        if let Some(description) = &info.description {
            page.set_description(description.as_str());
        }

        if let Some(favicon) = &header.favicon {
            page.set_favicon(favicon.as_str());
        }
        if let Some(icon) = &header.apple_touch_icon {
            page.set_apple_touch_icon(icon.as_str());
        }
        for style in &header.styles {
            page.add_css_file_at(style.path(), style.index());
        }
        for script in &header.scripts {
            page.add_js_file_at(script.path(), script.position(), script.index());
        }

        for (kind, name, value) in self.site.meta_entries() {
            page.set_meta(kind, name, Some(value));
        }
        for (key, value) in &self.site.og {
            page.set_open_graph(key, value.as_str());
        }

        let social = &self.social;
        if let Some(app_id) = &social.facebook_app_id {
            page.add_facebook_sdk_version(app_id.as_str(), social.facebook_version.as_str());
        }
        if social.twitter {
            page.add_twitter_sdk();
        }
        if social.youtube {
            page.add_youtube_sdk();
        }
        if social.google_plus {
            page.add_google_plus_sdk();
        }

        self.lang.apply(page.lang_mut());
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::StaticUrl;

    #[test]
    fn test_parse_invalid_toml() {
        let result = SiteConfig::parse_with_ignored("[site\ndefault_title = \"My Blog\"");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(config.config_path.is_none());
        assert_eq!(config.site.info.locale, "en_US");
        assert!(config.site.meta.is_empty());
        assert!(config.social.facebook_app_id.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site.info]\ndefault_title = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();

        assert_eq!(config.site.info.default_title.as_deref(), Some("Test"));
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let content = "[site.info]\ndefault_title = \"Test\"";
        let (_, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[site.info]\nurl = \"ftp://x\"\nlocale = \"xx\"\n[social]\nfacebook_app_id = \"abc\"",
        );
        match config.validate() {
            Err(ConfigError::Diagnostics(diag)) => assert_eq!(diag.len(), 3),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }

    #[test]
    fn test_assembler_applies_site_defaults() {
        let config = test_parse_config(
            r#"
[site.info]
default_title = "Blog"
locale = "de_DE"

[site.header]
favicon = "/favicon.png"
styles = ["/css/app.css"]
scripts = [{ path = "/js/head.js", position = "head" }, "/js/app.js"]

[site.meta]
"name.author" = "Alice"

[site.og]
site_name = "Blog"

[social]
twitter = true
"#,
        );
        let page = config.assembler(StaticUrl::new("https://example.com/"));
        assert_eq!(page.locale(), "de_DE");

        let head = page.render_head().unwrap();
        assert!(head.contains("<title>Blog</title>"));
        assert!(head.contains("type=\"image/png\" href=\"/favicon.png\""));
        assert!(head.contains("href=\"/css/app.css\""));
        assert!(head.contains("<meta name=\"author\" content=\"Alice\" />"));
        assert!(head.contains("<meta property=\"og:site_name\" content=\"Blog\" />"));
        assert!(head.contains("<meta property=\"og:locale\" content=\"de_DE\" />"));
        assert!(head.contains("/js/head.js"));

        let footer = page.render_footer();
        assert!(footer.contains("/js/app.js"));
        assert!(footer.contains("platform.twitter.com"));
        assert!(page.social().twitter);
    }

    #[test]
    fn test_assembler_per_request_is_fresh() {
        let config = SiteConfig::default();
        let mut first = config.assembler(StaticUrl::new("https://example.com/a"));
        first.set_title("A").add_body_class("only-a");
        assert_eq!(first.body_classes(), "has-only-a");

        let second = config.assembler(StaticUrl::new("https://example.com/b"));
        assert_eq!(second.body_classes(), "");
        assert!(second.render_head().unwrap().contains("WARNING"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "[site.info]\ndefault_title = \"Loaded\"").unwrap();

        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(config.site.info.default_title.as_deref(), Some("Loaded"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/pagehead.toml")).unwrap_err();
        assert!(err.to_string().contains("IO error"));
    }
}
