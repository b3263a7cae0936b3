//! `[site.info]` configuration.
//!
//! Document-level defaults applied to every page.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::{DEFAULT_CHARSET, DEFAULT_LOCALE};

const URL: FieldPath = FieldPath::new("site.info.url");
const LOCALE: FieldPath = FieldPath::new("site.info.locale");
const CHARSET: FieldPath = FieldPath::new("site.info.charset");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Title used when a page sets none.
    pub default_title: Option<String>,

    /// Suffix appended to page titles (e.g. " | My Site").
    pub append_title: Option<String>,

    /// Site description, used when a page sets none.
    pub description: Option<String>,

    /// Locale as `language_TERRITORY` (e.g. "en_US", "de_DE").
    pub locale: String,

    /// Document charset.
    pub charset: String,

    /// Site URL, used as the current URL when none is given on the command line.
    pub url: Option<String>,

    /// Load html5shiv for IE < 9.
    pub html5_shiv: bool,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            default_title: None,
            append_title: None,
            description: None,
            locale: DEFAULT_LOCALE.into(),
            charset: DEFAULT_CHARSET.into(),
            url: None,
            html5_shiv: false,
        }
    }
}

impl SiteInfoConfig {
    /// Validate site info.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `locale` must look like `en_US`
    /// - `charset` must not be blank
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            URL,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            URL,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        URL,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if !is_locale(&self.locale) {
            diag.error_with_hint(
                LOCALE,
                format!("invalid locale '{}'", self.locale),
                "use language_TERRITORY, e.g. en_US or de_DE",
            );
        }

        if self.charset.trim().is_empty() {
            diag.error(CHARSET, "charset must not be empty");
        }
    }
}

/// `ll_TT` or `lll_TT`: lowercase language, uppercase territory.
pub fn is_locale(s: &str) -> bool {
    let Some((lang, territory)) = s.split_once('_') else {
        return false;
    };
    matches!(lang.len(), 2 | 3)
        && lang.bytes().all(|b| b.is_ascii_lowercase())
        && territory.len() == 2
        && territory.bytes().all(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(info: &SiteInfoConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        info.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.site.info.locale, "en_US");
        assert_eq!(config.site.info.charset, "utf-8");
        assert!(config.site.info.default_title.is_none());
        assert!(!config.site.info.html5_shiv);
    }

    #[test]
    fn test_parse_fields() {
        let config = test_parse_config(
            "[site.info]\ndefault_title = \"Blog\"\nappend_title = \" | Blog\"\nlocale = \"de_DE\"\nhtml5_shiv = true",
        );
        assert_eq!(config.site.info.default_title.as_deref(), Some("Blog"));
        assert_eq!(config.site.info.append_title.as_deref(), Some(" | Blog"));
        assert_eq!(config.site.info.locale, "de_DE");
        assert!(config.site.info.html5_shiv);
    }

    #[test]
    fn test_is_locale() {
        assert!(is_locale("en_US"));
        assert!(is_locale("haw_US"));
        assert!(!is_locale("en"));
        assert!(!is_locale("en-US"));
        assert!(!is_locale("EN_us"));
    }

    #[test]
    fn test_validate_url() {
        let mut info = SiteInfoConfig {
            url: Some("https://example.com".into()),
            ..SiteInfoConfig::default()
        };
        assert!(validate(&info).is_empty());

        info.url = Some("ftp://example.com".into());
        assert_eq!(validate(&info).len(), 1);

        info.url = Some("not a url".into());
        assert_eq!(validate(&info).len(), 1);
    }

    #[test]
    fn test_validate_locale_and_charset() {
        let info = SiteInfoConfig {
            locale: "english".into(),
            charset: " ".into(),
            ..SiteInfoConfig::default()
        };
        let diag = validate(&info);
        assert_eq!(diag.len(), 2);
        let fields: Vec<_> = diag.errors().map(|d| d.field).collect();
        assert_eq!(fields, [LOCALE, CHARSET]);
    }
}
