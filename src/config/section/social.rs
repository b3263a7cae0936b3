//! `[social]` section: social SDKs embedded on every page.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::FACEBOOK_DEFAULT_VERSION;

const FACEBOOK_APP_ID: FieldPath = FieldPath::new("social.facebook_app_id");
const FACEBOOK_VERSION: FieldPath = FieldPath::new("social.facebook_version");

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Facebook app id; enables the Facebook SDK when set.
    pub facebook_app_id: Option<String>,
    /// Facebook Graph API version.
    pub facebook_version: String,
    pub twitter: bool,
    pub youtube: bool,
    pub google_plus: bool,
}

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            facebook_app_id: None,
            facebook_version: FACEBOOK_DEFAULT_VERSION.into(),
            twitter: false,
            youtube: false,
            google_plus: false,
        }
    }
}

impl SocialConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(app_id) = &self.facebook_app_id
            && !app_id.bytes().all(|b| b.is_ascii_digit())
        {
            diag.error_with_hint(
                FACEBOOK_APP_ID,
                format!("app id '{app_id}' is not numeric"),
                "copy the numeric id from the Facebook app dashboard",
            );
        }

        let version = self.facebook_version.strip_prefix('v').unwrap_or_default();
        if version.is_empty() || !version.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            diag.error_with_hint(
                FACEBOOK_VERSION,
                format!("invalid version '{}'", self.facebook_version),
                "use format like v2.0",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    fn validate(social: &SocialConfig) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        social.validate(&mut diag);
        diag
    }

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.social.facebook_app_id.is_none());
        assert_eq!(config.social.facebook_version, "v2.0");
        assert!(!config.social.twitter);
        assert!(validate(&config.social).is_empty());
    }

    #[test]
    fn test_parse() {
        let config = test_parse_config(
            "[social]\nfacebook_app_id = \"123\"\nfacebook_version = \"v3.1\"\ntwitter = true",
        );
        assert_eq!(config.social.facebook_app_id.as_deref(), Some("123"));
        assert_eq!(config.social.facebook_version, "v3.1");
        assert!(config.social.twitter);
        assert!(validate(&config.social).is_empty());
    }

    #[test]
    fn test_validate_errors() {
        let social = SocialConfig {
            facebook_app_id: Some("abc".into()),
            facebook_version: "2.0".into(),
            ..SocialConfig::default()
        };
        let diag = validate(&social);
        assert_eq!(diag.len(), 2);
        let fields: Vec<_> = diag.errors().map(|d| d.field).collect();
        assert_eq!(fields, [FACEBOOK_APP_ID, FACEBOOK_VERSION]);
    }
}
