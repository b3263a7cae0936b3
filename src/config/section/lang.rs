//! `[lang]` section: extra or replacement translations.
//!
//! ```toml
//! [lang.fr_FR]
//! no_title = "ATTENTION : aucun titre de page"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::section::site::is_locale;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::{LangTable, TextKey};

const LANG: FieldPath = FieldPath::new("lang");

/// Locale → text key → text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangConfig(pub FxHashMap<String, FxHashMap<String, String>>);

impl LangConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (locale, texts) in &self.0 {
            if !is_locale(locale) {
                diag.error_with_hint(
                    LANG,
                    format!("invalid locale '{locale}'"),
                    "use language_TERRITORY, e.g. fr_FR",
                );
            }
            for key in texts.keys() {
                if TextKey::parse(key).is_none() {
                    diag.error_with_hint(
                        LANG,
                        format!("unknown text key '{key}' in [lang.{locale}]"),
                        "known keys: browsehappy, no_title",
                    );
                }
            }
        }
    }

    /// Copy valid entries into `table`.
    pub fn apply(&self, table: &mut LangTable) {
        for (locale, texts) in &self.0 {
            for (key, text) in texts {
                if let Some(key) = TextKey::parse(key) {
                    table.insert(locale.as_str(), key, text.as_str());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_apply() {
        let config = test_parse_config("[lang.fr_FR]\nno_title = \"ATTENTION\"");
        let mut table = LangTable::builtin();
        config.lang.apply(&mut table);
        assert_eq!(table.get("fr_FR", TextKey::NoTitle).unwrap(), "ATTENTION");
    }

    #[test]
    fn test_validate() {
        let config = test_parse_config("[lang.french]\nno_title = \"x\"\nfooter = \"y\"");
        let mut diag = ConfigDiagnostics::new();
        config.lang.validate(&mut diag);
        assert_eq!(diag.len(), 2);
    }
}
