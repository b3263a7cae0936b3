//! Localized texts used by the renderer.
//!
//! The built-in table covers `en_US` and `de_DE`. Lookups fall back to
//! [`DEFAULT_LOCALE`]; a key missing there as well is a [`PageError`].

use rustc_hash::FxHashMap;

use super::PageError;

/// Locale whose texts back every other locale.
pub const DEFAULT_LOCALE: &str = "en_US";

/// Key into the text table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    /// Outdated browser notice. Four `%s` markers are filled with
    /// `<strong>`, `</strong>`, the upgrade link opening tag and `</a>`.
    BrowseHappy,
    /// Shown in `<title>` when no title was configured.
    NoTitle,
}

impl TextKey {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BrowseHappy => "browsehappy",
            Self::NoTitle => "no_title",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "browsehappy" => Some(Self::BrowseHappy),
            "no_title" => Some(Self::NoTitle),
            _ => None,
        }
    }
}

const BUILTIN: &[(&str, TextKey, &str)] = &[
    (
        "en_US",
        TextKey::BrowseHappy,
        "You are using an %soutdated%s browser. Please %supgrade your browser%s to improve your experience.",
    ),
    (
        "en_US",
        TextKey::NoTitle,
        "WARNING: No (default) page title defined",
    ),
    (
        "de_DE",
        TextKey::BrowseHappy,
        "Du benutzt einen %sveralteten%s Browser. Bitte %saktualisiere Deinen Browser%s um alle Funktionen unserer Seite uneingeschränkt nutzen zu können.",
    ),
    (
        "de_DE",
        TextKey::NoTitle,
        "WARNUNG: Kein Seitentitel definiert",
    ),
];

/// Locale → key → text.
#[derive(Debug, Clone)]
pub struct LangTable {
    texts: FxHashMap<String, FxHashMap<TextKey, String>>,
}

impl Default for LangTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl LangTable {
    /// Table with the built-in translations.
    pub fn builtin() -> Self {
        let mut table = Self::empty();
        for &(locale, key, text) in BUILTIN {
            table.insert(locale, key, text);
        }
        table
    }

    /// Table without any text.
    pub fn empty() -> Self {
        Self {
            texts: FxHashMap::default(),
        }
    }

    /// Add or replace a translation.
    pub fn insert(&mut self, locale: impl Into<String>, key: TextKey, text: impl Into<String>) {
        self.texts
            .entry(locale.into())
            .or_default()
            .insert(key, text.into());
    }

    /// Text for `locale`, falling back to [`DEFAULT_LOCALE`].
    pub fn get(&self, locale: &str, key: TextKey) -> Result<&str, PageError> {
        [locale, DEFAULT_LOCALE]
            .into_iter()
            .find_map(|loc| self.texts.get(loc).and_then(|texts| texts.get(&key)))
            .map(String::as_str)
            .ok_or_else(|| PageError::MissingText {
                locale: locale.to_string(),
                key: key.as_str(),
                fallback: DEFAULT_LOCALE,
            })
    }
}

/// Replace successive `%s` markers in `template` with `args`.
///
/// Markers beyond the number of arguments are left untouched.
pub fn fill_markers(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut args = args.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        let Some(arg) = args.next() else { break };
        out.push_str(&rest[..pos]);
        out.push_str(arg);
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        let table = LangTable::builtin();
        assert_eq!(
            table.get("de_DE", TextKey::NoTitle).unwrap(),
            "WARNUNG: Kein Seitentitel definiert"
        );
        assert_eq!(
            table.get("en_US", TextKey::NoTitle).unwrap(),
            "WARNING: No (default) page title defined"
        );
    }

    #[test]
    fn test_fallback_to_default_locale() {
        let table = LangTable::builtin();
        assert_eq!(
            table.get("fr_FR", TextKey::NoTitle).unwrap(),
            table.get(DEFAULT_LOCALE, TextKey::NoTitle).unwrap()
        );
    }

    #[test]
    fn test_partial_locale_falls_back_per_key() {
        let mut table = LangTable::builtin();
        table.insert("fr_FR", TextKey::NoTitle, "ATTENTION");
        assert_eq!(table.get("fr_FR", TextKey::NoTitle).unwrap(), "ATTENTION");
        assert!(
            table
                .get("fr_FR", TextKey::BrowseHappy)
                .unwrap()
                .starts_with("You are using")
        );
    }

    #[test]
    fn test_missing_everywhere_is_error() {
        let table = LangTable::empty();
        let err = table.get("de_DE", TextKey::NoTitle).unwrap_err();
        assert_eq!(
            err,
            PageError::MissingText {
                locale: "de_DE".into(),
                key: "no_title",
                fallback: DEFAULT_LOCALE,
            }
        );
    }

    #[test]
    fn test_text_key_parse() {
        assert_eq!(TextKey::parse("no_title"), Some(TextKey::NoTitle));
        assert_eq!(TextKey::parse("browsehappy"), Some(TextKey::BrowseHappy));
        assert_eq!(TextKey::parse("other"), None);
    }

    #[test]
    fn test_fill_markers() {
        assert_eq!(fill_markers("a %s b %s c", &["1", "2"]), "a 1 b 2 c");
        assert_eq!(fill_markers("%s%s", &["x"]), "x%s");
        assert_eq!(fill_markers("none", &["x"]), "none");
    }
}
