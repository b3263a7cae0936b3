//! `<meta>` tags keyed by (type, name).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::merge::{Placeholders, merge_with_defaults};
use crate::utils::html::meta_tag;

/// Attribute that carries the key of a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetaType {
    #[serde(rename = "http-equiv")]
    HttpEquiv,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "property")]
    Property,
}

impl MetaType {
    /// Render order.
    pub const ALL: [Self; 3] = [Self::HttpEquiv, Self::Name, Self::Property];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HttpEquiv => "http-equiv",
            Self::Name => "name",
            Self::Property => "property",
        }
    }

    const fn slot(self) -> usize {
        match self {
            Self::HttpEquiv => 0,
            Self::Name => 1,
            Self::Property => 2,
        }
    }

    /// Built-in defaults, lowest precedence.
    const fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::HttpEquiv => &[("X-UA-Compatible", "IE=edge")],
            Self::Name => &[
                ("viewport", "width=device-width, initial-scale=1"),
                ("msapplication-config", "none"),
                ("robots", "index,follow"),
            ],
            Self::Property => &[],
        }
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a meta type outside `name`, `property` and `http-equiv`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown meta type `{0}`, expected `name`, `property` or `http-equiv`")]
pub struct UnknownMetaType(pub String);

impl FromStr for MetaType {
    type Err = UnknownMetaType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "http-equiv" => Ok(Self::HttpEquiv),
            "name" => Ok(Self::Name),
            "property" => Ok(Self::Property),
            other => Err(UnknownMetaType(other.to_string())),
        }
    }
}

/// Caller-provided meta entries, insertion-ordered per type.
#[derive(Debug, Clone, Default)]
pub struct MetaTags {
    slots: [Vec<(String, String)>; 3],
}

impl MetaTags {
    /// Set `key` to `value`, or remove it when `value` is `None`.
    ///
    /// Overwriting an existing key keeps its original position.
    pub fn set(&mut self, kind: MetaType, key: String, value: Option<String>) {
        let entries = &mut self.slots[kind.slot()];
        let existing = entries.iter().position(|(k, _)| *k == key);
        match (existing, value) {
            (Some(i), Some(value)) => entries[i].1 = value,
            (Some(i), None) => {
                entries.remove(i);
            }
            (None, Some(value)) => entries.push((key, value)),
            (None, None) => {}
        }
    }

    pub fn get(&self, kind: MetaType, key: &str) -> Option<&str> {
        self.slots[kind.slot()]
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Merge caller entries with the defaults and render one tag per key.
    pub fn render(&self, placeholders: &Placeholders<'_>) -> Vec<String> {
        MetaType::ALL
            .into_iter()
            .flat_map(|kind| {
                merge_with_defaults(
                    &self.slots[kind.slot()],
                    kind.defaults(),
                    |(k, _)| k.as_str(),
                    |(_, v)| v.as_str(),
                    |template| placeholders.substitute(template),
                )
                .into_iter()
                .map(move |(key, value)| meta_tag(kind.as_str(), key, &value))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tags: &MetaTags) -> Vec<String> {
        tags.render(&Placeholders::default())
    }

    #[test]
    fn test_parse_type() {
        assert_eq!("name".parse::<MetaType>(), Ok(MetaType::Name));
        assert_eq!("property".parse::<MetaType>(), Ok(MetaType::Property));
        assert_eq!("http-equiv".parse::<MetaType>(), Ok(MetaType::HttpEquiv));
        assert!("itemprop".parse::<MetaType>().is_err());
    }

    #[test]
    fn test_defaults_only() {
        let html = render(&MetaTags::default());
        assert_eq!(
            html,
            [
                "<meta http-equiv=\"X-UA-Compatible\" content=\"IE=edge\" />",
                "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />",
                "<meta name=\"msapplication-config\" content=\"none\" />",
                "<meta name=\"robots\" content=\"index,follow\" />",
            ]
        );
    }

    #[test]
    fn test_override_default() {
        let mut tags = MetaTags::default();
        tags.set(MetaType::Name, "robots".into(), Some("noindex".into()));

        let html = render(&tags);
        let robots: Vec<_> = html.iter().filter(|t| t.contains("\"robots\"")).collect();
        assert_eq!(robots, ["<meta name=\"robots\" content=\"noindex\" />"]);
    }

    #[test]
    fn test_remove_and_overwrite() {
        let mut tags = MetaTags::default();
        tags.set(MetaType::Name, "author".into(), Some("A".into()));
        tags.set(MetaType::Name, "keywords".into(), Some("k".into()));
        tags.set(MetaType::Name, "author".into(), Some("B".into()));
        assert_eq!(tags.get(MetaType::Name, "author"), Some("B"));

        tags.set(MetaType::Name, "author".into(), None);
        assert_eq!(tags.get(MetaType::Name, "author"), None);

        // removing an absent key is a no-op
        tags.set(MetaType::Name, "missing".into(), None);
        assert_eq!(tags.get(MetaType::Name, "keywords"), Some("k"));
    }

    #[test]
    fn test_same_key_different_types() {
        let mut tags = MetaTags::default();
        tags.set(MetaType::Name, "title".into(), Some("n".into()));
        tags.set(MetaType::Property, "title".into(), Some("p".into()));

        let html = render(&tags);
        assert!(html.contains(&"<meta name=\"title\" content=\"n\" />".to_string()));
        assert!(html.contains(&"<meta property=\"title\" content=\"p\" />".to_string()));
    }

    #[test]
    fn test_type_order() {
        let mut tags = MetaTags::default();
        tags.set(MetaType::Property, "fb:app_id".into(), Some("1".into()));
        tags.set(MetaType::Name, "author".into(), Some("Jane".into()));

        let html = render(&tags);
        let pos = |needle: &str| html.iter().position(|t| t.contains(needle)).unwrap();
        assert!(pos("X-UA-Compatible") < pos("author"));
        assert!(pos("author") < pos("viewport"));
        assert!(pos("robots") < pos("fb:app_id"));
    }
}
