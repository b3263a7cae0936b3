//! Ordered merge of caller entries with built-in defaults.
//!
//! Meta tags and Open Graph tags share the same precedence rule: a caller
//! value wins unless it is blank, in which case the default for that key
//! applies. Defaults for keys the caller never touched are appended after
//! the caller's entries. Defaults may contain `%PLACEHOLDER%` markers that
//! are resolved at render time.

/// Values substituted into default templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct Placeholders<'a> {
    pub title: &'a str,
    pub locale: &'a str,
    pub current_url: &'a str,
    pub description: &'a str,
}

impl Placeholders<'_> {
    /// Literal find-replace of every known placeholder in `template`.
    pub fn substitute(&self, template: &str) -> String {
        if !template.contains('%') {
            return template.to_string();
        }
        let tokens = [
            ("%TITLE%", self.title),
            ("%LOCALE%", self.locale),
            ("%CURRENTURL%", self.current_url),
            ("%DESCRIPTION%", self.description),
        ];

        // single pass: substituted values are never scanned again
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find('%') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match tokens.iter().find(|(token, _)| tail.starts_with(token)) {
                Some((token, value)) => {
                    out.push_str(value);
                    rest = &tail[token.len()..];
                }
                None => {
                    out.push('%');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

#[inline]
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Merge `entries` with `defaults`.
///
/// - caller entries keep their order; blank values fall back to the default
///   for the same key, or are dropped when there is none
/// - defaults for absent keys follow, in table order
/// - `resolve` is applied to default values only
/// - anything still blank after resolution is dropped
pub fn merge_with_defaults<'a, T>(
    entries: &'a [T],
    defaults: &[(&'a str, &'a str)],
    key_of: impl Fn(&'a T) -> &'a str,
    value_of: impl Fn(&'a T) -> &'a str,
    resolve: impl Fn(&str) -> String,
) -> Vec<(&'a str, String)> {
    let default_for = |key: &str| {
        defaults
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, template)| *template)
    };

    let mut merged = Vec::with_capacity(entries.len() + defaults.len());

    for entry in entries {
        let key = key_of(entry);
        let value = value_of(entry);
        let value = if is_blank(value) {
            match default_for(key) {
                Some(template) => resolve(template),
                None => continue,
            }
        } else {
            value.to_string()
        };
        if !is_blank(&value) {
            merged.push((key, value));
        }
    }

    for &(key, template) in defaults {
        if entries.iter().any(|entry| key_of(entry) == key) {
            continue;
        }
        let value = resolve(template);
        if !is_blank(&value) {
            merged.push((key, value));
        }
    }

    merged
}
