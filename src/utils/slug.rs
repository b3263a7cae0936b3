//! Slug generation for CSS class names.

use deunicode::deunicode;

/// Slugify `text` for use as a class name.
///
/// Unicode is transliterated to ASCII, the result is lowercased, every run
/// of non-alphanumeric characters becomes a single `-`, and leading and
/// trailing dashes are trimmed.
///
/// ```
/// use pagehead::utils::slug::slugify;
///
/// assert_eq!(slugify("Foo.Bar"), "foo-bar");
/// assert_eq!(slugify("  Über Uns!  "), "uber-uns");
/// ```
pub fn slugify(text: &str) -> String {
    let ascii = deunicode(text);
    let mut slug = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
