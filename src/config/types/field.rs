//! Config field paths used in diagnostics.

/// Dotted path of a config field, e.g. `site.info.url`.
///
/// # Example
///
/// ```ignore
/// const URL: FieldPath = FieldPath::new("site.info.url");
/// diag.error(URL, "invalid URL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
