//! MIME type detection for icon links.

use std::path::Path;

/// Common MIME type constants.
pub mod types {
    pub const PNG: &str = "image/png";
    pub const JPEG: &str = "image/jpeg";
    pub const GIF: &str = "image/gif";
    pub const WEBP: &str = "image/webp";
    pub const AVIF: &str = "image/avif";
    pub const SVG: &str = "image/svg+xml";
    pub const ICO: &str = "image/x-icon";
}

/// Get MIME type for favicon/icon files.
///
/// Defaults to `image/x-icon` for unknown or missing extensions, which is
/// what browsers assume for a `shortcut icon` anyway. Query strings and
/// fragments on the href are ignored.
pub fn for_icon(href: &str) -> &'static str {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    match Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
    {
        Some(ext) => match ext.as_str() {
            "png" => types::PNG,
            "svg" => types::SVG,
            "avif" => types::AVIF,
            "webp" => types::WEBP,
            "gif" => types::GIF,
            "jpg" | "jpeg" => types::JPEG,
            _ => types::ICO,
        },
        None => types::ICO,
    }
}
