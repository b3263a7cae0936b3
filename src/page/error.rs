//! Page rendering errors.

use thiserror::Error;

/// Errors raised while rendering a page.
///
/// Normal use never produces one: every variant points at a corrupted
/// built-in table or a misconfigured `LangTable`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("no `{key}` text for locale `{locale}` nor for fallback locale `{fallback}`")]
    MissingText {
        locale: String,
        key: &'static str,
        fallback: &'static str,
    },
}
