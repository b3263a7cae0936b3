//! pagehead - page metadata assembler.
//!
//! Collect everything a page wants in `<head>` and right before `</body>`
//! (title, meta tags, Open Graph, stylesheets, scripts, icons, social SDKs),
//! then render both fragments for a template.
//!
//! - [`page`]: the request-scoped [`PageAssembler`](page::PageAssembler)
//! - [`config`]: site-wide defaults from `pagehead.toml`
//! - [`cli`]: the `pagehead` command line front end

pub mod logger;

pub mod cli;
pub mod config;
pub mod page;
pub mod utils;
