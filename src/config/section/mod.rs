//! Configuration section definitions.
//!
//! Each module corresponds to a section in `pagehead.toml`:
//!
//! | Module   | TOML Section | Purpose                                |
//! |----------|--------------|----------------------------------------|
//! | `lang`   | `[lang]`     | Extra translations                     |
//! | `site`   | `[site]`     | Document defaults, header, meta, og    |
//! | `social` | `[social]`   | Social SDK embeds                      |

mod lang;
pub mod site;
mod social;

pub use lang::LangConfig;
pub use site::{HeaderConfig, ScriptEntry, SiteInfoConfig, SiteSectionConfig, StyleEntry};
pub use social::SocialConfig;
