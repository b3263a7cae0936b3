//! Check command implementation.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;

/// Report a summary of an already validated config.
pub fn run_check(config: &SiteConfig) -> Result<()> {
    match &config.config_path {
        Some(path) => log!("config"; "{} is valid", path.display()),
        None => log!("config"; "no config file found, using defaults"),
    }

    let header = &config.site.header;
    log!(
        "config";
        "{} stylesheet(s), {} script(s), {} meta, {} og",
        header.styles.len(),
        header.scripts.len(),
        config.site.meta.len(),
        config.site.og.len()
    );
    Ok(())
}
