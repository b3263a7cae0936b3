//! Render command implementation.
//!
//! Builds a request-scoped assembler from the site config, replays a page
//! description file on it and prints the requested fragments.

use std::io::Write;

use anyhow::{Context, Result};

use super::args::{Format, Fragment, RenderArgs};
use crate::config::{PageFile, SiteConfig, page_url};
use crate::debug;
use crate::page::StaticUrl;

/// Execute render command
pub fn run_render(args: &RenderArgs, config: &SiteConfig) -> Result<()> {
    let output = render_page(args, config)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Render `args.page` to the text printed by `run_render`.
pub fn render_page(args: &RenderArgs, config: &SiteConfig) -> Result<String> {
    let page_file = PageFile::from_path(&args.page)?;
    let url = current_url(args, config);
    debug!("render"; "{} as {}", args.page.display(), url);

    let mut page = config.assembler(StaticUrl::new(url));
    page_file.apply(&mut page);

    let output = match args.format {
        Format::Json => {
            let rendered = page.render()?;
            let mut json = serde_json::to_string_pretty(&rendered)
                .context("failed to serialize rendered page")?;
            json.push('\n');
            json
        }
        Format::Html => match args.position {
            Fragment::Head => page.render_head()?,
            Fragment::Footer => page.render_footer(),
            Fragment::Both => format!("{}{}", page.render_head()?, page.render_footer()),
        },
    };
    Ok(output)
}

/// `--url`, else the site URL joined with `--path`, else the bare path.
fn current_url(args: &RenderArgs, config: &SiteConfig) -> String {
    if let Some(url) = &args.url {
        return url.clone();
    }
    config
        .site
        .info
        .url
        .as_deref()
        .and_then(|base| page_url(base, &args.path))
        .unwrap_or_else(|| args.path.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::fs;
    use std::path::Path;

    fn args(page: &Path) -> RenderArgs {
        RenderArgs {
            page: page.to_path_buf(),
            url: None,
            path: "/".into(),
            format: Format::Html,
            position: Fragment::Both,
        }
    }

    #[test]
    fn test_current_url_resolution() {
        let config = test_parse_config("[site.info]\nurl = \"https://example.com/blog/\"");
        let mut a = args(Path::new("p.toml"));
        a.path = "post".into();
        assert_eq!(current_url(&a, &config), "https://example.com/blog/post");

        a.url = Some("https://other.org/".into());
        assert_eq!(current_url(&a, &config), "https://other.org/");

        let bare = SiteConfig::default();
        let a = args(Path::new("p.toml"));
        assert_eq!(current_url(&a, &bare), "/");
    }

    #[test]
    fn test_render_page_html() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.toml");
        fs::write(
            &page,
            r#"
title = "Hello"
scripts = ["/js/app.js"]
inline_js = [{ code = "init();" }]
"#,
        )
        .unwrap();

        let config = test_parse_config("[site.info]\nappend_title = \" | Site\"\nurl = \"https://example.com\"");
        let mut a = args(&page);
        a.path = "/hello".into();

        let out = render_page(&a, &config).unwrap();
        assert!(out.starts_with("<meta charset=\"utf-8\">\n<title>Hello | Site</title>\n"));
        assert!(out.contains("<meta property=\"og:url\" content=\"https://example.com/hello\" />"));
        assert!(out.ends_with(
            "<script src=\"/js/app.js\"></script>\n<script>document.addEventListener('DOMContentLoaded',function(){init();});</script>\n"
        ));

        a.position = Fragment::Footer;
        let footer = render_page(&a, &config).unwrap();
        assert!(!footer.contains("<title>"));
        assert!(footer.contains("/js/app.js"));
    }

    #[test]
    fn test_render_page_json() {
        let dir = tempfile::tempdir().unwrap();
        let page = dir.path().join("page.toml");
        fs::write(
            &page,
            "title = \"Hi\"\nbody_classes = [\"Blog Post\"]\nbreadcrumbs = [{ label = \"Home\", url = \"/\" }]",
        )
        .unwrap();

        let mut a = args(&page);
        a.format = Format::Json;
        let out = render_page(&a, &SiteConfig::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["body_class"], "has-blog-post");
        assert_eq!(value["title_html"], "<h1>Hi</h1>");
        assert_eq!(value["breadcrumbs"][0]["label"], "Home");
        assert!(value["head"].as_str().unwrap().contains("<title>Hi</title>"));
    }

    #[test]
    fn test_render_page_missing_file() {
        let err = render_page(&args(Path::new("/nonexistent/page.toml")), &SiteConfig::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("failed to read page file"));
    }
}
