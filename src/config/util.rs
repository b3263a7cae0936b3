//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Resolve a page path against the site URL.
///
/// Uses `url` crate joining rules, so a relative `path` resolves against
/// the directory of `base` and an absolute one replaces its path.
///
/// Returns `None` if `base` is not a valid URL.
///
/// # Examples
/// ```ignore
/// page_url("https://example.com", "/hello")          -> Some("https://example.com/hello")
/// page_url("https://example.com/blog/", "post")      -> Some("https://example.com/blog/post")
/// page_url("invalid", "/hello")                      -> None
/// ```
pub fn page_url(base: &str, path: &str) -> Option<String> {
    let base = url::Url::parse(base).ok()?;
    base.join(path).ok().map(String::from)
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until finding `config_name`.
/// Returns the path to the config file if found.
///
/// # Example
/// ```text
/// /home/user/site/templates/posts/  ← start
/// /home/user/site/pagehead.toml     ← found!
/// ```
pub fn find_config_file(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url("https://example.com", "/hello"),
            Some("https://example.com/hello".to_string())
        );
        assert_eq!(
            page_url("https://example.com/blog/", "post"),
            Some("https://example.com/blog/post".to_string())
        );
        assert_eq!(
            page_url("https://example.com/blog/", "/about"),
            Some("https://example.com/about".to_string())
        );
        assert_eq!(page_url("invalid-url", "/hello"), None);
    }

    #[test]
    fn test_find_config_file_upward() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("pagehead.toml"), "").unwrap();

        let found = find_config_file(&nested, Path::new("pagehead.toml")).unwrap();
        assert_eq!(found, dir.path().join("pagehead.toml"));
    }

    #[test]
    fn test_find_config_file_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        assert_eq!(find_config_file(dir.path(), &path), None);

        fs::write(&path, "").unwrap();
        assert_eq!(find_config_file(Path::new("/"), &path), Some(path));
    }
}
