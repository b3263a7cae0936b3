//! `[site.header]` configuration: icons, stylesheets and scripts.

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::page::Position;

const STYLES: FieldPath = FieldPath::new("site.header.styles");
const SCRIPTS: FieldPath = FieldPath::new("site.header.scripts");

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderConfig {
    /// Favicon URL.
    pub favicon: Option<String>,
    /// Apple touch icon URL.
    pub apple_touch_icon: Option<String>,
    /// Stylesheet entries.
    pub styles: Vec<StyleEntry>,
    /// Script entries.
    pub scripts: Vec<ScriptEntry>,
}

impl HeaderConfig {
    /// Report empty paths and duplicate entries.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_paths(self.styles.iter().map(StyleEntry::path), STYLES, diag);
        check_paths(self.scripts.iter().map(ScriptEntry::path), SCRIPTS, diag);
    }
}

fn check_paths<'a>(
    paths: impl Iterator<Item = &'a str>,
    field: FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    let mut seen = rustc_hash::FxHashSet::default();
    for path in paths {
        if path.trim().is_empty() {
            diag.error(field, "path must not be empty");
        } else if !seen.insert(path) {
            diag.warn(field, format!("'{path}' is listed more than once"));
        }
    }
}

// ============================================================================
// Style Entry
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleEntry {
    /// Simple path string.
    Simple(String),
    /// Path with a load-order index.
    WithOptions {
        path: String,
        #[serde(default)]
        index: i32,
    },
}

impl StyleEntry {
    pub fn path(&self) -> &str {
        match self {
            Self::Simple(path) | Self::WithOptions { path, .. } => path,
        }
    }

    pub const fn index(&self) -> i32 {
        match self {
            Self::Simple(_) => 0,
            Self::WithOptions { index, .. } => *index,
        }
    }
}

// ============================================================================
// Script Entry
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScriptEntry {
    /// Simple path string, loaded in the footer.
    Simple(String),
    /// Path with position and load-order index.
    WithOptions {
        path: String,
        #[serde(default)]
        position: Position,
        #[serde(default)]
        index: i32,
    },
}

impl ScriptEntry {
    pub fn path(&self) -> &str {
        match self {
            Self::Simple(path) | Self::WithOptions { path, .. } => path,
        }
    }

    pub const fn position(&self) -> Position {
        match self {
            Self::Simple(_) => Position::Footer,
            Self::WithOptions { position, .. } => *position,
        }
    }

    pub const fn index(&self) -> i32 {
        match self {
            Self::Simple(_) => 0,
            Self::WithOptions { index, .. } => *index,
        }
    }
}
