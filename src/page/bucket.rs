//! Ordered resource buckets.
//!
//! Stylesheets, script files and inline script code all share one shape:
//! entries carry an open-ended load-order index, indices render ascending,
//! and entries with the same index keep their insertion order.

use std::collections::BTreeMap;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Output position of a script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    /// Inside `<head>`.
    Head,
    /// Right before `</body>` (default).
    #[default]
    Footer,
}

/// One value per output position.
#[derive(Debug, Clone, Default)]
pub struct ByPosition<T> {
    head: T,
    footer: T,
}

impl<T> Index<Position> for ByPosition<T> {
    type Output = T;

    fn index(&self, position: Position) -> &T {
        match position {
            Position::Head => &self.head,
            Position::Footer => &self.footer,
        }
    }
}

impl<T> IndexMut<Position> for ByPosition<T> {
    fn index_mut(&mut self, position: Position) -> &mut T {
        match position {
            Position::Head => &mut self.head,
            Position::Footer => &mut self.footer,
        }
    }
}

/// Entries grouped by load-order index.
///
/// Pushing to an index that has no group yet creates it.
#[derive(Debug, Clone)]
pub struct Bucket<T> {
    groups: BTreeMap<i32, Vec<T>>,
}

impl<T> Default for Bucket<T> {
    fn default() -> Self {
        Self {
            groups: BTreeMap::new(),
        }
    }
}

impl<T> Bucket<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, index: i32, item: T) {
        self.groups.entry(index).or_default().push(item);
    }

    /// Entries in render order: ascending index, then insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.groups.values().flatten()
    }
}

impl Bucket<String> {
    /// Paths in render order, later duplicates dropped.
    pub fn unique(&self) -> Vec<&str> {
        let mut seen = rustc_hash::FxHashSet::default();
        self.iter()
            .map(String::as_str)
            .filter(|path| seen.insert(*path))
            .collect()
    }
}

/// Inline script code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsInline {
    pub code: String,
    /// Run the code from the shared DOM-ready handler.
    pub wrap_ready: bool,
}

/// Placement options for inline script code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsOptions {
    pub index: i32,
    pub wrap_ready: bool,
}

impl Default for JsOptions {
    fn default() -> Self {
        Self {
            index: 0,
            wrap_ready: true,
        }
    }
}

impl JsOptions {
    pub fn index(mut self, index: i32) -> Self {
        self.index = index;
        self
    }

    pub fn wrap_ready(mut self, wrap_ready: bool) -> Self {
        self.wrap_ready = wrap_ready;
        self
    }
}
