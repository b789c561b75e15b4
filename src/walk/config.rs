//! Configuration types for the walker

use std::time::SystemTime;

use glob::Pattern;

use crate::sort::SortKey;

/// Configuration for a listing run.
///
/// Built once before traversal and only ever read afterwards.
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Show every dotfile, including `.` and `..`.
    pub show_all: bool,
    /// Show dotfiles except `.` and `..`.
    pub show_almost_all: bool,
    /// List top-level directories themselves instead of their contents.
    pub opaque_dirs: bool,
    pub recurse: bool,
    /// Only print entries without visible children.
    pub leaf_only: bool,
    pub sort: SortKey,
    pub reverse: bool,
    /// Basename patterns that hide discovered entries.
    pub ignore_patterns: Vec<Pattern>,
    /// Only include files modified after this time
    pub newer_than: Option<SystemTime>,
    /// Only include files modified before this time
    pub older_than: Option<SystemTime>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            show_all: false,
            show_almost_all: false,
            opaque_dirs: false,
            recurse: false,
            leaf_only: false,
            sort: SortKey::Name,
            reverse: false,
            ignore_patterns: Vec::new(),
            newer_than: None,
            older_than: None,
        }
    }
}
