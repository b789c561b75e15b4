//! Visibility rules
//!
//! [`decide`] is a pure function: it looks at one entry, its probe result
//! and the configuration, and says whether the entry stays visible and
//! whether the walker should read its contents. Applying the verdict is the
//! engine's job.

use crate::entry::{Entry, StatInfo};

use super::config::ListConfig;
use super::filter::{is_ignored, passes_time_filter};

/// Outcome of the visibility rules for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub keep: bool,
    pub descend: bool,
}

impl Verdict {
    const HIDDEN: Verdict = Verdict {
        keep: false,
        descend: false,
    };
}

/// How a basename relates to dotfiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DotName {
    dot: bool,
    self_ref: bool,
    parent_ref: bool,
}

impl DotName {
    fn of(name: &[u8]) -> Self {
        Self {
            dot: name.first() == Some(&b'.'),
            self_ref: name == b".",
            parent_ref: name == b"..",
        }
    }

    fn is_pseudo(self) -> bool {
        self.self_ref || self.parent_ref
    }
}

/// Decide visibility and descent for `entry`.
///
/// `stat` is `None` when the probe failed; such entries are always hidden.
/// `top_level_count` is the number of user-supplied paths from every source.
pub fn decide(
    entry: &Entry,
    stat: Option<&StatInfo>,
    config: &ListConfig,
    top_level_count: usize,
) -> Verdict {
    let Some(stat) = stat else {
        return Verdict::HIDDEN;
    };

    if entry.is_top_level() {
        if !stat.is_dir() {
            return Verdict {
                keep: true,
                descend: false,
            };
        }
        // A lone directory argument lists its contents, not itself.
        return Verdict {
            keep: top_level_count != 1 || config.opaque_dirs,
            descend: !config.opaque_dirs,
        };
    }

    let name = entry.basename();
    let dots = DotName::of(name);
    let wanted = is_wanted(dots, name, stat, config);

    if stat.is_dir() {
        Verdict {
            keep: wanted,
            descend: wanted && config.recurse && !dots.is_pseudo(),
        }
    } else {
        Verdict {
            keep: wanted,
            descend: false,
        }
    }
}

fn is_wanted(dots: DotName, name: &[u8], stat: &StatInfo, config: &ListConfig) -> bool {
    let dot_ok = !dots.dot || config.show_all || (config.show_almost_all && !dots.is_pseudo());
    if !dot_ok {
        return false;
    }
    if is_ignored(name, &config.ignore_patterns) {
        return false;
    }
    stat.is_dir() || passes_time_filter(stat.modified, config)
}
