//! Breadth-first walker
//!
//! The walk proceeds in rounds. Round 0 holds every user-supplied path;
//! each round visits its entries in order and queues the children of
//! directories it descends into for the next round. Nothing discovered in
//! a round is visited in that same round, so all entries at depth k are
//! visited before any entry at depth k+1.

use std::path::PathBuf;

use tracing::{debug, trace};

use crate::entry::{EntryArena, EntryId};
use crate::error::Failure;

use super::config::ListConfig;
use super::policy::decide;
use super::probe::{FsProbe, Probe};

/// Everything a walk produced.
#[derive(Debug)]
pub struct Listing {
    /// Every entry, visible or not, in discovery order.
    pub entries: EntryArena,
    pub failures: Vec<Failure>,
    /// At least one entry ended up visible.
    pub any_visible: bool,
}

impl Listing {
    /// Whether `id` should appear in the output.
    pub fn is_printed(&self, id: EntryId, leaf_only: bool) -> bool {
        let entry = &self.entries[id];
        entry.is_visible() && (!leaf_only || !entry.has_visible_child())
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Walker that expands top-level paths into a full [`Listing`].
pub struct Walker<'a, P = FsProbe> {
    config: &'a ListConfig,
    probe: P,
}

impl<'a> Walker<'a, FsProbe> {
    pub fn new(config: &'a ListConfig) -> Self {
        Self {
            config,
            probe: FsProbe,
        }
    }
}

impl<'a, P: Probe> Walker<'a, P> {
    /// Create a walker that reads the filesystem through `probe`.
    pub fn with_probe(config: &'a ListConfig, probe: P) -> Self {
        Self { config, probe }
    }

    /// Walk command-line paths followed by paths read from list files.
    ///
    /// Both sources count as top-level; a single directory is only hidden
    /// when it is the one and only path across both.
    pub fn walk(&self, args: &[PathBuf], listed: &[PathBuf]) -> Listing {
        let mut entries = EntryArena::new();
        for path in args.iter().chain(listed) {
            entries.push_top_level(path.clone());
        }
        let top_level_count = entries.len();

        let mut failures = Vec::new();
        let mut any_visible = false;
        let mut current: Vec<EntryId> = entries.ids().collect();
        let mut next: Vec<EntryId> = Vec::new();
        let mut round = 0usize;

        while !current.is_empty() {
            debug!(round, entries = current.len(), "walking round");
            for &id in &current {
                if self.visit(&mut entries, id, top_level_count, &mut next, &mut failures) {
                    any_visible = true;
                }
            }
            current.clear();
            std::mem::swap(&mut current, &mut next);
            round += 1;
        }

        debug!(
            rounds = round,
            entries = entries.len(),
            failures = failures.len(),
            "walk finished"
        );

        Listing {
            entries,
            failures,
            any_visible,
        }
    }

    /// Probe one entry, apply the visibility rules and queue its children.
    /// Returns the entry's final visibility.
    fn visit(
        &self,
        entries: &mut EntryArena,
        id: EntryId,
        top_level_count: usize,
        next: &mut Vec<EntryId>,
        failures: &mut Vec<Failure>,
    ) -> bool {
        let stat = match self.probe.probe(entries[id].text()) {
            Ok(stat) => Some(stat),
            Err(source) => {
                failures.push(Failure::Access {
                    path: entries[id].text().to_path_buf(),
                    source,
                });
                None
            }
        };

        let verdict = decide(&entries[id], stat.as_ref(), self.config, top_level_count);
        trace!(path = %entries[id].text().display(), ?verdict, "visited");

        let entry = entries.get_mut(id);
        if let Some(stat) = stat {
            entry.set_stat(stat);
        }
        if !verdict.keep {
            entry.suppress();
        }

        if verdict.descend {
            match self.probe.list_children(entries[id].text()) {
                Ok(names) => {
                    if !names.is_empty() {
                        entries.get_mut(id).mark_listed();
                    }
                    for name in names {
                        next.push(entries.push_child(id, &name));
                    }
                }
                Err(source) => failures.push(Failure::ReadDir {
                    path: entries[id].text().to_path_buf(),
                    source,
                }),
            }
        }

        let visible = entries[id].is_visible();
        if visible {
            entries.propagate_visible(id);
        }
        visible
    }
}
