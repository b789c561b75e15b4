//! Entry data model
//!
//! Every path the walker considers becomes an [`Entry`] stored in an
//! [`EntryArena`]. Parent links are arena handles, so the arena is the only
//! owner and a child never keeps its directory alive on its own.

use std::ops::Index;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Handle to an entry inside an [`EntryArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(usize);

/// What kind of filesystem object an entry resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Devices, sockets, fifos.
    Other,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::File => "file",
            EntryKind::Dir => "dir",
            EntryKind::Other => "other",
        }
    }
}

/// Metadata captured by the probe, once per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatInfo {
    pub kind: EntryKind,
    pub size: u64,
    pub accessed: Option<SystemTime>,
    pub changed: Option<SystemTime>,
    pub modified: Option<SystemTime>,
}

impl StatInfo {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }
}

/// Whether anything below a directory ended up visible.
///
/// `Unknown` until a child reports in; once `Yes` it stays `Yes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NonLeaf {
    #[default]
    Unknown,
    No,
    Yes,
}

/// A single path under consideration.
#[derive(Debug, Clone)]
pub struct Entry {
    text: PathBuf,
    top_level: bool,
    visible: bool,
    stat: Option<StatInfo>,
    parent: Option<EntryId>,
    non_leaf: NonLeaf,
}

impl Entry {
    fn new(text: PathBuf, top_level: bool, parent: Option<EntryId>) -> Self {
        Self {
            text,
            top_level,
            visible: true,
            stat: None,
            parent,
            non_leaf: NonLeaf::Unknown,
        }
    }

    pub fn text(&self) -> &Path {
        &self.text
    }

    pub fn is_top_level(&self) -> bool {
        self.top_level
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn stat(&self) -> Option<&StatInfo> {
        self.stat.as_ref()
    }

    pub fn parent(&self) -> Option<EntryId> {
        self.parent
    }

    pub fn non_leaf(&self) -> NonLeaf {
        self.non_leaf
    }

    pub fn has_visible_child(&self) -> bool {
        self.non_leaf == NonLeaf::Yes
    }

    pub fn is_dir(&self) -> bool {
        self.stat.as_ref().is_some_and(StatInfo::is_dir)
    }

    /// Last path segment as raw bytes, ignoring trailing separators.
    ///
    /// `Path::file_name` normalizes `.` and `..` away, which is exactly what
    /// the dotfile rules must not do.
    pub fn basename(&self) -> &[u8] {
        basename(self.text.as_os_str().as_encoded_bytes())
    }

    /// Permanently hide this entry.
    pub fn suppress(&mut self) {
        self.visible = false;
    }

    /// Record probe results. Only the first call has any effect.
    pub fn set_stat(&mut self, stat: StatInfo) {
        if self.stat.is_none() {
            self.stat = Some(stat);
        }
    }

    /// Note that this directory was read and produced children.
    pub fn mark_listed(&mut self) {
        if self.non_leaf == NonLeaf::Unknown {
            self.non_leaf = NonLeaf::No;
        }
    }

    fn mark_visible_child(&mut self) {
        self.non_leaf = NonLeaf::Yes;
    }
}

fn is_separator(byte: u8) -> bool {
    byte == b'/' || (cfg!(windows) && byte == b'\\')
}

/// Last segment of a raw path, ignoring trailing separators.
pub fn basename(bytes: &[u8]) -> &[u8] {
    let mut end = bytes.len();
    while end > 1 && is_separator(bytes[end - 1]) {
        end -= 1;
    }
    let trimmed = &bytes[..end];
    match trimmed.iter().rposition(|&b| is_separator(b)) {
        Some(pos) if pos + 1 < trimmed.len() => &trimmed[pos + 1..],
        _ => trimmed,
    }
}

/// Owning collection of every entry created during a run, in creation order.
#[derive(Debug, Default)]
pub struct EntryArena {
    entries: Vec<Entry>,
}

impl EntryArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Add a user-supplied path.
    pub fn push_top_level(&mut self, text: impl Into<PathBuf>) -> EntryId {
        self.push(Entry::new(text.into(), true, None))
    }

    /// Add a child discovered while reading `parent`.
    pub fn push_child(&mut self, parent: EntryId, name: &std::ffi::OsStr) -> EntryId {
        let text = self.entries[parent.0].text.join(name);
        self.push(Entry::new(text, false, Some(parent)))
    }

    fn push(&mut self, entry: Entry) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(entry);
        id
    }

    pub fn get_mut(&mut self, id: EntryId) -> &mut Entry {
        &mut self.entries[id.0]
    }

    /// Tell `id`'s parent (if any) that one of its children is visible.
    pub fn propagate_visible(&mut self, id: EntryId) {
        if let Some(parent) = self.entries[id.0].parent {
            self.entries[parent.0].mark_visible_child();
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = EntryId> + '_ {
        (0..self.entries.len()).map(EntryId)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }
}

impl Index<EntryId> for EntryArena {
    type Output = Entry;

    fn index(&self, id: EntryId) -> &Entry {
        &self.entries[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn file_stat(size: u64) -> StatInfo {
        StatInfo {
            kind: EntryKind::File,
            size,
            accessed: None,
            changed: None,
            modified: None,
        }
    }

    #[test]
    fn test_basename_keeps_dot_segments() {
        assert_eq!(basename(b"docs/."), b".");
        assert_eq!(basename(b"docs/.."), b"..");
        assert_eq!(basename(b"docs/.hidden"), b".hidden");
        assert_eq!(basename(b"docs/a.txt"), b"a.txt");
        assert_eq!(basename(b"docs/"), b"docs");
        assert_eq!(basename(b"plain"), b"plain");
        assert_eq!(basename(b"/"), b"/");
    }

    #[test]
    fn test_child_text_joins_parent() {
        let mut arena = EntryArena::new();
        let root = arena.push_top_level("docs");
        let child = arena.push_child(root, OsStr::new("a.txt"));

        assert_eq!(arena[child].text(), Path::new("docs/a.txt"));
        assert_eq!(arena[child].parent(), Some(root));
        assert!(!arena[child].is_top_level());
        assert!(arena[root].is_top_level());
    }

    #[test]
    fn test_suppression_is_permanent() {
        let mut arena = EntryArena::new();
        let id = arena.push_top_level("x");
        assert!(arena[id].is_visible());
        arena.get_mut(id).suppress();
        arena.get_mut(id).set_stat(file_stat(1));
        assert!(!arena[id].is_visible());
    }

    #[test]
    fn test_stat_set_once() {
        let mut arena = EntryArena::new();
        let id = arena.push_top_level("x");
        arena.get_mut(id).set_stat(file_stat(1));
        arena.get_mut(id).set_stat(file_stat(2));
        assert_eq!(arena[id].stat().map(|s| s.size), Some(1));
    }

    #[test]
    fn test_propagation_marks_only_parent() {
        let mut arena = EntryArena::new();
        let root = arena.push_top_level("r");
        let dir = arena.push_child(root, OsStr::new("d"));
        let leaf = arena.push_child(dir, OsStr::new("f"));

        assert_eq!(arena[dir].non_leaf(), NonLeaf::Unknown);
        arena.propagate_visible(leaf);
        arena.propagate_visible(leaf);

        assert!(arena[dir].has_visible_child());
        assert_eq!(arena[root].non_leaf(), NonLeaf::Unknown);
        assert_eq!(arena[leaf].non_leaf(), NonLeaf::Unknown);
    }

    #[test]
    fn test_listed_never_downgrades_yes() {
        let mut arena = EntryArena::new();
        let dir = arena.push_top_level("d");
        let child = arena.push_child(dir, OsStr::new("f"));
        arena.get_mut(dir).mark_listed();
        assert_eq!(arena[dir].non_leaf(), NonLeaf::No);
        arena.propagate_visible(child);
        arena.get_mut(dir).mark_listed();
        assert_eq!(arena[dir].non_leaf(), NonLeaf::Yes);
    }

    #[test]
    fn test_top_level_has_no_parent_to_mark() {
        let mut arena = EntryArena::new();
        let id = arena.push_top_level("solo");
        arena.propagate_visible(id);
        assert_eq!(arena[id].non_leaf(), NonLeaf::Unknown);
    }
}
