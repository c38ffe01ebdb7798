use std::path::Path;
use std::time::Duration;

use crate::entry::Entry;

/// The output of a completed traversal.
#[derive(Debug)]
pub struct Traversal {
    /// Entries accepted by the inclusion predicate, in traversal order:
    /// a directory's own files and subdirectories first, then whatever its
    /// subdirectories yield, siblings in listing order.
    pub entries: Vec<Entry>,

    /// Walk statistics.
    pub stats: WalkStats,
}

impl Traversal {
    /// Paths of the returned entries, in order.
    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.entries.iter().map(Entry::path)
    }

    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Counters for a completed traversal.
#[derive(Debug, Clone, Default)]
pub struct WalkStats {
    /// Files discovered, before inclusion filtering.
    pub files: usize,

    /// Directories discovered, entered or not, before inclusion filtering.
    pub dirs: usize,

    /// Directories stepped into, root included.
    pub visited: usize,

    /// Files deleted. Equals `visited` on success.
    pub deleted: usize,

    /// Entries that passed the inclusion predicate.
    pub matched: usize,

    /// Wall-clock time from start to completion.
    pub duration: Duration,
}
