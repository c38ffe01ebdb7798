//! The traversal engine.
//!
//! Two phases: walk the whole tree accumulating every discovered entry
//! unfiltered, then apply the inclusion predicate once over the full list.
//!
//! The walk is depth-first over an explicit stack of frames rather
//! than native recursion, so tree depth is bounded by memory instead of the
//! call stack. Visit order is the same as the recursive formulation:
//!
//! 1. trace `Step into dir: <path>`
//! 2. list files, append all
//! 3. list subdirectories, append all
//! 4. visit each one the descent predicate accepts, in listing order
//! 5. once every child is done, delete the first file listed in step 2
//!
//! Step 5 runs even if that file is filtered out of the result, and fails
//! with [`WalkError::NothingToDelete`] when the directory had no files.

use std::path::Path;
use std::time::Instant;

use crate::entry::{Directory, Entry, File};
use crate::error::WalkError;
use crate::results::{Traversal, WalkStats};
use crate::traits::{Descend, DiagnosticSink, FileSystem, Matcher};

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// A directory whose visit has started but not finished.
struct Frame {
    dir: Directory,
    /// First immediate file, deleted when the frame is popped.
    first_file: Option<File>,
    /// Accepted subdirectories not yet visited.
    pending: std::vec::IntoIter<Directory>,
}

// ---------------------------------------------------------------------------
// run()
// ---------------------------------------------------------------------------

/// Walk the tree under `root` and return the entries `include` accepts.
///
/// Only directories accepted by `descend` are entered. The root itself is
/// never part of the result.
///
/// # Errors
///
/// The first resolve, list or delete failure aborts the walk and is returned
/// as-is; no partial result is produced. Deletions already performed in
/// earlier parts of the tree are **not** rolled back.
pub fn run<F, S, M, D>(
    fs: &F,
    sink: &S,
    root: &Path,
    include: &M,
    descend: &D,
) -> Result<Traversal, WalkError>
where
    F: FileSystem + ?Sized,
    S: DiagnosticSink + ?Sized,
    M: Matcher + ?Sized,
    D: Descend + ?Sized,
{
    let start = Instant::now();
    let mut stats = WalkStats::default();

    // Phase 1: accumulate
    let found = accumulate(fs, sink, root, descend, &mut stats)?;

    // Phase 2: filter once, globally
    let entries: Vec<Entry> = found.into_iter().filter(|e| include.is_match(e)).collect();

    stats.matched = entries.len();
    stats.duration = start.elapsed();

    Ok(Traversal { entries, stats })
}

fn accumulate<F, S, D>(
    fs: &F,
    sink: &S,
    root: &Path,
    descend: &D,
    stats: &mut WalkStats,
) -> Result<Vec<Entry>, WalkError>
where
    F: FileSystem + ?Sized,
    S: DiagnosticSink + ?Sized,
    D: Descend + ?Sized,
{
    let mut found = Vec::new();
    let mut stack = Vec::new();

    let root = fs.resolve_directory(root)?;
    stack.push(enter(fs, sink, root, descend, &mut found, stats)?);

    while let Some(top) = stack.last_mut() {
        if let Some(next) = top.pending.next() {
            // Re-resolve from the path; the listing snapshot may be stale.
            let dir = fs.resolve_directory(next.path())?;
            let frame = enter(fs, sink, dir, descend, &mut found, stats)?;
            stack.push(frame);
            continue;
        }

        // All children done: the visit ends with the deletion.
        if let Some(done) = stack.pop() {
            leave(fs, done, stats)?;
        }
    }

    Ok(found)
}

/// Steps 1-4 up to (not including) visiting the children.
fn enter<F, S, D>(
    fs: &F,
    sink: &S,
    dir: Directory,
    descend: &D,
    found: &mut Vec<Entry>,
    stats: &mut WalkStats,
) -> Result<Frame, WalkError>
where
    F: FileSystem + ?Sized,
    S: DiagnosticSink + ?Sized,
    D: Descend + ?Sized,
{
    sink.trace(&format!("Step into dir: {}", dir.path().display()));
    stats.visited += 1;

    let files = fs.list_files(&dir)?;
    let first_file = files.first().cloned();
    stats.files += files.len();
    found.extend(files.into_iter().map(Entry::File));

    // Every listed subdirectory is an entry; only accepted ones are entered.
    let subdirs = fs.list_directories(&dir)?;
    stats.dirs += subdirs.len();
    found.extend(subdirs.iter().cloned().map(Entry::Dir));

    let accepted: Vec<Directory> = subdirs
        .into_iter()
        .filter(|d| descend.should_descend(d))
        .collect();

    Ok(Frame {
        dir,
        first_file,
        pending: accepted.into_iter(),
    })
}

/// Step 5.
fn leave<F>(fs: &F, frame: Frame, stats: &mut WalkStats) -> Result<(), WalkError>
where
    F: FileSystem + ?Sized,
{
    let file = frame.first_file.ok_or_else(|| WalkError::NothingToDelete {
        dir: frame.dir.path().to_path_buf(),
    })?;

    fs.delete(&file)?;
    log::trace!(target: "deepwalk", "deleted {}", file.path().display());
    stats.deleted += 1;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::AcceptAll;
    use crate::sink::NullSink;
    use std::cell::RefCell;
    use std::collections::BTreeMap;
    use std::io;
    use std::path::PathBuf;

    /// Tree keyed by directory path: (file names, subdirectory names).
    #[derive(Default)]
    struct Fake {
        dirs: BTreeMap<PathBuf, (Vec<&'static str>, Vec<&'static str>)>,
        deleted: RefCell<Vec<PathBuf>>,
    }

    impl Fake {
        fn dir(mut self, path: &str, files: &[&'static str], subdirs: &[&'static str]) -> Self {
            self.dirs
                .insert(path.into(), (files.to_vec(), subdirs.to_vec()));
            self
        }
    }

    impl FileSystem for Fake {
        fn resolve_directory(&self, path: &Path) -> Result<Directory, WalkError> {
            if self.dirs.contains_key(path) {
                Ok(Directory::new(path))
            } else {
                Err(WalkError::Resolve {
                    path: path.into(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                })
            }
        }

        fn list_files(&self, dir: &Directory) -> Result<Vec<File>, WalkError> {
            let (files, _) = &self.dirs[dir.path()];
            Ok(files.iter().map(|f| File::new(dir.path().join(f))).collect())
        }

        fn list_directories(&self, dir: &Directory) -> Result<Vec<Directory>, WalkError> {
            let (_, subdirs) = &self.dirs[dir.path()];
            Ok(subdirs
                .iter()
                .map(|d| Directory::new(dir.path().join(d)))
                .collect())
        }

        fn delete(&self, file: &File) -> Result<(), WalkError> {
            self.deleted.borrow_mut().push(file.path().to_path_buf());
            Ok(())
        }
    }

    fn paths(t: &Traversal) -> Vec<PathBuf> {
        t.paths().map(Path::to_path_buf).collect()
    }

    #[test]
    fn preorder_entries_postorder_deletes() {
        let fs = Fake::default()
            .dir("/r", &["a"], &["s", "t"])
            .dir("/r/s", &["b"], &["u"])
            .dir("/r/s/u", &["c"], &[])
            .dir("/r/t", &["d"], &[]);

        let t = run(&fs, &NullSink, Path::new("/r"), &AcceptAll, &AcceptAll).unwrap();

        let expected: Vec<PathBuf> = [
            "/r/a", "/r/s", "/r/t", "/r/s/b", "/r/s/u", "/r/s/u/c", "/r/t/d",
        ]
        .iter()
        .map(PathBuf::from)
        .collect();
        assert_eq!(paths(&t), expected);

        let deleted: Vec<PathBuf> = ["/r/s/u/c", "/r/s/b", "/r/t/d", "/r/a"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(*fs.deleted.borrow(), deleted);

        assert_eq!(t.stats.visited, 4);
        assert_eq!(t.stats.deleted, 4);
        assert_eq!(t.stats.files, 4);
        assert_eq!(t.stats.dirs, 3);
        assert_eq!(t.stats.matched, 7);
    }

    #[test]
    fn rejected_subdirectory_is_an_entry_but_not_entered() {
        let fs = Fake::default()
            .dir("/r", &["a"], &["s", "t"])
            .dir("/r/s", &["b"], &[])
            .dir("/r/t", &["d"], &[]);
        let skip_s = |d: &Directory| !d.path().ends_with("s");

        let t = run(&fs, &NullSink, Path::new("/r"), &AcceptAll, &skip_s).unwrap();

        let expected: Vec<PathBuf> = ["/r/a", "/r/s", "/r/t", "/r/t/d"]
            .iter()
            .map(PathBuf::from)
            .collect();
        assert_eq!(paths(&t), expected);

        let deleted: Vec<PathBuf> = ["/r/t/d", "/r/a"].iter().map(PathBuf::from).collect();
        assert_eq!(*fs.deleted.borrow(), deleted);

        assert_eq!(t.stats.dirs, 2);
        assert_eq!(t.stats.visited, 2);
    }

    #[test]
    fn deep_chain_is_walked_to_the_bottom() {
        const DEPTH: usize = 3_000;

        let mut fs = Fake::default();
        let mut path = String::from("/r");
        for i in 0..DEPTH {
            let last = i + 1 == DEPTH;
            fs = fs.dir(&path, &["f"], if last { &[] } else { &["x"] });
            path.push_str("/x");
        }

        let t = run(&fs, &NullSink, Path::new("/r"), &AcceptAll, &AcceptAll).unwrap();
        assert_eq!(t.stats.visited, DEPTH);
        assert_eq!(fs.deleted.borrow().len(), DEPTH);
        assert_eq!(t.entries.len(), 2 * DEPTH - 1);
    }

    #[test]
    fn missing_child_aborts_with_resolve_error() {
        let fs = Fake::default().dir("/r", &["a"], &["gone"]);

        let err = run(&fs, &NullSink, Path::new("/r"), &AcceptAll, &AcceptAll).unwrap_err();
        assert!(matches!(err, WalkError::Resolve { .. }));
        assert_eq!(err.path(), Path::new("/r/gone"));
        assert!(fs.deleted.borrow().is_empty());
    }
}
