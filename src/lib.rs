//! # deepwalk
//!
//! Depth-first directory walker with separate "include" and "descend"
//! filters, for trees deep enough that path length starts to matter.
//!
//! deepwalk owns the walk engine, the contracts ([`FileSystem`],
//! [`DiagnosticSink`], [`Matcher`], [`Descend`]), the error type and the
//! builder API. A real-disk provider ([`LocalFs`]) and a `log`-backed sink
//! ([`LogSink`]) are the defaults.
//!
//! # Behaviour
//!
//! - Every discovered file and directory is accumulated first; the
//!   inclusion predicate runs once over the complete list at the end.
//! - The descent predicate only decides whether a directory is entered. A
//!   rejected directory is still reported as an entry of its parent.
//! - **Every visited directory loses its first listed file.** After a
//!   directory's children have been walked, the first file of its listing
//!   is deleted. A visited directory with no files at all fails the walk
//!   with [`WalkError::NothingToDelete`]. Deletions are not rolled back
//!   when a later step fails.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use deepwalk::{Entry, filters::SkipHidden};
//!
//! let found = deepwalk::traverse(
//!     "build/out",
//!     Some(|e: &Entry| e.is_file()),
//!     Some(SkipHidden),
//! )?;
//!
//! for entry in &found {
//!     println!("{}", entry.path().display());
//! }
//!
//! // No filters at all: give `None` a type.
//! let everything = deepwalk::traverse(
//!     "build/out",
//!     None::<deepwalk::filters::AcceptAll>,
//!     None::<deepwalk::filters::AcceptAll>,
//! )?;
//! # let _ = everything;
//! # Ok::<(), deepwalk::WalkError>(())
//! ```
//!
//! # Custom Providers
//!
//! Implement [`FileSystem`] to walk something other than the local disk and
//! hand it to the builder:
//!
//! ```rust,ignore
//! let found = deepwalk::walk()
//!     .root("/")
//!     .filesystem(my_fs)
//!     .sink(NullSink)
//!     .run()?;
//! ```

#![forbid(unsafe_code)]

pub mod engine;
pub mod filters;

mod builder;
mod entry;
mod error;
mod fs;
mod results;
mod sink;
mod traits;

use std::path::Path;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use builder::TraversalBuilder;
pub use entry::{Directory, Entry, EntryKind, File};
pub use error::{Step, WalkError};
pub use fs::LocalFs;
pub use results::{Traversal, WalkStats};
pub use sink::{LogSink, NullSink};
pub use traits::{Descend, DiagnosticSink, FileSystem, Matcher};

use filters::AcceptAll;

// ── Entry points ──────────────────────────────────────────────────────────────

/// Walk the local directory tree under `root`.
///
/// `None` for either predicate means accept everything. A bare `None` has
/// no type to infer, so name one: `None::<AcceptAll>` from
/// [`filters`] is the usual choice.
///
/// ```rust,no_run
/// use deepwalk::filters::AcceptAll;
///
/// let everything = deepwalk::traverse(".", None::<AcceptAll>, None::<AcceptAll>)?;
/// # Ok::<(), deepwalk::WalkError>(())
/// ```
///
/// Trace messages go to the `log` facade.
///
/// # Errors
///
/// See [`engine::run`].
pub fn traverse<M, D>(
    root: impl AsRef<Path>,
    include: Option<M>,
    descend: Option<D>,
) -> Result<Vec<Entry>, WalkError>
where
    M: Matcher,
    D: Descend,
{
    let root = root.as_ref();
    let fs = LocalFs::new();
    let traversal = match (include, descend) {
        (Some(m), Some(d)) => engine::run(&fs, &LogSink, root, &m, &d),
        (Some(m), None)    => engine::run(&fs, &LogSink, root, &m, &AcceptAll),
        (None, Some(d))    => engine::run(&fs, &LogSink, root, &AcceptAll, &d),
        (None, None)       => engine::run(&fs, &LogSink, root, &AcceptAll, &AcceptAll),
    }?;
    Ok(traversal.into_entries())
}

/// Create a new [`TraversalBuilder`] to configure and run a traversal.
///
/// # Example
///
/// ```rust
/// use deepwalk::{Directory, File, FileSystem, NullSink, WalkError};
/// use std::cell::RefCell;
/// use std::path::Path;
///
/// // One directory holding two files.
/// struct OneDir(RefCell<Vec<&'static str>>);
///
/// impl FileSystem for OneDir {
///     fn resolve_directory(&self, path: &Path) -> Result<Directory, WalkError> {
///         Ok(Directory::new(path))
///     }
///     fn list_files(&self, dir: &Directory) -> Result<Vec<File>, WalkError> {
///         Ok(self.0.borrow().iter().map(|n| File::new(dir.path().join(n))).collect())
///     }
///     fn list_directories(&self, _dir: &Directory) -> Result<Vec<Directory>, WalkError> {
///         Ok(Vec::new())
///     }
///     fn delete(&self, file: &File) -> Result<(), WalkError> {
///         self.0.borrow_mut().retain(|n| !file.path().ends_with(n));
///         Ok(())
///     }
/// }
///
/// let fs = OneDir(RefCell::new(vec!["invoice.txt", "report.txt"]));
/// let found = deepwalk::walk()
///     .root("/data")
///     .filesystem(&fs)
///     .sink(NullSink)
///     .matching("report")
///     .run()
///     .unwrap();
///
/// assert_eq!(found.entries.len(), 1);
/// assert_eq!(*fs.0.borrow(), vec!["report.txt"]);
/// ```
pub fn walk<'a>() -> TraversalBuilder<'a> {
    TraversalBuilder::default()
}
