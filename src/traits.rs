use crate::entry::{Directory, Entry, File};
use crate::error::WalkError;

/// Where the engine gets its directory listings from, and how it deletes.
///
/// Implement this to walk anything shaped like a directory tree: the local
/// disk ([`LocalFs`](crate::LocalFs)), an in-memory fixture, a remote share.
///
/// Listings are non-recursive: only the immediate children of `dir`. The
/// order they come back in is the order the engine visits them.
///
/// # Error Handling
///
/// Return [`WalkError::Resolve`], [`WalkError::List`] or
/// [`WalkError::Delete`] carrying the offending path. The engine does not
/// retry; the first error ends the traversal.
///
/// # Example
///
/// ```rust
/// use deepwalk::{Directory, File, FileSystem, WalkError};
///
/// struct Flat(Vec<&'static str>);
///
/// impl FileSystem for Flat {
///     fn resolve_directory(&self, path: &std::path::Path) -> Result<Directory, WalkError> {
///         Ok(Directory::new(path))
///     }
///     fn list_files(&self, dir: &Directory) -> Result<Vec<File>, WalkError> {
///         Ok(self.0.iter().map(|n| File::new(dir.path().join(n))).collect())
///     }
///     fn list_directories(&self, _dir: &Directory) -> Result<Vec<Directory>, WalkError> {
///         Ok(Vec::new())
///     }
///     fn delete(&self, _file: &File) -> Result<(), WalkError> {
///         Ok(())
///     }
/// }
/// ```
pub trait FileSystem {
    /// Resolve `path` to a directory handle. Fails if `path` is missing or
    /// is not a directory.
    fn resolve_directory(&self, path: &std::path::Path) -> Result<Directory, WalkError>;

    /// Immediate files of `dir`.
    fn list_files(&self, dir: &Directory) -> Result<Vec<File>, WalkError>;

    /// Immediate subdirectories of `dir`.
    fn list_directories(&self, dir: &Directory) -> Result<Vec<Directory>, WalkError>;

    fn delete(&self, file: &File) -> Result<(), WalkError>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn resolve_directory(&self, path: &std::path::Path) -> Result<Directory, WalkError> {
        (**self).resolve_directory(path)
    }
    fn list_files(&self, dir: &Directory) -> Result<Vec<File>, WalkError> {
        (**self).list_files(dir)
    }
    fn list_directories(&self, dir: &Directory) -> Result<Vec<Directory>, WalkError> {
        (**self).list_directories(dir)
    }
    fn delete(&self, file: &File) -> Result<(), WalkError> {
        (**self).delete(file)
    }
}

/// Receives one human-readable trace message per directory visited.
///
/// Fire-and-forget: a sink has no way to fail the traversal.
pub trait DiagnosticSink {
    fn trace(&self, message: &str);
}

impl<T: DiagnosticSink + ?Sized> DiagnosticSink for &T {
    fn trace(&self, message: &str) {
        (**self).trace(message)
    }
}

/// Decides whether an entry appears in the final result.
///
/// Applied once, over the complete accumulated entry list, after the walk
/// has finished. Predicates should be pure; a stateful one observes entries
/// in traversal order, exactly once each.
///
/// Any `Fn(&Entry) -> bool` is a `Matcher`.
///
/// # Example
///
/// ```rust
/// use deepwalk::{Entry, Matcher};
///
/// struct ExtensionMatcher(String);
///
/// impl Matcher for ExtensionMatcher {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.path()
///             .extension()
///             .map(|e| e.eq_ignore_ascii_case(&self.0))
///             .unwrap_or(false)
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}

impl<F> Matcher for F
where
    F: Fn(&Entry) -> bool,
{
    fn is_match(&self, entry: &Entry) -> bool {
        self(entry)
    }
}

/// Decides whether the engine recurses into a directory.
///
/// A rejected directory still shows up as an entry of its parent; nothing
/// beneath it is listed, traced or deleted.
///
/// Any `Fn(&Directory) -> bool` is a `Descend`.
pub trait Descend {
    fn should_descend(&self, dir: &Directory) -> bool;
}

impl<F> Descend for F
where
    F: Fn(&Directory) -> bool,
{
    fn should_descend(&self, dir: &Directory) -> bool {
        self(dir)
    }
}
