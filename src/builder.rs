use std::path::PathBuf;

use crate::engine::run;
use crate::error::WalkError;
use crate::filters::{AcceptAll, NameContains};
use crate::fs::LocalFs;
use crate::results::Traversal;
use crate::sink::LogSink;
use crate::traits::{Descend, DiagnosticSink, FileSystem, Matcher};

// ---------------------------------------------------------------------------
// TraversalBuilder
// ---------------------------------------------------------------------------

/// Entry point for configuring and executing a traversal.
///
/// Created via [`deepwalk::walk()`](crate::walk). Configure with chained
/// builder methods, then call [`run()`](TraversalBuilder::run) to execute.
///
/// Anything left unset gets a default: the current working directory as
/// root, [`LocalFs`], [`LogSink`], and accept-all predicates.
///
/// # Example
///
/// ```rust,ignore
/// let found = deepwalk::walk()
///     .root("build")
///     .include(|e: &Entry| e.is_file())
///     .descend_into(SkipHidden)
///     .run()?;
/// ```
pub struct TraversalBuilder<'a> {
    root:       Option<PathBuf>,
    filesystem: Option<Box<dyn FileSystem + 'a>>,
    sink:       Option<Box<dyn DiagnosticSink + 'a>>,
    include:    Option<Box<dyn Matcher + 'a>>,
    descend:    Option<Box<dyn Descend + 'a>>,
}

impl Default for TraversalBuilder<'_> {
    fn default() -> Self {
        Self {
            root:       None,
            filesystem: None,
            sink:       None,
            include:    None,
            descend:    None,
        }
    }
}

impl<'a> TraversalBuilder<'a> {
    // ── Root ──────────────────────────────────────────────────────────────

    /// Directory to start from. Defaults to the current working directory.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    // ── Collaborators ─────────────────────────────────────────────────────

    /// Walk a custom [`FileSystem`] instead of the local disk.
    pub fn filesystem(mut self, fs: impl FileSystem + 'a) -> Self {
        self.filesystem = Some(Box::new(fs));
        self
    }

    /// Send per-directory trace messages somewhere other than `log`.
    pub fn sink(mut self, sink: impl DiagnosticSink + 'a) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    // ── Predicates ────────────────────────────────────────────────────────

    /// Set the inclusion predicate, applied once over every discovered entry.
    pub fn include(mut self, m: impl Matcher + 'a) -> Self {
        self.include = Some(Box::new(m));
        self
    }

    /// Shorthand for `.include(NameContains::new(pattern))`.
    /// Case-insensitive.
    pub fn matching(self, pattern: impl Into<String>) -> Self {
        self.include(NameContains::new(pattern))
    }

    /// Set the descent predicate, consulted for every listed subdirectory.
    pub fn descend_into(mut self, d: impl Descend + 'a) -> Self {
        self.descend = Some(Box::new(d));
        self
    }

    // ── Execute ───────────────────────────────────────────────────────────

    /// Execute the traversal.
    ///
    /// Blocks until the whole tree has been walked.
    ///
    /// # Errors
    ///
    /// Returns the first [`WalkError`] hit. Deletions performed before it
    /// stay performed.
    pub fn run(self) -> Result<Traversal, WalkError> {
        let root = match self.root {
            Some(r) => r,
            None => std::env::current_dir().map_err(|source| WalkError::Resolve {
                path: PathBuf::from("."),
                source,
            })?,
        };

        let filesystem: Box<dyn FileSystem + 'a> = match self.filesystem {
            Some(fs) => fs,
            None     => Box::new(LocalFs::new()),
        };
        let sink: Box<dyn DiagnosticSink + 'a> = match self.sink {
            Some(s) => s,
            None    => Box::new(LogSink),
        };

        // Missing predicates accept everything
        let include: Box<dyn Matcher + 'a> = match self.include {
            Some(m) => m,
            None    => Box::new(AcceptAll),
        };
        let descend: Box<dyn Descend + 'a> = match self.descend {
            Some(d) => d,
            None    => Box::new(AcceptAll),
        };

        run(&*filesystem, &*sink, &root, &*include, &*descend)
    }
}
