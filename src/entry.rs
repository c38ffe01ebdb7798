use std::path::{Path, PathBuf};

/// A file discovered during traversal.
///
/// Snapshot produced by a [`FileSystem`](crate::traits::FileSystem); only
/// the full path is carried.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct File {
    path: PathBuf,
}

impl File {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full path to the file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A directory discovered during traversal, or a resolved directory handle.
///
/// Descent predicates ([`Descend`](crate::traits::Descend)) only ever see
/// this type, never a [`File`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Directory {
    path: PathBuf,
}

impl Directory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Full path to the directory.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A single item in a traversal result: either a file or a directory.
///
/// Entries are read-only snapshots, valid for the duration of the call that
/// produced them. The caller owns the result outright.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Entry {
    File(File),
    Dir(Directory),
}

impl Entry {
    /// Full path to the entry.
    pub fn path(&self) -> &Path {
        match self {
            Self::File(f) => f.path(),
            Self::Dir(d) => d.path(),
        }
    }

    /// Final path component, lossily converted. Empty for paths like `/`.
    pub fn name(&self) -> String {
        self.path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::File(_) => EntryKind::File,
            Self::Dir(_) => EntryKind::Dir,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Dir(_))
    }
}

impl From<File> for Entry {
    fn from(f: File) -> Self {
        Self::File(f)
    }
}

impl From<Directory> for Entry {
    fn from(d: Directory) -> Self {
        Self::Dir(d)
    }
}

/// The kind of a traversed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_is_last_component() {
        let e = Entry::from(File::new("/r/s/b.txt"));
        assert_eq!(e.name(), "b.txt");
        assert_eq!(e.kind(), EntryKind::File);

        let d = Entry::from(Directory::new("/r/s"));
        assert_eq!(d.name(), "s");
        assert!(d.is_dir());
    }

    #[test]
    fn root_has_empty_name() {
        assert_eq!(Entry::from(Directory::new("/")).name(), "");
    }
}
