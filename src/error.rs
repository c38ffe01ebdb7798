use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalkError {
    // Resolution
    #[error("cannot resolve directory {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Listing
    #[error("cannot list {}: {source}", .path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // Deletion
    #[error("cannot delete {}: {source}", .path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot delete first file of {}: directory has no files", .dir.display())]
    NothingToDelete { dir: PathBuf },

    // Third-party extensibility
    #[error("filesystem provider error at {}: {message}", .path.display())]
    Provider {
        step: Step,
        path: PathBuf,
        message: String,
    },
}

/// The step of a directory visit at which a traversal failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Resolve,
    List,
    Delete,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Resolve => "resolve",
            Self::List => "list",
            Self::Delete => "delete",
        })
    }
}

impl WalkError {
    /// The offending path: the directory being resolved or listed, the file
    /// being deleted, or the directory that had nothing to delete.
    pub fn path(&self) -> &Path {
        match self {
            Self::Resolve { path, .. }
            | Self::List { path, .. }
            | Self::Delete { path, .. }
            | Self::Provider { path, .. } => path,
            Self::NothingToDelete { dir } => dir,
        }
    }

    pub fn step(&self) -> Step {
        match self {
            Self::Resolve { .. } => Step::Resolve,
            Self::List { .. } => Step::List,
            Self::Delete { .. } | Self::NothingToDelete { .. } => Step::Delete,
            Self::Provider { step, .. } => *step,
        }
    }

    /// Whether this is the empty-selection case of the deletion step.
    pub fn is_nothing_to_delete(&self) -> bool {
        matches!(self, Self::NothingToDelete { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_to_delete_reports_delete_step() {
        let e = WalkError::NothingToDelete { dir: "/r".into() };
        assert_eq!(e.step(), Step::Delete);
        assert_eq!(e.path(), Path::new("/r"));
        assert!(e.to_string().contains("/r"));
    }

    #[test]
    fn display_names_path() {
        let e = WalkError::List {
            path: "/r/locked".into(),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(e.step(), Step::List);
        assert!(e.to_string().starts_with("cannot list /r/locked"));
    }
}
