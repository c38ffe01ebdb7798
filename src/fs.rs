use std::cell::RefCell;
use std::fs::FileType;
use std::io;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::entry::{Directory, File};
use crate::error::WalkError;
use crate::traits::FileSystem;

/// [`FileSystem`] over the local disk.
///
/// Listing goes through `ignore`'s walker pinned to depth 1 with every
/// filter switched off, so hidden entries and anything a `.gitignore` would
/// hide are still seen. Children come back sorted by file name. Symlinks are
/// not followed and show up as neither files nor directories.
///
/// Each directory is read once per visit: [`list_files`] reads it and keeps
/// the listing, and the [`list_directories`] call that follows for the same
/// directory answers from that listing. Both views come from one snapshot.
///
/// [`list_files`]: FileSystem::list_files
/// [`list_directories`]: FileSystem::list_directories
#[derive(Debug, Default)]
pub struct LocalFs {
    /// Last directory read, with its children.
    last: RefCell<Option<(PathBuf, Vec<(PathBuf, FileType)>)>>,
}

impl LocalFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh read of `dir`, remembered for the next `list_directories`.
    fn read_children(&self, dir: &Directory) -> Result<Vec<(PathBuf, FileType)>, WalkError> {
        let children = read_dir(dir)?;
        *self.last.borrow_mut() = Some((dir.path().to_path_buf(), children.clone()));
        Ok(children)
    }

    /// Children of `dir` from the remembered listing, or a fresh read.
    fn cached_children(&self, dir: &Directory) -> Result<Vec<(PathBuf, FileType)>, WalkError> {
        match self.last.borrow_mut().take() {
            Some((path, children)) if path == dir.path() => Ok(children),
            _ => read_dir(dir),
        }
    }
}

/// Immediate children of `dir` with their file types.
fn read_dir(dir: &Directory) -> Result<Vec<(PathBuf, FileType)>, WalkError> {
    let mut builder = WalkBuilder::new(dir.path());
    builder
        .standard_filters(false)
        .ignore(false)
        .parents(false)
        .hidden(false)
        .follow_links(false)
        .same_file_system(false)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut out = Vec::new();
    for res in builder.build() {
        let entry = res.map_err(|e| list_error(dir.path(), e))?;

        // Skip the directory itself
        if entry.depth() == 0 {
            continue;
        }

        if let Some(ft) = entry.file_type() {
            out.push((entry.into_path(), ft));
        }
    }
    Ok(out)
}

impl FileSystem for LocalFs {
    fn resolve_directory(&self, path: &Path) -> Result<Directory, WalkError> {
        let meta = std::fs::metadata(path).map_err(|source| WalkError::Resolve {
            path: path.to_path_buf(),
            source,
        })?;

        if !meta.is_dir() {
            return Err(WalkError::Resolve {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotADirectory),
            });
        }

        Ok(Directory::new(path))
    }

    fn list_files(&self, dir: &Directory) -> Result<Vec<File>, WalkError> {
        Ok(self
            .read_children(dir)?
            .into_iter()
            .filter(|(_, ft)| ft.is_file())
            .map(|(path, _)| File::new(path))
            .collect())
    }

    fn list_directories(&self, dir: &Directory) -> Result<Vec<Directory>, WalkError> {
        Ok(self
            .cached_children(dir)?
            .into_iter()
            .filter(|(_, ft)| ft.is_dir())
            .map(|(path, _)| Directory::new(path))
            .collect())
    }

    fn delete(&self, file: &File) -> Result<(), WalkError> {
        std::fs::remove_file(file.path()).map_err(|source| WalkError::Delete {
            path: file.path().to_path_buf(),
            source,
        })
    }
}

// ---------------------------------------------------------------------------
// Map ignore::Error to WalkError
// ---------------------------------------------------------------------------

fn list_error(dir: &Path, e: ignore::Error) -> WalkError {
    let message = e.to_string();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
    WalkError::List {
        path: dir.to_path_buf(),
        source,
    }
}
