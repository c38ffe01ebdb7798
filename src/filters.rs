//! Named built-in predicates.
//!
//! Conveniences for the common cases; anything else is a closure away.

use crate::entry::{Directory, Entry};
use crate::traits::{Descend, Matcher};

/// Accepts every entry and every directory. Substituted for any predicate
/// the caller leaves out.
#[derive(Debug, Default, Clone, Copy)]
pub struct AcceptAll;

impl Matcher for AcceptAll {
    fn is_match(&self, _entry: &Entry) -> bool {
        true
    }
}

impl Descend for AcceptAll {
    fn should_descend(&self, _dir: &Directory) -> bool {
        true
    }
}

/// Keeps files, drops directories.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilesOnly;

impl Matcher for FilesOnly {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.is_file()
    }
}

/// Keeps directories, drops files.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirsOnly;

impl Matcher for DirsOnly {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.is_dir()
    }
}

/// Matches entries whose name contains `pattern` (case-insensitive).
#[derive(Debug, Clone)]
pub struct NameContains {
    pattern: String,
}

impl NameContains {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into().to_lowercase(),
        }
    }
}

impl Matcher for NameContains {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.name().to_lowercase().contains(&self.pattern)
    }
}

/// Matches when every inner matcher does. Empty means match everything.
#[derive(Default)]
pub struct All {
    matchers: Vec<Box<dyn Matcher>>,
}

impl All {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, m: impl Matcher + 'static) -> Self {
        self.matchers.push(Box::new(m));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Matcher for All {
    fn is_match(&self, entry: &Entry) -> bool {
        self.matchers.iter().all(|m| m.is_match(entry))
    }
}

/// Refuses to descend into directories whose name starts with a dot.
#[derive(Debug, Default, Clone, Copy)]
pub struct SkipHidden;

impl Descend for SkipHidden {
    fn should_descend(&self, dir: &Directory) -> bool {
        !dir.path()
            .file_name()
            .is_some_and(|n| n.to_string_lossy().starts_with('.'))
    }
}

/// Refuses to descend into directories with any of the given names.
/// Names are compared exactly.
#[derive(Debug, Default, Clone)]
pub struct SkipNamed {
    names: Vec<String>,
}

impl SkipNamed {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Descend for SkipNamed {
    fn should_descend(&self, dir: &Directory) -> bool {
        match dir.path().file_name() {
            Some(n) => !self.names.iter().any(|s| n == s.as_str()),
            None => true,
        }
    }
}

/// Both `SkipHidden` and `SkipNamed`, when enabled.
#[derive(Debug, Default, Clone)]
pub struct SkipDirs {
    pub hidden: bool,
    pub named: SkipNamed,
}

impl Descend for SkipDirs {
    fn should_descend(&self, dir: &Directory) -> bool {
        (!self.hidden || SkipHidden.should_descend(dir)) && self.named.should_descend(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::File;

    #[test]
    fn name_contains_is_case_insensitive() {
        let m = NameContains::new("Invoice");
        assert!(m.is_match(&File::new("/r/INVOICE_jan.txt").into()));
        assert!(!m.is_match(&File::new("/r/report.txt").into()));
    }

    #[test]
    fn all_combines_conjunctively() {
        let m = All::new().and(FilesOnly).and(NameContains::new("a"));
        assert!(m.is_match(&File::new("/r/a.txt").into()));
        assert!(!m.is_match(&Directory::new("/r/a").into()));
        assert!(!m.is_match(&File::new("/r/b.txt").into()));
        assert!(All::new().is_match(&Directory::new("/r").into()));
    }

    #[test]
    fn skip_filters() {
        assert!(!SkipHidden.should_descend(&Directory::new("/r/.git")));
        assert!(SkipHidden.should_descend(&Directory::new("/r/src")));

        let named = SkipNamed::new(["target", "node_modules"]);
        assert!(!named.should_descend(&Directory::new("/r/target")));
        assert!(named.should_descend(&Directory::new("/r/target2")));

        let both = SkipDirs { hidden: true, named };
        assert!(!both.should_descend(&Directory::new("/r/.cache")));
        assert!(!both.should_descend(&Directory::new("/r/node_modules")));
        assert!(both.should_descend(&Directory::new("/r/lib")));
    }
}
