//! Read-only views of a project's files.
//!
//! The loader never touches the filesystem directly. It asks a [`SourceTree`]
//! for project-relative, slash-separated paths and file contents, which keeps
//! discovery testable against an in-memory tree.

use std::{
    collections::BTreeMap,
    io,
    path::{Path, PathBuf},
};

use genmap_core::path;
use walkdir::WalkDir;

/// A read-only file tree rooted at the project directory.
pub trait SourceTree {
    /// All files beneath `root`, recursively, in lexicographic order.
    ///
    /// Returns an empty list when `root` does not exist.
    fn files_under(&self, root: &str) -> io::Result<Vec<String>>;

    /// Read a file as UTF-8.
    fn read_to_string(&self, path: &str) -> io::Result<String>;

    /// Files directly inside `dir`, in lexicographic order.
    fn files_in(&self, dir: &str) -> io::Result<Vec<String>> {
        let dir = path::clean(dir);
        Ok(self
            .files_under(&dir)?
            .into_iter()
            .filter(|file| path::dir_of(file) == dir)
            .collect())
    }
}

/// A [`SourceTree`] over a directory on disk.
#[derive(Debug, Clone)]
pub struct DiskTree {
    root: PathBuf,
}

impl DiskTree {
    /// Create a tree rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The project directory this tree reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceTree for DiskTree {
    fn files_under(&self, root: &str) -> io::Result<Vec<String>> {
        let base = self.root.join(path::clean(root));
        if !base.exists() {
            return Ok(Vec::new());
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&base).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative) = entry.path().strip_prefix(&self.root) {
                files.push(path::to_slash(relative));
            }
        }
        // Per-directory name order is not full-path order ("a-b/x" < "a/x")
        files.sort();
        Ok(files)
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        std::fs::read_to_string(self.root.join(path))
    }
}

/// An in-memory [`SourceTree`].
///
/// # Example
///
/// ```
/// use genmap_loader::{MemoryTree, SourceTree};
///
/// let tree = MemoryTree::new()
///     .with_file("generator/a/a.go", "package a")
///     .with_file("generator/b/b.go", "package b");
///
/// assert_eq!(tree.files_under("generator").unwrap().len(), 2);
/// assert!(tree.files_under("missing").unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryTree {
    files: BTreeMap<String, String>,
}

impl MemoryTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, returning the tree.
    pub fn with_file(mut self, path: &str, content: impl Into<String>) -> Self {
        self.insert(path, content);
        self
    }

    /// Add or replace a file.
    pub fn insert(&mut self, path: &str, content: impl Into<String>) {
        self.files.insert(path::clean(path), content.into());
    }

    /// Number of files in the tree.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Check if the tree has no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl SourceTree for MemoryTree {
    fn files_under(&self, root: &str) -> io::Result<Vec<String>> {
        let root = path::clean(root);
        if root == "." {
            return Ok(self.files.keys().cloned().collect());
        }
        let prefix = format!("{}/", root);
        Ok(self
            .files
            .keys()
            .filter(|file| file.starts_with(&prefix))
            .cloned()
            .collect())
    }

    fn read_to_string(&self, path: &str) -> io::Result<String> {
        self.files.get(&path::clean(path)).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path))
        })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_memory_files_in() {
        let tree = MemoryTree::new()
            .with_file("generator/a/a.go", "")
            .with_file("generator/a/nested/b.go", "")
            .with_file("generator/a/z.go", "");

        assert_eq!(
            tree.files_in("generator/a").unwrap(),
            vec!["generator/a/a.go", "generator/a/z.go"]
        );
    }

    #[test]
    fn test_memory_prefix_is_directory_aware() {
        let tree = MemoryTree::new()
            .with_file("generator/a.go", "")
            .with_file("generators/b.go", "");

        assert_eq!(tree.files_under("generator").unwrap(), vec!["generator/a.go"]);
    }

    #[test]
    fn test_memory_read_missing() {
        let err = MemoryTree::new().read_to_string("nope.go").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_disk_files_under_sorted() {
        let temp = TempDir::new().unwrap();
        for file in ["generator/a/x.go", "generator/a-b/x.go", "generator/main.go"] {
            let path = temp.path().join(file);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, "package x").unwrap();
        }

        let tree = DiskTree::new(temp.path());
        assert_eq!(
            tree.files_under("generator").unwrap(),
            vec!["generator/a-b/x.go", "generator/a/x.go", "generator/main.go"]
        );
        assert_eq!(tree.read_to_string("generator/main.go").unwrap(), "package x");
    }

    #[test]
    fn test_disk_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let tree = DiskTree::new(temp.path());
        assert!(tree.files_under("bud/internal/generator").unwrap().is_empty());
    }
}
