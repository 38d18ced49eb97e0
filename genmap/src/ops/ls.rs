//! Ls operation - list a project directory.
//!
//! Generated outputs may not exist on disk yet, so the listing overlays the
//! paths the manifest owns on top of the real directory entries.

use std::collections::BTreeMap;

use eyre::{Result, WrapErr, bail};
use genmap_core::path;
use genmap_loader::{ListKind, Manifest};

use super::Project;
use crate::reports::{LsEntry, LsReport};

/// Execute the ls operation.
///
/// Directories come first, then files; each group is sorted by name.
pub fn ls(project: &Project, manifest: &Manifest, dir: &str) -> Result<LsReport> {
    let dir = path::clean(dir);
    if dir == ".." || dir.starts_with("../") || dir.starts_with('/') {
        bail!("'{}' is outside the project", dir);
    }

    // name -> is_dir
    let mut entries: BTreeMap<String, bool> = BTreeMap::new();
    let mut found = false;

    let full = project.root.join(&dir);
    if full.is_dir() {
        found = true;
        let read = std::fs::read_dir(&full)
            .wrap_err_with(|| format!("failed to read '{}'", full.display()))?;
        for entry in read {
            let entry = entry.wrap_err_with(|| format!("failed to read '{}'", full.display()))?;
            let is_dir = entry.file_type()?.is_dir();
            entries.insert(entry.file_name().to_string_lossy().into_owned(), is_dir);
        }
    }

    for (kind, generator) in manifest.entries() {
        if generator.path == dir && kind != ListKind::FileGenerators {
            found = true;
        }
        if let Some((name, is_dir)) = child_of(&dir, &generator.path, kind) {
            found = true;
            *entries.entry(name.to_string()).or_insert(is_dir) |= is_dir;
        }
    }

    if !found {
        bail!("'{}' is not a directory", dir);
    }

    let mut entries: Vec<LsEntry> = entries
        .into_iter()
        .map(|(name, is_dir)| LsEntry { name, is_dir })
        .collect();
    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));

    Ok(LsReport { dir, entries })
}

/// The first path segment of `owned` below `dir`, and whether it is a directory.
fn child_of<'a>(dir: &str, owned: &'a str, kind: ListKind) -> Option<(&'a str, bool)> {
    let rest = if dir == "." {
        owned
    } else {
        owned.strip_prefix(dir)?.strip_prefix('/')?
    };
    match rest.split_once('/') {
        Some((name, _)) => Some((name, true)),
        None => Some((rest, kind != ListKind::FileGenerators)),
    }
}
