//! The composed generator manifest.

use std::fmt;

use serde::Serialize;

use crate::imports::Import;

/// Which manifest list an entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Generators that emit a single named file.
    FileGenerators,
    /// Servers for a directory tree, served live.
    FileServers,
    /// Generators that emit a directory.
    DirGenerators,
    /// Servers for files under an internal directory.
    DirServers,
}

impl ListKind {
    /// All lists, in manifest order.
    pub const ALL: [ListKind; 4] = [
        ListKind::FileGenerators,
        ListKind::FileServers,
        ListKind::DirGenerators,
        ListKind::DirServers,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ListKind::FileGenerators => "file generators",
            ListKind::FileServers => "file servers",
            ListKind::DirGenerators => "directory generators",
            ListKind::DirServers => "directory servers",
        }
    }
}

/// One generator in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratorRef {
    /// The generator's package and its alias.
    pub import: Import,
    /// Project-relative output path (file or directory).
    pub path: String,
    /// camelCase form of the alias for generated identifiers.
    pub camel: String,
}

/// Everything the driver renderer needs: four generator lists and the
/// imports they require.
///
/// A manifest is built in a single [`Loader::load`](crate::Loader::load) and
/// is read-only afterwards. Output paths are unique across all four lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Manifest {
    file_generators: Vec<GeneratorRef>,
    file_servers: Vec<GeneratorRef>,
    dir_generators: Vec<GeneratorRef>,
    dir_servers: Vec<GeneratorRef>,
    imports: Vec<Import>,
}

impl Manifest {
    pub(crate) fn push(&mut self, kind: ListKind, entry: GeneratorRef) {
        match kind {
            ListKind::FileGenerators => self.file_generators.push(entry),
            ListKind::FileServers => self.file_servers.push(entry),
            ListKind::DirGenerators => self.dir_generators.push(entry),
            ListKind::DirServers => self.dir_servers.push(entry),
        }
    }

    pub(crate) fn set_imports(&mut self, imports: Vec<Import>) {
        self.imports = imports;
    }

    pub fn file_generators(&self) -> &[GeneratorRef] {
        &self.file_generators
    }

    pub fn file_servers(&self) -> &[GeneratorRef] {
        &self.file_servers
    }

    pub fn dir_generators(&self) -> &[GeneratorRef] {
        &self.dir_generators
    }

    pub fn dir_servers(&self) -> &[GeneratorRef] {
        &self.dir_servers
    }

    /// Imports in allocation order, runtime imports last.
    pub fn imports(&self) -> &[Import] {
        &self.imports
    }

    /// Get one of the four lists.
    pub fn list(&self, kind: ListKind) -> &[GeneratorRef] {
        match kind {
            ListKind::FileGenerators => &self.file_generators,
            ListKind::FileServers => &self.file_servers,
            ListKind::DirGenerators => &self.dir_generators,
            ListKind::DirServers => &self.dir_servers,
        }
    }

    /// Iterate over every entry, list by list.
    pub fn entries(&self) -> impl Iterator<Item = (ListKind, &GeneratorRef)> {
        ListKind::ALL
            .into_iter()
            .flat_map(move |kind| self.list(kind).iter().map(move |entry| (kind, entry)))
    }

    /// Find the entry that owns an output path.
    pub fn find(&self, path: &str) -> Option<(ListKind, &GeneratorRef)> {
        self.entries().find(|(_, entry)| entry.path == path)
    }

    /// Total number of generator entries across all lists.
    pub fn len(&self) -> usize {
        ListKind::ALL.iter().map(|&kind| self.list(kind).len()).sum()
    }

    /// Check if the manifest has no generator entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for kind in ListKind::ALL {
            let entries = self.list(kind);
            if entries.is_empty() {
                writeln!(f, "{}: none", kind.label())?;
                continue;
            }
            writeln!(f, "{}:", kind.label())?;
            for entry in entries {
                writeln!(
                    f,
                    "  {} ({}: {})",
                    entry.path, entry.import.name, entry.import.path
                )?;
            }
        }

        if self.imports.is_empty() {
            return writeln!(f, "imports: none");
        }
        writeln!(f, "imports:")?;
        for import in &self.imports {
            writeln!(f, "  {} {}", import.name, import.path)?;
        }
        Ok(())
    }
}
