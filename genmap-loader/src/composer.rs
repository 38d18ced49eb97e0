//! Merging generators into a manifest.
//!
//! Registration order is the precedence order: whoever claims an output path
//! first keeps it. The loader registers built-in file generators, then
//! built-in file servers, then discovered generators in scan order, so a
//! built-in can never be shadowed and a discovered generator never steps on a
//! path that is already taken. Losing registrations are dropped with a debug
//! trace, not an error.

use std::collections::HashSet;

use genmap_core::to_camel_case;
use tracing::debug;

use crate::{
    builtin::RuntimeImport,
    imports::{Import, ImportSet},
    manifest::{GeneratorRef, ListKind, Manifest},
};

/// Builds a [`Manifest`] for a single load.
///
/// # Example
///
/// ```
/// use genmap_loader::{Composer, ListKind};
///
/// let mut composer = Composer::new(Vec::new());
/// assert!(composer.register(ListKind::DirGenerators, "github.com/acme/app/generator/a", "bud/internal/x"));
/// assert!(!composer.register(ListKind::DirServers, "github.com/acme/app/generator/b", "bud/internal/x"));
///
/// let manifest = composer.finish();
/// assert_eq!(manifest.len(), 1);
/// ```
#[derive(Debug)]
pub struct Composer {
    manifest: Manifest,
    /// Output paths already owned by a registered entry
    claimed: HashSet<String>,
    imports: ImportSet,
    runtime: Vec<RuntimeImport>,
}

impl Composer {
    /// Create a composer that appends `runtime` imports when finished.
    ///
    /// Runtime aliases are reserved up front so that no generator import can
    /// take them.
    pub fn new(runtime: Vec<RuntimeImport>) -> Self {
        let mut imports = ImportSet::new();
        for import in &runtime {
            imports.reserve(import.name);
        }
        Self {
            manifest: Manifest::default(),
            claimed: HashSet::new(),
            imports,
            runtime,
        }
    }

    /// Register a generator under `path`.
    ///
    /// Returns `false` and leaves the manifest untouched when `path` is
    /// already claimed.
    pub fn register(&mut self, kind: ListKind, import: &str, path: &str) -> bool {
        if !self.claimed.insert(path.to_string()) {
            debug!(
                import,
                path,
                list = kind.label(),
                "skipping generator because its output path is already claimed"
            );
            return false;
        }

        let name = self.imports.add(import);
        self.manifest.push(
            kind,
            GeneratorRef {
                camel: to_camel_case(&name),
                import: Import {
                    name,
                    path: import.to_string(),
                },
                path: path.to_string(),
            },
        );
        true
    }

    /// Check if an output path has been claimed.
    pub fn is_claimed(&self, path: &str) -> bool {
        self.claimed.contains(path)
    }

    /// Add the runtime imports and return the finished manifest.
    pub fn finish(mut self) -> Manifest {
        for import in &self.runtime {
            self.imports.add_named(import.name, &import.path);
        }
        self.manifest.set_imports(self.imports.list());
        self.manifest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runtime() -> Vec<RuntimeImport> {
        vec![
            RuntimeImport {
                name: "fs",
                path: "io/fs".to_string(),
            },
            RuntimeImport {
                name: "log",
                path: "github.com/livebud/bud/package/log".to_string(),
            },
        ]
    }

    #[test]
    fn test_first_registration_wins() {
        let mut composer = Composer::new(Vec::new());
        assert!(composer.register(ListKind::FileGenerators, "a.com/builtin/web", "bud/web.go"));
        assert!(!composer.register(ListKind::DirGenerators, "a.com/app/web", "bud/web.go"));
        assert!(composer.is_claimed("bud/web.go"));

        let manifest = composer.finish();
        assert_eq!(manifest.file_generators().len(), 1);
        assert!(manifest.dir_generators().is_empty());
        assert_eq!(manifest.file_generators()[0].import.path, "a.com/builtin/web");
        // The losing import was never allocated an alias
        assert_eq!(manifest.imports().len(), 1);
    }

    #[test]
    fn test_same_import_shares_alias_across_lists() {
        let mut composer = Composer::new(Vec::new());
        composer.register(ListKind::DirGenerators, "a.com/app/generator/db", "bud/internal/db");
        composer.register(ListKind::DirGenerators, "a.com/app/generator/db", "bud/pkg/db");
        composer.register(ListKind::DirServers, "a.com/app/generator/db", "bud/internal/dbx");

        let manifest = composer.finish();
        let names: Vec<_> = manifest.entries().map(|(_, e)| e.import.name.as_str()).collect();
        assert_eq!(names, vec!["db", "db", "db"]);
        assert_eq!(manifest.imports().len(), 1);
    }

    #[test]
    fn test_runtime_imports_come_last_and_keep_their_alias() {
        let mut composer = Composer::new(runtime());
        composer.register(ListKind::DirGenerators, "a.com/app/generator/log", "bud/internal/log");

        let manifest = composer.finish();
        let imports: Vec<_> = manifest
            .imports()
            .iter()
            .map(|i| (i.name.as_str(), i.path.as_str()))
            .collect();
        assert_eq!(
            imports,
            vec![
                ("log1", "a.com/app/generator/log"),
                ("fs", "io/fs"),
                ("log", "github.com/livebud/bud/package/log"),
            ]
        );
        assert_eq!(manifest.dir_generators()[0].camel, "log1");
    }

    #[test]
    fn test_camel_name() {
        let mut composer = Composer::new(Vec::new());
        composer.register(ListKind::DirGenerators, "a.com/app/generator/site_map", "bud/internal/site_map");

        let manifest = composer.finish();
        assert_eq!(manifest.dir_generators()[0].import.name, "site_map");
        assert_eq!(manifest.dir_generators()[0].camel, "siteMap");
    }
}
