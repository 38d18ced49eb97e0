//! The load operation: scan, inspect, compose.

use tracing::debug;

use crate::{
    Error, Result,
    builtin::BuiltinTable,
    composer::Composer,
    inspector::Inspector,
    manifest::{ListKind, Manifest},
    parser::PackageParser,
    resolver::ModuleResolver,
    scanner,
    tree::SourceTree,
};

/// Loads the generator manifest for a project.
///
/// Each call to [`load`](Self::load) starts from scratch: the claimed paths
/// and import aliases live only for that call, so two loads of an unchanged
/// tree produce identical manifests.
pub struct Loader<'a> {
    tree: &'a dyn SourceTree,
    parser: &'a dyn PackageParser,
    resolver: &'a dyn ModuleResolver,
    builtins: BuiltinTable,
}

impl<'a> Loader<'a> {
    /// Create a loader with the default built-in table.
    pub fn new(
        tree: &'a dyn SourceTree,
        parser: &'a dyn PackageParser,
        resolver: &'a dyn ModuleResolver,
    ) -> Self {
        Self {
            tree,
            parser,
            resolver,
            builtins: BuiltinTable::default(),
        }
    }

    /// Use a different built-in table.
    pub fn with_builtins(mut self, builtins: BuiltinTable) -> Self {
        self.builtins = builtins;
        self
    }

    /// Load the manifest.
    ///
    /// # Errors
    ///
    /// Fails when the tree cannot be scanned or a candidate package cannot be
    /// parsed. Errors carry a single `generator:` prefix.
    pub fn load(&self) -> Result<Manifest> {
        self.compose().map_err(Error::load)
    }

    fn compose(&self) -> Result<Manifest> {
        let candidates = scanner::scan(self.tree)?;
        let mut composer = Composer::new(self.builtins.runtime_imports());

        for generator in self.builtins.file_generators() {
            composer.register(ListKind::FileGenerators, &generator.import, generator.path);
        }
        for server in self.builtins.file_servers() {
            composer.register(ListKind::FileServers, &server.import, server.path);
        }

        let inspector = Inspector::new(self.parser, self.tree);
        for dir in &candidates {
            let Some(capabilities) = inspector.inspect(dir)? else {
                continue;
            };

            let import = self.resolver.import_path(dir);
            let key = scanner::identity_key(dir);
            for capability in capabilities.capabilities() {
                composer.register(capability.list(), &import, &capability.output_path(key));
            }
        }

        let manifest = composer.finish();
        debug!(
            candidates = candidates.len(),
            file_generators = manifest.file_generators().len(),
            file_servers = manifest.file_servers().len(),
            dir_generators = manifest.dir_generators().len(),
            dir_servers = manifest.dir_servers().len(),
            imports = manifest.imports().len(),
            "loaded generator manifest"
        );
        Ok(manifest)
    }
}
