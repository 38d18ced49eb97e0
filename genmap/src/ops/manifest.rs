//! Manifest operation - load a project's generators.

use std::path::{Path, PathBuf};

use genmap_config::{Config, Error};
use genmap_loader::{BuiltinTable, DiskTree, GoModule, GoParser, Loader, Manifest};
use tracing::debug;

use crate::reports::ManifestReport;

/// A project directory with its resolved configuration.
#[derive(Debug)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
    /// Effective module path of the project
    pub module: String,
}

impl Project {
    /// Resolve the project at `dir`.
    pub fn open(dir: &Path) -> genmap_config::Result<Self> {
        let root = std::fs::canonicalize(dir).map_err(|e| Error::io(dir, e))?;
        let config = Config::discover(&root)?;
        let module = config.project_module(&root)?;
        debug!(
            root = %root.display(),
            module = %module,
            framework = %config.framework.module,
            "opened project"
        );

        Ok(Self {
            root,
            config,
            module,
        })
    }

    /// Load the generator manifest from disk.
    pub fn load(&self) -> genmap_loader::Result<Manifest> {
        let tree = DiskTree::new(self.root.clone());
        let module = GoModule::new(self.module.clone());
        Loader::new(&tree, &GoParser, &module)
            .with_builtins(BuiltinTable::from_config(&self.config))
            .load()
    }
}

/// Execute the manifest operation.
pub fn manifest(project: &Project) -> genmap_loader::Result<ManifestReport> {
    let manifest = project.load()?;

    Ok(ManifestReport {
        root: project.root.clone(),
        module: project.module.clone(),
        framework: project.config.framework.module.clone(),
        manifest,
    })
}
