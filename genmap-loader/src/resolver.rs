use genmap_core::path;

/// Maps a project-relative directory to its fully-qualified import path.
pub trait ModuleResolver {
    fn import_path(&self, dir: &str) -> String;
}

/// Resolves imports within a Go module.
///
/// ```
/// use genmap_loader::{GoModule, ModuleResolver};
///
/// let module = GoModule::new("github.com/acme/app");
/// assert_eq!(module.import_path("generator/sitemap"), "github.com/acme/app/generator/sitemap");
/// assert_eq!(module.import_path("."), "github.com/acme/app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    path: String,
}

impl GoModule {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The module path.
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl ModuleResolver for GoModule {
    fn import_path(&self, dir: &str) -> String {
        let dir = path::clean(dir);
        if dir == "." {
            self.path.clone()
        } else {
            format!("{}/{}", self.path, dir)
        }
    }
}
