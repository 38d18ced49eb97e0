//! Generators the framework always installs.
//!
//! Built-ins are not inspected: their presence and output paths are fixed by
//! convention. They register before any discovered generator, so a user
//! generator can never shadow one.

use genmap_config::{Config, DEFAULT_FRAMEWORK_MODULE};
use genmap_core::path;

/// (package within the framework module, output path)
const FILE_GENERATORS: &[(&str, &str)] = &[
    ("framework/app", "bud/cmd/app/main.go"),
    ("framework/web", "bud/internal/web/web.go"),
    ("framework/controller", "bud/internal/web/controller/controller.go"),
    ("framework/view", "bud/internal/web/view/view.go"),
    ("framework/public", "bud/internal/web/public/public.go"),
    ("framework/view/ssr", "bud/view/_ssr.js"),
];

const FILE_SERVERS: &[(&str, &str)] = &[
    ("framework/view/dom", "bud/view"),
    ("framework/view/nodemodules", "bud/node_modules"),
];

/// (alias, package, standard library)
const RUNTIME_IMPORTS: &[(&str, &str, bool)] = &[
    ("fs", "io/fs", true),
    ("genfs", "package/genfs", false),
    ("gomod", "package/gomod", false),
    ("log", "package/log", false),
];

/// A built-in generator: an import and the path it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinGenerator {
    pub import: String,
    pub path: &'static str,
}

/// An import the generated driver always needs, under a fixed alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeImport {
    pub name: &'static str,
    pub path: String,
}

/// The built-in generator table for a framework module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltinTable {
    framework: String,
}

impl Default for BuiltinTable {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMEWORK_MODULE)
    }
}

impl BuiltinTable {
    /// Create a table whose imports live under `framework`.
    pub fn new(framework: impl Into<String>) -> Self {
        Self {
            framework: framework.into(),
        }
    }

    /// Create the table configured by `[framework] module`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.framework.module.clone())
    }

    /// File generators, in table order.
    pub fn file_generators(&self) -> Vec<BuiltinGenerator> {
        self.expand(FILE_GENERATORS)
    }

    /// File servers, in table order.
    pub fn file_servers(&self) -> Vec<BuiltinGenerator> {
        self.expand(FILE_SERVERS)
    }

    /// Runtime support imports, in declaration order.
    pub fn runtime_imports(&self) -> Vec<RuntimeImport> {
        RUNTIME_IMPORTS
            .iter()
            .map(|&(name, package, std)| RuntimeImport {
                name,
                path: if std {
                    package.to_string()
                } else {
                    self.import(package)
                },
            })
            .collect()
    }

    fn expand(&self, entries: &[(&str, &'static str)]) -> Vec<BuiltinGenerator> {
        entries
            .iter()
            .map(|&(package, path)| BuiltinGenerator {
                import: self.import(package),
                path,
            })
            .collect()
    }

    fn import(&self, package: &str) -> String {
        format!("{}/{}", self.framework.trim_end_matches('/'), path::clean(package))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = BuiltinTable::default();
        let generators = table.file_generators();

        assert_eq!(generators.len(), 6);
        assert_eq!(generators[0].import, "github.com/livebud/bud/framework/app");
        assert_eq!(generators[0].path, "bud/cmd/app/main.go");
        assert_eq!(generators[5].path, "bud/view/_ssr.js");

        let servers = table.file_servers();
        assert_eq!(
            servers.iter().map(|s| s.path).collect::<Vec<_>>(),
            vec!["bud/view", "bud/node_modules"]
        );
    }

    #[test]
    fn test_custom_framework() {
        let table = BuiltinTable::new("example.com/fork/bud/");
        assert_eq!(
            table.file_servers()[0].import,
            "example.com/fork/bud/framework/view/dom"
        );
    }

    #[test]
    fn test_runtime_imports() {
        let imports = BuiltinTable::default().runtime_imports();
        let pairs: Vec<_> = imports.iter().map(|i| (i.name, i.path.as_str())).collect();

        assert_eq!(
            pairs,
            vec![
                ("fs", "io/fs"),
                ("genfs", "github.com/livebud/bud/package/genfs"),
                ("gomod", "github.com/livebud/bud/package/gomod"),
                ("log", "github.com/livebud/bud/package/log"),
            ]
        );
    }
}
