//! Capability detection for candidate packages.
//!
//! A package is a generator when it declares a `Generator` struct. What the
//! generator can do is read once from its method set and carried as
//! [`Capabilities`] from then on.

use bitflags::bitflags;
use genmap_core::path;
use tracing::debug;

use crate::{
    Error, Result,
    manifest::ListKind,
    parser::PackageParser,
    tree::SourceTree,
};

/// Name of the type every generator package must declare.
pub const GENERATOR_TYPE: &str = "Generator";

bitflags! {
    /// The set of capabilities a generator exposes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Capabilities: u8 {
        const GENERATE = 1;
        const SERVE = 1 << 1;
        const GENERATE_CMD = 1 << 2;
        const GENERATE_PKG = 1 << 3;
    }
}

/// One role a generator can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Generate a directory into `bud/internal/<key>`.
    Generate,
    /// Serve files from `bud/internal/<key>`.
    Serve,
    /// Generate a directory into `bud/cmd/<key>`.
    GenerateCmd,
    /// Generate a directory into `bud/pkg/<key>`.
    GeneratePkg,
}

impl Capability {
    /// All capabilities, in registration order.
    pub const ALL: [Capability; 4] = [
        Capability::Generate,
        Capability::Serve,
        Capability::GenerateCmd,
        Capability::GeneratePkg,
    ];

    /// The method a `Generator` declares to expose this capability.
    pub fn method_name(self) -> &'static str {
        match self {
            Capability::Generate => "Generate",
            Capability::Serve => "Serve",
            Capability::GenerateCmd => "GenerateCmd",
            Capability::GeneratePkg => "GeneratePkg",
        }
    }

    pub fn flag(self) -> Capabilities {
        match self {
            Capability::Generate => Capabilities::GENERATE,
            Capability::Serve => Capabilities::SERVE,
            Capability::GenerateCmd => Capabilities::GENERATE_CMD,
            Capability::GeneratePkg => Capabilities::GENERATE_PKG,
        }
    }

    /// The manifest list entries with this capability land in.
    pub fn list(self) -> ListKind {
        match self {
            Capability::Serve => ListKind::DirServers,
            _ => ListKind::DirGenerators,
        }
    }

    /// Output path for a generator identified by `key`.
    ///
    /// ```
    /// use genmap_loader::Capability;
    ///
    /// assert_eq!(Capability::Generate.output_path("sitemap"), "bud/internal/sitemap");
    /// assert_eq!(Capability::GenerateCmd.output_path("tools/gen"), "bud/cmd/tools/gen");
    /// ```
    pub fn output_path(self, key: &str) -> String {
        let root = match self {
            Capability::Generate | Capability::Serve => "internal",
            Capability::GenerateCmd => "cmd",
            Capability::GeneratePkg => "pkg",
        };
        path::join(&["bud", root, key])
    }
}

impl Capabilities {
    /// Individual capabilities in registration order.
    pub fn capabilities(self) -> impl Iterator<Item = Capability> {
        Capability::ALL
            .into_iter()
            .filter(move |capability| self.contains(capability.flag()))
    }
}

/// Classifies candidate directories using a [`PackageParser`].
pub struct Inspector<'a> {
    parser: &'a dyn PackageParser,
    tree: &'a dyn SourceTree,
}

impl<'a> Inspector<'a> {
    pub fn new(parser: &'a dyn PackageParser, tree: &'a dyn SourceTree) -> Self {
        Self { parser, tree }
    }

    /// Inspect a candidate directory.
    ///
    /// Returns `Ok(None)` when the package has no `Generator` struct. Parse
    /// failures are errors: a broken candidate stops the load.
    pub fn inspect(&self, dir: &str) -> Result<Option<Capabilities>> {
        let pkg = self
            .parser
            .parse(self.tree, dir)
            .map_err(|source| Error::parse(dir, source))?;

        let Some(generator) = pkg.find_type(GENERATOR_TYPE).filter(|decl| decl.is_struct()) else {
            debug!(dir, "skipping package because there's no Generator struct");
            return Ok(None);
        };

        let capabilities = Capability::ALL
            .into_iter()
            .filter(|capability| generator.has_method(capability.method_name()))
            .fold(Capabilities::empty(), |acc, capability| acc | capability.flag());
        Ok(Some(capabilities))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parser::GoParser, tree::MemoryTree};

    fn inspect(src: &str) -> Result<Option<Capabilities>> {
        let tree = MemoryTree::new().with_file("generator/gen/gen.go", src);
        Inspector::new(&GoParser, &tree).inspect("generator/gen")
    }

    #[test]
    fn test_no_generator_is_skipped() {
        assert_eq!(inspect("package gen\n\ntype Helper struct{}\n").unwrap(), None);
    }

    #[test]
    fn test_generator_must_be_struct() {
        let src = "package gen\n\ntype Generator int\n\nfunc (Generator) Generate() {}\n";
        assert_eq!(inspect(src).unwrap(), None);
    }

    #[test]
    fn test_multiple_capabilities() {
        let src = "package gen\n\ntype Generator struct{}\n\nfunc (g *Generator) Serve() {}\nfunc (g *Generator) GeneratePkg() {}\nfunc (g *Generator) Other() {}\n";
        let caps = inspect(src).unwrap().unwrap();

        assert_eq!(caps, Capabilities::SERVE | Capabilities::GENERATE_PKG);
        assert_eq!(
            caps.capabilities().collect::<Vec<_>>(),
            vec![Capability::Serve, Capability::GeneratePkg]
        );
    }

    #[test]
    fn test_generator_without_capabilities() {
        let caps = inspect("package gen\n\ntype Generator struct{}\n").unwrap().unwrap();
        assert!(caps.is_empty());
    }

    #[test]
    fn test_parse_failure_is_error() {
        let err = inspect("package gen\n\ntype Generator struct {\n").unwrap_err();
        assert!(matches!(*err, Error::Parse { ref dir, .. } if dir == "generator/gen"));
    }

    #[test]
    fn test_capability_lists() {
        assert_eq!(Capability::Generate.list(), ListKind::DirGenerators);
        assert_eq!(Capability::Serve.list(), ListKind::DirServers);
        assert_eq!(Capability::GenerateCmd.list(), ListKind::DirGenerators);
        assert_eq!(Capability::GeneratePkg.output_path("db"), "bud/pkg/db");
        assert_eq!(Capability::Serve.output_path("assets"), "bud/internal/assets");
    }
}
