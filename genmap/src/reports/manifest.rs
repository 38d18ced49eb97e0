//! Manifest command report.

use std::path::PathBuf;

use genmap_loader::{ListKind, Manifest};

use super::output::{Output, Report};

/// Report data from loading a project.
#[derive(Debug)]
pub struct ManifestReport {
    /// Project directory.
    pub root: PathBuf,
    /// Effective project module.
    pub module: String,
    /// Framework module the built-ins come from.
    pub framework: String,
    pub manifest: Manifest,
}

impl Report for ManifestReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("project", &self.root.display().to_string());
        out.key_value("module", &self.module);
        out.key_value("framework", &self.framework);

        for kind in ListKind::ALL {
            out.newline();
            let entries = self.manifest.list(kind);
            if entries.is_empty() {
                out.key_value(kind.label(), "none");
                continue;
            }
            out.section(kind.label());
            for entry in entries {
                out.list_item(&format!("{} ({})", entry.path, entry.import.name));
            }
        }

        out.newline();
        out.section("imports");
        for import in self.manifest.imports() {
            out.list_item(&format!("{} \"{}\"", import.name, import.path));
        }
    }
}

#[cfg(test)]
mod tests {
    use genmap_loader::{GoModule, GoParser, Loader, MemoryTree};

    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_render() {
        let tree = MemoryTree::new().with_file(
            "generator/sitemap/sitemap.go",
            "package sitemap\n\ntype Generator struct{}\n\nfunc (g *Generator) Generate() {}\n",
        );
        let module = GoModule::new("github.com/acme/app");
        let manifest = Loader::new(&tree, &GoParser, &module).load().unwrap();
        let report = ManifestReport {
            root: PathBuf::from("/src/app"),
            module: "github.com/acme/app".to_string(),
            framework: "github.com/livebud/bud".to_string(),
            manifest,
        };

        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(&out.lines[..3], &[
            "project: /src/app",
            "module: github.com/acme/app",
            "framework: github.com/livebud/bud",
        ]);
        assert!(out.lines.contains(&"file generators:".to_string()));
        assert!(out.lines.contains(&"  bud/cmd/app/main.go (app)".to_string()));
        assert!(out.lines.contains(&"  bud/internal/sitemap (sitemap)".to_string()));
        assert!(out.lines.contains(&"directory servers: none".to_string()));
        assert_eq!(
            out.lines.last().map(String::as_str),
            Some("  log \"github.com/livebud/bud/package/log\"")
        );
    }
}
