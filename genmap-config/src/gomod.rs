//! Reader for the `module` directive of a `go.mod` file.

use std::path::Path;

use miette::NamedSource;

use crate::{Error, Result};

/// File name of the module definition at the project root.
pub const GO_MOD_FILE: &str = "go.mod";

/// The parts of a `go.mod` file the loader cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoMod {
    module: String,
}

impl GoMod {
    /// Read `go.mod` from a project root.
    pub fn find(root: &Path) -> Result<Self> {
        let path = root.join(GO_MOD_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Parse the contents of a `go.mod` file.
    ///
    /// Accepts `module path`, a quoted path, and the block form
    /// `module ( path )` on one line or spread over several.
    pub fn parse(src: &str, filename: &str) -> Result<Self> {
        let mut lines = src.lines().map(strip_comment).map(str::trim);
        while let Some(line) = lines.next() {
            let Some(rest) = line.strip_prefix("module") else {
                continue;
            };
            let module = if let Some(block) = rest.trim_start().strip_prefix('(') {
                let block = block.trim();
                let inline = block.strip_suffix(')').unwrap_or(block).trim();
                if inline.is_empty() {
                    lines
                        .by_ref()
                        .find(|line| !line.is_empty())
                        .filter(|line| *line != ")")
                        .unwrap_or_default()
                } else {
                    inline
                }
            } else if rest.starts_with(char::is_whitespace) {
                rest.trim()
            } else {
                // `modulefoo` is not a directive
                continue;
            };

            let module = module.trim_matches('"').trim_matches('`');
            if !module.is_empty() {
                return Ok(Self {
                    module: module.to_string(),
                });
            }
        }

        Err(Box::new(Error::MissingModuleDirective {
            src: NamedSource::new(filename, src.to_string()),
        }))
    }

    /// The module path declared by the directive.
    pub fn module(&self) -> &str {
        &self.module
    }
}

fn strip_comment(line: &str) -> &str {
    match line.find("//") {
        Some(idx) => &line[..idx],
        None => line,
    }
}
