//! The optional `genmap.toml` project file.

use std::{path::Path, str::FromStr};

use serde::Deserialize;

use crate::{Error, GoMod, Result};

/// File name of the project configuration at the project root.
pub const CONFIG_FILE: &str = "genmap.toml";

/// Module that owns the built-in generators and the driver's runtime packages.
pub const DEFAULT_FRAMEWORK_MODULE: &str = "github.com/livebud/bud";

/// Root of `genmap.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project settings
    #[serde(default)]
    pub project: ProjectConfig,

    /// Framework settings
    #[serde(default)]
    pub framework: FrameworkConfig,
}

/// `[project]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Overrides the module path read from `go.mod`.
    pub module: Option<String>,
}

/// `[framework]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrameworkConfig {
    /// Import prefix of the built-in generators.
    #[serde(default = "default_framework_module")]
    pub module: String,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            module: default_framework_module(),
        }
    }
}

fn default_framework_module() -> String {
    DEFAULT_FRAMEWORK_MODULE.to_string()
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

impl Config {
    /// Load `genmap.toml` from a project root, falling back to defaults when absent.
    pub fn discover(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse a `genmap.toml` file from the given path
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse a `genmap.toml` from a string with a custom filename for error reporting
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::parse(e, content, filename))?;
        config.validate(content, filename)?;
        Ok(config)
    }

    /// Resolve the project's module path.
    ///
    /// The `[project] module` override wins; otherwise the `go.mod` directive
    /// at `root` is used.
    pub fn project_module(&self, root: &Path) -> Result<String> {
        if let Some(module) = &self.project.module {
            return Ok(module.clone());
        }
        if !root.join(crate::GO_MOD_FILE).is_file() {
            return Err(Box::new(Error::MissingModule {
                root: root.to_path_buf(),
            }));
        }
        Ok(GoMod::find(root)?.module().to_string())
    }

    fn validate(&self, src: &str, filename: &str) -> Result<()> {
        if let Some(module) = &self.project.module {
            validate_module(module, "project", src, filename)?;
        }
        validate_module(&self.framework.module, "framework", src, filename)
    }
}

fn validate_module(module: &str, table: &str, src: &str, filename: &str) -> Result<()> {
    let reason = if module.trim().is_empty() {
        Some("must not be empty")
    } else if module.chars().any(char::is_whitespace) {
        Some("must not contain whitespace")
    } else if module.starts_with('/') || module.ends_with('/') {
        Some("must not start or end with '/'")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(Error::validation(
            format!("[{}] module {}", table, reason),
            src,
            filename,
            module,
        )),
        None => Ok(()),
    }
}
