use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(genmap::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse genmap.toml")]
    #[diagnostic(code(genmap::config::parse))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(genmap::config::validation))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("no module directive found")]
    #[diagnostic(
        code(genmap::config::missing_module_directive),
        help("add a line like `module github.com/acme/app` to go.mod")
    )]
    MissingModuleDirective {
        #[source_code]
        src: NamedSource<String>,
    },

    #[error("unable to determine the module path of '{root}'")]
    #[diagnostic(
        code(genmap::config::missing_module),
        help("create a go.mod or set `module` under [project] in genmap.toml")
    )]
    MissingModule { root: PathBuf },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }

    /// Create a validation error, labelling the first occurrence of `needle` if any.
    pub fn validation(
        message: impl Into<String>,
        src: &str,
        filename: &str,
        needle: &str,
    ) -> Box<Self> {
        let span = (!needle.is_empty())
            .then(|| src.find(needle))
            .flatten()
            .map(|start| SourceSpan::from((start, needle.len())));
        Box::new(Error::Validation {
            src: NamedSource::new(filename, src.to_string()),
            span,
            message: message.into(),
        })
    }
}
