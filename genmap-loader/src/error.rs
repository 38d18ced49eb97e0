use miette::Diagnostic;
use thiserror::Error;

use crate::parser::ParseError;

/// Result type for loader operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// Prefix added once by [`Loader::load`](crate::Loader::load).
    #[error("generator: {inner}")]
    #[diagnostic(code(genmap::generator))]
    Load { inner: Box<Error> },

    #[error("unable to scan '{root}': {source}")]
    #[diagnostic(code(genmap::scan))]
    Scan {
        root: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse '{dir}': {source}")]
    #[diagnostic(
        code(genmap::parse),
        help("fix the package or move it out of the generator directories")
    )]
    Parse {
        dir: String,
        #[source]
        source: ParseError,
    },
}

impl Error {
    /// Create a scan error for a search root.
    pub fn scan(root: impl Into<String>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Scan {
            root: root.into(),
            source,
        })
    }

    /// Create a parse error for a candidate directory.
    pub fn parse(dir: impl Into<String>, source: ParseError) -> Box<Self> {
        Box::new(Error::Parse {
            dir: dir.into(),
            source,
        })
    }

    /// Wrap an error with the loader's stage prefix.
    pub fn load(inner: Box<Error>) -> Box<Self> {
        Box::new(Error::Load { inner })
    }
}
