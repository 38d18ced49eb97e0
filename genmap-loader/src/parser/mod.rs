//! Structural description of source packages.
//!
//! The loader only needs to know which named types a package declares and
//! which methods those types carry. [`PackageParser`] is the seam; [`GoParser`]
//! is the implementation used for Go generator packages.

mod go;

use std::collections::{BTreeMap, BTreeSet};

use miette::Diagnostic;
use thiserror::Error;

use crate::tree::SourceTree;

pub use go::{GoParser, is_source_file};

/// Parses a directory of a [`SourceTree`] into a [`Package`].
pub trait PackageParser {
    /// Parse the package whose files live directly inside `dir`.
    fn parse(&self, tree: &dyn SourceTree, dir: &str) -> Result<Package, ParseError>;
}

/// Why a package could not be parsed.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("unable to read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no source files in '{dir}'")]
    NoSourceFiles { dir: String },

    #[error("unable to load the Go grammar: {message}")]
    Grammar { message: String },

    #[error("{path}: parser gave up before the end of the file")]
    Incomplete { path: String },

    #[error("{path}:{line}:{column}: {what}")]
    Syntax {
        path: String,
        line: usize,
        column: usize,
        what: String,
    },

    #[error("{path}: expected 'package' clause")]
    MissingPackage { path: String },

    #[error("found packages {first} ({first_path}) and {second} ({second_path})")]
    PackageMismatch {
        first: String,
        first_path: String,
        second: String,
        second_path: String,
    },
}

/// The kind of a named type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// `type X struct { ... }`
    Struct,
    /// Any other named type.
    Other,
}

/// A named type and the methods declared on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    name: String,
    kind: TypeKind,
    methods: BTreeSet<String>,
}

impl TypeDecl {
    /// Create a declaration with no methods.
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            methods: BTreeSet::new(),
        }
    }

    /// Add a method, returning the declaration.
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods.insert(name.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn is_struct(&self) -> bool {
        self.kind == TypeKind::Struct
    }

    /// Check if the type declares a method with this exact name.
    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains(name)
    }

    /// Method names in lexicographic order.
    pub fn methods(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(String::as_str)
    }
}

/// A parsed package: its name and the types it declares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    dir: String,
    types: BTreeMap<String, TypeDecl>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: impl Into<String>, dir: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            types: BTreeMap::new(),
        }
    }

    /// Add a type, returning the package.
    pub fn with_type(mut self, decl: TypeDecl) -> Self {
        self.types.insert(decl.name.clone(), decl);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &str {
        &self.dir
    }

    /// Look up a named type declared in the package.
    pub fn find_type(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Types in lexicographic order.
    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }
}
