// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Generator discovery and manifest composition.
//!
//! Given a project tree, the loader finds every generator package (the
//! framework's built-ins plus user packages under `generator/` and
//! `bud/internal/generator/`), works out which capabilities each one offers,
//! and composes a deterministic [`Manifest`] for the driver renderer.
//!
//! # Module Organization
//!
//! - [`tree`] - Read-only view of the project files ([`SourceTree`])
//! - [`parser`] - Structural package parsing ([`PackageParser`], [`GoParser`])
//! - [`inspector`] - Capability detection ([`Capability`], [`Capabilities`])
//! - [`scanner`] - Candidate directory discovery
//! - [`imports`] - Collision-free import aliases ([`ImportSet`])
//! - [`builtin`] - The framework's fixed generators ([`BuiltinTable`])
//! - [`composer`] - Merge, dedup and ordering ([`Composer`])
//! - [`manifest`] - The composed result ([`Manifest`])
//!
//! # Example
//!
//! ```
//! use genmap_loader::{GoModule, GoParser, Loader, MemoryTree};
//!
//! let tree = MemoryTree::new().with_file(
//!     "generator/sitemap/sitemap.go",
//!     "package sitemap\n\ntype Generator struct{}\n\nfunc (g *Generator) Generate() {}\n",
//! );
//! let module = GoModule::new("github.com/acme/app");
//!
//! let manifest = Loader::new(&tree, &GoParser, &module).load().unwrap();
//! assert_eq!(manifest.dir_generators()[0].path, "bud/internal/sitemap");
//! ```

pub mod builtin;
pub mod composer;
mod error;
pub mod imports;
pub mod inspector;
mod loader;
pub mod manifest;
pub mod parser;
mod resolver;
pub mod scanner;
pub mod tree;

pub use builtin::{BuiltinGenerator, BuiltinTable, RuntimeImport};
pub use composer::Composer;
pub use error::{Error, Result};
pub use imports::{Import, ImportSet};
pub use inspector::{Capabilities, Capability, Inspector};
pub use loader::Loader;
pub use manifest::{GeneratorRef, ListKind, Manifest};
pub use parser::{GoParser, Package, PackageParser, ParseError, TypeDecl};
pub use resolver::{GoModule, ModuleResolver};
pub use tree::{DiskTree, MemoryTree, SourceTree};
