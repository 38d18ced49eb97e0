// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Project configuration for genmap.
//!
//! Two sources feed the loader's configuration:
//! - an optional `genmap.toml` at the project root ([`Config`])
//! - the `module` directive of the project's `go.mod` ([`GoMod`])

mod config;
mod error;
mod gomod;

pub use config::{CONFIG_FILE, Config, DEFAULT_FRAMEWORK_MODULE, FrameworkConfig, ProjectConfig};
pub use error::{Error, Result};
pub use gomod::{GO_MOD_FILE, GoMod};
