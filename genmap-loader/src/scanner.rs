//! Candidate directory discovery.
//!
//! Two search patterns locate generator packages:
//! - `generator/**.go` - user generators, at any depth
//! - `bud/internal/generator/*/*.go` - framework-internal generators, one level deep
//!
//! Files under `generator/generator/` are reserved for the generator
//! mechanism itself and never yield a candidate.

use std::collections::BTreeSet;

use genmap_core::path;

use crate::{Error, Result, parser::is_source_file, tree::SourceTree};

/// Root of user-defined generators.
pub const USER_GENERATOR_ROOT: &str = "generator";

/// Root of framework-internal generators.
pub const INTERNAL_GENERATOR_ROOT: &str = "bud/internal/generator";

/// Prefix reserved for the generator mechanism's own packages.
pub const RESERVED_PREFIX: &str = "generator/generator/";

#[derive(Debug, Clone, Copy)]
enum Depth {
    /// Any number of directories below the root.
    Any,
    /// Exactly this many directories below the root.
    Exactly(usize),
}

#[derive(Debug, Clone, Copy)]
struct SearchPattern {
    root: &'static str,
    depth: Depth,
}

const SEARCH_PATTERNS: [SearchPattern; 2] = [
    SearchPattern {
        root: USER_GENERATOR_ROOT,
        depth: Depth::Any,
    },
    SearchPattern {
        root: INTERNAL_GENERATOR_ROOT,
        depth: Depth::Exactly(1),
    },
];

impl SearchPattern {
    fn matches(&self, file: &str) -> bool {
        let Some(rest) = file
            .strip_prefix(self.root)
            .and_then(|rest| rest.strip_prefix('/'))
        else {
            return false;
        };
        match self.depth {
            Depth::Any => true,
            Depth::Exactly(n) => rest.matches('/').count() == n,
        }
    }
}

/// Check if a path falls under the reserved generator namespace.
pub fn is_reserved(file: &str) -> bool {
    file.starts_with(RESERVED_PREFIX)
}

/// Find every candidate generator directory, in lexicographic order.
///
/// A directory is a candidate when it holds at least one source file matched
/// by a search pattern outside the reserved namespace. Each directory is
/// returned once.
pub fn scan(tree: &dyn SourceTree) -> Result<Vec<String>> {
    let mut dirs = BTreeSet::new();

    for pattern in &SEARCH_PATTERNS {
        let files = tree
            .files_under(pattern.root)
            .map_err(|source| Error::scan(pattern.root, source))?;

        dirs.extend(
            files
                .iter()
                .filter(|file| pattern.matches(file) && is_source_file(file) && !is_reserved(file))
                .map(|file| path::dir_of(file)),
        );
    }

    Ok(dirs.into_iter().collect())
}

/// The identity of a candidate: its directory with the generator root removed.
///
/// ```
/// use genmap_loader::scanner::identity_key;
///
/// assert_eq!(identity_key("generator/sitemap"), "sitemap");
/// assert_eq!(identity_key("bud/internal/generator/tailwind"), "tailwind");
/// ```
pub fn identity_key(dir: &str) -> &str {
    let key = path::strip_prefix(dir, "bud/internal/");
    path::strip_prefix(key, "generator/")
}
