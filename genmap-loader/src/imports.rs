//! Collision-free import aliases.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;

/// An import the driver code declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Import {
    /// Local alias.
    pub name: String,
    /// Fully-qualified import path.
    pub path: String,
}

const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Tracks required imports and hands out unique aliases.
///
/// Aliases are allocated once per import path and kept in allocation order
/// for deterministic output.
///
/// # Example
///
/// ```
/// use genmap_loader::ImportSet;
///
/// let mut imports = ImportSet::new();
/// assert_eq!(imports.add("github.com/acme/app/generator/view"), "view");
/// assert_eq!(imports.add("github.com/livebud/bud/framework/view"), "view1");
/// assert_eq!(imports.add("github.com/acme/app/generator/view"), "view");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportSet {
    /// Import path -> alias, in allocation order
    by_path: IndexMap<String, String>,
    /// Aliases already handed out
    taken: HashSet<String>,
    /// Aliases only `add_named` may hand out
    reserved: HashSet<String>,
}

impl ImportSet {
    /// Create a new empty import set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold back an alias for a later [`add_named`](Self::add_named) call.
    pub fn reserve(&mut self, name: &str) {
        self.reserved.insert(name.to_string());
    }

    /// Get the alias for an import path, allocating one on first use.
    pub fn add(&mut self, path: &str) -> String {
        if let Some(name) = self.by_path.get(path) {
            return name.clone();
        }
        let name = self.unique(&assumed_name(path), false);
        self.insert(name, path)
    }

    /// Get the alias for an import path, preferring `name` on first use.
    ///
    /// A reserved `name` is granted here. If another import already holds
    /// it, a numbered variant is used instead.
    pub fn add_named(&mut self, name: &str, path: &str) -> String {
        if let Some(existing) = self.by_path.get(path) {
            return existing.clone();
        }
        let name = self.unique(name, true);
        self.insert(name, path)
    }

    /// The alias allocated for an import path, if any.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.by_path.get(path).map(String::as_str)
    }

    /// All imports in allocation order.
    pub fn list(&self) -> Vec<Import> {
        self.by_path
            .iter()
            .map(|(path, name)| Import {
                name: name.clone(),
                path: path.clone(),
            })
            .collect()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.by_path.len()
    }

    /// Check if no imports were added.
    pub fn is_empty(&self) -> bool {
        self.by_path.is_empty()
    }

    fn insert(&mut self, name: String, path: &str) -> String {
        self.taken.insert(name.clone());
        self.by_path.insert(path.to_string(), name.clone());
        name
    }

    fn unique(&self, base: &str, allow_reserved: bool) -> String {
        if self.is_available(base, allow_reserved) {
            return base.to_string();
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}{}", base, n);
            if self.is_available(&candidate, allow_reserved) {
                return candidate;
            }
            n += 1;
        }
    }

    fn is_available(&self, name: &str, allow_reserved: bool) -> bool {
        !self.taken.contains(name)
            && (allow_reserved || !self.reserved.contains(name))
            && !GO_KEYWORDS.contains(&name)
    }
}

/// Derive an alias from an import path.
///
/// Uses the last path segment, skipping a trailing major version (`/v2`) and
/// trimming `go-` prefixes and `-go`/`.go` suffixes. Anything that is not an
/// ASCII letter, digit or underscore is dropped.
///
/// ```
/// use genmap_loader::imports::assumed_name;
///
/// assert_eq!(assumed_name("github.com/livebud/bud/framework/view/ssr"), "ssr");
/// assert_eq!(assumed_name("github.com/acme/go-yaml/v3"), "yaml");
/// assert_eq!(assumed_name("github.com/acme/app/generator/tailwind-css"), "tailwindcss");
/// ```
pub fn assumed_name(path: &str) -> String {
    let mut segments = path.rsplit('/').filter(|segment| !segment.is_empty());
    let mut last = segments.next().unwrap_or_default();
    if is_major_version(last) {
        if let Some(prev) = segments.next() {
            last = prev;
        }
    }

    let last = last.strip_prefix("go-").unwrap_or(last);
    let last = last
        .strip_suffix("-go")
        .or_else(|| last.strip_suffix(".go"))
        .unwrap_or(last);

    let mut name: String = last
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .map(|c| c.to_ascii_lowercase())
        .collect();
    if name.is_empty() {
        name.push_str("pkg");
    } else if name.starts_with(|c: char| c.is_ascii_digit()) {
        name.insert(0, '_');
    }
    name
}

fn is_major_version(segment: &str) -> bool {
    segment.len() > 1
        && segment.starts_with('v')
        && segment[1..].chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut imports = ImportSet::new();
        let first = imports.add("github.com/acme/app/generator/sitemap");
        let second = imports.add("github.com/acme/app/generator/sitemap");

        assert_eq!(first, "sitemap");
        assert_eq!(first, second);
        assert_eq!(imports.len(), 1);
    }

    #[test]
    fn test_collisions_get_numbered() {
        let mut imports = ImportSet::new();
        assert_eq!(imports.add("a.com/x/view"), "view");
        assert_eq!(imports.add("b.com/y/view"), "view1");
        assert_eq!(imports.add("c.com/z/view"), "view2");
        assert_eq!(imports.add("d.com/view1"), "view11");
    }

    #[test]
    fn test_keywords_are_taken() {
        let mut imports = ImportSet::new();
        assert_eq!(imports.add("github.com/acme/app/generator/type"), "type1");
        assert_eq!(imports.add("github.com/acme/app/generator/go"), "go1");
    }

    #[test]
    fn test_reserved_names() {
        let mut imports = ImportSet::new();
        imports.reserve("log");

        assert_eq!(imports.add("github.com/acme/app/generator/log"), "log1");
        assert_eq!(imports.add_named("log", "github.com/livebud/bud/package/log"), "log");
    }

    #[test]
    fn test_add_named_collision() {
        let mut imports = ImportSet::new();
        imports.add("github.com/acme/app/generator/genfs");

        assert_eq!(
            imports.add_named("genfs", "github.com/livebud/bud/package/genfs"),
            "genfs1"
        );
    }

    #[test]
    fn test_list_in_allocation_order() {
        let mut imports = ImportSet::new();
        imports.add("z.com/zeta");
        imports.add("a.com/alpha");
        imports.add("z.com/zeta");
        imports.add_named("fs", "io/fs");

        let names: Vec<_> = imports.list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["zeta", "alpha", "fs"]);
        assert_eq!(imports.get("io/fs"), Some("fs"));
    }

    #[test]
    fn test_assumed_name_edge_cases() {
        assert_eq!(assumed_name("gopkg.in/yaml.go"), "yaml");
        assert_eq!(assumed_name("github.com/acme/3d"), "_3d");
        assert_eq!(assumed_name("github.com/acme/v2"), "acme");
        assert_eq!(assumed_name("v2"), "v2");
        assert_eq!(assumed_name("github.com/acme/Sitemap"), "sitemap");
        assert_eq!(assumed_name("github.com/acme/---"), "pkg");
        assert_eq!(assumed_name(""), "pkg");
    }
}
