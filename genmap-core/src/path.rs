//! POSIX path helpers for project-relative paths.
//!
//! These mirror the semantics of slash-separated path manipulation rather
//! than [`std::path`], which follows the host platform's separator.

use std::path::{Component, Path};

/// Lexically clean a slash-separated path.
///
/// Empty and `.` segments are dropped and `..` consumes the previous segment
/// where one exists. An empty result becomes `"."`.
///
/// ```
/// use genmap_core::path::clean;
///
/// assert_eq!(clean("bud//internal/./web/"), "bud/internal/web");
/// assert_eq!(clean("a/b/../c"), "a/c");
/// assert_eq!(clean(""), ".");
/// ```
pub fn clean(path: &str) -> String {
    let rooted = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{}", joined),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Join path segments with `/` and clean the result.
pub fn join(segments: &[&str]) -> String {
    let non_empty: Vec<&str> = segments.iter().copied().filter(|s| !s.is_empty()).collect();
    clean(&non_empty.join("/"))
}

/// Remove `prefix` from the start of `path` if present.
pub fn strip_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

/// The directory portion of a path, or `"."` when there is none.
pub fn dir_of(path: &str) -> String {
    match path.rfind('/') {
        Some(idx) => clean(&path[..idx]),
        None => ".".to_string(),
    }
}

/// The final segment of a path.
pub fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Convert a host-relative path into a slash-separated string.
///
/// Root and prefix components are dropped, so the result is always relative.
pub fn to_slash(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect();
    clean(&segments.join("/"))
}
