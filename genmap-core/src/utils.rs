//! Identifier casing helpers.

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "view_dom" -> "viewDom").
///
/// Leading underscores survive so that names like `_3d` stay valid identifiers.
pub fn to_camel_case(s: &str) -> String {
    let trimmed = s.trim_start_matches('_');
    let leading = &s[..s.len() - trimmed.len()];

    let pascal = to_pascal_case(trimmed);
    let mut chars = pascal.chars();
    let camel: String = match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    };
    format!("{}{}", leading, camel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("tailwind-css"), "TailwindCss");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("sitemap"), "sitemap");
        assert_eq!(to_camel_case("view_dom"), "viewDom");
        assert_eq!(to_camel_case("HelloWorld"), "helloWorld");
        assert_eq!(to_camel_case("view1"), "view1");
        assert_eq!(to_camel_case("_3d"), "_3d");
        assert_eq!(to_camel_case(""), "");
    }
}
