//! Go package parsing on top of tree-sitter.

use std::collections::{BTreeMap, BTreeSet};

use genmap_core::path;
use tree_sitter::{Language, Node, Parser};

use super::{Package, PackageParser, ParseError, TypeDecl, TypeKind};
use crate::tree::SourceTree;

/// Check if a file is a Go source file that belongs to the package build.
///
/// Test files and files whose names start with `_` or `.` are ignored, the
/// same files the Go toolchain leaves out of a package.
pub fn is_source_file(file: &str) -> bool {
    let name = path::file_name(file);
    name.ends_with(".go")
        && !name.ends_with("_test.go")
        && !name.starts_with('_')
        && !name.starts_with('.')
}

/// A [`PackageParser`] for Go source.
///
/// Every file is parsed with the tree-sitter Go grammar and must be free of
/// syntax errors. From the syntax tree it records the package clause, named
/// type declarations (grouped, generic and aliases included) and the
/// receivers of method declarations.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoParser;

/// Declarations collected from a single file.
#[derive(Debug, Default)]
struct FileDecls {
    package: Option<String>,
    types: Vec<(String, TypeKind)>,
    /// (receiver type, method name)
    methods: Vec<(String, String)>,
}

impl PackageParser for GoParser {
    fn parse(&self, tree: &dyn SourceTree, dir: &str) -> Result<Package, ParseError> {
        let dir = path::clean(dir);
        let files: Vec<String> = tree
            .files_in(&dir)
            .map_err(|source| ParseError::Read {
                path: dir.clone(),
                source,
            })?
            .into_iter()
            .filter(|file| is_source_file(file))
            .collect();

        if files.is_empty() {
            return Err(ParseError::NoSourceFiles { dir });
        }

        let mut parser = Parser::new();
        let language: Language = tree_sitter_go::LANGUAGE.into();
        parser
            .set_language(&language)
            .map_err(|e| ParseError::Grammar {
                message: e.to_string(),
            })?;

        let mut package: Option<(String, String)> = None;
        let mut kinds: BTreeMap<String, TypeKind> = BTreeMap::new();
        let mut methods: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

        for file in &files {
            let src = tree
                .read_to_string(file)
                .map_err(|source| ParseError::Read {
                    path: file.clone(),
                    source,
                })?;
            let decls = parse_file(&mut parser, file, &src)?;

            let name = decls.package.ok_or_else(|| ParseError::MissingPackage {
                path: file.clone(),
            })?;
            match &package {
                Some((first, first_path)) if *first != name => {
                    return Err(ParseError::PackageMismatch {
                        first: first.clone(),
                        first_path: first_path.clone(),
                        second: name,
                        second_path: file.clone(),
                    });
                }
                Some(_) => {}
                None => package = Some((name, file.clone())),
            }

            for (name, kind) in decls.types {
                kinds.entry(name).or_insert(kind);
            }
            for (receiver, method) in decls.methods {
                methods.entry(receiver).or_default().insert(method);
            }
        }

        let Some((name, _)) = package else {
            return Err(ParseError::NoSourceFiles { dir });
        };

        let mut pkg = Package::new(name, dir);
        for (type_name, kind) in kinds {
            let mut decl = TypeDecl::new(type_name.clone(), kind);
            // Methods on undeclared receivers are dropped
            if let Some(names) = methods.remove(&type_name) {
                decl.methods = names;
            }
            pkg = pkg.with_type(decl);
        }
        Ok(pkg)
    }
}

fn parse_file(parser: &mut Parser, file: &str, src: &str) -> Result<FileDecls, ParseError> {
    let tree = parser
        .parse(src, None)
        .ok_or_else(|| ParseError::Incomplete {
            path: file.to_string(),
        })?;
    let root = tree.root_node();
    if root.has_error() {
        return Err(syntax_error(file, root));
    }

    let src = src.as_bytes();
    let mut decls = FileDecls::default();
    let mut cursor = root.walk();
    for node in root.named_children(&mut cursor) {
        match node.kind() {
            "package_clause" if decls.package.is_none() => {
                decls.package = node
                    .named_child(0)
                    .and_then(|name| text(name, src))
                    .map(String::from);
            }
            "type_declaration" => {
                let mut specs = node.walk();
                for spec in node.named_children(&mut specs) {
                    if let Some(decl) = type_spec(spec, src) {
                        decls.types.push(decl);
                    }
                }
            }
            "method_declaration" => {
                let receiver = node
                    .child_by_field_name("receiver")
                    .and_then(|params| receiver_type(params, src));
                let method = node
                    .child_by_field_name("name")
                    .and_then(|name| text(name, src));
                if let (Some(receiver), Some(method)) = (receiver, method) {
                    decls.methods.push((receiver.to_string(), method.to_string()));
                }
            }
            _ => {}
        }
    }

    Ok(decls)
}

fn text<'s>(node: Node<'_>, src: &'s [u8]) -> Option<&'s str> {
    node.utf8_text(src).ok()
}

/// Build the error for the first broken node below `root`.
fn syntax_error(file: &str, root: Node<'_>) -> ParseError {
    let node = first_error(root).unwrap_or(root);
    let what = if node.is_missing() {
        format!("expected '{}'", node.kind())
    } else {
        "syntax error".to_string()
    };
    let start = node.start_position();
    ParseError::Syntax {
        path: file.to_string(),
        line: start.row + 1,
        column: start.column + 1,
        what,
    }
}

fn first_error<'t>(node: Node<'t>) -> Option<Node<'t>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'t>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

/// Name and kind of a `type_spec` or `type_alias` node.
fn type_spec(spec: Node<'_>, src: &[u8]) -> Option<(String, TypeKind)> {
    if !matches!(spec.kind(), "type_spec" | "type_alias") {
        return None;
    }
    let name = text(spec.child_by_field_name("name")?, src)?;
    let kind = match spec.child_by_field_name("type") {
        Some(ty) if ty.kind() == "struct_type" => TypeKind::Struct,
        _ => TypeKind::Other,
    };
    Some((name.to_string(), kind))
}

/// The base type name of a receiver list such as `(g *Generator)` or `(b *Box[T])`.
fn receiver_type<'s>(params: Node<'_>, src: &'s [u8]) -> Option<&'s str> {
    let mut cursor = params.walk();
    let param = params
        .named_children(&mut cursor)
        .find(|node| node.kind() == "parameter_declaration")?;
    base_type_name(param.child_by_field_name("type")?, src)
}

fn base_type_name<'s>(node: Node<'_>, src: &'s [u8]) -> Option<&'s str> {
    match node.kind() {
        "type_identifier" => text(node, src),
        "pointer_type" | "parenthesized_type" => base_type_name(node.named_child(0)?, src),
        "generic_type" => base_type_name(node.child_by_field_name("type")?, src),
        _ => None,
    }
}
