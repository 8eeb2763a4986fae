// src/extract/visitor.rs
//! Pre-order walk selecting documentable methods and constructors.

use crate::error::Result;
use crate::unit::SourceUnit;
use tree_sitter::Node;

const HIDDEN_MODIFIERS: &[&str] = &["private", "protected"];

/// Read-only view of a method or constructor declaration.
#[derive(Debug, Clone)]
pub struct Declaration<'u> {
    pub node: Node<'u>,
    pub name: Option<&'u str>,
    pub parameters: Vec<Node<'u>>,
    pub return_type: Option<Node<'u>>,
    /// Name of the class declaring this member, if it has one.
    pub enclosing_type: Option<&'u str>,
    pub modifiers: Vec<&'u str>,
}

impl<'u> Declaration<'u> {
    /// Builds the view if `node` is a method or constructor.
    #[must_use]
    pub fn from_node(unit: &'u SourceUnit, node: Node<'u>) -> Option<Self> {
        if !is_method(node) {
            return None;
        }

        let parameters = node
            .child_by_field_name("parameters")
            .map(|params| {
                let mut cursor = params.walk();
                let list: Vec<_> = params
                    .named_children(&mut cursor)
                    .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
                    .collect();
                list
            })
            .unwrap_or_default();

        Some(Self {
            node,
            name: node.child_by_field_name("name").map(|n| unit.node_text(n)),
            parameters,
            return_type: node.child_by_field_name("return_type"),
            enclosing_type: enclosing_type(unit, node),
            modifiers: modifiers(unit, node),
        })
    }

    /// Display name; a declaration without a name is the constructor.
    #[must_use]
    pub fn display_name(&self) -> &'u str {
        self.name.unwrap_or("constructor")
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.modifiers.iter().any(|m| HIDDEN_MODIFIERS.contains(m))
    }
}

/// Walks `unit` depth-first in source order and calls `on_match` for every
/// eligible declaration. Filtered-out declarations are still descended into,
/// so members nested inside them stay reachable.
///
/// # Errors
/// Propagates the first error returned by `on_match`.
pub fn walk<'u, F>(unit: &'u SourceUnit, class_name: Option<&str>, on_match: &mut F) -> Result<()>
where
    F: FnMut(Declaration<'u>) -> Result<()>,
{
    visit(unit, unit.root(), class_name, on_match)
}

fn visit<'u, F>(
    unit: &'u SourceUnit,
    node: Node<'u>,
    class_name: Option<&str>,
    on_match: &mut F,
) -> Result<()>
where
    F: FnMut(Declaration<'u>) -> Result<()>,
{
    if let Some(decl) = Declaration::from_node(unit, node) {
        if is_selected(&decl, class_name) {
            on_match(decl)?;
        }
    }

    let mut cursor = node.walk();
    let children: Vec<_> = node.children(&mut cursor).collect();
    for child in children {
        visit(unit, child, class_name, on_match)?;
    }
    Ok(())
}

fn is_selected(decl: &Declaration<'_>, class_name: Option<&str>) -> bool {
    if let Some(wanted) = class_name {
        if decl.enclosing_type != Some(wanted) {
            return false;
        }
    }
    !decl.is_hidden()
}

fn is_method(node: Node<'_>) -> bool {
    match node.kind() {
        "method_definition" | "abstract_method_signature" => true,
        // Overload signatures inside a class body.
        "method_signature" => node.parent().is_some_and(|p| p.kind() == "class_body"),
        _ => false,
    }
}

fn enclosing_type<'u>(unit: &'u SourceUnit, node: Node<'u>) -> Option<&'u str> {
    let body = node.parent().filter(|p| p.kind() == "class_body")?;
    let class = body.parent().filter(|p| {
        matches!(
            p.kind(),
            "class_declaration" | "abstract_class_declaration" | "class"
        )
    })?;
    class.child_by_field_name("name").map(|n| unit.node_text(n))
}

fn modifiers<'u>(unit: &'u SourceUnit, node: Node<'u>) -> Vec<&'u str> {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .filter(|c| {
            matches!(
                c.kind(),
                "accessibility_modifier" | "override_modifier" | "static" | "abstract" | "async" | "readonly"
            )
        })
        .map(|c| unit.node_text(c))
        .collect();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(code: &str, class_name: Option<&str>) -> Vec<String> {
        let unit = SourceUnit::parse("a.ts", code).unwrap();
        let mut out = Vec::new();
        walk(&unit, class_name, &mut |d| {
            out.push(d.display_name().to_string());
            Ok(())
        })
        .unwrap();
        out
    }

    #[test]
    fn test_source_order_and_constructor() {
        let code = "class A {\n constructor(x: number) {}\n b() {}\n a() {}\n}";
        assert_eq!(names(code, None), vec!["constructor", "b", "a"]);
    }

    #[test]
    fn test_private_and_protected_skipped() {
        let code = "class A {\n private p() {}\n protected q() {}\n public r() {}\n s() {}\n}";
        assert_eq!(names(code, None), vec!["r", "s"]);
    }

    #[test]
    fn test_nested_inside_hidden_member_is_visited() {
        let code = "class A {\n private p() {\n  const o = { inner() {} };\n }\n}";
        assert_eq!(names(code, None), vec!["inner"]);
    }

    #[test]
    fn test_class_filter() {
        let code = "class A { a() {} }\nclass B { b() {} }";
        assert_eq!(names(code, Some("B")), vec!["b"]);
        assert!(names(code, Some("C")).is_empty());
    }

    #[test]
    fn test_interface_methods_are_not_declarations() {
        let code = "interface I { m(): void; }\nabstract class C { abstract n(): void; }";
        assert_eq!(names(code, None), vec!["n"]);
    }
}
