// src/imports/extract.rs
use crate::unit::SourceUnit;
use tree_sitter::Node;

/// Extracts the module specifiers of every `import` statement in the unit,
/// in source order.
///
/// # Returns
/// Specifiers with their quotes removed (e.g. "./shapes", "react").
#[must_use]
pub fn specifiers(unit: &SourceUnit) -> Vec<String> {
    let mut out = Vec::new();
    collect(unit, unit.root(), &mut out);
    out
}

/// Only the relative specifiers (`./x`, `../x`); package imports are dropped.
#[must_use]
pub fn relative_specifiers(unit: &SourceUnit) -> Vec<String> {
    specifiers(unit)
        .into_iter()
        .filter(|s| is_relative(s))
        .collect()
}

#[must_use]
pub fn is_relative(specifier: &str) -> bool {
    specifier.starts_with('.')
}

fn collect(unit: &SourceUnit, node: Node, out: &mut Vec<String>) {
    if node.kind() == "import_statement" {
        if let Some(source) = node.child_by_field_name("source") {
            out.push(unquote(unit.node_text(source)));
        }
        return;
    }
    for child in node.children(&mut node.walk()) {
        collect(unit, child, out);
    }
}

fn unquote(literal: &str) -> String {
    literal
        .trim_matches(|c| matches!(c, '"' | '\'' | '`'))
        .to_string()
}
