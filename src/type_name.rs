// src/type_name.rs
//! Canonical display names for declared types.
//!
//! A type node is first classified into a [`TypeExpr`] and then rendered by
//! an exhaustive match, so a new kind of type expression only needs a new
//! variant and a new arm. Resolution never fails: anything unrecognised is
//! reported as a diagnostic and rendered as `unknown`.

use crate::diagnostics::Diagnostics;
use crate::unit::SourceUnit;
use tree_sitter::Node;

pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
    Void,
    Undefined,
    Null,
    Any,
    Unknown,
    Never,
    Object,
}

impl Primitive {
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "string" => Some(Self::String),
            "number" => Some(Self::Number),
            "boolean" => Some(Self::Boolean),
            "void" => Some(Self::Void),
            "undefined" => Some(Self::Undefined),
            "null" => Some(Self::Null),
            "any" => Some(Self::Any),
            "unknown" => Some(Self::Unknown),
            "never" => Some(Self::Never),
            "object" => Some(Self::Object),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Void => "void",
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Any => "any",
            Self::Unknown => "unknown",
            Self::Never => "never",
            Self::Object => "object",
        }
    }
}

/// Classified type expression.
#[derive(Debug, Clone)]
pub enum TypeExpr<'t> {
    Keyword(Primitive),
    /// Named reference; the node is the name without type arguments.
    Reference(Node<'t>),
    Union(Vec<Node<'t>>),
    Parenthesized(Node<'t>),
    Function {
        params: Vec<Node<'t>>,
        returns: Option<Node<'t>>,
    },
    /// Anonymous `{ ... }` shape.
    Structural,
    Array(Node<'t>),
    Literal(Node<'t>),
    Unrecognized(&'static str),
}

impl<'t> TypeExpr<'t> {
    #[must_use]
    pub fn classify(unit: &SourceUnit, node: Node<'t>) -> Self {
        match node.kind() {
            "predefined_type" => match Primitive::from_keyword(unit.node_text(node).trim()) {
                Some(p) => Self::Keyword(p),
                None => Self::Unrecognized("predefined_type"),
            },
            "type_identifier" | "nested_type_identifier" | "identifier" => Self::Reference(node),
            "generic_type" => match node.child_by_field_name("name") {
                Some(name) => Self::Reference(name),
                None => Self::Unrecognized("generic_type"),
            },
            "union_type" => Self::Union(named_children(node)),
            "parenthesized_type" => match node.named_child(0) {
                Some(inner) => Self::Parenthesized(inner),
                None => Self::Unrecognized("parenthesized_type"),
            },
            "function_type" => Self::Function {
                params: node
                    .child_by_field_name("parameters")
                    .map(named_children)
                    .unwrap_or_default()
                    .into_iter()
                    .filter(|p| matches!(p.kind(), "required_parameter" | "optional_parameter"))
                    .collect(),
                returns: node.child_by_field_name("return_type"),
            },
            "object_type" => Self::Structural,
            "array_type" => match node.named_child(0) {
                Some(element) => Self::Array(element),
                None => Self::Unrecognized("array_type"),
            },
            "literal_type" => Self::Literal(node),
            // `undefined`/`null` can surface as bare literal nodes.
            "undefined" | "null" => Self::Keyword(
                Primitive::from_keyword(node.kind()).unwrap_or(Primitive::Unknown),
            ),
            other => Self::Unrecognized(other),
        }
    }
}

/// Resolves an optional declared type (a type node or a `: T` annotation)
/// to its display name. A missing type is `unknown`.
pub fn resolve(unit: &SourceUnit, node: Option<Node<'_>>, diagnostics: &mut Diagnostics) -> String {
    match node.and_then(unwrap_annotation) {
        Some(n) => resolve_node(unit, n, diagnostics),
        None => UNKNOWN.to_string(),
    }
}

/// Declared type exactly as written, annotation colon excluded.
#[must_use]
pub fn source_text<'u>(unit: &'u SourceUnit, node: Node<'u>) -> Option<&'u str> {
    unwrap_annotation(node).map(|n| unit.node_text(n))
}

fn resolve_node(unit: &SourceUnit, node: Node<'_>, diagnostics: &mut Diagnostics) -> String {
    match TypeExpr::classify(unit, node) {
        TypeExpr::Keyword(p) => p.name().to_string(),
        TypeExpr::Reference(name) => unit.node_text(name).to_string(),
        TypeExpr::Union(members) => members
            .into_iter()
            .map(|m| resolve_node(unit, m, diagnostics))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeExpr::Parenthesized(inner) => resolve_node(unit, inner, diagnostics),
        TypeExpr::Function { params, returns } => {
            let rendered: Vec<String> = params
                .into_iter()
                .map(|p| {
                    let name = parameter_name(unit, p);
                    let ty = resolve(unit, parameter_type(p), diagnostics);
                    format!("{name}: {ty}")
                })
                .collect();
            let ret = resolve(unit, returns, diagnostics);
            format!("({}) => {ret}", rendered.join(", "))
        }
        TypeExpr::Structural => Primitive::Object.name().to_string(),
        TypeExpr::Array(element) => format!("{}[]", resolve_node(unit, element, diagnostics)),
        TypeExpr::Literal(lit) => unit.node_text(lit).to_string(),
        TypeExpr::Unrecognized(kind) => {
            diagnostics.warn(
                unit.path(),
                Some(unit.line_of(node)),
                format!("Unknown type: {kind} (`{}`)", unit.node_text(node)),
            );
            UNKNOWN.to_string()
        }
    }
}

/// Display name of a parameter node. Rest parameters drop their `...`.
#[must_use]
pub fn parameter_name<'u>(unit: &'u SourceUnit, param: Node<'u>) -> &'u str {
    let Some(pattern) = param
        .child_by_field_name("pattern")
        .or_else(|| param.child_by_field_name("name"))
    else {
        return unit.node_text(param);
    };
    if pattern.kind() == "rest_pattern" {
        if let Some(inner) = pattern.named_child(0) {
            return unit.node_text(inner);
        }
    }
    unit.node_text(pattern)
}

/// The `: T` annotation of a parameter or property, if declared.
#[must_use]
pub fn parameter_type(param: Node<'_>) -> Option<Node<'_>> {
    param.child_by_field_name("type").or_else(|| {
        let mut cursor = param.walk();
        let found = param
            .named_children(&mut cursor)
            .find(|c| c.kind() == "type_annotation");
        found
    })
}

/// Whether the declaration carries the `?` optional marker.
#[must_use]
pub fn has_optional_marker(node: Node<'_>) -> bool {
    if node.kind() == "optional_parameter" {
        return true;
    }
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).any(|c| c.kind() == "?");
    found
}

fn unwrap_annotation(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "type_annotation"
        | "opting_type_annotation"
        | "omitting_type_annotation"
        | "type_predicate_annotation"
        | "asserts_annotation" => node.named_child(0),
        _ => Some(node),
    }
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    let children = node.named_children(&mut cursor).collect();
    children
}
