// src/shapes.rs
//! Field documentation of named shapes (interfaces and object type aliases).

use crate::comments;
use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::model::ShapeFieldDoc;
use crate::render::{self, SoftBreak};
use crate::type_name;
use crate::unit::SourceUnit;
use std::collections::HashMap;
use tree_sitter::Node;

/// Shape name → ordered field docs. Built once per run, read-only after.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ShapeDictionary {
    shapes: HashMap<String, Vec<ShapeFieldDoc>>,
}

impl ShapeDictionary {
    /// Scans `units` in order. A shape declared again later replaces the
    /// earlier entry.
    ///
    /// # Errors
    /// Returns error if a field comment contains a node the renderer cannot
    /// handle.
    pub fn build(
        units: &[&SourceUnit],
        soft_break: SoftBreak,
        diagnostics: &mut Diagnostics,
    ) -> Result<Self> {
        let mut dict = Self::default();
        for &unit in units {
            let mut builder = Builder {
                unit,
                soft_break,
                diagnostics: &mut *diagnostics,
                dict: &mut dict,
            };
            builder.visit(unit.root())?;
        }
        Ok(dict)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[ShapeFieldDoc]> {
        self.shapes.get(name).map(Vec::as_slice)
    }

    /// Nested fields for a parameter of the given resolved type.
    #[must_use]
    pub fn fields_for(&self, type_name: &str) -> Vec<ShapeFieldDoc> {
        self.get(type_name).map(<[_]>::to_vec).unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().map(String::as_str)
    }
}

struct Builder<'a> {
    unit: &'a SourceUnit,
    soft_break: SoftBreak,
    diagnostics: &'a mut Diagnostics,
    dict: &'a mut ShapeDictionary,
}

impl Builder<'_> {
    fn visit(&mut self, node: Node<'_>) -> Result<()> {
        if let Some((name, body)) = shape_parts(self.unit, node) {
            let fields = self.fields(body)?;
            if !fields.is_empty() {
                tracing::debug!("shape {name}: {} fields", fields.len());
                self.dict.shapes.insert(name.to_string(), fields);
            }
            return Ok(());
        }

        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        for child in children {
            self.visit(child)?;
        }
        Ok(())
    }

    fn fields(&mut self, body: Node<'_>) -> Result<Vec<ShapeFieldDoc>> {
        let mut cursor = body.walk();
        let members: Vec<_> = body
            .named_children(&mut cursor)
            .filter(|m| m.kind() == "property_signature")
            .collect();

        let mut out = Vec::with_capacity(members.len());
        for member in members {
            out.push(self.field(member)?);
        }
        Ok(out)
    }

    fn field(&mut self, member: Node<'_>) -> Result<ShapeFieldDoc> {
        let unit = self.unit;
        let name = member
            .child_by_field_name("name")
            .map_or("", |n| unit.node_text(n));

        let description = match comments::doc_comment(unit, member) {
            Some(doc) => render::render_section(&doc.summary, self.soft_break)?,
            None => String::new(),
        };

        Ok(ShapeFieldDoc {
            name: name.to_string(),
            type_name: type_name::resolve(unit, type_name::parameter_type(member), self.diagnostics),
            description,
            required: !type_name::has_optional_marker(member),
        })
    }
}

/// Name and member body of a shape declaration, if `node` is one.
fn shape_parts<'u>(unit: &'u SourceUnit, node: Node<'u>) -> Option<(&'u str, Node<'u>)> {
    match node.kind() {
        "interface_declaration" => {
            let name = node.child_by_field_name("name")?;
            let body = node.child_by_field_name("body")?;
            Some((unit.node_text(name), body))
        }
        "type_alias_declaration" => {
            let name = node.child_by_field_name("name")?;
            let value = node.child_by_field_name("value")?;
            (value.kind() == "object_type").then(|| (unit.node_text(name), value))
        }
        _ => None,
    }
}
