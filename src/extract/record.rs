// src/extract/record.rs
//! Builds one [`MethodRecord`] from a matched declaration.

use super::visitor::Declaration;
use super::{DocPolicy, ExtractOptions};
use crate::comments;
use crate::diagnostics::Diagnostics;
use crate::error::{DocgenError, Result};
use crate::model::{ExampleCode, MethodRecord, ParameterRecord, ReturnsRecord};
use crate::render::{render_block, render_section};
use crate::shapes::ShapeDictionary;
use crate::tsdoc::DocComment;
use crate::type_name;
use crate::unit::SourceUnit;
use tree_sitter::Node;

const EXAMPLE_TAG: &str = "@example";
const NO_RETURN_TYPE: &str = "void";

pub struct Assembler<'a> {
    unit: &'a SourceUnit,
    shapes: &'a ShapeDictionary,
    options: &'a ExtractOptions,
}

impl<'a> Assembler<'a> {
    #[must_use]
    pub fn new(unit: &'a SourceUnit, shapes: &'a ShapeDictionary, options: &'a ExtractOptions) -> Self {
        Self {
            unit,
            shapes,
            options,
        }
    }

    /// # Errors
    /// Returns error if the comment holds a node the renderer cannot handle,
    /// or, under [`DocPolicy::Strict`], if the declaration is undocumented.
    pub fn assemble(
        &self,
        decl: &Declaration<'_>,
        diagnostics: &mut Diagnostics,
    ) -> Result<MethodRecord> {
        let name = decl.display_name();
        let doc = comments::doc_comment(self.unit, decl.node);
        self.check_policy(name, decl.node, doc.as_ref())?;

        let soft_break = self.options.soft_break;
        let description = match &doc {
            Some(d) => render_section(&d.summary, soft_break)?,
            None => String::new(),
        };

        let mut parameters = Vec::with_capacity(decl.parameters.len());
        for param in &decl.parameters {
            parameters.push(self.parameter(*param, doc.as_ref(), diagnostics)?);
        }

        let deprecated = match doc.as_ref().and_then(|d| d.deprecated.as_ref()) {
            Some(block) => Some(render_section(&block.content, soft_break)?),
            None => None,
        };

        let return_type = decl
            .return_type
            .and_then(|node| type_name::source_text(self.unit, node))
            .unwrap_or(NO_RETURN_TYPE)
            .to_string();

        Ok(MethodRecord {
            method_name: name.to_string(),
            description,
            example: doc.as_ref().and_then(example_code),
            parameters,
            deprecated,
            returns: ReturnsRecord {
                type_name: return_type,
                description: render_block(doc.as_ref().and_then(|d| d.returns.as_ref()), soft_break)?,
            },
        })
    }

    fn parameter(
        &self,
        param: Node<'_>,
        doc: Option<&DocComment>,
        diagnostics: &mut Diagnostics,
    ) -> Result<ParameterRecord> {
        let name = type_name::parameter_name(self.unit, param);
        let resolved = type_name::resolve(self.unit, type_name::parameter_type(param), diagnostics);

        let description = match doc.and_then(|d| d.param(name)) {
            Some(block) => render_section(&block.content, self.options.soft_break)?,
            None => String::new(),
        };

        Ok(ParameterRecord {
            name: name.to_string(),
            parameters: self.shapes.fields_for(&resolved),
            type_name: resolved,
            description,
            required: !type_name::has_optional_marker(param),
        })
    }

    fn check_policy(&self, name: &str, node: Node<'_>, doc: Option<&DocComment>) -> Result<()> {
        if self.options.policy == DocPolicy::Tolerant {
            return Ok(());
        }
        let documented = doc.is_some_and(|d| !d.summary.is_empty());
        if documented {
            return Ok(());
        }
        Err(DocgenError::Undocumented {
            name: name.to_string(),
            path: self.unit.path().to_path_buf(),
            line: self.unit.line_of(node),
        })
    }
}

/// First fenced code block of the first `@example` block.
fn example_code(doc: &DocComment) -> Option<ExampleCode> {
    let code = doc.custom_block(EXAMPLE_TAG)?.content.first_fenced_code()?;
    Some(ExampleCode {
        content: code.code.clone(),
        language: code.language.clone(),
    })
}
