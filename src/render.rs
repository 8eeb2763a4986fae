// src/render.rs
//! Flattens parsed doc sections into display strings.

use crate::error::{DocgenError, Result};
use crate::tsdoc::{DocBlock, DocInline, DocNode, DocSection};
use serde::{Deserialize, Serialize};

/// What a soft line break inside a paragraph becomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SoftBreak {
    #[default]
    Space,
    Newline,
}

impl SoftBreak {
    fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Newline => "\n",
        }
    }
}

/// Renders a section. Paragraphs are separated by a blank line and fenced
/// code is written back as a Markdown fence.
///
/// # Errors
/// Returns [`DocgenError::UnsupportedNode`] for inline nodes outside the
/// renderable set (inline tags such as `{@link}`).
pub fn render_section(section: &DocSection, soft_break: SoftBreak) -> Result<String> {
    let mut parts = Vec::with_capacity(section.nodes.len());
    for node in &section.nodes {
        match node {
            DocNode::Paragraph(inlines) => parts.push(render_inlines(inlines, soft_break)?),
            DocNode::FencedCode(code) => {
                parts.push(format!("```{}\n{}\n```", code.language, code.code));
            }
        }
    }
    Ok(parts.join("\n\n").trim().to_string())
}

/// Renders an optional block; a missing block is the empty string.
///
/// # Errors
/// See [`render_section`].
pub fn render_block(block: Option<&DocBlock>, soft_break: SoftBreak) -> Result<String> {
    match block {
        Some(b) => render_section(&b.content, soft_break),
        None => Ok(String::new()),
    }
}

fn render_inlines(inlines: &[DocInline], soft_break: SoftBreak) -> Result<String> {
    let mut out = String::new();
    for inline in inlines {
        match inline {
            DocInline::PlainText(text) | DocInline::ErrorText(text) => out.push_str(text),
            DocInline::SoftBreak => out.push_str(soft_break.as_str()),
            DocInline::CodeSpan(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            DocInline::InlineTag { tag_name, content } => {
                return Err(DocgenError::UnsupportedNode {
                    kind: inline.kind().to_string(),
                    context: format!("{{{tag_name} {content}}}"),
                });
            }
        }
    }
    Ok(out.trim().to_string())
}
