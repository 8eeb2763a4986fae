// src/tsdoc/nodes.rs
//! Parsed doc comment tree.

use std::collections::BTreeSet;

/// Inline content of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocInline {
    PlainText(String),
    /// A line break inside a paragraph.
    SoftBreak,
    CodeSpan(String),
    /// Malformed input kept verbatim (unclosed backtick, stray `@tag`).
    ErrorText(String),
    /// `{@link Foo}`, `{@inheritDoc}` and friends.
    InlineTag { tag_name: String, content: String },
}

impl DocInline {
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::PlainText(_) => "PlainText",
            Self::SoftBreak => "SoftBreak",
            Self::CodeSpan(_) => "CodeSpan",
            Self::ErrorText(_) => "ErrorText",
            Self::InlineTag { .. } => "InlineTag",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocFencedCode {
    pub language: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocNode {
    Paragraph(Vec<DocInline>),
    FencedCode(DocFencedCode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocSection {
    pub nodes: Vec<DocNode>,
}

impl DocSection {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|n| match n {
            DocNode::Paragraph(inlines) => inlines.iter().all(|i| match i {
                DocInline::PlainText(t) => t.trim().is_empty(),
                DocInline::SoftBreak => true,
                _ => false,
            }),
            DocNode::FencedCode(_) => false,
        })
    }

    /// First fenced code block at section level.
    #[must_use]
    pub fn first_fenced_code(&self) -> Option<&DocFencedCode> {
        self.nodes.iter().find_map(|n| match n {
            DocNode::FencedCode(code) => Some(code),
            DocNode::Paragraph(_) => None,
        })
    }
}

/// A block introduced by a block tag (`@remarks`, `@example`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocBlock {
    /// Tag name including the `@`.
    pub tag_name: String,
    pub content: DocSection,
}

/// `@param` / `@typeParam` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocParamBlock {
    pub parameter_name: String,
    pub content: DocSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    pub summary: DocSection,
    pub remarks: Option<DocBlock>,
    pub private_remarks: Option<DocBlock>,
    pub params: Vec<DocParamBlock>,
    pub type_params: Vec<DocParamBlock>,
    pub returns: Option<DocBlock>,
    pub deprecated: Option<DocBlock>,
    pub see: Vec<DocBlock>,
    pub custom_blocks: Vec<DocBlock>,
    pub modifiers: BTreeSet<String>,
}

impl DocComment {
    /// Documentation of the named parameter; the first block wins.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&DocParamBlock> {
        self.params.iter().find(|p| p.parameter_name == name)
    }

    #[must_use]
    pub fn custom_block(&self, tag_name: &str) -> Option<&DocBlock> {
        self.custom_blocks.iter().find(|b| b.tag_name == tag_name)
    }

    #[must_use]
    pub fn has_modifier(&self, tag_name: &str) -> bool {
        self.modifiers.contains(tag_name)
    }
}

/// Parser message for input that was accepted but not well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserMessage {
    pub id: &'static str,
    pub text: String,
}

/// Result of one parse call: the comment plus everything the parser
/// complained about along the way.
#[derive(Debug, Clone, Default)]
pub struct ParserContext {
    pub doc_comment: DocComment,
    pub log: Vec<ParserMessage>,
}
