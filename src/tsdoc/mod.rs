// src/tsdoc/mod.rs
//! TSDoc comment parsing.
//!
//! The parser holds no per-call state, so one instance is built lazily and
//! shared by every caller for the life of the process.

pub mod nodes;
pub mod parser;
pub mod tags;

pub use nodes::{
    DocBlock, DocComment, DocFencedCode, DocInline, DocNode, DocParamBlock, DocSection,
    ParserContext, ParserMessage,
};
pub use parser::TsDocParser;

use std::sync::LazyLock;

static PARSER: LazyLock<TsDocParser> = LazyLock::new(TsDocParser::new);

/// The shared parser instance.
#[must_use]
pub fn parser() -> &'static TsDocParser {
    &PARSER
}

/// Parses `text` with the shared parser and returns just the comment.
#[must_use]
pub fn parse(text: &str) -> DocComment {
    let ctx = parser().parse_str(text);
    for msg in &ctx.log {
        tracing::debug!("tsdoc: {} ({})", msg.text, msg.id);
    }
    ctx.doc_comment
}
