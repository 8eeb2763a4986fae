// src/tsdoc/parser.rs
//! TSDoc comment grammar.
//!
//! The parser works in three passes: strip the `/** */` framing and the
//! leading `*` of each line, cut the lines into blocks at block tags, then
//! turn each block's lines into paragraphs, fenced code and inline nodes.

use super::nodes::{
    DocBlock, DocComment, DocFencedCode, DocInline, DocNode, DocParamBlock, DocSection,
    ParserContext, ParserMessage,
};
use super::tags::{BlockSlot, TagKind, TagRegistry};
use regex::Regex;

const FENCE: &str = "```";

pub struct TsDocParser {
    registry: TagRegistry,
    param_head: Regex,
}

/// Lines of one block before section parsing. `tag` is `None` for the summary.
struct Chunk {
    tag: Option<String>,
    lines: Vec<String>,
}

enum Piece<'l> {
    Text(&'l str),
    Tag(&'l str),
}

impl Default for TsDocParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TsDocParser {
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: TagRegistry::standard(),
            param_head: compile_regex(
                r"^\s*(?:\{[^}]*\}\s*)?(\[[^\]]*\]|[A-Za-z_$][\w$.]*)?[ \t]*(?:-[ \t]*)?",
            ),
        }
    }

    /// Parses one raw comment, delimiters included.
    ///
    /// Never fails: input that is not a `/** */` comment yields an empty
    /// [`DocComment`], and malformed content is kept as error text with a
    /// message in the returned log.
    #[must_use]
    pub fn parse_str(&self, text: &str) -> ParserContext {
        let mut log = Vec::new();
        let Some(lines) = strip_delimiters(text, &mut log) else {
            return ParserContext {
                doc_comment: DocComment::default(),
                log,
            };
        };

        let mut doc = DocComment::default();
        for chunk in self.chunk_lines(&lines, &mut doc) {
            self.apply_chunk(chunk, &mut doc, &mut log);
        }

        ParserContext {
            doc_comment: doc,
            log,
        }
    }

    fn chunk_lines(&self, lines: &[String], doc: &mut DocComment) -> Vec<Chunk> {
        let mut chunks = vec![Chunk {
            tag: None,
            lines: Vec::new(),
        }];
        let mut in_fence = false;

        for line in lines {
            let is_fence = line.trim_start().starts_with(FENCE);
            if in_fence || is_fence {
                if is_fence {
                    in_fence = !in_fence;
                }
                push_line(&mut chunks, line);
                continue;
            }

            let mut current = String::new();
            for piece in self.split_tags(line) {
                match piece {
                    Piece::Text(t) => current.push_str(t),
                    Piece::Tag(tag) if self.registry.lookup(tag) == Some(TagKind::Modifier) => {
                        doc.modifiers.insert(tag.to_string());
                    }
                    Piece::Tag(tag) => {
                        if !current.trim().is_empty() {
                            push_line(&mut chunks, &current);
                        }
                        current.clear();
                        chunks.push(Chunk {
                            tag: Some(tag.to_string()),
                            lines: Vec::new(),
                        });
                    }
                }
            }
            push_line(&mut chunks, &current);
        }

        chunks
    }

    /// Cuts a line at every `@tag` that opens a block. A tag opens a block
    /// when it is preceded by whitespace (or starts the line) and sits outside
    /// a code span. At the start of a line any non-inline tag counts, known or
    /// not; mid-line only registered block and modifier tags do.
    fn split_tags<'l>(&self, line: &'l str) -> Vec<Piece<'l>> {
        let mut pieces = Vec::new();
        let mut last = 0;
        let mut in_code = false;
        let mut prev: Option<char> = None;
        let mut iter = line.char_indices().peekable();

        while let Some((i, c)) = iter.next() {
            if c == '`' {
                in_code = !in_code;
            }
            let boundary = prev.map_or(true, char::is_whitespace);
            prev = Some(c);
            if c != '@' || in_code || !boundary {
                continue;
            }

            let end = tag_name_end(line, i);
            if end == i + 1 {
                continue;
            }
            let tag = &line[i..end];
            let opens = if line[..i].trim().is_empty() {
                self.registry.lookup(tag) != Some(TagKind::Inline)
            } else {
                self.registry.starts_block(tag)
            };
            if !opens {
                continue;
            }

            pieces.push(Piece::Text(&line[last..i]));
            pieces.push(Piece::Tag(tag));
            last = end;
            while iter.peek().is_some_and(|&(j, _)| j < end) {
                iter.next();
            }
            prev = line[..end].chars().last();
        }

        pieces.push(Piece::Text(&line[last..]));
        pieces
    }

    fn apply_chunk(&self, chunk: Chunk, doc: &mut DocComment, log: &mut Vec<ParserMessage>) {
        let Some(tag) = chunk.tag else {
            doc.summary = self.build_section(&chunk.lines, log);
            return;
        };

        match self.registry.lookup(&tag) {
            Some(TagKind::Block(BlockSlot::Param)) => {
                let block = self.param_block(&tag, &chunk.lines, log);
                doc.params.push(block);
            }
            Some(TagKind::Block(BlockSlot::TypeParam)) => {
                let block = self.param_block(&tag, &chunk.lines, log);
                doc.type_params.push(block);
            }
            Some(TagKind::Block(BlockSlot::See)) => {
                let block = self.block(tag, &chunk.lines, log);
                doc.see.push(block);
            }
            Some(TagKind::Block(slot)) => {
                let block = self.block(tag, &chunk.lines, log);
                let target = match slot {
                    BlockSlot::Returns => &mut doc.returns,
                    BlockSlot::Deprecated => &mut doc.deprecated,
                    BlockSlot::Remarks => &mut doc.remarks,
                    BlockSlot::PrivateRemarks => &mut doc.private_remarks,
                    BlockSlot::Param | BlockSlot::TypeParam | BlockSlot::See => return,
                };
                if target.is_some() {
                    log.push(message(
                        "tsdoc-duplicate-block",
                        format!("{} may only appear once; keeping the first", block.tag_name),
                    ));
                } else {
                    *target = Some(block);
                }
            }
            Some(TagKind::Custom) | None => {
                let block = self.block(tag, &chunk.lines, log);
                doc.custom_blocks.push(block);
            }
            Some(TagKind::Modifier | TagKind::Inline) => {}
        }
    }

    fn block(&self, tag: String, lines: &[String], log: &mut Vec<ParserMessage>) -> DocBlock {
        DocBlock {
            tag_name: tag,
            content: self.build_section(lines, log),
        }
    }

    fn param_block(&self, tag: &str, lines: &[String], log: &mut Vec<ParserMessage>) -> DocParamBlock {
        let joined = lines.join("\n");
        let (name, rest) = match self.param_head.captures(&joined) {
            Some(caps) => {
                let name = caps.get(1).map_or("", |m| m.as_str());
                let consumed = caps.get(0).map_or(0, |m| m.end());
                (normalize_param_name(name), &joined[consumed..])
            }
            None => (String::new(), joined.as_str()),
        };

        if name.is_empty() {
            log.push(message(
                "tsdoc-param-tag-missing-name",
                format!("{tag} is missing a parameter name"),
            ));
        }

        let rest_lines: Vec<String> = rest.split('\n').map(ToString::to_string).collect();
        DocParamBlock {
            parameter_name: name,
            content: self.build_section(&rest_lines, log),
        }
    }

    fn build_section(&self, lines: &[String], log: &mut Vec<ParserMessage>) -> DocSection {
        let mut nodes = Vec::new();
        let mut paragraph: Vec<&str> = Vec::new();
        let mut iter = lines.iter();

        while let Some(line) = iter.next() {
            let trimmed = line.trim();
            if let Some(info) = trimmed.strip_prefix(FENCE) {
                self.flush_paragraph(&mut paragraph, &mut nodes, log);
                let mut code = Vec::new();
                let mut closed = false;
                for code_line in iter.by_ref() {
                    if code_line.trim_start().starts_with(FENCE) {
                        closed = true;
                        break;
                    }
                    code.push(code_line.as_str());
                }
                if !closed {
                    log.push(message(
                        "tsdoc-code-fence-missing-delimiter",
                        "fenced code block is not closed",
                    ));
                }
                nodes.push(DocNode::FencedCode(DocFencedCode {
                    language: info.trim().to_string(),
                    code: code.join("\n"),
                }));
            } else if trimmed.is_empty() {
                self.flush_paragraph(&mut paragraph, &mut nodes, log);
            } else {
                paragraph.push(trimmed);
            }
        }
        self.flush_paragraph(&mut paragraph, &mut nodes, log);

        DocSection { nodes }
    }

    fn flush_paragraph(
        &self,
        paragraph: &mut Vec<&str>,
        nodes: &mut Vec<DocNode>,
        log: &mut Vec<ParserMessage>,
    ) {
        if paragraph.is_empty() {
            return;
        }
        let mut inlines = Vec::new();
        for (idx, line) in paragraph.iter().enumerate() {
            if idx > 0 {
                inlines.push(DocInline::SoftBreak);
            }
            inlines.extend(self.parse_inline(line, log));
        }
        paragraph.clear();
        nodes.push(DocNode::Paragraph(inlines));
    }

    fn parse_inline(&self, line: &str, log: &mut Vec<ParserMessage>) -> Vec<DocInline> {
        let chars: Vec<char> = line.chars().collect();
        let mut out = Vec::new();
        let mut text = String::new();
        let mut i = 0;

        while i < chars.len() {
            let c = chars[i];
            let next = chars.get(i + 1).copied();

            if c == '\\' && next.is_some_and(|n| n.is_ascii_punctuation()) {
                text.extend(next);
                i += 2;
                continue;
            }

            if c == '`' {
                flush_text(&mut text, &mut out);
                match find_char(&chars, i + 1, '`') {
                    Some(close) => {
                        out.push(DocInline::CodeSpan(collect(&chars[i + 1..close])));
                        i = close + 1;
                    }
                    None => {
                        log.push(message(
                            "tsdoc-code-span-missing-delimiter",
                            "code span is not closed",
                        ));
                        out.push(DocInline::ErrorText("`".to_string()));
                        i += 1;
                    }
                }
                continue;
            }

            if c == '{' && next == Some('@') {
                flush_text(&mut text, &mut out);
                match find_char(&chars, i + 1, '}') {
                    Some(close) => {
                        out.push(inline_tag(&collect(&chars[i + 1..close])));
                        i = close + 1;
                    }
                    None => {
                        log.push(message(
                            "tsdoc-inline-tag-missing-right-brace",
                            "inline tag is not closed",
                        ));
                        out.push(DocInline::ErrorText("{".to_string()));
                        text.push('@');
                        i += 2;
                    }
                }
                continue;
            }

            let boundary = i == 0 || chars[i - 1].is_whitespace();
            if c == '@' && boundary && next.is_some_and(|n| n.is_ascii_alphabetic()) {
                flush_text(&mut text, &mut out);
                let end = chars[i + 1..]
                    .iter()
                    .position(|ch| !ch.is_ascii_alphanumeric())
                    .map_or(chars.len(), |p| i + 1 + p);
                let tag = collect(&chars[i..end]);
                log.push(message(
                    "tsdoc-characters-after-block-tag",
                    format!("{tag} is not allowed here"),
                ));
                out.push(DocInline::ErrorText(tag));
                i = end;
                continue;
            }

            text.push(c);
            i += 1;
        }

        flush_text(&mut text, &mut out);
        out
    }
}

/// Strips `/**`, `*/` and the leading `*` of each line.
fn strip_delimiters(text: &str, log: &mut Vec<ParserMessage>) -> Option<Vec<String>> {
    let trimmed = text.trim();
    let Some(body) = trimmed.strip_prefix("/**") else {
        log.push(message(
            "tsdoc-comment-missing-opening-delimiter",
            "expecting a leading \"/**\"",
        ));
        return None;
    };

    let body = match body.strip_suffix("*/") {
        Some(b) => b,
        None if body == "/" => "",
        None => {
            log.push(message(
                "tsdoc-comment-missing-closing-delimiter",
                "expecting a trailing \"*/\"",
            ));
            body
        }
    };

    let lines = body
        .split('\n')
        .map(|raw| {
            let line = raw.trim_end_matches('\r').trim_start();
            let line = match line.strip_prefix('*') {
                Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
                None => line,
            };
            line.trim_end().to_string()
        })
        .collect();
    Some(lines)
}

fn push_line(chunks: &mut [Chunk], line: &str) {
    if let Some(chunk) = chunks.last_mut() {
        chunk.lines.push(line.to_string());
    }
}

fn tag_name_end(line: &str, at: usize) -> usize {
    let rest = &line[at + 1..];
    if !rest.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return at + 1;
    }
    rest.find(|c: char| !c.is_ascii_alphanumeric())
        .map_or(line.len(), |p| at + 1 + p)
}

fn normalize_param_name(raw: &str) -> String {
    let Some(inner) = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')) else {
        return raw.to_string();
    };
    inner.split('=').next().unwrap_or("").trim().to_string()
}

fn inline_tag(body: &str) -> DocInline {
    let body = body.trim();
    let (tag_name, content) = body
        .split_once(char::is_whitespace)
        .map_or((body, ""), |(t, c)| (t, c.trim()));
    DocInline::InlineTag {
        tag_name: tag_name.to_string(),
        content: content.to_string(),
    }
}

fn find_char(chars: &[char], from: usize, target: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == target)
        .map(|p| from + p)
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

fn flush_text(text: &mut String, out: &mut Vec<DocInline>) {
    if !text.is_empty() {
        out.push(DocInline::PlainText(std::mem::take(text)));
    }
}

fn message(id: &'static str, text: impl Into<String>) -> ParserMessage {
    ParserMessage {
        id,
        text: text.into(),
    }
}

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(r) => r,
        Err(e) => panic!("Invalid tsdoc pattern: {e}"),
    }
}
