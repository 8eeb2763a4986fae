// src/unit.rs
//! Parsed source modules.

use crate::error::{DocgenError, Result};
use crate::lang::Lang;
use std::fs;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser, Tree};

/// One parsed module: its text and the syntax tree built from it.
///
/// Immutable once built. Nodes handed out by [`SourceUnit::root`] borrow the
/// unit, so a unit outlives every node view taken from it.
pub struct SourceUnit {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl SourceUnit {
    /// Parses `text` as the module at `path`.
    ///
    /// # Errors
    /// Returns error if the grammar cannot be loaded or tree-sitter gives up.
    pub fn parse(path: impl Into<PathBuf>, text: impl Into<String>) -> Result<Self> {
        let path = path.into();
        let text = text.into();

        let mut parser = Parser::new();
        parser.set_language(&Lang::from_path(&path).grammar())?;

        let Some(tree) = parser.parse(&text, None) else {
            return Err(DocgenError::Parse { path });
        };

        if tree.root_node().has_error() {
            tracing::debug!("{} contains syntax errors", path.display());
        }

        Ok(Self { path, text, tree })
    }

    /// Reads and parses the module at `path`. The file handle is released
    /// as soon as the content is captured.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| DocgenError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse(path, text)
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Source text covered by `node`.
    #[must_use]
    pub fn node_text(&self, node: Node<'_>) -> &str {
        self.text.get(node.byte_range()).unwrap_or("")
    }

    /// 1-based line of the node's first byte.
    #[must_use]
    pub fn line_of(&self, node: Node<'_>) -> usize {
        node.start_position().row + 1
    }
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("path", &self.path)
            .field("len", &self.text.len())
            .finish_non_exhaustive()
    }
}
