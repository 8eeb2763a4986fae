// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocgenError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Failed to load the TypeScript grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Failed to parse {path}")]
    Parse { path: PathBuf },

    /// The comment parser produced a node the renderer has no case for.
    #[error("Unexpected doc node `{kind}` in {context}")]
    UnsupportedNode { kind: String, context: String },

    #[error("Missing documentation for `{name}` ({path}:{line})")]
    Undocumented {
        name: String,
        path: PathBuf,
        line: usize,
    },

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, DocgenError>;

// Allow `?` on std::io::Error by converting to DocgenError::Io with unknown path.
impl From<std::io::Error> for DocgenError {
    fn from(source: std::io::Error) -> Self {
        DocgenError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
