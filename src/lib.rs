// src/lib.rs
pub mod cli;
pub mod comments;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod exit;
pub mod extract;
pub mod imports;
pub mod lang;
pub mod model;
pub mod render;
pub mod shapes;
pub mod tsdoc;
pub mod type_name;
pub mod unit;

pub use error::{DocgenError, Result};
pub use extract::{extract_file, DocPolicy, ExtractOptions, Extraction};
pub use model::MethodRecord;
