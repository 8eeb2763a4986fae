// src/extract/mod.rs
//! Extraction pipeline.
//!
//! One run: load the primary module, load its local import closure, build
//! the shape dictionary from all of them, then walk the primary module and
//! assemble a record for every matching declaration.

pub mod record;
pub mod visitor;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::imports::{self, DEFAULT_IMPORT_DEPTH, DEFAULT_SOURCE_EXTENSION};
use crate::model::MethodRecord;
use crate::render::SoftBreak;
use crate::shapes::ShapeDictionary;
use crate::unit::SourceUnit;
use record::Assembler;
use std::path::Path;

/// How to treat a matched declaration that has no documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocPolicy {
    /// Record it with empty text.
    #[default]
    Tolerant,
    /// Fail the run.
    Strict,
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Only document members of the class with this exact name.
    pub class_name: Option<String>,
    pub policy: DocPolicy,
    pub import_depth: usize,
    pub source_extension: String,
    pub soft_break: SoftBreak,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            class_name: None,
            policy: DocPolicy::default(),
            import_depth: DEFAULT_IMPORT_DEPTH,
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            soft_break: SoftBreak::default(),
        }
    }
}

#[derive(Debug, Default)]
pub struct Extraction {
    pub records: Vec<MethodRecord>,
    pub diagnostics: Diagnostics,
    /// Number of named shapes available for nested parameter docs.
    pub shape_count: usize,
}

/// Extracts records from the module at `path`.
///
/// # Errors
/// Returns error if the module cannot be read or parsed, or if assembling a
/// record fails.
pub fn extract_file(path: &Path, options: &ExtractOptions) -> Result<Extraction> {
    let primary = SourceUnit::load(path)?;
    extract_unit(&primary, options)
}

/// Extracts records from an already parsed module, loading its imports
/// relative to the module's path.
///
/// # Errors
/// See [`extract_file`].
pub fn extract_unit(primary: &SourceUnit, options: &ExtractOptions) -> Result<Extraction> {
    let mut diagnostics = Diagnostics::new();
    let imported = imports::load_closure(
        primary,
        options.import_depth,
        &options.source_extension,
        &mut diagnostics,
    );
    extract_with_imports(primary, &imported, options, diagnostics)
}

/// Extracts records from `primary`, taking shapes from `primary` and
/// `imported` (later units win on name clashes).
///
/// # Errors
/// See [`extract_file`].
pub fn extract_with_imports(
    primary: &SourceUnit,
    imported: &[SourceUnit],
    options: &ExtractOptions,
    mut diagnostics: Diagnostics,
) -> Result<Extraction> {
    let units: Vec<&SourceUnit> = std::iter::once(primary).chain(imported).collect();
    let shapes = ShapeDictionary::build(&units, options.soft_break, &mut diagnostics)?;

    let assembler = Assembler::new(primary, &shapes, options);
    let mut records = Vec::new();
    visitor::walk(primary, options.class_name.as_deref(), &mut |decl| {
        records.push(assembler.assemble(&decl, &mut diagnostics)?);
        Ok(())
    })?;

    tracing::debug!(
        "{}: {} records, {} shapes",
        primary.path().display(),
        records.len(),
        shapes.len()
    );

    Ok(Extraction {
        records,
        diagnostics,
        shape_count: shapes.len(),
    })
}
