//! Schema compilation: consistency checks plus eager regex compilation.
//!
//! Compiling up front keeps the per-line hot path free of fallible work:
//! after `compile_schema` succeeds, checking a line cannot fail.

use fixlen_model::{FieldSpec, Schema, SchemaError};
use regex::Regex;

/// A schema field with its validated width and pre-compiled pattern.
#[derive(Debug)]
pub struct CompiledField {
    pub spec: FieldSpec,
    /// Validated positive width in the session unit.
    pub width: usize,
    /// Pattern anchored to match the entire extracted value.
    pub regex: Option<Regex>,
}

/// An immutable, validated schema ready for line checking.
#[derive(Debug, Default)]
pub struct CompiledSchema {
    pub fields: Vec<CompiledField>,
}

impl CompiledSchema {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total record width in the session unit.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|field| field.width).sum()
    }
}

/// Validate a schema and compile its patterns.
///
/// Fields are checked in order and the first violation rejects the whole
/// schema. Per field the checks run as: name, width, fixed-value length,
/// regex, blank conflict.
pub fn compile_schema(schema: Schema) -> Result<CompiledSchema, SchemaError> {
    let mut fields = Vec::with_capacity(schema.len());
    for spec in schema.fields {
        fields.push(compile_field(spec)?);
    }
    let compiled = CompiledSchema { fields };
    tracing::debug!(
        fields = compiled.len(),
        total_width = compiled.total_width(),
        "compiled schema"
    );
    Ok(compiled)
}

fn compile_field(spec: FieldSpec) -> Result<CompiledField, SchemaError> {
    if spec.name.is_empty() {
        return Err(SchemaError::EmptyName);
    }

    let width = usize::try_from(spec.width)
        .ok()
        .filter(|width| *width > 0)
        .ok_or_else(|| SchemaError::NonPositiveWidth {
            field: spec.name.clone(),
        })?;

    // Fixed values are measured in characters regardless of width mode,
    // mirroring how they are written in schema files.
    if let Some(fixed) = &spec.fixed_value
        && fixed.chars().count() != width
    {
        return Err(SchemaError::FixedValueLength {
            field: spec.name.clone(),
        });
    }

    let regex = spec
        .regex
        .as_deref()
        .map(compile_anchored)
        .transpose()
        .map_err(|e| SchemaError::InvalidRegex {
            field: spec.name.clone(),
            message: e.to_string(),
        })?;

    if spec.blank && spec.fixed_value.is_some() {
        return Err(SchemaError::BlankConflict { field: spec.name });
    }

    Ok(CompiledField { spec, width, regex })
}

/// Wrap the pattern so a match must cover the entire value.
fn compile_anchored(pattern: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!("^(?:{pattern})$"))
}
