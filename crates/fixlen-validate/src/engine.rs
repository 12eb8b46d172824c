//! Per-line checking: field extraction plus the rule chain.

use encoding_rs::Encoding;
use fixlen_model::{FieldResult, LineResult};

use crate::compile::CompiledSchema;
use crate::extract::{LineSlicer, WidthMode};
use crate::rules::run_rules;

/// Checks single lines against a compiled schema.
///
/// Infallible by construction: every problem with the data, including a
/// line too short for a field, is reported as a failed `FieldResult`.
#[derive(Debug, Clone, Copy)]
pub struct LineChecker {
    mode: WidthMode,
    encoding: &'static Encoding,
}

impl LineChecker {
    pub fn new(mode: WidthMode, encoding: &'static Encoding) -> Self {
        Self { mode, encoding }
    }

    /// Check one line against every schema field in order.
    ///
    /// The offset advances by the field width even when extraction fails,
    /// so later fields keep their schema positions.
    pub fn check_line(&self, line: &str, schema: &CompiledSchema) -> LineResult {
        let slicer = LineSlicer::new(line, self.mode, self.encoding);
        let mut fields = Vec::with_capacity(schema.len());
        let mut offset = 0usize;

        for field in &schema.fields {
            match slicer.extract(offset, field.width) {
                Some(value) => fields.push(run_rules(field, &value)),
                None => fields.push(FieldResult::fail(
                    &field.spec.name,
                    "insufficient field length",
                    "",
                )),
            }
            offset += field.width;
        }

        LineResult { fields }
    }
}
