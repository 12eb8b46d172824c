//! Load-once / validate-many checking facade.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use fixlen_model::{CheckError, LineResult, Result, Schema, SchemaError};

use crate::compile::{CompiledSchema, compile_schema};
use crate::engine::LineChecker;
use crate::extract::WidthMode;

/// Session options: the encoding used for byte-mode slicing and file
/// decoding, and the width unit.
#[derive(Debug, Clone, Copy)]
pub struct CheckerOptions {
    pub encoding: &'static Encoding,
    pub mode: WidthMode,
}

impl Default for CheckerOptions {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::UTF_8,
            mode: WidthMode::Bytes,
        }
    }
}

/// A fixed-width checking session: load a schema once, validate many lines.
#[derive(Debug)]
pub struct FixedWidthChecker {
    line_checker: LineChecker,
    encoding: &'static Encoding,
    schema: Option<CompiledSchema>,
}

impl FixedWidthChecker {
    pub fn new(options: CheckerOptions) -> Self {
        Self {
            line_checker: LineChecker::new(options.mode, options.encoding),
            encoding: options.encoding,
            schema: None,
        }
    }

    /// Validate and compile a schema for this session.
    ///
    /// Replaces any previously loaded schema. On failure the session holds
    /// no schema at all; validation calls report `SchemaNotLoaded` until a
    /// valid schema is loaded.
    pub fn load_schema(&mut self, schema: Schema) -> std::result::Result<(), SchemaError> {
        self.schema = None;
        let compiled = compile_schema(schema)?;
        tracing::debug!(fields = compiled.len(), "schema loaded");
        self.schema = Some(compiled);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.schema.is_some()
    }

    fn loaded_schema(&self) -> Result<&CompiledSchema> {
        self.schema.as_ref().ok_or(CheckError::SchemaNotLoaded)
    }

    /// Check a single line.
    pub fn validate_line(&self, line: &str) -> Result<LineResult> {
        let schema = self.loaded_schema()?;
        Ok(self.line_checker.check_line(line, schema))
    }

    /// Check many lines, producing one result per line in input order.
    pub fn validate_lines<I, S>(&self, lines: I) -> Result<Vec<LineResult>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let schema = self.loaded_schema()?;
        Ok(lines
            .into_iter()
            .map(|line| self.line_checker.check_line(line.as_ref(), schema))
            .collect())
    }

    /// Read a whole data file, decode it with the session encoding, and
    /// check every line.
    pub fn validate_file(&self, path: &Path) -> Result<Vec<LineResult>> {
        let schema = self.loaded_schema()?;
        let bytes = fs::read(path).map_err(|e| CheckError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let (text, _, _) = self.encoding.decode(&bytes);
        let results: Vec<LineResult> = text
            .lines()
            .map(|line| self.line_checker.check_line(line, schema))
            .collect();
        tracing::debug!(
            path = %path.display(),
            lines = results.len(),
            failures = results.iter().map(LineResult::failure_count).sum::<usize>(),
            "validated data file"
        );
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixlen_model::FieldSpec;

    fn spec(name: &str, width: i64) -> FieldSpec {
        FieldSpec {
            name: name.to_string(),
            width,
            fixed_value: None,
            blank: false,
            regex: None,
        }
    }

    #[test]
    fn validate_before_load_is_rejected() {
        let checker = FixedWidthChecker::new(CheckerOptions::default());
        assert!(!checker.is_loaded());
        assert!(matches!(
            checker.validate_line("anything"),
            Err(CheckError::SchemaNotLoaded)
        ));
    }

    #[test]
    fn failed_load_leaves_session_unloaded() {
        let mut checker = FixedWidthChecker::new(CheckerOptions::default());
        checker
            .load_schema(Schema::new(vec![spec("ok", 3)]))
            .expect("load valid schema");
        assert!(checker.is_loaded());

        let err = checker
            .load_schema(Schema::new(vec![spec("bad", -1)]))
            .expect_err("defective schema");
        assert!(matches!(err, SchemaError::NonPositiveWidth { .. }));
        assert!(!checker.is_loaded());
        assert!(matches!(
            checker.validate_line("abc"),
            Err(CheckError::SchemaNotLoaded)
        ));
    }

    #[test]
    fn reload_is_idempotent() {
        let schema = Schema::new(vec![FieldSpec {
            regex: Some("[A-Z]+".to_string()),
            ..spec("upper", 3)
        }]);
        let mut checker = FixedWidthChecker::new(CheckerOptions::default());

        checker.load_schema(schema.clone()).expect("first load");
        let first = checker.validate_line("ABC").expect("validate");

        checker.load_schema(schema).expect("second load");
        let second = checker.validate_line("ABC").expect("validate");

        assert_eq!(first.failure_count(), second.failure_count());
        assert_eq!(first.fields[0].message, second.fields[0].message);
    }

    #[test]
    fn validate_lines_keeps_input_order() {
        let mut checker = FixedWidthChecker::new(CheckerOptions::default());
        checker
            .load_schema(Schema::new(vec![FieldSpec {
                regex: Some(r"\d".to_string()),
                ..spec("digit", 1)
            }]))
            .expect("load schema");

        let results = checker.validate_lines(["1", "x", "2"]).expect("validate");
        assert_eq!(results.len(), 3);
        assert!(!results[0].has_failures());
        assert!(results[1].has_failures());
        assert!(!results[2].has_failures());
    }
}
