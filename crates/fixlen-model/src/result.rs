use serde::{Deserialize, Serialize};

/// Outcome of checking one field of one line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResult {
    pub field_name: String,
    pub passed: bool,
    /// Human-readable outcome, e.g. "all checks passed" or
    /// "fixed value mismatch [AB]".
    pub message: String,
    /// Extracted value; empty when the line was too short to extract.
    pub actual_value: String,
}

impl FieldResult {
    pub fn pass(
        field_name: impl Into<String>,
        message: impl Into<String>,
        actual_value: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            passed: true,
            message: message.into(),
            actual_value: actual_value.into(),
        }
    }

    pub fn fail(
        field_name: impl Into<String>,
        message: impl Into<String>,
        actual_value: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            passed: false,
            message: message.into(),
            actual_value: actual_value.into(),
        }
    }
}

/// Outcome of checking one line, one entry per schema field in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineResult {
    pub fields: Vec<FieldResult>,
}

impl LineResult {
    pub fn failure_count(&self) -> usize {
        self.fields.iter().filter(|field| !field.passed).count()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}
