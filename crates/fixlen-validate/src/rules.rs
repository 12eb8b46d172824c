//! The per-field rule chain.
//!
//! A closed set of three evaluators runs in a fixed order (fixed value,
//! blank, pattern). The first failure becomes the field's result; a rule
//! whose constraint is unset passes automatically.

use fixlen_model::FieldResult;

use crate::compile::CompiledField;

/// One evaluator of the field rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Extracted value must equal the configured literal exactly.
    Fixed,
    /// Extracted value must be empty or whitespace-only.
    Blank,
    /// Extracted value must match the configured pattern in full.
    Pattern,
}

/// Evaluation order. First failure short-circuits.
pub const RULE_CHAIN: [FieldRule; 3] = [FieldRule::Fixed, FieldRule::Blank, FieldRule::Pattern];

impl FieldRule {
    /// Returns the failure message, or None when this rule passes (either
    /// the constraint holds or it is not configured for the field).
    fn failure(self, field: &CompiledField, value: &str) -> Option<String> {
        match self {
            FieldRule::Fixed => match &field.spec.fixed_value {
                Some(expected) if value != expected => {
                    Some(format!("fixed value mismatch [{value}]"))
                }
                _ => None,
            },
            FieldRule::Blank => {
                if field.spec.blank && !value.trim().is_empty() {
                    Some(format!("not blank [{value}]"))
                } else {
                    None
                }
            }
            FieldRule::Pattern => match &field.regex {
                Some(regex) if !regex.is_match(value) => {
                    Some(format!("regex mismatch [{value}]"))
                }
                _ => None,
            },
        }
    }
}

/// Run the full chain over one extracted value.
pub fn run_rules(field: &CompiledField, value: &str) -> FieldResult {
    for rule in RULE_CHAIN {
        if let Some(message) = rule.failure(field, value) {
            return FieldResult::fail(&field.spec.name, message, value);
        }
    }
    FieldResult::pass(&field.spec.name, "all checks passed", value)
}
