//! Fixed-width record validation engine.
//!
//! Compiles declarative schemas (consistency checks plus eager regex
//! compilation), extracts fields by byte or character offsets, and runs the
//! fixed-value / blank / pattern rule chain over every field of every line.
//! Per-field failures are data, not errors; sessions go through
//! [`FixedWidthChecker`].

pub mod checker;
pub mod compile;
pub mod engine;
pub mod extract;
pub mod rules;

pub use checker::{CheckerOptions, FixedWidthChecker};
pub use compile::{CompiledField, CompiledSchema, compile_schema};
pub use engine::LineChecker;
pub use extract::{LineSlicer, WidthMode};
pub use fixlen_model::{CheckError, FieldResult, LineResult, Result, Schema, SchemaError};
pub use rules::{FieldRule, RULE_CHAIN, run_rules};
