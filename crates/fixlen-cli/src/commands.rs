//! Command implementations.

use anyhow::{Context, bail};
use encoding_rs::Encoding;
use fixlen_model::LineResult;
use fixlen_schema::load_schema_file;
use fixlen_validate::{CheckerOptions, FixedWidthChecker, WidthMode};

use crate::cli::{CheckArgs, LengthModeArg};
use crate::types::CheckResult;

/// Run `fixlen check`: load the schema, validate the data file, and hand
/// the per-line results to the summary printer.
pub fn run_check(args: &CheckArgs) -> anyhow::Result<CheckResult> {
    let Some(encoding) = Encoding::for_label(args.charset.as_bytes()) else {
        bail!("unknown charset label '{}'", args.charset);
    };
    let mode = match args.length_mode {
        LengthModeArg::Bytes => WidthMode::Bytes,
        LengthModeArg::Chars => WidthMode::Chars,
    };
    tracing::info!(
        data_file = %args.data_file.display(),
        schema_file = %args.schema_file.display(),
        charset = encoding.name(),
        "starting check"
    );

    let schema = load_schema_file(&args.schema_file)?;

    let mut checker = FixedWidthChecker::new(CheckerOptions { encoding, mode });
    checker
        .load_schema(schema)
        .with_context(|| format!("invalid schema {}", args.schema_file.display()))?;

    let lines = checker.validate_file(&args.data_file)?;

    tracing::info!(
        lines = lines.len(),
        failures = lines.iter().map(LineResult::failure_count).sum::<usize>(),
        "check complete"
    );

    Ok(CheckResult {
        data_file: args.data_file.clone(),
        schema_file: args.schema_file.clone(),
        lines,
    })
}
