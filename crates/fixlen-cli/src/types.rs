use std::path::PathBuf;

use fixlen_model::LineResult;

/// Everything a finished check produced, consumed by the summary printer.
#[derive(Debug)]
pub struct CheckResult {
    pub data_file: PathBuf,
    pub schema_file: PathBuf,
    pub lines: Vec<LineResult>,
}

impl CheckResult {
    pub fn field_count(&self) -> usize {
        self.lines.iter().map(|line| line.fields.len()).sum()
    }

    pub fn failure_count(&self) -> usize {
        self.lines.iter().map(LineResult::failure_count).sum()
    }

    pub fn has_failures(&self) -> bool {
        self.failure_count() > 0
    }
}
