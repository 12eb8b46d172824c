//! Integration tests for the check command.

use std::io::Write;
use std::path::Path;

use fixlen_cli::cli::{CheckArgs, LengthModeArg};
use fixlen_cli::commands::run_check;
use tempfile::NamedTempFile;

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

fn check_args(data: &Path, schema: &Path) -> CheckArgs {
    CheckArgs {
        data_file: data.to_path_buf(),
        schema_file: schema.to_path_buf(),
        charset: "utf-8".to_string(),
        length_mode: LengthModeArg::Bytes,
    }
}

#[test]
fn check_reports_per_field_failures() {
    let schema = temp_file(
        ".json",
        r#"[{"name": "code", "length": 1, "fixedValue": "2"},
            {"name": "digits", "length": 10, "regex": "\\d+"}]"#,
    );
    let data = temp_file(".txt", "21234567890\n2ABCDEFGHIJ\n");

    let result = run_check(&check_args(data.path(), schema.path())).unwrap();

    assert_eq!(result.lines.len(), 2);
    assert_eq!(result.field_count(), 4);
    assert_eq!(result.failure_count(), 1);
    assert!(result.has_failures());
    assert_eq!(result.lines[1].fields[1].message, "regex mismatch [ABCDEFGHIJ]");
}

#[test]
fn clean_data_has_no_failures() {
    let schema = temp_file(
        ".yaml",
        "- name: flag\n  length: 1\n- name: filler\n  length: 3\n  blank: true\n",
    );
    let data = temp_file(".txt", "A   \nB   \n");

    let result = run_check(&check_args(data.path(), schema.path())).unwrap();

    assert_eq!(result.failure_count(), 0);
    assert!(!result.has_failures());
}

#[test]
fn unknown_charset_is_rejected_before_any_io() {
    let schema = temp_file(".json", "[]");
    let data = temp_file(".txt", "");

    let mut args = check_args(data.path(), schema.path());
    args.charset = "not-a-charset".to_string();

    let err = run_check(&args).unwrap_err();
    assert!(err.to_string().contains("unknown charset label"));
}

#[test]
fn defective_schema_aborts_the_check() {
    let schema = temp_file(".json", r#"[{"name": "bad", "length": -1}]"#);
    let data = temp_file(".txt", "anything\n");

    let err = run_check(&check_args(data.path(), schema.path())).unwrap_err();
    let rendered = format!("{err:#}");
    assert!(rendered.contains("invalid schema"));
    assert!(rendered.contains("width must be positive"));
}

#[test]
fn missing_data_file_keeps_path_context() {
    let schema = temp_file(".json", r#"[{"name": "field", "length": 3}]"#);

    let err = run_check(&check_args(
        Path::new("/nonexistent/data.txt"),
        schema.path(),
    ))
    .unwrap_err();
    assert!(err.to_string().contains("/nonexistent/data.txt"));
}

#[test]
fn char_mode_counts_characters() {
    let schema = temp_file(".json", r#"[{"name": "kana", "length": 2}]"#);
    let data = temp_file(".txt", "あい\n");

    let mut args = check_args(data.path(), schema.path());
    args.length_mode = LengthModeArg::Chars;

    let result = run_check(&args).unwrap();
    assert!(!result.has_failures());
}
