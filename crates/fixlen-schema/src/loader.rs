//! Schema file loading with extension-based format dispatch.

use std::fs;
use std::path::Path;

use fixlen_model::Schema;

use crate::error::{Result, SchemaFileError};

enum SchemaFormat {
    Json,
    Yaml,
}

/// Load a schema from a JSON or YAML file.
///
/// The format is chosen by file extension: `.json` via serde_json,
/// `.yml`/`.yaml` via serde_yaml. Loading only parses; semantic checks
/// (widths, fixed values, regexes) happen at schema compilation.
pub fn load_schema_file(path: &Path) -> Result<Schema> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let format = match extension.as_deref() {
        Some("json") => SchemaFormat::Json,
        Some("yml" | "yaml") => SchemaFormat::Yaml,
        _ => {
            return Err(SchemaFileError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let contents = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            SchemaFileError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            SchemaFileError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let schema: Schema = match format {
        SchemaFormat::Json => {
            serde_json::from_str(&contents).map_err(|e| SchemaFileError::Json {
                path: path.to_path_buf(),
                source: e,
            })?
        }
        SchemaFormat::Yaml => {
            serde_yaml::from_str(&contents).map_err(|e| SchemaFileError::Yaml {
                path: path.to_path_buf(),
                source: e,
            })?
        }
    };

    tracing::debug!(
        path = %path.display(),
        fields = schema.len(),
        "loaded schema file"
    );

    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    fn create_schema_file(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_load_json_schema() {
        let file = create_schema_file(
            ".json",
            r#"[{"name": "code", "length": 1, "fixedValue": "2"},
                {"name": "digits", "width": 10, "regex": "\\d+"}]"#,
        );
        let schema = load_schema_file(file.path()).unwrap();

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.fields[0].name, "code");
        assert_eq!(schema.fields[0].fixed_value.as_deref(), Some("2"));
        assert_eq!(schema.fields[1].width, 10);
        assert_eq!(schema.fields[1].regex.as_deref(), Some(r"\d+"));
    }

    #[test]
    fn test_load_yaml_schema() {
        let file = create_schema_file(
            ".yaml",
            "- name: flag\n  length: 3\n  blank: true\n- name: id\n  width: 5\n",
        );
        let schema = load_schema_file(file.path()).unwrap();

        assert_eq!(schema.len(), 2);
        assert!(schema.fields[0].blank);
        assert_eq!(schema.total_width(), 8);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = create_schema_file(".txt", "[]");
        let result = load_schema_file(file.path());

        assert!(matches!(
            result,
            Err(SchemaFileError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_schema_file(&PathBuf::from("/nonexistent/layout.json"));

        assert!(matches!(result, Err(SchemaFileError::FileNotFound { .. })));
    }

    #[test]
    fn test_malformed_json() {
        let file = create_schema_file(".json", "{not valid");
        let result = load_schema_file(file.path());

        assert!(matches!(result, Err(SchemaFileError::Json { .. })));
    }
}
