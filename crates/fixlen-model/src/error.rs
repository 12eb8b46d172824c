use std::path::PathBuf;

use thiserror::Error;

/// A schema that cannot be compiled. The first violating field aborts the
/// load; nothing is partially applied.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("field name must not be empty")]
    EmptyName,
    #[error("field '{field}': width must be positive")]
    NonPositiveWidth { field: String },
    #[error("field '{field}': fixed value length does not match field width")]
    FixedValueLength { field: String },
    #[error("field '{field}': invalid regex: {message}")]
    InvalidRegex { field: String, message: String },
    #[error("field '{field}': blank check conflicts with a fixed value")]
    BlankConflict { field: String },
}

/// Session-level failure from the validation facade.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("no schema loaded; call load_schema first")]
    SchemaNotLoaded,
    #[error("failed to read data file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CheckError>;
