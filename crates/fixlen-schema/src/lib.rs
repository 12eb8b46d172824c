//! Schema file loading for fixed-width record layouts.

pub mod error;
pub mod loader;

pub use error::{Result, SchemaFileError};
pub use loader::load_schema_file;
