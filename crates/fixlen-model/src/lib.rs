pub mod error;
pub mod field;
pub mod result;

pub use error::{CheckError, Result, SchemaError};
pub use field::{FieldSpec, Schema};
pub use result::{FieldResult, LineResult};
