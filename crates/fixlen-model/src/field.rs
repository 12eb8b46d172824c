use serde::{Deserialize, Serialize};

/// One field of a fixed-width record layout.
///
/// Fields are listed in record order; a field's offset is the sum of the
/// widths of every field before it. `width` is measured in bytes or
/// characters depending on the session's width mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    /// Field name used in results and messages.
    pub name: String,
    /// Field width in the session unit. Schema files may use the `length`
    /// key instead. Kept signed so defective files are representable;
    /// compilation rejects anything non-positive.
    #[serde(alias = "length")]
    pub width: i64,
    /// Exact literal the extracted value must equal, if set.
    #[serde(default)]
    pub fixed_value: Option<String>,
    /// When true the extracted value must be empty or whitespace-only.
    #[serde(default)]
    pub blank: bool,
    /// Pattern the entire extracted value must match, if set.
    #[serde(default)]
    pub regex: Option<String>,
}

/// An ordered fixed-width record layout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Total record width in the session unit. Widths are summed as
    /// written, so an unvalidated schema may report a negative total.
    pub fn total_width(&self) -> i64 {
        self.fields.iter().map(|field| field.width).sum()
    }
}
