use serde::{Deserialize, Serialize};

/// Column metadata as reported by schema introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Database type name, kept verbatim (e.g. `INTEGER`, `VARCHAR(50)`).
    pub sql_type: String,
    #[serde(default)]
    pub nullable: bool,
}

impl ColumnInfo {
    pub fn new(sql_type: &str, nullable: bool) -> Self {
        Self { sql_type: sql_type.to_string(), nullable }
    }

    pub fn required(sql_type: &str) -> Self {
        Self::new(sql_type, false)
    }

    pub fn optional(sql_type: &str) -> Self {
        Self::new(sql_type, true)
    }
}
