use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::catalog::ColumnInfo;

/// Foreign-key style mapping from a column of this table to another table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub ref_table: String,
    pub ref_column: String,
}

impl ForeignKey {
    pub fn new(column: &str, ref_table: &str, ref_column: &str) -> Self {
        Self {
            column: column.to_string(),
            ref_table: ref_table.to_string(),
            ref_column: ref_column.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub name: String,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

impl IndexInfo {
    pub fn new(name: &str, columns: &[&str], unique: bool) -> Self {
        Self {
            name: name.to_string(),
            columns: columns.iter().map(|c| c.to_string()).collect(),
            unique,
        }
    }
}

/// A single table of the catalog.
///
/// Columns keep their introspection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableInfo {
    pub columns: IndexMap<String, ColumnInfo>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub indexes: Vec<IndexInfo>,
}

impl TableInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, name: &str, info: ColumnInfo) -> Self {
        self.columns.insert(name.to_string(), info);
        self
    }

    pub fn with_foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    pub fn with_index(mut self, index: IndexInfo) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.get(name)
    }

    /// True when some index leads with `column`.
    pub fn is_indexed(&self, column: &str) -> bool {
        self.indexes
            .iter()
            .any(|idx| idx.columns.first().map(|c| c == column).unwrap_or(false))
    }
}
