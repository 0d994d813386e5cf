use indexmap::IndexMap;
use tracing::info;

use crate::catalog::{JoinEdge, SchemaError, SchemaIntrospector, SchemaSnapshot, TableInfo};

/// Immutable table/column/join catalog.
///
/// Built once from a [`SchemaSnapshot`] and never mutated afterwards, so a
/// shared reference can be read from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCatalog {
    tables: IndexMap<String, TableInfo>,
    join_graph: Vec<JoinEdge>,
}

impl SchemaCatalog {
    /// Pull the schema from `introspector` and validate it.
    pub fn load(introspector: &dyn SchemaIntrospector) -> Result<Self, SchemaError> {
        let snapshot = introspector.introspect()?;
        let catalog = Self::from_snapshot(snapshot)?;
        info!(
            tables_count = catalog.tables.len(),
            join_edges = catalog.join_graph.len(),
            "schema catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_snapshot(snapshot: SchemaSnapshot) -> Result<Self, SchemaError> {
        if snapshot.tables.is_empty() {
            return Err(SchemaError::Empty);
        }

        for edge in &snapshot.join_edges {
            for table in [&edge.left, &edge.right] {
                if !snapshot.tables.contains_key(table) {
                    return Err(SchemaError::UnknownJoinTable {
                        left: edge.left.clone(),
                        right: edge.right.clone(),
                        table: table.clone(),
                    });
                }
            }
        }

        Ok(Self { tables: snapshot.tables, join_graph: snapshot.join_edges })
    }

    pub fn table(&self, name: &str) -> Option<&TableInfo> {
        self.tables.get(name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.tables.contains_key(name)
    }

    pub fn table_names(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    pub fn join_graph(&self) -> &[JoinEdge] {
        &self.join_graph
    }

    /// Whether a qualified `table.column` reference exists in the catalog.
    pub fn resolves(&self, qualified: &str) -> bool {
        match qualified.split_once('.') {
            Some((table, column)) => self
                .table(table)
                .map(|t| t.column(column).is_some())
                .unwrap_or(false),
            None => false,
        }
    }
}
