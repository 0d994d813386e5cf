use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// A declared join between two tables of the catalog.
///
/// Edges are walked in declaration order, so the order of the join graph is
/// the order in which `JOIN` clauses are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinEdge {
    pub left: String,
    pub right: String,
    pub predicate: String,
}

impl JoinEdge {
    pub fn new(left: &str, right: &str, predicate: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            predicate: predicate.to_string(),
        }
    }

    /// Both endpoints are in `tables`.
    pub fn connects(&self, tables: &IndexSet<String>) -> bool {
        tables.contains(&self.left) && tables.contains(&self.right)
    }

    pub fn to_join_clause(&self) -> String {
        format!("JOIN {} ON {}", self.right, self.predicate)
    }
}
