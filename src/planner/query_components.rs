use serde::Serialize;

/// Per-clause SQL fragments, ready for assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryComponents {
    pub select: Vec<String>,
    pub from: String,
    pub joins: Vec<String>,
    /// WHERE predicates, ANDed on assembly.
    pub conditions: Vec<String>,
    pub group_by: Vec<String>,
    /// Reserved. Never populated.
    pub having: Vec<String>,
    pub order_by: Option<String>,
    pub limit: Option<u32>,
}
