use serde::Serialize;

use crate::patterns::{AggregateFn, BusinessTerm, VocabEntry, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    BusinessTerm,
    Location,
    Category,
}

/// A fragment of the question bound to a schema concept.
///
/// Business terms carry a table, column and aggregate; vocabulary hits carry
/// a column and an inline equality condition but no table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    #[serde(rename = "aggregation_function", skip_serializing_if = "Option::is_none")]
    pub aggregation: Option<AggregateFn>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
}

impl Entity {
    pub fn from_term(term: &BusinessTerm) -> Self {
        Self {
            kind: EntityKind::BusinessTerm,
            value: term.name.clone(),
            column: Some(term.column.clone()),
            table: Some(term.table.clone()),
            aggregation: Some(term.aggregation),
            condition: None,
        }
    }

    pub fn from_vocabulary(kind: EntityKind, vocabulary: &Vocabulary, entry: &VocabEntry) -> Self {
        Self {
            kind,
            value: entry.value.clone(),
            column: Some(vocabulary.column.clone()),
            table: None,
            aggregation: None,
            condition: Some(vocabulary.condition_for(entry)),
        }
    }

    pub fn is_business_term(&self) -> bool {
        self.kind == EntityKind::BusinessTerm
    }

    /// `AGG(column)` when an aggregate is bound, otherwise the bare column.
    pub fn measure(&self) -> Option<String> {
        let column = self.column.as_deref()?;
        Some(match self.aggregation {
            Some(agg) => agg.apply(column),
            None => column.to_string(),
        })
    }
}
