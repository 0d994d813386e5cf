use indexmap::IndexSet;
use serde::Serialize;

use crate::{
    parser::{Entity, Intent},
    patterns::{AggregationKind, SortDirection},
};

/// An aggregation verb found in the question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationMatch {
    pub function: AggregationKind,
    pub source_pattern: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Sorting {
    pub direction: SortDirection,
}

/// Intermediate representation of one question.
///
/// Every list keeps extraction order. Nothing is deduplicated: two patterns
/// naming the same concept produce two entries.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedQuery {
    pub intent: Intent,
    pub entities: Vec<Entity>,
    pub time_conditions: Vec<String>,
    pub aggregations: Vec<AggregationMatch>,
    pub filters: Vec<String>,
    pub sorting: Option<Sorting>,
    pub grouping: Vec<String>,
}

impl ParsedQuery {
    pub fn business_terms(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(|e| e.is_business_term())
    }

    /// Tables named by entities, first occurrence first.
    pub fn touched_tables(&self) -> IndexSet<String> {
        self.entities.iter().filter_map(|e| e.table.clone()).collect()
    }

    pub fn wants_ranking(&self) -> bool {
        self.aggregations.iter().any(|a| a.function.is_ranking())
    }

    /// Nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
            && self.time_conditions.is_empty()
            && self.aggregations.is_empty()
            && self.filters.is_empty()
            && self.sorting.is_none()
            && self.grouping.is_empty()
    }
}
