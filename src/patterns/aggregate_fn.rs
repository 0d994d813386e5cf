use std::fmt::Display;

use serde::Serialize;

/// SQL aggregate applied to a business-term column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateFn {
    Sum,
    Avg,
    Count,
    CountDistinct,
    Max,
    Min,
}

impl AggregateFn {
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFn::Sum => "SUM",
            AggregateFn::Avg => "AVG",
            AggregateFn::Count | AggregateFn::CountDistinct => "COUNT",
            AggregateFn::Max => "MAX",
            AggregateFn::Min => "MIN",
        }
    }

    /// Render the call over `column`.
    pub fn apply(&self, column: &str) -> String {
        match self {
            AggregateFn::CountDistinct => format!("COUNT(DISTINCT {column})"),
            _ => format!("{}({column})", self.name()),
        }
    }
}

impl Display for AggregateFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AggregateFn::CountDistinct => write!(f, "COUNT DISTINCT"),
            _ => write!(f, "{}", self.name()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SortDirection {
    #[serde(rename = "ASC")]
    Asc,
    #[serde(rename = "DESC")]
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// What an aggregation verb maps to: a SQL aggregate, or the top/bottom
/// ranking marker that asks for a LIMIT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AggregationKind {
    Function(AggregateFn),
    Ranking(SortDirection),
}

impl AggregationKind {
    pub fn is_ranking(&self) -> bool {
        matches!(self, AggregationKind::Ranking(_))
    }
}
