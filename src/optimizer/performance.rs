use serde::Serialize;

use crate::optimizer::scanners::{count, AGGREGATE_TOKEN, JOIN_TOKEN, SELECT_FROM_SELECT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplexityTier {
    Low,
    Medium,
    High,
}

impl ComplexityTier {
    pub fn from_weight(weight: u32) -> Self {
        match weight {
            0..=3 => ComplexityTier::Low,
            4..=8 => ComplexityTier::Medium,
            _ => ComplexityTier::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityTier::Low => "low",
            ComplexityTier::Medium => "medium",
            ComplexityTier::High => "high",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PerformanceAnalysis {
    pub estimated_complexity: ComplexityTier,
    pub join_count: u32,
    pub subquery_count: u32,
    pub aggregation_count: u32,
}

impl PerformanceAnalysis {
    /// `join*2 + subquery*3 + aggregation`.
    pub fn weight(&self) -> u32 {
        self.join_count * 2 + self.subquery_count * 3 + self.aggregation_count
    }
}

/// Tiered estimate of the cost of `sql`.
///
/// Counts subqueries with a SELECT…FROM…SELECT scan, which differs from the
/// parenthesised-SELECT count [`complexity_score`] uses. The two are kept
/// apart on purpose.
///
/// [`complexity_score`]: crate::optimizer::complexity_score
pub fn analyze_performance(sql: &str) -> PerformanceAnalysis {
    let mut analysis = PerformanceAnalysis {
        estimated_complexity: ComplexityTier::Low,
        join_count: count(&JOIN_TOKEN, sql),
        subquery_count: count(&SELECT_FROM_SELECT, sql),
        aggregation_count: count(&AGGREGATE_TOKEN, sql),
    };
    analysis.estimated_complexity = ComplexityTier::from_weight(analysis.weight());
    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(ComplexityTier::from_weight(0), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_weight(3), ComplexityTier::Low);
        assert_eq!(ComplexityTier::from_weight(4), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_weight(8), ComplexityTier::Medium);
        assert_eq!(ComplexityTier::from_weight(9), ComplexityTier::High);
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let sql = "select sum(a), count(b)\nfrom t\njoin u on t.id = u.id";
        let a = analyze_performance(sql);
        assert_eq!(a.join_count, 1);
        assert_eq!(a.aggregation_count, 2);
        assert_eq!(a.subquery_count, 0);
        assert_eq!(a.weight(), 4);
        assert_eq!(a.estimated_complexity, ComplexityTier::Medium);
    }

    #[test]
    fn test_single_line_nested_select_is_counted() {
        let a = analyze_performance("SELECT * FROM (SELECT id FROM t) x");
        assert_eq!(a.subquery_count, 1);
        assert_eq!(a.estimated_complexity, ComplexityTier::Low);
    }

    #[test]
    fn test_multi_line_nested_select_is_not_counted() {
        let a = analyze_performance("SELECT *\nFROM (\nSELECT id FROM t) x");
        assert_eq!(a.subquery_count, 0);
    }
}
