use regex::Regex;

use crate::patterns::{compile, AggregateFn, AggregationKind, PatternError, SortDirection};

/// An aggregation verb and what it maps to.
#[derive(Debug, Clone)]
pub struct AggregationTerm {
    pub pattern: Regex,
    pub kind: AggregationKind,
}

impl AggregationTerm {
    pub fn new(pattern: &str, kind: AggregationKind) -> Result<Self, PatternError> {
        Ok(Self { pattern: compile(pattern)?, kind })
    }

    pub fn source(&self) -> &str {
        self.pattern.as_str()
    }
}

pub fn aggregation_terms() -> Result<Vec<AggregationTerm>, PatternError> {
    use AggregationKind::{Function, Ranking};

    Ok(vec![
        AggregationTerm::new(r"총|전체|합계|\btotal\b|\bsum\b", Function(AggregateFn::Sum))?,
        AggregationTerm::new(r"평균|\bavg\b|\baverage\b|\bmean\b", Function(AggregateFn::Avg))?,
        AggregationTerm::new(r"최대|최고|\bmax(?:imum)?\b|\bhighest\b", Function(AggregateFn::Max))?,
        AggregationTerm::new(r"최소|최저|\bmin(?:imum)?\b|\blowest\b", Function(AggregateFn::Min))?,
        AggregationTerm::new(
            r"개수|수량|건수|\bcount\b|\bhow\s+many\b|\bnumber\s+of\b",
            Function(AggregateFn::Count),
        )?,
        AggregationTerm::new(r"상위|\btop\b", Ranking(SortDirection::Desc))?,
        AggregationTerm::new(r"하위|\bbottom\b", Ranking(SortDirection::Asc))?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_and_bottom_are_ranking_markers() {
        let terms = aggregation_terms().unwrap();
        let hits: Vec<AggregationKind> = terms
            .iter()
            .filter(|t| t.pattern.is_match("top 3 and bottom 3"))
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            hits,
            vec![
                AggregationKind::Ranking(SortDirection::Desc),
                AggregationKind::Ranking(SortDirection::Asc),
            ]
        );
    }

    #[test]
    fn test_word_boundaries_keep_stop_from_being_top() {
        let terms = aggregation_terms().unwrap();
        assert!(!terms.iter().any(|t| t.pattern.is_match("stop the desktop")));
    }
}
