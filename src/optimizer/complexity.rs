use crate::optimizer::scanners::{count, AGGREGATE_TOKEN, GROUP_BY, JOIN_TOKEN, ORDER_BY, PAREN_SELECT};

/// Raw counts behind [`complexity_score`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreCounts {
    pub joins: u32,
    pub subqueries: u32,
    pub aggregates: u32,
    pub has_group_by: bool,
    pub has_order_by: bool,
}

impl ScoreCounts {
    pub fn scan(sql: &str) -> Self {
        Self {
            joins: count(&JOIN_TOKEN, sql),
            subqueries: count(&PAREN_SELECT, sql),
            aggregates: count(&AGGREGATE_TOKEN, sql),
            has_group_by: GROUP_BY.is_match(sql),
            has_order_by: ORDER_BY.is_match(sql),
        }
    }

    pub fn score(&self) -> u32 {
        let mut score = 1;
        score += self.joins * 2;
        score += self.subqueries * 3;
        score += self.aggregates;
        if self.has_group_by {
            score += 2;
        }
        if self.has_order_by {
            score += 1;
        }
        score
    }
}

/// `1 + joins*2 + (SELECT subqueries)*3 + aggregates + 2·GROUP BY + 1·ORDER BY`.
pub fn complexity_score(sql: &str) -> u32 {
    ScoreCounts::scan(sql).score()
}
