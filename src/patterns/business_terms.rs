use regex::Regex;

use crate::patterns::{compile_all, AggregateFn, PatternError};

/// A business concept the question may name, bound to the column and
/// aggregate that measure it.
#[derive(Debug, Clone)]
pub struct BusinessTerm {
    pub name: String,
    pub patterns: Vec<Regex>,
    pub column: String,
    pub table: String,
    pub aggregation: AggregateFn,
}

impl BusinessTerm {
    pub fn new(
        name: &str,
        patterns: &[&str],
        column: &str,
        table: &str,
        aggregation: AggregateFn,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            name: name.to_string(),
            patterns: compile_all(patterns)?,
            column: column.to_string(),
            table: table.to_string(),
            aggregation,
        })
    }

    /// Number of this term's patterns found in `text`. Each one becomes its
    /// own entity.
    pub fn hits(&self, text: &str) -> usize {
        self.patterns.iter().filter(|p| p.is_match(text)).count()
    }
}

pub fn business_terms() -> Result<Vec<BusinessTerm>, PatternError> {
    Ok(vec![
        BusinessTerm::new(
            "revenue",
            &[r"매출", r"수익", r"매출액", r"수입", r"판매액", r"\brevenue\b", r"\bsales\s+amount\b", r"\bturnover\b"],
            "sales.amount",
            "sales",
            AggregateFn::Sum,
        )?,
        BusinessTerm::new(
            "profit",
            &[r"수익", r"이익", r"순이익", r"\bprofits?\b", r"\bmargins?\b"],
            // assumes a 70% cost ratio
            "sales.amount - (order_items.quantity * products.price * 0.7)",
            "sales",
            AggregateFn::Sum,
        )?,
        BusinessTerm::new(
            "customer_count",
            &[r"고객\s*수", r"고객\s*숫자", r"회원\s*수", r"\bnumber\s+of\s+customers\b", r"\bcustomer\s+count\b"],
            "customers.id",
            "customers",
            AggregateFn::CountDistinct,
        )?,
        BusinessTerm::new(
            "customer_age",
            &[r"고객\s*나이", r"연령", r"나이", r"\bcustomer\s+ages?\b"],
            "customers.age",
            "customers",
            AggregateFn::Avg,
        )?,
        BusinessTerm::new(
            "product_count",
            &[r"제품\s*수", r"상품\s*수", r"아이템\s*수", r"\bnumber\s+of\s+products\b", r"\bproduct\s+count\b"],
            "products.id",
            "products",
            AggregateFn::Count,
        )?,
        BusinessTerm::new(
            "inventory",
            &[r"재고", r"재고량", r"보유량", r"\binventory\b", r"\bstock\b"],
            "products.stock_quantity",
            "products",
            AggregateFn::Sum,
        )?,
        BusinessTerm::new(
            "order_count",
            &[r"주문\s*수", r"주문\s*건수", r"거래\s*건수", r"\bnumber\s+of\s+orders\b", r"\border\s+count\b"],
            "orders.id",
            "orders",
            AggregateFn::Count,
        )?,
        BusinessTerm::new(
            "order_amount",
            &[r"주문\s*금액", r"거래\s*금액", r"주문액", r"\border\s+(?:amount|value)s?\b"],
            "orders.total_amount",
            "orders",
            AggregateFn::Avg,
        )?,
        BusinessTerm::new(
            "units_sold",
            &[r"판매량", r"판매\s*수량", r"\bbest[-\s]?selling\b", r"\bunits\s+sold\b"],
            "order_items.quantity",
            "order_items",
            AggregateFn::Sum,
        )?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn term(name: &str) -> BusinessTerm {
        business_terms().unwrap().into_iter().find(|t| t.name == name).unwrap()
    }

    #[test]
    fn test_every_matching_pattern_counts() {
        // 매출 and 매출액 both match
        assert_eq!(term("revenue").hits("매출액 알려줘"), 2);
        assert_eq!(term("revenue").hits("total REVENUE please"), 1);
        assert_eq!(term("revenue").hits("how many orders"), 0);
    }

    #[test]
    fn test_shared_pattern_hits_two_terms() {
        assert_eq!(term("revenue").hits("수익"), 1);
        assert_eq!(term("profit").hits("수익"), 1);
    }

    #[test]
    fn test_best_selling_spellings() {
        let t = term("units_sold");
        assert_eq!(t.hits("best-selling"), 1);
        assert_eq!(t.hits("best selling"), 1);
        assert_eq!(t.hits("bestselling"), 1);
    }
}
