#[cfg(test)]
pub mod fixtures {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::{FixedClock, SqlTranslator, StaticSchema, Translation, TranslatorConfig};

    pub fn translator_on(y: i32, m: u32, d: u32) -> SqlTranslator {
        let today = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        SqlTranslator::new(&StaticSchema::commerce(), TranslatorConfig::default())
            .unwrap()
            .with_clock(Arc::new(FixedClock(today)))
    }

    pub fn translator() -> SqlTranslator {
        translator_on(2024, 6, 15)
    }

    pub fn translate(question: &str) -> Translation {
        translator()
            .generate(question)
            .translation()
            .cloned()
            .unwrap_or_else(|| panic!("translation failed for {question:?}"))
    }
}

#[cfg(test)]
mod scenarios {
    use std::{sync::Arc, thread};

    use serde_json::Value;

    use super::fixtures::*;
    use crate::{
        optimizer::ComplexityTier,
        parser::{EntityKind, Intent},
        patterns::{AggregateFn, AggregationKind, SortDirection},
        TranslationResult,
    };

    #[test]
    fn test_total_revenue_last_month() {
        let t = translate("what was total revenue last month");

        assert_eq!(
            t.sql,
            "SELECT SUM(sales.amount)\n\
             FROM sales\n\
             WHERE EXTRACT(YEAR FROM sale_date) = 2024 AND EXTRACT(MONTH FROM sale_date) = 5"
        );
        assert_eq!(t.parsed_intent.intent, Intent::Aggregation);
        assert_eq!(t.parsed_intent.entities.len(), 1);
        assert_eq!(t.parsed_intent.entities[0].value, "revenue");
        assert_eq!(t.parsed_intent.entities[0].aggregation, Some(AggregateFn::Sum));
        assert_eq!(t.parsed_intent.time_conditions.len(), 1);
        assert_eq!(t.complexity_score, 2);
        assert_eq!(t.optimization_report.performance_analysis.estimated_complexity, ComplexityTier::Low);
        assert!(t.optimization_report.suggestions.is_empty());
    }

    #[test]
    fn test_last_month_in_january() {
        let result = translator_on(2025, 1, 3).generate("지난달 매출");
        assert_eq!(
            result.sql(),
            Some(
                "SELECT SUM(sales.amount)\n\
                 FROM sales\n\
                 WHERE EXTRACT(YEAR FROM sale_date) = 2024 AND EXTRACT(MONTH FROM sale_date) = 12"
            )
        );
    }

    #[test]
    fn test_top_best_selling_products_uses_fixed_limit() {
        for question in ["top 5 best-selling products", "top 10 best-selling products", "top 20 best-selling products"] {
            let t = translate(question);
            assert_eq!(
                t.sql,
                "SELECT SUM(order_items.quantity)\n\
                 FROM order_items\n\
                 ORDER BY SUM(order_items.quantity) DESC\n\
                 LIMIT 5",
                "{question}"
            );
            assert_eq!(t.parsed_intent.intent, Intent::Ranking);
            assert!(t
                .parsed_intent
                .aggregations
                .iter()
                .any(|a| a.function == AggregationKind::Ranking(SortDirection::Desc)));
        }
    }

    #[test]
    fn test_unrecognised_question() {
        let t = translate("hello there");

        assert_eq!(t.sql, "SELECT *\nFROM sales");
        assert!(t.parsed_intent.is_empty());
        assert_eq!(t.parsed_intent.intent, Intent::General);
        assert_eq!(t.complexity_score, 1);
        assert_eq!(t.optimization_report.performance_analysis.estimated_complexity, ComplexityTier::Low);
        assert!(!t.sql.contains("WHERE"));
        assert!(!t.sql.contains("GROUP BY"));
    }

    #[test]
    fn test_two_terms_and_two_cities() {
        let t = translate("compare revenue and order count in Seoul and Busan");

        let kinds: Vec<EntityKind> = t.parsed_intent.entities.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![EntityKind::BusinessTerm, EntityKind::BusinessTerm, EntityKind::Location, EntityKind::Location]
        );
        assert_eq!(t.parsed_intent.intent, Intent::Comparison);
        assert_eq!(
            t.sql,
            "SELECT SUM(sales.amount), COUNT(orders.id)\n\
             FROM sales\n\
             JOIN orders ON sales.order_id = orders.id\n\
             WHERE customers.city = '서울' AND customers.city = '부산'"
        );
        assert_eq!(
            t.optimization_report.optimizations,
            vec!["CREATE INDEX idx_customers_city ON customers(city);"]
        );
    }

    #[test]
    fn test_grouped_sorted_query_without_limit() {
        let t = translate("revenue by city, highest first");

        assert_eq!(
            t.sql,
            "SELECT SUM(sales.amount), customers.city\n\
             FROM sales\n\
             GROUP BY customers.city\n\
             ORDER BY SUM(sales.amount) DESC"
        );
        assert_eq!(
            t.optimization_report.suggestions,
            vec!["Adding a LIMIT to a sorted query improves performance."]
        );
        let perf = t.optimization_report.performance_analysis;
        assert_eq!((perf.join_count, perf.subquery_count, perf.aggregation_count), (0, 0, 2));
        assert_eq!(perf.estimated_complexity, ComplexityTier::Low);
        assert_eq!(t.complexity_score, 6);
        assert!(t.explanation.contains("- Adding a LIMIT to a sorted query improves performance."));
    }

    #[test]
    fn test_korean_question_end_to_end() {
        let t = translate("올해 서울 전자제품 매출");
        assert_eq!(
            t.sql,
            "SELECT SUM(sales.amount)\n\
             FROM sales\n\
             WHERE EXTRACT(YEAR FROM sale_date) = 2024 AND customers.city = '서울' AND products.category = '전자제품'"
        );
    }

    #[test]
    fn test_generation_is_deterministic() {
        let a = translate("compare revenue and order count in Seoul and Busan by month");
        let b = translate("compare revenue and order count in Seoul and Busan by month");
        assert_eq!(a.sql, b.sql);
        assert_eq!(a.complexity_score, b.complexity_score);
        assert_eq!(a, b);
    }

    #[test]
    fn test_no_business_term_means_select_star() {
        for question in ["last 7 days in Seoul", "weekend electronics", "top 3"] {
            let t = translate(question);
            assert!(t.sql.starts_with("SELECT *\n"), "{question}: {}", t.sql);
        }
    }

    #[test]
    fn test_concurrent_generation() {
        let translator = Arc::new(translator());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let translator = Arc::clone(&translator);
                thread::spawn(move || translator.generate("top 5 best-selling products").sql().map(str::to_string))
            })
            .collect();
        for handle in handles {
            assert_eq!(
                handle.join().unwrap().as_deref(),
                Some("SELECT SUM(order_items.quantity)\nFROM order_items\nORDER BY SUM(order_items.quantity) DESC\nLIMIT 5")
            );
        }
    }

    #[test]
    fn test_result_json() {
        let result = translator().generate("what was total revenue last month");
        let value: Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();

        assert_eq!(value["status"], "success");
        assert_eq!(value["complexity_score"], 2);
        assert_eq!(value["parsed_intent"]["intent"], "aggregation");
        assert_eq!(value["optimization_report"]["performance_analysis"]["estimated_complexity"], "low");
        assert!(matches!(result, TranslationResult::Success(_)));
    }

    #[test]
    fn test_parse_matches_generate() {
        let translator = translator();
        let question = "월별 평균 주문금액 추세";
        let parsed = translator.parse(question);
        assert_eq!(parsed.intent, Intent::Trend);
        assert_eq!(parsed.grouping, vec!["EXTRACT(MONTH FROM sale_date)"]);
        assert_eq!(translator.generate(question).translation().unwrap().parsed_intent, parsed);
    }
}
