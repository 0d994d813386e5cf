use crate::{
    optimizer::{ComplexityTier, OptimizationReport},
    parser::{Intent, ParsedQuery},
};

/// Renders a short markdown rationale for a generated query.
pub struct ExplanationGenerator;

impl ExplanationGenerator {
    pub fn intent_label(intent: Intent) -> &'static str {
        match intent {
            Intent::Comparison => "Comparative analysis",
            Intent::Trend => "Trend analysis",
            Intent::Ranking => "Ranking analysis",
            Intent::Distribution => "Distribution analysis",
            Intent::Aggregation => "Aggregate analysis",
            Intent::General => "General lookup",
        }
    }

    pub fn tier_label(tier: ComplexityTier) -> &'static str {
        match tier {
            ComplexityTier::Low => "Low",
            ComplexityTier::Medium => "Medium",
            ComplexityTier::High => "High",
        }
    }

    pub fn explain(parsed: &ParsedQuery, report: &OptimizationReport) -> String {
        let mut lines = vec![
            "**Query analysis:**".to_string(),
            format!("- **Analysis type**: {}", Self::intent_label(parsed.intent)),
        ];

        let tables = parsed.touched_tables();
        if !tables.is_empty() {
            let tables: Vec<&str> = tables.iter().map(String::as_str).collect();
            lines.push(format!("- **Tables**: {}", tables.join(", ")));
        }

        if !parsed.time_conditions.is_empty() {
            lines.push(format!("- **Time conditions**: {} applied", parsed.time_conditions.len()));
        }

        if !parsed.grouping.is_empty() {
            lines.push(format!("- **Grouped by**: {}", parsed.grouping.join(", ")));
        }

        lines.push(format!(
            "- **Query complexity**: {} (score: {})",
            Self::tier_label(report.performance_analysis.estimated_complexity),
            report.complexity_score
        ));

        if !report.suggestions.is_empty() {
            lines.push(String::new());
            lines.push("**Optimization suggestions:**".to_string());
            lines.extend(report.suggestions.iter().map(|s| format!("- {s}")));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        optimizer::QueryOptimizer,
        parser::Entity,
        patterns::PatternLibrary,
    };

    fn grouped_revenue() -> ParsedQuery {
        let lib = PatternLibrary::standard().unwrap();
        ParsedQuery {
            intent: Intent::Distribution,
            entities: vec![
                Entity::from_term(lib.term("revenue").unwrap()),
                Entity::from_term(lib.term("order_count").unwrap()),
            ],
            time_conditions: vec!["EXTRACT(YEAR FROM sale_date) = 2024".into()],
            grouping: vec!["customers.city".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_full_explanation() {
        let report = QueryOptimizer::new().optimize(
            "SELECT SUM(sales.amount), COUNT(orders.id), customers.city\nFROM sales\nORDER BY SUM(sales.amount) DESC",
        );
        let text = ExplanationGenerator::explain(&grouped_revenue(), &report);

        let expected = "**Query analysis:**\n\
                        - **Analysis type**: Distribution analysis\n\
                        - **Tables**: sales, orders\n\
                        - **Time conditions**: 1 applied\n\
                        - **Grouped by**: customers.city\n\
                        - **Query complexity**: Low (score: 5)\n\
                        \n\
                        **Optimization suggestions:**\n\
                        - Adding a LIMIT to a sorted query improves performance.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_empty_parse_has_only_type_and_complexity() {
        let report = QueryOptimizer::new().optimize("SELECT *\nFROM sales");
        let text = ExplanationGenerator::explain(&ParsedQuery::default(), &report);
        assert_eq!(
            text,
            "**Query analysis:**\n- **Analysis type**: General lookup\n- **Query complexity**: Low (score: 1)"
        );
    }

    #[test]
    fn test_explain_is_idempotent() {
        let parsed = grouped_revenue();
        let report = QueryOptimizer::new().optimize("SELECT SUM(sales.amount)\nFROM sales");
        assert_eq!(
            ExplanationGenerator::explain(&parsed, &report),
            ExplanationGenerator::explain(&parsed, &report)
        );
    }
}
