use serde::Serialize;

use crate::optimizer::{analyze_performance, complexity_score, standard_rules, AntiPatternRule, PerformanceAnalysis};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptimizationReport {
    pub suggestions: Vec<String>,
    /// Suggested DDL.
    pub optimizations: Vec<String>,
    pub performance_analysis: PerformanceAnalysis,
    pub complexity_score: u32,
}

/// Post-generation pass over SQL text: anti-pattern suggestions plus the two
/// independent complexity measures.
pub struct QueryOptimizer {
    rules: &'static [AntiPatternRule],
}

impl Default for QueryOptimizer {
    fn default() -> Self {
        Self { rules: standard_rules() }
    }
}

impl QueryOptimizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn optimize(&self, sql: &str) -> OptimizationReport {
        let mut suggestions = vec![];
        let mut optimizations = vec![];

        // every rule is checked; no short-circuit
        for rule in self.rules.iter().filter(|r| r.fires(sql)) {
            suggestions.push(rule.suggestion.to_string());
            if let Some(ddl) = rule.optimization {
                optimizations.push(ddl.to_string());
            }
        }

        OptimizationReport {
            suggestions,
            optimizations,
            performance_analysis: analyze_performance(sql),
            complexity_score: complexity_score(sql),
        }
    }
}
