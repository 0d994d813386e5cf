use once_cell::sync::Lazy;
use regex::Regex;

/// A text heuristic over generated SQL.
///
/// Fires when `pattern` matches and `unless` (if any) does not.
#[derive(Debug, Clone)]
pub struct AntiPatternRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub unless: Option<Regex>,
    pub suggestion: &'static str,
    pub optimization: Option<&'static str>,
}

impl AntiPatternRule {
    pub fn fires(&self, sql: &str) -> bool {
        self.pattern.is_match(sql) && !self.unless.as_ref().is_some_and(|u| u.is_match(sql))
    }
}

static STANDARD_RULES: Lazy<Vec<AntiPatternRule>> = Lazy::new(|| {
    vec![
        AntiPatternRule {
            name: "index_hint",
            pattern: Regex::new(r"(?i)WHERE.*customers\.city").unwrap(),
            unless: None,
            suggestion: "Consider creating an index on customers.city.",
            optimization: Some("CREATE INDEX idx_customers_city ON customers(city);"),
        },
        AntiPatternRule {
            name: "join_optimization",
            pattern: Regex::new(r"(?is)\bJOIN\b.*\bJOIN\b.*\bJOIN\b").unwrap(),
            unless: None,
            suggestion: "Query joins many tables; select only the columns you need.",
            optimization: None,
        },
        AntiPatternRule {
            name: "limit_suggestion",
            pattern: Regex::new(r"(?i)\bORDER BY\b").unwrap(),
            unless: Some(Regex::new(r"(?i)\bLIMIT\b").unwrap()),
            suggestion: "Adding a LIMIT to a sorted query improves performance.",
            optimization: None,
        },
    ]
});

/// The standard rules, in report order.
///
/// `limit_suggestion` stays quiet once a LIMIT is present, and
/// `join_optimization` lets `.` cross newlines so it sees JOIN clauses on
/// separate lines. Earlier versions of these heuristics fired on every ORDER BY
/// and never on multi-line SQL respectively.
pub fn standard_rules() -> &'static [AntiPatternRule] {
    &STANDARD_RULES
}
