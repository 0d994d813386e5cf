use regex::{Captures, Regex, RegexBuilder};

use crate::patterns::{PatternError, RuleContext};

pub type RuleFn = fn(&Captures, &RuleContext) -> Result<String, PatternError>;

/// What a matched rule produces: fixed predicate text, or text computed from
/// the match.
#[derive(Debug, Clone)]
pub enum Rule {
    Static(String),
    Computed(RuleFn),
}

impl Rule {
    pub fn evaluate(&self, caps: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
        match self {
            Rule::Static(text) => Ok(text.clone()),
            Rule::Computed(f) => f(caps, ctx),
        }
    }
}

/// A regex paired with the rule it triggers.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub pattern: Regex,
    pub rule: Rule,
}

impl PatternRule {
    pub fn fixed(pattern: &str, text: &str) -> Result<Self, PatternError> {
        Ok(Self { pattern: compile(pattern)?, rule: Rule::Static(text.to_string()) })
    }

    pub fn computed(pattern: &str, f: RuleFn) -> Result<Self, PatternError> {
        Ok(Self { pattern: compile(pattern)?, rule: Rule::Computed(f) })
    }

    /// Evaluate the rule once per occurrence of the pattern in `text`.
    pub fn evaluate_all(&self, text: &str, ctx: &RuleContext) -> Vec<Result<String, PatternError>> {
        self.pattern
            .captures_iter(text)
            .map(|caps| self.rule.evaluate(&caps, ctx))
            .collect()
    }
}

/// Compile a rule pattern. ASCII letters match case-insensitively.
pub fn compile(pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

pub fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>, PatternError> {
    patterns.iter().map(|p| compile(p)).collect()
}

/// First participating capture group, parsed as an integer.
///
/// Patterns with alternatives (`지난 (\d+) 달|last (\d+) months`) put the
/// number in a different group per branch.
pub fn first_number(caps: &Captures) -> Result<i64, PatternError> {
    let raw = caps
        .iter()
        .skip(1)
        .flatten()
        .next()
        .ok_or(PatternError::MissingCapture)?
        .as_str();
    raw.parse::<i64>().map_err(|_| PatternError::InvalidNumber(raw.to_string()))
}
