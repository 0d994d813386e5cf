use serde::Serialize;

use crate::{optimizer::OptimizationReport, parser::ParsedQuery};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub sql: String,
    pub parsed_intent: ParsedQuery,
    pub optimization_report: OptimizationReport,
    pub explanation: String,
    pub complexity_score: u32,
}

/// Outcome of one [`generate`](crate::translator::SqlTranslator::generate) call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TranslationResult {
    Success(Translation),
    Failure { error_message: String },
}

impl TranslationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, TranslationResult::Success(_))
    }

    pub fn translation(&self) -> Option<&Translation> {
        match self {
            TranslationResult::Success(t) => Some(t),
            TranslationResult::Failure { .. } => None,
        }
    }

    pub fn sql(&self) -> Option<&str> {
        self.translation().map(|t| t.sql.as_str())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_failure_json_shape() {
        let result = TranslationResult::Failure { error_message: "Failed to generate SQL: boom".into() };
        let value: Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({ "status": "failure", "error_message": "Failed to generate SQL: boom" }));
        assert!(!result.is_success());
        assert_eq!(result.sql(), None);
    }
}
