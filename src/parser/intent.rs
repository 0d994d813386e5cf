use std::fmt::Display;

use serde::Serialize;

/// Coarse purpose of a question.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Comparison,
    Trend,
    Ranking,
    Distribution,
    Aggregation,
    #[default]
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Comparison => "comparison",
            Intent::Trend => "trend",
            Intent::Ranking => "ranking",
            Intent::Distribution => "distribution",
            Intent::Aggregation => "aggregation",
            Intent::General => "general",
        }
    }
}

impl Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
