use serde::{Deserialize, Serialize};

pub const DEFAULT_TABLE: &str = "sales";
pub const DEFAULT_TOP_N_LIMIT: u32 = 5;

/// Translator settings. Deserializable so it can live inside the embedding
/// application's own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// FROM table when no entity names one.
    pub default_table: String,
    /// LIMIT emitted for top/bottom questions. The number in the question is
    /// not read.
    pub top_n_limit: u32,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self { default_table: DEFAULT_TABLE.to_string(), top_n_limit: DEFAULT_TOP_N_LIMIT }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_table(mut self, table: &str) -> Self {
        self.default_table = table.to_string();
        self
    }

    pub fn with_top_n_limit(mut self, limit: u32) -> Self {
        self.top_n_limit = limit;
        self
    }
}
