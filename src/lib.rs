pub mod config;
pub use config::TranslatorConfig;

pub mod catalog;
pub use catalog::{JsonSchemaFile, SchemaCatalog, SchemaError, SchemaIntrospector, SchemaSnapshot, StaticSchema};

pub mod patterns;
pub use patterns::{Clock, FixedClock, PatternLibrary, SystemClock};

pub mod parser;
pub use parser::{Intent, ParsedQuery};

pub mod planner;

pub mod optimizer;
pub use optimizer::OptimizationReport;

pub mod explain;

pub mod translator;
pub use translator::{SqlTranslator, Translation, TranslationError, TranslationResult, TranslatorError};

#[cfg(test)]
mod _tests;
