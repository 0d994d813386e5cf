use std::{
    any::Any,
    panic::{catch_unwind, AssertUnwindSafe},
    sync::Arc,
};

use tracing::{error, info, info_span, warn};
use uuid::Uuid;

use crate::{
    catalog::{SchemaCatalog, SchemaIntrospector},
    config::TranslatorConfig,
    explain::ExplanationGenerator,
    optimizer::{ensure_read_only, QueryOptimizer},
    parser::{Extractor, ParsedQuery},
    patterns::{Clock, PatternLibrary, RuleContext, SystemClock},
    planner::{ClauseBuilder, QueryAssembler},
    translator::{Translation, TranslationError, TranslationResult, TranslatorError},
};

/// Natural-language question in, SQL plus analysis out.
///
/// Holds only immutable state. Clone it or wrap it in an `Arc` to share across
/// threads; every call to [`generate`](Self::generate) is independent.
#[derive(Debug, Clone)]
pub struct SqlTranslator {
    catalog: Arc<SchemaCatalog>,
    library: Arc<PatternLibrary>,
    config: TranslatorConfig,
    clock: Arc<dyn Clock>,
}

impl SqlTranslator {
    /// Introspects the schema and builds the standard rule tables.
    pub fn new(introspector: &dyn SchemaIntrospector, config: TranslatorConfig) -> Result<Self, TranslatorError> {
        let catalog = SchemaCatalog::load(introspector)?;
        let library = PatternLibrary::standard()?;
        Ok(Self::from_parts(Arc::new(catalog), Arc::new(library), config))
    }

    pub fn from_parts(catalog: Arc<SchemaCatalog>, library: Arc<PatternLibrary>, config: TranslatorConfig) -> Self {
        for term in library.unresolved_terms(&catalog) {
            warn!(term = %term.name, table = %term.table, "business term refers to a table missing from the schema");
        }
        Self { catalog, library, config, clock: Arc::new(SystemClock) }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Extraction only.
    pub fn parse(&self, question: &str) -> ParsedQuery {
        Extractor::new(&self.library, RuleContext::from_clock(self.clock.as_ref())).parse(question)
    }

    /// Runs the whole pipeline. Never fails and never panics: every error is
    /// logged and reported as [`TranslationResult::Failure`].
    pub fn generate(&self, question: &str) -> TranslationResult {
        let span = info_span!("generate_sql", request_id = %Uuid::new_v4());
        let _enter = span.enter();

        let outcome = catch_unwind(AssertUnwindSafe(|| self.translate(question)))
            .unwrap_or_else(|payload| Err(TranslationError::Panicked(panic_message(payload.as_ref()))));

        match outcome {
            Ok(translation) => {
                info!(
                    complexity_score = translation.complexity_score,
                    suggestions = translation.optimization_report.suggestions.len(),
                    "sql generated"
                );
                TranslationResult::Success(translation)
            }
            Err(err) => {
                error!(question, error = %err, "sql generation failed");
                TranslationResult::Failure { error_message: format!("Failed to generate SQL: {err}") }
            }
        }
    }

    fn translate(&self, question: &str) -> Result<Translation, TranslationError> {
        let parsed = self.parse(question);
        let components = ClauseBuilder::new(&self.catalog, &self.config).build(&parsed);
        let sql = QueryAssembler::assemble(&components)?;
        ensure_read_only(&sql)?;

        let optimization_report = QueryOptimizer::new().optimize(&sql);
        let explanation = ExplanationGenerator::explain(&parsed, &optimization_report);

        Ok(Translation {
            complexity_score: optimization_report.complexity_score,
            sql,
            parsed_intent: parsed,
            optimization_report,
            explanation,
        })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
