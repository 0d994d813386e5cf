use tracing::{debug, warn};

use crate::{
    parser::{AggregationMatch, Entity, EntityKind, IntentClassifier, ParsedQuery, Sorting},
    patterns::{PatternLibrary, PatternRule, RuleContext},
};

/// Scans a question against every rule table and builds the IR.
///
/// Search is unanchored. Categories run in a fixed order and rules inside a
/// category in declaration order. Extraction never fails: a rule that cannot
/// be evaluated is logged and skipped.
pub struct Extractor<'a> {
    library: &'a PatternLibrary,
    ctx: RuleContext,
}

impl<'a> Extractor<'a> {
    pub fn new(library: &'a PatternLibrary, ctx: RuleContext) -> Self {
        Self { library, ctx }
    }

    pub fn parse(&self, question: &str) -> ParsedQuery {
        let parsed = ParsedQuery {
            intent: IntentClassifier::classify(question),
            entities: self.extract_entities(question),
            time_conditions: self.extract_time_conditions(question),
            aggregations: self.extract_aggregations(question),
            filters: self.extract_filters(question),
            sorting: self.extract_sorting(question),
            grouping: self.extract_grouping(question),
        };

        debug!(
            question,
            intent = %parsed.intent,
            entities = parsed.entities.len(),
            time_conditions = ?parsed.time_conditions,
            aggregations = parsed.aggregations.len(),
            filters = ?parsed.filters,
            sorting = ?parsed.sorting,
            grouping = ?parsed.grouping,
            "question parsed"
        );
        parsed
    }

    fn extract_entities(&self, question: &str) -> Vec<Entity> {
        let mut entities = vec![];

        for term in &self.library.business_terms {
            for _ in 0..term.hits(question) {
                entities.push(Entity::from_term(term));
            }
        }

        let locations = &self.library.locations;
        for entry in locations.matches(question) {
            entities.push(Entity::from_vocabulary(EntityKind::Location, locations, entry));
        }

        let categories = &self.library.categories;
        for entry in categories.matches(question) {
            entities.push(Entity::from_vocabulary(EntityKind::Category, categories, entry));
        }

        entities
    }

    fn extract_time_conditions(&self, question: &str) -> Vec<String> {
        self.apply_rules("time", &self.library.time_rules, question)
    }

    fn extract_filters(&self, question: &str) -> Vec<String> {
        self.apply_rules("filter", &self.library.filter_rules, question)
    }

    fn apply_rules(&self, category: &str, rules: &[PatternRule], question: &str) -> Vec<String> {
        let mut predicates = vec![];
        for (index, rule) in rules.iter().enumerate() {
            for result in rule.evaluate_all(question, &self.ctx) {
                match result {
                    Ok(predicate) => predicates.push(predicate),
                    Err(error) => warn!(
                        category,
                        rule = index,
                        pattern = rule.pattern.as_str(),
                        %error,
                        "skipping extraction rule"
                    ),
                }
            }
        }
        predicates
    }

    fn extract_aggregations(&self, question: &str) -> Vec<AggregationMatch> {
        self.library
            .aggregation_terms
            .iter()
            .filter(|t| t.pattern.is_match(question))
            .map(|t| AggregationMatch { function: t.kind, source_pattern: t.source().to_string() })
            .collect()
    }

    fn extract_sorting(&self, question: &str) -> Option<Sorting> {
        self.library
            .sort_rules
            .iter()
            .find(|r| r.pattern.is_match(question))
            .map(|r| Sorting { direction: r.direction })
    }

    fn extract_grouping(&self, question: &str) -> Vec<String> {
        self.library
            .group_rules
            .iter()
            .filter(|r| r.pattern.is_match(question))
            .map(|r| r.column.clone())
            .collect()
    }
}
