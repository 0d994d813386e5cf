use crate::{
    catalog::SchemaCatalog,
    config::TranslatorConfig,
    parser::ParsedQuery,
    planner::QueryComponents,
};

/// Turns a [`ParsedQuery`] into clause fragments against a catalog.
pub struct ClauseBuilder<'a> {
    catalog: &'a SchemaCatalog,
    config: &'a TranslatorConfig,
}

impl<'a> ClauseBuilder<'a> {
    pub fn new(catalog: &'a SchemaCatalog, config: &'a TranslatorConfig) -> Self {
        Self { catalog, config }
    }

    pub fn build(&self, parsed: &ParsedQuery) -> QueryComponents {
        QueryComponents {
            select: Self::build_select(parsed),
            from: self.build_from(parsed),
            joins: self.build_joins(parsed),
            conditions: Self::build_conditions(parsed),
            group_by: parsed.grouping.clone(),
            having: vec![],
            order_by: Self::build_order_by(parsed),
            limit: self.build_limit(parsed),
        }
    }

    fn build_select(parsed: &ParsedQuery) -> Vec<String> {
        // 1) one aggregate per business term, duplicates included
        let mut columns: Vec<String> = parsed.business_terms().filter_map(|e| e.measure()).collect();

        // 2) grouping keys not already selected
        for key in &parsed.grouping {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }

        if columns.is_empty() {
            columns.push("*".to_string());
        }
        columns
    }

    /// First table in extraction order, else the configured default.
    fn build_from(&self, parsed: &ParsedQuery) -> String {
        parsed
            .touched_tables()
            .into_iter()
            .next()
            .unwrap_or_else(|| self.config.default_table.clone())
    }

    /// Every declared edge whose endpoints are both touched, in graph order.
    /// This is a join path, not a minimal spanning join.
    fn build_joins(&self, parsed: &ParsedQuery) -> Vec<String> {
        let touched = parsed.touched_tables();
        self.catalog
            .join_graph()
            .iter()
            .filter(|edge| edge.connects(&touched))
            .map(|edge| edge.to_join_clause())
            .collect()
    }

    fn build_conditions(parsed: &ParsedQuery) -> Vec<String> {
        let mut conditions = parsed.time_conditions.clone();
        conditions.extend(parsed.filters.iter().cloned());
        conditions.extend(parsed.entities.iter().filter_map(|e| e.condition.clone()));
        conditions
    }

    fn build_order_by(parsed: &ParsedQuery) -> Option<String> {
        let sorting = parsed.sorting?;
        let key = parsed
            .business_terms()
            .next()
            .and_then(|e| e.measure())
            .unwrap_or_else(|| "1".to_string());
        Some(format!("{} {}", key, sorting.direction.as_sql()))
    }

    /// Fixed limit whenever a top/bottom marker fired.
    fn build_limit(&self, parsed: &ParsedQuery) -> Option<u32> {
        parsed.wants_ranking().then_some(self.config.top_n_limit)
    }
}
