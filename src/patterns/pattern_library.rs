use crate::{
    catalog::SchemaCatalog,
    patterns::{
        aggregation_terms, business_terms, categories, filter_rules, group_rules, locations,
        sort_rules, time_rules, AggregationTerm, BusinessTerm, GroupRule, PatternError,
        PatternRule, SortRule, Vocabulary,
    },
};

/// Every rule table the extractor scans a question against.
///
/// Built once and shared read-only; nothing in the pipeline mutates it.
#[derive(Debug, Clone)]
pub struct PatternLibrary {
    pub time_rules: Vec<PatternRule>,
    pub business_terms: Vec<BusinessTerm>,
    pub locations: Vocabulary,
    pub categories: Vocabulary,
    pub aggregation_terms: Vec<AggregationTerm>,
    pub filter_rules: Vec<PatternRule>,
    pub sort_rules: Vec<SortRule>,
    pub group_rules: Vec<GroupRule>,
}

impl PatternLibrary {
    /// The Korean/English rule set for the commerce schema.
    pub fn standard() -> Result<Self, PatternError> {
        Ok(Self {
            time_rules: time_rules()?,
            business_terms: business_terms()?,
            locations: locations(),
            categories: categories(),
            aggregation_terms: aggregation_terms()?,
            filter_rules: filter_rules()?,
            sort_rules: sort_rules()?,
            group_rules: group_rules()?,
        })
    }

    pub fn term(&self, name: &str) -> Option<&BusinessTerm> {
        self.business_terms.iter().find(|t| t.name == name)
    }

    /// Business terms whose table is missing from `catalog`.
    pub fn unresolved_terms(&self, catalog: &SchemaCatalog) -> Vec<&BusinessTerm> {
        self.business_terms
            .iter()
            .filter(|t| !catalog.contains_table(&t.table))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ColumnInfo, SchemaSnapshot, StaticSchema, TableInfo};

    #[test]
    fn test_standard_library_builds() {
        let lib = PatternLibrary::standard().unwrap();
        assert_eq!(lib.time_rules.len(), 14);
        assert_eq!(lib.business_terms.len(), 9);
        assert_eq!(lib.aggregation_terms.len(), 7);
        assert_eq!(lib.sort_rules.len(), 2);
        assert_eq!(lib.group_rules.len(), 8);
        assert_eq!(lib.term("revenue").unwrap().column, "sales.amount");
    }

    #[test]
    fn test_all_terms_resolve_against_commerce_schema() {
        let lib = PatternLibrary::standard().unwrap();
        let catalog = SchemaCatalog::load(&StaticSchema::commerce()).unwrap();
        assert!(lib.unresolved_terms(&catalog).is_empty());
    }

    #[test]
    fn test_unresolved_terms_against_partial_schema() {
        let lib = PatternLibrary::standard().unwrap();
        let snapshot = SchemaSnapshot::new()
            .with_table("sales", TableInfo::new().with_column("amount", ColumnInfo::required("FLOAT")));
        let catalog = SchemaCatalog::from_snapshot(snapshot).unwrap();

        let names: Vec<&str> = lib.unresolved_terms(&catalog).iter().map(|t| t.name.as_str()).collect();
        assert!(!names.contains(&"revenue"));
        assert!(names.contains(&"customer_count"));
        assert!(names.contains(&"units_sold"));
    }
}
