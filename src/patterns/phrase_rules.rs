use regex::Regex;

use crate::patterns::{compile, PatternError, SortDirection};

#[derive(Debug, Clone)]
pub struct SortRule {
    pub pattern: Regex,
    pub direction: SortDirection,
}

/// A "by X" phrase and the column expression it groups on.
#[derive(Debug, Clone)]
pub struct GroupRule {
    pub pattern: Regex,
    pub column: String,
}

impl GroupRule {
    fn new(pattern: &str, column: &str) -> Result<Self, PatternError> {
        Ok(Self { pattern: compile(pattern)?, column: column.to_string() })
    }
}

/// Descending phrases come first; the first rule that matches decides.
pub fn sort_rules() -> Result<Vec<SortRule>, PatternError> {
    Ok(vec![
        SortRule {
            pattern: compile(
                r"높은\s*순|많은\s*순|큰\s*순|\bhighest\s+first\b|\bdescending\b|\bbest[-\s]?selling\b|\bmost\s+popular\b",
            )?,
            direction: SortDirection::Desc,
        },
        SortRule {
            pattern: compile(
                r"낮은\s*순|적은\s*순|작은\s*순|\blowest\s+first\b|\bascending\b|\bworst[-\s]?selling\b|\bleast\s+popular\b",
            )?,
            direction: SortDirection::Asc,
        },
    ])
}

pub fn group_rules() -> Result<Vec<GroupRule>, PatternError> {
    Ok(vec![
        GroupRule::new(r"지역별|도시별|\bby\s+(?:city|region)\b|\bper\s+city\b", "customers.city")?,
        GroupRule::new(r"카테고리별|분류별|\b(?:by|per)\s+category\b", "products.category")?,
        GroupRule::new(r"월별|달별|\b(?:by|per)\s+month\b|\bmonthly\b", "EXTRACT(MONTH FROM sale_date)")?,
        GroupRule::new(
            r"년도별|연도별|\b(?:by|per)\s+year\b|\byearly\b|\bannual(?:ly)?\b",
            "EXTRACT(YEAR FROM sale_date)",
        )?,
        GroupRule::new(r"요일별|\bby\s+day\s+of\s+(?:the\s+)?week\b", "EXTRACT(DOW FROM sale_date)")?,
        GroupRule::new(r"고객별|\b(?:by|per)\s+customer\b", "customers.id")?,
        GroupRule::new(r"제품별|상품별|\b(?:by|per)\s+product\b", "products.id")?,
        GroupRule::new(r"회사별|업체별|\b(?:by|per)\s+(?:company|vendor)\b", "companies.name")?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_wins_when_both_present() {
        let rules = sort_rules().unwrap();
        let first = rules.iter().find(|r| r.pattern.is_match("높은 순 그리고 낮은 순")).unwrap();
        assert_eq!(first.direction, SortDirection::Desc);
    }

    #[test]
    fn test_group_phrases() {
        let rules = group_rules().unwrap();
        let cols: Vec<&str> = rules
            .iter()
            .filter(|r| r.pattern.is_match("revenue by city, monthly"))
            .map(|r| r.column.as_str())
            .collect();
        assert_eq!(cols, vec!["customers.city", "EXTRACT(MONTH FROM sale_date)"]);
    }
}
