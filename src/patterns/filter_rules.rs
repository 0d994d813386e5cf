use regex::Captures;

use crate::patterns::{first_number, PatternError, PatternRule, RuleContext};

/// Numeric thresholds on order amount and customer age.
pub fn filter_rules() -> Result<Vec<PatternRule>, PatternError> {
    Ok(vec![
        PatternRule::computed(r"(\d+)\s*만원\s*이상", amount_at_least_10k)?,
        PatternRule::computed(r"(\d+)\s*만원\s*이하", amount_at_most_10k)?,
        PatternRule::computed(r"(\d+)\s*세\s*이상", age_at_least)?,
        PatternRule::computed(r"(\d+)\s*세\s*이하", age_at_most)?,
        PatternRule::computed(r"\b(?:over|above|more\s+than|at\s+least)\s+\$(\d+)", amount_at_least)?,
        PatternRule::computed(r"\b(?:under|below|less\s+than|at\s+most)\s+\$(\d+)", amount_at_most)?,
        PatternRule::computed(r"\baged?\s+(\d+)\s*(?:\+|or\s+(?:older|over|above))", age_at_least)?,
        PatternRule::computed(r"\baged?\s+(\d+)\s*or\s+(?:younger|under|below)", age_at_most)?,
    ])
}

/// Amounts written in units of 10,000 won.
fn man_won(caps: &Captures) -> Result<i64, PatternError> {
    let n = first_number(caps)?;
    n.checked_mul(10_000).ok_or_else(|| PatternError::InvalidNumber(n.to_string()))
}

fn amount_at_least_10k(caps: &Captures, _: &RuleContext) -> Result<String, PatternError> {
    Ok(format!("total_amount >= {}", man_won(caps)?))
}

fn amount_at_most_10k(caps: &Captures, _: &RuleContext) -> Result<String, PatternError> {
    Ok(format!("total_amount <= {}", man_won(caps)?))
}

fn amount_at_least(caps: &Captures, _: &RuleContext) -> Result<String, PatternError> {
    Ok(format!("total_amount >= {}", first_number(caps)?))
}

fn amount_at_most(caps: &Captures, _: &RuleContext) -> Result<String, PatternError> {
    Ok(format!("total_amount <= {}", first_number(caps)?))
}

fn age_at_least(caps: &Captures, _: &RuleContext) -> Result<String, PatternError> {
    Ok(format!("customers.age >= {}", first_number(caps)?))
}

fn age_at_most(caps: &Captures, _: &RuleContext) -> Result<String, PatternError> {
    Ok(format!("customers.age <= {}", first_number(caps)?))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn fire(text: &str) -> Vec<String> {
        let ctx = RuleContext::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        filter_rules()
            .unwrap()
            .iter()
            .flat_map(|r| r.evaluate_all(text, &ctx))
            .filter_map(Result::ok)
            .collect()
    }

    #[test]
    fn test_korean_thresholds() {
        assert_eq!(fire("10만원 이상 주문"), vec!["total_amount >= 100000"]);
        assert_eq!(fire("30세 이상 20세 이하"), vec!["customers.age >= 30", "customers.age <= 20"]);
    }

    #[test]
    fn test_english_thresholds() {
        assert_eq!(fire("orders over $250"), vec!["total_amount >= 250"]);
        assert_eq!(fire("customers aged 40 or older"), vec!["customers.age >= 40"]);
        assert_eq!(fire("customers aged 25 or younger"), vec!["customers.age <= 25"]);
    }

    #[test]
    fn test_each_occurrence_fires() {
        assert_eq!(fire("5만원 이상, 7만원 이상"), vec!["total_amount >= 50000", "total_amount >= 70000"]);
    }
}
