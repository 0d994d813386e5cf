use chrono::{Datelike, Duration};
use regex::Captures;

use crate::patterns::{first_number, PatternError, PatternRule, RuleContext};

/// Relative, absolute, season and weekday/weekend expressions, in the order
/// the extractor applies them.
pub fn time_rules() -> Result<Vec<PatternRule>, PatternError> {
    Ok(vec![
        // relative
        PatternRule::computed(r"지난\s*(\d+)\s*년|(?:last|past)\s+(\d+)\s+years?", last_n_years)?,
        PatternRule::computed(
            r"지난\s*(\d+)\s*달|지난\s*(\d+)\s*개월|(?:last|past)\s+(\d+)\s+months?",
            last_n_months,
        )?,
        PatternRule::computed(r"지난\s*(\d+)\s*주|(?:last|past)\s+(\d+)\s+weeks?", last_n_weeks)?,
        PatternRule::computed(r"지난\s*(\d+)\s*일|(?:last|past)\s+(\d+)\s+days?", last_n_days)?,

        // absolute
        PatternRule::computed(r"올해|금년|\bthis\s+year\b", this_year)?,
        PatternRule::computed(r"작년|지난해|\blast\s+year\b", last_year)?,
        PatternRule::computed(r"이번\s*달|이번\s*월|\bthis\s+month\b", this_month)?,
        PatternRule::computed(r"지난\s*달|저번\s*달|\blast\s+month\b", last_month)?,

        // seasons
        PatternRule::fixed(r"봄|\bspring\b", "EXTRACT(MONTH FROM sale_date) IN (3, 4, 5)")?,
        PatternRule::fixed(r"여름|\bsummer\b", "EXTRACT(MONTH FROM sale_date) IN (6, 7, 8)")?,
        PatternRule::fixed(r"가을|\bautumn\b|\bfall\b", "EXTRACT(MONTH FROM sale_date) IN (9, 10, 11)")?,
        PatternRule::fixed(r"겨울|\bwinter\b", "EXTRACT(MONTH FROM sale_date) IN (12, 1, 2)")?,

        // day of week
        PatternRule::fixed(r"평일|\bweekdays?\b", "EXTRACT(DOW FROM sale_date) BETWEEN 1 AND 5")?,
        PatternRule::fixed(r"주말|\bweekends?\b", "EXTRACT(DOW FROM sale_date) IN (0, 6)")?,
    ])
}

fn since_days_ago(ctx: &RuleContext, days: i64) -> Result<String, PatternError> {
    let span = Duration::try_days(days).ok_or(PatternError::DateOutOfRange)?;
    let start = ctx.today.checked_sub_signed(span).ok_or(PatternError::DateOutOfRange)?;
    Ok(format!("sale_date >= DATE('{}')", start.format("%Y-%m-%d")))
}

fn scaled(caps: &Captures, factor: i64) -> Result<i64, PatternError> {
    let n = first_number(caps)?;
    n.checked_mul(factor).ok_or_else(|| PatternError::InvalidNumber(n.to_string()))
}

fn last_n_years(caps: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    since_days_ago(ctx, scaled(caps, 365)?)
}

fn last_n_months(caps: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    since_days_ago(ctx, scaled(caps, 30)?)
}

fn last_n_weeks(caps: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    since_days_ago(ctx, scaled(caps, 7)?)
}

fn last_n_days(caps: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    since_days_ago(ctx, scaled(caps, 1)?)
}

fn year_predicate(year: i32) -> String {
    format!("EXTRACT(YEAR FROM sale_date) = {year}")
}

fn month_predicate(year: i32, month: u32) -> String {
    format!("EXTRACT(YEAR FROM sale_date) = {year} AND EXTRACT(MONTH FROM sale_date) = {month}")
}

fn this_year(_: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    Ok(year_predicate(ctx.today.year()))
}

fn last_year(_: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    Ok(year_predicate(ctx.today.year() - 1))
}

fn this_month(_: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    Ok(month_predicate(ctx.today.year(), ctx.today.month()))
}

/// January rolls back to December of the previous year.
fn last_month(_: &Captures, ctx: &RuleContext) -> Result<String, PatternError> {
    let (year, month) = match ctx.today.month() {
        1 => (ctx.today.year() - 1, 12),
        m => (ctx.today.year(), m - 1),
    };
    Ok(month_predicate(year, month))
}
