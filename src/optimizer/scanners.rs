//! Text scanners shared by the scoring passes. All of them look at generated
//! SQL text, never at the IR.

use once_cell::sync::Lazy;
use regex::Regex;

pub static JOIN_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bJOIN\b").unwrap());

/// `.` does not cross lines, so a nested SELECT on its own line is missed.
pub static SELECT_FROM_SELECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bSELECT\b.*\bFROM\b.*\bSELECT\b").unwrap());

pub static PAREN_SELECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(\s*SELECT\b").unwrap());

pub static AGGREGATE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(SUM|AVG|COUNT|MAX|MIN)\b").unwrap());

pub static GROUP_BY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bGROUP BY\b").unwrap());

pub static ORDER_BY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bORDER BY\b").unwrap());

pub fn count(scanner: &Regex, sql: &str) -> u32 {
    scanner.find_iter(sql).count() as u32
}
