use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static LEADING_SELECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*SELECT\b").unwrap());

static FORBIDDEN_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(DROP|DELETE|INSERT|UPDATE|ALTER|CREATE|TRUNCATE|GRANT|REVOKE|EXEC|EXECUTE)\b").unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SafetyViolation {
    #[error("statement does not start with SELECT")]
    NotASelect,
    #[error("statement contains forbidden keyword {0}")]
    ForbiddenKeyword(String),
}

/// Rejects anything that is not a plain read-only SELECT.
pub fn ensure_read_only(sql: &str) -> Result<(), SafetyViolation> {
    if !LEADING_SELECT.is_match(sql) {
        return Err(SafetyViolation::NotASelect);
    }
    if let Some(m) = FORBIDDEN_KEYWORD.find(sql) {
        return Err(SafetyViolation::ForbiddenKeyword(m.as_str().to_uppercase()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_select_passes() {
        assert_eq!(ensure_read_only("SELECT created_at, updated_by\nFROM sales"), Ok(()));
    }

    #[test]
    fn test_non_select_is_rejected() {
        assert_eq!(ensure_read_only("WITH x AS (SELECT 1) SELECT * FROM x"), Err(SafetyViolation::NotASelect));
    }

    #[test]
    fn test_forbidden_keyword_is_rejected() {
        assert_eq!(
            ensure_read_only("SELECT 1; drop table sales"),
            Err(SafetyViolation::ForbiddenKeyword("DROP".into()))
        );
    }
}
