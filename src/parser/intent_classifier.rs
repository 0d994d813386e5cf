use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::Intent;

/// Keyword buckets in priority order: Korean keywords matched as substrings
/// of the question, English keywords as whole words.
const INTENT_KEYWORDS: &[(Intent, &[&str], &str)] = &[
    (
        Intent::Comparison,
        &["비교", "차이", "대비"],
        r"compar(?:e|ed|es|ing|ison)|versus|vs\.?|differences?",
    ),
    (
        Intent::Trend,
        &["추세", "트렌드", "변화", "증가", "감소"],
        r"trends?|over\s+time|growth|increas(?:e|ed|es|ing)|decreas(?:e|ed|es|ing)|chang(?:e|ed|es|ing)",
    ),
    (Intent::Ranking, &["상위", "최고", "가장 많이"], r"top|best|highest|most"),
    (Intent::Distribution, &["분포", "분석", "통계"], r"distribution|breakdown|statistics"),
    (Intent::Aggregation, &["총", "합계", "전체"], r"total|sum|overall"),
];

struct IntentBucket {
    intent: Intent,
    korean: &'static [&'static str],
    english: Regex,
}

impl IntentBucket {
    fn matches(&self, question: &str) -> bool {
        self.korean.iter().any(|k| question.contains(k)) || self.english.is_match(question)
    }
}

static BUCKETS: Lazy<Vec<IntentBucket>> = Lazy::new(|| {
    INTENT_KEYWORDS
        .iter()
        .map(|(intent, korean, english)| IntentBucket {
            intent: *intent,
            korean: *korean,
            english: Regex::new(&format!(r"(?i)\b(?:{english})\b")).unwrap(),
        })
        .collect()
});

pub struct IntentClassifier;

impl IntentClassifier {
    /// First bucket with a keyword in `question`, or [`Intent::General`].
    pub fn classify(question: &str) -> Intent {
        BUCKETS
            .iter()
            .find(|bucket| bucket.matches(question))
            .map(|bucket| bucket.intent)
            .unwrap_or_default()
    }
}
