use thiserror::Error;

/// Failure of a single extraction rule, or of compiling one.
///
/// Evaluation failures are recovered by the extractor: the rule is skipped and
/// the rest of the question is still processed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("pattern matched without a numeric capture")]
    MissingCapture,

    #[error("'{0}' is not a usable number")]
    InvalidNumber(String),

    #[error("date arithmetic out of range")]
    DateOutOfRange,
}
