use thiserror::Error;

use crate::{
    catalog::SchemaError,
    optimizer::SafetyViolation,
    patterns::PatternError,
    planner::AssemblyError,
};

/// Construction failure. A translator without a catalog or rule tables is
/// unusable.
#[derive(Debug, Error)]
pub enum TranslatorError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("rule tables failed to build: {0}")]
    Patterns(#[from] PatternError),
}

/// Per-call failure inside [`generate`]. Never escapes it; always turned into
/// [`TranslationResult::Failure`].
///
/// [`generate`]: crate::translator::SqlTranslator::generate
/// [`TranslationResult::Failure`]: crate::translator::TranslationResult::Failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error(transparent)]
    Assembly(#[from] AssemblyError),

    #[error("generated SQL rejected: {0}")]
    UnsafeSql(#[from] SafetyViolation),

    #[error("translation panicked: {0}")]
    Panicked(String),
}
