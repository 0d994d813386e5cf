use std::path::PathBuf;

use thiserror::Error;

/// Failures while ingesting the schema. All of them are fatal at construction.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema unavailable: {0}")]
    Unavailable(String),

    #[error("schema snapshot could not be read from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("schema snapshot is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("schema has no tables")]
    Empty,

    #[error("join edge {left} -> {right} references unknown table '{table}'")]
    UnknownJoinTable {
        left: String,
        right: String,
        table: String,
    },
}
