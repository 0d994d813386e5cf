use std::{fs, path::{Path, PathBuf}};

use crate::catalog::{SchemaError, SchemaSnapshot};

/// Source of schema metadata, consulted once when a translator is built.
///
/// Implementations may block (a live database inspection, a file read); the
/// translation pipeline itself never calls back into them.
pub trait SchemaIntrospector {
    fn introspect(&self) -> Result<SchemaSnapshot, SchemaError>;
}

/// An in-memory snapshot, handy for tests and for embedders that build the
/// schema description themselves.
#[derive(Debug, Clone)]
pub struct StaticSchema(pub SchemaSnapshot);

impl StaticSchema {
    pub fn commerce() -> Self {
        Self(SchemaSnapshot::commerce())
    }
}

impl SchemaIntrospector for StaticSchema {
    fn introspect(&self) -> Result<SchemaSnapshot, SchemaError> {
        Ok(self.0.clone())
    }
}

/// A JSON-encoded [`SchemaSnapshot`] on disk.
#[derive(Debug, Clone)]
pub struct JsonSchemaFile {
    path: PathBuf,
}

impl JsonSchemaFile {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl SchemaIntrospector for JsonSchemaFile {
    fn introspect(&self) -> Result<SchemaSnapshot, SchemaError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|source| SchemaError::Io { path: self.path.clone(), source })?;
        Ok(serde_json::from_str(&raw)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::catalog::SchemaCatalog;

    #[test]
    fn test_json_schema_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let raw = serde_json::to_string(&SchemaSnapshot::commerce()).unwrap();
        file.write_all(raw.as_bytes()).unwrap();

        let catalog = SchemaCatalog::load(&JsonSchemaFile::new(file.path())).unwrap();
        assert!(catalog.contains_table("order_items"));
        assert_eq!(catalog.join_graph()[0].predicate, "sales.order_id = orders.id");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("schema.json");

        let err = SchemaCatalog::load(&JsonSchemaFile::new(&missing)).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{ \"tables\": [").unwrap();

        let err = SchemaCatalog::load(&JsonSchemaFile::new(file.path())).unwrap_err();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
