// Standard library
use std::fs;
use std::path::Path;

// 3rd party crates
use tracing::debug;

// Project imports
use crate::submission::Serializer;

// Current module imports
use super::errors::DocumentError;
use super::types::ProductDocument;

impl ProductDocument {
    /// Reads a document from `path`, decoding it with `serializer`.
    pub fn from_file(
        path: &Path,
        serializer: &dyn Serializer<ProductDocument>,
    ) -> Result<Self, DocumentError> {
        let payload: Vec<u8> = fs::read(path).map_err(|source| DocumentError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let document: ProductDocument = serializer.decode(&payload)?;
        debug!(
            path = ?path,
            products = document.products.len(),
            "Document loaded"
        );

        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::providers::json::JsonSerializer;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("crpt-client-{}-{}", std::process::id(), name))
    }

    #[test]
    fn test_from_file() {
        let path = temp_path("document.json");
        fs::write(
            &path,
            r#"{ "doc_id": "42", "owner_inn": "7700000000", "products": [{}, {}] }"#,
        )
        .unwrap();

        let document = ProductDocument::from_file(&path, &JsonSerializer).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(document.doc_id.as_deref(), Some("42"));
        assert_eq!(document.owner_inn.as_deref(), Some("7700000000"));
        assert_eq!(document.products.len(), 2);
    }

    #[test]
    fn test_from_missing_file() {
        let path = temp_path("missing.json");

        let result = ProductDocument::from_file(&path, &JsonSerializer);

        assert!(matches!(result, Err(DocumentError::Read { .. })));
    }

    #[test]
    fn test_from_malformed_file() {
        let path = temp_path("malformed.json");
        fs::write(&path, "not json").unwrap();

        let result = ProductDocument::from_file(&path, &JsonSerializer);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DocumentError::Decode(_))));
    }
}
