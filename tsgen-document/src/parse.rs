//! Document parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Document, Error, Result, SourceContext};

impl FromStr for Document {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_document(s, "swagger.json")
    }
}

impl Document {
    /// Parse a document from the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_document(&content, &path.display().to_string())
    }

    /// Parse a document from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_document(content, filename)
    }
}

/// Parse a document from content with the given filename for error reporting.
pub fn parse_document(content: &str, filename: &str) -> Result<Document> {
    let source_ctx = SourceContext::new(content, filename);
    let document: Document =
        serde_json::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_document(&document, &source_ctx)?;
    Ok(document)
}

/// Reject document dialects the generator does not read.
fn validate_document(document: &Document, ctx: &SourceContext) -> Result<()> {
    if let Some(version) = &document.openapi {
        return Err(ctx.validation_error_near(
            format!("OpenAPI {} documents are not supported, expected Swagger 2.0", version),
            "\"openapi\"",
        ));
    }

    match &document.swagger {
        Some(version) if !version.starts_with('2') => Err(ctx.validation_error_near(
            format!("unsupported swagger version '{}', expected 2.x", version),
            "\"swagger\"",
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::HttpMethod;

    const PETS: &str = r##"{
  "swagger": "2.0",
  "paths": {
    "/pet/{id}": {
      "get": {
        "tags": ["pet"],
        "summary": "Find pet",
        "parameters": [{"name": "id", "in": "path", "required": true, "type": "string"}],
        "responses": {"200": {"schema": {"$ref": "#/definitions/Pet"}}}
      }
    }
  },
  "definitions": {
    "Pet": {"type": "object", "properties": {"name": {"type": "string"}}}
  }
}"##;

    #[test]
    fn test_parse_minimal_document() {
        let doc: Document = PETS.parse().unwrap();
        assert_eq!(doc.swagger.as_deref(), Some("2.0"));
        assert_eq!(doc.operation_count(), 1);
        assert!(doc.definitions.contains_key("Pet"));

        let (url, method, op) = doc.operations().next().unwrap();
        assert_eq!(url, "/pet/{id}");
        assert_eq!(method, HttpMethod::Get);
        assert_eq!(op.tag(), "pet");
    }

    #[test]
    fn test_parse_error_has_span() {
        let err = Document::from_str_with_filename("{\n  \"paths\": ,\n}", "bad.json").unwrap_err();
        match *err {
            Error::Parse { span, .. } => assert!(span.is_some()),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_openapi_3() {
        let err = Document::from_str(r#"{"openapi": "3.0.1", "paths": {}}"#).unwrap_err();
        assert!(matches!(*err, Error::Validation { .. }));
        assert!(err.to_string().contains("OpenAPI 3.0.1"));
    }

    #[test]
    fn test_rejects_swagger_1() {
        let err = Document::from_str(r#"{"swagger": "1.2"}"#).unwrap_err();
        assert!(err.to_string().contains("1.2"));
    }

    #[test]
    fn test_missing_version_is_accepted() {
        let doc = Document::from_str(r#"{"paths": {}}"#).unwrap();
        assert_eq!(doc.operation_count(), 0);
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PETS.as_bytes()).unwrap();

        let doc = Document::open(file.path()).unwrap();
        assert_eq!(doc.operation_count(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let err = Document::open("/definitely/not/here.json").unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}
