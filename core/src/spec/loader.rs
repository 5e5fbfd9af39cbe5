#![deny(missing_docs)]

//! # Document Loading
//!
//! Reads an API description from disk or memory, validates the minimal
//! top-level shape, and deserializes it into the typed model. Loading
//! happens once per process; every failure here is startup-fatal.

use std::path::Path;

use url::Url;

use crate::error::{SpecError, SpecResult};
use crate::spec::model::ApiDocument;

/// Loads and validates a document from a file path.
///
/// The file may be JSON or YAML; parsing goes through the YAML superset
/// reader either way.
pub fn load_file(path: impl AsRef<Path>) -> SpecResult<ApiDocument> {
    let text = std::fs::read_to_string(path)?;
    load_str(&text)
}

/// Loads and validates a document from source text.
///
/// Parses into a raw value first so shape validation can name the missing
/// field, then deserializes the validated value into the typed model.
pub fn load_str(text: &str) -> SpecResult<ApiDocument> {
    let raw: serde_json::Value = serde_yaml::from_str(text)
        .map_err(|e| SpecError::Parse(format!("failed to parse document: {}", e)))?;
    validate_root(&raw)?;
    serde_json::from_value(raw)
        .map_err(|e| SpecError::Parse(format!("failed to deserialize document: {}", e)))
}

/// Checks the minimal shape every usable document must have: `info`,
/// `paths`, and `components.schemas` objects at the top level.
fn validate_root(raw: &serde_json::Value) -> SpecResult<()> {
    let root = raw
        .as_object()
        .ok_or_else(|| SpecError::Invalid("document root must be an object".to_string()))?;

    if !root.get("info").map_or(false, |v| v.is_object()) {
        return Err(SpecError::Invalid(
            "document missing required 'info' object".to_string(),
        ));
    }
    if !root.get("paths").map_or(false, |v| v.is_object()) {
        return Err(SpecError::Invalid(
            "document missing required 'paths' object".to_string(),
        ));
    }
    let has_schemas = root
        .get("components")
        .and_then(|c| c.get("schemas"))
        .map_or(false, |v| v.is_object());
    if !has_schemas {
        return Err(SpecError::Invalid(
            "document missing required 'components.schemas' object".to_string(),
        ));
    }
    Ok(())
}

/// Returns the base URL: the first entry of the document's server list.
///
/// An empty list is a startup-fatal condition; no retry, no fallback. The
/// entry must parse as an absolute URL.
pub fn base_url(document: &ApiDocument) -> SpecResult<&str> {
    let server = document
        .servers
        .first()
        .ok_or_else(|| SpecError::Invalid("no servers defined".to_string()))?;
    Url::parse(&server.url).map_err(|e| {
        SpecError::Invalid(format!("server url '{}' is not valid: {}", server.url, e))
    })?;
    Ok(&server.url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_DOC: &str = r#"
openapi: 3.0.3
info:
  title: Fortnox API
  version: "1.0"
servers:
  - url: https://api.fortnox.se
paths:
  /3/customers:
    get:
      operationId: list_customers
      responses:
        "200":
          description: ok
components:
  schemas:
    Customer:
      type: object
"#;

    #[test]
    fn test_load_str_accepts_minimal_document() {
        let doc = load_str(MINIMAL_DOC).unwrap();
        assert_eq!(doc.info.title, "Fortnox API");
        assert_eq!(doc.paths.len(), 1);
        assert!(doc.components.schemas.contains_key("Customer"));
    }

    #[test]
    fn test_load_str_accepts_json_input() {
        let json = r#"{
            "openapi": "3.0.3",
            "info": {"title": "Fortnox API", "version": "1.0"},
            "servers": [{"url": "https://api.fortnox.se"}],
            "paths": {},
            "components": {"schemas": {}}
        }"#;
        let doc = load_str(json).unwrap();
        assert_eq!(doc.info.version, "1.0");
        assert!(doc.paths.is_empty());
    }

    #[test]
    fn test_load_str_rejects_unparseable_text() {
        let err = load_str("{ unclosed: [").unwrap_err();
        assert!(matches!(err, SpecError::Parse(_)));
    }

    #[test]
    fn test_load_str_rejects_missing_info() {
        let err = load_str("paths: {}\ncomponents: {schemas: {}}\n").unwrap_err();
        assert!(format!("{}", err).contains("'info'"));
    }

    #[test]
    fn test_load_str_rejects_missing_paths() {
        let err = load_str(
            "info: {title: T, version: '1'}\ncomponents: {schemas: {}}\n",
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("'paths'"));
    }

    #[test]
    fn test_load_str_rejects_missing_component_schemas() {
        let err = load_str("info: {title: T, version: '1'}\npaths: {}\n").unwrap_err();
        assert!(format!("{}", err).contains("'components.schemas'"));

        // A components object without schemas is just as unusable.
        let err = load_str(
            "info: {title: T, version: '1'}\npaths: {}\ncomponents: {responses: {}}\n",
        )
        .unwrap_err();
        assert!(format!("{}", err).contains("'components.schemas'"));
    }

    #[test]
    fn test_load_str_rejects_non_object_root() {
        let err = load_str("- just\n- a\n- list\n").unwrap_err();
        assert!(matches!(err, SpecError::Invalid(_)));
    }

    #[test]
    fn test_base_url_returns_first_server() {
        let yaml = r#"
info: {title: T, version: "1"}
servers:
  - url: https://api.fortnox.se
  - url: https://api.fortnox.se/backup
paths: {}
components: {schemas: {}}
"#;
        let doc = load_str(yaml).unwrap();
        assert_eq!(base_url(&doc).unwrap(), "https://api.fortnox.se");
    }

    #[test]
    fn test_base_url_fails_without_servers() {
        let doc = load_str(
            "info: {title: T, version: '1'}\npaths: {}\ncomponents: {schemas: {}}\n",
        )
        .unwrap();
        let err = base_url(&doc).unwrap_err();
        assert!(format!("{}", err).contains("no servers defined"));
    }

    #[test]
    fn test_base_url_rejects_relative_url() {
        let yaml = r#"
info: {title: T, version: "1"}
servers:
  - url: /3
paths: {}
components: {schemas: {}}
"#;
        let doc = load_str(yaml).unwrap();
        assert!(base_url(&doc).is_err());
    }

    #[test]
    fn test_paths_preserve_document_key_order() {
        let yaml = r#"
info: {title: T, version: "1"}
paths:
  /3/zeta: {}
  /3/alpha: {}
  /3/middle: {}
components: {schemas: {}}
"#;
        let doc = load_str(yaml).unwrap();
        let keys: Vec<&String> = doc.paths.keys().collect();
        assert_eq!(keys, ["/3/zeta", "/3/alpha", "/3/middle"]);
    }
}
