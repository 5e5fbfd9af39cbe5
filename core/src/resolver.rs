#![deny(missing_docs)]

//! # Schema Resolution
//!
//! Resolves `$ref` strings against the document's shared schema registry
//! and produces one-line human descriptions of schema nodes. Only local
//! references of the form `#/components/schemas/<name>` resolve; anything
//! else yields `None` and callers degrade gracefully.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::spec::model::{ApiDocument, InlineSchema, SchemaKind, SchemaObject};

/// Prefix every resolvable reference must carry.
pub const SCHEMA_REF_PREFIX: &str = "#/components/schemas/";

/// Description used when a reference target has no description of its own,
/// or when the reference does not resolve at all.
const REFERENCE_FALLBACK: &str = "Schema reference";

/// Resolves references against one document's component schemas.
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    schemas: &'a IndexMap<String, SchemaObject>,
}

impl<'a> SchemaResolver<'a> {
    /// Creates a resolver over the document's shared schema registry.
    pub fn new(document: &'a ApiDocument) -> Self {
        SchemaResolver {
            schemas: &document.components.schemas,
        }
    }

    /// Resolves a reference string of the exact form
    /// `#/components/schemas/<name>`.
    ///
    /// Any other shape, and any unknown name, yields `None`. The stored
    /// definition comes back verbatim, even when it is itself a reference.
    pub fn resolve(&self, reference: &str) -> Option<&'a SchemaObject> {
        let name = reference.strip_prefix(SCHEMA_REF_PREFIX)?;
        if name.is_empty() || name.contains('/') {
            return None;
        }
        self.schemas.get(name)
    }

    /// Follows a node to a registry definition: identity for inline
    /// schemas, one `resolve` step for references.
    pub fn resolve_schema(&self, schema: &'a SchemaObject) -> Option<&'a SchemaObject> {
        match schema {
            SchemaObject::Inline(_) => Some(schema),
            SchemaObject::Reference(r) => self.resolve(&r.reference),
        }
    }

    /// One-line human description of a schema node.
    ///
    /// References resolve first and use the target's own description, with
    /// a fixed fallback when the target has none or the chain dead-ends.
    /// Inline nodes describe themselves, by description when present and
    /// otherwise by kind.
    pub fn describe(&self, schema: &SchemaObject) -> String {
        match schema {
            SchemaObject::Reference(r) => self.describe_reference(&r.reference),
            SchemaObject::Inline(inline) => self.describe_inline(inline),
        }
    }

    /// Walks a reference chain to its first inline target.
    ///
    /// The visited set terminates self-referential and mutually-referential
    /// chains; a cyclic or dead-end chain falls back to the fixed
    /// reference description.
    fn describe_reference(&self, reference: &str) -> String {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = reference;
        while visited.insert(current) {
            match self.resolve(current) {
                Some(SchemaObject::Inline(inline)) => {
                    return match &inline.description {
                        Some(description) => description.clone(),
                        None => REFERENCE_FALLBACK.to_string(),
                    };
                }
                Some(SchemaObject::Reference(next)) => current = &next.reference,
                None => break,
            }
        }
        REFERENCE_FALLBACK.to_string()
    }

    /// Description of an inline node, total over its kind.
    fn describe_inline(&self, inline: &InlineSchema) -> String {
        if let Some(description) = &inline.description {
            return description.clone();
        }
        match inline.kind() {
            SchemaKind::Enum => format!("Enum of {} values", inline.enum_values.len()),
            SchemaKind::Object => describe_object(inline),
            SchemaKind::Array => format!(
                "Array of {}",
                self.item_label(inline.items.as_deref())
            ),
            SchemaKind::Primitive => inline
                .schema_type
                .as_deref()
                .unwrap_or("unknown")
                .to_string(),
            SchemaKind::Untyped => "unknown".to_string(),
        }
    }

    /// Short label for an array's element type.
    fn item_label(&self, items: Option<&SchemaObject>) -> String {
        match items {
            None => "unknown".to_string(),
            Some(SchemaObject::Reference(r)) => reference_name(&r.reference).to_string(),
            Some(SchemaObject::Inline(inline)) => inline
                .schema_type
                .as_deref()
                .unwrap_or("unknown")
                .to_string(),
        }
    }
}

/// Synthesized description of an object schema, naming up to three
/// properties.
fn describe_object(inline: &InlineSchema) -> String {
    if inline.properties.is_empty() {
        return "Object".to_string();
    }
    let names: Vec<&str> = inline
        .properties
        .keys()
        .take(3)
        .map(String::as_str)
        .collect();
    let mut line = format!("Object with properties: {}", names.join(", "));
    if inline.properties.len() > 3 {
        line.push_str(", ...");
    }
    line
}

/// Extracts the trailing name from a reference string.
/// e.g. `#/components/schemas/Customer` -> `Customer`
fn reference_name(reference: &str) -> &str {
    reference.rsplit('/').next().unwrap_or(reference)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::loader::load_str;

    fn sample_document() -> ApiDocument {
        let yaml = r##"
info: {title: T, version: "1"}
paths: {}
components:
  schemas:
    Customer:
      type: object
      description: A customer record
      properties:
        CustomerNumber: {type: string}
        Name: {type: string}
    CustomerList:
      type: array
      items:
        $ref: "#/components/schemas/Customer"
    Address:
      type: object
      properties:
        Street: {type: string}
        City: {type: string}
        ZipCode: {type: string}
        Country: {type: string}
    Status:
      type: string
      enum: [ACTIVE, INACTIVE, BLOCKED]
    CustomerAlias:
      $ref: "#/components/schemas/Customer"
    LoopA:
      $ref: "#/components/schemas/LoopB"
    LoopB:
      $ref: "#/components/schemas/LoopA"
"##;
        load_str(yaml).unwrap()
    }

    #[test]
    fn test_resolve_exact_reference_form_only() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);

        assert!(resolver.resolve("#/components/schemas/Customer").is_some());
        assert!(resolver.resolve("#/components/schemas/Missing").is_none());
        assert!(resolver.resolve("#/components/responses/Customer").is_none());
        assert!(resolver.resolve("#/definitions/Customer").is_none());
        assert!(resolver.resolve("Customer").is_none());
        assert!(resolver.resolve("#/components/schemas/").is_none());
        assert!(resolver
            .resolve("#/components/schemas/Customer/properties/Name")
            .is_none());
    }

    #[test]
    fn test_resolve_returns_stored_definition_verbatim() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);
        let resolved = resolver.resolve("#/components/schemas/Customer").unwrap();
        assert_eq!(resolved, doc.components.schemas.get("Customer").unwrap());

        // An alias stored as a reference comes back as that reference.
        let alias = resolver
            .resolve("#/components/schemas/CustomerAlias")
            .unwrap();
        assert!(matches!(alias, SchemaObject::Reference(_)));
    }

    #[test]
    fn test_resolve_schema_is_identity_for_inline_nodes() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);

        let inline: SchemaObject =
            serde_yaml::from_str("{type: object, properties: {Id: {type: integer}}}").unwrap();
        let resolved = resolver.resolve_schema(&inline).unwrap();
        assert!(std::ptr::eq(resolved, &inline));

        // References take one resolve step to the registry definition.
        let reference: SchemaObject =
            serde_yaml::from_str(r##"$ref: "#/components/schemas/Customer""##).unwrap();
        assert_eq!(
            resolver.resolve_schema(&reference),
            doc.components.schemas.get("Customer")
        );

        // A dangling reference resolves to nothing.
        let dangling: SchemaObject =
            serde_yaml::from_str(r##"$ref: "#/components/schemas/Missing""##).unwrap();
        assert!(resolver.resolve_schema(&dangling).is_none());
    }

    #[test]
    fn test_describe_reference_uses_target_description() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);
        let schema: SchemaObject =
            serde_yaml::from_str(r##"$ref: "#/components/schemas/Customer""##).unwrap();
        assert_eq!(resolver.describe(&schema), "A customer record");
    }

    #[test]
    fn test_describe_reference_falls_back_without_description() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);
        let schema: SchemaObject =
            serde_yaml::from_str(r##"$ref: "#/components/schemas/Address""##).unwrap();
        // Address resolves but has no description of its own.
        assert_eq!(resolver.describe(&schema), "Schema reference");

        let dangling: SchemaObject =
            serde_yaml::from_str(r##"$ref: "#/components/schemas/Missing""##).unwrap();
        assert_eq!(resolver.describe(&dangling), "Schema reference");
    }

    #[test]
    fn test_describe_survives_reference_cycles() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);
        let schema: SchemaObject =
            serde_yaml::from_str(r##"$ref: "#/components/schemas/LoopA""##).unwrap();
        assert_eq!(resolver.describe(&schema), "Schema reference");
    }

    #[test]
    fn test_describe_inline_kinds() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);

        let object: SchemaObject = serde_yaml::from_str(
            "{type: object, properties: {A: {type: string}, B: {type: string}}}",
        )
        .unwrap();
        assert_eq!(resolver.describe(&object), "Object with properties: A, B");

        let wide = doc.components.schemas.get("Address").unwrap();
        assert_eq!(
            resolver.describe(wide),
            "Object with properties: Street, City, ZipCode, ..."
        );

        let array = doc.components.schemas.get("CustomerList").unwrap();
        assert_eq!(resolver.describe(array), "Array of Customer");

        let status = doc.components.schemas.get("Status").unwrap();
        assert_eq!(resolver.describe(status), "Enum of 3 values");

        let primitive: SchemaObject = serde_yaml::from_str("{type: string}").unwrap();
        assert_eq!(resolver.describe(&primitive), "string");

        let untyped: SchemaObject = serde_yaml::from_str("{}").unwrap();
        assert_eq!(resolver.describe(&untyped), "unknown");
    }

    #[test]
    fn test_describe_prefers_own_description() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);
        let schema: SchemaObject =
            serde_yaml::from_str("{type: array, description: All open invoices}").unwrap();
        assert_eq!(resolver.describe(&schema), "All open invoices");
    }

    #[test]
    fn test_describe_array_of_inline_items() {
        let doc = sample_document();
        let resolver = SchemaResolver::new(&doc);
        let schema: SchemaObject =
            serde_yaml::from_str("{type: array, items: {type: integer}}").unwrap();
        assert_eq!(resolver.describe(&schema), "Array of integer");

        let bare: SchemaObject = serde_yaml::from_str("{type: array}").unwrap();
        assert_eq!(resolver.describe(&bare), "Array of unknown");
    }
}
