#![deny(missing_docs)]

//! # Document Model
//!
//! Typed representation of the OpenAPI-shaped source document. Every map the
//! engine is order-sensitive over (paths, request/response content,
//! properties, component schemas) is an `IndexMap`, so document key order
//! survives deserialization and drives iteration everywhere downstream.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Top-level parsed API description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiDocument {
    /// Declared format version string, e.g. `3.0.3`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,

    /// Document metadata.
    pub info: ApiInfo,

    /// Base-URL candidates in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub servers: Vec<Server>,

    /// Path string to path item, in document key order.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,

    /// Shared component registry.
    #[serde(default)]
    pub components: Components,
}

/// Document metadata block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// Human-readable API title.
    pub title: String,

    /// Document version string.
    pub version: String,

    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// One entry of the document's `servers` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Server {
    /// Base URL the API is served from.
    pub url: String,

    /// Optional human-readable label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The operations defined for one path, at most one per supported method.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    /// GET operation, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<OperationObject>,

    /// POST operation, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<OperationObject>,

    /// PUT operation, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<OperationObject>,

    /// DELETE operation, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<OperationObject>,

    /// PATCH operation, if defined.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<OperationObject>,
}

/// The document's description of one HTTP method on one path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationObject {
    /// Declared operation identifier. Intended unique across the document
    /// but not validated as such, so it is never used as a lookup key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// Short summary line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Longer free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Resource-group labels in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Declared parameters in document order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<ParameterSpec>,

    /// Request body declaration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<RequestBody>,

    /// Responses keyed by status-code string, in document order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseObject>,
}

/// Where a parameter is carried in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamLocation {
    /// Inside a path template segment.
    Path,
    /// In the query string.
    Query,
    /// In an HTTP header.
    Header,
    /// In a cookie.
    Cookie,
}

/// One declared operation parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Parameter name as it appears in the request.
    pub name: String,

    /// Location the parameter is carried in.
    #[serde(rename = "in")]
    pub location: ParamLocation,

    /// Whether the request must supply the parameter.
    #[serde(default)]
    pub required: bool,

    /// Value schema, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,

    /// Optional human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Request body declaration, content keyed by media type.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RequestBody {
    /// Whether a body must be supplied.
    #[serde(default)]
    pub required: bool,

    /// Media type to payload description, in document key order.
    #[serde(default)]
    pub content: IndexMap<String, MediaTypeObject>,
}

/// One media-type entry under `content`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MediaTypeObject {
    /// Payload schema, when declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaObject>,
}

/// One response entry keyed by status code.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseObject {
    /// Human-readable response description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Media type to payload description, in document key order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub content: IndexMap<String, MediaTypeObject>,
}

/// Shared component registry; only schemas are consumed by this engine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    /// Schema name to definition, in document key order.
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaObject>,
}

/// A schema node: a `$ref` pointer into `components.schemas` or an inline
/// definition.
///
/// Untagged: a mapping carrying a `$ref` key deserializes as a reference,
/// anything else as an inline definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaObject {
    /// Reference to a named schema in the shared registry.
    Reference(SchemaRef),
    /// Inline schema definition.
    Inline(Box<InlineSchema>),
}

/// A `$ref` pointer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    /// Reference string, e.g. `#/components/schemas/Customer`.
    #[serde(rename = "$ref")]
    pub reference: String,
}

/// Inline schema definition carrying the fields the engine displays.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InlineSchema {
    /// Declared `type`, e.g. `object`, `array`, `string`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,

    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Named properties of object schemas, in document key order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaObject>,

    /// Names of required properties.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    /// Element schema of array schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaObject>>,

    /// Fixed value set of enum schemas.
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,

    /// Lower numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,

    /// Upper numeric bound.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,

    /// Minimum string length.
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,

    /// Maximum string length.
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,

    /// Regex constraint on string values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Declared value format, e.g. `date-time`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Additional-property rule for object schemas.
    #[serde(
        rename = "additionalProperties",
        skip_serializing_if = "Option::is_none"
    )]
    pub additional_properties: Option<AdditionalProperties>,

    /// Any other schema keys (`title`, `example`, `nullable`, composition
    /// keywords), kept verbatim so a stored definition serializes back whole.
    #[serde(flatten, skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, serde_json::Value>,
}

/// `additionalProperties` accepts either a boolean flag or a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// Plain allow/deny flag.
    Flag(bool),
    /// Schema constraining additional property values.
    Schema(Box<SchemaObject>),
}

/// Classification of an inline schema node, used for exhaustive rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// Fixed value set.
    Enum,
    /// Object with named properties.
    Object,
    /// Array of items.
    Array,
    /// Scalar with a declared type.
    Primitive,
    /// No usable type information.
    Untyped,
}

impl InlineSchema {
    /// Classifies the node into exactly one kind.
    ///
    /// A non-empty value set wins over the declared scalar type, so a typed
    /// enum (`type: string` plus `enum`) reads as its value set. Without a
    /// declared type, `properties` implies Object and `items` implies Array.
    pub fn kind(&self) -> SchemaKind {
        if !self.enum_values.is_empty() {
            return SchemaKind::Enum;
        }
        match self.schema_type.as_deref() {
            Some("object") => SchemaKind::Object,
            Some("array") => SchemaKind::Array,
            Some(_) => SchemaKind::Primitive,
            None if !self.properties.is_empty() => SchemaKind::Object,
            None if self.items.is_some() => SchemaKind::Array,
            None => SchemaKind::Untyped,
        }
    }
}
