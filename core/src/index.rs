#![deny(missing_docs)]

//! # Endpoint Index
//!
//! Flattens the document's path/method tree into an ordered, immutable
//! collection of endpoint records. The flattening order is the contract:
//! paths in document key order, methods per path in a fixed canonical
//! order. Every listing operation downstream preserves it.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use crate::spec::model::{ApiDocument, OperationObject, ParameterSpec, SchemaObject};

/// HTTP methods the index recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET.
    Get,
    /// POST.
    Post,
    /// PUT.
    Put,
    /// DELETE.
    Delete,
    /// PATCH.
    Patch,
}

impl HttpMethod {
    /// Canonical per-path flattening order. Fixed, not alphabetical and not
    /// document order.
    pub const ORDER: [HttpMethod; 5] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
    ];

    /// Upper-case wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// Parses a method name case-insensitively.
    pub fn parse(raw: &str) -> Option<HttpMethod> {
        match raw.to_ascii_uppercase().as_str() {
            "GET" => Some(HttpMethod::Get),
            "POST" => Some(HttpMethod::Post),
            "PUT" => Some(HttpMethod::Put),
            "DELETE" => Some(HttpMethod::Delete),
            "PATCH" => Some(HttpMethod::Patch),
            _ => None,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One flattened (path, method) operation record.
///
/// The (path, method) pair is the natural key; a path item defines at most
/// one operation per method, so the pair is unique across the index.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    /// Path template, e.g. `/3/customers/{CustomerNumber}`.
    pub path: String,

    /// HTTP method.
    pub method: HttpMethod,

    /// Declared operation identifier, empty when the document omits it.
    /// Not guaranteed unique and never used as a lookup key.
    pub operation_id: String,

    /// Short summary line.
    pub summary: Option<String>,

    /// Longer description.
    pub description: Option<String>,

    /// Declared parameters in document order.
    pub parameters: Vec<ParameterSpec>,

    /// Schema of the first request-body media type, when declared.
    pub request_body_schema: Option<SchemaObject>,

    /// Schema of the preferred success response, when declared.
    pub response_schema: Option<SchemaObject>,

    /// Resource-group labels in document order.
    pub tags: Vec<String>,
}

impl Endpoint {
    /// True when the path template contains a `{placeholder}` segment.
    pub fn has_path_placeholder(&self) -> bool {
        static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();
        let re =
            PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([^}]+)}").expect("Invalid regex"));
        re.is_match(&self.path)
    }
}

/// Response status codes inspected for the success schema, in priority
/// order. No other codes are ever looked at.
const RESPONSE_PRIORITY: [&str; 2] = ["200", "201"];

/// Ordered, immutable collection of flattened endpoints with O(1) keyed
/// lookup.
#[derive(Debug, Clone, Default)]
pub struct EndpointIndex {
    endpoints: Vec<Endpoint>,
    by_key: HashMap<String, usize>,
}

impl EndpointIndex {
    /// Flattens the document into the index.
    ///
    /// Paths iterate in document key order; per path, methods in
    /// `HttpMethod::ORDER`. Built once at startup and never mutated.
    pub fn build(document: &ApiDocument) -> Self {
        let mut endpoints = Vec::new();
        for (path, item) in &document.paths {
            let mut add_op = |method: HttpMethod, op: Option<&OperationObject>| {
                if let Some(op) = op {
                    endpoints.push(flatten_operation(path, method, op));
                }
            };
            add_op(HttpMethod::Get, item.get.as_ref());
            add_op(HttpMethod::Post, item.post.as_ref());
            add_op(HttpMethod::Put, item.put.as_ref());
            add_op(HttpMethod::Delete, item.delete.as_ref());
            add_op(HttpMethod::Patch, item.patch.as_ref());
        }

        let by_key = endpoints
            .iter()
            .enumerate()
            .map(|(position, endpoint)| (endpoint_key(&endpoint.path, endpoint.method), position))
            .collect();

        EndpointIndex { endpoints, by_key }
    }

    /// Exact-key lookup. The path must match the document's path string
    /// byte for byte; the method is already normalized by `HttpMethod`.
    pub fn by_key(&self, path: &str, method: HttpMethod) -> Option<&Endpoint> {
        self.by_key
            .get(&endpoint_key(path, method))
            .map(|&position| &self.endpoints[position])
    }

    /// Read-only view of every endpoint, in construction order.
    pub fn all(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// Number of indexed endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// True when the document defined no operations at all.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}

/// Composite lookup key for the (path, method) pair.
fn endpoint_key(path: &str, method: HttpMethod) -> String {
    format!("{} {}", method.as_str(), path)
}

/// Builds the flat record for one operation.
fn flatten_operation(path: &str, method: HttpMethod, op: &OperationObject) -> Endpoint {
    Endpoint {
        path: path.to_string(),
        method,
        operation_id: op.operation_id.clone().unwrap_or_default(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        parameters: op.parameters.clone(),
        request_body_schema: request_body_schema(op),
        response_schema: response_schema(op),
        tags: op.tags.clone(),
    }
}

/// Schema of the first media-type entry in the request body, map key order.
fn request_body_schema(op: &OperationObject) -> Option<SchemaObject> {
    op.request_body
        .as_ref()?
        .content
        .first()
        .and_then(|(_, media)| media.schema.clone())
}

/// Schema of the preferred success response: the first media-type entry of
/// the `200` response, else the `201` response, else nothing.
fn response_schema(op: &OperationObject) -> Option<SchemaObject> {
    let response = RESPONSE_PRIORITY
        .iter()
        .find_map(|code| op.responses.get(*code))?;
    response
        .content
        .first()
        .and_then(|(_, media)| media.schema.clone())
}
