#![deny(missing_docs)]

//! # Endpoint Details
//!
//! Exact-key lookup of one endpoint with its parameters partitioned two
//! ways and its schemas embedded in resolved form.

use super::QueryEngine;
use crate::error::{QueryError, QueryResult};
use crate::index::{Endpoint, HttpMethod};
use crate::spec::model::{ParamLocation, ParameterSpec, SchemaObject};

/// Full view of one endpoint.
///
/// The parameter vectors are two independent partitions of the same
/// declared list, each preserving declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDetails<'a> {
    /// The endpoint itself.
    pub endpoint: &'a Endpoint,

    /// Parameters carried in the path template.
    pub path_params: Vec<&'a ParameterSpec>,

    /// Parameters carried in the query string.
    pub query_params: Vec<&'a ParameterSpec>,

    /// Parameters the request must supply.
    pub required_params: Vec<&'a ParameterSpec>,

    /// Parameters the request may omit.
    pub optional_params: Vec<&'a ParameterSpec>,

    /// Request-body schema, resolved to its definition when referenced.
    pub request_schema: Option<&'a SchemaObject>,

    /// Success-response schema, resolved to its definition when referenced.
    pub response_schema: Option<&'a SchemaObject>,
}

impl<'a> QueryEngine<'a> {
    /// Looks up one endpoint by exact path and method.
    ///
    /// The path must match the stored template character for character;
    /// the method is normalized to upper case before the lookup. A miss
    /// is a recoverable [`QueryError::NotFound`] whose message points at
    /// the discovery operations.
    pub fn get_details(&self, path: &str, method: &str) -> QueryResult<EndpointDetails<'a>> {
        let method = HttpMethod::parse(method).ok_or_else(|| {
            QueryError::InvalidArgument(format!(
                "unknown method '{}'; expected one of GET, POST, PUT, DELETE, PATCH",
                method
            ))
        })?;
        let endpoint = self
            .index
            .by_key(path, method)
            .ok_or_else(|| QueryError::endpoint_not_found(path, method.as_str()))?;

        let by_location = |loc: ParamLocation| -> Vec<&'a ParameterSpec> {
            endpoint
                .parameters
                .iter()
                .filter(|p| p.location == loc)
                .collect()
        };
        let by_required = |required: bool| -> Vec<&'a ParameterSpec> {
            endpoint
                .parameters
                .iter()
                .filter(|p| p.required == required)
                .collect()
        };

        Ok(EndpointDetails {
            endpoint,
            path_params: by_location(ParamLocation::Path),
            query_params: by_location(ParamLocation::Query),
            required_params: by_required(true),
            optional_params: by_required(false),
            request_schema: endpoint.request_body_schema.as_ref().map(|s| self.embed(s)),
            response_schema: endpoint.response_schema.as_ref().map(|s| self.embed(s)),
        })
    }

    /// Resolves a reference to its stored definition for embedding.
    ///
    /// An unresolvable reference falls back to the reference itself so
    /// the caller still sees what the document declared.
    fn embed(&self, schema: &'a SchemaObject) -> &'a SchemaObject {
        self.resolver.resolve_schema(schema).unwrap_or(schema)
    }
}
