#![deny(missing_docs)]

//! # Operation Dispatch
//!
//! Maps operation-name requests with JSON arguments onto the query
//! engine and renders the outcome. Recoverable query failures become
//! failure outcomes, not process errors, so a caller driving the
//! dispatcher can keep issuing queries after a miss.

use apidex_core::{
    render_details, render_endpoint_page, render_overview, render_resource_groups,
    render_resource_view, render_schema, render_search, QueryEngine, QueryError, QueryResult,
};
use serde_json::Value;

/// Operation names accepted by [`dispatch`].
pub const OPERATIONS: [&str; 7] = [
    "overview",
    "listAll",
    "getDetails",
    "getByResource",
    "search",
    "listResourceGroups",
    "getSchema",
];

/// Outcome of one dispatched operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Rendered result text.
    Success(String),
    /// Recoverable failure message.
    Failure(String),
}

impl DispatchOutcome {
    /// Final printable text, failures prefixed with a marker.
    pub fn into_text(self) -> String {
        match self {
            DispatchOutcome::Success(text) => text,
            DispatchOutcome::Failure(message) => format!("Error: {}", message),
        }
    }
}

/// Runs one named operation against the engine and renders the result.
///
/// Unknown operation names fail the same recoverable way bad arguments
/// do; nothing here terminates the process.
pub fn dispatch(engine: &QueryEngine<'_>, operation: &str, args: &Value) -> DispatchOutcome {
    let result = match operation {
        "overview" => Ok(render_overview(&engine.overview())),
        "listAll" => list_all(engine, args),
        "getDetails" => get_details(engine, args),
        "getByResource" => get_by_resource(engine, args),
        "search" => search(engine, args),
        "listResourceGroups" => Ok(render_resource_groups(&engine.list_resource_groups())),
        "getSchema" => get_schema(engine, args),
        unknown => Err(QueryError::InvalidArgument(format!(
            "unknown operation '{}'; expected one of: {}",
            unknown,
            OPERATIONS.join(", ")
        ))),
    };
    match result {
        Ok(text) => DispatchOutcome::Success(text),
        Err(error) => DispatchOutcome::Failure(format!("{}", error)),
    }
}

fn list_all(engine: &QueryEngine<'_>, args: &Value) -> QueryResult<String> {
    let method = optional_str(args, "method")?;
    let tag = optional_str(args, "tag")?;
    let limit = optional_limit(args)?;
    Ok(render_endpoint_page(&engine.list_all(method, tag, limit)?))
}

fn get_details(engine: &QueryEngine<'_>, args: &Value) -> QueryResult<String> {
    let path = require_str(args, "path")?;
    let method = require_str(args, "method")?;
    let details = engine.get_details(path, method)?;
    Ok(render_details(&details, engine.resolver()))
}

fn get_by_resource(engine: &QueryEngine<'_>, args: &Value) -> QueryResult<String> {
    let resource = require_str(args, "resource")?;
    Ok(render_resource_view(&engine.get_by_resource(resource)?))
}

fn search(engine: &QueryEngine<'_>, args: &Value) -> QueryResult<String> {
    let keyword = require_str(args, "keyword")?;
    let limit = optional_limit(args)?;
    Ok(render_search(&engine.search(keyword, limit)?))
}

fn get_schema(engine: &QueryEngine<'_>, args: &Value) -> QueryResult<String> {
    let name = require_str(args, "schemaName")?;
    let schema = engine.get_schema(name)?;
    Ok(render_schema(name, schema, engine.resolver()))
}

/// A string argument the operation cannot run without.
fn require_str<'v>(args: &'v Value, key: &str) -> QueryResult<&'v str> {
    match args.get(key) {
        Some(Value::String(text)) => Ok(text),
        Some(Value::Null) | None => Err(QueryError::InvalidArgument(format!(
            "missing required argument '{}'",
            key
        ))),
        Some(other) => Err(QueryError::InvalidArgument(format!(
            "argument '{}' must be a string, got: {}",
            key, other
        ))),
    }
}

/// A string argument that may be absent or null.
fn optional_str<'v>(args: &'v Value, key: &str) -> QueryResult<Option<&'v str>> {
    match args.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(other) => Err(QueryError::InvalidArgument(format!(
            "argument '{}' must be a string, got: {}",
            key, other
        ))),
    }
}

/// The shared optional `limit` argument.
fn optional_limit(args: &Value) -> QueryResult<Option<usize>> {
    match args.get("limit") {
        None | Some(Value::Null) => Ok(None),
        Some(value) => match value.as_u64() {
            Some(n) => Ok(Some(n as usize)),
            None => Err(QueryError::InvalidArgument(format!(
                "argument 'limit' must be a non-negative integer, got: {}",
                value
            ))),
        },
    }
}
