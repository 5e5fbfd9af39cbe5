#![deny(missing_docs)]

//! # Core Errors
//!
//! Two failure families with different lifecycles: `SpecError` is fatal and
//! surfaces while loading the document at startup; `QueryError` is a
//! recoverable per-call value that query operations return and callers
//! render before issuing further queries.

use derive_more::{Display, From};

/// Fatal errors raised while loading or validating an API document.
#[derive(Debug, Display, From)]
pub enum SpecError {
    /// Wrapper for standard IO errors.
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// The source text could not be parsed as JSON or YAML.
    /// We ignore this for `From<String>` to avoid conflict with Invalid.
    #[from(ignore)]
    #[display("Parse Error: {_0}")]
    Parse(String),

    /// The document parsed but its shape is unusable.
    #[display("Invalid Document: {_0}")]
    Invalid(String),
}

/// Manual implementation of the standard Error trait.
///
/// Implemented manually (instead of `derive(Error)`) because the string
/// variants carry a `String`, which does not implement `std::error::Error`,
/// so an auto-derived `source()` would fail to compile.
impl std::error::Error for SpecError {}

/// Result type alias for load-time operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Recoverable, per-call failures returned by query operations.
///
/// Never raised as a panic and never fatal to the process: the dispatch
/// boundary renders the message and the caller keeps issuing queries.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum QueryError {
    /// The requested endpoint, resource, or schema has no match.
    #[display("Not found: {_0}")]
    NotFound(String),

    /// A required argument was missing or of the wrong shape.
    #[display("Invalid argument: {_0}")]
    InvalidArgument(String),
}

impl QueryError {
    /// NotFound for an endpoint key, pointing at the discovery operations.
    pub fn endpoint_not_found(path: &str, method: &str) -> Self {
        QueryError::NotFound(format!(
            "no endpoint matches {} {}. Use `search` or `listAll` to discover available endpoints.",
            method, path
        ))
    }

    /// NotFound for a resource name, pointing at the group listing.
    pub fn resource_not_found(resource: &str) -> Self {
        QueryError::NotFound(format!(
            "no endpoints match resource '{}'. Use `listResourceGroups` to see the available resource groups.",
            resource
        ))
    }

    /// NotFound for a schema name, pointing at endpoint discovery.
    pub fn schema_not_found(name: &str) -> Self {
        QueryError::NotFound(format!(
            "no schema named '{}' exists in the document. Use `search` to locate endpoints and the schemas they reference.",
            name
        ))
    }
}

/// Manual implementation, mirroring `SpecError`.
impl std::error::Error for QueryError {}

/// Result type alias for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
