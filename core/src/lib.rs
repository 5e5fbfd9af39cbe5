#![deny(missing_docs)]

//! # Apidex Core
//!
//! Core library for indexing and querying API description documents.

/// Shared error types.
pub mod error;

/// Document model and loading.
pub mod spec;

/// Flat endpoint index over a loaded document.
pub mod index;

/// Schema reference resolution and description.
pub mod resolver;

/// Query operations over one document snapshot.
pub mod query;

/// Markdown rendering of query results.
pub mod render;

pub use error::{QueryError, QueryResult, SpecError, SpecResult};
pub use index::{Endpoint, EndpointIndex, HttpMethod};
pub use query::{
    ApiOverview, CategoryGroup, EndpointDetails, EndpointPage, QueryEngine, ResourceAction,
    ResourceBuckets, ResourceGroups, ResourceView, SearchResults, TagCount,
};
pub use render::{
    render_details, render_endpoint_page, render_overview, render_resource_groups,
    render_resource_view, render_schema, render_search,
};
pub use resolver::SchemaResolver;
pub use spec::{base_url, load_file, load_str, ApiDocument};
