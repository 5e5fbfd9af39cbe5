#![deny(missing_docs)]

//! # Query Engine
//!
//! Pure query operations over one immutable document snapshot.
//!
//! - **overview**: per-method and per-tag aggregation.
//! - **listing**: filtered, truncatable endpoint listing.
//! - **details**: exact-key endpoint lookup with embedded schemas.
//! - **resource**: fuzzy resource matching and action bucketing.
//! - **search**: keyword search across endpoint text fields.
//! - **groups**: tag counting and category breakdown.

pub mod details;
pub mod groups;
pub mod listing;
pub mod overview;
pub mod resource;
pub mod search;

// Re-export public API to keep call sites on one import path.
pub use details::EndpointDetails;
pub use groups::{CategoryGroup, ResourceGroups};
pub use listing::EndpointPage;
pub use overview::ApiOverview;
pub use resource::{ResourceAction, ResourceBuckets, ResourceView};
pub use search::{SearchResults, DEFAULT_SEARCH_LIMIT};

use crate::error::{QueryError, QueryResult};
use crate::index::EndpointIndex;
use crate::resolver::{SchemaResolver, SCHEMA_REF_PREFIX};
use crate::spec::model::{ApiDocument, SchemaObject};

/// Vendor namespace prefix carried by the document's tags.
pub const VENDOR_TAG_PREFIX: &str = "fortnox_";

/// Strips the vendor namespace prefix from a tag, if present.
pub fn strip_tag_prefix(tag: &str) -> &str {
    tag.strip_prefix(VENDOR_TAG_PREFIX).unwrap_or(tag)
}

/// One tag with its endpoint-occurrence count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCount {
    /// Tag name as it appears in the document.
    pub name: String,
    /// Number of endpoints carrying the tag.
    pub count: usize,
}

/// Pure query operations over a loaded document and its built index.
///
/// Construction borrows the immutable snapshot; every operation is a
/// single-step read with no state carried between calls.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    document: &'a ApiDocument,
    index: &'a EndpointIndex,
    resolver: SchemaResolver<'a>,
}

impl<'a> QueryEngine<'a> {
    /// Creates an engine over a loaded document and its index.
    pub fn new(document: &'a ApiDocument, index: &'a EndpointIndex) -> Self {
        QueryEngine {
            document,
            index,
            resolver: SchemaResolver::new(document),
        }
    }

    /// The resolver used for schema lookup and display.
    pub fn resolver(&self) -> &SchemaResolver<'a> {
        &self.resolver
    }

    /// Looks up a component schema by bare name.
    ///
    /// Builds the canonical reference string and delegates to the
    /// resolver; the stored definition comes back verbatim, `$ref` or not.
    pub fn get_schema(&self, name: &str) -> QueryResult<&'a SchemaObject> {
        if name.trim().is_empty() {
            return Err(QueryError::InvalidArgument(
                "schemaName must be a non-empty string".to_string(),
            ));
        }
        let reference = format!("{}{}", SCHEMA_REF_PREFIX, name);
        self.resolver
            .resolve(&reference)
            .ok_or_else(|| QueryError::schema_not_found(name))
    }
}
