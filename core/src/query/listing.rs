#![deny(missing_docs)]

//! # Endpoint Listing
//!
//! Filtered listing over the full endpoint sequence. Filtering never
//! reorders; the index order is the contract.

use super::QueryEngine;
use crate::error::{QueryError, QueryResult};
use crate::index::{Endpoint, HttpMethod};

/// One page of filtered endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointPage<'a> {
    /// Endpoints after filtering and truncation, index order preserved.
    pub endpoints: Vec<&'a Endpoint>,

    /// Filtered count before truncation.
    pub total: usize,
}

impl EndpointPage<'_> {
    /// True when the page shows fewer endpoints than matched.
    pub fn truncated(&self) -> bool {
        self.endpoints.len() < self.total
    }
}

impl<'a> QueryEngine<'a> {
    /// Lists endpoints with optional filters and truncation.
    ///
    /// The method filter is case-insensitive equality; the tag filter is
    /// exact, case-sensitive membership in the endpoint's tag set. Both
    /// filters AND together. `limit` truncates the filtered sequence and
    /// never reorders; the page still reports the full filtered total so
    /// truncation is detectable.
    pub fn list_all(
        &self,
        method: Option<&str>,
        tag: Option<&str>,
        limit: Option<usize>,
    ) -> QueryResult<EndpointPage<'a>> {
        let method = match method {
            Some(raw) => Some(HttpMethod::parse(raw).ok_or_else(|| {
                QueryError::InvalidArgument(format!(
                    "unknown method '{}'; expected one of GET, POST, PUT, DELETE, PATCH",
                    raw
                ))
            })?),
            None => None,
        };

        let mut endpoints: Vec<&Endpoint> = self
            .index
            .all()
            .iter()
            .filter(|ep| method.map_or(true, |m| ep.method == m))
            .filter(|ep| tag.map_or(true, |t| ep.tags.iter().any(|have| have == t)))
            .collect();
        let total = endpoints.len();
        if let Some(limit) = limit {
            endpoints.truncate(limit);
        }

        Ok(EndpointPage { endpoints, total })
    }
}
